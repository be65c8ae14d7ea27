//! gear-core: Core game logic for GEAR
//!
//! This crate contains all game logic with no terminal I/O. Rendering and
//! input are reached through the [`interface::Display`] and
//! [`interface::Input`] traits, so the whole game can be driven headless.

pub mod action;
pub mod combat;
pub mod consts;
pub mod dungeon;
pub mod entity;
pub mod gameloop;
pub mod interface;
pub mod message;
pub mod monster;
pub mod object;
pub mod rng;
pub mod vision;
pub mod world;

pub use gameloop::{GameLoop, GameLoopResult, GamePhase, GameState};
pub use rng::GameRng;
