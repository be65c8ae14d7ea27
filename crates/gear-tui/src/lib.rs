//! gear-tui: Terminal UI layer using ratatui
//!
//! Provides the terminal frontend for the game.

pub mod app;
pub mod camera;
pub mod distortion;
pub mod input;
pub mod theme;
pub mod widgets;

pub use app::{App, EventSource, MenuChoice, ScriptedEvents, TerminalEvents};
pub use theme::Theme;
