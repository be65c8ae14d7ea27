//! Monsters
//!
//! Monster kinds and their turn logic.

mod ai;
mod kinds;

pub use ai::{AiAction, take_turn};
pub use kinds::{MonsterKind, player_entity};
