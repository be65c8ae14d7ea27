//! Player action system
//!
//! Commands the player can issue and the handlers that carry them out.

mod apply;
mod level_change;
mod movement;
mod pickup;

pub use apply::use_item;
pub use level_change::{descend, next_level};
pub use movement::{move_by, move_or_attack, move_towards};
pub use pickup::{drop, pick_up};

use strum::{Display, EnumIter};

/// Player command types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Step, or attack whatever fighter stands there
    Move(Direction),
    Wait,
    PickUp,
    /// Use the item under this inventory letter
    Use(char),
    /// Drop the item under this inventory letter
    Drop(char),
    Descend,
    Exit,
}

/// Movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Direction {
    /// Get the delta (dx, dy) for this direction
    pub const fn delta(&self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::NorthEast => (1, -1),
            Direction::NorthWest => (-1, -1),
            Direction::SouthEast => (1, 1),
            Direction::SouthWest => (-1, 1),
        }
    }

    /// Direction for a unit delta, `None` for zero or longer deltas
    pub const fn from_delta(dx: i32, dy: i32) -> Option<Self> {
        match (dx, dy) {
            (0, -1) => Some(Direction::North),
            (0, 1) => Some(Direction::South),
            (1, 0) => Some(Direction::East),
            (-1, 0) => Some(Direction::West),
            (1, -1) => Some(Direction::NorthEast),
            (-1, -1) => Some(Direction::NorthWest),
            (1, 1) => Some(Direction::SouthEast),
            (-1, 1) => Some(Direction::SouthWest),
            _ => None,
        }
    }
}

/// Result of executing a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionResult {
    /// Action completed successfully, time passes
    Success,
    /// Action completed but no time passes
    NoTime,
    /// The player backed out of a prompt
    Cancelled,
    /// Rejected with a message; no time passes
    Failed(String),
    /// Save and leave the game
    Save,
}
