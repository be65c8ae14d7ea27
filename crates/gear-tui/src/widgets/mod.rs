//! Widgets for the game screen

mod map;
mod menu;
mod messages;
mod status;

pub use map::{Cursor, MapWidget};
pub use menu::{MenuWidget, inventory_options};
pub use messages::{MessagesWidget, wrap_words};
pub use status::{Bar, StatusWidget};
