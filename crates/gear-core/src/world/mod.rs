//! Game configuration

mod options;

pub use options::{GameOptions, OptionsError};
