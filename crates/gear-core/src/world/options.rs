//! Game options and configuration
//!
//! Options are read from a TOML file. Every field has a default, so a config
//! file only needs the keys it changes:
//!
//! ```toml
//! torch_radius = 8
//!
//! [generation]
//! max_rooms = 40
//! room_max_size = 12
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{
    FOV_LIGHT_WALLS, MAX_CORRUPTION, MAX_MAP_SIDE, MESSAGE_LOG_HEIGHT, TORCH_RADIUS,
};
use crate::dungeon::GenerationConfig;

/// User-configurable game options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameOptions {
    pub torch_radius: i32,
    pub light_walls: bool,
    pub message_log_height: usize,
    pub max_corruption: u32,
    /// Map size, room bounds, population caps and regeneration policy
    pub generation: GenerationConfig,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            torch_radius: TORCH_RADIUS,
            light_walls: FOV_LIGHT_WALLS,
            message_log_height: MESSAGE_LOG_HEIGHT,
            max_corruption: MAX_CORRUPTION,
            generation: GenerationConfig::default(),
        }
    }
}

impl GameOptions {
    /// Load and validate options from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self, OptionsError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_config(&contents)
    }

    /// Parse and validate options from TOML text
    pub fn parse_config(contents: &str) -> Result<Self, OptionsError> {
        let options: GameOptions = toml::from_str(contents)?;
        options.validate()?;
        Ok(options)
    }

    pub fn to_config_string(&self) -> Result<String, OptionsError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject values the generator or the vision engine cannot work with
    pub fn validate(&self) -> Result<(), OptionsError> {
        let g = &self.generation;
        if g.room_min_size < 3 {
            return Err(OptionsError::InvalidValue(
                "room_min_size".into(),
                g.room_min_size.to_string(),
            ));
        }
        if g.room_max_size < g.room_min_size {
            return Err(OptionsError::InvalidValue(
                "room_max_size".into(),
                g.room_max_size.to_string(),
            ));
        }
        if g.width < g.room_max_size + 2 || g.width > MAX_MAP_SIDE {
            return Err(OptionsError::InvalidValue("width".into(), g.width.to_string()));
        }
        if g.height < g.room_max_size + 2 || g.height > MAX_MAP_SIDE {
            return Err(OptionsError::InvalidValue("height".into(), g.height.to_string()));
        }
        if self.torch_radius < 1 {
            return Err(OptionsError::InvalidValue(
                "torch_radius".into(),
                self.torch_radius.to_string(),
            ));
        }
        if self.message_log_height == 0 {
            return Err(OptionsError::InvalidValue(
                "message_log_height".into(),
                "0".into(),
            ));
        }
        Ok(())
    }
}

/// Options loading error
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Could not write options: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid value '{1}' for option '{0}'")]
    InvalidValue(String, String),
}
