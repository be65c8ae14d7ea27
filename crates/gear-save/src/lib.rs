//! gear-save: Save/restore system for GEAR
//!
//! A save file is one JSON document: a small [`SaveHeader`] followed by the
//! whole [`GameState`]. The header is checked before the state is trusted.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use gear_core::GameState;

/// Current save file format version
pub const SAVE_VERSION: u32 = 1;

/// File name used inside the data directory
pub const SAVE_FILE_NAME: &str = "savegame.json";

/// Save/restore errors
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("No saved game to load.")]
    NotFound,

    #[error("Invalid save file header")]
    InvalidHeader,

    #[error("Incompatible save version: expected {expected}, found {found}")]
    IncompatibleVersion { expected: u32, found: u32 },
}

/// Save file header for versioning
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveHeader {
    /// Magic identifier
    pub magic: String,
    /// Save format version
    pub version: u32,
    /// Floor the player was on
    pub dungeon_level: u32,
    pub corruption: u32,
    pub turns: u64,
    /// Seconds since the Unix epoch
    pub timestamp: u64,
}

impl SaveHeader {
    const MAGIC: &'static str = "GEAR";

    pub fn new(state: &GameState) -> Self {
        Self {
            magic: Self::MAGIC.to_string(),
            version: SAVE_VERSION,
            dungeon_level: state.dungeon_level,
            corruption: state.corruption(),
            turns: state.turns,
            timestamp: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0),
        }
    }

    pub fn validate(&self) -> Result<(), SaveError> {
        if self.magic != Self::MAGIC {
            return Err(SaveError::InvalidHeader);
        }
        if self.version != SAVE_VERSION {
            return Err(SaveError::IncompatibleVersion {
                expected: SAVE_VERSION,
                found: self.version,
            });
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct SaveFileRef<'a> {
    header: SaveHeader,
    state: &'a GameState,
}

/// Complete save file structure
#[derive(Deserialize)]
pub struct SaveFile {
    pub header: SaveHeader,
    pub state: GameState,
}

#[derive(Deserialize)]
struct HeaderOnly {
    header: SaveHeader,
}

/// Save game state to a file, creating parent directories as needed
pub fn save_game(state: &GameState, path: impl AsRef<Path>) -> Result<(), SaveError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let save_file = SaveFileRef {
        header: SaveHeader::new(state),
        state,
    };
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer(&mut writer, &save_file)?;
    writer.flush()?;

    info!(
        "saved floor {} after {} turns to {}",
        state.dungeon_level,
        state.turns,
        path.display()
    );
    Ok(())
}

/// Load game state from a file
///
/// The returned state has its field of view recomputed and is ready to play.
pub fn load_game(path: impl AsRef<Path>) -> Result<GameState, SaveError> {
    let path = path.as_ref();
    let reader = BufReader::new(open(path)?);
    let save_file: SaveFile = serde_json::from_reader(reader)?;
    save_file.header.validate()?;

    let mut state = save_file.state;
    state.refresh_visibility();
    info!(
        "loaded floor {} after {} turns from {}",
        state.dungeon_level,
        state.turns,
        path.display()
    );
    Ok(state)
}

/// Load only the header from a save file
pub fn load_header(path: impl AsRef<Path>) -> Result<SaveHeader, SaveError> {
    let reader = BufReader::new(open(path.as_ref())?);
    let file: HeaderOnly = serde_json::from_reader(reader)?;
    file.header.validate()?;
    Ok(file.header)
}

fn open(path: &Path) -> Result<File, SaveError> {
    File::open(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => SaveError::NotFound,
        _ => SaveError::Io(err),
    })
}

/// Check if a save file exists
pub fn save_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().is_file()
}

/// Delete a save file; a missing file is not an error
pub fn delete_save(path: impl AsRef<Path>) -> Result<(), SaveError> {
    match fs::remove_file(path.as_ref()) {
        Ok(()) => {
            info!("deleted save {}", path.as_ref().display());
            Ok(())
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(err) => {
            warn!("could not delete save {}: {err}", path.as_ref().display());
            Err(err.into())
        }
    }
}

/// Directory holding GEAR's data files
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("gear");
    path
}

/// Default location of the save file
pub fn default_save_path() -> PathBuf {
    data_dir().join(SAVE_FILE_NAME)
}
