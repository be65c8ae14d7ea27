//! Map tiles

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Per-cell terrain flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct TileFlags: u8 {
        const BLOCKED = 0x01;
        const BLOCKS_SIGHT = 0x02;
        const EXPLORED = 0x04;
    }
}

impl Serialize for TileFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TileFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u8::deserialize(deserializer)?;
        Ok(TileFlags::from_bits_truncate(bits))
    }
}

/// A single map cell
///
/// Passability and sight blocking only change while a level is carved;
/// `explored` only ever goes from false to true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tile {
    flags: TileFlags,
}

impl Tile {
    /// Solid rock: blocks movement and sight
    pub const fn wall() -> Self {
        Self {
            flags: TileFlags::BLOCKED.union(TileFlags::BLOCKS_SIGHT),
        }
    }

    pub const fn floor() -> Self {
        Self {
            flags: TileFlags::empty(),
        }
    }

    /// Build a tile; sight blocking defaults to the movement flag
    pub fn new(blocked: bool, blocks_sight: Option<bool>) -> Self {
        let mut flags = TileFlags::empty();
        flags.set(TileFlags::BLOCKED, blocked);
        flags.set(TileFlags::BLOCKS_SIGHT, blocks_sight.unwrap_or(blocked));
        Self { flags }
    }

    pub const fn blocked(&self) -> bool {
        self.flags.contains(TileFlags::BLOCKED)
    }

    pub const fn blocks_sight(&self) -> bool {
        self.flags.contains(TileFlags::BLOCKS_SIGHT)
    }

    pub const fn explored(&self) -> bool {
        self.flags.contains(TileFlags::EXPLORED)
    }

    pub fn set_explored(&mut self) {
        self.flags.insert(TileFlags::EXPLORED);
    }

    /// Open the cell for movement and sight, keeping its explored state
    pub fn carve(&mut self) {
        self.flags.remove(TileFlags::BLOCKED | TileFlags::BLOCKS_SIGHT);
    }
}
