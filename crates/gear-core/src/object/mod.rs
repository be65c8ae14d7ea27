//! Items and the inventory
//!
//! Item kinds found in the dungeon, the effects they carry, and the
//! player's bounded inventory.

mod effects;
mod inventory;

pub use effects::{EffectOutcome, closest_monster, use_effect};
pub use inventory::{Inventory, InventoryFull};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::entity::{Color, Entity, Item, Position};

/// What using an item does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum ItemEffect {
    /// Restore some of the player's hp
    Heal,
    /// Strike the closest visible monster
    DamageNearest,
    /// Confuse a chosen monster
    Confuse,
    /// Damage every fighter around a chosen cell
    AreaDamage,
}

/// Item kinds generated in rooms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum ItemKind {
    #[strum(to_string = "oil can")]
    OilCan,
    #[strum(to_string = "glitch script")]
    GlitchScript,
    #[strum(to_string = "unstable anti-matter")]
    AntiMatter,
    #[strum(to_string = "database corrupt script")]
    CorruptScript,
}

impl ItemKind {
    /// Pick a kind from a `0..=1000` roll
    pub const fn from_roll(roll: i32) -> Self {
        if roll < 700 {
            ItemKind::OilCan
        } else if roll < 800 {
            ItemKind::GlitchScript
        } else if roll < 900 {
            ItemKind::AntiMatter
        } else {
            ItemKind::CorruptScript
        }
    }

    pub const fn effect(&self) -> ItemEffect {
        match self {
            ItemKind::OilCan => ItemEffect::Heal,
            ItemKind::GlitchScript => ItemEffect::Confuse,
            ItemKind::AntiMatter => ItemEffect::AreaDamage,
            ItemKind::CorruptScript => ItemEffect::DamageNearest,
        }
    }

    pub const fn glyph(&self) -> char {
        match self {
            ItemKind::OilCan => '!',
            ItemKind::GlitchScript | ItemKind::CorruptScript => '#',
            ItemKind::AntiMatter => ',',
        }
    }

    pub const fn color(&self) -> Color {
        match self {
            ItemKind::OilCan | ItemKind::AntiMatter => Color::Black,
            ItemKind::GlitchScript | ItemKind::CorruptScript => Color::LightGreen,
        }
    }

    /// Build the map entity for this kind
    pub fn spawn(&self, pos: Position) -> Entity {
        Entity::new(pos, self.glyph(), self.to_string(), self.color())
            .with_item(Item::with_effect(self.effect()))
    }
}
