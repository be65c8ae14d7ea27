//! Entity components

use serde::{Deserialize, Serialize};

use crate::object::ItemEffect;

/// Which transition runs when a fighter's hp reaches zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathKind {
    Player,
    Monster,
}

/// Combat statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fighter {
    pub max_hp: i32,
    pub hp: i32,
    pub defense: i32,
    pub power: i32,
    pub death: DeathKind,
}

impl Fighter {
    pub const fn new(hp: i32, defense: i32, power: i32, death: DeathKind) -> Self {
        Self {
            max_hp: hp,
            hp,
            defense,
            power,
            death,
        }
    }

    /// Restore hp, never above `max_hp`
    pub fn heal(&mut self, amount: i32) {
        self.hp = (self.hp + amount.max(0)).min(self.max_hp);
    }

    pub const fn is_full_health(&self) -> bool {
        self.hp >= self.max_hp
    }
}

/// Decision procedure for an entity's turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ai {
    /// Driven by input, skipped by the monster pass
    PlayerControlled,
    /// Approach and attack the player when visible
    Basic,
    /// Stumble about until `turns_left` runs out, then resume `previous`
    Confused { previous: Box<Ai>, turns_left: u32 },
}

impl Ai {
    /// Wrap this Ai in confusion
    ///
    /// Confusing an already confused Ai only resets the countdown; the
    /// wrapped Ai stays the one from before the first confusion.
    pub fn confuse(self, turns: u32) -> Ai {
        match self {
            Ai::Confused { previous, .. } => Ai::Confused {
                previous,
                turns_left: turns,
            },
            other => Ai::Confused {
                previous: Box::new(other),
                turns_left: turns,
            },
        }
    }

    pub const fn is_confused(&self) -> bool {
        matches!(self, Ai::Confused { .. })
    }
}

/// Makes an entity collectable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Item {
    pub effect: Option<ItemEffect>,
    pub reusable: bool,
}

impl Item {
    pub const fn with_effect(effect: ItemEffect) -> Self {
        Self {
            effect: Some(effect),
            reusable: false,
        }
    }
}
