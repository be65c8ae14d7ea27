//! Entities
//!
//! Everything drawn on the map that is not terrain: the player, monsters,
//! items, stairs and remains. Entities carry optional components directly
//! and are addressed through [`EntityId`]s in an [`EntityRegistry`].

mod components;
mod registry;

pub use components::{Ai, DeathKind, Fighter, Item};
pub use registry::EntityRegistry;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// A map coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn offset(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Euclidean distance
    pub fn distance_to(&self, other: Position) -> f64 {
        let dx = f64::from(other.x - self.x);
        let dy = f64::from(other.y - self.y);
        (dx * dx + dy * dy).sqrt()
    }
}

/// Stable entity handle, unique within a level's registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u32);

/// Glyph palette
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Color {
    #[default]
    White,
    LightestGrey,
    LightGrey,
    DarkestGrey,
    DarkestGreen,
    LightGreen,
    LightPink,
    Black,
}

/// Draw layer; floor entities are drawn beneath actors
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum RenderLayer {
    Floor,
    #[default]
    Actor,
}

/// A thing on the map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub pos: Position,
    pub glyph: char,
    pub color: Color,
    pub name: String,
    pub blocks: bool,
    pub layer: RenderLayer,
    pub fighter: Option<Fighter>,
    pub ai: Option<Ai>,
    pub item: Option<Item>,
}

impl Entity {
    /// Non-blocking actor-layer entity with no components
    ///
    /// The id is assigned when the entity is inserted into a registry.
    pub fn new(pos: Position, glyph: char, name: impl Into<String>, color: Color) -> Self {
        Self {
            id: EntityId(0),
            pos,
            glyph,
            color,
            name: name.into(),
            blocks: false,
            layer: RenderLayer::Actor,
            fighter: None,
            ai: None,
            item: None,
        }
    }

    pub fn blocking(mut self) -> Self {
        self.blocks = true;
        self
    }

    pub fn with_fighter(mut self, fighter: Fighter) -> Self {
        self.fighter = Some(fighter);
        self
    }

    pub fn with_ai(mut self, ai: Ai) -> Self {
        self.ai = Some(ai);
        self
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.item = Some(item);
        self
    }

    pub fn on_layer(mut self, layer: RenderLayer) -> Self {
        self.layer = layer;
        self
    }

    /// Whether this entity can still fight
    pub fn is_alive(&self) -> bool {
        self.fighter.as_ref().is_some_and(|f| f.hp > 0)
    }

    pub fn distance_to(&self, pos: Position) -> f64 {
        self.pos.distance_to(pos)
    }
}
