//! Frontend boundary
//!
//! The game never touches a terminal. A frontend implements [`Display`] to
//! draw a [`GameState`] and [`Input`] to hand back player decisions,
//! including the nested prompts for item selection and targeting.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::action::Direction;
use crate::entity::{EntityId, Position};
use crate::gameloop::GameState;
use crate::vision::VisibleSet;

/// Draws the game
pub trait Display {
    /// Called once per loop iteration, before input is polled
    fn render(&mut self, state: &GameState);
}

/// Supplies player decisions
pub trait Input {
    /// Wait for the next top-level event
    fn poll(&mut self) -> InputEvent;

    /// Ask for an inventory letter; `None` cancels
    fn choose_item(&mut self, state: &GameState, purpose: InventoryPurpose) -> Option<char>;

    /// Ask for a target; blocks until the player confirms or cancels
    fn poll_target(&mut self, state: &GameState, request: &TargetRequest) -> TargetChoice;
}

/// Top-level input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Move(Direction),
    Wait,
    PickUp,
    OpenInventoryUse,
    OpenInventoryDrop,
    DescendStairs,
    Exit,
    ToggleFullscreen,
    /// Nothing the game cares about (mouse motion, resize, unbound key)
    None,
}

/// Why an inventory menu is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InventoryPurpose {
    Use,
    Drop,
}

impl InventoryPurpose {
    pub const fn header(&self) -> &'static str {
        match self {
            InventoryPurpose::Use => {
                "Press the key next to an item to use it, or any other to cancel."
            }
            InventoryPurpose::Drop => {
                "Press the key next to an item to drop it, or any other to cancel."
            }
        }
    }
}

/// What the targeting prompt is looking for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetKind {
    Tile,
    Entity,
}

/// Parameters of a targeting prompt
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetRequest {
    pub kind: TargetKind,
    /// The viewer; ranges are measured from here
    pub origin: Position,
    pub max_range: Option<f64>,
}

impl TargetRequest {
    /// A target must be in view and, if a range is set, within it
    pub fn accepts(&self, visible: &VisibleSet, pos: Position) -> bool {
        visible.contains(pos)
            && self
                .max_range
                .is_none_or(|range| self.origin.distance_to(pos) <= range)
    }
}

/// Answer to a targeting prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetChoice {
    Tile(Position),
    Entity(EntityId),
    Cancelled,
}

/// Input replayed from queues
///
/// Once a queue runs dry it answers with `Exit`, `None` or `Cancelled`, so
/// a script can never stall the loop.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    events: VecDeque<InputEvent>,
    items: VecDeque<Option<char>>,
    targets: VecDeque<TargetChoice>,
}

impl ScriptedInput {
    pub fn new(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn with_items(mut self, items: impl IntoIterator<Item = Option<char>>) -> Self {
        self.items.extend(items);
        self
    }

    pub fn with_targets(mut self, targets: impl IntoIterator<Item = TargetChoice>) -> Self {
        self.targets.extend(targets);
        self
    }

    pub fn is_exhausted(&self) -> bool {
        self.events.is_empty()
    }
}

impl Input for ScriptedInput {
    fn poll(&mut self) -> InputEvent {
        self.events.pop_front().unwrap_or(InputEvent::Exit)
    }

    fn choose_item(&mut self, _state: &GameState, _purpose: InventoryPurpose) -> Option<char> {
        self.items.pop_front().flatten()
    }

    fn poll_target(&mut self, _state: &GameState, _request: &TargetRequest) -> TargetChoice {
        self.targets.pop_front().unwrap_or(TargetChoice::Cancelled)
    }
}
