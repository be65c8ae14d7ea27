//! Monster AI
//!
//! One entry point, [`take_turn`], dispatches on the entity's [`Ai`].

use crate::action::move_towards;
use crate::combat::{self, status};
use crate::entity::{Ai, EntityId};
use crate::gameloop::GameState;

/// AI action result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiAction {
    /// No Ai, or one that does not act on its own
    None,
    /// Out of the player's sight, or the way was blocked
    Waited,
    /// Stepped by this delta
    Moved(i32, i32),
    AttackedPlayer,
    /// Confused and stepped at random
    Stumbled,
    /// Confused and hurt itself
    HurtItself,
    /// Confusion wore off
    Recovered,
}

/// Give one entity its turn
pub fn take_turn(state: &mut GameState, id: EntityId) -> AiAction {
    match state.entities.get(id).and_then(|e| e.ai.as_ref()) {
        None | Some(Ai::PlayerControlled) => AiAction::None,
        Some(Ai::Basic) => basic_turn(state, id),
        Some(Ai::Confused { .. }) => status::confused_turn(state, id),
    }
}

/// Approach the player and attack when adjacent
///
/// A monster acts only while its cell is in the player's field of view,
/// standing in for "the monster can see the player".
fn basic_turn(state: &mut GameState, id: EntityId) -> AiAction {
    let Some(pos) = state.entities.get(id).map(|e| e.pos) else {
        return AiAction::None;
    };
    if !state.is_visible(pos) {
        return AiAction::Waited;
    }

    let target = state.player_pos();
    if pos.distance_to(target) >= 2.0 {
        if move_towards(state, id, target) {
            let now = state.entities.get(id).map_or(pos, |e| e.pos);
            return AiAction::Moved(now.x - pos.x, now.y - pos.y);
        }
        return AiAction::Waited;
    }

    let player_alive = state.player_entity().is_some_and(|p| p.is_alive());
    if player_alive {
        let player = state.player;
        combat::attack(state, id, player);
        return AiAction::AttackedPlayer;
    }
    AiAction::Waited
}
