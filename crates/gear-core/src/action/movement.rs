//! Movement and bump attacks

use crate::combat;
use crate::entity::{EntityId, Position};
use crate::gameloop::GameState;

use super::{ActionResult, Direction};

/// Move the player, or attack a fighter standing in the way
///
/// Any entity with a Fighter on the target cell is attacked, whether or not
/// it blocks movement.
pub fn move_or_attack(state: &mut GameState, dir: Direction) -> ActionResult {
    let (dx, dy) = dir.delta();
    let player = state.player;
    let target = state.player_pos().offset(dx, dy);

    let defender = state
        .entities
        .entities_at(target)
        .find(|e| e.fighter.is_some() && e.id != player)
        .map(|e| e.id);

    if let Some(defender) = defender {
        combat::attack(state, player, defender);
        state.mark_fov_dirty();
        return ActionResult::Success;
    }

    if move_by(state, player, dx, dy) {
        state.mark_fov_dirty();
        ActionResult::Success
    } else {
        ActionResult::Failed("Something blocks your way.".to_string())
    }
}

/// Step an entity by `(dx, dy)` unless the destination is blocked
pub fn move_by(state: &mut GameState, id: EntityId, dx: i32, dy: i32) -> bool {
    let Some(entity) = state.entities.get(id) else {
        return false;
    };
    let dest = entity.pos.offset(dx, dy);
    if state.entities.is_blocked(&state.grid, dest) {
        return false;
    }
    if let Some(entity) = state.entities.get_mut(id) {
        entity.pos = dest;
    }
    true
}

/// Step one cell along the rounded unit vector towards `target`
pub fn move_towards(state: &mut GameState, id: EntityId, target: Position) -> bool {
    let Some(entity) = state.entities.get(id) else {
        return false;
    };
    let dx = target.x - entity.pos.x;
    let dy = target.y - entity.pos.y;
    let distance = entity.pos.distance_to(target);
    if distance == 0.0 {
        return false;
    }
    let step_x = (f64::from(dx) / distance).round() as i32;
    let step_y = (f64::from(dy) / distance).round() as i32;
    move_by(state, id, step_x, step_y)
}
