//! Taking the stairs

use log::debug;

use crate::dungeon::generate_level;
use crate::gameloop::GameState;
use crate::message::Tone;

use super::ActionResult;

/// Take the stairs if the player stands on them
///
/// Changing level takes no time; the new floor's monsters first act after
/// the player's next action.
pub fn descend(state: &mut GameState) -> ActionResult {
    if state.stairs_pos() != Some(state.player_pos()) {
        return ActionResult::Failed("There are no stairs here.".to_string());
    }
    next_level(state);
    ActionResult::NoTime
}

/// Generate the next floor and move the player onto it
pub fn next_level(state: &mut GameState) {
    state.message(
        "You head up the stairs, onto the next level of the Nexus.",
        Tone::Descend,
    );
    state.dungeon_level += 1;
    let level = generate_level(&state.options.generation, &mut state.rng);
    debug!(
        "entering floor {} with {} rooms",
        state.dungeon_level,
        level.rooms.len()
    );
    state.enter_level(level);
}
