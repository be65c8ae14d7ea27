//! Item effects
//!
//! Each effect either runs to completion or is cancelled before changing
//! anything; a cancelled effect leaves the item in the inventory.

use crate::combat::{self, status};
use crate::consts::{
    CORRUPT_DAMAGE, CORRUPT_RANGE, GLITCH_RANGE, GLITCH_TURNS, GRAVITY_DAMAGE, GRAVITY_RADIUS,
    HEAL_AMOUNT,
};
use crate::entity::{EntityId, Position};
use crate::gameloop::GameState;
use crate::interface::{Input, TargetChoice, TargetKind, TargetRequest};
use crate::message::Tone;

use super::ItemEffect;

/// Whether an effect went off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectOutcome {
    Used,
    Cancelled,
}

/// Run an item effect for the player
pub fn use_effect(
    state: &mut GameState,
    effect: ItemEffect,
    input: &mut dyn Input,
) -> EffectOutcome {
    match effect {
        ItemEffect::Heal => repair(state),
        ItemEffect::DamageNearest => corrupt_nearest(state),
        ItemEffect::Confuse => glitch(state, input),
        ItemEffect::AreaDamage => gravity_well(state, input),
    }
}

fn repair(state: &mut GameState) -> EffectOutcome {
    let player = state.player;
    let Some(fighter) = state.entities.get(player).and_then(|e| e.fighter) else {
        return EffectOutcome::Cancelled;
    };
    if fighter.is_full_health() {
        state.message("You do not require repair.", Tone::Warning);
        return EffectOutcome::Cancelled;
    }

    state.message(
        "The magic oil begins to repair your damaged systems.",
        Tone::Magic,
    );
    let amount = state.rng.roll(HEAL_AMOUNT);
    combat::heal(state, player, amount);
    EffectOutcome::Used
}

fn corrupt_nearest(state: &mut GameState) -> EffectOutcome {
    let Some(target) = closest_monster(state, CORRUPT_RANGE) else {
        state.message("No enemy is close enough to strike.", Tone::Warning);
        return EffectOutcome::Cancelled;
    };
    let name = entity_name(state, target);
    state.message(
        format!(
            "You download the corrupting file into the {name}. The {name} begins to shoot \
             sparks and smoke while giving off error messages."
        ),
        Tone::Magic,
    );
    let damage = state.rng.roll(CORRUPT_DAMAGE);
    combat::take_damage(state, target, damage);
    EffectOutcome::Used
}

fn glitch(state: &mut GameState, input: &mut dyn Input) -> EffectOutcome {
    if closest_monster(state, GLITCH_RANGE).is_none() {
        state.message("No enemy is close enough to glitch.", Tone::Warning);
        return EffectOutcome::Cancelled;
    }
    state.message(
        "Choose an enemy to download the glitch script into, or cancel.",
        Tone::Prompt,
    );
    let Some(target) = target_monster(state, input, GLITCH_RANGE) else {
        return EffectOutcome::Cancelled;
    };

    let turns = state.rng.roll(GLITCH_TURNS).max(0) as u32;
    if !status::confuse(state, target, turns) {
        return EffectOutcome::Cancelled;
    }
    let name = entity_name(state, target);
    state.message(
        format!(
            "You download the glitching file into the {name}. The {name} begins to behave \
             erratically while spitting out binary nonsense."
        ),
        Tone::Magic,
    );
    EffectOutcome::Used
}

fn gravity_well(state: &mut GameState, input: &mut dyn Input) -> EffectOutcome {
    state.message(
        "Choose a target tile to throw the unstable anti-matter, or cancel.",
        Tone::Prompt,
    );
    let Some(center) = target_tile(state, input, TargetKind::Tile, None) else {
        return EffectOutcome::Cancelled;
    };

    let radius = state.rng.roll(GRAVITY_RADIUS);
    let damage = state.rng.roll(GRAVITY_DAMAGE);
    state.message(
        format!(
            "Hunks of metal go flying as a gravity well forms and tears things within {radius} \
             tiles asunder!"
        ),
        Tone::Magic,
    );

    let caught: Vec<EntityId> = state
        .entities
        .iter()
        .filter(|e| e.fighter.is_some() && e.distance_to(center) <= f64::from(radius))
        .map(|e| e.id)
        .collect();
    for id in caught {
        let name = entity_name(state, id);
        state.message(format!("Pieces of {name} get torn off!"), Tone::Danger);
        combat::take_damage(state, id, damage);
    }
    EffectOutcome::Used
}

/// Closest fighter other than the player, in view and within `max_range`
pub fn closest_monster(state: &GameState, max_range: f64) -> Option<EntityId> {
    let origin = state.player_pos();
    let mut closest = None;
    let mut closest_dist = max_range + 1.0;

    for entity in state.entities.iter() {
        if entity.id == state.player || entity.fighter.is_none() || !state.is_visible(entity.pos) {
            continue;
        }
        let dist = origin.distance_to(entity.pos);
        if dist < closest_dist {
            closest = Some(entity.id);
            closest_dist = dist;
        }
    }
    closest.filter(|_| closest_dist <= max_range)
}

/// Ask for a cell until a valid one is given or the prompt is cancelled
fn target_tile(
    state: &GameState,
    input: &mut dyn Input,
    kind: TargetKind,
    max_range: Option<f64>,
) -> Option<Position> {
    let request = TargetRequest {
        kind,
        origin: state.player_pos(),
        max_range,
    };
    loop {
        let pos = match input.poll_target(state, &request) {
            TargetChoice::Cancelled => return None,
            TargetChoice::Tile(pos) => pos,
            TargetChoice::Entity(id) => match state.entities.get(id) {
                Some(entity) => entity.pos,
                None => continue,
            },
        };
        if request.accepts(&state.visible, pos) {
            return Some(pos);
        }
    }
}

/// Ask for a monster; a chosen cell without one cancels
fn target_monster(
    state: &mut GameState,
    input: &mut dyn Input,
    max_range: f64,
) -> Option<EntityId> {
    let pos = target_tile(state, input, TargetKind::Entity, Some(max_range))?;
    let player = state.player;
    let target = state
        .entities
        .entities_at(pos)
        .find(|e| e.fighter.is_some() && e.id != player)
        .map(|e| e.id);
    if target.is_none() {
        state.message("There is nothing there to glitch.", Tone::Warning);
    }
    target
}

fn entity_name(state: &GameState, id: EntityId) -> String {
    state
        .entities
        .get(id)
        .map(|e| e.name.clone())
        .unwrap_or_default()
}
