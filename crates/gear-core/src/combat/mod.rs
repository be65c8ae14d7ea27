//! Combat system
//!
//! Attack resolution, damage, healing and the two death transitions.

pub mod status;

use log::debug;

use crate::consts::ATTACK_LUCK;
use crate::entity::{Color, DeathKind, EntityId};
use crate::gameloop::{GamePhase, GameState, capitalize};
use crate::message::Tone;

/// Result of an attack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackOutcome {
    Hit { damage: i32, killed: bool },
    /// Defense soaked the whole blow
    NoEffect,
    /// One side is missing or cannot fight
    Invalid,
}

/// Attack with a random spread of `-3..=3` on the damage
pub fn attack(state: &mut GameState, attacker: EntityId, defender: EntityId) -> AttackOutcome {
    let luck = state.rng.range(-ATTACK_LUCK, ATTACK_LUCK);
    attack_with_luck(state, attacker, defender, luck)
}

/// Attack with a fixed spread
///
/// Damage is `power - defense + luck`; nothing happens below one point.
pub fn attack_with_luck(
    state: &mut GameState,
    attacker: EntityId,
    defender: EntityId,
    luck: i32,
) -> AttackOutcome {
    let (Some(a), Some(d)) = (state.entities.get(attacker), state.entities.get(defender)) else {
        return AttackOutcome::Invalid;
    };
    let (Some(af), Some(df)) = (a.fighter, d.fighter) else {
        return AttackOutcome::Invalid;
    };

    let damage = af.power - df.defense + luck;
    let attacker_name = capitalize(&a.name);
    let defender_name = d.name.clone();
    let player_hurt = defender == state.player;

    if damage > 0 {
        state.message(
            format!("{attacker_name} attacks {defender_name} for {damage} health."),
            if player_hurt { Tone::Danger } else { Tone::Attack },
        );
        let killed = take_damage(state, defender, damage);
        AttackOutcome::Hit { damage, killed }
    } else {
        state.message(
            format!("{attacker_name} attacks {defender_name} but it has no effect!"),
            Tone::Miss,
        );
        AttackOutcome::NoEffect
    }
}

/// Apply damage; returns whether this blow killed the target
///
/// Non-positive amounts are ignored. Death runs once, on the blow that takes
/// hp from above zero to zero or below.
pub fn take_damage(state: &mut GameState, target: EntityId, amount: i32) -> bool {
    if amount <= 0 {
        return false;
    }
    let Some(fighter) = state
        .entities
        .get_mut(target)
        .and_then(|e| e.fighter.as_mut())
    else {
        return false;
    };

    let was_alive = fighter.hp > 0;
    fighter.hp -= amount;
    if was_alive && fighter.hp <= 0 {
        let death = fighter.death;
        die(state, target, death);
        return true;
    }
    false
}

/// Restore hp, clamped to the maximum
pub fn heal(state: &mut GameState, target: EntityId, amount: i32) {
    if let Some(fighter) = state
        .entities
        .get_mut(target)
        .and_then(|e| e.fighter.as_mut())
    {
        fighter.heal(amount);
    }
}

fn die(state: &mut GameState, id: EntityId, death: DeathKind) {
    match death {
        DeathKind::Player => player_death(state, id),
        DeathKind::Monster => monster_death(state, id),
    }
}

fn player_death(state: &mut GameState, id: EntityId) {
    state.message(
        "You have been destroyed. Your parts are quickly consumed by the surrounding automata.",
        Tone::Death,
    );
    state.phase = GamePhase::Dead;
    if let Some(player) = state.entities.get_mut(id) {
        player.glyph = '%';
        player.color = Color::DarkestGrey;
    }
}

/// Turn a monster into inert remains
fn monster_death(state: &mut GameState, id: EntityId) {
    let Some(monster) = state.entities.get_mut(id) else {
        return;
    };
    let name = std::mem::take(&mut monster.name);
    monster.glyph = '%';
    monster.color = Color::DarkestGrey;
    monster.blocks = false;
    monster.fighter = None;
    monster.ai = None;
    monster.name = format!("remains of {name}");
    state.entities.send_to_back(id);

    debug!("{name} ({id:?}) died");
    state.message(format!("You have overcome {name}!"), Tone::Danger);
    state.add_corruption(1);
}
