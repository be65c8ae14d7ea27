//! Timed status effects

use crate::action::move_by;
use crate::consts::{CONFUSED_SELF_DAMAGE, CONFUSED_WANDER_CHANCE};
use crate::entity::{Ai, EntityId};
use crate::gameloop::GameState;
use crate::message::Tone;
use crate::monster::AiAction;

use super::take_damage;

/// Confuse an entity for `turns` turns; false if it has no Ai
pub fn confuse(state: &mut GameState, target: EntityId, turns: u32) -> bool {
    let Some(entity) = state.entities.get_mut(target) else {
        return false;
    };
    let Some(ai) = entity.ai.take() else {
        return false;
    };
    entity.ai = Some(ai.confuse(turns));
    true
}

/// One turn of a confused entity
///
/// While turns remain the entity stumbles in a random direction or hurts
/// itself; once the countdown is spent its previous Ai comes back.
pub fn confused_turn(state: &mut GameState, id: EntityId) -> AiAction {
    let turns_left = match state.entities.get(id).and_then(|e| e.ai.as_ref()) {
        Some(Ai::Confused { turns_left, .. }) => *turns_left,
        _ => return AiAction::None,
    };
    let name = state
        .entities
        .get(id)
        .map(|e| e.name.clone())
        .unwrap_or_default();

    if turns_left == 0 {
        if let Some(entity) = state.entities.get_mut(id)
            && let Some(Ai::Confused { previous, .. }) = entity.ai.take()
        {
            entity.ai = Some(*previous);
        }
        state.message(
            format!("The {name} has repaired its glitched drivers and is acting normally again."),
            Tone::Recovery,
        );
        return AiAction::Recovered;
    }

    let action = if state.rng.range(0, 100) < CONFUSED_WANDER_CHANCE {
        let dx = state.rng.range(-1, 1);
        let dy = state.rng.range(-1, 1);
        move_by(state, id, dx, dy);
        state.message(
            format!("The {name} bumbles around spitting out binary nonsense."),
            Tone::Info,
        );
        AiAction::Stumbled
    } else {
        let damage = state.rng.roll(CONFUSED_SELF_DAMAGE);
        state.message(
            format!("The {name} damages itself while spitting out binary nonsense."),
            Tone::Danger,
        );
        take_damage(state, id, damage);
        AiAction::HurtItself
    };

    // a fatal self-hit removes the Ai altogether
    if let Some(Ai::Confused { turns_left, .. }) =
        state.entities.get_mut(id).and_then(|e| e.ai.as_mut())
    {
        *turns_left -= 1;
    }
    action
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::{GeneratedLevel, Grid, Tile};
    use crate::entity::Position;
    use crate::monster::MonsterKind;
    use crate::rng::GameRng;
    use crate::world::GameOptions;

    fn arena() -> GameState {
        let grid = Grid::filled(12, 12, Tile::floor());
        let level = GeneratedLevel::from_grid(grid, Position::new(1, 1), Position::new(10, 10));
        GameState::with_level(GameOptions::default(), GameRng::new(42), level)
    }

    fn turns_left(state: &GameState, id: EntityId) -> Option<u32> {
        match state.entities.get(id)?.ai.as_ref()? {
            Ai::Confused { turns_left, .. } => Some(*turns_left),
            _ => None,
        }
    }

    #[test]
    fn test_confuse_requires_ai() {
        let mut state = arena();
        let stairs = state.stairs;
        assert!(!confuse(&mut state, stairs, 5));
    }

    #[test]
    fn test_countdown_restores_previous_ai() {
        let mut state = arena();
        let id = state.entities.insert(MonsterKind::ServiceRobot.spawn(Position::new(6, 6)));
        assert!(confuse(&mut state, id, 3));

        // 15 hp outlasts three self-inflicted hits of at most 4
        for expected in [2, 1, 0] {
            confused_turn(&mut state, id);
            assert_eq!(turns_left(&state, id), Some(expected));
        }
        assert_eq!(confused_turn(&mut state, id), AiAction::Recovered);
        assert_eq!(state.entities.get(id).unwrap().ai, Some(Ai::Basic));
        assert!(state.messages.contains("acting normally again"));
    }

    #[test]
    fn test_reconfusing_resets_timer_without_nesting() {
        let mut state = arena();
        let id = state.entities.insert(MonsterKind::ServiceRobot.spawn(Position::new(6, 6)));
        confuse(&mut state, id, 2);
        confused_turn(&mut state, id);
        confuse(&mut state, id, 4);
        assert_eq!(turns_left(&state, id), Some(4));

        state
            .entities
            .get_mut(id)
            .unwrap()
            .fighter
            .as_mut()
            .unwrap()
            .hp = 1000;
        for _ in 0..4 {
            confused_turn(&mut state, id);
        }
        assert_eq!(confused_turn(&mut state, id), AiAction::Recovered);
        assert_eq!(state.entities.get(id).unwrap().ai, Some(Ai::Basic));
    }

    #[test]
    fn test_confused_turn_on_clear_headed_entity() {
        let mut state = arena();
        let id = state.entities.insert(MonsterKind::ServiceRobot.spawn(Position::new(6, 6)));
        assert_eq!(confused_turn(&mut state, id), AiAction::None);
    }

    #[test]
    fn test_stumbling_stays_in_reach() {
        let mut state = arena();
        let id = state.entities.insert(MonsterKind::ServiceRobot.spawn(Position::new(6, 6)));
        state.entities.get_mut(id).unwrap().fighter.as_mut().unwrap().hp = 1000;
        confuse(&mut state, id, 50);
        let mut last = Position::new(6, 6);
        for _ in 0..50 {
            confused_turn(&mut state, id);
            let pos = state.entities.get(id).unwrap().pos;
            assert!((pos.x - last.x).abs() <= 1 && (pos.y - last.y).abs() <= 1);
            last = pos;
        }
    }
}
