//! Monster and item placement

use crate::entity::{EntityRegistry, Position};
use crate::monster::MonsterKind;
use crate::object::ItemKind;
use crate::rng::GameRng;

use super::{GenerationConfig, Grid, Rect};

/// Uniform position strictly inside the room's border
pub fn random_interior_position(room: &Rect, rng: &mut GameRng) -> Position {
    Position::new(
        rng.range(room.x1 + 1, room.x2 - 1),
        rng.range(room.y1 + 1, room.y2 - 1),
    )
}

/// Scatter monsters and items in a freshly carved room
///
/// Each attempt picks one position and is dropped if that cell is blocked
/// (terrain or a blocking entity) or equals `reserved`; there is no retry.
pub fn populate_room(
    grid: &Grid,
    entities: &mut EntityRegistry,
    room: &Rect,
    config: &GenerationConfig,
    reserved: Option<Position>,
    rng: &mut GameRng,
) {
    let monsters = rng.range(0, config.max_room_monsters as i32);
    for _ in 0..monsters {
        let pos = random_interior_position(room, rng);
        if reserved == Some(pos) || entities.is_blocked(grid, pos) {
            continue;
        }
        let kind = MonsterKind::from_roll(rng.range(0, 100));
        entities.insert(kind.spawn(pos));
    }

    let items = rng.range(0, config.max_room_items as i32);
    for _ in 0..items {
        let pos = random_interior_position(room, rng);
        if reserved == Some(pos) || entities.is_blocked(grid, pos) {
            continue;
        }
        let kind = ItemKind::from_roll(rng.range(0, 1000));
        entities.insert(kind.spawn(pos));
    }
}
