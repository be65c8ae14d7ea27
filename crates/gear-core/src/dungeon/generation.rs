//! Level generation
//!
//! Carves up to `max_rooms` randomly placed, non-overlapping rooms, joins
//! each new room to the previous one with an L-shaped corridor, and
//! populates rooms as they are accepted.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::consts::{
    CIRCULAR_ROOM_THRESHOLD, MAP_HEIGHT, MAP_WIDTH, MAX_ROOMS, MAX_ROOM_ITEMS, MAX_ROOM_MONSTERS,
    ROOM_MAX_SIZE, ROOM_MIN_SIZE,
};
use crate::entity::{Color, Entity, EntityId, EntityRegistry, Position, RenderLayer};
use crate::rng::GameRng;

use super::corridor::connect;
use super::placement::populate_room;
use super::{Grid, Rect, RoomShape};

/// Generation tunables
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub width: i32,
    pub height: i32,
    pub max_rooms: u32,
    pub room_min_size: i32,
    pub room_max_size: i32,
    pub max_room_monsters: u32,
    pub max_room_items: u32,
    /// A `0..=100` roll above this makes a room circular
    pub circular_room_threshold: i32,
    /// Fewer accepted rooms than this triggers a regeneration
    pub min_rooms: usize,
    pub max_regenerations: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            width: MAP_WIDTH,
            height: MAP_HEIGHT,
            max_rooms: MAX_ROOMS,
            room_min_size: ROOM_MIN_SIZE,
            room_max_size: ROOM_MAX_SIZE,
            max_room_monsters: MAX_ROOM_MONSTERS,
            max_room_items: MAX_ROOM_ITEMS,
            circular_room_threshold: CIRCULAR_ROOM_THRESHOLD,
            min_rooms: 1,
            max_regenerations: 8,
        }
    }
}

/// A freshly generated level
#[derive(Debug, Clone)]
pub struct GeneratedLevel {
    pub grid: Grid,
    /// Monsters, items and the stairs; the player is not included
    pub entities: EntityRegistry,
    /// Accepted rooms in acceptance order
    pub rooms: Vec<Rect>,
    pub player_start: Position,
    pub stairs: EntityId,
}

impl GeneratedLevel {
    /// Wrap a hand-made grid, placing stairs at `stairs_pos`
    pub fn from_grid(grid: Grid, player_start: Position, stairs_pos: Position) -> Self {
        let mut entities = EntityRegistry::new();
        let stairs = entities.insert(stairs_entity(stairs_pos));
        Self {
            grid,
            entities,
            rooms: Vec::new(),
            player_start,
            stairs,
        }
    }
}

fn stairs_entity(pos: Position) -> Entity {
    Entity::new(pos, '<', "stairs", Color::White).on_layer(RenderLayer::Floor)
}

/// Generate a level
///
/// A pass that accepts fewer than `min_rooms` rooms is thrown away and
/// redone, up to `max_regenerations` times. If the last pass still has no
/// room at all, one minimum-size room is carved at the map center.
pub fn generate_level(config: &GenerationConfig, rng: &mut GameRng) -> GeneratedLevel {
    let mut attempt = 0;
    loop {
        let (grid, rooms, entities) = carve_rooms(config, rng);
        if rooms.len() >= config.min_rooms || attempt >= config.max_regenerations {
            return finish(config, grid, rooms, entities);
        }
        attempt += 1;
        debug!(
            "generation pass accepted {} of {} required rooms, regenerating ({attempt}/{})",
            rooms.len(),
            config.min_rooms,
            config.max_regenerations
        );
    }
}

fn carve_rooms(config: &GenerationConfig, rng: &mut GameRng) -> (Grid, Vec<Rect>, EntityRegistry) {
    let mut grid = Grid::new(config.width, config.height);
    let mut entities = EntityRegistry::new();
    let mut rooms: Vec<Rect> = Vec::new();

    for _ in 0..config.max_rooms {
        let w = rng.range(config.room_min_size, config.room_max_size);
        let h = rng.range(config.room_min_size, config.room_max_size);
        let x = rng.range(0, config.width - w - 1);
        let y = rng.range(0, config.height - h - 1);
        let room = Rect::new(x, y, w, h);

        if rooms.iter().any(|other| room.intersects(other)) {
            continue;
        }

        let shape = if rng.range(0, 100) > config.circular_room_threshold {
            RoomShape::Circular
        } else {
            RoomShape::Rectangular
        };
        room.carve(&mut grid, shape);

        let center = room.center();
        // the first room's center is the player's start
        let reserved = rooms.is_empty().then_some(center);
        populate_room(&grid, &mut entities, &room, config, reserved, rng);

        if let Some(previous) = rooms.last() {
            let horizontal_first = rng.coin();
            connect(&mut grid, previous.center(), center, horizontal_first);
        }
        rooms.push(room);
    }

    (grid, rooms, entities)
}

fn finish(
    config: &GenerationConfig,
    mut grid: Grid,
    mut rooms: Vec<Rect>,
    mut entities: EntityRegistry,
) -> GeneratedLevel {
    if rooms.is_empty() {
        let size = config.room_min_size;
        let room = Rect::new(
            ((config.width - size) / 2).max(0),
            ((config.height - size) / 2).max(0),
            size,
            size,
        );
        room.carve(&mut grid, RoomShape::Rectangular);
        debug!("no room survived generation, carved fallback room at {room:?}");
        rooms.push(room);
    }

    let player_start = rooms[0].center();
    let stairs_pos = rooms[rooms.len() - 1].center();
    let stairs = entities.insert(stairs_entity(stairs_pos));

    debug!(
        "generated {}x{} level: {} rooms, {} entities",
        config.width,
        config.height,
        rooms.len(),
        entities.len()
    );

    GeneratedLevel {
        grid,
        entities,
        rooms,
        player_start,
        stairs,
    }
}
