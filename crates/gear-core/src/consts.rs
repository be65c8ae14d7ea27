//! Game constants
//!
//! Defaults for map generation and the numbers behind every item effect.
//! Map and population values can be overridden through
//! [`GameOptions`](crate::world::GameOptions); effect numbers are fixed.

use std::ops::RangeInclusive;

/// Default map width in cells
pub const MAP_WIDTH: i32 = 100;
/// Default map height in cells
pub const MAP_HEIGHT: i32 = 68;
/// Largest accepted map side
pub const MAX_MAP_SIDE: i32 = 1000;

/// Smallest room side
pub const ROOM_MIN_SIZE: i32 = 6;
/// Largest room side
pub const ROOM_MAX_SIZE: i32 = 10;
/// Room placement attempts per level
pub const MAX_ROOMS: u32 = 30;
/// Circular rooms are carved when a `0..=100` roll exceeds this
pub const CIRCULAR_ROOM_THRESHOLD: i32 = 70;

pub const MAX_ROOM_MONSTERS: u32 = 3;
pub const MAX_ROOM_ITEMS: u32 = 2;

/// Player light radius
pub const TORCH_RADIUS: i32 = 10;
/// Whether walls bordering lit floor are themselves visible
pub const FOV_LIGHT_WALLS: bool = true;

/// Messages kept in the log
pub const MESSAGE_LOG_HEIGHT: usize = 6;
/// Inventory slots, one per letter `a..=z`
pub const INVENTORY_LIMIT: usize = 26;
/// Cap on the distortion counter
pub const MAX_CORRUPTION: u32 = 10_000;

/// Random spread added to every attack
pub const ATTACK_LUCK: i32 = 3;

/// Chance (out of `0..=100`) that a confused entity stumbles instead of hurting itself
pub const CONFUSED_WANDER_CHANCE: i32 = 80;
pub const CONFUSED_SELF_DAMAGE: RangeInclusive<i32> = 1..=4;

pub const HEAL_AMOUNT: RangeInclusive<i32> = 3..=6;

pub const CORRUPT_RANGE: f64 = 6.0;
pub const CORRUPT_DAMAGE: RangeInclusive<i32> = 10..=20;

pub const GLITCH_RANGE: f64 = 8.0;
pub const GLITCH_TURNS: RangeInclusive<i32> = 7..=15;

pub const GRAVITY_RADIUS: RangeInclusive<i32> = 2..=4;
pub const GRAVITY_DAMAGE: RangeInclusive<i32> = 9..=15;
