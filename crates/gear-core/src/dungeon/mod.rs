//! Dungeon system
//!
//! Tiles, the level grid, and procedural generation of rooms, corridors
//! and their inhabitants.

mod corridor;
mod generation;
mod grid;
mod placement;
mod rect;
mod tile;

pub use corridor::{carve_h_tunnel, carve_v_tunnel, connect};
pub use generation::{GeneratedLevel, GenerationConfig, generate_level};
pub use grid::Grid;
pub use placement::{populate_room, random_interior_position};
pub use rect::{Rect, RoomShape};
pub use tile::{Tile, TileFlags};
