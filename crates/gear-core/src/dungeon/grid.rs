//! The level grid

use serde::{Deserialize, Serialize};

use crate::entity::Position;

use super::Tile;

/// Fixed-size 2D array of tiles, row-major
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
}

impl Grid {
    /// A grid of solid rock
    pub fn new(width: i32, height: i32) -> Self {
        Self::filled(width, height, Tile::wall())
    }

    pub fn filled(width: i32, height: i32, tile: Tile) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            tiles: vec![tile; (width as usize).saturating_mul(height as usize)],
        }
    }

    pub const fn width(&self) -> i32 {
        self.width
    }

    pub const fn height(&self) -> i32 {
        self.height
    }

    pub const fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.in_bounds(x, y).then(|| y as usize * self.width as usize + x as usize)
    }

    pub fn tile(&self, x: i32, y: i32) -> Option<&Tile> {
        self.index(x, y).map(|i| &self.tiles[i])
    }

    pub fn tile_mut(&mut self, x: i32, y: i32) -> Option<&mut Tile> {
        self.index(x, y).map(|i| &mut self.tiles[i])
    }

    /// Terrain blocks movement; cells off the map count as blocked
    pub fn is_blocked(&self, pos: Position) -> bool {
        self.tile(pos.x, pos.y).is_none_or(Tile::blocked)
    }

    /// Terrain blocks sight; cells off the map count as opaque
    pub fn blocks_sight(&self, x: i32, y: i32) -> bool {
        self.tile(x, y).is_none_or(Tile::blocks_sight)
    }

    pub fn is_explored(&self, pos: Position) -> bool {
        self.tile(pos.x, pos.y).is_some_and(Tile::explored)
    }

    pub fn set_explored(&mut self, pos: Position) {
        if let Some(tile) = self.tile_mut(pos.x, pos.y) {
            tile.set_explored();
        }
    }

    /// Turn a cell into floor; out-of-range cells are ignored
    pub fn carve(&mut self, x: i32, y: i32) {
        if let Some(tile) = self.tile_mut(x, y) {
            tile.carve();
        }
    }

    /// Positions of every passable cell
    pub fn floor_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.tiles.iter().enumerate().filter_map(|(i, tile)| {
            (!tile.blocked()).then(|| {
                let width = self.width as usize;
                Position::new((i % width) as i32, (i / width) as i32)
            })
        })
    }
}
