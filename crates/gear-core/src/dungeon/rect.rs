//! Rooms
//!
//! A room is an axis-aligned rectangle whose outer ring stays rock.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::entity::Position;

use super::Grid;

/// How a room's interior is carved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumIter)]
pub enum RoomShape {
    #[default]
    Rectangular,
    Circular,
}

/// Room rectangle; `x2`/`y2` are exclusive of the carved interior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            x1: x,
            y1: y,
            x2: x + w,
            y2: y + h,
        }
    }

    pub const fn width(&self) -> i32 {
        self.x2 - self.x1
    }

    pub const fn height(&self) -> i32 {
        self.y2 - self.y1
    }

    pub const fn center(&self) -> Position {
        Position::new((self.x1 + self.x2) / 2, (self.y1 + self.y2) / 2)
    }

    /// Overlap test; rooms that merely touch count as intersecting
    pub const fn intersects(&self, other: &Rect) -> bool {
        self.x1 <= other.x2 && self.x2 >= other.x1 && self.y1 <= other.y2 && self.y2 >= other.y1
    }

    /// Whether `pos` lies strictly inside the border
    pub const fn contains_interior(&self, pos: Position) -> bool {
        pos.x > self.x1 && pos.x < self.x2 && pos.y > self.y1 && pos.y < self.y2
    }

    /// Carve this room into the grid
    pub fn carve(&self, grid: &mut Grid, shape: RoomShape) {
        match shape {
            RoomShape::Rectangular => {
                for y in self.y1 + 1..self.y2 {
                    for x in self.x1 + 1..self.x2 {
                        grid.carve(x, y);
                    }
                }
            }
            RoomShape::Circular => {
                let center = self.center();
                let radius = self.width().min(self.height()) / 2;
                for y in self.y1..=self.y2 {
                    for x in self.x1..=self.x2 {
                        let (dx, dy) = (x - center.x, y - center.y);
                        if dx * dx + dy * dy <= radius * radius {
                            grid.carve(x, y);
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_geometry() {
        let r = Rect::new(2, 3, 6, 8);
        assert_eq!((r.x2, r.y2), (8, 11));
        assert_eq!(r.center(), Position::new(5, 7));
        assert_eq!(r.width(), 6);
    }

    #[test]
    fn test_intersects_touching() {
        let a = Rect::new(0, 0, 5, 5);
        let touching = Rect::new(5, 0, 5, 5);
        let apart = Rect::new(6, 0, 5, 5);
        assert!(a.intersects(&touching));
        assert!(touching.intersects(&a));
        assert!(!a.intersects(&apart));
    }

    #[test]
    fn test_rectangular_carve_keeps_border() {
        let mut grid = Grid::new(12, 12);
        let room = Rect::new(1, 1, 6, 6);
        room.carve(&mut grid, RoomShape::Rectangular);

        assert_eq!(grid.floor_cells().count(), 25);
        assert!(grid.is_blocked(Position::new(1, 1)));
        assert!(grid.is_blocked(Position::new(7, 4)));
        assert!(!grid.is_blocked(Position::new(2, 2)));
        assert!(!grid.is_blocked(Position::new(6, 6)));
        for pos in grid.floor_cells() {
            assert!(room.contains_interior(pos));
        }
    }

    #[test]
    fn test_circular_carve_is_round() {
        let mut grid = Grid::new(20, 20);
        let room = Rect::new(2, 2, 8, 8);
        room.carve(&mut grid, RoomShape::Circular);

        let center = room.center();
        assert!(!grid.is_blocked(center));
        assert!(!grid.is_blocked(Position::new(center.x + 4, center.y)));
        // corners of the bounding box stay rock
        assert!(grid.is_blocked(Position::new(2, 2)));
        assert!(grid.is_blocked(Position::new(10, 10)));
    }
}
