//! Viewport over the map
//!
//! The map is larger than most terminals, so the view scrolls to keep the
//! player centered, stopping at the map edges.

use gear_core::entity::Position;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Camera {
    /// Map cell shown in the top-left corner
    pub origin: Position,
    pub width: i32,
    pub height: i32,
}

impl Camera {
    /// Center on `focus` within a `map_w` x `map_h` map
    pub fn follow(focus: Position, map_w: i32, map_h: i32, width: i32, height: i32) -> Self {
        let x = clamp_axis(focus.x - width / 2, map_w, width);
        let y = clamp_axis(focus.y - height / 2, map_h, height);
        Self {
            origin: Position::new(x, y),
            width,
            height,
        }
    }

    /// Map cell drawn at view offset (`col`, `row`)
    pub fn to_map(&self, col: i32, row: i32) -> Option<Position> {
        if col < 0 || row < 0 || col >= self.width || row >= self.height {
            return None;
        }
        Some(self.origin.offset(col, row))
    }

    /// View offset of a map cell, if it is in view
    pub fn to_view(&self, pos: Position) -> Option<(i32, i32)> {
        let col = pos.x - self.origin.x;
        let row = pos.y - self.origin.y;
        if col < 0 || row < 0 || col >= self.width || row >= self.height {
            return None;
        }
        Some((col, row))
    }
}

fn clamp_axis(start: i32, map_len: i32, view_len: i32) -> i32 {
    if map_len <= view_len {
        0
    } else {
        start.clamp(0, map_len - view_len)
    }
}
