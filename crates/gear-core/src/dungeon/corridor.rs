//! Corridor carving
//!
//! Rooms are joined with one-cell-wide L-shaped tunnels. Every accepted room
//! is connected to the previous one, so the level is connected by
//! construction.

use crate::entity::Position;

use super::Grid;

/// Carve a horizontal tunnel from `x1` to `x2` (inclusive) along row `y`
pub fn carve_h_tunnel(grid: &mut Grid, x1: i32, x2: i32, y: i32) {
    for x in x1.min(x2)..=x1.max(x2) {
        grid.carve(x, y);
    }
}

/// Carve a vertical tunnel from `y1` to `y2` (inclusive) along column `x`
pub fn carve_v_tunnel(grid: &mut Grid, y1: i32, y2: i32, x: i32) {
    for y in y1.min(y2)..=y1.max(y2) {
        grid.carve(x, y);
    }
}

/// Join two points with an L-shaped corridor
///
/// With `horizontal_first` the corridor leaves `from` along its row and turns
/// at `to`'s column; otherwise it leaves along its column and turns at `to`'s
/// row.
pub fn connect(grid: &mut Grid, from: Position, to: Position, horizontal_first: bool) {
    if horizontal_first {
        carve_h_tunnel(grid, from.x, to.x, from.y);
        carve_v_tunnel(grid, from.y, to.y, to.x);
    } else {
        carve_v_tunnel(grid, from.y, to.y, from.x);
        carve_h_tunnel(grid, from.x, to.x, to.y);
    }
}
