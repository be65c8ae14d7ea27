//! Field of view
//!
//! Recursive shadowcasting over the eight octants around the viewer, clipped
//! to a circular radius. The result is a [`VisibleSet`]; cells in it are
//! then marked explored on the grid for good.

use hashbrown::HashSet;

use crate::dungeon::Grid;
use crate::entity::Position;

/// Cells currently in view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibleSet {
    cells: HashSet<Position>,
}

impl VisibleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    pub fn insert(&mut self, pos: Position) {
        self.cells.insert(pos);
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Position> {
        self.cells.iter()
    }
}

/// Octant transforms `(xx, xy, yx, yy)`
const OCTANTS: [(i32, i32, i32, i32); 8] = [
    (1, 0, 0, 1),
    (0, 1, 1, 0),
    (0, -1, 1, 0),
    (-1, 0, 0, 1),
    (-1, 0, 0, -1),
    (0, -1, -1, 0),
    (0, 1, -1, 0),
    (1, 0, 0, -1),
];

/// Compute the cells visible from `origin`
///
/// With `light_walls`, opaque cells bordering lit space are included.
pub fn compute_fov(grid: &Grid, origin: Position, radius: i32, light_walls: bool) -> VisibleSet {
    let mut visible = VisibleSet::new();
    if !grid.in_bounds(origin.x, origin.y) {
        return visible;
    }
    visible.insert(origin);

    let caster = Caster {
        grid,
        origin,
        radius: radius.max(0),
        light_walls,
    };
    for transform in OCTANTS {
        caster.cast(&mut visible, 1, 1.0, 0.0, transform);
    }
    visible
}

/// Mark every visible cell as explored
pub fn mark_explored(grid: &mut Grid, visible: &VisibleSet) {
    for &pos in visible.iter() {
        grid.set_explored(pos);
    }
}

struct Caster<'a> {
    grid: &'a Grid,
    origin: Position,
    radius: i32,
    light_walls: bool,
}

impl Caster<'_> {
    fn cast(
        &self,
        visible: &mut VisibleSet,
        row: i32,
        mut start: f64,
        end: f64,
        (xx, xy, yx, yy): (i32, i32, i32, i32),
    ) {
        if start < end {
            return;
        }
        let radius_sq = self.radius * self.radius;
        let mut new_start = 0.0;

        for j in row..=self.radius {
            let dy = -j;
            let mut dx = -j - 1;
            let mut blocked = false;

            while dx <= 0 {
                dx += 1;
                let x = self.origin.x + dx * xx + dy * xy;
                let y = self.origin.y + dx * yx + dy * yy;
                let left_slope = (f64::from(dx) - 0.5) / (f64::from(dy) + 0.5);
                let right_slope = (f64::from(dx) + 0.5) / (f64::from(dy) - 0.5);

                if start < right_slope {
                    continue;
                }
                if end > left_slope {
                    break;
                }

                let opaque = self.grid.blocks_sight(x, y);
                if dx * dx + dy * dy <= radius_sq
                    && self.grid.in_bounds(x, y)
                    && (self.light_walls || !opaque)
                {
                    visible.insert(Position::new(x, y));
                }

                if blocked {
                    if opaque {
                        new_start = right_slope;
                    } else {
                        blocked = false;
                        start = new_start;
                    }
                } else if opaque && j < self.radius {
                    blocked = true;
                    self.cast(visible, j + 1, start, left_slope, (xx, xy, yx, yy));
                    new_start = right_slope;
                }
            }

            if blocked {
                break;
            }
        }
    }
}
