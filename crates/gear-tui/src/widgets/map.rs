//! Map display widget

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Widget;

use gear_core::GameState;
use gear_core::entity::Position;

use crate::camera::Camera;
use crate::distortion::FrameDistortion;
use crate::theme::Theme;

/// Targeting cursor drawn over the map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub pos: Position,
    /// Whether the cell under the cursor is a valid target
    pub valid: bool,
}

/// Widget for rendering the dungeon map
///
/// Terrain is a background color; entities are glyphs on top and only
/// appear while in view.
pub struct MapWidget<'a, 'd> {
    state: &'a GameState,
    camera: Camera,
    theme: &'a Theme,
    distortion: &'a mut FrameDistortion<'d>,
    cursor: Option<Cursor>,
}

impl<'a, 'd> MapWidget<'a, 'd> {
    pub fn new(
        state: &'a GameState,
        camera: Camera,
        theme: &'a Theme,
        distortion: &'a mut FrameDistortion<'d>,
    ) -> Self {
        Self {
            state,
            camera,
            theme,
            distortion,
            cursor: None,
        }
    }

    pub fn cursor(mut self, cursor: Option<Cursor>) -> Self {
        self.cursor = cursor;
        self
    }

    fn terrain(&mut self, pos: Position) -> Color {
        match self.state.grid.tile(pos.x, pos.y) {
            Some(tile) if tile.explored() => {
                let visible = self.state.is_visible(pos);
                let base = self.theme.terrain(tile.blocks_sight(), visible);
                self.distortion.shade(base)
            }
            _ => self.theme.unexplored,
        }
    }
}

impl Widget for MapWidget<'_, '_> {
    fn render(mut self, area: Rect, buf: &mut Buffer) {
        let cols = i32::from(area.width).min(self.camera.width);
        let rows = i32::from(area.height).min(self.camera.height);

        for row in 0..rows {
            for col in 0..cols {
                let Some(pos) = self.camera.to_map(col, row) else {
                    continue;
                };
                let bg = self.terrain(pos);
                if let Some(cell) = buf.cell_mut((area.x + col as u16, area.y + row as u16)) {
                    cell.set_char(' ');
                    cell.set_style(Style::default().bg(bg));
                }
            }
        }

        let player = self.state.player_entity();
        let others = self
            .state
            .entities
            .draw_order()
            .into_iter()
            .filter(|e| e.id != self.state.player);
        for entity in others.chain(player) {
            if !self.state.is_visible(entity.pos) {
                continue;
            }
            let Some((col, row)) = self.camera.to_view(entity.pos) else {
                continue;
            };
            if col >= cols || row >= rows {
                continue;
            }
            if let Some(cell) = buf.cell_mut((area.x + col as u16, area.y + row as u16)) {
                cell.set_char(entity.glyph);
                cell.set_fg(self.theme.glyph(entity.color));
            }
        }

        if let Some(cursor) = self.cursor
            && let Some((col, row)) = self.camera.to_view(cursor.pos)
            && col < cols
            && row < rows
            && let Some(cell) = buf.cell_mut((area.x + col as u16, area.y + row as u16))
        {
            let color = if cursor.valid {
                self.theme.cursor_ok
            } else {
                self.theme.cursor_bad
            };
            cell.set_bg(color);
        }
    }
}
