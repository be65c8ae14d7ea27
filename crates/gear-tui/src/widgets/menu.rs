//! Lettered popup menus
//!
//! One widget serves the inventory, the main menu and plain message boxes
//! (a menu with no options).

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Style, Stylize};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Widget};

use gear_core::GameState;
use gear_core::interface::InventoryPurpose;
use gear_core::object::Inventory;

use super::messages::wrap_words;
use crate::theme::Theme;

/// A popup with a wrapped header and `(a) option` lines
pub struct MenuWidget<'a> {
    header: &'a str,
    options: Vec<String>,
    width: u16,
    theme: &'a Theme,
}

impl<'a> MenuWidget<'a> {
    pub fn new(header: &'a str, options: Vec<String>, theme: &'a Theme) -> Self {
        Self {
            header,
            options,
            width: 50,
            theme,
        }
    }

    /// Inventory listing for `purpose`
    pub fn inventory(state: &GameState, purpose: InventoryPurpose, theme: &'a Theme) -> Self {
        Self::new(purpose.header(), inventory_options(&state.inventory), theme)
    }

    pub fn width(mut self, width: u16) -> Self {
        self.width = width;
        self
    }

    fn body(&self, inner_width: u16) -> Vec<Line<'static>> {
        let mut lines: Vec<Line<'static>> = Vec::new();
        if !self.header.is_empty() {
            for text in wrap_words(self.header, usize::from(inner_width)) {
                lines.push(Line::styled(text, Style::default().fg(self.theme.header)));
            }
        }
        for (i, option) in self.options.iter().enumerate() {
            let letter = Inventory::letter_at(i).unwrap_or('?');
            lines.push(Line::styled(
                format!("({letter}) {option}"),
                Style::default().fg(self.theme.text),
            ));
        }
        lines
    }
}

/// Names of the carried items, in letter order
pub fn inventory_options(inventory: &Inventory) -> Vec<String> {
    inventory.iter().map(|(_, item)| item.name.clone()).collect()
}

impl Widget for MenuWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = self.width.min(area.width);
        let body = self.body(width.saturating_sub(2));
        let height = (body.len() as u16 + 2).min(area.height);
        let popup = Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        };

        Clear.render(popup, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border_action))
            .bold();
        let inner = block.inner(popup);
        block.render(popup, buf);

        for (i, line) in body.into_iter().enumerate() {
            let y = inner.y + i as u16;
            if y >= inner.bottom() {
                break;
            }
            line.render(Rect { y, height: 1, ..inner }, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen_text(buf: &Buffer) -> String {
        let mut text = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                text.push_str(buf[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_options_are_lettered() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 60, 12);
        let mut buf = Buffer::empty(area);
        MenuWidget::new(
            "",
            vec!["New Game".into(), "Continue Game".into(), "Quit".into()],
            &theme,
        )
        .width(24)
        .render(area, &mut buf);

        let text = screen_text(&buf);
        assert!(text.contains("(a) New Game"));
        assert!(text.contains("(b) Continue Game"));
        assert!(text.contains("(c) Quit"));
    }

    #[test]
    fn test_message_box_has_no_options() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);
        MenuWidget::new("No saved game to load.", Vec::new(), &theme)
            .width(30)
            .render(area, &mut buf);

        let text = screen_text(&buf);
        assert!(text.contains("No saved game to load."));
        assert!(!text.contains("(a)"));
    }
}
