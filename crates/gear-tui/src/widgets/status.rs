//! Status panel widget

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Widget;

use gear_core::GameState;

use crate::theme::Theme;

/// Health bar, current floor and distortion bar, stacked
pub struct StatusWidget<'a> {
    state: &'a GameState,
    theme: &'a Theme,
}

impl<'a> StatusWidget<'a> {
    pub fn new(state: &'a GameState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for StatusWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.theme.panel_bg));

        let (hp, max_hp) = self
            .state
            .player_fighter()
            .map(|f| (f.hp.max(0), f.max_hp))
            .unwrap_or((0, 0));
        let health = Bar::new("HEALTH", hp as u32, max_hp.max(0) as u32)
            .colors(self.theme.health_bar, self.theme.health_back);
        let distort = Bar::new(
            "DISTORT",
            self.state.corruption(),
            self.state.options.max_corruption,
        )
        .colors(self.theme.distort_bar, self.theme.distort_back);
        let rows = [Some(health), None, Some(distort)];

        let inner = Rect {
            x: area.x + 1,
            width: area.width.saturating_sub(2),
            ..area
        };
        for (i, row) in rows.into_iter().enumerate() {
            let y = area.y + 1 + i as u16;
            if y >= area.bottom() {
                break;
            }
            let line_area = Rect { y, height: 1, ..inner };
            match row {
                Some(bar) => bar.text_color(self.theme.bar_text).render(line_area, buf),
                None => {
                    let floor = format!("CURRENT FLOOR: {}", self.state.dungeon_level);
                    Line::styled(floor, Style::default().fg(self.theme.text))
                        .render(line_area, buf);
                }
            }
        }
    }
}

/// A labelled fill bar, `NAME: value/max` centered over it
pub struct Bar<'a> {
    name: &'a str,
    value: u32,
    max: u32,
    fill: Color,
    back: Color,
    text: Color,
}

impl<'a> Bar<'a> {
    pub fn new(name: &'a str, value: u32, max: u32) -> Self {
        Self {
            name,
            value,
            max,
            fill: Color::Cyan,
            back: Color::DarkGray,
            text: Color::Black,
        }
    }

    pub fn colors(mut self, fill: Color, back: Color) -> Self {
        self.fill = fill;
        self.back = back;
        self
    }

    pub fn text_color(mut self, text: Color) -> Self {
        self.text = text;
        self
    }

    /// Number of filled cells out of `width`
    pub fn filled(&self, width: u16) -> u16 {
        if self.max == 0 {
            return 0;
        }
        let filled = u64::from(self.value.min(self.max)) * u64::from(width) / u64::from(self.max);
        filled as u16
    }
}

impl Widget for Bar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let area = Rect { height: 1, ..area };
        buf.set_style(area, Style::default().bg(self.back));
        let filled = self.filled(area.width);
        if filled > 0 {
            buf.set_style(
                Rect {
                    width: filled,
                    ..area
                },
                Style::default().bg(self.fill),
            );
        }

        let label = format!("{}: {}/{}", self.name, self.value, self.max);
        Line::styled(label, Style::default().fg(self.text))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
