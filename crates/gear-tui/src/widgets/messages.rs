//! Message log widget

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Widget;

use gear_core::message::MessageLog;

use crate::theme::Theme;

/// Names under the mouse on the first row, the newest messages below
pub struct MessagesWidget<'a> {
    log: &'a MessageLog,
    look: &'a str,
    theme: &'a Theme,
}

impl<'a> MessagesWidget<'a> {
    pub fn new(log: &'a MessageLog, theme: &'a Theme) -> Self {
        Self {
            log,
            look: "",
            theme,
        }
    }

    /// Text describing what the mouse points at
    pub fn look(mut self, look: &'a str) -> Self {
        self.look = look;
        self
    }
}

impl Widget for MessagesWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        buf.set_style(area, Style::default().bg(self.theme.panel_bg));

        let look_area = Rect { height: 1, ..area };
        Line::styled(self.look, Style::default().fg(self.theme.look)).render(look_area, buf);

        let rows = usize::from(area.height.saturating_sub(1));
        let width = usize::from(area.width);

        // newest last; keep only the tail that fits
        let mut lines: Vec<Line> = Vec::new();
        for message in self.log.iter().rev() {
            let style = Style::default().fg(self.theme.tone(message.tone));
            let wrapped = wrap_words(&message.text, width);
            for text in wrapped.into_iter().rev() {
                lines.push(Line::styled(text, style));
            }
            if lines.len() >= rows {
                break;
            }
        }
        lines.truncate(rows);
        lines.reverse();

        for (i, line) in lines.into_iter().enumerate() {
            let y = area.y + 1 + i as u16;
            line.render(Rect { y, height: 1, ..area }, buf);
        }
    }
}

/// Greedy word wrap; words longer than `width` are split
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word = word;
        while word.chars().count() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let split = word
                .char_indices()
                .nth(width)
                .map_or(word.len(), |(i, _)| i);
            lines.push(word[..split].to_string());
            word = &word[split..];
        }
        if word.is_empty() {
            continue;
        }
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}
