//! Terminal color theme
//!
//! Maps the game's palette and message tones onto terminal colors. Terrain is
//! drawn as background color, so walls and ground each get a lit and an
//! unlit shade.

use gear_core::entity::Color as GlyphColor;
use gear_core::message::Tone;
use ratatui::style::Color;

/// Color theme for terminal UI.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    // General UI text
    pub text: Color,
    /// Hint text under menus
    pub text_dim: Color,
    /// Menu headers
    pub header: Color,
    /// Names under the mouse
    pub look: Color,

    // Borders
    pub border: Color,
    /// Menus waiting for a choice
    pub border_action: Color,
    pub border_danger: Color,

    // Panel
    pub panel_bg: Color,
    pub bar_text: Color,
    pub health_bar: Color,
    pub health_back: Color,
    pub distort_bar: Color,
    pub distort_back: Color,

    // Targeting cursor
    pub cursor_ok: Color,
    pub cursor_bad: Color,

    // Map terrain
    pub dark_wall: Color,
    pub light_wall: Color,
    pub dark_ground: Color,
    pub light_ground: Color,
    pub unexplored: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::nexus()
    }
}

impl Theme {
    pub fn nexus() -> Self {
        Self {
            text: Color::White,
            text_dim: Color::DarkGray,
            header: Color::Rgb(255, 223, 159),
            look: Color::Rgb(159, 159, 159),
            border: Color::Gray,
            border_action: Color::Rgb(255, 223, 159),
            border_danger: Color::Rgb(255, 114, 146),
            panel_bg: Color::Rgb(127, 127, 127),
            bar_text: Color::Rgb(31, 31, 31),
            health_bar: Color::Rgb(114, 219, 255),
            health_back: Color::Rgb(0, 63, 0),
            distort_bar: Color::Rgb(0, 255, 255),
            distort_back: Color::Rgb(255, 114, 184),
            cursor_ok: Color::Rgb(114, 255, 114),
            cursor_bad: Color::Rgb(255, 114, 114),
            dark_wall: Color::Rgb(31, 31, 31),
            light_wall: Color::Rgb(95, 95, 95),
            dark_ground: Color::Rgb(159, 159, 159),
            light_ground: Color::Rgb(127, 127, 127),
            unexplored: Color::Black,
        }
    }

    /// Terminal color of an entity glyph
    pub fn glyph(&self, color: GlyphColor) -> Color {
        match color {
            GlyphColor::White => Color::Rgb(255, 255, 255),
            GlyphColor::LightestGrey => Color::Rgb(223, 223, 223),
            GlyphColor::LightGrey => Color::Rgb(159, 159, 159),
            GlyphColor::DarkestGrey => Color::Rgb(31, 31, 31),
            GlyphColor::DarkestGreen => Color::Rgb(0, 63, 0),
            GlyphColor::LightGreen => Color::Rgb(114, 255, 114),
            GlyphColor::LightPink => Color::Rgb(255, 114, 184),
            GlyphColor::Black => Color::Rgb(0, 0, 0),
        }
    }

    /// Terminal color of a logged message
    pub fn tone(&self, tone: Tone) -> Color {
        match tone {
            Tone::Info => Color::White,
            Tone::Welcome | Tone::Magic => Color::Rgb(114, 159, 255),
            Tone::Danger => Color::Rgb(255, 114, 114),
            Tone::Attack => Color::Rgb(191, 0, 0),
            Tone::Miss => Color::Rgb(0, 191, 0),
            Tone::Death => Color::Rgb(255, 114, 146),
            Tone::Warning => Color::Rgb(127, 191, 0),
            Tone::Success => Color::Rgb(114, 255, 114),
            Tone::Prompt => Color::Rgb(114, 255, 255),
            Tone::Recovery => Color::Rgb(255, 159, 63),
            Tone::Descend => Color::Rgb(178, 114, 255),
        }
    }

    /// Base background of a terrain cell
    pub fn terrain(&self, wall: bool, visible: bool) -> Color {
        match (wall, visible) {
            (true, true) => self.light_wall,
            (true, false) => self.dark_wall,
            (false, true) => self.light_ground,
            (false, false) => self.dark_ground,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_tone_is_readable_on_black() {
        let theme = Theme::default();
        for tone in Tone::iter() {
            assert_ne!(theme.tone(tone), Color::Black, "{tone}");
        }
    }

    #[test]
    fn test_terrain_shades_differ() {
        let theme = Theme::default();
        assert_ne!(theme.terrain(true, true), theme.terrain(true, false));
        assert_ne!(theme.terrain(false, true), theme.terrain(false, false));
        assert_ne!(theme.terrain(true, true), theme.terrain(false, true));
    }
}
