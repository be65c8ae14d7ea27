//! Screen distortion
//!
//! Corruption makes the explored map flicker. Every time a turn passes a
//! "strobe" is rolled: the higher the corruption, the more likely a strobe
//! from 1 to 4, which tints every terrain cell and scatters glitch colors
//! across it. The calm strobe only sprinkles isolated glitched cells.
//!
//! Each turn fixes a frame seed, so redrawing without a turn passing (mouse
//! motion, menus) shows the same picture.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::style::Color;

const CALM: u8 = 10;

const YELLOW: Color = Color::Rgb(255, 255, 0);
const PINK: Color = Color::Rgb(255, 0, 127);
const FLAME: Color = Color::Rgb(255, 63, 0);
const GREY: Color = Color::Rgb(127, 127, 127);
const BLUE: Color = Color::Rgb(0, 0, 255);
const GREEN: Color = Color::Rgb(0, 255, 0);

/// Per-strobe tint and glitch palette
const STROBES: [(Color, [Color; 5]); 4] = [
    (Color::Rgb(0, 127, 0), [YELLOW, PINK, FLAME, GREY, BLUE]),
    (Color::Rgb(0, 0, 127), [YELLOW, PINK, FLAME, GREY, GREEN]),
    (Color::Rgb(127, 31, 0), [YELLOW, PINK, BLUE, GREY, GREEN]),
    (Color::Rgb(127, 0, 63), [YELLOW, BLUE, FLAME, GREY, GREEN]),
];
const CALM_PALETTE: [Color; 5] = [YELLOW, PINK, FLAME, BLUE, GREEN];

#[derive(Debug, Clone)]
pub struct Distortion {
    rng: StdRng,
    frame_seed: u64,
    strobe: u8,
    level: u32,
    max: u32,
    last_turn: Option<u64>,
    previous_glitched: bool,
}

impl Default for Distortion {
    fn default() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl Distortion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(mut rng: StdRng) -> Self {
        let frame_seed = rng.r#gen();
        Self {
            rng,
            frame_seed,
            strobe: CALM,
            level: 0,
            max: 1,
            last_turn: None,
            previous_glitched: false,
        }
    }

    /// Roll a new strobe if a turn has passed since the last call
    ///
    /// The very first frame is always calm.
    pub fn update(&mut self, turns: u64, corruption: u32, max_corruption: u32) {
        self.level = corruption;
        self.max = max_corruption.max(1);

        match self.last_turn {
            None => self.strobe = CALM,
            Some(last) if last == turns => return,
            Some(_) => {
                self.strobe = if self.roll() {
                    self.rng.gen_range(1..=CALM)
                } else {
                    CALM
                };
            }
        }
        self.last_turn = Some(turns);
        self.frame_seed = self.rng.r#gen();
    }

    pub fn strobe(&self) -> u8 {
        self.strobe
    }

    /// Whether the current strobe tints the whole map
    pub fn is_strobing(&self) -> bool {
        (1..=4).contains(&self.strobe)
    }

    /// Rewind the per-cell draws so this frame matches the last one
    pub fn begin_frame(&mut self) -> FrameDistortion<'_> {
        self.previous_glitched = false;
        FrameDistortion {
            rng: StdRng::seed_from_u64(self.frame_seed),
            distortion: self,
        }
    }

    fn roll(&mut self) -> bool {
        self.level > 0 && self.rng.gen_range(1..=self.max) <= self.level
    }
}

/// Per-cell shading for one frame
pub struct FrameDistortion<'a> {
    distortion: &'a mut Distortion,
    rng: StdRng,
}

impl FrameDistortion<'_> {
    /// Background for a terrain cell whose normal color is `base`
    pub fn shade(&mut self, base: Color) -> Color {
        let d = &mut *self.distortion;
        let glitched = d.level > 0 && self.rng.gen_range(1..=d.max) <= d.level;
        let luck = self.rng.gen_range(0..5);

        if d.is_strobing() {
            let (tint, palette) = STROBES[usize::from(d.strobe - 1)];
            return if glitched { palette[luck] } else { tint };
        }

        if glitched && !d.previous_glitched {
            d.previous_glitched = true;
            CALM_PALETTE[luck]
        } else {
            d.previous_glitched = false;
            base
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_corruption_leaves_colors_alone() {
        let mut d = Distortion::with_seed(1);
        for turn in 0..50 {
            d.update(turn, 0, 10_000);
            assert_eq!(d.strobe(), CALM);
            let mut frame = d.begin_frame();
            for _ in 0..100 {
                assert_eq!(frame.shade(GREY), GREY);
            }
        }
    }

    #[test]
    fn test_first_frame_is_calm() {
        let mut d = Distortion::with_seed(2);
        d.update(0, 10_000, 10_000);
        assert_eq!(d.strobe(), CALM);
    }

    #[test]
    fn test_full_corruption_strobes_eventually() {
        let mut d = Distortion::with_seed(3);
        d.update(0, 10_000, 10_000);
        let strobed = (1..200).any(|turn| {
            d.update(turn, 10_000, 10_000);
            d.is_strobing()
        });
        assert!(strobed);
    }

    #[test]
    fn test_calm_glitches_are_isolated() {
        let mut d = Distortion::with_seed(4);
        d.update(0, 10_000, 10_000);
        let base = Color::Rgb(1, 2, 3);
        let mut frame = d.begin_frame();
        let mut previous = false;
        for _ in 0..500 {
            let glitched = frame.shade(base) != base;
            assert!(!(glitched && previous));
            previous = glitched;
        }
    }

    #[test]
    fn test_redraw_without_turn_is_stable() {
        let mut d = Distortion::with_seed(5);
        d.update(0, 6_000, 10_000);
        d.update(1, 6_000, 10_000);
        let first: Vec<Color> = {
            let mut frame = d.begin_frame();
            (0..64).map(|_| frame.shade(GREY)).collect()
        };
        d.update(1, 6_000, 10_000);
        let second: Vec<Color> = {
            let mut frame = d.begin_frame();
            (0..64).map(|_| frame.shade(GREY)).collect()
        };
        assert_eq!(first, second);
    }
}
