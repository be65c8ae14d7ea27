//! Random number generation for GEAR
//!
//! Uses a seeded ChaCha RNG so a seed reproduces a whole game.

use std::ops::RangeInclusive;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Game random number generator
///
/// Wraps ChaCha8Rng. Only the seed is serialized: a restored game draws from
/// a fresh stream of the same seed rather than continuing the old one.
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl Serialize for GameRng {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.seed.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for GameRng {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let seed = u64::deserialize(deserializer)?;
        Ok(GameRng::new(seed))
    }
}

impl GameRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed
    pub fn from_entropy() -> Self {
        let seed = rand::random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform integer in `lo..=hi`, both ends included
    ///
    /// Bounds given in the wrong order are swapped.
    pub fn range(&mut self, lo: i32, hi: i32) -> i32 {
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        self.rng.gen_range(lo..=hi)
    }

    /// [`range`](Self::range) over an inclusive range value
    pub fn roll(&mut self, bounds: RangeInclusive<i32>) -> i32 {
        self.range(*bounds.start(), *bounds.end())
    }

    /// Fair coin flip
    pub fn coin(&mut self) -> bool {
        self.range(0, 1) == 1
    }

    /// Choose a random element from a slice
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            items.get(self.rng.gen_range(0..items.len()))
        }
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_is_inclusive() {
        let mut rng = GameRng::new(42);
        let mut seen_lo = false;
        let mut seen_hi = false;
        for _ in 0..1000 {
            let n = rng.range(-3, 3);
            assert!((-3..=3).contains(&n));
            seen_lo |= n == -3;
            seen_hi |= n == 3;
        }
        assert!(seen_lo && seen_hi);
    }

    #[test]
    fn test_range_swapped_bounds() {
        let mut rng = GameRng::new(7);
        for _ in 0..100 {
            let n = rng.range(5, 2);
            assert!((2..=5).contains(&n));
        }
        assert_eq!(rng.range(4, 4), 4);
    }

    #[test]
    fn test_roll_uses_range_bounds() {
        let mut rng = GameRng::new(3);
        for _ in 0..200 {
            let n = rng.roll(10..=20);
            assert!((10..=20).contains(&n));
        }
    }

    #[test]
    fn test_reproducibility() {
        let mut rng1 = GameRng::new(12345);
        let mut rng2 = GameRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.range(0, 1000), rng2.range(0, 1000));
        }
    }

    #[test]
    fn test_serializes_seed_only() {
        let mut rng = GameRng::new(99);
        rng.range(0, 10);
        let json = serde_json::to_string(&rng).unwrap();
        assert_eq!(json, "99");

        let mut restored: GameRng = serde_json::from_str(&json).unwrap();
        let mut fresh = GameRng::new(99);
        assert_eq!(restored.seed(), 99);
        assert_eq!(restored.range(0, 1000), fresh.range(0, 1000));
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(42);
        let items = ["a", "b", "c"];
        let mut seen = Vec::new();
        for _ in 0..50 {
            let item = rng.choose(&items).unwrap();
            assert!(items.contains(item));
            if !seen.contains(item) {
                seen.push(*item);
            }
        }
        assert_eq!(seen.len(), items.len());

        assert_eq!(rng.choose(&[7]), Some(&7));
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }
}
