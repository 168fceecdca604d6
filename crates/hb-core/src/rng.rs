//! Random number generation
//!
//! Uses a seeded ChaCha RNG so combat and mutation rolls are reproducible.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// How a dice-plus-constant roll is resolved.
///
/// Live combat rolls the dice; damage displays use the expectation or a
/// bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter)]
pub enum RateMode {
    #[default]
    Random,
    Average,
    /// Smallest roll, which is the worst case for the attacker.
    Min,
    /// Largest roll, which is the best case for the attacker.
    Max,
}

/// Game random number generator
///
/// Wraps ChaCha8Rng for reproducible random number generation.
/// Only the seed is serialized.
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: ChaCha8Rng,
    seed: u64,
}

// Custom serialization - only serialize seed, recreate RNG on deserialize
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

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// randint0(n) - returns 0..n-1
    ///
    /// Returns 0 if n is not positive.
    pub fn randint0(&mut self, n: i32) -> i32 {
        if n <= 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }

    /// randint1(n) - returns 1..=n
    ///
    /// Returns 0 if n is not positive.
    pub fn randint1(&mut self, n: i32) -> i32 {
        if n <= 0 {
            return 0;
        }
        self.rng.gen_range(1..=n)
    }

    /// damroll(n, m) - sum of n rolls of 1..=m
    pub fn damroll(&mut self, n: i32, m: i32) -> i32 {
        (0..n.max(0)).map(|_| self.randint1(m)).sum()
    }

    /// Returns true with probability 1/n
    pub fn one_in(&mut self, n: i32) -> bool {
        self.randint0(n) == 0
    }

    /// Returns true with probability percent/100
    pub fn percent(&mut self, percent: i32) -> bool {
        self.randint0(100) < percent
    }

    /// `dice` sides plus `fix`, resolved per `mode`.
    pub fn rate_roll(&mut self, dice: i32, fix: i32, mode: RateMode) -> i32 {
        match mode {
            RateMode::Random => self.randint1(dice) + fix,
            RateMode::Average => (dice + 1) / 2 + fix,
            RateMode::Min => fix + 1,
            RateMode::Max => dice + fix,
        }
    }

    /// Choose a random element from a slice
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            let idx = self.randint0(items.len() as i32) as usize;
            items.get(idx)
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
    fn test_randint0_bounds() {
        let mut rng = GameRng::new(42);
        for _ in 0..1000 {
            let n = rng.randint0(10);
            assert!((0..10).contains(&n));
        }
    }

    #[test]
    fn test_randint1_bounds() {
        let mut rng = GameRng::new(42);
        for _ in 0..1000 {
            let n = rng.randint1(6);
            assert!((1..=6).contains(&n));
        }
    }

    #[test]
    fn test_degenerate_ranges() {
        let mut rng = GameRng::new(1);
        assert_eq!(rng.randint0(0), 0);
        assert_eq!(rng.randint1(0), 0);
        assert_eq!(rng.randint1(-5), 0);
        assert!(rng.one_in(1));
    }

    #[test]
    fn test_damroll_bounds() {
        let mut rng = GameRng::new(7);
        for _ in 0..500 {
            let n = rng.damroll(3, 6);
            assert!((3..=18).contains(&n));
        }
        assert_eq!(rng.damroll(0, 6), 0);
    }

    #[test]
    fn test_rate_roll_fixed_modes() {
        let mut rng = GameRng::new(3);
        assert_eq!(rng.rate_roll(4, 7, RateMode::Average), 9);
        assert_eq!(rng.rate_roll(4, 7, RateMode::Min), 8);
        assert_eq!(rng.rate_roll(4, 7, RateMode::Max), 11);
        for _ in 0..100 {
            let r = rng.rate_roll(4, 7, RateMode::Random);
            assert!((8..=11).contains(&r));
        }
    }

    #[test]
    fn test_deterministic() {
        let mut a = GameRng::new(12345);
        let mut b = GameRng::new(12345);
        for _ in 0..100 {
            assert_eq!(a.randint0(1000), b.randint0(1000));
        }
    }

    #[test]
    fn test_serialize_seed_only() {
        let rng = GameRng::new(99);
        let json = serde_json::to_string(&rng).unwrap();
        assert_eq!(json, "99");
        let back: GameRng = serde_json::from_str(&json).unwrap();
        assert_eq!(back.seed(), 99);
    }
}
