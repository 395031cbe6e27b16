//! Random number generation for dice
//!
//! Uses a seeded ChaCha RNG so a game can be replayed from its seed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of die faces.
///
/// The game only ever asks for single faces; `roll` is built on top of it so
/// a scripted implementation only has to hand out faces in order.
pub trait DiceRoller {
    /// Roll one die with `sides` faces, returning 1..=sides
    fn roll_die(&mut self, sides: u32) -> u32;

    /// Roll `count` independent dice, preserving roll order
    fn roll(&mut self, count: usize, sides: u32) -> Vec<u32> {
        (0..count).map(|_| self.roll_die(sides)).collect()
    }
}

/// Game random number generator
///
/// Wraps ChaCha8Rng for reproducible dice.
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: ChaCha8Rng,
    seed: u64,
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

    /// Returns 1..n, or 0 if n is 0
    pub fn rnd(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(1..=n)
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl DiceRoller for GameRng {
    fn roll_die(&mut self, sides: u32) -> u32 {
        self.rnd(sides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rnd_bounds() {
        let mut rng = GameRng::new(42);
        for _ in 0..1000 {
            let n = rng.rnd(6);
            assert!((1..=6).contains(&n));
        }
    }

    #[test]
    fn test_roll_length_and_bounds() {
        let mut rng = GameRng::new(7);
        for count in 0..6 {
            let roll = rng.roll(count, 6);
            assert_eq!(roll.len(), count);
            assert!(roll.iter().all(|&d| (1..=6).contains(&d)));
        }
    }

    #[test]
    fn test_reproducibility() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.roll(3, 6), rng2.roll(3, 6));
        }
    }

    #[test]
    fn test_every_face_shows_up() {
        let mut rng = GameRng::new(1);
        let mut seen = [false; 7];
        for _ in 0..600 {
            seen[rng.roll_die(6) as usize] = true;
        }
        assert!(seen[1..].iter().all(|&s| s));
        assert!(!seen[0]);
    }

    #[test]
    fn test_single_sided_die() {
        let mut rng = GameRng::new(3);
        assert_eq!(rng.roll(4, 1), vec![1, 1, 1, 1]);
    }

    #[test]
    fn test_zero_sides() {
        let mut rng = GameRng::new(42);
        assert_eq!(rng.rnd(0), 0);
    }

    #[test]
    fn test_seed_is_kept() {
        assert_eq!(GameRng::new(99).seed(), 99);
    }
}
