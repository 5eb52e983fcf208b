//! The randomness seam for every stat roll, damage roll, and probability
//! check.
//!
//! Production code passes `rand::thread_rng()` or a seeded `ChaCha8Rng`;
//! tests swap in the deterministic stubs below without touching any other
//! component.

use rand::Rng;

pub trait Dice {
    /// Uniform draw over the inclusive range `[low, high]`.
    /// Callers must uphold `low <= high`.
    fn roll(&mut self, low: u32, high: u32) -> u32;

    /// Uniform draw over `[1, 100]`, for percentage checks.
    fn percent(&mut self) -> u32 {
        self.roll(1, 100)
    }
}

/// Any rand RNG works as dice.
impl<R: Rng> Dice for R {
    fn roll(&mut self, low: u32, high: u32) -> u32 {
        self.gen_range(low..=high)
    }
}


#[cfg(test)]
mod tests {
    use super::stub::{MidpointDice, ScriptedDice};
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_roll_stays_inclusive() {
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        for _ in 0..1000 {
            let value = rng.roll(10, 20);
            assert!((10..=20).contains(&value));
        }
    }

    #[test]
    fn test_roll_degenerate_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        assert_eq!(rng.roll(7, 7), 7);
    }

    #[test]
    fn test_percent_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..1000 {
            let value = rng.percent();
            assert!((1..=100).contains(&value));
        }
    }

    #[test]
    fn test_midpoint_stub() {
        let mut dice = MidpointDice;
        assert_eq!(dice.roll(10, 20), 15);
        assert_eq!(dice.roll(5, 8), 6);
    }

    #[test]
    fn test_scripted_stub_clamps() {
        let mut dice = ScriptedDice::new(&[0, 200]);
        assert_eq!(dice.roll(3, 6), 3);
        assert_eq!(dice.roll(3, 6), 6);
    }
}
