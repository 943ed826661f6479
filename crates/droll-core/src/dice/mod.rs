//! Die value ranges and sampling.
//!
//! A die is numbered either `1..=faces` or, for zero-based dice written with a
//! leading `0` (`d03`), `0..=faces`.

pub mod roll;

pub use roll::RollOutcome;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// The inclusive value range of one die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FaceRange {
    /// Highest value the die can show.
    pub faces: u32,
    /// Whether the lowest value is 0 instead of 1.
    pub zero_based: bool,
}

impl FaceRange {
    /// Create a range for a die with `faces` as its highest value.
    pub fn new(faces: u32, zero_based: bool) -> Self {
        Self { faces, zero_based }
    }

    /// Lowest value the die can show.
    pub fn min(self) -> u32 {
        if self.zero_based { 0 } else { 1 }
    }

    /// Highest value the die can show.
    pub fn max(self) -> u32 {
        self.faces.max(self.min())
    }

    /// Draw one uniformly distributed value from this range.
    pub fn sample<R: Rng + ?Sized>(self, rng: &mut R) -> u32 {
        rng.random_range(self.min()..=self.max())
    }
}

/// Draw one die value: `0..=faces` if `zero_based`, else `1..=faces`.
pub fn sample_face<R: Rng + ?Sized>(zero_based: bool, faces: u32, rng: &mut R) -> u32 {
    FaceRange::new(faces, zero_based).sample(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn range_bounds() {
        let d6 = FaceRange::new(6, false);
        assert_eq!((d6.min(), d6.max()), (1, 6));

        let d03 = FaceRange::new(3, true);
        assert_eq!((d03.min(), d03.max()), (0, 3));
    }

    #[test]
    fn empty_range_collapses_to_minimum() {
        let d0 = FaceRange::new(0, false);
        assert_eq!((d0.min(), d0.max()), (1, 1));
    }

    #[test]
    fn samples_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let one_to_two = sample_face(false, 2, &mut rng);
            assert!((1..=2).contains(&one_to_two));

            let zero_to_two = sample_face(true, 2, &mut rng);
            assert!((0..=2).contains(&zero_to_two));
        }
    }

    #[test]
    fn samples_cover_whole_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let range = FaceRange::new(3, true);
        let mut seen = [false; 4];
        for _ in 0..200 {
            seen[range.sample(&mut rng) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn deterministic_with_seed() {
        let range = FaceRange::new(20, false);
        let mut rng1 = StdRng::seed_from_u64(99);
        let mut rng2 = StdRng::seed_from_u64(99);
        for _ in 0..10 {
            assert_eq!(range.sample(&mut rng1), range.sample(&mut rng2));
        }
    }
}
