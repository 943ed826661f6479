//! Mode transforms that turn drawn dice into a pre-modifier result.
//!
//! - **Sum** (`d`, `x`, `e`): add every drawn value
//! - **Keep** (`k`, `K`): add only the `threshold` highest or lowest values
//! - **Count** (`n`, `N`): count values at or above / at or below the threshold
//!
//! Explosions happen while dice are drawn, before any transform; see [`explode`].

pub mod count;
pub mod explode;
pub mod keep;

use crate::notation::Mode;

/// Apply the transform for `mode` to the drawn values.
pub fn resolve(mode: Mode, threshold: u32, rolls: &[u32]) -> i64 {
    match mode {
        Mode::Sum | Mode::Explode | Mode::ExplodeAll => sum(rolls),
        Mode::KeepHighest => keep::highest(rolls, threshold),
        Mode::KeepLowest => keep::lowest(rolls, threshold),
        Mode::CountMin => count::at_or_above(rolls, threshold),
        Mode::CountMax => count::at_or_below(rolls, threshold),
    }
}

/// Sum of all values.
pub fn sum(rolls: &[u32]) -> i64 {
    rolls.iter().map(|&v| i64::from(v)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summing_modes() {
        let rolls = [4, 1, 4, 4, 2, 2];
        assert_eq!(resolve(Mode::Sum, 4, &rolls), 17);
        assert_eq!(resolve(Mode::Explode, 4, &rolls), 17);
        assert_eq!(resolve(Mode::ExplodeAll, 4, &rolls), 17);
    }

    #[test]
    fn dispatch_to_keep_and_count() {
        let rolls = [0, 1, 2];
        assert_eq!(resolve(Mode::KeepHighest, 1, &rolls), 2);
        assert_eq!(resolve(Mode::KeepLowest, 2, &rolls), 1);
        assert_eq!(resolve(Mode::CountMin, 1, &rolls), 2);
        assert_eq!(resolve(Mode::CountMax, 1, &rolls), 2);
    }

    #[test]
    fn empty_sum() {
        assert_eq!(sum(&[]), 0);
    }
}
