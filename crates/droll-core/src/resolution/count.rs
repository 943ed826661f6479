//! Threshold counting.
//!
//! The result is how many dice met the threshold, not their values; the
//! modifier is later applied to the count.

/// Count values at or above `threshold`.
pub fn at_or_above(rolls: &[u32], threshold: u32) -> i64 {
    count_where(rolls, |v| v >= threshold)
}

/// Count values at or below `threshold`.
pub fn at_or_below(rolls: &[u32], threshold: u32) -> i64 {
    count_where(rolls, |v| v <= threshold)
}

fn count_where(rolls: &[u32], pred: impl Fn(u32) -> bool) -> i64 {
    rolls.iter().filter(|&&v| pred(v)).count() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_or_above_threshold() {
        assert_eq!(at_or_above(&[0, 1, 2, 3], 2), 2);
        assert_eq!(at_or_above(&[0, 1], 2), 0);

        let one_to_ten: Vec<u32> = (1..=10).collect();
        assert_eq!(at_or_above(&one_to_ten, 10), 1);

        assert_eq!(at_or_above(&[4, 1, 7, 2, 6, 5], 6), 2);
        assert_eq!(at_or_above(&[3, 6, 8, 6, 8, 7], 4), 5);
        assert_eq!(at_or_above(&[6, 9, 7, 8, 7, 7], 4), 6);
        assert_eq!(at_or_above(&[8, 1, 3], 7), 1);
        assert_eq!(at_or_above(&[6, 2, 3], 7), 0);
    }

    #[test]
    fn at_or_below_threshold() {
        assert_eq!(at_or_below(&[0, 1, 2, 3], 1), 2);
        assert_eq!(at_or_below(&[2, 3], 1), 0);

        let one_to_ten: Vec<u32> = (1..=10).collect();
        assert_eq!(at_or_below(&one_to_ten, 1), 1);

        assert_eq!(at_or_below(&[4, 1, 7, 2, 6, 5], 5), 4);
        assert_eq!(at_or_below(&[3, 6, 8, 6, 8, 7], 7), 4);
        assert_eq!(at_or_below(&[6, 9, 7, 8, 7, 7], 7), 4);
        assert_eq!(at_or_below(&[8, 1, 3], 2), 1);
        assert_eq!(at_or_below(&[5, 9, 8], 2), 0);
    }

    #[test]
    fn empty_rolls_count_zero() {
        assert_eq!(at_or_above(&[], 1), 0);
        assert_eq!(at_or_below(&[], 1), 0);
    }
}
