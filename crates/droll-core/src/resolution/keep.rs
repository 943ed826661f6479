//! Keep-highest and keep-lowest resolution.
//!
//! Only the `n` highest (or lowest) values count towards the total. Ties are
//! broken by value alone, and asking for more dice than were drawn keeps all
//! of them.

/// Sum of the `n` highest values.
pub fn highest(rolls: &[u32], n: u32) -> i64 {
    let mut sorted = rolls.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    sum_first(&sorted, n)
}

/// Sum of the `n` lowest values.
pub fn lowest(rolls: &[u32], n: u32) -> i64 {
    let mut sorted = rolls.to_vec();
    sorted.sort_unstable();
    sum_first(&sorted, n)
}

fn sum_first(sorted: &[u32], n: u32) -> i64 {
    let n = usize::try_from(n).unwrap_or(usize::MAX);
    sorted.iter().take(n).map(|&v| i64::from(v)).sum()
}
