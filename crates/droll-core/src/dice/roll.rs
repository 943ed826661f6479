//! Roll outcomes.

use serde::{Deserialize, Serialize};

/// The result of rolling a die code once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    /// Every die value drawn, in draw order, explosions included. Dice
    /// discarded by keep modes are still listed.
    pub rolls: Vec<u32>,
    /// Final result after the mode transform and the modifier.
    pub total: i64,
}

impl RollOutcome {
    /// Number of dice drawn, explosions included.
    pub fn count(&self) -> usize {
        self.rolls.len()
    }

    /// Plain sum of every drawn value, ignoring mode and modifier.
    pub fn raw_sum(&self) -> u64 {
        self.rolls.iter().map(|&v| u64::from(v)).sum()
    }
}
