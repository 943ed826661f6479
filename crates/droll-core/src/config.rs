//! Roll engine limits.

use serde::{Deserialize, Serialize};

/// Default cap on extra dice a single exploding die may add.
pub const MAX_EXPLOSIONS_PER_DIE: u32 = 1000;

/// Default cap on explode-on-total rounds in one roll.
pub const MAX_TOTAL_EXPLOSION_ROUNDS: u32 = 1000;

/// Bounds on explosion chains. Reaching a cap ends the chain quietly; the
/// roll still succeeds with the dice drawn so far.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollLimits {
    /// Extra dice one exploding die may add.
    pub max_explosions_per_die: u32,
    /// Extra rounds an explode-on-total roll may add.
    pub max_total_explosion_rounds: u32,
}

impl Default for RollLimits {
    fn default() -> Self {
        Self {
            max_explosions_per_die: MAX_EXPLOSIONS_PER_DIE,
            max_total_explosion_rounds: MAX_TOTAL_EXPLOSION_ROUNDS,
        }
    }
}

impl RollLimits {
    /// Set the per-die explosion cap.
    pub fn with_max_explosions_per_die(mut self, max: u32) -> Self {
        self.max_explosions_per_die = max;
        self
    }

    /// Set the explode-on-total round cap.
    pub fn with_max_total_explosion_rounds(mut self, max: u32) -> Self {
        self.max_total_explosion_rounds = max;
        self
    }
}
