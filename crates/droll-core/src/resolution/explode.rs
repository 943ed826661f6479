//! Exploding dice.
//!
//! - **Per die** (`x`): a die at or above the threshold adds another die,
//!   which may explode in turn.
//! - **On total** (`e`): after all dice are drawn, round `r` adds another
//!   exploding die while the running total is at least
//!   `threshold * (dice + r)`.
//!
//! Both chains are bounded by [`RollLimits`].

use rand::Rng;
use tracing::{trace, warn};

use crate::config::RollLimits;
use crate::dice::FaceRange;
use crate::notation::Mode;

/// Draw one die. In [`Mode::Explode`] keep drawing while the latest value is
/// at or above `threshold`; every other mode draws exactly one value.
pub fn roll_die<R: Rng + ?Sized>(
    range: FaceRange,
    mode: Mode,
    threshold: u32,
    limits: &RollLimits,
    rng: &mut R,
) -> Vec<u32> {
    let mut rolls = vec![range.sample(rng)];
    if mode != Mode::Explode {
        return rolls;
    }

    let mut extra = 0;
    while rolls.last().is_some_and(|&v| v >= threshold) {
        if extra == limits.max_explosions_per_die {
            warn!(extra, threshold, "explosion cap reached for one die");
            break;
        }
        let value = range.sample(rng);
        trace!(value, "die exploded");
        rolls.push(value);
        extra += 1;
    }
    rolls
}

/// Add exploding dice while the running total keeps up with
/// `threshold * (dice + round)`.
///
/// The first check compares against `threshold * dice`; each added die
/// raises the bar by one more `threshold`.
pub fn explode_on_total<R: Rng + ?Sized>(
    mut rolls: Vec<u32>,
    range: FaceRange,
    threshold: u32,
    dice: u32,
    limits: &RollLimits,
    rng: &mut R,
) -> Vec<u32> {
    let mut round: u32 = 0;
    loop {
        let total: u64 = rolls.iter().map(|&v| u64::from(v)).sum();
        let target = u64::from(threshold) * (u64::from(dice) + u64::from(round));
        if total < target {
            break;
        }
        if round == limits.max_total_explosion_rounds {
            warn!(round, total, target, "explode-on-total cap reached");
            break;
        }
        trace!(round, total, target, "total exploded");
        rolls.extend(roll_die(range, Mode::Explode, threshold, limits, rng));
        round += 1;
    }
    rolls
}
