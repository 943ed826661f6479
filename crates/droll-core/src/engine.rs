//! Rolling a [`DieSpec`].
//!
//! Every roll validates the die code first. An invalid code
//! yields an error carrying the code as written and never touches the RNG.

use rand::Rng;
use tracing::debug;

use crate::config::RollLimits;
use crate::dice::RollOutcome;
use crate::error::NotationResult;
use crate::notation::{DieSpec, Mode};
use crate::resolution::{self, count, explode, keep};

impl DieSpec {
    /// Roll with the thread-local RNG and default limits.
    ///
    /// # Errors
    ///
    /// Returns the validation error if the code cannot be rolled.
    pub fn roll(&self) -> NotationResult<RollOutcome> {
        self.roll_with(&mut rand::rng())
    }

    /// Roll with the given RNG and default limits.
    ///
    /// # Errors
    ///
    /// Returns the validation error if the code cannot be rolled.
    pub fn roll_with<R: Rng + ?Sized>(&self, rng: &mut R) -> NotationResult<RollOutcome> {
        self.roll_with_limits(rng, &RollLimits::default())
    }

    /// Roll with the given RNG and explosion limits.
    ///
    /// # Errors
    ///
    /// Returns the validation error if the code cannot be rolled.
    pub fn roll_with_limits<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        limits: &RollLimits,
    ) -> NotationResult<RollOutcome> {
        if let Err(err) = self.validate() {
            debug!(code = self.code(), error = %err, "refusing to roll");
            return Err(err);
        }

        let range = self.face_range();
        let mut rolls = Vec::new();
        for _ in 0..self.dice() {
            rolls.extend(explode::roll_die(
                range,
                self.mode(),
                self.threshold(),
                limits,
                rng,
            ));
        }

        if self.mode() == Mode::ExplodeAll {
            rolls = explode::explode_on_total(
                rolls,
                range,
                self.threshold(),
                self.dice(),
                limits,
                rng,
            );
        }

        let resolved = resolution::resolve(self.mode(), self.threshold(), &rolls);
        let total = self.sign().apply(resolved, self.modifier());
        debug!(code = self.code(), ?rolls, total, "rolled");

        Ok(RollOutcome { rolls, total })
    }

    /// Add explode-on-total rounds to `rolls` using this code's faces,
    /// threshold, and dice count.
    pub fn explode_on_total<R: Rng + ?Sized>(&self, rolls: Vec<u32>, rng: &mut R) -> Vec<u32> {
        explode::explode_on_total(
            rolls,
            self.face_range(),
            self.threshold(),
            self.dice(),
            &RollLimits::default(),
            rng,
        )
    }

    /// Sum of the `threshold` highest values in `rolls`.
    pub fn keep_highest(&self, rolls: &[u32]) -> i64 {
        keep::highest(rolls, self.threshold())
    }

    /// Sum of the `threshold` lowest values in `rolls`.
    pub fn keep_lowest(&self, rolls: &[u32]) -> i64 {
        keep::lowest(rolls, self.threshold())
    }

    /// Number of values in `rolls` at or above the threshold.
    pub fn count_at_or_above(&self, rolls: &[u32]) -> i64 {
        count::at_or_above(rolls, self.threshold())
    }

    /// Number of values in `rolls` at or below the threshold.
    pub fn count_at_or_below(&self, rolls: &[u32]) -> i64 {
        count::at_or_below(rolls, self.threshold())
    }
}
