//! Die code parser and roll engine for tabletop role-playing games.
//!
//! A die code such as `3x4.3+7` is parsed into a [`DieSpec`], validated, and
//! rolled into a [`RollOutcome`] holding every drawn die and the final total.
//! Seven modes are supported: summing (`d`), exploding per die (`x`),
//! exploding on the total (`e`), keeping the highest or lowest dice (`k`, `K`),
//! and counting dice at or above / at or below a threshold (`n`, `N`).
//!
//! ```
//! let spec = droll_core::parse("3d6+2").unwrap();
//! let outcome = spec.roll().unwrap();
//! assert_eq!(outcome.rolls.len(), 3);
//! assert!((5..=20).contains(&outcome.total));
//! ```

pub mod config;
pub mod dice;
mod engine;
pub mod error;
pub mod notation;
pub mod resolution;

pub use config::{MAX_EXPLOSIONS_PER_DIE, MAX_TOTAL_EXPLOSION_ROUNDS, RollLimits};
pub use dice::{FaceRange, RollOutcome, sample_face};
pub use error::{DegenerateReason, MalformedReason, NotationError, NotationResult};
pub use notation::{DieSpec, Mode, Sign, parse};
