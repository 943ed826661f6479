//! Error types for die code parsing and validation.

use std::fmt;
use std::ops::Range;

/// Why a die code does not fit the notation grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    /// No mode letter was found.
    MissingMode,
    /// The mode letter is not one of `d`, `x`, `e`, `k`, `K`, `n`, `N`.
    UnknownMode(char),
    /// Something other than a dice count precedes the mode letter.
    BadCount,
    /// The dice count has more than two digits.
    CountTooLong,
    /// No face count follows the mode letter.
    MissingFaces,
    /// A numeric literal does not fit in 32 bits.
    NumberTooLarge,
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingMode => write!(f, "no die type letter"),
            Self::UnknownMode(c) => write!(f, "unknown die type '{c}'"),
            Self::BadCount => write!(f, "expected a dice count before the die type"),
            Self::CountTooLong => write!(f, "dice count has more than two digits"),
            Self::MissingFaces => write!(f, "missing face count after the die type"),
            Self::NumberTooLarge => write!(f, "number too large"),
        }
    }
}

/// Why a well-formed die code cannot be rolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegenerateReason {
    /// The face count is zero.
    ZeroFaces,
    /// The threshold is zero.
    ZeroThreshold,
    /// The dice count is zero.
    ZeroDice,
    /// A die numbered from 1 has fewer than two faces.
    SingleFace,
    /// A threshold of one on a die numbered from 1 outside the keep modes.
    ThresholdOfOne,
}

impl fmt::Display for DegenerateReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroFaces => write!(f, "die has no faces"),
            Self::ZeroThreshold => write!(f, "threshold must be at least 1"),
            Self::ZeroDice => write!(f, "at least one die must be rolled"),
            Self::SingleFace => write!(f, "die numbered from 1 needs at least 2 faces"),
            Self::ThresholdOfOne => write!(f, "threshold of 1 always triggers"),
        }
    }
}

/// Errors produced when a die code is parsed, validated, or rolled.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    /// The code does not match the notation grammar.
    #[error("malformed die code '{code}': {reason}")]
    Malformed {
        /// The die code as written.
        code: String,
        /// What part of the grammar failed.
        reason: MalformedReason,
        /// Byte range within `code` that caused the failure.
        span: Range<usize>,
    },

    /// The code parses but describes a roll that cannot be made.
    #[error("degenerate die code '{code}': {reason}")]
    Degenerate {
        /// The die code as written.
        code: String,
        /// Which constraint was violated.
        reason: DegenerateReason,
    },
}

impl NotationError {
    /// The die code this error refers to.
    pub fn code(&self) -> &str {
        match self {
            Self::Malformed { code, .. } | Self::Degenerate { code, .. } => code,
        }
    }

    /// Returns true if the code does not fit the grammar.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed { .. })
    }

    /// Returns true if the code parses but cannot be rolled.
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::Degenerate { .. })
    }
}

/// Convenience result type for notation operations.
pub type NotationResult<T> = Result<T, NotationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_is_kept_on_both_variants() {
        let malformed = NotationError::Malformed {
            code: "3z6".to_string(),
            reason: MalformedReason::UnknownMode('z'),
            span: 1..2,
        };
        let degenerate = NotationError::Degenerate {
            code: "0d6".to_string(),
            reason: DegenerateReason::ZeroDice,
        };
        assert_eq!(malformed.code(), "3z6");
        assert_eq!(degenerate.code(), "0d6");
        assert!(malformed.is_malformed());
        assert!(!malformed.is_degenerate());
        assert!(degenerate.is_degenerate());
    }

    #[test]
    fn display() {
        let err = NotationError::Degenerate {
            code: "d1".to_string(),
            reason: DegenerateReason::SingleFace,
        };
        assert_eq!(
            err.to_string(),
            "degenerate die code 'd1': die numbered from 1 needs at least 2 faces"
        );

        let err = NotationError::Malformed {
            code: "3z6".to_string(),
            reason: MalformedReason::UnknownMode('z'),
            span: 1..2,
        };
        assert_eq!(err.to_string(), "malformed die code '3z6': unknown die type 'z'");
    }
}
