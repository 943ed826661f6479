//! Die code notation: `[count]<mode>[0]<faces>[.<threshold>][<sign><modifier>]`.
//!
//! A code is parsed once into a [`DieSpec`] and may then be validated and
//! rolled any number of times. Parsing only fails when the code has no usable
//! mode letter; every other grammar or range problem is reported by
//! [`DieSpec::validate`], which runs before each roll.

pub mod lexer;

use std::fmt;
use std::ops::Range;

use serde::Serialize;
use tracing::debug;

use crate::dice::FaceRange;
use crate::error::{DegenerateReason, MalformedReason, NotationError, NotationResult};

use lexer::Lexeme;

/// How the dice of a code are resolved into a total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// `d`: sum all dice.
    Sum,
    /// `x`: each die rolling at or above the threshold adds another die.
    Explode,
    /// `e`: add another die while the running total meets the threshold times the dice.
    ExplodeAll,
    /// `k`: sum the `threshold` highest dice.
    KeepHighest,
    /// `K`: sum the `threshold` lowest dice.
    KeepLowest,
    /// `n`: count dice at or above the threshold.
    CountMin,
    /// `N`: count dice at or below the threshold.
    CountMax,
}

impl Mode {
    /// Look up the mode for a die type letter. Letters are case sensitive.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'd' => Some(Self::Sum),
            'x' => Some(Self::Explode),
            'e' => Some(Self::ExplodeAll),
            'k' => Some(Self::KeepHighest),
            'K' => Some(Self::KeepLowest),
            'n' => Some(Self::CountMin),
            'N' => Some(Self::CountMax),
            _ => None,
        }
    }

    /// The letter that selects this mode in a die code.
    pub fn letter(self) -> char {
        match self {
            Self::Sum => 'd',
            Self::Explode => 'x',
            Self::ExplodeAll => 'e',
            Self::KeepHighest => 'k',
            Self::KeepLowest => 'K',
            Self::CountMin => 'n',
            Self::CountMax => 'N',
        }
    }

    /// Returns true for the keep-highest and keep-lowest modes.
    pub fn is_keep(self) -> bool {
        matches!(self, Self::KeepHighest | Self::KeepLowest)
    }

    /// Threshold used when the code gives none.
    ///
    /// Keep and count modes default to 1; summing and exploding modes default
    /// to the face count, so explosions trigger on the highest face only.
    pub fn default_threshold(self, faces: u32) -> u32 {
        match self {
            Self::KeepHighest | Self::KeepLowest | Self::CountMin | Self::CountMax => 1,
            Self::Sum | Self::Explode | Self::ExplodeAll => faces,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Polarity of the flat modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Sign {
    /// Add the modifier.
    #[default]
    #[serde(rename = "+")]
    Plus,
    /// Subtract the modifier.
    #[serde(rename = "-")]
    Minus,
}

impl Sign {
    /// Apply `modifier` to `value` with this sign.
    pub fn apply(self, value: i64, modifier: u32) -> i64 {
        match self {
            Self::Plus => value + i64::from(modifier),
            Self::Minus => value - i64::from(modifier),
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
        }
    }
}

/// A parsed die code.
///
/// Built once by [`parse`] and reused for any number of rolls. A `DieSpec`
/// is not necessarily rollable; see [`DieSpec::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DieSpec {
    code: String,
    dice: u32,
    mode: Mode,
    faces: u32,
    zero_based: bool,
    threshold: u32,
    sign: Sign,
    modifier: u32,
}

/// Parse a die code.
///
/// Fails with [`NotationError::Malformed`] when no mode letter can be found,
/// the letter is not a known mode, something other than a count precedes it,
/// or a number overflows. Codes such as `d`, `1d` or `0d6` parse but do not
/// validate.
pub fn parse(code: &str) -> NotationResult<DieSpec> {
    let clauses = lexer::split(code).map_err(|(reason, span)| malformed(code, reason, span))?;

    let letter = clauses.letter.text.chars().next().unwrap_or_default();
    let mode = Mode::from_letter(letter).ok_or_else(|| {
        malformed(
            code,
            MalformedReason::UnknownMode(letter),
            clauses.letter.span(),
        )
    })?;

    let dice = match clauses.count {
        Some(count) => number(code, count)?,
        None => 1,
    };
    let faces = match clauses.faces {
        Some(faces) => number(code, faces)?,
        None => 0,
    };
    let zero_based = clauses.faces.is_some_and(|f| f.text.starts_with('0'));
    let threshold = match clauses.threshold {
        Some(threshold) => number(code, threshold)?,
        None => mode.default_threshold(faces),
    };

    let (sign, modifier) = match clauses.modifier {
        Some(clause) => {
            let sign = if clause.sign.text == "-" {
                Sign::Minus
            } else {
                Sign::Plus
            };
            let modifier = match clause.digits {
                Some(digits) => number(code, digits)?,
                None => 0,
            };
            (sign, modifier)
        }
        None => (Sign::Plus, 0),
    };

    let spec = DieSpec {
        code: code.to_string(),
        dice,
        mode,
        faces,
        zero_based,
        threshold,
        sign,
        modifier,
    };
    debug!(
        code,
        dice, %mode, faces, zero_based, threshold, %sign, modifier,
        "parsed die code"
    );
    Ok(spec)
}

impl DieSpec {
    /// The die code as written.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Number of dice to roll.
    pub fn dice(&self) -> u32 {
        self.dice
    }

    /// How the dice are resolved.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Highest face value of one die.
    pub fn faces(&self) -> u32 {
        self.faces
    }

    /// Whether die values start at 0 instead of 1.
    pub fn zero_based(&self) -> bool {
        self.zero_based
    }

    /// Explode trigger, keep count, or count cutoff, depending on the mode.
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Polarity of the modifier.
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Flat amount added or subtracted after resolution.
    pub fn modifier(&self) -> u32 {
        self.modifier
    }

    /// The value range of one die.
    pub fn face_range(&self) -> FaceRange {
        FaceRange::new(self.faces, self.zero_based)
    }

    /// Returns true if this code can be rolled.
    pub fn valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Check the code shape and numeric constraints.
    ///
    /// # Errors
    ///
    /// [`NotationError::Malformed`] if the dice count has more than two
    /// digits or the face count is missing; [`NotationError::Degenerate`] if
    /// the numbers describe a roll that cannot be made.
    pub fn validate(&self) -> NotationResult<()> {
        lexer::split(&self.code)
            .and_then(|clauses| lexer::check_shape(&clauses))
            .map_err(|(reason, span)| malformed(&self.code, reason, span))?;

        match self.degenerate_reason() {
            Some(reason) => Err(NotationError::Degenerate {
                code: self.code.clone(),
                reason,
            }),
            None => Ok(()),
        }
    }

    fn degenerate_reason(&self) -> Option<DegenerateReason> {
        if self.faces < 1 {
            return Some(DegenerateReason::ZeroFaces);
        }
        if self.threshold < 1 {
            return Some(DegenerateReason::ZeroThreshold);
        }
        if self.dice < 1 {
            return Some(DegenerateReason::ZeroDice);
        }
        // Zero-based dice are fine with a single face and a threshold of 1.
        if !self.zero_based {
            if self.faces < 2 {
                return Some(DegenerateReason::SingleFace);
            }
            if !self.mode.is_keep() && self.threshold < 2 {
                return Some(DegenerateReason::ThresholdOfOne);
            }
        }
        None
    }
}

fn malformed(code: &str, reason: MalformedReason, span: Range<usize>) -> NotationError {
    NotationError::Malformed {
        code: code.to_string(),
        reason,
        span,
    }
}

fn number(code: &str, lexeme: Lexeme<'_>) -> NotationResult<u32> {
    lexeme
        .text
        .parse()
        .map_err(|_| malformed(code, MalformedReason::NumberTooLarge, lexeme.span()))
}
