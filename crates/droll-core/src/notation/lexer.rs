//! Tokenizer and clause splitting for die codes.
//!
//! A die code is split in three stages, each usable on its own:
//!
//! 1. [`split_modifier`] cuts at the first `+` or `-` and reads the modifier digits.
//! 2. [`split_mode`] cuts the remainder at the first letter, separating the dice
//!    count from the face and threshold clause.
//! 3. [`split_threshold`] reads the face count and an optional `.threshold`.
//!
//! Anything after the last recognized clause is ignored, so `3d6 fire` reads
//! the same as `3d6`.

use std::fmt;
use std::ops::Range;

use logos::Logos;

use crate::error::MalformedReason;

/// Kind of a lexeme in a die code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A run of ASCII digits.
    Digits,
    /// A single ASCII letter.
    Letter,
    /// The threshold separator `.`.
    Dot,
    /// Plus sign `+`.
    Plus,
    /// Minus sign `-`.
    Minus,
    /// Any other character (whitespace, punctuation, non-ASCII).
    Other,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digits => write!(f, "digits"),
            Self::Letter => write!(f, "letter"),
            Self::Dot => write!(f, "."),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Internal logos token. Characters it does not match become [`TokenKind::Other`].
#[derive(Logos, Debug)]
enum RawToken {
    #[regex(r"[0-9]+")]
    Digits,

    #[regex(r"[A-Za-z]")]
    Letter,

    #[token(".")]
    Dot,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,
}

/// A token together with the source text it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexeme<'a> {
    /// What kind of token this is.
    pub kind: TokenKind,
    /// The exact source text.
    pub text: &'a str,
    /// Byte offset of the token in the die code.
    pub start: usize,
}

impl Lexeme<'_> {
    /// Byte range of this lexeme in the die code.
    pub fn span(&self) -> Range<usize> {
        self.start..self.start + self.text.len()
    }

    fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

/// A clause-splitting failure: the reason and the offending byte range.
pub type SplitError = (MalformedReason, Range<usize>);

/// Lex a die code into lexemes. Never fails; unknown characters become
/// [`TokenKind::Other`].
pub fn lex(code: &str) -> Vec<Lexeme<'_>> {
    let mut lexemes = Vec::new();
    let mut lexer = RawToken::lexer(code);

    while let Some(result) = lexer.next() {
        let kind = match result {
            Ok(RawToken::Digits) => TokenKind::Digits,
            Ok(RawToken::Letter) => TokenKind::Letter,
            Ok(RawToken::Dot) => TokenKind::Dot,
            Ok(RawToken::Plus) => TokenKind::Plus,
            Ok(RawToken::Minus) => TokenKind::Minus,
            Err(()) => TokenKind::Other,
        };
        lexemes.push(Lexeme {
            kind,
            text: lexer.slice(),
            start: lexer.span().start,
        });
    }

    lexemes
}

/// The `<sign><modifier>` clause of a die code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModifierClause<'a> {
    /// The `+` or `-` lexeme.
    pub sign: Lexeme<'a>,
    /// The digits right after the sign, if any.
    pub digits: Option<Lexeme<'a>>,
}

/// Stage one: split off the modifier clause at the first sign character.
///
/// Returns the lexemes before the sign and the modifier clause, if present.
pub fn split_modifier<'t, 'a>(
    lexemes: &'t [Lexeme<'a>],
) -> (&'t [Lexeme<'a>], Option<ModifierClause<'a>>) {
    let Some(at) = lexemes
        .iter()
        .position(|l| l.is(TokenKind::Plus) || l.is(TokenKind::Minus))
    else {
        return (lexemes, None);
    };

    let digits = lexemes
        .get(at + 1)
        .filter(|l| l.is(TokenKind::Digits))
        .copied();
    let clause = ModifierClause {
        sign: lexemes[at],
        digits,
    };
    (&lexemes[..at], Some(clause))
}

/// The `[count]<letter>...` part of a die code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeClause<'t, 'a> {
    /// The dice count digits, if given.
    pub count: Option<Lexeme<'a>>,
    /// The mode letter.
    pub letter: Lexeme<'a>,
    /// Everything after the mode letter.
    pub rest: &'t [Lexeme<'a>],
}

/// Stage two: split the die part at the first letter.
///
/// Fails when there is no letter, or when the text before it is anything
/// other than a single run of digits.
pub fn split_mode<'t, 'a>(lexemes: &'t [Lexeme<'a>]) -> Result<ModeClause<'t, 'a>, SplitError> {
    let Some(at) = lexemes.iter().position(|l| l.is(TokenKind::Letter)) else {
        return Err((MalformedReason::MissingMode, covering(lexemes)));
    };

    let count = match &lexemes[..at] {
        [] => None,
        [digits] if digits.is(TokenKind::Digits) => Some(*digits),
        prefix => return Err((MalformedReason::BadCount, covering(prefix))),
    };

    Ok(ModeClause {
        count,
        letter: lexemes[at],
        rest: &lexemes[at + 1..],
    })
}

/// The face count and threshold after the mode letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceClause<'a> {
    /// The face count digits, leading zero included.
    pub faces: Option<Lexeme<'a>>,
    /// The digits after `.`, if given.
    pub threshold: Option<Lexeme<'a>>,
}

/// Stage three: read the face count and an optional `.threshold`.
pub fn split_threshold<'a>(rest: &[Lexeme<'a>]) -> FaceClause<'a> {
    let faces = rest.first().filter(|l| l.is(TokenKind::Digits)).copied();
    let after_faces = if faces.is_some() { &rest[1..] } else { rest };

    let threshold = match after_faces {
        [dot, digits, ..] if dot.is(TokenKind::Dot) && digits.is(TokenKind::Digits) => {
            Some(*digits)
        }
        _ => None,
    };

    FaceClause { faces, threshold }
}

/// All clauses of a die code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clauses<'a> {
    /// Dice count digits.
    pub count: Option<Lexeme<'a>>,
    /// Mode letter.
    pub letter: Lexeme<'a>,
    /// Face count digits.
    pub faces: Option<Lexeme<'a>>,
    /// Explicit threshold digits.
    pub threshold: Option<Lexeme<'a>>,
    /// Modifier clause.
    pub modifier: Option<ModifierClause<'a>>,
}

/// Run all three stages over a die code.
pub fn split(code: &str) -> Result<Clauses<'_>, SplitError> {
    let lexemes = lex(code);
    let (die_part, modifier) = split_modifier(&lexemes);
    let mode = split_mode(die_part)?;
    let face = split_threshold(mode.rest);

    Ok(Clauses {
        count: mode.count,
        letter: mode.letter,
        faces: face.faces,
        threshold: face.threshold,
        modifier,
    })
}

/// Check the grammar shape of split clauses: at most two count digits and a
/// face count after the mode letter.
pub fn check_shape(clauses: &Clauses<'_>) -> Result<(), SplitError> {
    if let Some(count) = clauses.count.filter(|c| c.text.len() > 2) {
        return Err((MalformedReason::CountTooLong, count.span()));
    }

    if clauses.faces.is_none() {
        return Err((MalformedReason::MissingFaces, clauses.letter.span()));
    }

    Ok(())
}

fn covering(lexemes: &[Lexeme<'_>]) -> Range<usize> {
    match (lexemes.first(), lexemes.last()) {
        (Some(first), Some(last)) => first.start..last.span().end,
        _ => 0..0,
    }
}
