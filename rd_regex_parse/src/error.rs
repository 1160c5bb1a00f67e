/**
 * Parse errors.
 */

use std::fmt;
use thiserror::Error;

/// What went wrong while parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// The input ran out where a token was required.
    #[error("unexpected end of pattern")]
    UnexpectedEnd,

    /// An atom can't start with this character.
    #[error("unknown character {0:?}")]
    UnknownCharacter(char),

    /// A required delimiter was missing.
    #[error("expected {expected:?}, found {}", Found(.found))]
    ExpectedCharacterMismatch {
        expected: char,
        found: Option<char>,
    },

    /// A character class entry was not a literal.
    #[error("expected a literal character, found {}", Found(.found))]
    ExpectedLiteralMismatch {
        found: Option<char>,
    },

    /// A character class range whose end precedes its start.
    #[error("inverted range {start:?}-{end:?} in character class")]
    InvertedRange {
        start: char,
        end: char,
    },

    /// Input left over after the expression, only reported in strict mode.
    #[error("unexpected trailing input starting with {0:?}")]
    TrailingInput(char),
}

/// A parse failure along with the zero-based character offset it was
/// detected at.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at offset {offset}")]
pub struct ParseError {
    kind: ParseErrorKind,
    offset: usize,
}

pub type ParseResult<T> = Result<T, ParseError>;

impl ParseError {
    pub fn new(kind: ParseErrorKind, offset: usize) -> Self {
        Self{ kind, offset }
    }

    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    /// Offset in characters, not bytes.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    /// Renders the pattern with a caret under the offending character:
    ///
    /// ```text
    /// (a|b
    ///     ^ expected ')', found end of pattern
    /// ```
    pub fn render(&self, pattern: &str) -> String {
        format!("{}\n{:>width$} {}", pattern, "^", self.kind, width = self.offset + 1)
    }
}

/// Displays a looked-at character, or the end of the input.
struct Found<'a>(&'a Option<char>);

impl fmt::Display for Found<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(c) => write!(f, "{:?}", c),
            None => write!(f, "end of pattern"),
        }
    }
}

// Tests ///////////////////////////////////////////////////////////////////////
