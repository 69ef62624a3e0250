//! Lexical errors.

use thiserror::Error;

/// What went wrong while scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    /// No token rule matches at this position.
    #[error("can not match")]
    UnexpectedCharacter,
    /// End of input reached inside a quoted string.
    #[error("unterminated string")]
    UnterminatedString,
    /// A backtick-quoted word is a reserved keyword.
    #[error("reserved keyword used as identifier")]
    ReservedIdentifier,
    /// A numeric literal does not fit its representation.
    #[error("numeric literal out of range")]
    NumberOutOfRange,
}

/// A malformed run of characters in the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} {text:?} at line {line}")]
pub struct LexError {
    /// The kind of failure.
    pub kind: LexErrorKind,
    /// The offending text.
    pub text: String,
    /// 1-based line number where the offending text starts.
    pub line: usize,
    /// Byte offset where the offending text starts.
    pub offset: usize,
}

impl LexError {
    /// Creates a new lexical error.
    #[must_use]
    pub fn new(kind: LexErrorKind, text: impl Into<String>, line: usize, offset: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
            offset,
        }
    }
}
