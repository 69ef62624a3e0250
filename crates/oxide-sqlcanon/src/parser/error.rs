//! Parser error types.

use thiserror::Error;

use crate::lexer::{LexError, Span, Token};

/// A token the grammar does not accept at its position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unexpected {found} at line {line}: expected {expected}")]
pub struct SyntaxError {
    /// What the parser was looking for.
    pub expected: String,
    /// The offending token, rendered for humans.
    pub found: String,
    /// 1-based line of the offending token.
    pub line: usize,
    /// The location of the offending token.
    pub span: Span,
}

impl SyntaxError {
    /// Creates an "unexpected token" error.
    #[must_use]
    pub fn unexpected(expected: impl Into<String>, found: &Token) -> Self {
        Self {
            expected: expected.into(),
            found: found.kind.to_string(),
            line: found.span.line,
            span: found.span,
        }
    }
}

/// Any failure of [`crate::parse`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// The input could not be tokenized.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The tokens do not form a statement.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

impl ParseError {
    /// Returns the 1-based line the error was reported at.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Lex(e) => e.line,
            Self::Syntax(e) => e.line,
        }
    }
}
