//! SQL Lexer/Tokenizer
//!
//! This module provides a hand-written lexer for SQL that produces a stream of
//! tokens. String literals are emitted as a `Quote`, an optional
//! `StringLiteral` body and a closing `Quote`, so the parser decides how a
//! quoted value is classified.

mod error;
mod span;
mod token;
mod tokenizer;

pub use error::{LexError, LexErrorKind};
pub use span::Span;
pub use token::{Keyword, Token, TokenKind};
pub use tokenizer::Lexer;
