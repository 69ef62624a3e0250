//! # oxide-sqlcanon
//!
//! A SQL parser and canonicalizing renderer.
//!
//! This crate provides:
//! - A hand-written tokenizer with separate scanning states for quoted strings
//! - A recursive descent parser with Pratt expression parsing for SELECT,
//!   INSERT, UPDATE and DELETE
//! - A renderer that turns any parsed statement into one canonical string,
//!   independent of the source's formatting, letter case or quoting style
//!
//! ## Canonical form
//!
//! ```rust
//! use oxide_sqlcanon::canonicalize;
//!
//! let sql = canonicalize("select * from users where not id = 1").unwrap();
//! assert_eq!(sql, "SELECT * FROM `users` WHERE `id` <> 1");
//!
//! let sql = canonicalize("SELECT 1 + 2 * 3 - 4 / 5").unwrap();
//! assert_eq!(sql, "SELECT (1 + ((2 * 3) - (4 / 5)))");
//! ```
//!
//! ## Fixed point
//!
//! Rendering is idempotent: the canonical text parses back to the same tree,
//! so canonicalizing twice changes nothing.
//!
//! ```rust
//! use oxide_sqlcanon::{parse, render};
//!
//! let once = render(&parse("SELECT \"a\"\"b\" FROM t1, t2").unwrap());
//! assert_eq!(once, "SELECT 'a''b' FROM `t1` CROSS JOIN `t2`");
//! assert_eq!(render(&parse(&once).unwrap()), once);
//! ```

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod render;

pub use ast::{Expr, Statement};
pub use lexer::{LexError, LexErrorKind, Lexer, Token, TokenKind};
pub use parser::{ParseError, Parser, SyntaxError};
pub use render::render;

/// Tokenizes `sql` into a token sequence ending with `Eof`.
///
/// # Errors
///
/// Returns a `LexError` for an unrecognized character run or an
/// unterminated string.
pub fn tokenize(sql: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(sql).tokenize()
}

/// Parses exactly one statement.
///
/// # Errors
///
/// Returns `ParseError::Lex` if the text cannot be tokenized and
/// `ParseError::Syntax` if the tokens do not form a statement. No partial
/// tree is ever returned.
pub fn parse(sql: &str) -> Result<Statement, ParseError> {
    let result = tokenize(sql)
        .map_err(ParseError::from)
        .and_then(|tokens| {
            tracing::debug!(tokens = tokens.len(), "tokenized statement");
            Parser::new(tokens)
                .parse_statement()
                .map_err(ParseError::from)
        });

    match &result {
        Ok(statement) => tracing::debug!(kind = statement.kind(), "parsed statement"),
        Err(error) => tracing::debug!(%error, line = error.line(), "failed to parse statement"),
    }
    result
}

/// Parses `sql` and renders it back in canonical form.
///
/// # Errors
///
/// Returns the `ParseError` from [`parse`].
pub fn canonicalize(sql: &str) -> Result<String, ParseError> {
    parse(sql).map(|statement| render(&statement))
}
