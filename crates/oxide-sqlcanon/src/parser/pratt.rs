//! Pratt expression parser for operator precedence.
//!
//! Binding powers, loosest first: `OR`/`XOR`, `AND`, prefix `NOT`, the
//! comparison family (`= <> != < <= > >= IS LIKE BETWEEN IN` and their `NOT`
//! forms), additive, multiplicative, prefix `+`/`-`.
//!
//! Logical and comparison operators associate to the left. Arithmetic
//! operators associate to the right, so `1 - 2 - 3` groups as
//! `1 - (2 - 3)`; the renderer always spells the grouping out.

use crate::ast::{BinaryOp, UnaryOp};
use crate::lexer::{Keyword, TokenKind};

/// Binding power of the comparison family.
pub const COMPARISON_BP: (u8, u8) = (7, 8);

/// Minimum binding power for operands of BETWEEN bounds, so that the `AND`
/// separating them is never taken as a conjunction.
pub const ADDITIVE_BP: u8 = ADDITIVE.1;

const ADDITIVE: (u8, u8) = (10, 9);
const MULTIPLICATIVE: (u8, u8) = (12, 11);

/// Returns the prefix binding power for a token.
///
/// This is the binding power the operand is parsed with. Returns `None` if
/// the token is not a prefix operator.
#[must_use]
pub const fn prefix_binding_power(kind: &TokenKind) -> Option<u8> {
    match kind {
        TokenKind::Plus | TokenKind::Minus => Some(13),
        TokenKind::Keyword(Keyword::Not) => Some(5),
        _ => None,
    }
}

/// Returns the infix binding power for a token.
///
/// Returns `(left_bp, right_bp)` where:
/// - Higher binding power = binds tighter
/// - Left associative: left_bp < right_bp
/// - Right associative: left_bp > right_bp
///
/// Returns `None` if the token is not an infix operator. A `NOT` here
/// introduces `NOT IN`, `NOT BETWEEN` or `NOT LIKE`.
#[must_use]
pub const fn infix_binding_power(kind: &TokenKind) -> Option<(u8, u8)> {
    match kind {
        // Logical OR and XOR (lowest precedence)
        TokenKind::Keyword(Keyword::Or | Keyword::Xor) => Some((1, 2)),

        // Logical AND
        TokenKind::Keyword(Keyword::And) => Some((3, 4)),

        // Comparison operators and predicates
        TokenKind::Eq
        | TokenKind::NotEq
        | TokenKind::Lt
        | TokenKind::LtEq
        | TokenKind::Gt
        | TokenKind::GtEq
        | TokenKind::Keyword(
            Keyword::Is | Keyword::In | Keyword::Between | Keyword::Like | Keyword::Not,
        ) => Some(COMPARISON_BP),

        // Additive
        TokenKind::Plus | TokenKind::Minus => Some(ADDITIVE),

        // Multiplicative
        TokenKind::Star | TokenKind::Slash => Some(MULTIPLICATIVE),

        _ => None,
    }
}

/// Converts a token to a binary operator.
///
/// `<>`/`!=` map to [`BinaryOp::Eq`]; the parser wraps the result in a NOT.
#[must_use]
pub const fn token_to_binary_op(kind: &TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Plus => Some(BinaryOp::Add),
        TokenKind::Minus => Some(BinaryOp::Sub),
        TokenKind::Star => Some(BinaryOp::Mul),
        TokenKind::Slash => Some(BinaryOp::Div),
        TokenKind::Eq | TokenKind::NotEq => Some(BinaryOp::Eq),
        TokenKind::Lt => Some(BinaryOp::Lt),
        TokenKind::LtEq => Some(BinaryOp::LtEq),
        TokenKind::Gt => Some(BinaryOp::Gt),
        TokenKind::GtEq => Some(BinaryOp::GtEq),
        TokenKind::Keyword(Keyword::And) => Some(BinaryOp::And),
        TokenKind::Keyword(Keyword::Or) => Some(BinaryOp::Or),
        TokenKind::Keyword(Keyword::Xor) => Some(BinaryOp::Xor),
        TokenKind::Keyword(Keyword::Like) => Some(BinaryOp::Like),
        TokenKind::Keyword(Keyword::Is) => Some(BinaryOp::Is),
        _ => None,
    }
}

/// Converts a token to a unary operator.
#[must_use]
pub const fn token_to_unary_op(kind: &TokenKind) -> Option<UnaryOp> {
    match kind {
        TokenKind::Plus => Some(UnaryOp::Plus),
        TokenKind::Minus => Some(UnaryOp::Minus),
        TokenKind::Keyword(Keyword::Not) => Some(UnaryOp::Not),
        _ => None,
    }
}
