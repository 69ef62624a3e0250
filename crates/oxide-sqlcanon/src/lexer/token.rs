//! Token types for the SQL lexer.

use core::fmt;

use super::Span;

/// Reserved SQL keywords.
///
/// A word matching one of these (case-insensitive, whole word) is never an
/// identifier, not even when wrapped in backticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    // Query
    Select,
    Distinct,
    As,
    From,
    Where,
    Group,
    By,
    Having,
    Order,
    Asc,
    Desc,
    Limit,

    // Paging
    Offset,
    Rows,
    Fetch,
    First,
    Next,
    Only,

    // Joins
    Cross,
    Inner,
    Left,
    Right,
    Full,
    Outer,
    Join,
    On,
    Using,

    // Data manipulation
    Insert,
    Into,
    Values,
    Update,
    Set,
    Delete,

    // Predicates and logical operators
    And,
    Or,
    Xor,
    Not,
    Between,
    In,
    Like,
    Is,
    Exists,
    Null,

    // Functions
    Count,
    Avg,
    Max,
    Min,
    Sum,
    Ifnull,
    CurrentUser,

    // CASE
    Case,
    When,
    Then,
    Else,
    End,
}

impl Keyword {
    /// Every reserved keyword, in declaration order.
    pub const ALL: [Self; 55] = [
        Self::Select,
        Self::Distinct,
        Self::As,
        Self::From,
        Self::Where,
        Self::Group,
        Self::By,
        Self::Having,
        Self::Order,
        Self::Asc,
        Self::Desc,
        Self::Limit,
        Self::Offset,
        Self::Rows,
        Self::Fetch,
        Self::First,
        Self::Next,
        Self::Only,
        Self::Cross,
        Self::Inner,
        Self::Left,
        Self::Right,
        Self::Full,
        Self::Outer,
        Self::Join,
        Self::On,
        Self::Using,
        Self::Insert,
        Self::Into,
        Self::Values,
        Self::Update,
        Self::Set,
        Self::Delete,
        Self::And,
        Self::Or,
        Self::Xor,
        Self::Not,
        Self::Between,
        Self::In,
        Self::Like,
        Self::Is,
        Self::Exists,
        Self::Null,
        Self::Count,
        Self::Avg,
        Self::Max,
        Self::Min,
        Self::Sum,
        Self::Ifnull,
        Self::CurrentUser,
        Self::Case,
        Self::When,
        Self::Then,
        Self::Else,
        Self::End,
    ];

    /// Attempts to parse a keyword from a whole word (case-insensitive).
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "SELECT" => Some(Self::Select),
            "DISTINCT" => Some(Self::Distinct),
            "AS" => Some(Self::As),
            "FROM" => Some(Self::From),
            "WHERE" => Some(Self::Where),
            "GROUP" => Some(Self::Group),
            "BY" => Some(Self::By),
            "HAVING" => Some(Self::Having),
            "ORDER" => Some(Self::Order),
            "ASC" => Some(Self::Asc),
            "DESC" => Some(Self::Desc),
            "LIMIT" => Some(Self::Limit),
            "OFFSET" => Some(Self::Offset),
            "ROWS" => Some(Self::Rows),
            "FETCH" => Some(Self::Fetch),
            "FIRST" => Some(Self::First),
            "NEXT" => Some(Self::Next),
            "ONLY" => Some(Self::Only),
            "CROSS" => Some(Self::Cross),
            "INNER" => Some(Self::Inner),
            "LEFT" => Some(Self::Left),
            "RIGHT" => Some(Self::Right),
            "FULL" => Some(Self::Full),
            "OUTER" => Some(Self::Outer),
            "JOIN" => Some(Self::Join),
            "ON" => Some(Self::On),
            "USING" => Some(Self::Using),
            "INSERT" => Some(Self::Insert),
            "INTO" => Some(Self::Into),
            "VALUES" => Some(Self::Values),
            "UPDATE" => Some(Self::Update),
            "SET" => Some(Self::Set),
            "DELETE" => Some(Self::Delete),
            "AND" => Some(Self::And),
            "OR" => Some(Self::Or),
            "XOR" => Some(Self::Xor),
            "NOT" => Some(Self::Not),
            "BETWEEN" => Some(Self::Between),
            "IN" => Some(Self::In),
            "LIKE" => Some(Self::Like),
            "IS" => Some(Self::Is),
            "EXISTS" => Some(Self::Exists),
            "NULL" => Some(Self::Null),
            "COUNT" => Some(Self::Count),
            "AVG" => Some(Self::Avg),
            "MAX" => Some(Self::Max),
            "MIN" => Some(Self::Min),
            "SUM" => Some(Self::Sum),
            "IFNULL" => Some(Self::Ifnull),
            "CURRENT_USER" => Some(Self::CurrentUser),
            "CASE" => Some(Self::Case),
            "WHEN" => Some(Self::When),
            "THEN" => Some(Self::Then),
            "ELSE" => Some(Self::Else),
            "END" => Some(Self::End),
            _ => None,
        }
    }

    /// Returns the keyword as it is written in canonical SQL.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "SELECT",
            Self::Distinct => "DISTINCT",
            Self::As => "AS",
            Self::From => "FROM",
            Self::Where => "WHERE",
            Self::Group => "GROUP",
            Self::By => "BY",
            Self::Having => "HAVING",
            Self::Order => "ORDER",
            Self::Asc => "ASC",
            Self::Desc => "DESC",
            Self::Limit => "LIMIT",
            Self::Offset => "OFFSET",
            Self::Rows => "ROWS",
            Self::Fetch => "FETCH",
            Self::First => "FIRST",
            Self::Next => "NEXT",
            Self::Only => "ONLY",
            Self::Cross => "CROSS",
            Self::Inner => "INNER",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
            Self::Full => "FULL",
            Self::Outer => "OUTER",
            Self::Join => "JOIN",
            Self::On => "ON",
            Self::Using => "USING",
            Self::Insert => "INSERT",
            Self::Into => "INTO",
            Self::Values => "VALUES",
            Self::Update => "UPDATE",
            Self::Set => "SET",
            Self::Delete => "DELETE",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Xor => "XOR",
            Self::Not => "NOT",
            Self::Between => "BETWEEN",
            Self::In => "IN",
            Self::Like => "LIKE",
            Self::Is => "IS",
            Self::Exists => "EXISTS",
            Self::Null => "NULL",
            Self::Count => "COUNT",
            Self::Avg => "AVG",
            Self::Max => "MAX",
            Self::Min => "MIN",
            Self::Sum => "SUM",
            Self::Ifnull => "IFNULL",
            Self::CurrentUser => "CURRENT_USER",
            Self::Case => "CASE",
            Self::When => "WHEN",
            Self::Then => "THEN",
            Self::Else => "ELSE",
            Self::End => "END",
        }
    }
}

/// The kind of token, carrying the decoded value for literal kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Literals
    /// Unsigned integer literal (e.g., `42`, `1.`).
    Integer(i64),
    /// Unsigned float literal (e.g., `3.14`, `.5`).
    Float(f64),
    /// Approximate numeric literal (e.g., `1.5E-3`).
    ApproximateFloat {
        /// The part before the exponent marker.
        mantissa: f64,
        /// The power of ten.
        exponent: i32,
    },
    /// The unescaped body of a quoted string.
    StringLiteral(String),
    /// An opening or closing string delimiter (`'` or `"`).
    Quote(char),
    /// `TRUE` or `FALSE`.
    Boolean(bool),
    /// A placeholder, `?` or `:name`, kept verbatim.
    Variable(String),

    // Identifiers and keywords
    /// Identifier, bare or backtick-quoted (backticks stripped).
    Identifier(String),
    /// Reserved keyword.
    Keyword(Keyword),

    // Operators
    /// =
    Eq,
    /// <> or !=
    NotEq,
    /// <
    Lt,
    /// <=
    LtEq,
    /// >
    Gt,
    /// >=
    GtEq,
    /// +
    Plus,
    /// -
    Minus,
    /// *
    Star,
    /// /
    Slash,

    // Delimiters
    /// (
    LeftParen,
    /// )
    RightParen,
    /// .
    Dot,
    /// ,
    Comma,

    /// End of input
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "integer {n}"),
            Self::Float(v) => write!(f, "float {v}"),
            Self::ApproximateFloat { mantissa, exponent } => {
                write!(f, "float {mantissa}E{exponent}")
            }
            Self::StringLiteral(s) => write!(f, "string {s:?}"),
            Self::Quote(q) => write!(f, "quote {q}"),
            Self::Boolean(true) => f.write_str("TRUE"),
            Self::Boolean(false) => f.write_str("FALSE"),
            Self::Variable(v) => write!(f, "variable {v}"),
            Self::Identifier(name) => write!(f, "identifier {name:?}"),
            Self::Keyword(kw) => f.write_str(kw.as_str()),
            Self::Eq => f.write_str("'='"),
            Self::NotEq => f.write_str("'<>'"),
            Self::Lt => f.write_str("'<'"),
            Self::LtEq => f.write_str("'<='"),
            Self::Gt => f.write_str("'>'"),
            Self::GtEq => f.write_str("'>='"),
            Self::Plus => f.write_str("'+'"),
            Self::Minus => f.write_str("'-'"),
            Self::Star => f.write_str("'*'"),
            Self::Slash => f.write_str("'/'"),
            Self::LeftParen => f.write_str("'('"),
            Self::RightParen => f.write_str("')'"),
            Self::Dot => f.write_str("'.'"),
            Self::Comma => f.write_str("','"),
            Self::Eof => f.write_str("end of input"),
        }
    }
}

/// A token with its location in the source code.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The location in the source code.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns true if this is an EOF token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    /// Returns the keyword if this is a keyword token.
    #[must_use]
    pub const fn as_keyword(&self) -> Option<Keyword> {
        match &self.kind {
            TokenKind::Keyword(kw) => Some(*kw),
            _ => None,
        }
    }
}
