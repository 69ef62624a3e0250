//! Expression AST types.

use chrono::{NaiveDate, NaiveDateTime};

use super::SelectStatement;

/// A literal value.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Integer literal.
    Integer(i64),
    /// Float literal.
    Float(f64),
    /// Approximate numeric literal, `mantissa * 10^exponent`.
    ApproximateFloat {
        /// The part before the exponent marker.
        mantissa: f64,
        /// The power of ten.
        exponent: i32,
    },
    /// String literal.
    String(String),
    /// A string literal holding a calendar date (`YYYY-MM-DD`).
    Date(NaiveDate),
    /// A string literal holding a timestamp (`YYYY-MM-DD HH:MM:SS`).
    DateTime(NaiveDateTime),
    /// Boolean literal.
    Boolean(bool),
    /// NULL literal.
    Null,
    /// CURRENT_USER.
    CurrentUser,
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,

    // Comparison
    Eq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Like,
    Is,

    // Logical
    And,
    Or,
    Xor,
}

impl BinaryOp {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Eq => "=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::Like => "LIKE",
            Self::Is => "IS",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Xor => "XOR",
        }
    }

    /// Returns the operator used when this node sits directly under a NOT,
    /// or `None` if the operator has no dedicated negated form.
    #[must_use]
    pub const fn negated_str(&self) -> Option<&'static str> {
        match self {
            Self::Eq => Some("<>"),
            Self::Like => Some("NOT LIKE"),
            Self::Is => Some("IS NOT"),
            _ => None,
        }
    }

    /// Returns true for `+ - * /`.
    #[must_use]
    pub const fn is_arithmetic(&self) -> bool {
        matches!(self, Self::Add | Self::Sub | Self::Mul | Self::Div)
    }

    /// Returns true for the comparison family (`= < <= > >= LIKE IS`).
    #[must_use]
    pub const fn is_comparison(&self) -> bool {
        matches!(
            self,
            Self::Eq | Self::Lt | Self::LtEq | Self::Gt | Self::GtEq | Self::Like | Self::Is
        )
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// Unary plus (+)
    Plus,
    /// Negation (-)
    Minus,
    /// Logical NOT
    Not,
}

impl UnaryOp {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Not => "NOT",
        }
    }
}

/// Aggregate function family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateFunction {
    Count,
    Sum,
    Avg,
    Min,
    Max,
}

impl AggregateFunction {
    /// Returns the SQL name of the aggregate.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Count => "COUNT",
            Self::Sum => "SUM",
            Self::Avg => "AVG",
            Self::Min => "MIN",
            Self::Max => "MAX",
        }
    }
}

/// A function call expression, e.g. `IFNULL(a, 0)` or `ST_Point(x, y)`.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    /// The function name, as written.
    pub name: String,
    /// The arguments.
    pub args: Vec<Expr>,
}

/// The right-hand side of an IN predicate.
#[derive(Debug, Clone, PartialEq)]
pub enum InSet {
    /// `(a, b, c)`
    List(Vec<Expr>),
    /// `(SELECT ...)`
    Subquery(Box<SelectStatement>),
    /// `?` or `:name` standing for a whole value list.
    Variable(String),
}

/// A `WHEN condition THEN result` branch of a CASE expression.
#[derive(Debug, Clone, PartialEq)]
pub struct WhenClause {
    /// The condition, or the value compared against the CASE operand.
    pub condition: Expr,
    /// The result if the branch matches.
    pub result: Expr,
}

/// An SQL expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value.
    Literal(Literal),

    /// A placeholder (`?` or `:name`), kept verbatim.
    Variable(String),

    /// A column reference (optionally qualified with table name).
    Column {
        /// Table name or alias (optional).
        table: Option<String>,
        /// Column name.
        name: String,
    },

    /// Wildcard (*) in SELECT.
    Wildcard {
        /// Table qualifier (optional).
        table: Option<String>,
    },

    /// A binary expression.
    Binary {
        /// Left operand.
        left: Box<Expr>,
        /// Operator.
        op: BinaryOp,
        /// Right operand.
        right: Box<Expr>,
    },

    /// A unary expression.
    Unary {
        /// Operator.
        op: UnaryOp,
        /// Operand.
        operand: Box<Expr>,
    },

    /// BETWEEN expression.
    Between {
        /// The expression to check.
        expr: Box<Expr>,
        /// Lower bound.
        low: Box<Expr>,
        /// Upper bound.
        high: Box<Expr>,
    },

    /// IN expression.
    In {
        /// The expression to check.
        expr: Box<Expr>,
        /// The candidate set.
        set: InSet,
    },

    /// `EXISTS (subquery)`.
    Exists(Box<SelectStatement>),

    /// An aggregate call. `arg` is a `Wildcard` for `COUNT(*)`.
    Aggregate {
        /// Which aggregate.
        func: AggregateFunction,
        /// Whether DISTINCT was specified.
        distinct: bool,
        /// The aggregated expression.
        arg: Box<Expr>,
    },

    /// A function call.
    Function(FunctionCall),

    /// CASE expression.
    Case {
        /// The switch operand (if any).
        operand: Option<Box<Expr>>,
        /// WHEN/THEN branches, in source order.
        branches: Vec<WhenClause>,
        /// ELSE result.
        else_result: Option<Box<Expr>>,
    },

    /// A parenthesized subquery used as a value.
    Subquery(Box<SelectStatement>),
}

impl Expr {
    /// Creates a new column reference.
    #[must_use]
    pub fn column(name: impl Into<String>) -> Self {
        Self::Column {
            table: None,
            name: name.into(),
        }
    }

    /// Creates a new qualified column reference.
    #[must_use]
    pub fn qualified_column(table: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Column {
            table: Some(table.into()),
            name: name.into(),
        }
    }

    /// Creates a new integer literal.
    #[must_use]
    pub const fn integer(value: i64) -> Self {
        Self::Literal(Literal::Integer(value))
    }

    /// Creates a new float literal.
    #[must_use]
    pub const fn float(value: f64) -> Self {
        Self::Literal(Literal::Float(value))
    }

    /// Creates a new string literal.
    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Self::Literal(Literal::String(value.into()))
    }

    /// Creates a new boolean literal.
    #[must_use]
    pub const fn boolean(value: bool) -> Self {
        Self::Literal(Literal::Boolean(value))
    }

    /// Creates a NULL literal.
    #[must_use]
    pub const fn null() -> Self {
        Self::Literal(Literal::Null)
    }

    /// Creates a binary expression.
    #[must_use]
    pub fn binary(self, op: BinaryOp, right: Self) -> Self {
        Self::Binary {
            left: Box::new(self),
            op,
            right: Box::new(right),
        }
    }

    /// Creates a unary expression.
    #[must_use]
    pub fn unary(op: UnaryOp, operand: Self) -> Self {
        Self::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    /// Wraps this expression in a NOT.
    #[must_use]
    pub fn negate(self) -> Self {
        Self::unary(UnaryOp::Not, self)
    }

    /// Creates an equality expression.
    #[must_use]
    pub fn eq(self, right: Self) -> Self {
        self.binary(BinaryOp::Eq, right)
    }

    /// Creates an inequality expression, `NOT (self = right)`.
    #[must_use]
    pub fn not_eq(self, right: Self) -> Self {
        self.eq(right).negate()
    }

    /// Creates a less-than expression.
    #[must_use]
    pub fn lt(self, right: Self) -> Self {
        self.binary(BinaryOp::Lt, right)
    }

    /// Creates a greater-than expression.
    #[must_use]
    pub fn gt(self, right: Self) -> Self {
        self.binary(BinaryOp::Gt, right)
    }

    /// Creates an AND expression.
    #[must_use]
    pub fn and(self, right: Self) -> Self {
        self.binary(BinaryOp::And, right)
    }

    /// Creates an OR expression.
    #[must_use]
    pub fn or(self, right: Self) -> Self {
        self.binary(BinaryOp::Or, right)
    }

    /// Creates an IS NULL expression.
    #[must_use]
    pub fn is_null(self) -> Self {
        self.binary(BinaryOp::Is, Self::null())
    }

    /// Creates a BETWEEN expression.
    #[must_use]
    pub fn between(self, low: Self, high: Self) -> Self {
        Self::Between {
            expr: Box::new(self),
            low: Box::new(low),
            high: Box::new(high),
        }
    }

    /// Creates an IN expression over a value list.
    #[must_use]
    pub fn in_list(self, list: Vec<Self>) -> Self {
        Self::In {
            expr: Box::new(self),
            set: InSet::List(list),
        }
    }

    /// Returns true if this node has a dedicated rendering under NOT
    /// (`=`, IN, BETWEEN, LIKE, IS, EXISTS).
    #[must_use]
    pub const fn is_negation_aware(&self) -> bool {
        match self {
            Self::Binary { op, .. } => op.negated_str().is_some(),
            Self::In { .. } | Self::Between { .. } | Self::Exists(_) => true,
            _ => false,
        }
    }

    /// Returns true for nodes that render without enclosing parentheses but
    /// bind looser than arithmetic: comparisons, IN, BETWEEN and NOT.
    #[must_use]
    pub const fn is_predicate(&self) -> bool {
        match self {
            Self::Binary { op, .. } => op.is_comparison(),
            Self::Unary {
                op: UnaryOp::Not, ..
            }
            | Self::In { .. }
            | Self::Between { .. } => true,
            _ => false,
        }
    }
}
