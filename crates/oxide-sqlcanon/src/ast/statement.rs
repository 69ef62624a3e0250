//! SQL statement AST types.

use super::expression::Expr;

/// Order direction for ORDER BY.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderDirection {
    /// Ascending order (default).
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl OrderDirection {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// An ORDER BY clause entry.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    /// The expression to order by.
    pub expr: Expr,
    /// The direction; always explicit in rendered output.
    pub direction: OrderDirection,
}

/// Join type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinType {
    /// CROSS JOIN (also the comma form in FROM).
    Cross,
    /// INNER JOIN (also bare JOIN).
    Inner,
    /// LEFT JOIN.
    Left,
    /// LEFT OUTER JOIN.
    LeftOuter,
    /// RIGHT JOIN.
    Right,
    /// RIGHT OUTER JOIN.
    RightOuter,
    /// FULL JOIN.
    Full,
    /// FULL OUTER JOIN.
    FullOuter,
}

impl JoinType {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cross => "CROSS JOIN",
            Self::Inner => "INNER JOIN",
            Self::Left => "LEFT JOIN",
            Self::LeftOuter => "LEFT OUTER JOIN",
            Self::Right => "RIGHT JOIN",
            Self::RightOuter => "RIGHT OUTER JOIN",
            Self::Full => "FULL JOIN",
            Self::FullOuter => "FULL OUTER JOIN",
        }
    }

    /// Returns true if the join requires an ON or USING constraint.
    #[must_use]
    pub const fn is_qualified(&self) -> bool {
        !matches!(self, Self::Cross)
    }
}

/// The constraint of a qualified join.
#[derive(Debug, Clone, PartialEq)]
pub enum JoinConstraint {
    /// `ON condition`
    On(Expr),
    /// `USING (a, b)`
    Using(Vec<String>),
}

/// A table reference in FROM clause.
#[derive(Debug, Clone, PartialEq)]
pub enum TableRef {
    /// A simple table name.
    Table {
        /// Table name.
        name: String,
        /// Alias.
        alias: Option<String>,
    },
    /// A joined table. Chains fold to the left: `a JOIN b JOIN c` is
    /// `Join(Join(a, b), c)`.
    Join {
        /// The type of join.
        kind: JoinType,
        /// Left side of the join.
        left: Box<TableRef>,
        /// Right side of the join.
        right: Box<TableRef>,
        /// ON/USING constraint, absent for CROSS joins.
        constraint: Option<JoinConstraint>,
    },
}

impl TableRef {
    /// Creates a simple table reference.
    #[must_use]
    pub fn table(name: impl Into<String>) -> Self {
        Self::Table {
            name: name.into(),
            alias: None,
        }
    }

    /// Creates an aliased table reference.
    #[must_use]
    pub fn aliased(name: impl Into<String>, alias: impl Into<String>) -> Self {
        Self::Table {
            name: name.into(),
            alias: Some(alias.into()),
        }
    }

    /// Joins `right` onto this reference.
    #[must_use]
    pub fn join(self, kind: JoinType, right: Self, constraint: Option<JoinConstraint>) -> Self {
        Self::Join {
            kind,
            left: Box::new(self),
            right: Box::new(right),
            constraint,
        }
    }
}

/// `FROM table-reference`.
#[derive(Debug, Clone, PartialEq)]
pub struct FromClause {
    /// The (possibly joined) table reference.
    pub table: TableRef,
}

/// `WHERE condition`.
#[derive(Debug, Clone, PartialEq)]
pub struct WhereClause {
    /// The search condition.
    pub condition: Expr,
}

/// `GROUP BY expr, ...`.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupByClause {
    /// Grouping expressions, in source order.
    pub columns: Vec<Expr>,
}

/// `HAVING condition`.
#[derive(Debug, Clone, PartialEq)]
pub struct HavingClause {
    /// The search condition.
    pub condition: Expr,
}

/// `ORDER BY item, ...`.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderByClause {
    /// Ordering items, in source order.
    pub items: Vec<OrderBy>,
}

/// `LIMIT n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitClause {
    /// Maximum number of rows.
    pub count: i64,
}

/// Standard paging: `FETCH FIRST n ROWS ONLY` or
/// `OFFSET m ROWS FETCH NEXT n ROWS ONLY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOnly {
    /// Rows skipped; zero for the FETCH FIRST form.
    pub offset: i64,
    /// Rows returned.
    pub row_count: i64,
}

/// A SELECT query (also used for subqueries).
#[derive(Debug, Clone, PartialEq)]
pub struct SelectStatement {
    /// Whether to select DISTINCT values.
    pub distinct: bool,
    /// The columns to select.
    pub columns: Vec<SelectColumn>,
    /// The FROM clause.
    pub from: Option<FromClause>,
    /// The WHERE clause.
    pub where_clause: Option<WhereClause>,
    /// The GROUP BY clause.
    pub group_by: Option<GroupByClause>,
    /// The HAVING clause.
    pub having: Option<HavingClause>,
    /// The ORDER BY clause.
    pub order_by: Option<OrderByClause>,
    /// The LIMIT clause.
    pub limit: Option<LimitClause>,
}

impl SelectStatement {
    /// Creates a SELECT with the given columns and no clauses.
    #[must_use]
    pub const fn new(columns: Vec<SelectColumn>) -> Self {
        Self {
            distinct: false,
            columns,
            from: None,
            where_clause: None,
            group_by: None,
            having: None,
            order_by: None,
            limit: None,
        }
    }
}

/// A top-level SELECT with its optional paging clause.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectSelect {
    /// The query.
    pub query: SelectStatement,
    /// Trailing FETCH/OFFSET paging.
    pub fetch: Option<FetchOnly>,
}

/// A column in SELECT clause.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectColumn {
    /// The expression.
    pub expr: Expr,
    /// Column alias.
    pub alias: Option<String>,
}

impl SelectColumn {
    /// Creates a new select column.
    #[must_use]
    pub const fn new(expr: Expr) -> Self {
        Self { expr, alias: None }
    }

    /// Creates a select column with an alias.
    #[must_use]
    pub fn with_alias(expr: Expr, alias: impl Into<String>) -> Self {
        Self {
            expr,
            alias: Some(alias.into()),
        }
    }
}

/// An INSERT statement.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertStatement {
    /// Table name.
    pub table: String,
    /// Column names (optional).
    pub columns: Vec<String>,
    /// VALUES rows, each non-empty.
    pub rows: Vec<Vec<Expr>>,
}

/// An assignment in UPDATE SET.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    /// Column name.
    pub column: String,
    /// Value expression.
    pub value: Expr,
}

/// An UPDATE statement.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateStatement {
    /// Table name.
    pub table: String,
    /// SET assignments.
    pub assignments: Vec<Assignment>,
    /// WHERE clause (mandatory).
    pub where_clause: WhereClause,
}

/// A DELETE statement.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteStatement {
    /// Table name.
    pub table: String,
    /// WHERE clause (mandatory).
    pub where_clause: WhereClause,
}

/// A SQL statement, the root of every parse.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// SELECT statement.
    Select(DirectSelect),
    /// INSERT statement.
    Insert(InsertStatement),
    /// UPDATE statement.
    Update(UpdateStatement),
    /// DELETE statement.
    Delete(DeleteStatement),
}

impl Statement {
    /// Returns the leading keyword of the statement.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Select(_) => "SELECT",
            Self::Insert(_) => "INSERT",
            Self::Update(_) => "UPDATE",
            Self::Delete(_) => "DELETE",
        }
    }
}
