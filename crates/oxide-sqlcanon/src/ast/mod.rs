//! Abstract Syntax Tree (AST) types for SQL statements.
//!
//! Every node owns its children outright. Trees are built by the parser and
//! only read afterwards; rendering lives in [`crate::render`].

mod expression;
mod statement;

pub use expression::{
    AggregateFunction, BinaryOp, Expr, FunctionCall, InSet, Literal, UnaryOp, WhenClause,
};
pub use statement::{
    Assignment, DeleteStatement, DirectSelect, FetchOnly, FromClause, GroupByClause, HavingClause,
    InsertStatement, JoinConstraint, JoinType, LimitClause, OrderBy, OrderByClause,
    OrderDirection, SelectColumn, SelectStatement, Statement, TableRef, UpdateStatement,
    WhereClause,
};
