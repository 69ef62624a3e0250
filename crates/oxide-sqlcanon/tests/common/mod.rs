#![allow(dead_code)]

use oxide_sqlcanon::ast::{
    DeleteStatement, DirectSelect, InsertStatement, SelectStatement, Statement, UpdateStatement,
};
use oxide_sqlcanon::{render, ParseError};

pub fn parse(sql: &str) -> Statement {
    oxide_sqlcanon::parse(sql).unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e:?}"))
}

pub fn parse_err(sql: &str) -> ParseError {
    oxide_sqlcanon::parse(sql).expect_err(&format!("Expected parse error for: {sql}"))
}

pub fn parse_direct_select(sql: &str) -> DirectSelect {
    match parse(sql) {
        Statement::Select(s) => s,
        other => panic!("Expected SELECT, got {other:?}"),
    }
}

pub fn parse_select(sql: &str) -> SelectStatement {
    parse_direct_select(sql).query
}

pub fn parse_insert(sql: &str) -> InsertStatement {
    match parse(sql) {
        Statement::Insert(i) => i,
        other => panic!("Expected INSERT, got {other:?}"),
    }
}

pub fn parse_update(sql: &str) -> UpdateStatement {
    match parse(sql) {
        Statement::Update(u) => u,
        other => panic!("Expected UPDATE, got {other:?}"),
    }
}

pub fn parse_delete(sql: &str) -> DeleteStatement {
    match parse(sql) {
        Statement::Delete(d) => d,
        other => panic!("Expected DELETE, got {other:?}"),
    }
}

/// Asserts that `given` renders as `expected` and that `expected` is itself
/// canonical.
pub fn assert_sql(expected: &str, given: &str) {
    let rendered = render(&parse(given));
    assert_eq!(rendered, expected, "Rendering of {given:?} differs");
    round_trip(given);
}

/// Asserts that canonical SQL renders back unchanged.
pub fn assert_understands(sql: &str) {
    assert_sql(sql, sql);
}

/// Verifies that rendering produces a fixed point:
/// render(parse(sql)) can be re-parsed and yields the same string again.
pub fn round_trip(sql: &str) {
    let rendered1 = render(&parse(sql));
    let rendered2 = render(&parse(&rendered1));
    assert_eq!(
        rendered1, rendered2,
        "Round-trip failed.\n  Input:    {sql}\n  First:    {rendered1}\n  Second:   {rendered2}"
    );
}
