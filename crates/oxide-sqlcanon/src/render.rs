//! Canonical SQL rendering via `fmt::Display` for AST nodes.
//!
//! Every tree type renders to exactly one string regardless of how the
//! source was written: keywords upper case, identifiers backtick-quoted,
//! strings single-quoted, arithmetic and logical nodes fully parenthesized,
//! ORDER BY directions explicit. Comparisons (`=`, `<`, LIKE, IS, IN,
//! BETWEEN) stay bare, as in `` `id` <> 1 ``, and gain parentheses only when
//! they appear as an operand of arithmetic, another comparison or a sign.
//! Parsing the output again yields the same tree, so rendering is a fixed
//! point.
//!
//! Negation is resolved here rather than in the tree. A NOT directly above
//! `=`, IN, BETWEEN, LIKE, IS or EXISTS renders as that node's negated form
//! (`<>`, `NOT IN`, ...); above anything else it renders as a `NOT ` prefix.

use core::fmt;

use crate::ast::{
    Assignment, DeleteStatement, DirectSelect, Expr, FetchOnly, FromClause, FunctionCall,
    GroupByClause, HavingClause, InSet, InsertStatement, JoinConstraint, LimitClause, Literal,
    OrderBy, OrderByClause, SelectColumn, SelectStatement, Statement, TableRef, UnaryOp,
    UpdateStatement, WhenClause, WhereClause,
};

/// Renders a statement to its canonical SQL text.
#[must_use]
pub fn render(statement: &Statement) -> String {
    tracing::trace!(kind = statement.kind(), "rendering statement");
    statement.to_string()
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn comma_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

fn ident_list(f: &mut fmt::Formatter<'_>, names: &[String]) -> fmt::Result {
    for (i, name) in names.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write_ident(f, name)?;
    }
    Ok(())
}

/// Writes an identifier in backticks unless it already starts with one.
fn write_ident(f: &mut fmt::Formatter<'_>, name: &str) -> fmt::Result {
    if name.starts_with('`') {
        f.write_str(name)
    } else {
        write!(f, "`{name}`")
    }
}

/// Writes a function name verbatim unless it would lex as a literal.
fn write_function_name(f: &mut fmt::Formatter<'_>, name: &str) -> fmt::Result {
    let literal_like = name.eq_ignore_ascii_case("true")
        || name.eq_ignore_ascii_case("false")
        || name.starts_with(|c: char| c.is_ascii_digit());
    if literal_like {
        write_ident(f, name)
    } else {
        f.write_str(name)
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    write!(f, "'{}'", text.replace('\'', "''"))
}

/// Writes a float so that it always lexes back as a float.
fn write_float(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.is_finite() && value.fract() == 0.0 {
        write!(f, "{value:.1}")
    } else {
        write!(f, "{value}")
    }
}

/// Writes an operand of an arithmetic, comparison or sign node.
///
/// Predicates render without their own parentheses and bind looser than
/// these operators, so they are wrapped here.
fn write_operand(f: &mut fmt::Formatter<'_>, expr: &Expr) -> fmt::Result {
    if expr.is_predicate() {
        f.write_str("(")?;
        write_expr(f, expr, false)?;
        f.write_str(")")
    } else {
        write_expr(f, expr, false)
    }
}

/// Writes an expression. `negated` is set only for the direct child of a
/// NOT and is never passed further down.
fn write_expr(f: &mut fmt::Formatter<'_>, expr: &Expr, negated: bool) -> fmt::Result {
    if negated && !expr.is_negation_aware() {
        f.write_str("NOT ")?;
        return write_expr(f, expr, false);
    }

    match expr {
        Expr::Literal(literal) => write!(f, "{literal}"),
        Expr::Variable(name) => f.write_str(name),
        Expr::Column { table, name } => {
            if let Some(table) = table {
                write_ident(f, table)?;
                f.write_str(".")?;
            }
            write_ident(f, name)
        }
        Expr::Wildcard { table } => {
            if let Some(table) = table {
                write_ident(f, table)?;
                f.write_str(".")?;
            }
            f.write_str("*")
        }
        Expr::Binary { left, op, right } if op.is_comparison() => {
            let symbol = match op.negated_str() {
                Some(negated_symbol) if negated => negated_symbol,
                _ => op.as_str(),
            };
            write_operand(f, left)?;
            write!(f, " {symbol} ")?;
            write_operand(f, right)
        }
        Expr::Binary { left, op, right } if op.is_arithmetic() => {
            f.write_str("(")?;
            write_operand(f, left)?;
            write!(f, " {} ", op.as_str())?;
            write_operand(f, right)?;
            f.write_str(")")
        }
        Expr::Binary { left, op, right } => {
            write!(f, "({left} {} {right})", op.as_str())
        }
        Expr::Unary {
            op: UnaryOp::Not,
            operand,
        } => write_expr(f, operand, true),
        Expr::Unary { op, operand } => {
            f.write_str(op.as_str())?;
            write_operand(f, operand)
        }
        Expr::Between { expr, low, high } => {
            write_operand(f, expr)?;
            f.write_str(if negated { " NOT BETWEEN " } else { " BETWEEN " })?;
            write_operand(f, low)?;
            f.write_str(" AND ")?;
            write_operand(f, high)
        }
        Expr::In { expr, set } => {
            write_operand(f, expr)?;
            f.write_str(if negated { " NOT IN " } else { " IN " })?;
            write!(f, "{set}")
        }
        Expr::Exists(query) => {
            if negated {
                f.write_str("NOT ")?;
            }
            write!(f, "EXISTS ({query})")
        }
        Expr::Aggregate {
            func,
            distinct,
            arg,
        } => {
            write!(f, "{}(", func.as_str())?;
            if *distinct {
                f.write_str("DISTINCT ")?;
            }
            write!(f, "{arg})")
        }
        Expr::Function(call) => write!(f, "{call}"),
        Expr::Case {
            operand,
            branches,
            else_result,
        } => {
            f.write_str("CASE")?;
            if let Some(operand) = operand {
                write!(f, " {operand}")?;
            }
            for branch in branches {
                write!(f, " {branch}")?;
            }
            if let Some(else_result) = else_result {
                write!(f, " ELSE {else_result}")?;
            }
            f.write_str(" END")
        }
        Expr::Subquery(query) => write!(f, "({query})"),
    }
}

// ---------------------------------------------------------------------------
// Expressions
// ---------------------------------------------------------------------------

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(v) => write_float(f, *v),
            Self::ApproximateFloat { mantissa, exponent } => {
                write_float(f, *mantissa)?;
                write!(f, "E{exponent}")
            }
            Self::String(s) => write_quoted(f, s),
            Self::Date(date) => write_quoted(f, &date.format("%Y-%m-%d").to_string()),
            Self::DateTime(timestamp) => {
                write_quoted(f, &timestamp.format("%Y-%m-%d %H:%M:%S").to_string())
            }
            Self::Boolean(true) => f.write_str("TRUE"),
            Self::Boolean(false) => f.write_str("FALSE"),
            Self::Null => f.write_str("NULL"),
            Self::CurrentUser => f.write_str("CURRENT_USER"),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_expr(f, self, false)
    }
}

impl fmt::Display for FunctionCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_function_name(f, &self.name)?;
        f.write_str("(")?;
        comma_list(f, &self.args)?;
        f.write_str(")")
    }
}

impl fmt::Display for InSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List(values) => {
                f.write_str("(")?;
                comma_list(f, values)?;
                f.write_str(")")
            }
            Self::Subquery(query) => write!(f, "({query})"),
            Self::Variable(name) => f.write_str(name),
        }
    }
}

impl fmt::Display for WhenClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WHEN {} THEN {}", self.condition, self.result)
    }
}

// ---------------------------------------------------------------------------
// SELECT
// ---------------------------------------------------------------------------

impl fmt::Display for SelectColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expr)?;
        if let Some(alias) = &self.alias {
            f.write_str(" AS ")?;
            write_ident(f, alias)?;
        }
        Ok(())
    }
}

impl fmt::Display for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table { name, alias } => {
                write_ident(f, name)?;
                if let Some(alias) = alias {
                    f.write_str(" AS ")?;
                    write_ident(f, alias)?;
                }
                Ok(())
            }
            Self::Join {
                kind,
                left,
                right,
                constraint,
            } => {
                write!(f, "{left} {} {right}", kind.as_str())?;
                if let Some(constraint) = constraint {
                    write!(f, " {constraint}")?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for JoinConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::On(condition) => write!(f, "ON {condition}"),
            Self::Using(columns) => {
                f.write_str("USING (")?;
                ident_list(f, columns)?;
                f.write_str(")")
            }
        }
    }
}

impl fmt::Display for FromClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FROM {}", self.table)
    }
}

impl fmt::Display for WhereClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WHERE {}", self.condition)
    }
}

impl fmt::Display for GroupByClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("GROUP BY ")?;
        comma_list(f, &self.columns)
    }
}

impl fmt::Display for HavingClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HAVING {}", self.condition)
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.expr, self.direction.as_str())
    }
}

impl fmt::Display for OrderByClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ORDER BY ")?;
        comma_list(f, &self.items)
    }
}

impl fmt::Display for LimitClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LIMIT {}", self.count)
    }
}

impl fmt::Display for FetchOnly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.offset == 0 {
            write!(f, "FETCH FIRST {} ROWS ONLY", self.row_count)
        } else {
            write!(
                f,
                "OFFSET {} ROWS FETCH NEXT {} ROWS ONLY",
                self.offset, self.row_count
            )
        }
    }
}

impl fmt::Display for SelectStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SELECT ")?;
        if self.distinct {
            f.write_str("DISTINCT ")?;
        }
        comma_list(f, &self.columns)?;
        if let Some(from) = &self.from {
            write!(f, " {from}")?;
        }
        if let Some(where_clause) = &self.where_clause {
            write!(f, " {where_clause}")?;
        }
        if let Some(group_by) = &self.group_by {
            write!(f, " {group_by}")?;
        }
        if let Some(having) = &self.having {
            write!(f, " {having}")?;
        }
        if let Some(order_by) = &self.order_by {
            write!(f, " {order_by}")?;
        }
        if let Some(limit) = &self.limit {
            write!(f, " {limit}")?;
        }
        Ok(())
    }
}

impl fmt::Display for DirectSelect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.query)?;
        if let Some(fetch) = &self.fetch {
            write!(f, " {fetch}")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// DML
// ---------------------------------------------------------------------------

impl fmt::Display for InsertStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("INSERT INTO ")?;
        write_ident(f, &self.table)?;
        if !self.columns.is_empty() {
            f.write_str(" (")?;
            ident_list(f, &self.columns)?;
            f.write_str(")")?;
        }
        f.write_str(" VALUES ")?;
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str("(")?;
            comma_list(f, row)?;
            f.write_str(")")?;
        }
        Ok(())
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_ident(f, &self.column)?;
        write!(f, " = {}", self.value)
    }
}

impl fmt::Display for UpdateStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("UPDATE ")?;
        write_ident(f, &self.table)?;
        f.write_str(" SET ")?;
        comma_list(f, &self.assignments)?;
        write!(f, " {}", self.where_clause)
    }
}

impl fmt::Display for DeleteStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DELETE FROM ")?;
        write_ident(f, &self.table)?;
        write!(f, " {}", self.where_clause)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Select(select) => write!(f, "{select}"),
            Self::Insert(insert) => write!(f, "{insert}"),
            Self::Update(update) => write!(f, "{update}"),
            Self::Delete(delete) => write!(f, "{delete}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{AggregateFunction, BinaryOp, JoinType, OrderDirection};

    fn select(columns: Vec<SelectColumn>) -> SelectStatement {
        SelectStatement::new(columns)
    }

    #[test]
    fn test_identifiers_are_backticked() {
        assert_eq!(Expr::column("id").to_string(), "`id`");
        assert_eq!(
            Expr::qualified_column("users", "id").to_string(),
            "`users`.`id`"
        );
        assert_eq!(Expr::column("`raw`").to_string(), "`raw`");
        assert_eq!(
            Expr::Wildcard {
                table: Some(String::from("t"))
            }
            .to_string(),
            "`t`.*"
        );
    }

    #[test]
    fn test_literals() {
        assert_eq!(Expr::integer(42).to_string(), "42");
        assert_eq!(Expr::float(1.0).to_string(), "1.0");
        assert_eq!(Expr::float(0.1).to_string(), "0.1");
        assert_eq!(Expr::string("a'b").to_string(), "'a''b'");
        assert_eq!(Expr::null().to_string(), "NULL");
        assert_eq!(Expr::boolean(false).to_string(), "FALSE");
        assert_eq!(
            Expr::Literal(Literal::ApproximateFloat {
                mantissa: 1.5,
                exponent: -3
            })
            .to_string(),
            "1.5E-3"
        );
        assert_eq!(
            Expr::Literal(Literal::CurrentUser).to_string(),
            "CURRENT_USER"
        );
    }

    #[test]
    fn test_date_literals_render_as_strings() {
        let date = chrono::NaiveDate::from_ymd_opt(2008, 7, 11).unwrap();
        assert_eq!(Literal::Date(date).to_string(), "'2008-07-11'");
        let timestamp = date.and_hms_opt(9, 5, 0).unwrap();
        assert_eq!(
            Literal::DateTime(timestamp).to_string(),
            "'2008-07-11 09:05:00'"
        );
    }

    #[test]
    fn test_arithmetic_is_parenthesized() {
        let expr = Expr::integer(1).binary(
            BinaryOp::Add,
            Expr::integer(2).binary(BinaryOp::Mul, Expr::integer(3)),
        );
        assert_eq!(expr.to_string(), "(1 + (2 * 3))");
    }

    #[test]
    fn test_comparison_is_bare() {
        let expr = Expr::column("id").eq(Expr::integer(1));
        assert_eq!(expr.to_string(), "`id` = 1");
        let expr = Expr::column("a")
            .eq(Expr::integer(1))
            .and(Expr::column("b").gt(Expr::integer(2)));
        assert_eq!(expr.to_string(), "(`a` = 1 AND `b` > 2)");
    }

    #[test]
    fn test_predicate_operands_are_wrapped() {
        let expr = Expr::column("a")
            .eq(Expr::integer(1))
            .binary(BinaryOp::Add, Expr::integer(2));
        assert_eq!(expr.to_string(), "((`a` = 1) + 2)");

        let expr = Expr::column("a").lt(Expr::column("b")).eq(Expr::column("c"));
        assert_eq!(expr.to_string(), "(`a` < `b`) = `c`");

        let expr = Expr::unary(UnaryOp::Minus, Expr::column("a").negate());
        assert_eq!(expr.to_string(), "-(NOT `a`)");
    }

    #[test]
    fn test_negation_aware_rendering() {
        let id = || Expr::column("id");
        assert_eq!(id().not_eq(Expr::integer(1)).to_string(), "`id` <> 1");
        assert_eq!(
            id().in_list(vec![Expr::integer(1), Expr::integer(2)])
                .negate()
                .to_string(),
            "`id` NOT IN (1, 2)"
        );
        assert_eq!(
            id().between(Expr::integer(1), Expr::integer(3))
                .negate()
                .to_string(),
            "`id` NOT BETWEEN 1 AND 3"
        );
        assert_eq!(
            id().binary(BinaryOp::Like, Expr::string("A%"))
                .negate()
                .to_string(),
            "`id` NOT LIKE 'A%'"
        );
        assert_eq!(id().is_null().negate().to_string(), "`id` IS NOT NULL");
    }

    #[test]
    fn test_negation_falls_back_to_prefix() {
        assert_eq!(Expr::boolean(true).negate().to_string(), "NOT TRUE");
        assert_eq!(
            Expr::column("a").lt(Expr::integer(1)).negate().to_string(),
            "NOT `a` < 1"
        );
        assert_eq!(
            Expr::column("a").and(Expr::column("b")).negate().to_string(),
            "NOT (`a` AND `b`)"
        );
    }

    #[test]
    fn test_negation_reaches_only_the_direct_child() {
        // NOT (a = 1 AND b = 2): the equalities inside stay as written.
        let expr = Expr::column("a")
            .eq(Expr::integer(1))
            .and(Expr::column("b").eq(Expr::integer(2)))
            .negate();
        assert_eq!(expr.to_string(), "NOT (`a` = 1 AND `b` = 2)");

        let expr = Expr::column("a").not_eq(Expr::integer(1)).negate();
        assert_eq!(expr.to_string(), "NOT `a` <> 1");
    }

    #[test]
    fn test_exists_and_subqueries() {
        let sub = select(vec![SelectColumn::new(Expr::column("id"))]);
        let expr = Expr::Exists(Box::new(sub.clone())).negate();
        assert_eq!(expr.to_string(), "NOT EXISTS (SELECT `id`)");
        assert_eq!(
            Expr::Subquery(Box::new(sub)).to_string(),
            "(SELECT `id`)"
        );
    }

    #[test]
    fn test_aggregates_and_functions() {
        let count = Expr::Aggregate {
            func: AggregateFunction::Count,
            distinct: false,
            arg: Box::new(Expr::Wildcard { table: None }),
        };
        assert_eq!(count.to_string(), "COUNT(*)");
        let sum = Expr::Aggregate {
            func: AggregateFunction::Sum,
            distinct: true,
            arg: Box::new(Expr::column("a")),
        };
        assert_eq!(sum.to_string(), "SUM(DISTINCT `a`)");
        let call = Expr::Function(FunctionCall {
            name: String::from("ST_Point"),
            args: vec![Expr::column("x"), Expr::float(3.4)],
        });
        assert_eq!(call.to_string(), "ST_Point(`x`, 3.4)");
    }

    #[test]
    fn test_literal_like_function_names_are_backticked() {
        let call = |name: &str| {
            Expr::Function(FunctionCall {
                name: String::from(name),
                args: vec![Expr::integer(1)],
            })
            .to_string()
        };
        assert_eq!(call("true"), "`true`(1)");
        assert_eq!(call("False"), "`False`(1)");
        assert_eq!(call("12"), "`12`(1)");
        assert_eq!(call("1e5"), "`1e5`(1)");
        assert_eq!(call("trueish"), "trueish(1)");
        assert_eq!(call("now"), "now(1)");
    }

    #[test]
    fn test_case() {
        let expr = Expr::Case {
            operand: Some(Box::new(Expr::column("a"))),
            branches: vec![WhenClause {
                condition: Expr::integer(1),
                result: Expr::string("one"),
            }],
            else_result: Some(Box::new(Expr::string("two"))),
        };
        assert_eq!(
            expr.to_string(),
            "CASE `a` WHEN 1 THEN 'one' ELSE 'two' END"
        );
    }

    #[test]
    fn test_joins() {
        let table = TableRef::table("t1")
            .join(
                JoinType::LeftOuter,
                TableRef::table("t2"),
                Some(JoinConstraint::Using(vec![String::from("a")])),
            )
            .join(JoinType::Cross, TableRef::aliased("t3", "x"), None);
        assert_eq!(
            table.to_string(),
            "`t1` LEFT OUTER JOIN `t2` USING (`a`) CROSS JOIN `t3` AS `x`"
        );
    }

    #[test]
    fn test_full_select() {
        let mut query = select(vec![
            SelectColumn::with_alias(Expr::column("name"), "n"),
            SelectColumn::new(Expr::Wildcard { table: None }),
        ]);
        query.distinct = true;
        query.from = Some(FromClause {
            table: TableRef::table("users"),
        });
        query.group_by = Some(GroupByClause {
            columns: vec![Expr::column("name")],
        });
        query.order_by = Some(OrderByClause {
            items: vec![OrderBy {
                expr: Expr::column("name"),
                direction: OrderDirection::Desc,
            }],
        });
        query.limit = Some(LimitClause { count: 5 });
        assert_eq!(
            query.to_string(),
            "SELECT DISTINCT `name` AS `n`, * FROM `users` GROUP BY `name` ORDER BY `name` DESC LIMIT 5"
        );
    }

    #[test]
    fn test_fetch_only() {
        let first = FetchOnly {
            offset: 0,
            row_count: 10,
        };
        let next = FetchOnly {
            offset: 30,
            row_count: 10,
        };
        assert_eq!(first.to_string(), "FETCH FIRST 10 ROWS ONLY");
        assert_eq!(next.to_string(), "OFFSET 30 ROWS FETCH NEXT 10 ROWS ONLY");
    }

    #[test]
    fn test_dml() {
        let insert = Statement::Insert(InsertStatement {
            table: String::from("users"),
            columns: vec![String::from("a"), String::from("b")],
            rows: vec![
                vec![Expr::integer(1), Expr::integer(2)],
                vec![Expr::Variable(String::from("?")), Expr::null()],
            ],
        });
        assert_eq!(
            render(&insert),
            "INSERT INTO `users` (`a`, `b`) VALUES (1, 2), (?, NULL)"
        );

        let where_clause = WhereClause {
            condition: Expr::column("id").eq(Expr::Variable(String::from(":id"))),
        };
        let update = Statement::Update(UpdateStatement {
            table: String::from("users"),
            assignments: vec![Assignment {
                column: String::from("name"),
                value: Expr::string("Juan"),
            }],
            where_clause: where_clause.clone(),
        });
        assert_eq!(
            render(&update),
            "UPDATE `users` SET `name` = 'Juan' WHERE `id` = :id"
        );

        let delete = Statement::Delete(DeleteStatement {
            table: String::from("users"),
            where_clause,
        });
        assert_eq!(render(&delete), "DELETE FROM `users` WHERE `id` = :id");
    }
}
