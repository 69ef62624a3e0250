//! Tests for arithmetic, aggregates, function calls and CASE.

mod common;
use common::*;

use oxide_sqlcanon::ast::{AggregateFunction, BinaryOp, Expr, FunctionCall};

#[test]
fn parentheses() {
    assert_sql(
        "SELECT ((1 + 2) * ((3 - 4) / 5))",
        "SELECT (1 + 2) * (3 - 4) / 5",
    );
}

#[test]
fn order_of_operations() {
    assert_sql(
        "SELECT (1 + ((2 * 3) - (4 / 5)))",
        "SELECT 1 + 2 * 3 - 4 / 5",
    );
}

#[test]
fn arithmetic_groups_to_the_right() {
    assert_sql("SELECT (1 - (2 - 3))", "SELECT 1 - 2 - 3");
    assert_sql("SELECT ((1 - 2) - 3)", "SELECT (1 - 2) - 3");
    assert_sql("SELECT (`a` / (`b` * `c`))", "SELECT a / b * c");
}

#[test]
fn numeric_value_expression() {
    assert_understands("SELECT (1 * 2)");
    assert_understands("SELECT (1 / 2)");
    assert_understands("SELECT (1 + 2)");
    assert_understands("SELECT (1 - 2)");
}

#[test]
fn redundant_parentheses_collapse() {
    assert_sql("SELECT (1 + 2)", "SELECT ((((1 + 2))))");
    assert_sql("SELECT `a`", "SELECT (a)");
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let s = parse_select("SELECT 1 + 2 * 3");
    let Expr::Binary { op, right, .. } = &s.columns[0].expr else {
        panic!("Expected binary expression");
    };
    assert_eq!(*op, BinaryOp::Add);
    assert!(matches!(
        right.as_ref(),
        Expr::Binary {
            op: BinaryOp::Mul,
            ..
        }
    ));
}

#[test]
fn unary_signs_on_expressions() {
    assert_understands("SELECT -`a`");
    assert_understands("SELECT -(`a` + 1)");
    assert_sql("SELECT (-1 * 2)", "SELECT -1 * 2");
}

#[test]
fn count() {
    assert_understands("SELECT COUNT(*) FROM `users`");
    assert_understands("SELECT COUNT(`id`) FROM `users`");
    assert_sql("SELECT COUNT(*) FROM `users`", "select count(*) from users");
}

#[test]
fn sum() {
    assert_understands("SELECT SUM(`messages_count`) FROM `users`");
}

#[test]
fn min() {
    assert_understands("SELECT MIN(`age`) FROM `users`");
}

#[test]
fn max() {
    assert_understands("SELECT MAX(`age`) FROM `users`");
}

#[test]
fn avg() {
    assert_understands("SELECT AVG(`age`) FROM `users`");
}

#[test]
fn distinct_aggregate() {
    assert_understands("SELECT COUNT(DISTINCT `id`) FROM `users`");
    let s = parse_select("SELECT SUM(DISTINCT amount) FROM t");
    assert!(matches!(
        s.columns[0].expr,
        Expr::Aggregate {
            func: AggregateFunction::Sum,
            distinct: true,
            ..
        }
    ));
}

#[test]
fn aggregate_arithmetic() {
    assert_understands("SELECT (SUM(`a`) / COUNT(*)) AS `mean` FROM `t`");
}

#[test]
fn ifnull() {
    assert_understands("SELECT IFNULL(`age`, 0) FROM `users`");
    assert_sql("SELECT IFNULL(`age`, 0) FROM `users`", "SELECT ifnull(age, 0) FROM users");
}

#[test]
fn function_calls_in_where_clause() {
    assert_understands("SELECT `name` FROM `users` WHERE function(`name`)");
    assert_understands("SELECT `name` FROM `users` WHERE (function(`name`) AND `name` IS NOT NULL)");
    assert_understands(
        "SELECT `name` FROM `users` WHERE ((`age` = 10 OR function(`name`)) AND `name` IS NOT NULL)",
    );
    assert_understands(
        "SELECT `name` FROM `users` WHERE ((`age` = 10 OR function(2)) AND `name` IS NOT NULL)",
    );
    assert_understands("SELECT `name` FROM `users` WHERE function(`name`, `age`)");
    assert_understands("SELECT `name` FROM `users` WHERE function(`name`, `age`) = 1");
    assert_understands("SELECT `name` FROM `users` WHERE 1 = function(`name`, `age`)");
}

#[test]
fn function_names_are_verbatim() {
    assert_understands("SELECT now()");
    assert_understands("SELECT Lower(`name`) FROM `users`");
    let s = parse_select("SELECT Lower(name) FROM users");
    assert!(matches!(
        &s.columns[0].expr,
        Expr::Function(FunctionCall { name, args }) if name == "Lower" && args.len() == 1
    ));
}

#[test]
fn backticked_function_names() {
    assert_understands("SELECT `true`(1)");
    assert_sql("SELECT `FALSE`(`a`)", "select `FALSE`(a)");
    assert_understands("SELECT `12`(2)");
    assert_understands("SELECT `1e5`(2)");
    assert_sql("SELECT ST_Point(1, 2)", "SELECT `ST_Point`(1, 2)");
    assert_understands("SELECT 1 FROM `t` WHERE (`true`() AND `2fa`(`id`))");
}

#[test]
fn geometry_function_example() {
    assert_understands(
        "SELECT * FROM `TABLE` AS `a` WHERE ST_Point_Inside_Circle(`a`.`geom`, `x`, `y`, `R`)",
    );
    assert_understands(
        "SELECT * FROM `TABLE` AS `a` WHERE ST_Point_Inside_Circle(`a`.`geom`, 3.4, 1.2, 3.5)",
    );
}

#[test]
fn case_when_expression() {
    assert_understands(
        "SELECT CASE WHEN `is_mobile` = TRUE THEN `platform` END FROM `table_name`",
    );
    assert_understands(
        "SELECT CASE WHEN `is_mobile` = TRUE THEN `platform` ELSE 'desktop' END FROM `table_name`",
    );
    assert_understands(
        "SELECT CASE WHEN `is_mobile` = 1 THEN 'good' WHEN `is_mobile` = 2 THEN 'better' ELSE 'best' END FROM `table_name`",
    );
    assert_understands(
        "SELECT CASE WHEN `is_mobile` = 1 THEN 'good' WHEN `is_mobile` = 2 THEN 'better' WHEN `is_mobile` = 3 THEN 'even better' ELSE 'best' END FROM `table_name`",
    );
}

#[test]
fn nested_case() {
    assert_understands(
        "SELECT CASE WHEN `a` = 1 THEN CASE WHEN `b` = 1 THEN 1 ELSE 0 END ELSE 0 END FROM `t`",
    );
    assert_understands(
        "SELECT 1 FROM `t` WHERE 1 = CASE WHEN `a` = 1 THEN CASE WHEN `b` = 1 THEN 1 ELSE 0 END ELSE 0 END",
    );
    assert_understands(
        "SELECT CASE WHEN `a` = 1 THEN CASE WHEN `b` = 1 THEN 1 ELSE 0 END ELSE 0 END AS `c` FROM `t`",
    );
}

#[test]
fn case_switch_on_value() {
    assert_understands("SELECT CASE `a` WHEN 1 THEN 'one' END FROM `table`");
    assert_understands("SELECT CASE `a` WHEN 1 THEN 'one' ELSE 'two' END FROM `table`");
    assert_understands(
        "SELECT CASE `a` WHEN 1 THEN 'one' WHEN 2 THEN 'two' ELSE 'zero' END FROM `table`",
    );
    assert_sql(
        "SELECT CASE `a` WHEN 1 THEN 'one' END FROM `table`",
        "select case a when 1 then \"one\" end from `table`",
    );
}

#[test]
fn scalar_subquery_in_select_list() {
    assert_understands("SELECT (SELECT MAX(`id`) FROM `t`) AS `top`");
}
