//! Tests for INSERT, UPDATE and DELETE.

mod common;
use common::*;

use oxide_sqlcanon::ast::Expr;

#[test]
fn insert_into_clause() {
    assert_understands("INSERT INTO `users` VALUES (1, 2)");
    assert_understands("INSERT INTO `users` VALUES (`a`, `b`)");
}

#[test]
fn insert_with_quotes() {
    assert_understands(
        "INSERT INTO `users` (`active`, `created_on`, `email`, `last_login`, `password`, `salt`, `username`) \
         VALUES (`a`, `b`, `c`, `c`, `e`)",
    );
}

#[test]
fn insert_with_columns_and_rows() {
    assert_sql(
        "INSERT INTO `users` (`name`, `email`) VALUES ('Alice', 'alice@example.com'), (?, :email)",
        "insert into users (name, email) values (\"Alice\", 'alice@example.com'), (?, :email)",
    );
    let i = parse_insert("INSERT INTO users (name, email) VALUES ('Alice', 'a@b.c'), (?, ?)");
    assert_eq!(i.table, "users");
    assert_eq!(i.columns, vec![String::from("name"), String::from("email")]);
    assert_eq!(i.rows.len(), 2);
    assert_eq!(i.rows[1][0], Expr::Variable(String::from("?")));
}

#[test]
fn insert_expressions() {
    assert_understands("INSERT INTO `t` VALUES ((1 + 2), NULL, TRUE, '2008-07-11', -1)");
}

#[test]
fn insert_requires_values() {
    let err = parse_err("INSERT INTO users (name)");
    assert!(err.to_string().contains("expected VALUES"));
    assert!(oxide_sqlcanon::parse("INSERT INTO users VALUES ()").is_err());
}

#[test]
fn update() {
    assert_understands("UPDATE `users` SET `name` = 'Juan' WHERE `id` = 1");
    assert_understands(
        "UPDATE `users` SET `name` = (SELECT `name` FROM `city`) WHERE `id` = 1",
    );
    assert_understands("UPDATE `users` SET `name` = ?, `email` = ? WHERE `id` = ?");

    let u = parse_update("update users set name = 'Bob', age = age + 1 where id = 1");
    assert_eq!(u.table, "users");
    assert_eq!(u.assignments.len(), 2);
    assert_eq!(u.assignments[1].column, "age");
}

#[test]
fn update_requires_where() {
    let err = parse_err("UPDATE users SET name = 'Bob'");
    assert!(err.to_string().contains("expected WHERE"));
}

#[test]
fn delete() {
    assert_understands("DELETE FROM `users` WHERE `id` = 1");
    assert_understands("DELETE FROM `users` WHERE `name` = (SELECT `name` FROM `city`)");
    assert_sql(
        "DELETE FROM `users` WHERE `id` NOT IN (1, 2)",
        "delete from users where not id in (1, 2)",
    );
    assert_eq!(parse_delete("DELETE FROM users WHERE id = 1").table, "users");
}

#[test]
fn delete_requires_where() {
    let err = parse_err("DELETE FROM users");
    assert!(err.to_string().contains("expected WHERE"));
}
