//! SQL Parser implementation.

use chrono::{NaiveDate, NaiveDateTime};

use super::error::SyntaxError;
use super::pratt::{
    infix_binding_power, prefix_binding_power, token_to_binary_op, token_to_unary_op,
    ADDITIVE_BP, COMPARISON_BP,
};
use crate::ast::{
    AggregateFunction, Assignment, BinaryOp, DeleteStatement, DirectSelect, Expr, FetchOnly,
    FromClause, FunctionCall, GroupByClause, HavingClause, InSet, InsertStatement,
    JoinConstraint, JoinType, LimitClause, Literal, OrderBy, OrderByClause, OrderDirection,
    SelectColumn, SelectStatement, Statement, TableRef, UpdateStatement, WhenClause, WhereClause,
};
use crate::lexer::{Keyword, Span, Token, TokenKind};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// SQL Parser.
///
/// Consumes a token sequence produced by [`crate::lexer::Lexer`] with one
/// token of lookahead. Parsing is all-or-nothing: the first token the
/// grammar rejects aborts the parse.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    /// Returned once the token sequence is exhausted.
    eof: Token,
}

impl Parser {
    /// Creates a new parser over the given tokens.
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        let end = tokens.last().map_or(0, |t| t.span.end);
        let line = tokens.last().map_or(1, |t| t.span.line);
        Self {
            tokens,
            pos: 0,
            eof: Token::new(TokenKind::Eof, Span::new(end, end, line)),
        }
    }

    /// Parses a single SQL statement spanning the whole token sequence.
    ///
    /// # Errors
    ///
    /// Returns a `SyntaxError` naming the first token the grammar rejects.
    pub fn parse_statement(&mut self) -> Result<Statement, SyntaxError> {
        let statement = match &self.current().kind {
            TokenKind::Keyword(Keyword::Select) => Statement::Select(self.parse_direct_select()?),
            TokenKind::Keyword(Keyword::Insert) => {
                Statement::Insert(self.parse_insert_statement()?)
            }
            TokenKind::Keyword(Keyword::Update) => {
                Statement::Update(self.parse_update_statement()?)
            }
            TokenKind::Keyword(Keyword::Delete) => {
                Statement::Delete(self.parse_delete_statement()?)
            }
            _ => return Err(self.unexpected("SELECT, INSERT, UPDATE, or DELETE")),
        };
        self.expect(&TokenKind::Eof)?;
        Ok(statement)
    }

    /// Parses a top-level SELECT with its optional paging clause.
    fn parse_direct_select(&mut self) -> Result<DirectSelect, SyntaxError> {
        let query = self.parse_select_statement()?;
        let fetch = self.parse_fetch_only()?;
        Ok(DirectSelect { query, fetch })
    }

    /// Parses a SELECT statement.
    fn parse_select_statement(&mut self) -> Result<SelectStatement, SyntaxError> {
        self.expect_keyword(Keyword::Select)?;

        let distinct = self.consume_keyword(Keyword::Distinct);

        // SELECT columns
        let columns = self.parse_select_columns()?;

        // FROM clause (optional for expressions like SELECT 1+1)
        let from = if self.consume_keyword(Keyword::From) {
            Some(FromClause {
                table: self.parse_table_ref()?,
            })
        } else {
            None
        };

        // WHERE clause
        let where_clause = if self.check_keyword(Keyword::Where) {
            Some(self.parse_where_clause()?)
        } else {
            None
        };

        // GROUP BY clause
        let group_by = if self.consume_keyword(Keyword::Group) {
            self.expect_keyword(Keyword::By)?;
            Some(GroupByClause {
                columns: self.parse_expression_list()?,
            })
        } else {
            None
        };

        // HAVING clause
        let having = if self.consume_keyword(Keyword::Having) {
            Some(HavingClause {
                condition: self.parse_expression(0)?,
            })
        } else {
            None
        };

        // ORDER BY clause
        let order_by = if self.consume_keyword(Keyword::Order) {
            self.expect_keyword(Keyword::By)?;
            Some(OrderByClause {
                items: self.parse_order_by_list()?,
            })
        } else {
            None
        };

        // LIMIT clause
        let limit = if self.consume_keyword(Keyword::Limit) {
            Some(LimitClause {
                count: self.expect_integer()?,
            })
        } else {
            None
        };

        Ok(SelectStatement {
            distinct,
            columns,
            from,
            where_clause,
            group_by,
            having,
            order_by,
            limit,
        })
    }

    /// Parses `FETCH FIRST n ROWS ONLY` or
    /// `OFFSET m ROWS FETCH NEXT n ROWS ONLY`, if present.
    fn parse_fetch_only(&mut self) -> Result<Option<FetchOnly>, SyntaxError> {
        let offset = if self.consume_keyword(Keyword::Offset) {
            let offset = self.expect_integer()?;
            self.expect_keyword(Keyword::Rows)?;
            offset
        } else if self.check_keyword(Keyword::Fetch) {
            0
        } else {
            return Ok(None);
        };

        self.expect_keyword(Keyword::Fetch)?;
        if !self.consume_keyword(Keyword::First) && !self.consume_keyword(Keyword::Next) {
            return Err(self.unexpected("FIRST or NEXT"));
        }
        let row_count = self.expect_integer()?;
        self.expect_keyword(Keyword::Rows)?;
        self.expect_keyword(Keyword::Only)?;

        Ok(Some(FetchOnly { offset, row_count }))
    }

    /// Parses SELECT columns.
    fn parse_select_columns(&mut self) -> Result<Vec<SelectColumn>, SyntaxError> {
        let mut columns = vec![];

        loop {
            if self.check(&TokenKind::Star) {
                self.advance();
                columns.push(SelectColumn::new(Expr::Wildcard { table: None }));
            } else {
                let expr = self.parse_expression(0)?;
                let alias = if matches!(expr, Expr::Wildcard { .. }) {
                    None
                } else {
                    self.parse_optional_alias()?
                };
                columns.push(SelectColumn { expr, alias });
            }

            if !self.consume(&TokenKind::Comma) {
                break;
            }
        }

        Ok(columns)
    }

    /// Parses a table reference, folding joins and comma lists to the left.
    fn parse_table_ref(&mut self) -> Result<TableRef, SyntaxError> {
        let mut table_ref = self.parse_table_factor()?;

        loop {
            if self.consume(&TokenKind::Comma) {
                let right = self.parse_table_factor()?;
                table_ref = table_ref.join(JoinType::Cross, right, None);
                continue;
            }

            let Some(kind) = self.parse_join_type()? else {
                break;
            };
            let right = self.parse_table_factor()?;
            let constraint = if kind.is_qualified() {
                Some(self.parse_join_constraint()?)
            } else {
                None
            };
            table_ref = table_ref.join(kind, right, constraint);
        }

        Ok(table_ref)
    }

    /// Parses a table name with an optional alias.
    fn parse_table_factor(&mut self) -> Result<TableRef, SyntaxError> {
        let name = self.expect_identifier()?;
        let alias = self.parse_optional_alias()?;
        Ok(TableRef::Table { name, alias })
    }

    /// Parses a join type, or returns `None` if no join follows.
    fn parse_join_type(&mut self) -> Result<Option<JoinType>, SyntaxError> {
        let join_type = match &self.current().kind {
            TokenKind::Keyword(Keyword::Join) => {
                self.advance();
                return Ok(Some(JoinType::Inner));
            }
            TokenKind::Keyword(Keyword::Inner) => JoinType::Inner,
            TokenKind::Keyword(Keyword::Cross) => JoinType::Cross,
            TokenKind::Keyword(Keyword::Left) => JoinType::Left,
            TokenKind::Keyword(Keyword::Right) => JoinType::Right,
            TokenKind::Keyword(Keyword::Full) => JoinType::Full,
            _ => return Ok(None),
        };
        self.advance();

        let join_type = if self.consume_keyword(Keyword::Outer) {
            match join_type {
                JoinType::Left => JoinType::LeftOuter,
                JoinType::Right => JoinType::RightOuter,
                JoinType::Full => JoinType::FullOuter,
                _ => return Err(self.previous_unexpected("JOIN")),
            }
        } else {
            join_type
        };

        self.expect_keyword(Keyword::Join)?;
        Ok(Some(join_type))
    }

    /// Parses `ON condition` or `USING (col, ...)`.
    fn parse_join_constraint(&mut self) -> Result<JoinConstraint, SyntaxError> {
        if self.consume_keyword(Keyword::On) {
            Ok(JoinConstraint::On(self.parse_expression(0)?))
        } else if self.consume_keyword(Keyword::Using) {
            self.expect(&TokenKind::LeftParen)?;
            let columns = self.parse_identifier_list()?;
            self.expect(&TokenKind::RightParen)?;
            Ok(JoinConstraint::Using(columns))
        } else {
            Err(self.unexpected("ON or USING"))
        }
    }

    /// Parses an optional `[AS] alias`.
    fn parse_optional_alias(&mut self) -> Result<Option<String>, SyntaxError> {
        if self.consume_keyword(Keyword::As) {
            Ok(Some(self.expect_identifier()?))
        } else if matches!(&self.current().kind, TokenKind::Identifier(_)) {
            Ok(Some(self.expect_identifier()?))
        } else {
            Ok(None)
        }
    }

    fn parse_where_clause(&mut self) -> Result<WhereClause, SyntaxError> {
        self.expect_keyword(Keyword::Where)?;
        Ok(WhereClause {
            condition: self.parse_expression(0)?,
        })
    }

    /// Parses an INSERT statement.
    fn parse_insert_statement(&mut self) -> Result<InsertStatement, SyntaxError> {
        self.expect_keyword(Keyword::Insert)?;
        self.expect_keyword(Keyword::Into)?;

        let table = self.expect_identifier()?;

        // Column list (optional)
        let columns = if self.consume(&TokenKind::LeftParen) {
            let cols = self.parse_identifier_list()?;
            self.expect(&TokenKind::RightParen)?;
            cols
        } else {
            vec![]
        };

        self.expect_keyword(Keyword::Values)?;
        let mut rows = vec![];
        loop {
            self.expect(&TokenKind::LeftParen)?;
            rows.push(self.parse_expression_list()?);
            self.expect(&TokenKind::RightParen)?;
            if !self.consume(&TokenKind::Comma) {
                break;
            }
        }

        Ok(InsertStatement {
            table,
            columns,
            rows,
        })
    }

    /// Parses an UPDATE statement.
    fn parse_update_statement(&mut self) -> Result<UpdateStatement, SyntaxError> {
        self.expect_keyword(Keyword::Update)?;
        let table = self.expect_identifier()?;
        self.expect_keyword(Keyword::Set)?;

        let mut assignments = vec![];
        loop {
            let column = self.expect_identifier()?;
            self.expect(&TokenKind::Eq)?;
            let value = self.parse_expression(0)?;
            assignments.push(Assignment { column, value });

            if !self.consume(&TokenKind::Comma) {
                break;
            }
        }

        let where_clause = self.parse_where_clause()?;

        Ok(UpdateStatement {
            table,
            assignments,
            where_clause,
        })
    }

    /// Parses a DELETE statement.
    fn parse_delete_statement(&mut self) -> Result<DeleteStatement, SyntaxError> {
        self.expect_keyword(Keyword::Delete)?;
        self.expect_keyword(Keyword::From)?;
        let table = self.expect_identifier()?;
        let where_clause = self.parse_where_clause()?;

        Ok(DeleteStatement {
            table,
            where_clause,
        })
    }

    /// Parses an ORDER BY list. A missing direction means ascending.
    fn parse_order_by_list(&mut self) -> Result<Vec<OrderBy>, SyntaxError> {
        let mut items = vec![];
        loop {
            let expr = self.parse_expression(0)?;
            let direction = if self.consume_keyword(Keyword::Desc) {
                OrderDirection::Desc
            } else {
                self.consume_keyword(Keyword::Asc);
                OrderDirection::Asc
            };

            items.push(OrderBy { expr, direction });

            if !self.consume(&TokenKind::Comma) {
                break;
            }
        }
        Ok(items)
    }

    /// Parses an expression using Pratt parsing.
    fn parse_expression(&mut self, min_bp: u8) -> Result<Expr, SyntaxError> {
        // Parse prefix (primary expression or unary operator)
        let mut lhs = self.parse_prefix()?;

        // Parse infix operators
        while let Some((l_bp, r_bp)) = infix_binding_power(&self.current().kind) {
            if l_bp < min_bp {
                break;
            }

            lhs = match self.current().kind {
                TokenKind::Keyword(Keyword::Is) => {
                    self.advance();
                    let negated = self.consume_keyword(Keyword::Not);
                    let rhs = self.parse_expression(r_bp)?;
                    negate_if(lhs.binary(BinaryOp::Is, rhs), negated)
                }
                TokenKind::Keyword(Keyword::Not) => {
                    self.advance();
                    self.parse_negatable_predicate(lhs)?.negate()
                }
                TokenKind::Keyword(Keyword::In | Keyword::Between | Keyword::Like) => {
                    self.parse_negatable_predicate(lhs)?
                }
                TokenKind::NotEq => {
                    self.advance();
                    let rhs = self.parse_expression(r_bp)?;
                    lhs.not_eq(rhs)
                }
                ref kind => {
                    let Some(op) = token_to_binary_op(kind) else {
                        break;
                    };
                    self.advance();
                    let rhs = self.parse_expression(r_bp)?;
                    lhs.binary(op, rhs)
                }
            };
        }

        Ok(lhs)
    }

    /// Parses the part of `IN`, `BETWEEN` or `LIKE` that follows the left
    /// operand (and an optional infix `NOT`).
    fn parse_negatable_predicate(&mut self, lhs: Expr) -> Result<Expr, SyntaxError> {
        let (_, r_bp) = COMPARISON_BP;
        if self.consume_keyword(Keyword::In) {
            let set = self.parse_in_set()?;
            Ok(Expr::In {
                expr: Box::new(lhs),
                set,
            })
        } else if self.consume_keyword(Keyword::Between) {
            let low = self.parse_expression(ADDITIVE_BP)?;
            self.expect_keyword(Keyword::And)?;
            let high = self.parse_expression(ADDITIVE_BP)?;
            Ok(lhs.between(low, high))
        } else if self.consume_keyword(Keyword::Like) {
            let rhs = self.parse_expression(r_bp)?;
            Ok(lhs.binary(BinaryOp::Like, rhs))
        } else {
            Err(self.unexpected("IN, BETWEEN, or LIKE"))
        }
    }

    /// Parses the right-hand side of IN.
    fn parse_in_set(&mut self) -> Result<InSet, SyntaxError> {
        if let TokenKind::Variable(name) = &self.current().kind {
            let name = name.clone();
            self.advance();
            return Ok(InSet::Variable(name));
        }

        self.expect(&TokenKind::LeftParen)?;
        let set = if self.check_keyword(Keyword::Select) {
            InSet::Subquery(Box::new(self.parse_select_statement()?))
        } else {
            InSet::List(self.parse_expression_list()?)
        };
        self.expect(&TokenKind::RightParen)?;
        Ok(set)
    }

    /// Parses a prefix expression.
    fn parse_prefix(&mut self) -> Result<Expr, SyntaxError> {
        // Check for unary operators
        if let (Some(op), Some(bp)) = (
            token_to_unary_op(&self.current().kind),
            prefix_binding_power(&self.current().kind),
        ) {
            self.advance();
            let operand = self.parse_expression(bp)?;
            return Ok(Expr::unary(op, operand));
        }

        self.parse_primary()
    }

    /// Parses a primary expression.
    fn parse_primary(&mut self) -> Result<Expr, SyntaxError> {
        match &self.current().kind {
            // Literals
            TokenKind::Integer(n) => {
                let value = *n;
                self.advance();
                Ok(Expr::integer(value))
            }
            TokenKind::Float(f) => {
                let value = *f;
                self.advance();
                Ok(Expr::float(value))
            }
            TokenKind::ApproximateFloat { mantissa, exponent } => {
                let literal = Literal::ApproximateFloat {
                    mantissa: *mantissa,
                    exponent: *exponent,
                };
                self.advance();
                Ok(Expr::Literal(literal))
            }
            TokenKind::Quote(_) => self.parse_quoted_literal(),
            TokenKind::Boolean(b) => {
                let value = *b;
                self.advance();
                Ok(Expr::boolean(value))
            }
            TokenKind::Keyword(Keyword::Null) => {
                self.advance();
                Ok(Expr::null())
            }
            TokenKind::Keyword(Keyword::CurrentUser) => {
                self.advance();
                Ok(Expr::Literal(Literal::CurrentUser))
            }

            // Parameter placeholders
            TokenKind::Variable(name) => {
                let name = name.clone();
                self.advance();
                Ok(Expr::Variable(name))
            }

            // Parenthesized expression or subquery
            TokenKind::LeftParen => {
                self.advance();
                let expr = if self.check_keyword(Keyword::Select) {
                    Expr::Subquery(Box::new(self.parse_select_statement()?))
                } else {
                    self.parse_expression(0)?
                };
                self.expect(&TokenKind::RightParen)?;
                Ok(expr)
            }

            // Aggregate functions
            TokenKind::Keyword(
                kw @ (Keyword::Count | Keyword::Sum | Keyword::Avg | Keyword::Min | Keyword::Max),
            ) => {
                let func = match kw {
                    Keyword::Count => AggregateFunction::Count,
                    Keyword::Sum => AggregateFunction::Sum,
                    Keyword::Avg => AggregateFunction::Avg,
                    Keyword::Min => AggregateFunction::Min,
                    _ => AggregateFunction::Max,
                };
                self.advance();
                self.parse_aggregate(func)
            }

            TokenKind::Keyword(Keyword::Ifnull) => {
                self.advance();
                self.parse_function_call(String::from(Keyword::Ifnull.as_str()))
            }

            // CASE expression
            TokenKind::Keyword(Keyword::Case) => self.parse_case_expression(),

            // EXISTS
            TokenKind::Keyword(Keyword::Exists) => {
                self.advance();
                self.expect(&TokenKind::LeftParen)?;
                let subquery = self.parse_select_statement()?;
                self.expect(&TokenKind::RightParen)?;
                Ok(Expr::Exists(Box::new(subquery)))
            }

            // Identifier (column reference or function call)
            TokenKind::Identifier(name) => {
                let name = name.clone();
                self.advance();

                // Check for function call
                if self.check(&TokenKind::LeftParen) {
                    return self.parse_function_call(name);
                }

                // Check for qualified name (table.column or table.*)
                if self.consume(&TokenKind::Dot) {
                    if self.consume(&TokenKind::Star) {
                        return Ok(Expr::Wildcard { table: Some(name) });
                    }
                    let column = self.expect_identifier()?;
                    return Ok(Expr::qualified_column(name, column));
                }

                Ok(Expr::column(name))
            }

            _ => Err(self.unexpected("expression")),
        }
    }

    /// Parses `'text'` or `"text"` from its quote/body/quote tokens.
    ///
    /// Text that is exactly a calendar date or timestamp becomes a date
    /// literal; everything else is a plain string.
    fn parse_quoted_literal(&mut self) -> Result<Expr, SyntaxError> {
        let TokenKind::Quote(quote) = self.current().kind else {
            return Err(self.unexpected("quote"));
        };
        self.advance();

        let value = if let TokenKind::StringLiteral(s) = &self.current().kind {
            let value = s.clone();
            self.advance();
            value
        } else {
            String::new()
        };
        self.expect(&TokenKind::Quote(quote))?;

        Ok(Expr::Literal(classify_string(value)))
    }

    /// Parses the parenthesized argument of an aggregate.
    fn parse_aggregate(&mut self, func: AggregateFunction) -> Result<Expr, SyntaxError> {
        self.expect(&TokenKind::LeftParen)?;
        let distinct = self.consume_keyword(Keyword::Distinct);

        let arg = if func == AggregateFunction::Count && !distinct && self.check(&TokenKind::Star)
        {
            self.advance();
            Expr::Wildcard { table: None }
        } else {
            self.parse_expression(0)?
        };

        self.expect(&TokenKind::RightParen)?;

        Ok(Expr::Aggregate {
            func,
            distinct,
            arg: Box::new(arg),
        })
    }

    /// Parses a function call.
    fn parse_function_call(&mut self, name: String) -> Result<Expr, SyntaxError> {
        self.expect(&TokenKind::LeftParen)?;

        let args = if self.check(&TokenKind::RightParen) {
            vec![]
        } else {
            self.parse_expression_list()?
        };

        self.expect(&TokenKind::RightParen)?;

        Ok(Expr::Function(FunctionCall { name, args }))
    }

    /// Parses a CASE expression.
    fn parse_case_expression(&mut self) -> Result<Expr, SyntaxError> {
        self.expect_keyword(Keyword::Case)?;

        // Check for simple CASE (CASE expr WHEN ...)
        let operand = if self.check_keyword(Keyword::When) {
            None
        } else {
            Some(Box::new(self.parse_expression(0)?))
        };

        // Parse WHEN/THEN clauses
        let mut branches = vec![];
        while self.consume_keyword(Keyword::When) {
            let condition = self.parse_expression(0)?;
            self.expect_keyword(Keyword::Then)?;
            let result = self.parse_expression(0)?;
            branches.push(WhenClause { condition, result });
        }
        if branches.is_empty() {
            return Err(self.unexpected("WHEN"));
        }

        // Parse ELSE clause
        let else_result = if self.consume_keyword(Keyword::Else) {
            Some(Box::new(self.parse_expression(0)?))
        } else {
            None
        };

        self.expect_keyword(Keyword::End)?;

        Ok(Expr::Case {
            operand,
            branches,
            else_result,
        })
    }

    /// Parses a comma-separated list of expressions.
    fn parse_expression_list(&mut self) -> Result<Vec<Expr>, SyntaxError> {
        let mut exprs = vec![];
        loop {
            exprs.push(self.parse_expression(0)?);
            if !self.consume(&TokenKind::Comma) {
                break;
            }
        }
        Ok(exprs)
    }

    /// Parses a comma-separated list of identifiers.
    fn parse_identifier_list(&mut self) -> Result<Vec<String>, SyntaxError> {
        let mut idents = vec![];
        loop {
            idents.push(self.expect_identifier()?);
            if !self.consume(&TokenKind::Comma) {
                break;
            }
        }
        Ok(idents)
    }

    // --- Helper methods ---

    /// Returns the current token.
    fn current(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&self.eof)
    }

    /// Advances to the next token.
    fn advance(&mut self) {
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
    }

    /// Checks if the current token matches the given kind.
    fn check(&self, kind: &TokenKind) -> bool {
        core::mem::discriminant(&self.current().kind) == core::mem::discriminant(kind)
    }

    /// Checks if the current token is the given keyword.
    fn check_keyword(&self, keyword: Keyword) -> bool {
        self.current().as_keyword() == Some(keyword)
    }

    /// Advances past the current token if it matches the given kind.
    fn consume(&mut self, kind: &TokenKind) -> bool {
        let matched = self.check(kind);
        if matched {
            self.advance();
        }
        matched
    }

    /// Advances past the current token if it is the given keyword.
    fn consume_keyword(&mut self, keyword: Keyword) -> bool {
        let matched = self.check_keyword(keyword);
        if matched {
            self.advance();
        }
        matched
    }

    /// Expects the current token to be the given kind.
    fn expect(&mut self, kind: &TokenKind) -> Result<(), SyntaxError> {
        let matched = match (kind, &self.current().kind) {
            (TokenKind::Quote(expected), TokenKind::Quote(found)) => expected == found,
            _ => self.check(kind),
        };
        if matched {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected(kind.to_string()))
        }
    }

    /// Expects the current token to be the given keyword.
    fn expect_keyword(&mut self, keyword: Keyword) -> Result<(), SyntaxError> {
        if self.consume_keyword(keyword) {
            Ok(())
        } else {
            Err(self.unexpected(keyword.as_str()))
        }
    }

    /// Expects and returns an identifier.
    fn expect_identifier(&mut self) -> Result<String, SyntaxError> {
        match &self.current().kind {
            TokenKind::Identifier(name) => {
                let name = name.clone();
                self.advance();
                Ok(name)
            }
            _ => Err(self.unexpected("identifier")),
        }
    }

    /// Expects and returns an unsigned integer literal.
    fn expect_integer(&mut self) -> Result<i64, SyntaxError> {
        match self.current().kind {
            TokenKind::Integer(n) => {
                self.advance();
                Ok(n)
            }
            _ => Err(self.unexpected("integer")),
        }
    }

    /// Builds an error for the current token.
    fn unexpected(&self, expected: impl Into<String>) -> SyntaxError {
        SyntaxError::unexpected(expected, self.current())
    }

    /// Builds an error for the token just consumed.
    fn previous_unexpected(&self, expected: impl Into<String>) -> SyntaxError {
        let token = self
            .pos
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .unwrap_or(&self.eof);
        SyntaxError::unexpected(expected, token)
    }
}

/// Wraps `expr` in a NOT when `negated` is set.
fn negate_if(expr: Expr, negated: bool) -> Expr {
    if negated {
        expr.negate()
    } else {
        expr
    }
}

/// Decides the literal kind of a quoted string.
fn classify_string(value: String) -> Literal {
    if let Ok(date) = NaiveDate::parse_from_str(&value, DATE_FORMAT) {
        if date.format(DATE_FORMAT).to_string() == value {
            return Literal::Date(date);
        }
    }
    if let Ok(timestamp) = NaiveDateTime::parse_from_str(&value, DATE_TIME_FORMAT) {
        if timestamp.format(DATE_TIME_FORMAT).to_string() == value {
            return Literal::DateTime(timestamp);
        }
    }
    Literal::String(value)
}
