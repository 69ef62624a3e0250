//! SQL Tokenizer implementation.
//!
//! The scanner is a small automaton. In the default state every token rule
//! is available; after an opening `'` or `"` it switches to the matching
//! string state, where only string bodies and the closing quote are
//! recognized.

use super::{Keyword, LexError, LexErrorKind, Span, Token, TokenKind};

/// Scanner state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Default,
    InSingleQuote,
    InDoubleQuote,
}

/// A lexer that tokenizes SQL input.
pub struct Lexer<'a> {
    /// The input source code.
    input: &'a str,
    /// The current byte position.
    pos: usize,
    /// The byte position of the start of the current token.
    start: usize,
    /// The current line (1-based).
    line: usize,
    /// The line of the start of the current token.
    start_line: usize,
    state: State,
    /// Where the string currently being scanned was opened.
    open_quote: Span,
}

/// Returns true for characters that may appear in a bare word.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            start: 0,
            line: 1,
            start_line: 1,
            state: State::Default,
            open_quote: Span::new(0, 0, 1),
        }
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Returns the next character without advancing.
    fn peek_next(&self) -> Option<char> {
        self.peek_nth(1)
    }

    /// Returns the character `n` positions ahead without advancing.
    fn peek_nth(&self, n: usize) -> Option<char> {
        self.input[self.pos..].chars().nth(n)
    }

    /// Advances to the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    /// Advances while `pred` holds.
    fn advance_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.advance();
        }
    }

    fn skip_whitespace(&mut self) {
        self.advance_while(char::is_whitespace);
    }

    /// Marks the current position as the start of the next token.
    fn begin(&mut self) {
        self.start = self.pos;
        self.start_line = self.line;
    }

    /// Creates a span from start to current position.
    const fn make_span(&self) -> Span {
        Span::new(self.start, self.pos, self.start_line)
    }

    /// Creates a token with the current span.
    const fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.make_span())
    }

    /// Builds an error for the text at the start of the current token.
    fn error(&self, kind: LexErrorKind) -> LexError {
        let rest = &self.input[self.start..];
        let text = rest.lines().next().unwrap_or(rest);
        LexError::new(kind, text, self.start_line, self.start)
    }

    /// Scans the next token.
    ///
    /// # Errors
    ///
    /// Returns a `LexError` if no rule matches at the current position or
    /// the input ends inside a string.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        match self.state {
            State::Default => self.scan_default(),
            State::InSingleQuote => self.scan_string('\''),
            State::InDoubleQuote => self.scan_string('"'),
        }
    }

    fn scan_default(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();
        self.begin();

        let Some(c) = self.peek() else {
            return Ok(self.make_token(TokenKind::Eof));
        };

        match c {
            '\'' | '"' => {
                self.advance();
                self.state = if c == '\'' {
                    State::InSingleQuote
                } else {
                    State::InDoubleQuote
                };
                self.open_quote = self.make_span();
                Ok(self.make_token(TokenKind::Quote(c)))
            }
            '?' => {
                self.advance();
                Ok(self.make_token(TokenKind::Variable(String::from("?"))))
            }
            ':' => self.scan_named_variable(),
            c if c.is_ascii_digit() => self.scan_number(),
            '.' if self.peek_next().is_some_and(|n| n.is_ascii_digit()) => self.scan_number(),
            '`' => self.scan_quoted_identifier(),
            c if is_word_char(c) => Ok(self.scan_word()),
            _ => self.scan_operator(),
        }
    }

    /// Scans a bare word: boolean literal, keyword or identifier.
    fn scan_word(&mut self) -> Token {
        self.advance_while(is_word_char);
        let text = &self.input[self.start..self.pos];

        if text.eq_ignore_ascii_case("true") {
            self.make_token(TokenKind::Boolean(true))
        } else if text.eq_ignore_ascii_case("false") {
            self.make_token(TokenKind::Boolean(false))
        } else if let Some(keyword) = Keyword::from_str(text) {
            self.make_token(TokenKind::Keyword(keyword))
        } else {
            self.make_token(TokenKind::Identifier(String::from(text)))
        }
    }

    /// Scans a `:name` placeholder.
    fn scan_named_variable(&mut self) -> Result<Token, LexError> {
        self.advance(); // :
        let name_start = self.pos;
        self.advance_while(is_word_char);
        if self.pos == name_start {
            return Err(self.error(LexErrorKind::UnexpectedCharacter));
        }
        let text = &self.input[self.start..self.pos];
        Ok(self.make_token(TokenKind::Variable(String::from(text))))
    }

    /// Scans a backtick-quoted identifier (e.g., `` `users` ``).
    fn scan_quoted_identifier(&mut self) -> Result<Token, LexError> {
        self.advance(); // opening backtick
        let content_start = self.pos;
        self.advance_while(is_word_char);
        let content_end = self.pos;

        if content_end == content_start || self.peek() != Some('`') {
            return Err(self.error(LexErrorKind::UnexpectedCharacter));
        }
        self.advance(); // closing backtick

        let name = &self.input[content_start..content_end];
        if Keyword::from_str(name).is_some() {
            return Err(self.error(LexErrorKind::ReservedIdentifier));
        }
        Ok(self.make_token(TokenKind::Identifier(String::from(name))))
    }

    /// Scans a number.
    ///
    /// The float form (optional leading digits, `.`, mandatory trailing
    /// digits) wins over the integer form (digits with an optional trailing
    /// `.`), so `.1` is a float and `1.` an integer.
    fn scan_number(&mut self) -> Result<Token, LexError> {
        self.advance_while(|c| c.is_ascii_digit());
        let has_leading_digits = self.pos > self.start;

        let mut is_float = false;
        if self.peek() == Some('.') {
            if self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
                is_float = true;
                self.advance(); // .
                self.advance_while(|c| c.is_ascii_digit());
            } else if has_leading_digits {
                self.advance(); // trailing . of an integer
            }
        }

        let mantissa_text = self.input[self.start..self.pos].trim_end_matches('.');

        if let Some(exponent) = self.scan_exponent()? {
            let mantissa = parse_float(mantissa_text)
                .ok_or_else(|| self.error(LexErrorKind::NumberOutOfRange))?;
            return Ok(self.make_token(TokenKind::ApproximateFloat { mantissa, exponent }));
        }

        if is_float {
            let value = parse_float(mantissa_text)
                .ok_or_else(|| self.error(LexErrorKind::NumberOutOfRange))?;
            Ok(self.make_token(TokenKind::Float(value)))
        } else {
            let value = mantissa_text
                .parse::<i64>()
                .map_err(|_| self.error(LexErrorKind::NumberOutOfRange))?;
            Ok(self.make_token(TokenKind::Integer(value)))
        }
    }

    /// Scans an `E[+-]digits` suffix directly following a number.
    fn scan_exponent(&mut self) -> Result<Option<i32>, LexError> {
        if !matches!(self.peek(), Some('e' | 'E')) {
            return Ok(None);
        }
        let digits_at = match self.peek_next() {
            Some('+' | '-') => 2,
            _ => 1,
        };
        if !self.peek_nth(digits_at).is_some_and(|c| c.is_ascii_digit()) {
            return Ok(None);
        }

        self.advance(); // E
        let exponent_start = self.pos;
        if digits_at == 2 {
            self.advance(); // sign
        }
        self.advance_while(|c| c.is_ascii_digit());

        self.input[exponent_start..self.pos]
            .parse::<i32>()
            .map(Some)
            .map_err(|_| self.error(LexErrorKind::NumberOutOfRange))
    }

    /// Scans an operator or punctuation character.
    fn scan_operator(&mut self) -> Result<Token, LexError> {
        let Some(c) = self.advance() else {
            return Ok(self.make_token(TokenKind::Eof));
        };

        let kind = match c {
            '<' => {
                if self.peek() == Some('>') {
                    self.advance();
                    TokenKind::NotEq
                } else if self.peek() == Some('=') {
                    self.advance();
                    TokenKind::LtEq
                } else {
                    TokenKind::Lt
                }
            }
            '>' => {
                if self.peek() == Some('=') {
                    self.advance();
                    TokenKind::GtEq
                } else {
                    TokenKind::Gt
                }
            }
            '!' if self.peek() == Some('=') => {
                self.advance();
                TokenKind::NotEq
            }
            '=' => TokenKind::Eq,
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '.' => TokenKind::Dot,
            ',' => TokenKind::Comma,
            _ => return Err(self.error(LexErrorKind::UnexpectedCharacter)),
        };
        Ok(self.make_token(kind))
    }

    /// Scans inside a quoted string.
    ///
    /// A quote that is not immediately followed by another quote of the same
    /// kind closes the string; everything else, with doubled quotes
    /// unescaped, becomes one string literal token.
    fn scan_string(&mut self, quote: char) -> Result<Token, LexError> {
        self.begin();

        match self.peek() {
            None => {
                let text = &self.input[self.open_quote.start..];
                Err(LexError::new(
                    LexErrorKind::UnterminatedString,
                    text,
                    self.open_quote.line,
                    self.open_quote.start,
                ))
            }
            Some(c) if c == quote && self.peek_next() != Some(quote) => {
                self.advance();
                self.state = State::Default;
                Ok(self.make_token(TokenKind::Quote(quote)))
            }
            Some(_) => {
                let mut value = String::new();
                loop {
                    match self.peek() {
                        Some(c) if c == quote => {
                            if self.peek_next() == Some(quote) {
                                value.push(quote);
                                self.advance();
                                self.advance();
                            } else {
                                break;
                            }
                        }
                        Some(c) => {
                            value.push(c);
                            self.advance();
                        }
                        None => break,
                    }
                }
                Ok(self.make_token(TokenKind::StringLiteral(value)))
            }
        }
    }

    /// Tokenizes the entire input and returns all tokens, ending with `Eof`.
    ///
    /// # Errors
    ///
    /// Returns the first `LexError` encountered; no tokens are returned in
    /// that case.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }
}

/// Parses a float that may lack digits before the decimal point.
fn parse_float(text: &str) -> Option<f64> {
    let value = if text.starts_with('.') {
        format!("0{text}").parse::<f64>().ok()?
    } else {
        text.parse::<f64>().ok()?
    };
    value.is_finite().then_some(value)
}
