use tracing::{debug, trace};

use crate::error::{ErrorReporter, LexError};
use crate::token::{Literal, Token, TokenType};

/// Single-pass scanner over one source string.
///
/// `scan_tokens` consumes the scanner, so every source gets a fresh instance.
pub struct Scanner<'a, R: ErrorReporter> {
    source: &'a str,
    reporter: &'a mut R,
    tokens: Vec<Token>,
    start: usize,
    current: usize,
    line: u32,
    start_line: u32,
    errors: usize,
}

impl<'a, R: ErrorReporter> Scanner<'a, R> {
    pub fn new(source: &'a str, reporter: &'a mut R) -> Self {
        Self {
            source,
            reporter,
            tokens: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
            start_line: 1,
            errors: 0,
        }
    }

    /// Scans the whole source. The result always ends with exactly one `Eof`.
    pub fn scan_tokens(mut self) -> Vec<Token> {
        while !self.is_end() {
            self.start = self.current;
            self.start_line = self.line;
            self.scan_token();
        }

        self.tokens.push(Token::eof(self.line));
        debug!(
            tokens = self.tokens.len(),
            errors = self.errors,
            lines = self.line,
            "scan finished"
        );

        self.tokens
    }

    fn scan_token(&mut self) {
        match self.next_char() {
            '(' => self.add_token(TokenType::LeftParen),
            ')' => self.add_token(TokenType::RightParen),
            '{' => self.add_token(TokenType::LeftBrace),
            '}' => self.add_token(TokenType::RightBrace),
            ',' => self.add_token(TokenType::Comma),
            '.' => self.add_token(TokenType::Dot),
            '-' => self.add_token(TokenType::Minus),
            '+' => self.add_token(TokenType::Plus),
            ';' => self.add_token(TokenType::Semicolon),
            '*' => self.add_token(TokenType::Star),
            '!' => {
                if self.match_next('=') {
                    self.add_token(TokenType::BangEqual)
                } else {
                    self.add_token(TokenType::Bang)
                }
            }
            '=' => {
                if self.match_next('=') {
                    self.add_token(TokenType::EqualEqual)
                } else {
                    self.add_token(TokenType::Equal)
                }
            }
            '<' => {
                if self.match_next('=') {
                    self.add_token(TokenType::LessEqual)
                } else {
                    self.add_token(TokenType::Less)
                }
            }
            '>' => {
                if self.match_next('=') {
                    self.add_token(TokenType::GreaterEqual)
                } else {
                    self.add_token(TokenType::Greater)
                }
            }
            '/' => {
                if self.match_next('/') {
                    // The newline is left for the main loop so it still bumps the line.
                    while self.peek_char() != '\n' && !self.is_end() {
                        let _ = self.next_char();
                    }
                } else {
                    self.add_token(TokenType::Slash)
                }
            }
            ' ' | '\r' | '\t' => {}
            '\n' => self.line += 1,
            '"' => self.string(),
            c => self.error(LexError::UnexpectedCharacter(c)),
        }
    }

    fn is_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn next_char(&mut self) -> char {
        let c = self.peek_char();
        self.current += c.len_utf8();
        c
    }

    fn peek_char(&self) -> char {
        self.source[self.current..].chars().next().unwrap_or('\0')
    }

    fn match_next(&mut self, expected: char) -> bool {
        if self.is_end() || self.peek_char() != expected {
            return false;
        }
        self.current += expected.len_utf8();
        true
    }

    fn add_token(&mut self, t: TokenType) {
        self.add_literal(t, None);
    }

    fn add_literal(&mut self, t: TokenType, literal: Option<Literal>) {
        let token = Token::new(
            t,
            &self.source[self.start..self.current],
            literal,
            self.start_line,
        );
        trace!(%token, line = token.line, "token");
        self.tokens.push(token);
    }

    fn error(&mut self, error: LexError) {
        debug!(line = self.line, ?error, "lexical error");
        self.errors += 1;
        self.reporter.report(self.line, &error.to_string());
    }

    fn string(&mut self) {
        while self.peek_char() != '"' && !self.is_end() {
            if self.next_char() == '\n' {
                self.line += 1;
            }
        }

        if self.is_end() {
            self.error(LexError::UnterminatedString);
            return;
        }

        // Consume the closing quote.
        let _ = self.next_char();

        let value = &self.source[self.start + 1..self.current - 1];
        self.add_literal(TokenType::String, Some(Literal::String(String::from(value))));
    }
}
