//! Module `scanner` implements a one‑pass lexer for the Lox language.
//!
//! It transforms a source `&str` into a sequence of [`Token`]s, skipping whitespace
//! and comments, and emitting exactly one `EOF` token at the end. Designed as a `FusedIterator`,
//! it can be chained safely with other iterator adapters.
//!
//! # Public API
//!
//! - `Scanner::new(src: &str) -> Scanner<'_>`
//!   Create a new lexer over the input text.
//!
//! - `impl Iterator for Scanner<'a>`
//!   Yields `Result<Token, LoxError>` on each `.next()`.  Errors are not fatal:
//!   the next call resumes right after the offending input.
//!
//! - `Scanner::scan_tokens(self, reporter)`
//!   Drains the iterator, handing every error to the reporter and returning the
//!   tokens (always terminated by `EOF`).
//!
//! # Token Recognition (`scan_token`)
//!
//! - Single‑character tokens: `(`, `)`, `{`, `}`, `,`, `.`, `-`, `+`, `;`, `*`.
//! - Two‑character operators: `!=`, `==`, `<=`, `>=` (maximal munch).
//! - String literals: `"` … `"`, allowing multi‑line and reporting unterminated errors.
//! - Numeric literals: integer and optional fractional part.  No exponent, no leading dot.
//! - Identifiers/keywords: alphanumeric/_ sequences, resolved via a perfect‑hash `KEYWORDS` map.
//! - Comments are skipped with `memchr` to the next newline.
//!
//! # Example
//!
//! ```rust
//! use rox::scanner::Scanner;
//! use rox::LoxError;
//!
//! let mut errors: Vec<LoxError> = Vec::new();
//! let tokens = Scanner::new("print 123; // example").scan_tokens(&mut errors);
//! assert_eq!(tokens.len(), 4);
//! assert!(errors.is_empty());
//! ```

use crate::error::{LoxError, Reporter, Result};
use crate::token::{Token, TokenType};
use log::{debug, info};
use memchr::memchr;
use phf::phf_map;
use std::iter::FusedIterator;

// ─────────────────────────────────────────────────────────────────────────────
// Static keyword map (compile‑time perfect hash)
// ─────────────────────────────────────────────────────────────────────────────

static KEYWORDS: phf::Map<&'static [u8], TokenType> = phf_map! {
    b"and"    => TokenType::AND,
    b"class"  => TokenType::CLASS,
    b"else"   => TokenType::ELSE,
    b"false"  => TokenType::FALSE,
    b"fun"    => TokenType::FUN,
    b"for"    => TokenType::FOR,
    b"if"     => TokenType::IF,
    b"nil"    => TokenType::NIL,
    b"or"     => TokenType::OR,
    b"print"  => TokenType::PRINT,
    b"return" => TokenType::RETURN,
    b"super"  => TokenType::SUPER,
    b"this"   => TokenType::THIS,
    b"true"   => TokenType::TRUE,
    b"var"    => TokenType::VAR,
    b"while"  => TokenType::WHILE,
};

/// A single pass **scanner / lexer** that converts source text into a
/// sequence of [`Token`]s.
pub struct Scanner<'a> {
    src: &'a str,
    bytes: &'a [u8], // byte view of `src`
    start: usize,    // first byte of the current lexeme
    curr: usize,     // one past the last byte examined
    line: usize,
}

impl<'a> Scanner<'a> {
    /// Create a new lexer over `src`.
    #[inline]
    pub fn new(src: &'a str) -> Self {
        info!("Scanner created over {} bytes", src.len());

        Self {
            src,
            bytes: src.as_bytes(),
            start: 0,
            curr: 0,
            line: 1,
        }
    }

    /// Scan the whole input.  Every error goes to `reporter`; scanning
    /// continues past it.
    pub fn scan_tokens(self, reporter: &mut dyn Reporter) -> Vec<Token> {
        let mut tokens: Vec<Token> = Vec::new();

        for result in self {
            match result {
                Ok(token) => tokens.push(token),
                Err(e) => reporter.report(e),
            }
        }

        info!("Scanned {} token(s)", tokens.len());

        tokens
    }

    // ───────────────────────────── primitive helpers ────────────────────────

    #[inline(always)]
    const fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline(always)]
    fn is_at_end(&self) -> bool {
        self.curr >= self.len()
    }

    /// Advance one byte and return it.  Callers guard with `is_at_end`.
    #[inline(always)]
    fn advance(&mut self) -> u8 {
        let b = self.bytes[self.curr];
        self.curr += 1;
        b
    }

    /// Peek at the current byte without consuming it.  Returns `0` past EOF.
    #[inline(always)]
    fn peek(&self) -> u8 {
        if self.is_at_end() {
            0
        } else {
            self.bytes[self.curr]
        }
    }

    #[inline(always)]
    fn peek_next(&self) -> u8 {
        if self.curr + 1 >= self.len() {
            0
        } else {
            self.bytes[self.curr + 1]
        }
    }

    /// Conditionally consume a byte **iff** it matches `expected`.
    #[inline(always)]
    fn match_byte(&mut self, expected: u8) -> bool {
        if !self.is_at_end() && self.peek() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    // ───────────────────────────── core lexing ─────────────────────────────

    /// Pick `matched` if the next byte is `expected` (consuming it), else
    /// `otherwise`.  Handles `!=`, `==`, `<=`, `>=`.
    #[inline(always)]
    fn either(&mut self, expected: u8, matched: TokenType, otherwise: TokenType) -> TokenType {
        if self.match_byte(expected) {
            matched
        } else {
            otherwise
        }
    }

    /// Scan one lexeme starting at `self.start`.  `Ok(None)` means whitespace
    /// or a comment was skipped.
    fn scan_token(&mut self) -> Result<Option<TokenType>> {
        let kind = match self.advance() {
            b'(' => TokenType::LEFT_PAREN,
            b')' => TokenType::RIGHT_PAREN,
            b'{' => TokenType::LEFT_BRACE,
            b'}' => TokenType::RIGHT_BRACE,
            b',' => TokenType::COMMA,
            b'.' => TokenType::DOT,
            b'-' => TokenType::MINUS,
            b'+' => TokenType::PLUS,
            b';' => TokenType::SEMICOLON,
            b'*' => TokenType::STAR,

            b'!' => self.either(b'=', TokenType::BANG_EQUAL, TokenType::BANG),
            b'=' => self.either(b'=', TokenType::EQUAL_EQUAL, TokenType::EQUAL),
            b'<' => self.either(b'=', TokenType::LESS_EQUAL, TokenType::LESS),
            b'>' => self.either(b'=', TokenType::GREATER_EQUAL, TokenType::GREATER),

            b' ' | b'\r' | b'\t' => return Ok(None),

            b'\n' => {
                self.line += 1;
                return Ok(None);
            }

            b'/' if self.match_byte(b'/') => {
                // Stop on the newline; the `\n` arm above counts it.
                self.curr = match memchr(b'\n', &self.bytes[self.curr..]) {
                    Some(pos) => self.curr + pos,
                    None => self.len(),
                };
                return Ok(None);
            }

            b'/' => TokenType::SLASH,

            b'"' => self.string()?,

            b'0'..=b'9' => self.number(),

            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(),

            _ => {
                // Skip the whole code point so a multi‑byte character is
                // reported once.
                let c: char = self.src[self.start..]
                    .chars()
                    .next()
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                self.curr = self.start + c.len_utf8();

                return Err(LoxError::lex(
                    self.line,
                    format!("Unexpected character: {}", c),
                ));
            }
        };

        Ok(Some(kind))
    }

    /// String literal; the opening `"` is already consumed.  Newlines inside
    /// are allowed and counted.
    fn string(&mut self) -> Result<TokenType> {
        while !self.is_at_end() && self.peek() != b'"' {
            if self.advance() == b'\n' {
                self.line += 1;
            }
        }

        if self.is_at_end() {
            return Err(LoxError::lex(self.line, "Unterminated string."));
        }

        self.advance(); // closing quote

        let contents: &str = &self.src[self.start + 1..self.curr - 1];
        Ok(TokenType::STRING(contents.to_owned()))
    }

    /// `123` or `3.14`.  A trailing `.` is left for the next token.
    fn number(&mut self) -> TokenType {
        self.skip_digits();

        if self.peek() == b'.' && self.peek_next().is_ascii_digit() {
            self.advance();
            self.skip_digits();
        }

        let text: &str = &self.src[self.start..self.curr];
        // Only ASCII digits and at most one dot, so parsing cannot fail.
        TokenType::NUMBER(text.parse::<f64>().unwrap_or(0.0))
    }

    #[inline]
    fn skip_digits(&mut self) {
        while self.peek().is_ascii_digit() {
            self.advance();
        }
    }

    /// Identifier, or a keyword if the text is in [`KEYWORDS`].
    fn identifier(&mut self) -> TokenType {
        while matches!(self.peek(), b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_') {
            self.advance();
        }

        KEYWORDS
            .get(&self.bytes[self.start..self.curr])
            .cloned()
            .unwrap_or(TokenType::IDENTIFIER)
    }
}

// ───────────────────────── Iterator implementation ─────────────────────────

impl<'a> Iterator for Scanner<'a> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.curr > self.len() {
                return None;
            }

            // One EOF, then the iterator is exhausted.
            if self.curr == self.len() {
                self.curr += 1;
                return Some(Ok(Token::new(TokenType::EOF, "", self.line)));
            }

            self.start = self.curr;

            match self.scan_token() {
                Err(e) => return Some(Err(e)),

                Ok(Some(kind)) => {
                    let lexeme: &str = &self.src[self.start..self.curr];
                    debug!("Scanned {} '{}' on line {}", kind.name(), lexeme, self.line);

                    return Some(Ok(Token::new(kind, lexeme, self.line)));
                }

                Ok(None) => {}
            }
        }
    }
}

impl<'a> FusedIterator for Scanner<'a> {}
