//! Centralised error hierarchy for the **Rox interpreter**.
//!
//! Every stage (scanner, parser, resolver, runtime) converts its failure modes
//! into one of the variants defined here.  Static stages never stop on the
//! first problem: they hand each error to a [`Reporter`] and keep going, so a
//! single run can surface many independent mistakes.
//!
//! The module **does not** decide where diagnostics go; that is the job of the
//! [`Reporter`] supplied by the caller.

use std::io;
use thiserror::Error;

use log::info;

use crate::token::{Token, TokenType};

/// Canonical error type used throughout the interpreter.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoxError {
    /// Lexical (scanner) error with source line information.
    #[error("[line {line}] Error: {message}")]
    Lex {
        /// Human‑readable description.
        message: String,

        /// 1‑based line where the error occurred.
        line: usize,
    },

    /// Syntactic (parser) error.  `location` is `" at 'lexeme'"`,
    /// `" at end"` or empty.
    #[error("[line {line}] Error{location}: {message}")]
    Parse {
        message: String,
        location: String,
        line: usize,
    },

    /// Static‑analysis failure (redeclaration, read in own initializer, ...).
    #[error("[line {line}] Error{location}: {message}")]
    Resolve {
        message: String,
        location: String,
        line: usize,
    },

    /// Runtime evaluation error.  Fatal to the whole run.
    #[error("{message}\n[line {line}]")]
    Runtime { message: String, line: usize },

    /// Wrapper around `std::io::Error` (transparent).  Raised when the print
    /// sink fails.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl LoxError {
    /// Helper constructor for the **scanner**.
    pub fn lex<S: Into<String>>(line: usize, msg: S) -> Self {
        let message: String = msg.into();

        info!("Creating Lex error: line={}, msg={}", line, message);

        LoxError::Lex { message, line }
    }

    /// Helper constructor for the **parser**, anchored at `token`.
    pub fn parse<S: Into<String>>(token: &Token, msg: S) -> Self {
        let message: String = msg.into();

        info!("Creating Parse error: line={}, msg={}", token.line, message);

        LoxError::Parse {
            message,
            location: location_of(token),
            line: token.line,
        }
    }

    /// Helper constructor for the **resolver**, anchored at `token`.
    pub fn resolve<S: Into<String>>(token: &Token, msg: S) -> Self {
        let message: String = msg.into();

        info!("Creating Resolve error: line={}, msg={}", token.line, message);

        LoxError::Resolve {
            message,
            location: location_of(token),
            line: token.line,
        }
    }

    /// Helper constructor for **runtime** failures, anchored at the
    /// offending token.
    pub fn runtime<S: Into<String>>(token: &Token, msg: S) -> Self {
        let message: String = msg.into();

        info!("Creating Runtime error: line={}, msg={}", token.line, message);

        LoxError::Runtime {
            message,
            line: token.line,
        }
    }

    /// `true` for errors found before execution starts.
    pub fn is_static(&self) -> bool {
        matches!(
            self,
            LoxError::Lex { .. } | LoxError::Parse { .. } | LoxError::Resolve { .. }
        )
    }

    /// The bare message without the line prefix.
    pub fn message(&self) -> String {
        match self {
            LoxError::Lex { message, .. }
            | LoxError::Parse { message, .. }
            | LoxError::Resolve { message, .. }
            | LoxError::Runtime { message, .. } => message.clone(),
            LoxError::Io(e) => e.to_string(),
        }
    }
}

fn location_of(token: &Token) -> String {
    if token.token_type == TokenType::EOF {
        " at end".to_string()
    } else {
        format!(" at '{}'", token.lexeme)
    }
}

/// Crate‑wide `Result` alias.
pub type Result<T> = std::result::Result<T, LoxError>;

/// Collaborator that receives every diagnostic produced while running a
/// program.
pub trait Reporter {
    fn report(&mut self, error: LoxError);
}

/// Prints each diagnostic to standard error.
#[derive(Debug, Default)]
pub struct StderrReporter;

impl Reporter for StderrReporter {
    fn report(&mut self, error: LoxError) {
        log::debug!("Reporting: {}", error);

        eprintln!("{}", error);
    }
}

/// Collects diagnostics in memory.
impl Reporter for Vec<LoxError> {
    fn report(&mut self, error: LoxError) {
        self.push(error);
    }
}
