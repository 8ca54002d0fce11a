//! Front door of the crate: source text in, best‑effort execution out.
//!
//! [`Lox`] drives scanner → parser → resolver → interpreter and maps the
//! outcome onto a [`RunStatus`].  One `Lox` keeps its interpreter (and so its
//! globals) alive across calls, which is what a REPL needs.

use std::io::Write;

use log::{debug, info};

use crate::error::{LoxError, Reporter};
use crate::interpreter::Interpreter;
use crate::parser::Parser;
use crate::resolver::Resolver;
use crate::scanner::Scanner;

/// Outcome of one [`Lox::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Success,
    /// A scan, parse or resolve error was reported.  Nothing was executed.
    StaticError,
    /// Execution stopped at a runtime error.
    RuntimeError,
}

impl RunStatus {
    /// Process exit code expected by the command line: 0, 65 or 70.
    pub fn exit_code(self) -> i32 {
        match self {
            RunStatus::Success => 0,
            RunStatus::StaticError => 65,
            RunStatus::RuntimeError => 70,
        }
    }
}

/// Forwards to the caller's reporter and remembers whether anything
/// came through.
struct Tracking<'a> {
    inner: &'a mut dyn Reporter,
    had_error: bool,
}

impl Reporter for Tracking<'_> {
    fn report(&mut self, error: LoxError) {
        self.had_error = true;
        self.inner.report(error);
    }
}

pub struct Lox {
    interpreter: Interpreter,
    next_expr_id: usize,
}

impl Default for Lox {
    fn default() -> Self {
        Self::new()
    }
}

impl Lox {
    pub fn new() -> Self {
        Self::from_interpreter(Interpreter::new())
    }

    /// A session whose `print` output goes to `out`.
    pub fn with_output(out: Box<dyn Write>) -> Self {
        Self::from_interpreter(Interpreter::with_output(out))
    }

    fn from_interpreter(interpreter: Interpreter) -> Self {
        Self {
            interpreter,
            next_expr_id: 0,
        }
    }

    /// Run one complete program (or one REPL line).  Static errors are all
    /// reported and suppress execution; a runtime error is reported once and
    /// ends the run.
    pub fn run(&mut self, source: &str, reporter: &mut dyn Reporter) -> RunStatus {
        let mut tracking = Tracking {
            inner: reporter,
            had_error: false,
        };

        let tokens = Scanner::new(source).scan_tokens(&mut tracking);

        let mut parser = Parser::with_first_id(tokens, self.next_expr_id, &mut tracking);
        let statements = parser.parse();
        self.next_expr_id = parser.next_id();

        Resolver::new(&mut self.interpreter, &mut tracking).resolve(&statements);

        if tracking.had_error {
            debug!("Static errors found, skipping execution");
            return RunStatus::StaticError;
        }

        info!("Parsed {} statements", statements.len());

        match self.interpreter.interpret(&statements) {
            Ok(()) => {
                info!("Program executed successfully");
                RunStatus::Success
            }

            Err(e) => {
                debug!("Runtime error: {}", e);
                tracking.inner.report(e);
                RunStatus::RuntimeError
            }
        }
    }
}
