//! Static resolver pass for the **Rox** interpreter.
//!
//! This resolver does three things in one AST walk:
//! 1. Build lexical scopes (stack of `HashMap<String,bool>` tracking declared/defined).
//! 2. Report static errors (redeclaration, read in own initializer, top‑level `return`).
//! 3. Tell the interpreter, for *each* variable occurrence that lives in a
//!    local scope, how many scopes out it was declared.  Anything not found is
//!    left unrecorded and looked up in the globals at runtime.
//!
//! Errors never stop the walk; each one goes to the [`Reporter`] and the
//! resolver moves on to the next node.

use crate::ast::{Expr, ExprId, ExprKind, FunctionDecl, Stmt};
use crate::error::{LoxError, Reporter};
use crate::interpreter::Interpreter;
use crate::token::Token;
use log::{debug, info};
use std::collections::HashMap;

/// Are we inside a user function?  Used to validate `return`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum FunctionType {
    None,
    Function,
    Method,
}

/// Resolver: tracks scopes, enforces static rules, and *records* binding
/// distances by calling back into the interpreter.
pub struct Resolver<'i, 'r> {
    interpreter: &'i mut Interpreter,
    reporter: &'r mut dyn Reporter,
    scopes: Vec<HashMap<String, bool>>, // false=declared, true=defined
    /// Readiness of top‑level names.  Only consulted for reads in an
    /// initializer; globals are never given a distance.
    globals: HashMap<String, bool>,
    current_function: FunctionType,
    had_error: bool,
}

impl<'i, 'r> Resolver<'i, 'r> {
    /// Create a new resolver bound to the given interpreter.
    pub fn new(interpreter: &'i mut Interpreter, reporter: &'r mut dyn Reporter) -> Self {
        info!("Resolver instantiated");

        Resolver {
            interpreter,
            reporter,
            scopes: Vec::new(),
            globals: HashMap::new(),
            current_function: FunctionType::None,
            had_error: false,
        }
    }

    /// Walk all top‑level statements.
    pub fn resolve(&mut self, statements: &[Stmt]) {
        info!(
            "Beginning resolve pass over {} statement(s)",
            statements.len()
        );

        for stmt in statements {
            self.resolve_stmt(stmt);
        }

        info!("Resolve pass finished, errors={}", self.had_error);
    }

    pub fn had_error(&self) -> bool {
        self.had_error
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Statement resolution
    // ─────────────────────────────────────────────────────────────────────────

    fn resolve_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Class { name, methods } => {
                self.declare(name);
                self.define(name);

                for method in methods {
                    self.resolve_function(method, FunctionType::Method);
                }
            }

            Stmt::Block(statements) => {
                self.begin_scope();
                for s in statements {
                    self.resolve_stmt(s);
                }
                self.end_scope();
            }

            Stmt::Var { name, initializer } => {
                // declare → resolve initializer → define
                self.declare(name);
                if let Some(expr) = initializer {
                    self.resolve_expr(expr);
                }
                self.define(name);
            }

            Stmt::Function(declaration) => {
                // the name is visible inside its own body (recursion)
                self.declare(&declaration.name);
                self.define(&declaration.name);
                self.resolve_function(declaration, FunctionType::Function);
            }

            Stmt::Expression(expr) | Stmt::Print(expr) => {
                self.resolve_expr(expr);
            }

            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                self.resolve_expr(condition);
                self.resolve_stmt(then_branch);
                if let Some(eb) = else_branch.as_deref() {
                    self.resolve_stmt(eb);
                }
            }

            Stmt::While { condition, body } => {
                self.resolve_expr(condition);
                self.resolve_stmt(body);
            }

            Stmt::Return { keyword, value } => {
                if self.current_function == FunctionType::None {
                    self.error(keyword, "Can't return from top-level code.");
                }
                if let Some(expr) = value {
                    self.resolve_expr(expr);
                }
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Expression resolution
    // ─────────────────────────────────────────────────────────────────────────

    fn resolve_expr(&mut self, expr: &Expr) {
        match &expr.kind {
            ExprKind::Literal(_) => {}

            ExprKind::Grouping(inner) => self.resolve_expr(inner),

            ExprKind::Unary { right, .. } => self.resolve_expr(right),

            ExprKind::Binary { left, right, .. } | ExprKind::Logical { left, right, .. } => {
                self.resolve_expr(left);
                self.resolve_expr(right);
            }

            ExprKind::Variable(name) => {
                let ready: Option<bool> = match self.scopes.last() {
                    Some(scope) => scope.get(&name.lexeme).copied(),
                    None => self.globals.get(&name.lexeme).copied(),
                };

                if ready == Some(false) {
                    self.error(name, "Can't read local variable in its own initializer.");
                }

                self.resolve_local(expr.id, name);
            }

            ExprKind::Assign { name, value } => {
                // RHS first, then bind the target
                self.resolve_expr(value);
                self.resolve_local(expr.id, name);
            }

            ExprKind::Call {
                callee, arguments, ..
            } => {
                self.resolve_expr(callee);
                for arg in arguments {
                    self.resolve_expr(arg);
                }
            }

            ExprKind::Get { object, .. } => self.resolve_expr(object),

            ExprKind::Set { object, value, .. } => {
                self.resolve_expr(value);
                self.resolve_expr(object);
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Function helper
    // ─────────────────────────────────────────────────────────────────────────

    /// Enter a fresh scope for a function’s parameters + body.
    fn resolve_function(&mut self, function: &FunctionDecl, kind: FunctionType) {
        let enclosing = self.current_function;
        self.current_function = kind;

        self.begin_scope();
        for param in &function.params {
            self.declare(param);
            self.define(param);
        }
        for stmt in &function.body {
            self.resolve_stmt(stmt);
        }
        self.end_scope();

        self.current_function = enclosing;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Scope management
    // ─────────────────────────────────────────────────────────────────────────

    #[inline]
    fn begin_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    #[inline]
    fn end_scope(&mut self) {
        self.scopes.pop();
    }

    fn declare(&mut self, name: &Token) {
        let Some(scope) = self.scopes.last_mut() else {
            // Globals may be redeclared freely.  A name already bound, here
            // or by an earlier run, stays readable in its new initializer.
            let bound = self.interpreter.is_global(&name.lexeme);
            self.globals.entry(name.lexeme.clone()).or_insert(bound);
            return;
        };

        if scope.contains_key(&name.lexeme) {
            self.error(name, "Already a variable with this name in this scope.");
            return;
        }

        scope.insert(name.lexeme.clone(), false);
    }

    fn define(&mut self, name: &Token) {
        match self.scopes.last_mut() {
            Some(scope) => scope.insert(name.lexeme.clone(), true),
            None => self.globals.insert(name.lexeme.clone(), true),
        };
    }

    fn error(&mut self, token: &Token, message: &str) {
        self.had_error = true;
        self.reporter.report(LoxError::resolve(token, message));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Binding‑distance helper
    // ─────────────────────────────────────────────────────────────────────────

    /// Record this variable occurrence as a local at depth `d`, or leave it
    /// unrecorded (global) if no scope declares it.
    fn resolve_local(&mut self, id: ExprId, name: &Token) {
        for (depth, scope) in self.scopes.iter().rev().enumerate() {
            if scope.contains_key(&name.lexeme) {
                debug!("Resolved '{}' at depth {}", name.lexeme, depth);
                self.interpreter.resolve(id, depth);
                return;
            }
        }

        debug!("Resolved '{}' as global", name.lexeme);
    }
}
