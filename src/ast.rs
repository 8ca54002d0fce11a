//! Abstract syntax tree produced by the [`Parser`](crate::parser::Parser).
//!
//! The tree is strictly owned: every node owns its children.  The one
//! exception is [`FunctionDecl`], held behind an `Rc` so that a runtime
//! function value can point back at its declaration without copying the
//! body.  Nodes are never moved or rebuilt after parsing.

use std::rc::Rc;

use crate::token::{Literal, Token};

/// Stable identity of an expression node, handed out by the parser.  The
/// resolver's binding table is keyed by this id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExprId(pub usize);

/// An expression node: its identity plus its shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub id: ExprId,
    pub kind: ExprKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// A literal constant: number, string, `true`, `false`, or `nil`.
    Literal(Literal),

    /// Parenthesised sub‑expression: `"(" expression ")"`.
    Grouping(Box<Expr>),

    /// Prefix unary operator expression
    /// *Example:* `!isReady` or `-42`
    Unary {
        /// The operator token (`!` or `-`).
        operator: Token,
        right: Box<Expr>,
    },

    /// Infix binary operator expression
    /// *Example:* `a + b`, `x <= y`
    Binary {
        left: Box<Expr>,
        operator: Token,
        right: Box<Expr>,
    },

    /// Short‑circuiting logical operators `and` / `or`.
    Logical {
        left: Box<Expr>,
        operator: Token, // `AND` or `OR`
        right: Box<Expr>,
    },

    /// Variable access.
    Variable(Token),

    /// Assignment expression: `identifier "=" expression`
    Assign { name: Token, value: Box<Expr> },

    /// Function‑ or class‑call expression
    /// *Example:* `clock()` or `add(1, 2)`
    Call {
        callee: Box<Expr>,
        /// The closing `)` token ‑ retained for error reporting.
        paren: Token,
        arguments: Vec<Expr>,
    },

    /// object.property
    Get { object: Box<Expr>, name: Token },

    /// object.property = value
    Set {
        object: Box<Expr>,
        name: Token,
        value: Box<Expr>,
    },
}

/// A named function: top‑level `fun` declarations and class methods alike.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    pub name: Token,

    /// Parameter name tokens (arity ≤ 255).
    pub params: Vec<Token>,

    pub body: Vec<Stmt>,
}

/// **Abstract‑Syntax‑Tree node** for *statements*.  A program is a sequence
/// of these nodes returned by [`Parser::parse`](crate::parser::Parser::parse).
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// Stand‑alone expression terminated by a semicolon.
    Expression(Expr),

    Print(Expr),

    /// Variable declaration: `"var" IDENT ("=" initializer)? ";"`.
    Var {
        name: Token,
        initializer: Option<Expr>,
    },

    /// Braced scope containing zero or more declarations/statements.
    Block(Vec<Stmt>),

    If {
        condition: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },

    /// `while` loop.  `for` loops are desugared into this as well.
    While { condition: Expr, body: Box<Stmt> },

    Function(Rc<FunctionDecl>),

    Return {
        /// The `return` keyword token (for error locations).
        keyword: Token,

        /// Absent ⇒ `nil` is returned.
        value: Option<Expr>,
    },

    Class {
        name: Token,
        methods: Vec<Rc<FunctionDecl>>,
    },
}
