/*!
Recursive‑descent parser for Lox.

Definitions
-----------
* **n** = number of tokens (including the sole EOF).
* Each token is consumed once via `advance()`; error recovery (`synchronize`)
  only ever moves forward, so the whole pass is **Θ(n)**.

### Logging Policy

| Location                     | Level  | Purpose                                   |
|------------------------------|--------|-------------------------------------------|
| `Parser::new`, `parse`       | `info` | Lifecycle milestones.                     |
| `declaration`, `statement`   | `debug`| High‑level descent into grammar branches. |
| Error paths (`error`)        | `debug`| Context before reporting.                 |

### Error recovery

A mismatch on a required token reports the error and unwinds with the unit
[`ParseError`] to the nearest declaration, which calls `synchronize()` and
carries on.  Some problems (invalid assignment target, more than 255
arguments / parameters) are reported without unwinding at all.

--------------------------------------------------------------------------------
Grammar (EBNF)
--------------

```text
program        → declaration* EOF ;
declaration    → classDecl | funDecl | varDecl | statement ;
classDecl      → "class" IDENT "{" function* "}" ;
funDecl        → "fun" function ;
function       → IDENT "(" parameters? ")" block ;
varDecl        → "var" IDENT ( "=" expression )? ";" ;
statement      → exprStmt | forStmt | ifStmt | printStmt
               | returnStmt | whileStmt | block ;
forStmt        → "for" "(" ( varDecl | exprStmt | ";" )
                 expression? ";" expression? ")" statement ;
ifStmt         → "if" "(" expression ")" statement ( "else" statement )? ;
returnStmt     → "return" expression? ";" ;
whileStmt      → "while" "(" expression ")" statement ;
block          → "{" declaration* "}" ;
parameters     → IDENT ( "," IDENT )* ;
expression     → assignment ;
assignment     → ( call "." )? IDENT "=" assignment | logic_or ;
logic_or       → logic_and ( "or" logic_and )* ;
logic_and      → equality  ( "and" equality )* ;
equality       → comparison ( ( "!=" | "==" ) comparison )* ;
comparison     → term ( ( ">" | ">=" | "<" | "<=" ) term )* ;
term           → factor ( ( "-" | "+" ) factor )* ;
factor         → unary ( ( "/" | "*" ) unary )* ;
unary          → ( "!" | "-" ) unary | call ;
call           → primary ( "(" arguments? ")" | "." IDENT )* ;
arguments      → expression ( "," expression )* ;
primary        → NUMBER | STRING | "true" | "false" | "nil"
               | IDENT | "(" expression ")" ;
```

`for` has no node of its own: it is rewritten into a block holding the
initializer and a `while` whose body is the original body followed by the
increment.
*/

use std::rc::Rc;

use crate::ast::{Expr, ExprId, ExprKind, FunctionDecl, Stmt};
use crate::error::{LoxError, Reporter};
use crate::token::{Literal, Token, TokenType};

use log::{debug, info};

/// Upper bound on arguments in a call and parameters in a declaration.
pub const MAX_ARGS: usize = 255;

/// Marker raised when a production cannot continue.  The diagnostic has
/// already been reported by the time this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseError;

type ParseResult<T> = std::result::Result<T, ParseError>;

/// Top‑level parser over an owned token buffer.
pub struct Parser<'r> {
    tokens: Vec<Token>,
    current: usize,
    next_id: usize,
    reporter: &'r mut dyn Reporter,
    had_error: bool,
}

impl<'r> Parser<'r> {
    /// Construct a new parser.  Expression ids start at zero.
    pub fn new(tokens: Vec<Token>, reporter: &'r mut dyn Reporter) -> Self {
        Self::with_first_id(tokens, 0, reporter)
    }

    /// Construct a parser whose expression ids start at `first_id`.  Used when
    /// several programs share one interpreter (the REPL), so ids never clash.
    pub fn with_first_id(
        mut tokens: Vec<Token>,
        first_id: usize,
        reporter: &'r mut dyn Reporter,
    ) -> Self {
        info!("Parser created with {} tokens", tokens.len());

        if tokens.last().map(|t| &t.token_type) != Some(&TokenType::EOF) {
            let line = tokens.last().map_or(1, |t| t.line);
            tokens.push(Token::new(TokenType::EOF, "", line));
        }

        Self {
            tokens,
            current: 0,
            next_id: first_id,
            reporter,
            had_error: false,
        }
    }

    // ───────────────────────── public API ─────────────────────────

    /// Parse an entire program.  Statements that failed to parse are left out;
    /// check [`had_error`](Self::had_error) afterwards.
    pub fn parse(&mut self) -> Vec<Stmt> {
        info!("Beginning parse phase");

        let mut statements: Vec<Stmt> = Vec::new();

        while !self.is_at_end() {
            if let Some(stmt) = self.declaration() {
                statements.push(stmt);
            }
        }

        info!(
            "Parse phase finished: {} statement(s), errors={}",
            statements.len(),
            self.had_error
        );

        statements
    }

    /// Whether any syntax error was reported.
    pub fn had_error(&self) -> bool {
        self.had_error
    }

    /// The id the next expression node would receive.
    pub fn next_id(&self) -> usize {
        self.next_id
    }

    // ──────────────────────── declaration rules ───────────────────

    fn declaration(&mut self) -> Option<Stmt> {
        debug!("Entering declaration at line {}", self.peek().line);

        let result = if self.matches(TokenType::CLASS) {
            self.class_declaration()
        } else if self.matches(TokenType::FUN) {
            self.function("function").map(Stmt::Function)
        } else if self.matches(TokenType::VAR) {
            self.var_declaration()
        } else {
            self.statement()
        };

        match result {
            Ok(stmt) => Some(stmt),
            Err(ParseError) => {
                self.synchronize();
                None
            }
        }
    }

    fn class_declaration(&mut self) -> ParseResult<Stmt> {
        let name: Token = self.consume(TokenType::IDENTIFIER, "Expect class name.")?;

        self.consume(TokenType::LEFT_BRACE, "Expect '{' before class body.")?;

        let mut methods: Vec<Rc<FunctionDecl>> = Vec::new();

        while !self.check(TokenType::RIGHT_BRACE) && !self.is_at_end() {
            methods.push(self.function("method")?);
        }

        self.consume(TokenType::RIGHT_BRACE, "Expect '}' after class body.")?;

        debug!("Parsed class '{}' with {} method(s)", name.lexeme, methods.len());

        Ok(Stmt::Class { name, methods })
    }

    /// `kind` is "function" or "method"; it only shapes error messages.
    fn function(&mut self, kind: &str) -> ParseResult<Rc<FunctionDecl>> {
        let name: Token = self.consume(TokenType::IDENTIFIER, &format!("Expect {} name.", kind))?;

        self.consume(
            TokenType::LEFT_PAREN,
            &format!("Expect '(' after {} name.", kind),
        )?;

        let mut params: Vec<Token> = Vec::new();

        if !self.check(TokenType::RIGHT_PAREN) {
            loop {
                if params.len() >= MAX_ARGS {
                    self.error(self.current, "Can't have more than 255 parameters.");
                }

                params.push(self.consume(TokenType::IDENTIFIER, "Expect parameter name.")?);

                if !self.matches(TokenType::COMMA) {
                    break;
                }
            }
        }

        self.consume(TokenType::RIGHT_PAREN, "Expect ')' after parameters.")?;

        self.consume(
            TokenType::LEFT_BRACE,
            &format!("Expect '{{' before {} body.", kind),
        )?;

        let body: Vec<Stmt> = self.block()?;

        Ok(Rc::new(FunctionDecl { name, params, body }))
    }

    fn var_declaration(&mut self) -> ParseResult<Stmt> {
        let name: Token = self.consume(TokenType::IDENTIFIER, "Expect variable name.")?;

        let initializer: Option<Expr> = if self.matches(TokenType::EQUAL) {
            Some(self.expression()?)
        } else {
            None
        };

        self.consume(
            TokenType::SEMICOLON,
            "Expect ';' after variable declaration.",
        )?;

        Ok(Stmt::Var { name, initializer })
    }

    // ───────────────────────── statement rules ────────────────────

    fn statement(&mut self) -> ParseResult<Stmt> {
        if self.matches(TokenType::FOR) {
            self.for_statement()
        } else if self.matches(TokenType::IF) {
            self.if_statement()
        } else if self.matches(TokenType::WHILE) {
            self.while_statement()
        } else if self.matches(TokenType::RETURN) {
            self.return_statement()
        } else if self.matches(TokenType::LEFT_BRACE) {
            Ok(Stmt::Block(self.block()?))
        } else if self.matches(TokenType::PRINT) {
            self.print_statement()
        } else {
            self.expression_statement()
        }
    }

    /// Desugars `for (init; cond; incr) body` into
    /// `{ init; while (cond) { body; incr; } }`.
    fn for_statement(&mut self) -> ParseResult<Stmt> {
        debug!("Parsing for loop at line {}", self.previous().line);

        self.consume(TokenType::LEFT_PAREN, "Expect '(' after 'for'.")?;

        let initializer: Option<Stmt> = if self.matches(TokenType::SEMICOLON) {
            None
        } else if self.matches(TokenType::VAR) {
            Some(self.var_declaration()?)
        } else {
            Some(self.expression_statement()?)
        };

        let condition: Option<Expr> = if !self.check(TokenType::SEMICOLON) {
            Some(self.expression()?)
        } else {
            None
        };
        self.consume(TokenType::SEMICOLON, "Expect ';' after loop condition.")?;

        let increment: Option<Expr> = if !self.check(TokenType::RIGHT_PAREN) {
            Some(self.expression()?)
        } else {
            None
        };
        self.consume(TokenType::RIGHT_PAREN, "Expect ')' after for clauses.")?;

        let body: Stmt = self.statement()?;

        let mut inner: Vec<Stmt> = vec![body];
        if let Some(increment) = increment {
            inner.push(Stmt::Expression(increment));
        }

        let condition: Expr = match condition {
            Some(condition) => condition,
            None => self.make_expr(ExprKind::Literal(Literal::Bool(true))),
        };

        let mut outer: Vec<Stmt> = Vec::with_capacity(2);
        if let Some(initializer) = initializer {
            outer.push(initializer);
        }
        outer.push(Stmt::While {
            condition,
            body: Box::new(Stmt::Block(inner)),
        });

        Ok(Stmt::Block(outer))
    }

    fn print_statement(&mut self) -> ParseResult<Stmt> {
        let value: Expr = self.expression()?;

        self.consume(TokenType::SEMICOLON, "Expect ';' after value.")?;

        Ok(Stmt::Print(value))
    }

    fn expression_statement(&mut self) -> ParseResult<Stmt> {
        let expr: Expr = self.expression()?;
        self.consume(TokenType::SEMICOLON, "Expect ';' after expression.")?;
        Ok(Stmt::Expression(expr))
    }

    fn if_statement(&mut self) -> ParseResult<Stmt> {
        self.consume(TokenType::LEFT_PAREN, "Expect '(' after 'if'.")?;
        let condition: Expr = self.expression()?;
        self.consume(TokenType::RIGHT_PAREN, "Expect ')' after if condition.")?;

        let then_branch: Box<Stmt> = Box::new(self.statement()?);
        let else_branch: Option<Box<Stmt>> = if self.matches(TokenType::ELSE) {
            Some(Box::new(self.statement()?))
        } else {
            None
        };

        Ok(Stmt::If {
            condition,
            then_branch,
            else_branch,
        })
    }

    fn while_statement(&mut self) -> ParseResult<Stmt> {
        self.consume(TokenType::LEFT_PAREN, "Expect '(' after 'while'.")?;
        let condition: Expr = self.expression()?;
        self.consume(TokenType::RIGHT_PAREN, "Expect ')' after condition.")?;
        let body: Box<Stmt> = Box::new(self.statement()?);

        Ok(Stmt::While { condition, body })
    }

    fn return_statement(&mut self) -> ParseResult<Stmt> {
        let keyword: Token = self.previous().clone();
        let value: Option<Expr> = if !self.check(TokenType::SEMICOLON) {
            Some(self.expression()?)
        } else {
            None
        };

        self.consume(TokenType::SEMICOLON, "Expect ';' after return value.")?;
        Ok(Stmt::Return { keyword, value })
    }

    /// Body of a `{ … }` after the opening brace has been consumed.
    fn block(&mut self) -> ParseResult<Vec<Stmt>> {
        let mut statements: Vec<Stmt> = Vec::new();

        while !self.check(TokenType::RIGHT_BRACE) && !self.is_at_end() {
            if let Some(stmt) = self.declaration() {
                statements.push(stmt);
            }
        }

        self.consume(TokenType::RIGHT_BRACE, "Expect '}' after block.")?;
        Ok(statements)
    }

    // ─────────────────────── expression rules ─────────────────────

    fn expression(&mut self) -> ParseResult<Expr> {
        self.assignment()
    }

    fn assignment(&mut self) -> ParseResult<Expr> {
        let expr: Expr = self.logical_or()?;

        if self.matches(TokenType::EQUAL) {
            let equals: usize = self.current - 1;
            let value: Expr = self.assignment()?;

            return Ok(match expr.kind {
                ExprKind::Variable(name) => self.make_expr(ExprKind::Assign {
                    name,
                    value: Box::new(value),
                }),

                ExprKind::Get { object, name } => self.make_expr(ExprKind::Set {
                    object,
                    name,
                    value: Box::new(value),
                }),

                kind => {
                    // Reported, but the parser is not confused: keep going.
                    self.error(equals, "Invalid assignment target.");
                    Expr { id: expr.id, kind }
                }
            });
        }

        Ok(expr)
    }

    fn logical_or(&mut self) -> ParseResult<Expr> {
        let mut expr: Expr = self.logical_and()?;

        while self.matches(TokenType::OR) {
            let operator: Token = self.previous().clone();
            let right: Expr = self.logical_and()?;

            expr = self.make_expr(ExprKind::Logical {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            });
        }

        Ok(expr)
    }

    fn logical_and(&mut self) -> ParseResult<Expr> {
        let mut expr: Expr = self.equality()?;

        while self.matches(TokenType::AND) {
            let operator: Token = self.previous().clone();
            let right: Expr = self.equality()?;

            expr = self.make_expr(ExprKind::Logical {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            });
        }

        Ok(expr)
    }

    /// Shared loop for the left‑associative binary levels.
    fn binary_level(
        &mut self,
        operators: &[TokenType],
        operand: fn(&mut Self) -> ParseResult<Expr>,
    ) -> ParseResult<Expr> {
        let mut expr: Expr = operand(self)?;

        while operators.iter().any(|op| self.check(op.clone())) {
            self.advance();
            let operator: Token = self.previous().clone();
            let right: Expr = operand(self)?;

            expr = self.make_expr(ExprKind::Binary {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            });
        }

        Ok(expr)
    }

    fn equality(&mut self) -> ParseResult<Expr> {
        self.binary_level(
            &[TokenType::BANG_EQUAL, TokenType::EQUAL_EQUAL],
            Self::comparison,
        )
    }

    fn comparison(&mut self) -> ParseResult<Expr> {
        self.binary_level(
            &[
                TokenType::GREATER,
                TokenType::GREATER_EQUAL,
                TokenType::LESS,
                TokenType::LESS_EQUAL,
            ],
            Self::term,
        )
    }

    fn term(&mut self) -> ParseResult<Expr> {
        self.binary_level(&[TokenType::MINUS, TokenType::PLUS], Self::factor)
    }

    fn factor(&mut self) -> ParseResult<Expr> {
        self.binary_level(&[TokenType::STAR, TokenType::SLASH], Self::unary)
    }

    fn unary(&mut self) -> ParseResult<Expr> {
        if self.matches(TokenType::BANG) || self.matches(TokenType::MINUS) {
            let operator: Token = self.previous().clone();
            let right: Expr = self.unary()?;
            return Ok(self.make_expr(ExprKind::Unary {
                operator,
                right: Box::new(right),
            }));
        }

        self.call()
    }

    fn call(&mut self) -> ParseResult<Expr> {
        let mut expr: Expr = self.primary()?;

        loop {
            if self.matches(TokenType::LEFT_PAREN) {
                expr = self.finish_call(expr)?;
            } else if self.matches(TokenType::DOT) {
                let name: Token =
                    self.consume(TokenType::IDENTIFIER, "Expect property name after '.'.")?;

                expr = self.make_expr(ExprKind::Get {
                    object: Box::new(expr),
                    name,
                });
            } else {
                break;
            }
        }

        Ok(expr)
    }

    fn finish_call(&mut self, callee: Expr) -> ParseResult<Expr> {
        let mut arguments: Vec<Expr> = Vec::new();

        if !self.check(TokenType::RIGHT_PAREN) {
            loop {
                if arguments.len() >= MAX_ARGS {
                    self.error(self.current, "Can't have more than 255 arguments.");
                }

                arguments.push(self.expression()?);

                if !self.matches(TokenType::COMMA) {
                    break;
                }
            }
        }

        let paren: Token = self.consume(TokenType::RIGHT_PAREN, "Expect ')' after arguments.")?;

        Ok(self.make_expr(ExprKind::Call {
            callee: Box::new(callee),
            paren,
            arguments,
        }))
    }

    fn primary(&mut self) -> ParseResult<Expr> {
        if self.matches(TokenType::FALSE)
            || self.matches(TokenType::TRUE)
            || self.matches(TokenType::NIL)
            || self.matches(TokenType::NUMBER(0.0))
            || self.matches(TokenType::STRING(String::new()))
        {
            let literal: Literal = self.previous().literal();
            return Ok(self.make_expr(ExprKind::Literal(literal)));
        }

        if self.matches(TokenType::IDENTIFIER) {
            let name: Token = self.previous().clone();
            return Ok(self.make_expr(ExprKind::Variable(name)));
        }

        if self.matches(TokenType::LEFT_PAREN) {
            let expr: Expr = self.expression()?;

            self.consume(TokenType::RIGHT_PAREN, "Expect ')' after expression.")?;

            return Ok(self.make_expr(ExprKind::Grouping(Box::new(expr))));
        }

        Err(self.error(self.current, "Expect expression."))
    }

    // ────────────────────── utility helpers ───────────────────────

    fn make_expr(&mut self, kind: ExprKind) -> Expr {
        let id = ExprId(self.next_id);
        self.next_id += 1;

        Expr { id, kind }
    }

    /// Report `message` at the token with index `at`.
    fn error(&mut self, at: usize, message: &str) -> ParseError {
        let err: LoxError = LoxError::parse(&self.tokens[at], message);

        debug!("Parse error: {}", err);

        self.had_error = true;
        self.reporter.report(err);

        ParseError
    }

    #[inline(always)]
    fn matches(&mut self, ttype: TokenType) -> bool {
        if self.check(ttype) {
            self.advance();

            return true;
        }

        false
    }

    #[inline(always)]
    fn consume(&mut self, ttype: TokenType, message: &str) -> ParseResult<Token> {
        if self.check(ttype) {
            return Ok(self.advance().clone());
        }

        Err(self.error(self.current, message))
    }

    #[inline(always)]
    fn check(&self, ttype: TokenType) -> bool {
        if self.is_at_end() {
            return false;
        }

        self.peek().token_type == ttype
    }

    #[inline(always)]
    fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.current += 1;
        }

        self.previous()
    }

    #[inline(always)]
    fn is_at_end(&self) -> bool {
        matches!(self.peek().token_type, TokenType::EOF)
    }

    #[inline(always)]
    fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    #[inline(always)]
    fn previous(&self) -> &Token {
        &self.tokens[self.current.saturating_sub(1)]
    }

    /// Discards tokens until it thinks it is at a statement boundary.
    fn synchronize(&mut self) {
        self.advance(); // skip the token that caused the error

        while !self.is_at_end() {
            if matches!(self.previous().token_type, TokenType::SEMICOLON) {
                return;
            }

            match self.peek().token_type {
                TokenType::CLASS
                | TokenType::FUN
                | TokenType::VAR
                | TokenType::FOR
                | TokenType::IF
                | TokenType::WHILE
                | TokenType::PRINT
                | TokenType::RETURN => return,
                _ => {}
            }

            self.advance();
        }
    }
}
