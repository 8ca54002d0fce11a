use std::cell::RefCell;
use std::collections::HashMap;
use std::io::{self, Write};
use std::rc::Rc;

use log::{debug, info};

use crate::ast::{Expr, ExprId, ExprKind, Stmt};
use crate::callable::{self, Callable, NativeFunction, UserFunction};
use crate::class::Class;
use crate::environment::Environment;
use crate::error::{LoxError, Result};
use crate::token::{Token, TokenType};
use crate::value::Value;

/// Deepest chain of nested calls before a run fails with "Stack overflow.".
pub const MAX_CALL_DEPTH: usize = 1000;

/// How a statement finished.  `Return` travels up through blocks and loops
/// until the enclosing function call turns it into the call's value.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    Normal,
    Return(Value),
}

pub struct Interpreter {
    globals: Rc<RefCell<Environment>>,
    environment: Rc<RefCell<Environment>>,
    /// Binding distances recorded by the resolver.  Absent ⇒ global.
    locals: HashMap<ExprId, usize>,
    call_depth: usize,
    out: Box<dyn Write>,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    /// Creates a new Interpreter printing to stdout.
    pub fn new() -> Self {
        Self::with_output(Box::new(io::stdout()))
    }

    /// Creates a new Interpreter printing to `out` and defines native
    /// functions such as `clock`.
    pub fn with_output(out: Box<dyn Write>) -> Self {
        info!("Initializing Interpreter");

        let globals = Rc::new(RefCell::new(Environment::new()));

        debug!("Defining native function 'clock'");

        globals.borrow_mut().define(
            "clock",
            Value::Callable(Callable::Native(Rc::new(NativeFunction {
                name: "clock",
                arity: 0,
                func: callable::clock,
            }))),
        );

        Self {
            environment: Rc::clone(&globals),
            globals,
            locals: HashMap::new(),
            call_depth: 0,
            out,
        }
    }

    /// Record that the variable expression `id` lives `depth` scopes out.
    pub fn resolve(&mut self, id: ExprId, depth: usize) {
        debug!("Noting {:?} at depth {}", id, depth);

        self.locals.insert(id, depth);
    }

    pub fn resolved_depth(&self, id: ExprId) -> Option<usize> {
        self.locals.get(&id).copied()
    }

    /// Whether `name` is already bound in the global scope.
    pub fn is_global(&self, name: &str) -> bool {
        self.globals.borrow().contains(name)
    }

    /// Interprets a list of statements (a "program").  Stops at the first
    /// runtime error.
    pub fn interpret(&mut self, statements: &[Stmt]) -> Result<()> {
        debug!("Interpreting {} statements", statements.len());

        for stmt in statements {
            self.execute(stmt)?;
        }

        self.out.flush()?;

        info!("Interpretation completed successfully");
        Ok(())
    }

    /// Executes a single statement.
    pub fn execute(&mut self, stmt: &Stmt) -> Result<Flow> {
        match stmt {
            Stmt::Expression(expr) => {
                self.evaluate(expr)?;
                Ok(Flow::Normal)
            }

            Stmt::Print(expr) => {
                let value = self.evaluate(expr)?;
                writeln!(self.out, "{}", value)?;
                debug!("Printed value: {}", value);
                Ok(Flow::Normal)
            }

            Stmt::Var { name, initializer } => {
                let value = match initializer {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Nil,
                };
                debug!("Defining variable '{}' = {}", name.lexeme, value);
                self.environment.borrow_mut().define(&name.lexeme, value);
                Ok(Flow::Normal)
            }

            Stmt::Block(statements) => {
                let env = Environment::with_enclosing(Rc::clone(&self.environment));
                self.execute_block(statements, Rc::new(RefCell::new(env)))
            }

            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                if self.evaluate(condition)?.is_truthy() {
                    self.execute(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.execute(else_branch)
                } else {
                    Ok(Flow::Normal)
                }
            }

            Stmt::While { condition, body } => {
                while self.evaluate(condition)?.is_truthy() {
                    if let Flow::Return(value) = self.execute(body)? {
                        return Ok(Flow::Return(value));
                    }
                }
                Ok(Flow::Normal)
            }

            Stmt::Function(declaration) => {
                debug!("Defining function '{}'", declaration.name.lexeme);
                // The closure is whatever scope is active right now.
                let function = UserFunction::new(Rc::clone(declaration), Rc::clone(&self.environment));
                self.environment.borrow_mut().define(
                    &declaration.name.lexeme,
                    Value::Callable(Callable::Function(Rc::new(function))),
                );
                Ok(Flow::Normal)
            }

            Stmt::Return { value, .. } => {
                let value = match value {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Nil,
                };
                debug!("Returning value: {}", value);
                Ok(Flow::Return(value))
            }

            Stmt::Class { name, methods } => {
                debug!("Defining class '{}'", name.lexeme);

                let methods: HashMap<String, Rc<UserFunction>> = methods
                    .iter()
                    .map(|decl| {
                        let method = UserFunction::new(Rc::clone(decl), Rc::clone(&self.environment));
                        (decl.name.lexeme.clone(), Rc::new(method))
                    })
                    .collect();

                let class = Class::new(name.lexeme.clone(), methods);
                self.environment.borrow_mut().define(
                    &name.lexeme,
                    Value::Callable(Callable::Class(Rc::new(class))),
                );
                Ok(Flow::Normal)
            }
        }
    }

    /// Run `statements` inside `env`, restoring the current environment
    /// afterwards whether or not they succeed.
    pub fn execute_block(
        &mut self,
        statements: &[Stmt],
        env: Rc<RefCell<Environment>>,
    ) -> Result<Flow> {
        let previous = std::mem::replace(&mut self.environment, env);

        let mut result = Ok(Flow::Normal);
        for stmt in statements {
            match self.execute(stmt) {
                Ok(Flow::Normal) => {}
                other => {
                    result = other;
                    break;
                }
            }
        }

        self.environment = previous;
        result
    }

    /// Evaluates an expression and returns a Value.
    pub fn evaluate(&mut self, expr: &Expr) -> Result<Value> {
        let value = match &expr.kind {
            ExprKind::Literal(literal) => Value::from(literal.clone()),

            ExprKind::Grouping(inner) => self.evaluate(inner)?,

            ExprKind::Unary { operator, right } => self.evaluate_unary(operator, right)?,

            ExprKind::Binary {
                left,
                operator,
                right,
            } => self.evaluate_binary(left, operator, right)?,

            ExprKind::Logical {
                left,
                operator,
                right,
            } => {
                let left = self.evaluate(left)?;
                let short_circuit = if operator.token_type == TokenType::OR {
                    left.is_truthy()
                } else {
                    !left.is_truthy()
                };

                if short_circuit {
                    left
                } else {
                    self.evaluate(right)?
                }
            }

            ExprKind::Variable(name) => self.look_up_variable(name, expr.id)?,

            ExprKind::Assign { name, value } => {
                let value = self.evaluate(value)?;
                match self.locals.get(&expr.id) {
                    Some(&distance) => {
                        Environment::assign_at(&self.environment, distance, name, value.clone())?
                    }
                    None => self.globals.borrow_mut().assign(name, value.clone())?,
                }
                value
            }

            ExprKind::Call {
                callee,
                paren,
                arguments,
            } => {
                let callee = self.evaluate(callee)?;

                let mut args: Vec<Value> = Vec::with_capacity(arguments.len());
                for argument in arguments {
                    args.push(self.evaluate(argument)?);
                }

                let Value::Callable(callable) = callee else {
                    return Err(LoxError::runtime(
                        paren,
                        "Can only call functions and classes.",
                    ));
                };

                if args.len() != callable.arity() {
                    return Err(LoxError::runtime(
                        paren,
                        format!(
                            "Expected {} arguments but got {}.",
                            callable.arity(),
                            args.len()
                        ),
                    ));
                }

                if self.call_depth >= MAX_CALL_DEPTH {
                    return Err(LoxError::runtime(paren, "Stack overflow."));
                }

                self.call_depth += 1;
                let result = callable.call(self, args, paren);
                self.call_depth -= 1;

                result?
            }

            ExprKind::Get { object, name } => match self.evaluate(object)? {
                Value::Instance(instance) => {
                    let value = instance.borrow().get(name)?;
                    value
                }
                _ => {
                    return Err(LoxError::runtime(
                        name,
                        "Only instances have properties.",
                    ))
                }
            },

            ExprKind::Set {
                object,
                name,
                value,
            } => {
                let Value::Instance(instance) = self.evaluate(object)? else {
                    return Err(LoxError::runtime(name, "Only instances have fields."));
                };

                let value = self.evaluate(value)?;
                instance.borrow_mut().set(name, value.clone());
                value
            }
        };

        Ok(value)
    }

    fn look_up_variable(&self, name: &Token, id: ExprId) -> Result<Value> {
        match self.locals.get(&id) {
            Some(&distance) => Environment::get_at(&self.environment, distance, name),
            None => self.globals.borrow().get(name),
        }
    }

    fn evaluate_unary(&mut self, op: &Token, right: &Expr) -> Result<Value> {
        let right = self.evaluate(right)?;

        match op.token_type {
            TokenType::MINUS => match right {
                Value::Number(n) => Ok(Value::Number(-n)),
                _ => Err(LoxError::runtime(op, "Operand must be a number.")),
            },
            TokenType::BANG => Ok(Value::Bool(!right.is_truthy())),
            _ => Err(LoxError::runtime(op, "Invalid unary operator.")),
        }
    }

    fn evaluate_binary(&mut self, left: &Expr, op: &Token, right: &Expr) -> Result<Value> {
        let left = self.evaluate(left)?;
        let right = self.evaluate(right)?;

        debug!(
            "Binary '{}' on {} and {}",
            op.lexeme,
            left.type_name(),
            right.type_name()
        );

        match op.token_type {
            TokenType::PLUS => match (left, right) {
                (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
                (Value::String(a), Value::String(b)) => Ok(Value::String(a + &b)),
                _ => Err(LoxError::runtime(
                    op,
                    "Operands must be either two strings or two numbers!",
                )),
            },

            TokenType::EQUAL_EQUAL => Ok(Value::Bool(left == right)),
            TokenType::BANG_EQUAL => Ok(Value::Bool(left != right)),

            _ => {
                let (Value::Number(a), Value::Number(b)) = (left, right) else {
                    return Err(LoxError::runtime(op, "Operands must be numbers."));
                };

                match op.token_type {
                    TokenType::MINUS => Ok(Value::Number(a - b)),
                    TokenType::STAR => Ok(Value::Number(a * b)),
                    TokenType::SLASH => Ok(Value::Number(a / b)),
                    TokenType::GREATER => Ok(Value::Bool(a > b)),
                    TokenType::GREATER_EQUAL => Ok(Value::Bool(a >= b)),
                    TokenType::LESS => Ok(Value::Bool(a < b)),
                    TokenType::LESS_EQUAL => Ok(Value::Bool(a <= b)),
                    _ => Err(LoxError::runtime(op, "Invalid binary operator.")),
                }
            }
        }
    }
}
