//! Everything that can sit to the left of `(...)`.
//!
//! [`Callable`] is a closed set: host functions, user functions (closures)
//! and classes.  Each variant is reference‑counted so copying a `Value`
//! never copies a function body or a method table.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use log::debug;

use crate::ast::FunctionDecl;
use crate::class::Class;
use crate::environment::Environment;
use crate::error::{LoxError, Result};
use crate::instance::Instance;
use crate::interpreter::{Flow, Interpreter};
use crate::token::Token;
use crate::value::Value;

/// Signature of a host function.  A returned `Err` message becomes a runtime
/// error at the call site.
pub type NativeFn = fn(&[Value]) -> std::result::Result<Value, String>;

#[derive(Clone)]
pub enum Callable {
    Native(Rc<NativeFunction>),
    Function(Rc<UserFunction>),
    Class(Rc<Class>),
}

impl Callable {
    pub fn arity(&self) -> usize {
        match self {
            Callable::Native(native) => native.arity,
            Callable::Function(function) => function.arity(),
            Callable::Class(_) => 0,
        }
    }

    /// Invoke with already evaluated `arguments`.  The caller has checked the
    /// arity; `paren` locates errors raised by host functions.
    pub fn call(
        &self,
        interpreter: &mut Interpreter,
        arguments: Vec<Value>,
        paren: &Token,
    ) -> Result<Value> {
        match self {
            Callable::Native(native) => {
                debug!("Calling native function '{}'", native.name);

                (native.func)(&arguments).map_err(|msg| LoxError::runtime(paren, msg))
            }

            Callable::Function(function) => function.call(interpreter, arguments),

            Callable::Class(class) => {
                debug!("Instantiating class '{}'", class.name());

                Ok(Value::Instance(Instance::new(Rc::clone(class))))
            }
        }
    }

    /// Identity comparison.
    pub fn same_as(&self, other: &Callable) -> bool {
        match (self, other) {
            (Callable::Native(a), Callable::Native(b)) => Rc::ptr_eq(a, b),
            (Callable::Function(a), Callable::Function(b)) => Rc::ptr_eq(a, b),
            (Callable::Class(a), Callable::Class(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Callable::Native(_) => write!(f, "<native fn>"),
            Callable::Function(function) => write!(f, "<fn {}>", function.name()),
            Callable::Class(class) => write!(f, "{}", class.name()),
        }
    }
}

/// A function implemented by the host and installed in the globals.
pub struct NativeFunction {
    pub name: &'static str,
    pub arity: usize,
    pub func: NativeFn,
}

/// `clock()`: milliseconds since the Unix epoch.
pub fn clock(_args: &[Value]) -> std::result::Result<Value, String> {
    let millis: i64 = chrono::Utc::now().timestamp_millis();

    Ok(Value::Number(millis as f64))
}

/// A user‑declared function paired with the environment it was declared in.
#[derive(Clone)]
pub struct UserFunction {
    declaration: Rc<FunctionDecl>,
    closure: Rc<RefCell<Environment>>,
}

impl UserFunction {
    pub fn new(declaration: Rc<FunctionDecl>, closure: Rc<RefCell<Environment>>) -> Self {
        Self {
            declaration,
            closure,
        }
    }

    pub fn name(&self) -> &str {
        &self.declaration.name.lexeme
    }

    pub fn arity(&self) -> usize {
        self.declaration.params.len()
    }

    /// A fresh function value sharing this one's declaration and closure.
    /// Methods are handed out this way on every property lookup.
    pub fn bind(&self) -> Rc<UserFunction> {
        Rc::new(self.clone())
    }

    /// Run the body in a new scope enclosing the closure.  `return` stops at
    /// this boundary; falling off the end yields `nil`.
    pub fn call(&self, interpreter: &mut Interpreter, arguments: Vec<Value>) -> Result<Value> {
        debug!("Calling user-defined function '{}'", self.name());

        let mut environment = Environment::with_enclosing(Rc::clone(&self.closure));

        for (param, argument) in self.declaration.params.iter().zip(arguments) {
            environment.define(&param.lexeme, argument);
        }

        let flow = interpreter.execute_block(
            &self.declaration.body,
            Rc::new(RefCell::new(environment)),
        )?;

        match flow {
            Flow::Return(value) => Ok(value),
            Flow::Normal => Ok(Value::Nil),
        }
    }
}
