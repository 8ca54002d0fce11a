use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::callable::Callable;
use crate::class::Class;
use crate::error::{LoxError, Result};
use crate::token::Token;
use crate::value::Value;

/// An object created by calling a class.  Fields spring into existence on
/// first assignment.
pub struct Instance {
    class: Rc<Class>,
    fields: HashMap<String, Value>,
}

impl Instance {
    pub fn new(class: Rc<Class>) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Instance {
            class,
            fields: HashMap::new(),
        }))
    }

    /// Fields shadow methods.  A method hit yields a freshly bound function.
    pub fn get(&self, name: &Token) -> Result<Value> {
        if let Some(value) = self.fields.get(&name.lexeme) {
            return Ok(value.clone());
        }

        match self.class.find_method(&name.lexeme) {
            Some(method) => Ok(Value::Callable(Callable::Function(method.bind()))),
            None => Err(LoxError::runtime(
                name,
                format!("Undefined property '{}'.", name.lexeme),
            )),
        }
    }

    pub fn set(&mut self, name: &Token, value: Value) {
        self.fields.insert(name.lexeme.clone(), value);
    }
}

impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} instance", self.class.name())
    }
}
