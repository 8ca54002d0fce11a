use crate::error::{LoxError, Result};
use crate::token::Token;
use crate::value::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// One lexical scope at runtime.  Shared by every closure and call frame
/// that captured it, so it lives as long as its last holder.
#[derive(Default)]
pub struct Environment {
    values: HashMap<String, Value>,
    enclosing: Option<Rc<RefCell<Environment>>>,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            values: HashMap::new(),
            enclosing: None,
        }
    }

    pub fn with_enclosing(enclosing: Rc<RefCell<Environment>>) -> Self {
        Environment {
            values: HashMap::new(),
            enclosing: Some(enclosing),
        }
    }

    /// Bind `name` in this scope, replacing any previous binding.
    pub fn define(&mut self, name: &str, value: Value) {
        self.values.insert(name.to_string(), value);
    }

    /// Whether `name` is bound in this scope itself.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Dynamic lookup, walking outwards until the name is found.
    pub fn get(&self, name: &Token) -> Result<Value> {
        if let Some(value) = self.values.get(&name.lexeme) {
            Ok(value.clone())
        } else if let Some(enclosing) = &self.enclosing {
            enclosing.borrow().get(name)
        } else {
            Err(undefined(name))
        }
    }

    pub fn assign(&mut self, name: &Token, value: Value) -> Result<()> {
        if let Some(slot) = self.values.get_mut(&name.lexeme) {
            *slot = value;
            Ok(())
        } else if let Some(enclosing) = &self.enclosing {
            enclosing.borrow_mut().assign(name, value)
        } else {
            Err(undefined(name))
        }
    }

    /// The environment `distance` hops up the chain from `env`, or `None` if
    /// the chain is shorter than that.
    pub fn ancestor(
        env: &Rc<RefCell<Environment>>,
        distance: usize,
    ) -> Option<Rc<RefCell<Environment>>> {
        let mut current: Rc<RefCell<Environment>> = Rc::clone(env);

        for _ in 0..distance {
            let parent = current.borrow().enclosing.clone()?;
            current = parent;
        }

        Some(current)
    }

    /// Like [`ancestor`](Self::ancestor), but a chain too short for a
    /// resolved distance is a runtime error rather than a read from the
    /// wrong scope.
    fn scope_at(
        env: &Rc<RefCell<Environment>>,
        distance: usize,
        name: &Token,
    ) -> Result<Rc<RefCell<Environment>>> {
        Self::ancestor(env, distance).ok_or_else(|| {
            LoxError::runtime(
                name,
                format!("No scope {} levels out for '{}'.", distance, name.lexeme),
            )
        })
    }

    /// Read `name` from exactly the scope `distance` hops away.
    pub fn get_at(env: &Rc<RefCell<Environment>>, distance: usize, name: &Token) -> Result<Value> {
        let target = Self::scope_at(env, distance, name)?;
        let value = target.borrow().values.get(&name.lexeme).cloned();

        value.ok_or_else(|| undefined(name))
    }

    pub fn assign_at(
        env: &Rc<RefCell<Environment>>,
        distance: usize,
        name: &Token,
        value: Value,
    ) -> Result<()> {
        let target = Self::scope_at(env, distance, name)?;
        let mut target = target.borrow_mut();

        match target.values.get_mut(&name.lexeme) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(undefined(name)),
        }
    }
}

fn undefined(name: &Token) -> LoxError {
    LoxError::runtime(name, format!("Undefined variable '{}'.", name.lexeme))
}

#[cfg(test)]
mod tests {
    use super::Environment;
    use crate::token::{Token, TokenType};
    use crate::value::Value;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn ident(name: &str) -> Token {
        Token::new(TokenType::IDENTIFIER, name, 1)
    }

    #[test]
    fn test_define_and_get() {
        let mut env = Environment::new();
        env.define("foo", Value::String("bar".into()));
        env.define("baz", Value::Bool(false));

        assert_eq!(env.get(&ident("foo")).unwrap(), Value::String("bar".into()));
        assert_eq!(env.get(&ident("baz")).unwrap(), Value::Bool(false));
    }

    #[test]
    fn test_error_if_undefined() {
        let mut env = Environment::new();

        let err = env.assign(&ident("foo"), Value::Nil).unwrap_err();
        assert_eq!(err.message(), "Undefined variable 'foo'.");
        assert!(env.get(&ident("foo")).is_err());
    }

    #[test]
    fn test_multi_level() {
        let outer = Rc::new(RefCell::new(Environment::new()));
        outer.borrow_mut().define("foo", Value::String("bar".into()));

        let inner = Rc::new(RefCell::new(Environment::with_enclosing(Rc::clone(&outer))));
        inner.borrow_mut().define("foo", Value::String("foofoo".into()));

        assert_eq!(
            Environment::get_at(&inner, 0, &ident("foo")).unwrap(),
            Value::String("foofoo".into())
        );
        assert_eq!(
            Environment::get_at(&inner, 1, &ident("foo")).unwrap(),
            Value::String("bar".into())
        );

        Environment::assign_at(&inner, 1, &ident("foo"), Value::Bool(false)).unwrap();

        assert_eq!(outer.borrow().get(&ident("foo")).unwrap(), Value::Bool(false));
        assert_eq!(
            inner.borrow().get(&ident("foo")).unwrap(),
            Value::String("foofoo".into())
        );
    }

    #[test]
    fn test_assign_walks_outwards() {
        let outer = Rc::new(RefCell::new(Environment::new()));
        outer.borrow_mut().define("n", Value::Number(1.0));

        let mut inner = Environment::with_enclosing(Rc::clone(&outer));
        inner.assign(&ident("n"), Value::Number(2.0)).unwrap();

        assert_eq!(outer.borrow().get(&ident("n")).unwrap(), Value::Number(2.0));
    }

    #[test]
    fn test_distance_past_the_chain_is_an_error() {
        let outer = Rc::new(RefCell::new(Environment::new()));
        outer.borrow_mut().define("x", Value::Nil);
        let inner = Rc::new(RefCell::new(Environment::with_enclosing(Rc::clone(&outer))));

        assert!(Environment::ancestor(&inner, 1).is_some());
        assert!(Environment::ancestor(&inner, 2).is_none());

        let err = Environment::get_at(&inner, 2, &ident("x")).unwrap_err();
        assert_eq!(err.message(), "No scope 2 levels out for 'x'.");
        assert!(Environment::assign_at(&inner, 2, &ident("x"), Value::Nil).is_err());
    }

    #[test]
    fn test_get_at_does_not_fall_back_to_outer_scopes() {
        let outer = Rc::new(RefCell::new(Environment::new()));
        outer.borrow_mut().define("x", Value::Nil);
        let inner = Rc::new(RefCell::new(Environment::with_enclosing(Rc::clone(&outer))));

        assert!(Environment::get_at(&inner, 0, &ident("x")).is_err());
    }
}
