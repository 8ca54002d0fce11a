use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::callable::Callable;
use crate::instance::Instance;
use crate::token::Literal;

/// A runtime value.
#[derive(Clone)]
pub enum Value {
    Nil,
    Number(f64),
    String(String),
    Bool(bool),
    Callable(Callable),
    Instance(Rc<RefCell<Instance>>),
}

impl Value {
    /// Only `nil` and `false` are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Nil => false,
            Value::Bool(b) => *b,
            _ => true,
        }
    }

    /// Short tag name, used in log lines.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Bool(_) => "boolean",
            Value::Callable(_) => "callable",
            Value::Instance(_) => "instance",
        }
    }
}

impl From<Literal> for Value {
    fn from(literal: Literal) -> Self {
        match literal {
            Literal::Nil => Value::Nil,
            Literal::Number(n) => Value::Number(n),
            Literal::Str(s) => Value::String(s),
            Literal::Bool(b) => Value::Bool(b),
        }
    }
}

impl PartialEq for Value {
    /// Values of different tags are never equal.  Callables and instances
    /// compare by identity.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Callable(a), Value::Callable(b)) => a.same_as(b),
            (Value::Instance(a), Value::Instance(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),

            Value::Number(n) => write!(f, "{}", format_number(*n)),

            Value::String(s) => write!(f, "{}", s),

            Value::Bool(b) => write!(f, "{}", b),

            Value::Callable(c) => write!(f, "{}", c),

            Value::Instance(instance) => write!(f, "{}", instance.borrow()),
        }
    }
}

/// Shortest round‑trip text for `n`.  Decimal exponents below -4 or from 16
/// up switch to `1e+42` / `1e-07` notation; non‑finite values print as
/// `nan`, `inf` and `-inf`.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "nan".to_string();
    }
    if n.is_infinite() {
        return (if n > 0.0 { "inf" } else { "-inf" }).to_string();
    }

    // `{:e}` yields the shortest digits, e.g. "1.5e-7" or "1e42".
    let scientific = format!("{:e}", n);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if !(-4..16).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}e{}{:02}", mantissa, sign, exponent.abs());
    }

    if n.fract() == 0.0 {
        format!("{:.0}", n)
    } else {
        n.to_string()
    }
}

// Environments hold functions that hold environments, so a derived Debug
// could recurse forever.  Print the same shallow form as Display.
impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{:?}", s),
            other => write!(f, "{}", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Value;

    #[test]
    fn test_truthiness() {
        assert!(!Value::Nil.is_truthy());
        assert!(!Value::Bool(false).is_truthy());
        assert!(Value::Bool(true).is_truthy());
        assert!(Value::Number(0.0).is_truthy());
        assert!(Value::String(String::new()).is_truthy());
    }

    #[test]
    fn test_equality_never_crosses_tags() {
        assert_eq!(Value::Nil, Value::Nil);
        assert_ne!(Value::Number(0.0), Value::Bool(false));
        assert_ne!(Value::Nil, Value::Bool(false));
        assert_ne!(Value::String("1".into()), Value::Number(1.0));
        assert_eq!(Value::String("ab".into()), Value::String("ab".into()));
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Number(3.0).to_string(), "3");
        assert_eq!(Value::Number(2.5).to_string(), "2.5");
        assert_eq!(Value::Number(-0.5).to_string(), "-0.5");
        assert_eq!(Value::Nil.to_string(), "nil");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::String("hi".into()).to_string(), "hi");
    }

    #[test]
    fn test_display_large_small_and_non_finite_numbers() {
        assert_eq!(Value::Number(1e21 * 1e21).to_string(), "1e+42");
        assert_eq!(Value::Number(1e16).to_string(), "1e+16");
        assert_eq!(Value::Number(1e15).to_string(), "1000000000000000");
        assert_eq!(Value::Number(123456789.0).to_string(), "123456789");
        assert_eq!(Value::Number(0.0001).to_string(), "0.0001");
        assert_eq!(Value::Number(1.5e-7).to_string(), "1.5e-07");
        assert_eq!(Value::Number(-2.5e20).to_string(), "-2.5e+20");
        assert_eq!(Value::Number(f64::NAN).to_string(), "nan");
        assert_eq!(Value::Number(f64::INFINITY).to_string(), "inf");
        assert_eq!(Value::Number(f64::NEG_INFINITY).to_string(), "-inf");
    }
}
