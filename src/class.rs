use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::callable::UserFunction;

/// A class: a name plus its method table.  Every method shares the
/// environment the class was declared in.
pub struct Class {
    name: String,
    methods: HashMap<String, Rc<UserFunction>>,
}

impl Class {
    pub fn new(name: String, methods: HashMap<String, Rc<UserFunction>>) -> Self {
        Self { name, methods }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn find_method(&self, name: &str) -> Option<Rc<UserFunction>> {
        self.methods.get(name).map(Rc::clone)
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
