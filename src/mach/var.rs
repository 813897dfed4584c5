use crate::lang::ast::Ident;
use std::collections::HashMap;

/// ## Variable memory
///
/// A variable that was never assigned reads as zero.

#[derive(Debug, Default)]
pub struct Var {
    vars: HashMap<Ident, i64>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.vars.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn fetch(&self, var_name: &str) -> i64 {
        self.vars.get(var_name).copied().unwrap_or(0)
    }

    pub fn store(&mut self, var_name: &Ident, value: i64) {
        match self.vars.get_mut(var_name) {
            Some(var) => *var = value,
            None => {
                self.vars.insert(var_name.clone(), value);
            }
        }
    }
}
