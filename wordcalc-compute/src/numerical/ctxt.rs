use levenshtein::levenshtein;
use std::{collections::HashMap, f64::consts};
use super::builtin::{self, Builtin};

/// A context to use when evaluating an expression, containing the variables and functions that
/// can be used within the expression.
#[derive(Debug, Clone)]
pub struct Ctxt {
    /// The variables in the context.
    vars: HashMap<String, f64>,

    /// The functions in the context.
    funcs: HashMap<&'static str, Builtin>,
}

impl Default for Ctxt {
    fn default() -> Self {
        Self {
            vars: HashMap::from([
                ("e".to_string(), consts::E),
                ("pi".to_string(), consts::PI),
            ]),
            funcs: builtin::all(),
        }
    }
}

impl Ctxt {
    /// Creates a new empty context.
    ///
    /// The empty context is probably not very useful, as it does not contain any variables or
    /// functions. Consider using the [`Default`] implementation instead.
    pub fn new() -> Ctxt {
        Ctxt {
            vars: HashMap::new(),
            funcs: HashMap::new(),
        }
    }

    /// Returns the default context with `x` bound to the given value.
    pub fn with_x(value: f64) -> Ctxt {
        let mut ctxt = Ctxt::default();
        ctxt.add_var("x", value);
        ctxt
    }

    /// Add a variable to the context.
    pub fn add_var(&mut self, name: &str, value: f64) {
        self.vars.insert(name.to_string(), value);
    }

    /// Get the value of a variable in the context.
    pub fn get_var(&self, name: &str) -> Option<f64> {
        self.vars.get(name).copied()
    }

    /// Get a function in the context.
    pub fn get_func(&self, name: &str) -> Option<&Builtin> {
        self.funcs.get(name)
    }

    /// Returns all functions in the context with a name similar to the given name, sorted by name.
    pub fn get_similar_funcs(&self, name: &str) -> Vec<&'static str> {
        let mut similar = self.funcs
            .keys()
            .filter(|n| levenshtein(n, name) < 2)
            .copied()
            .collect::<Vec<_>>();
        similar.sort_unstable();
        similar
    }
}
