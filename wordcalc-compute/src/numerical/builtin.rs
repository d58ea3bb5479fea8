use std::collections::HashMap;

/// The arguments a builtin function accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    /// Every real number.
    Real,

    /// Numbers greater than zero.
    Positive,

    /// Numbers greater than or equal to zero.
    NonNegative,
}

impl Domain {
    /// Returns true if the value is in the domain.
    pub fn contains(self, value: f64) -> bool {
        match self {
            Domain::Real => true,
            Domain::Positive => value > 0.0,
            Domain::NonNegative => value >= 0.0,
        }
    }

    /// Describes the domain, for error messages.
    pub fn describe(self) -> &'static str {
        match self {
            Domain::Real => "a real number",
            Domain::Positive => "positive",
            Domain::NonNegative => "zero or positive",
        }
    }
}

/// A function of one real argument that can be called in an expression.
#[derive(Debug, Clone, Copy)]
pub struct Builtin {
    /// The name of the function.
    pub name: &'static str,

    /// The arguments the function accepts.
    pub domain: Domain,

    func: fn(f64) -> f64,
}

impl Builtin {
    const fn new(name: &'static str, domain: Domain, func: fn(f64) -> f64) -> Self {
        Self { name, domain, func }
    }

    /// Applies the function, returning [`None`] if the argument is outside of its domain.
    pub fn eval(&self, arg: f64) -> Option<f64> {
        self.domain.contains(arg).then(|| (self.func)(arg))
    }
}

/// The builtin functions.
const BUILTINS: &[Builtin] = &[
    Builtin::new("sin", Domain::Real, f64::sin),
    Builtin::new("cos", Domain::Real, f64::cos),
    Builtin::new("tan", Domain::Real, f64::tan),
    Builtin::new("exp", Domain::Real, f64::exp),
    Builtin::new("abs", Domain::Real, f64::abs),
    Builtin::new("ln", Domain::Positive, f64::ln),
    Builtin::new("log", Domain::Positive, f64::log10),
    Builtin::new("lg", Domain::Positive, f64::log10),
    Builtin::new("sqrt", Domain::NonNegative, f64::sqrt),
];

/// Returns all builtin functions by name.
pub fn all() -> HashMap<&'static str, Builtin> {
    BUILTINS.iter().map(|builtin| (builtin.name, *builtin)).collect()
}
