//! Error kinds reported by the query handlers.
//!
//! The message of each kind is what the user sees after `Error: ` in a response, so messages
//! that are followed by help text end with a period.

use ariadne::Fmt;
use wordcalc_attrs::ErrorKind;
use wordcalc_error::EXPR;

pub use wordcalc_error::Error;

/// An equation did not contain exactly one `=`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "Invalid format",
    labels = [format!("an equation needs exactly one {}", "=".fg(EXPR))],
)]
pub struct InvalidFormat;

/// One side of an equation could not be read as a polynomial in `x` of degree at most 2.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "Invalid equation format.",
    labels = [reason.clone()],
)]
pub struct InvalidEquation {
    /// What the term parser found wrong, shown as the label of the report.
    pub reason: String,
}

/// Fewer numbers were found in the query than the operation needs.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("Need at least {} numbers.", needed),
    help = format!("Only {} number(s) could be found in the question.", found),
)]
pub struct InsufficientOperands {
    /// The number of operands the operation needs.
    pub needed: usize,

    /// The number of operands that were found.
    pub found: usize,
}

/// A division by zero was attempted.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "Division by zero",
    labels = ["this divisor is zero"],
)]
pub struct DivisionByZero;

/// The query asked for a derivative or integral outside of the known templates.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("Unsupported {} form.", operation),
    labels = ["this expression is not one of the known forms"],
    help = format!("Try one of: {}.", examples),
)]
pub struct UnsupportedForm {
    /// The operation that was requested, such as `integral`.
    pub operation: &'static str,

    /// Example queries of the supported forms.
    pub examples: &'static str,
}

/// No intent could be recognized in the query.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "Sorry, I don't recognize that command.",
    help = if suggestions.is_empty() {
        r#"Try something like "solve 2x + 4 = 10", "mean of 4, 6, 9", or "∫x^2 dx"."#.to_string()
    } else {
        format!(
            "Did you mean {}?",
            suggestions.iter()
                .map(|s| format!("\"{}\"", s))
                .collect::<Vec<_>>()
                .join(" or "),
        )
    },
)]
pub struct UnknownIntent {
    /// Known keywords that are spelled similarly to words of the query.
    pub suggestions: Vec<String>,
}

/// A statistic was requested of an empty list of numbers.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "No numbers found.",
    help = r#"List the values after the statistic, as in "median of 3, 1, 2"."#,
)]
pub struct NoData;

/// A sample statistic was requested of too few numbers.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("At least {} values are needed for the sample {}.", needed, statistic),
)]
pub struct InsufficientData {
    /// The name of the statistic.
    pub statistic: &'static str,

    /// The minimum number of values.
    pub needed: usize,
}

/// The arguments of a combination or permutation do not satisfy `0 <= k <= n`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "Invalid range.",
    help = format!("k must be a whole number from 0 to n, but n = {} and k = {}.", n, k),
)]
pub struct InvalidRange {
    /// The size of the set.
    pub n: f64,

    /// The number of items chosen.
    pub k: f64,
}

/// A combination or permutation was asked of a set too large to count.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "Too many items to count.",
    help = format!("n can be at most {}, but it is {}.", limit, n),
)]
pub struct TooManyItems {
    /// The size of the set.
    pub n: f64,

    /// The largest size that is counted.
    pub limit: u32,
}

/// A definite integral crosses a point where its antiderivative is undefined.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "The integral diverges on this interval.",
    labels = ["these bounds"],
    help = format!("{} is undefined at x = 0, which lies between the bounds.", antiderivative),
)]
pub struct DivergentIntegral {
    /// The antiderivative that was evaluated.
    pub antiderivative: String,
}

/// A variable other than `x`, `e`, or `pi` was used in an expression.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not defined.", name),
    labels = ["this variable"],
    help = format!("Only {}, {}, and {} can be used in expressions.", "x".fg(EXPR), "e".fg(EXPR), "pi".fg(EXPR)),
)]
pub struct UndefinedVariable {
    /// The name of the variable.
    pub name: String,
}

/// An unknown function was called in an expression.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("The `{}` function does not exist.", name),
    labels = ["this function"],
    help = if suggestions.is_empty() {
        "Available functions are sin, cos, tan, ln, log, sqrt, abs, and exp.".to_string()
    } else {
        format!(
            "Did you mean {}?",
            suggestions.iter()
                .map(|s| format!("`{}`", s))
                .collect::<Vec<_>>()
                .join(" or "),
        )
    },
)]
pub struct UndefinedFunction {
    /// The name of the function.
    pub name: String,

    /// Similarly named functions, if any.
    pub suggestions: Vec<String>,
}

/// A builtin function was called with the wrong number of arguments.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("The `{}` function takes exactly one argument.", name),
    labels = ["this function call"],
    help = format!("{} argument(s) were given.", given),
)]
pub struct ArgumentCount {
    /// The name of the function.
    pub name: String,

    /// The number of arguments that were given.
    pub given: usize,
}

/// A function was applied outside of its domain, such as the logarithm of a negative number.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("{} is undefined for {}.", function, value),
    labels = ["this argument"],
    help = format!("The argument must be {}.", domain),
)]
pub struct OutOfDomain {
    /// The name of the function.
    pub function: String,

    /// The argument the function was applied to.
    pub value: f64,

    /// A description of the valid arguments, such as `positive`.
    pub domain: &'static str,
}

/// A number contained digits that are not valid in its base.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("Invalid number for base {}.", base),
    labels = ["this number"],
    help = format!("`{}` is not written in base {}.", digits, base),
)]
pub struct InvalidDigits {
    /// The digits as written.
    pub digits: String,

    /// The base the digits were read in.
    pub base: u32,
}

/// A base outside of `2..=36` was requested.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("Unsupported base {}.", base),
    labels = ["this base"],
    help = "Bases from 2 to 36 are supported.",
)]
pub struct UnsupportedBase {
    /// The requested base.
    pub base: u32,
}

/// A computation produced an infinite or undefined value.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "The result is not a finite number.",
    labels = ["this expression"],
)]
pub struct NonFiniteValue;

/// The dimensions of a shape cannot describe a real shape.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "Invalid dimensions.",
    help = reason,
)]
pub struct InvalidDimension {
    /// Why the dimensions are invalid.
    pub reason: &'static str,
}

/// The query named an operation, but its operands could not be found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("Could not parse {} query.", operation),
    help = format!("Try \"{}\".", example),
)]
pub struct UnparsedQuery {
    /// The operation the query asked for.
    pub operation: &'static str,

    /// An example query of the expected shape.
    pub example: &'static str,
}
