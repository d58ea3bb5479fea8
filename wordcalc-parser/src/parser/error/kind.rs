use ariadne::Fmt;
use wordcalc_attrs::ErrorKind;
use wordcalc_error::EXPR;
use crate::tokenizer::TokenKind;

/// The end of the source code was reached unexpectedly.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of expression",
    labels = [format!("you might need to add another {} here", "term".fg(EXPR))],
)]
pub struct UnexpectedEof;

/// The end of the source code was expected, but something else was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected end of expression",
    labels = [format!("I could not understand the remaining {} here", "expression".fg(EXPR))],
)]
pub struct ExpectedEof;

/// An unexpected token was encountered.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unexpected `{}`", lexeme),
    labels = [format!("expected one of: {}", expected.iter().map(|t| format!("{:?}", t)).collect::<Vec<_>>().join(", "))],
)]
pub struct UnexpectedToken {
    /// The token(s) that were expected.
    pub expected: &'static [TokenKind],

    /// The token that was found.
    pub found: TokenKind,

    /// The text of the token that was found.
    pub lexeme: String,
}

/// Expressions were nested too deeply to parse.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expression is nested too deeply",
    labels = ["nesting stops here"],
    help = format!("Expressions can be nested at most {} levels deep.", limit),
)]
pub struct TooDeep {
    /// The deepest nesting allowed.
    pub limit: usize,
}

/// A parenthesis was not closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed parenthesis",
    labels = ["this parenthesis is not closed"],
    help = if *opening {
        "Add a closing parenthesis `)` somewhere after it."
    } else {
        "Add an opening parenthesis `(` somewhere before it."
    },
)]
pub struct UnclosedParenthesis {
    /// Whether the parenthesis was an opening parenthesis `(`. Otherwise, the parenthesis was a
    /// closing parenthesis `)`.
    pub opening: bool,
}

/// There was no expression inside a pair of parentheses.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing expression inside parenthesis",
    labels = ["add an expression here"],
)]
pub struct EmptyParenthesis;

/// A term of a polynomial used a variable other than `x`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown variable `{}`", name),
    labels = ["only `x` can be used here"],
    help = "Equations must be in the single variable x.",
)]
pub struct UnexpectedVariable {
    /// The name that was found.
    pub name: String,
}

/// A term of a polynomial had an exponent other than 0, 1 or 2.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unsupported power of x: {}", exponent),
    labels = [format!("the exponent must be {}", "0, 1, or 2".fg(EXPR))],
    help = "Only linear and quadratic equations can be solved.",
)]
pub struct UnsupportedDegree {
    /// The exponent as written.
    pub exponent: String,
}

/// A fractional coefficient had a zero denominator.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "Division by zero",
    labels = ["this denominator is zero"],
)]
pub struct ZeroDenominator;
