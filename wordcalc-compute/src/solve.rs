//! Solving linear and quadratic equations in `x`.
//!
//! An equation is read as `lhs = rhs`, where each side is parsed into the coefficients of a
//! polynomial of degree at most 2. Subtracting the right side from the left gives the normal form
//! `a·x² + b·x + c = 0`, which is solved exactly: roots are reported as [`Fraction`]s.

use crate::{
    error::{Error, InvalidEquation, InvalidFormat},
    fmt::{FormatOptions, Markup},
    fraction::Fraction,
};
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;
use tracing::debug;
use wordcalc_parser::parser::ast::poly::{parse_terms, Coefficients};

/// Two roots closer than this are reported as a single root.
const ROOT_TOLERANCE: f64 = 1e-9;

/// Coefficients smaller than this in magnitude are treated as zero.
const ZERO_TOLERANCE: f64 = 1e-12;

/// Matches the words around an equation that are not part of it, such as `solve` and `for x`.
static FILLER: Lazy<Regex> = Lazy::new(|| crate::numbers::compile(
    r"^\s*(?:please\s+)?(?:solve|find x|find|what is x)?\s*(?:for\s+x\s*)?(?:if\s+|when\s+)?[:,]?\s*",
));

/// Matches trailing words and punctuation after an equation.
static TRAILING: Lazy<Regex> = Lazy::new(|| crate::numbers::compile(
    r"\s*(?:,?\s*for\s+x)?\s*[?.!]*\s*$",
));

/// The solution set of an equation.
#[derive(Debug, Clone, PartialEq)]
pub enum EquationSolution {
    /// The equation is a contradiction, such as `0 = 1`.
    NoSolution,

    /// The equation is an identity, such as `x = x`.
    InfiniteSolutions,

    /// The equation has a single real root, or a repeated one.
    OneRealRoot(Fraction),

    /// The equation has two distinct real roots.
    TwoRealRoots(Fraction, Fraction),

    /// The equation has the two complex roots `real ± imag·i`.
    TwoComplexRoots {
        /// The real part of both roots.
        real: Fraction,

        /// The magnitude of the imaginary part of both roots. Always positive.
        imag: Fraction,
    },
}

impl EquationSolution {
    /// Renders the solution in the given markup.
    pub fn render(&self, markup: Markup) -> String {
        match self {
            Self::NoSolution => "No solution".to_string(),
            Self::InfiniteSolutions => "Infinite solutions".to_string(),
            Self::OneRealRoot(root) => format!("x = {}", root.render(markup)),
            Self::TwoRealRoots(x1, x2) => {
                format!("x = {} or x = {}", x1.render(markup), x2.render(markup))
            },
            Self::TwoComplexRoots { real, imag } => {
                let imag = if imag.is_integer() || markup == Markup::Latex {
                    imag.render(markup)
                } else {
                    format!("({})", imag.render(markup))
                };
                format!("x = {} {} {}i", real.render(markup), markup.plus_minus(), imag)
            },
        }
    }
}

/// Which solving path to start with. The paths delegate to each other by the degree of the
/// normal form, so both reach the same solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Method {
    Linear,
    Quadratic,
}

/// Removes the words around the equation, returning it and its offset in the query.
fn strip_filler(query: &str) -> (&str, usize) {
    let start = FILLER.find(query).map_or(0, |m| m.end());
    let rest = &query[start..];
    let end = TRAILING.find(rest).map_or(rest.len(), |m| m.start());
    (&rest[..end], start)
}

/// Parses one side of the equation, moving the spans of any error into query coordinates.
fn parse_side(side: &str, offset: usize) -> Result<Coefficients, Error> {
    parse_terms(side).map_err(|err| {
        let span = err.spans.first().cloned().unwrap_or(0..side.len());
        Error::new(vec![shift(span, offset)], InvalidEquation { reason: err.kind.message() })
    })
}

fn shift(span: Range<usize>, by: usize) -> Range<usize> {
    span.start + by..span.end + by
}

/// Parses an equation into its normal form `a·x² + b·x + c = 0`.
pub fn normal_form(query: &str) -> Result<Coefficients, Error> {
    let (equation, offset) = strip_filler(query);
    let mut sides = equation.split('=');
    let (Some(lhs), Some(rhs), None) = (sides.next(), sides.next(), sides.next()) else {
        let spans = equation.match_indices('=')
            .map(|(i, _)| offset + i..offset + i + 1)
            .collect::<Vec<_>>();
        let spans = if spans.is_empty() { vec![offset..offset + equation.len()] } else { spans };
        return Err(Error::new(spans, InvalidFormat));
    };

    let lhs_coefficients = parse_side(lhs, offset)?;
    let rhs_coefficients = parse_side(rhs, offset + lhs.len() + 1)?;
    Ok(lhs_coefficients - rhs_coefficients)
}

fn is_zero(value: f64) -> bool {
    value.abs() < ZERO_TOLERANCE
}

/// Solves `b·x + c = 0`. Delegates to [`quadratic`] if `a` is non-zero.
fn linear(coefficients: Coefficients) -> Result<EquationSolution, Error> {
    let Coefficients { a, b, c } = coefficients;
    if !is_zero(a) {
        return quadratic(coefficients);
    }

    if is_zero(b) {
        return Ok(if is_zero(c) {
            EquationSolution::InfiniteSolutions
        } else {
            EquationSolution::NoSolution
        });
    }

    Ok(EquationSolution::OneRealRoot(Fraction::new(-c, b)?))
}

/// Solves `a·x² + b·x + c = 0`. Delegates to [`linear`] if `a` is zero.
fn quadratic(coefficients: Coefficients) -> Result<EquationSolution, Error> {
    let Coefficients { a, b, c } = coefficients;
    if is_zero(a) {
        return linear(coefficients);
    }

    let discriminant = b * b - 4.0 * a * c;
    debug!(a, b, c, discriminant, "solving quadratic");

    if discriminant >= 0.0 {
        let root = discriminant.sqrt();
        let x1 = (-b + root) / (2.0 * a);
        let x2 = (-b - root) / (2.0 * a);
        if (x1 - x2).abs() < ROOT_TOLERANCE {
            Ok(EquationSolution::OneRealRoot(Fraction::new(-b, 2.0 * a)?))
        } else {
            Ok(EquationSolution::TwoRealRoots(
                Fraction::new(-b + root, 2.0 * a)?,
                Fraction::new(-b - root, 2.0 * a)?,
            ))
        }
    } else {
        Ok(EquationSolution::TwoComplexRoots {
            real: Fraction::new(-b, 2.0 * a)?,
            imag: Fraction::new(discriminant.abs().sqrt(), (2.0 * a).abs())?,
        })
    }
}

fn solve_with(query: &str, method: Method) -> Result<EquationSolution, Error> {
    let coefficients = normal_form(query)?;
    match method {
        Method::Linear => linear(coefficients),
        Method::Quadratic => quadratic(coefficients),
    }
}

/// Solves a linear or quadratic equation, such as `solve 2x + 4 = 10`.
pub fn solve(query: &str) -> Result<EquationSolution, Error> {
    solve_with(query, Method::Quadratic)
}

/// Solves the equation starting from the linear path, rendering the solution or the error as
/// plain text.
pub fn solve_linear(query: &str) -> String {
    render(solve_with(query, Method::Linear), &FormatOptions::default())
}

/// Solves the equation starting from the quadratic path, rendering the solution or the error as
/// plain text.
pub fn solve_quadratic(query: &str) -> String {
    render(solve_with(query, Method::Quadratic), &FormatOptions::default())
}

fn render(solution: Result<EquationSolution, Error>, options: &FormatOptions) -> String {
    match solution {
        Ok(solution) => solution.render(options.markup),
        Err(err) => err.to_string(),
    }
}
