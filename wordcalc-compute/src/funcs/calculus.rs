//! Derivatives and integrals of a fixed set of forms.
//!
//! This is template matching, not symbolic calculus. The body of the query is parsed into an
//! [`Expr`], and the tree is matched against one of the forms of [`Template`], each a multiple of
//! a single function of `x`:
//!
//! - constants, such as `5`;
//! - powers of `x`, such as `x`, `3x^2`, `1/x`, and `x^-2`;
//! - `e^x` (or `exp(x)`), `sin(x)`, `cos(x)`, and `ln(x)`;
//! - the product `sin(x)cos(x)`, whose integral is `sin^2(x)/2 + C`.
//!
//! `ln(x)` can be differentiated but not integrated.
//!
//! Anything else, including sums of templates, is an [`UnsupportedForm`] error.

use crate::{
    error::{DivergentIntegral, Error, NonFiniteValue, UnsupportedForm},
    fmt::{fmt_num, FormatOptions, Markup},
    fraction::Fraction,
};
use std::f64::consts::E;
use tracing::debug;
use wordcalc_parser::parser::{
    ast::{binary::Binary, expr::Expr, literal::Literal},
    op::{BinOpKind, UnaryOpKind},
    Parser,
};

/// Example queries of supported derivatives.
const DERIVATIVE_EXAMPLES: &str = r#""derivative of x^3", "derivative of sin(x)", "derivative of e^x", "derivative of ln(x)""#;

/// Example queries of supported integrals.
const INTEGRAL_EXAMPLES: &str = r#""∫x^2 dx", "∫1/x dx", "∫sin(x) dx", "∫sin(x)cos(x) dx", "integrate x^2 from 0 to 3""#;

/// A recognized form: a coefficient times a single function of `x`.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Template {
    /// `k`.
    Constant(f64),

    /// `c·x^n`.
    Power { coef: f64, n: f64 },

    /// `c·e^x`.
    Exp(f64),

    /// `c·sin(x)`.
    Sin(f64),

    /// `c·cos(x)`.
    Cos(f64),

    /// `c·ln(x)`.
    Ln(f64),

    /// `c·sin(x)·cos(x)`.
    SinCos(f64),
}

impl Template {
    /// Multiplies the template by a constant.
    fn scale(self, k: f64) -> Self {
        match self {
            Self::Constant(c) => Self::Constant(c * k),
            Self::Power { coef, n } => Self::Power { coef: coef * k, n },
            Self::Exp(c) => Self::Exp(c * k),
            Self::Sin(c) => Self::Sin(c * k),
            Self::Cos(c) => Self::Cos(c * k),
            Self::Ln(c) => Self::Ln(c * k),
            Self::SinCos(c) => Self::SinCos(c * k),
        }
    }

    /// Multiplies two templates, if the product is also a template.
    fn mul(self, other: Self) -> Option<Self> {
        use Template::*;
        match (self, other) {
            (Constant(k), t) | (t, Constant(k)) => Some(t.scale(k)),
            (Power { coef: c1, n: n1 }, Power { coef: c2, n: n2 }) => {
                Some(Power { coef: c1 * c2, n: n1 + n2 })
            },
            (Sin(c1), Cos(c2)) | (Cos(c1), Sin(c2)) => Some(SinCos(c1 * c2)),
            _ => None,
        }
    }

    /// Matches an expression against the templates.
    fn recognize(expr: &Expr) -> Option<Self> {
        if let Some(value) = expr.as_number() {
            return Some(Self::Constant(value));
        }

        match expr.innermost() {
            Expr::Literal(Literal::Symbol(sym)) if sym.name == "x" => Some(Self::Power { coef: 1.0, n: 1.0 }),
            Expr::Literal(_) => None,
            Expr::Paren(_) => None,
            Expr::Call(call) => {
                let arg = call.single_arg()?;
                if !arg.is_symbol("x") {
                    return None;
                }
                match call.name.name.as_str() {
                    "sin" => Some(Self::Sin(1.0)),
                    "cos" => Some(Self::Cos(1.0)),
                    "ln" => Some(Self::Ln(1.0)),
                    "exp" => Some(Self::Exp(1.0)),
                    _ => None,
                }
            },
            Expr::Unary(unary) => match unary.op.kind {
                UnaryOpKind::Neg => Self::recognize(&unary.operand).map(|t| t.scale(-1.0)),
            },
            Expr::Binary(binary) => Self::recognize_binary(binary),
        }
    }

    fn recognize_binary(binary: &Binary) -> Option<Self> {
        match binary.op.kind {
            BinOpKind::Exp => {
                if binary.lhs.is_symbol("x") {
                    binary.rhs.as_number().map(|n| Self::Power { coef: 1.0, n })
                } else if binary.lhs.is_symbol("e") && binary.rhs.is_symbol("x") {
                    Some(Self::Exp(1.0))
                } else {
                    None
                }
            },
            BinOpKind::Mul => Self::recognize(&binary.lhs)?.mul(Self::recognize(&binary.rhs)?),
            BinOpKind::Div => match Self::recognize(&binary.rhs)? {
                Self::Constant(k) if k != 0.0 => Self::recognize(&binary.lhs).map(|t| t.scale(1.0 / k)),
                Self::Power { coef, n } if coef != 0.0 => match Self::recognize(&binary.lhs)? {
                    Self::Constant(k) => Some(Self::Power { coef: k / coef, n: -n }),
                    Self::Power { coef: c, n: m } => Some(Self::Power { coef: c / coef, n: m - n }),
                    _ => None,
                },
                _ => None,
            },
            BinOpKind::Add | BinOpKind::Sub => None,
        }
    }
}

/// Renders the coefficient in front of a term: nothing for 1, a sign for -1.
fn prefix(coef: f64) -> String {
    if coef == 1.0 {
        String::new()
    } else if coef == -1.0 {
        "-".to_string()
    } else {
        fmt_num(coef)
    }
}

/// Renders `x^n`. `n` must not be zero.
fn power(n: f64) -> String {
    if n == 1.0 {
        "x".to_string()
    } else if n > 0.0 && n.fract() == 0.0 {
        format!("x^{}", fmt_num(n))
    } else {
        format!("x^({})", fmt_num(n))
    }
}

/// Renders the fraction `c · term`, putting the denominator of `c` under the term.
fn over(c: &Fraction, term: &str, markup: Markup) -> String {
    let numer = c.numer.to_f64();
    if c.is_integer() {
        format!("{}{}", prefix(numer), term)
    } else {
        markup.fraction(&format!("{}{}", prefix(numer), term), &c.denom.to_string())
    }
}

/// Removes the trailing `dx` of an integrand, and any whitespace after the integrand.
pub fn strip_differential(body: &str) -> &str {
    let trimmed = body.trim_end();
    trimmed.strip_suffix("dx")
        .or_else(|| trimmed.strip_suffix("d x"))
        .unwrap_or(trimmed)
        .trim_end()
}

/// Parses the body of a calculus query, dropping a trailing `dx`.
fn parse_body(body: &str, operation: &'static str, examples: &'static str) -> Result<Template, Error> {
    let trimmed = strip_differential(body);
    let leading = trimmed.len() - trimmed.trim_start().len();
    let unsupported = || Error::new(vec![leading..trimmed.len()], UnsupportedForm { operation, examples });

    let expr = Parser::new(trimmed).try_parse_full::<Expr>().map_err(|_| unsupported())?;
    let template = Template::recognize(&expr).ok_or_else(unsupported)?;
    debug!(?template, operation, "matched calculus template");
    Ok(template)
}

/// Differentiates one of the supported forms with respect to `x`.
///
/// The expression may be written with implicit multiplication and an optional coefficient, as in
/// `3x^2` or `-2sin(x)`.
pub fn derivative(expr: &str) -> Result<String, Error> {
    let template = parse_body(expr, "derivative", DERIVATIVE_EXAMPLES)?;
    Ok(match template {
        Template::Constant(_) => "0".to_string(),
        Template::Power { n, .. } if n == 0.0 => "0".to_string(),
        Template::Power { coef, n } if n == 1.0 => fmt_num(coef),
        Template::Power { coef, n } => format!("{}{}", prefix(coef * n), power(n - 1.0)),
        Template::Exp(c) => format!("{}e^x", prefix(c)),
        Template::Sin(c) => format!("{}cos(x)", prefix(c)),
        Template::Cos(c) => format!("{}sin(x)", prefix(-c)),
        Template::Ln(c) => format!("{}/x", fmt_num(c)),
        Template::SinCos(c) if c == 1.0 => "cos^2(x) - sin^2(x)".to_string(),
        Template::SinCos(c) => format!("{}(cos^2(x) - sin^2(x))", prefix(c)),
    })
}

/// An antiderivative of a template, without the constant of integration.
#[derive(Debug, Clone, Copy)]
struct Antiderivative(Template);

impl Antiderivative {
    /// Renders the antiderivative.
    fn render(&self, markup: Markup) -> Result<String, Error> {
        Ok(match self.0 {
            Template::Constant(k) if k == 0.0 => "0".to_string(),
            Template::Constant(k) => format!("{}x", prefix(k)),
            Template::Power { coef, n } if n == -1.0 => format!("{}ln|x|", prefix(coef)),
            Template::Power { coef, n } => over(&Fraction::new(coef, n + 1.0)?, &power(n + 1.0), markup),
            Template::Exp(c) => format!("{}e^x", prefix(c)),
            Template::Sin(c) => format!("{}cos(x)", prefix(-c)),
            Template::Cos(c) => format!("{}sin(x)", prefix(c)),
            Template::SinCos(c) => over(&Fraction::new(c, 2.0)?, "sin^2(x)", markup),
            Template::Ln(_) => return Err(Error::spanless(UnsupportedForm {
                operation: "integral",
                examples: INTEGRAL_EXAMPLES,
            })),
        })
    }

    /// Evaluates the antiderivative at `x`.
    fn at(&self, x: f64) -> f64 {
        match self.0 {
            Template::Constant(k) => k * x,
            Template::Power { coef, n } if n == -1.0 => coef * x.abs().ln(),
            Template::Power { coef, n } => coef * x.powf(n + 1.0) / (n + 1.0),
            Template::Exp(c) => c * E.powf(x),
            Template::Sin(c) => -c * x.cos(),
            Template::Cos(c) => c * x.sin(),
            Template::SinCos(c) => c * x.sin().powi(2) / 2.0,
            Template::Ln(c) => c * (x * x.ln() - x),
        }
    }

    /// Returns true if the integrand is undefined somewhere in the closed interval between the
    /// bounds.
    fn diverges_between(&self, a: f64, b: f64) -> bool {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        matches!(self.0, Template::Power { n, .. } if n < 0.0) && lo <= 0.0 && 0.0 <= hi
    }
}

/// Integrates one of the supported forms with respect to `x`, rendering plain text.
///
/// Without bounds, the antiderivative is returned with the constant of integration, as in
/// `x^3/3 + C`. With bounds `(a, b)`, the definite integral `F(b) - F(a)` is computed.
pub fn integral(expr: &str, bounds: Option<(f64, f64)>) -> Result<String, Error> {
    integral_with(expr, bounds, &FormatOptions::default())
}

/// Integrates one of the supported forms with respect to `x`, using the given formatting options.
pub fn integral_with(
    expr: &str,
    bounds: Option<(f64, f64)>,
    options: &FormatOptions,
) -> Result<String, Error> {
    let template = parse_body(expr, "integral", INTEGRAL_EXAMPLES)?;
    let antiderivative = Antiderivative(template);
    let rendered = antiderivative.render(options.markup)
        .map_err(|err| Error { spans: vec![0..expr.trim_end().len()], ..err })?;

    let Some((a, b)) = bounds else {
        return Ok(if rendered == "0" { "C".to_string() } else { format!("{} + C", rendered) });
    };

    if antiderivative.diverges_between(a, b) {
        return Err(Error::spanless(DivergentIntegral { antiderivative: rendered }));
    }

    let value = antiderivative.at(b) - antiderivative.at(a);
    if !value.is_finite() {
        return Err(Error::spanless(NonFiniteValue));
    }

    Ok(format!(
        "[{}] from {} to {} = {}",
        rendered,
        fmt_num(a),
        fmt_num(b),
        options.fixed(value),
    ))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn power_rule() {
        assert_eq!(derivative("x^3").unwrap(), "3x^2");
        assert_eq!(derivative("x^2").unwrap(), "2x");
        assert_eq!(derivative("4x^2").unwrap(), "8x");
        assert_eq!(derivative("x").unwrap(), "1");
        assert_eq!(derivative("x^1").unwrap(), "1");
        assert_eq!(derivative("x^0").unwrap(), "0");
        assert_eq!(derivative("1/x").unwrap(), "-x^(-2)");
    }

    #[test]
    fn derivative_of_constant() {
        assert_eq!(derivative("7").unwrap(), "0");
        assert_eq!(derivative("-2.5").unwrap(), "0");
    }

    #[test]
    fn derivative_of_functions() {
        assert_eq!(derivative("sin(x)").unwrap(), "cos(x)");
        assert_eq!(derivative("cos(x)").unwrap(), "-sin(x)");
        assert_eq!(derivative("2cos(x)").unwrap(), "-2sin(x)");
        assert_eq!(derivative("e^x").unwrap(), "e^x");
        assert_eq!(derivative("ln(x)").unwrap(), "1/x");
        assert_eq!(derivative("sin(x)cos(x)").unwrap(), "cos^2(x) - sin^2(x)");
    }

    #[test]
    fn indefinite_integrals() {
        assert_eq!(integral("x^2 dx", None).unwrap(), "x^3/3 + C");
        assert_eq!(integral("3x^2 dx", None).unwrap(), "x^3 + C");
        assert_eq!(integral("x dx", None).unwrap(), "x^2/2 + C");
        assert_eq!(integral("1/x dx", None).unwrap(), "ln|x| + C");
        assert_eq!(integral("x^-1 dx", None).unwrap(), "ln|x| + C");
        assert_eq!(integral("e^x dx", None).unwrap(), "e^x + C");
        assert_eq!(integral("sin(x) dx", None).unwrap(), "-cos(x) + C");
        assert_eq!(integral("cos(x) dx", None).unwrap(), "sin(x) + C");
        assert_eq!(integral("5 dx", None).unwrap(), "5x + C");
        assert_eq!(integral("sin(x)cos(x) dx", None).unwrap(), "sin^2(x)/2 + C");
        assert_eq!(integral("cos(x) sin(x) dx", None).unwrap(), "sin^2(x)/2 + C");
    }

    #[test]
    fn latex_antiderivative() {
        let options = FormatOptions { markup: Markup::Latex, ..Default::default() };
        assert_eq!(integral_with("x^2 dx", None, &options).unwrap(), "\\frac{x^3}{3} + C");
    }

    #[test]
    fn definite_integrals() {
        assert_eq!(integral("x^2", Some((0.0, 3.0))).unwrap(), "[x^3/3] from 0 to 3 = 9.00");
        assert_eq!(integral("1/x dx", Some((1.0, E))).unwrap(), format!("[ln|x|] from 1 to {} = 1.00", fmt_num(E)));
        assert_eq!(integral("2 dx", Some((1.0, 4.0))).unwrap(), "[2x] from 1 to 4 = 6.00");
    }

    #[test]
    fn divergent_integral() {
        let err = integral("1/x dx", Some((-1.0, 1.0))).unwrap_err();
        assert!(err.is::<DivergentIntegral>());
        let err = integral("x^-2 dx", Some((0.0, 2.0))).unwrap_err();
        assert!(err.is::<DivergentIntegral>());
    }

    #[test]
    fn unsupported_forms() {
        let err = integral("tan(x) dx", None).unwrap_err();
        assert!(err.is::<UnsupportedForm>());
        assert_eq!(err.spans, vec![0..6]);
        assert!(err.to_string().contains("∫x^2 dx"));

        assert!(integral("dx", None).unwrap_err().is::<UnsupportedForm>());
        assert!(integral("ln(x) dx", None).unwrap_err().is::<UnsupportedForm>());
        assert!(integral("x^2 + 1 dx", None).unwrap_err().is::<UnsupportedForm>());
        assert!(derivative("sin(2x)").unwrap_err().is::<UnsupportedForm>());
        assert!(derivative("y^2").unwrap_err().is::<UnsupportedForm>());
    }
}
