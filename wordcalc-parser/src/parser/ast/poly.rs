//! Polynomials in `x` of degree at most 2, written as a sum of signed terms.
//!
//! This is the grammar used for each side of an equation:
//!
//! ```text
//! polynomial  = term (('+' | '-') term)*
//! term        = ('+' | '-')? coefficient? ('*'? 'x' ('^' number)?)?
//! coefficient = number ('/' number)?
//! ```
//!
//! A term must have a coefficient, an `x`, or both.

use crate::{
    parser::{
        ast::literal::LitNum,
        error::{kind, Error},
        Parse,
        Parser,
    },
    tokenizer::TokenKind,
};
use std::ops::{Range, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single signed term of a polynomial, such as `-4x` or `1/2x^2`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Term {
    /// The signed coefficient of the term.
    pub coefficient: f64,

    /// The power of `x` in the term: 0, 1, or 2.
    pub degree: u8,

    /// The region of the source code that this term was parsed from, including its sign.
    pub span: Range<usize>,
}

impl Term {
    /// Parses a term. The leading sign is optional for the first term of a polynomial, and
    /// required for every other term.
    fn parse_signed(input: &mut Parser, first: bool) -> Result<Self, Error> {
        let start = input.span().start;
        let sign = match input.current_token().map(|token| token.kind) {
            Some(TokenKind::Sub) => {
                input.next_token()?;
                -1.0
            },
            Some(TokenKind::Add) => {
                input.next_token()?;
                1.0
            },
            _ if first => 1.0,
            _ => return Err(input.unexpected(&[TokenKind::Add, TokenKind::Sub])),
        };

        let coefficient = if input.at(TokenKind::Number) {
            Some(Self::parse_coefficient(input)?)
        } else {
            None
        };

        let has_x = if input.at(TokenKind::Mul) && coefficient.is_some() {
            input.next_token()?;
            // `3 *` must be followed by the variable
            if !input.at(TokenKind::Name) {
                return Err(input.unexpected(&[TokenKind::Name]));
            }
            true
        } else {
            input.at(TokenKind::Name)
        };

        let degree = if has_x {
            Self::parse_variable(input)?
        } else if coefficient.is_some() {
            0
        } else {
            return Err(input.unexpected(&[TokenKind::Number, TokenKind::Name]));
        };

        let end = input.prev_token().map_or(start, |token| token.span.end);
        Ok(Self {
            coefficient: sign * coefficient.unwrap_or(1.0),
            degree,
            span: start..end,
        })
    }

    /// Parses a number, or a fraction of two numbers.
    fn parse_coefficient(input: &mut Parser) -> Result<f64, Error> {
        let numerator = input.try_parse::<LitNum>()?;
        if !input.at(TokenKind::Div) {
            return Ok(numerator.value);
        }

        input.next_token()?;
        let denominator = input.try_parse::<LitNum>()?;
        if denominator.value == 0.0 {
            return Err(Error::new(vec![denominator.span], kind::ZeroDenominator));
        }

        Ok(numerator.value / denominator.value)
    }

    /// Parses `x` and its optional exponent, returning the degree.
    fn parse_variable(input: &mut Parser) -> Result<u8, Error> {
        let name = input.expect(&[TokenKind::Name])?;
        if name.lexeme != "x" {
            return Err(Error::new(vec![name.span], kind::UnexpectedVariable {
                name: name.lexeme.to_string(),
            }));
        }

        if !input.at(TokenKind::Exp) {
            return Ok(1);
        }

        input.next_token()?;
        let exponent = input.expect(&[TokenKind::Number])?;
        match exponent.lexeme {
            "0" => Ok(0),
            "1" => Ok(1),
            "2" => Ok(2),
            other => Err(Error::new(vec![exponent.span.clone()], kind::UnsupportedDegree {
                exponent: other.to_string(),
            })),
        }
    }
}

/// A polynomial in `x`, as the list of terms it was written with. Terms of the same degree are
/// not combined until [`Polynomial::coefficients`] is called.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polynomial {
    /// The terms of the polynomial, in source order.
    pub terms: Vec<Term>,

    /// The region of the source code that this polynomial was parsed from.
    pub span: Range<usize>,
}

impl Polynomial {
    /// Sums the terms of the polynomial into its coefficients.
    pub fn coefficients(&self) -> Coefficients {
        self.terms.iter().fold(Coefficients::default(), |mut acc, term| {
            match term.degree {
                2 => acc.a += term.coefficient,
                1 => acc.b += term.coefficient,
                _ => acc.c += term.coefficient,
            }
            acc
        })
    }
}

impl Parse for Polynomial {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let mut terms = vec![Term::parse_signed(input, true)?];
        while input.at(TokenKind::Add) || input.at(TokenKind::Sub) {
            terms.push(Term::parse_signed(input, false)?);
        }

        let span = terms[0].span.start..terms[terms.len() - 1].span.end;
        Ok(Self { terms, span })
    }
}

/// The coefficients of `a·x² + b·x + c`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coefficients {
    /// The coefficient of `x²`.
    pub a: f64,

    /// The coefficient of `x`.
    pub b: f64,

    /// The constant term.
    pub c: f64,
}

impl Coefficients {
    /// Returns the degree of the polynomial, treating the zero polynomial as degree 0.
    pub fn degree(&self) -> u8 {
        if self.a != 0.0 {
            2
        } else if self.b != 0.0 {
            1
        } else {
            0
        }
    }
}

impl Sub for Coefficients {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            a: self.a - rhs.a,
            b: self.b - rhs.b,
            c: self.c - rhs.c,
        }
    }
}

/// Parses one side of an equation into the coefficients of a polynomial of degree at most 2.
///
/// Every token of the source must belong to a term.
pub fn parse_terms(source: &str) -> Result<Coefficients, Error> {
    Parser::new(source)
        .try_parse_full::<Polynomial>()
        .map(|poly| poly.coefficients())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn coefficients(a: f64, b: f64, c: f64) -> Coefficients {
        Coefficients { a, b, c }
    }

    #[test]
    fn perfect_square_trinomial() {
        assert_eq!(parse_terms("x^2-4x+4").unwrap(), coefficients(1.0, -4.0, 4.0));
    }

    #[test]
    fn fractional_coefficient() {
        assert_eq!(parse_terms("-x^2 + 1/2x - 3").unwrap(), coefficients(-1.0, 0.5, -3.0));
    }

    #[test]
    fn linear() {
        assert_eq!(parse_terms("2x+4").unwrap(), coefficients(0.0, 2.0, 4.0));
        assert_eq!(parse_terms("3 * x").unwrap(), coefficients(0.0, 3.0, 0.0));
        assert_eq!(parse_terms("-x").unwrap(), coefficients(0.0, -1.0, 0.0));
    }

    #[test]
    fn constant() {
        assert_eq!(parse_terms("10").unwrap(), coefficients(0.0, 0.0, 10.0));
        assert_eq!(parse_terms("-2.5").unwrap(), coefficients(0.0, 0.0, -2.5));
    }

    #[test]
    fn like_terms_accumulate() {
        assert_eq!(parse_terms("x^2 + x^2 - x + 3x").unwrap(), coefficients(2.0, 2.0, 0.0));
    }

    #[test]
    fn explicit_degrees() {
        assert_eq!(parse_terms("5x^0 + 2x^1").unwrap(), coefficients(0.0, 2.0, 5.0));
    }

    #[test]
    fn term_spans_include_sign() {
        let poly = Parser::new("x^2 - 4x").try_parse_full::<Polynomial>().unwrap();
        assert_eq!(poly.terms, vec![
            Term { coefficient: 1.0, degree: 2, span: 0..3 },
            Term { coefficient: -4.0, degree: 1, span: 4..8 },
        ]);
        assert_eq!(poly.span, 0..8);
    }

    #[test]
    fn cubic_is_rejected() {
        let err = parse_terms("x^3 + 1").unwrap_err();
        assert!(err.is::<kind::UnsupportedDegree>());
        assert_eq!(err.spans, vec![2..3]);
    }

    #[test]
    fn other_variable_is_rejected() {
        let err = parse_terms("2y + 1").unwrap_err();
        assert!(err.is::<kind::UnexpectedVariable>());
    }

    #[test]
    fn zero_denominator() {
        let err = parse_terms("1/0x").unwrap_err();
        assert!(err.is::<kind::ZeroDenominator>());
    }

    #[test]
    fn empty_side() {
        let err = parse_terms("").unwrap_err();
        assert!(err.is::<kind::UnexpectedEof>());
    }

    #[test]
    fn dangling_operator() {
        let err = parse_terms("2x +").unwrap_err();
        assert!(err.is::<kind::UnexpectedEof>());
    }

    #[test]
    fn missing_operator_between_terms() {
        let err = parse_terms("2x 3").unwrap_err();
        assert!(err.is::<kind::ExpectedEof>());
    }

    #[test]
    fn degree() {
        assert_eq!(parse_terms("x^2 - x^2 + x").unwrap().degree(), 1);
        assert_eq!(parse_terms("7").unwrap().degree(), 0);
    }
}
