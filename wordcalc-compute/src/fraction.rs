//! Reduction of ratios to fractions in lowest terms, for display.

use crate::{
    error::{DivisionByZero, Error, NonFiniteValue},
    fmt::Markup,
};
use rug::Integer;
use std::fmt;

/// The scale applied to both parts of a ratio before reduction. Up to six fractional digits of
/// each part are kept; anything finer is rounded away.
const SCALE: f64 = 1e6;

/// A fraction in lowest terms with a positive denominator.
///
/// This is a display normalization, not exact rational arithmetic: a ratio is reduced after both
/// of its parts are rounded to six decimal places, so ratios of irrational numbers are shown as
/// their nearest fraction at that precision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fraction {
    /// The numerator, carrying the sign of the fraction.
    pub numer: Integer,

    /// The denominator, always positive.
    pub denom: Integer,
}

impl Fraction {
    /// Reduces the ratio `numerator / denominator`.
    ///
    /// Returns a [`DivisionByZero`] error if the denominator is zero, and a [`NonFiniteValue`]
    /// error if either part is infinite or NaN.
    pub fn new(numerator: f64, denominator: f64) -> Result<Self, Error> {
        if denominator == 0.0 {
            return Err(Error::spanless(DivisionByZero));
        }
        if !numerator.is_finite() || !denominator.is_finite() {
            return Err(Error::spanless(NonFiniteValue));
        }

        if numerator == 0.0 {
            return Ok(Self::integer(Integer::new()));
        }

        let ratio = numerator / denominator;
        if ratio.fract() == 0.0 {
            let value = Integer::from_f64(ratio).ok_or_else(|| Error::spanless(NonFiniteValue))?;
            return Ok(Self::integer(value));
        }

        let scaled = |value: f64| {
            Integer::from_f64((value * SCALE).round())
                .ok_or_else(|| Error::spanless(NonFiniteValue))
        };
        let numer = scaled(numerator)?;
        let denom = scaled(denominator)?;
        if denom == 0 {
            // the denominator is below the precision of the reduction
            return Err(Error::spanless(NonFiniteValue));
        }

        Ok(Self::from_integers(numer, denom))
    }

    /// Creates the fraction `value / 1`.
    pub fn integer(value: Integer) -> Self {
        Self { numer: value, denom: Integer::from(1) }
    }

    /// Reduces the ratio of two integers. The denominator must be non-zero.
    fn from_integers(mut numer: Integer, mut denom: Integer) -> Self {
        let gcd = Integer::from(numer.gcd_ref(&denom));
        if gcd > 1 {
            numer /= &gcd;
            denom /= &gcd;
        }
        if denom < 0 {
            numer = -numer;
            denom = -denom;
        }
        Self { numer, denom }
    }

    /// Returns true if the denominator is 1.
    pub fn is_integer(&self) -> bool {
        self.denom == 1
    }

    /// Returns the value of the fraction as a float.
    pub fn value(&self) -> f64 {
        self.numer.to_f64() / self.denom.to_f64()
    }

    /// Renders the fraction in the given markup. A fraction with denominator 1 is rendered as an
    /// integer.
    pub fn render(&self, markup: Markup) -> String {
        if self.is_integer() {
            return self.numer.to_string();
        }

        match markup {
            Markup::Plain => markup.fraction(&self.numer.to_string(), &self.denom.to_string()),
            // keep the sign outside of the fraction bar
            Markup::Latex if self.numer < 0 => {
                format!("-{}", markup.fraction(&Integer::from(-&self.numer).to_string(), &self.denom.to_string()))
            },
            Markup::Latex => markup.fraction(&self.numer.to_string(), &self.denom.to_string()),
        }
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.render(Markup::Plain))
    }
}

/// Reduces `numerator / denominator` to lowest terms and renders it as plain text.
pub fn format_fraction(numerator: f64, denominator: f64) -> Result<String, Error> {
    Fraction::new(numerator, denominator).map(|fraction| fraction.to_string())
}

#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;
    use super::*;

    #[test]
    fn exact_integer() {
        assert_eq!(format_fraction(6.0, 3.0).unwrap(), "2");
        assert_eq!(format_fraction(-8.0, 2.0).unwrap(), "-4");
    }

    #[test]
    fn zero_numerator() {
        assert_eq!(format_fraction(0.0, 7.0).unwrap(), "0");
        assert_eq!(format_fraction(-0.0, -7.0).unwrap(), "0");
    }

    #[test]
    fn one_third() {
        let fraction = Fraction::new(1.0, 3.0).unwrap();
        assert_eq!(fraction.numer, 1);
        assert_eq!(fraction.denom, 3);
        assert_eq!(fraction.to_string(), "1/3");
        assert_eq!(fraction.render(Markup::Latex), "\\frac{1}{3}");
    }

    #[test]
    fn denominator_is_positive() {
        assert_eq!(format_fraction(3.0, -6.0).unwrap(), "-1/2");
        assert_eq!(format_fraction(-3.0, -6.0).unwrap(), "1/2");
        assert_eq!(Fraction::new(1.0, -4.0).unwrap().render(Markup::Latex), "-\\frac{1}{4}");
    }

    #[test]
    fn decimal_parts() {
        assert_eq!(format_fraction(0.5, 0.75).unwrap(), "2/3");
        assert_eq!(format_fraction(2.5, 1.0).unwrap(), "5/2");
    }

    #[test]
    fn reduction_is_idempotent() {
        for (n, d) in [(4.0, 6.0), (10.0, 4.0), (-7.0, 21.0), (1.5, 0.25), (22.0, 7.0)] {
            let once = Fraction::new(n, d).unwrap();
            let twice = Fraction::new(once.numer.to_f64(), once.denom.to_f64()).unwrap();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn value() {
        assert_float_absolute_eq!(Fraction::new(1.0, 8.0).unwrap().value(), 0.125);
    }

    #[test]
    fn division_by_zero() {
        let err = format_fraction(1.0, 0.0).unwrap_err();
        assert!(err.is::<DivisionByZero>());
        assert_eq!(err.to_string(), "Error: Division by zero");
    }

    #[test]
    fn infinite() {
        assert!(format_fraction(f64::INFINITY, 2.0).unwrap_err().is::<NonFiniteValue>());
    }
}
