//! Formatting options for responses, and helpers to format numbers consistently.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The number of decimal places used for rounded results by default.
pub const DEFAULT_DECIMALS: usize = 2;

/// Formatting options for responses.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormatOptions {
    /// How to render fractions and other math notation.
    pub markup: Markup,

    /// The number of decimal places to show for results that are rounded, such as the mean of a
    /// list or the value of a definite integral.
    ///
    /// Exact results, such as the roots of an equation, are always rendered exactly.
    pub decimals: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            markup: Markup::default(),
            decimals: DEFAULT_DECIMALS,
        }
    }
}

impl FormatOptions {
    /// Wraps the given [`FormatOptions`] into a builder for further customization.
    pub fn into_builder(self) -> FormatOptionsBuilder {
        FormatOptionsBuilder(self)
    }

    /// Formats the value rounded to the configured number of decimal places.
    pub fn fixed(&self, value: f64) -> String {
        let formatted = format!("{:.*}", self.decimals, value);
        match formatted.strip_prefix('-') {
            // rounded to zero
            Some(digits) if digits.chars().all(|c| c == '0' || c == '.') => digits.to_string(),
            _ => formatted,
        }
    }
}

/// The notation used to render math in responses.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Markup {
    /// Plain text, such as `1/3` and `±`.
    ///
    /// This is the default option.
    #[default]
    Plain,

    /// LaTeX, such as `\frac{1}{3}` and `\pm`, for front ends that typeset math.
    Latex,
}

impl Markup {
    /// Utility function to create a new [`FormatOptions`] with the same formatting options as the
    /// given [`FormatOptions`], but with the markup set to this value.
    pub fn inside(self, options: FormatOptions) -> FormatOptions {
        FormatOptions {
            markup: self,
            ..options
        }
    }

    /// Renders a fraction with the given numerator and denominator.
    pub fn fraction(self, numer: &str, denom: &str) -> String {
        match self {
            Markup::Plain => format!("{}/{}", numer, denom),
            Markup::Latex => format!("\\frac{{{}}}{{{}}}", numer, denom),
        }
    }

    /// Returns the plus-or-minus sign.
    pub fn plus_minus(self) -> &'static str {
        match self {
            Markup::Plain => "±",
            Markup::Latex => "\\pm",
        }
    }
}

/// Helper struct to build a [`FormatOptions`] struct.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct FormatOptionsBuilder(FormatOptions);

impl FormatOptionsBuilder {
    /// Creates a new builder with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the markup. See [`Markup`] for more information.
    pub fn markup(mut self, markup: Markup) -> Self {
        self.0.markup = markup;
        self
    }

    /// Sets the number of decimal places for rounded results.
    pub fn decimals(mut self, decimals: usize) -> Self {
        self.0.decimals = decimals;
        self
    }

    /// Builds the [`FormatOptions`] struct.
    pub fn build(self) -> FormatOptions {
        self.0
    }
}

/// Replaces negative zero with zero, so that it is never rendered as `-0`.
fn zero_sign(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

/// Formats a number as short as possible: integers without a decimal point, and other values
/// with floating-point noise past the tenth decimal place removed.
///
/// This is used for numbers the user typed, and for results that are exact in practice, such as
/// the range of a list.
pub fn fmt_num(value: f64) -> String {
    if !value.is_finite() || value.abs() >= 1e15 {
        return value.to_string();
    }

    let rounded = (value * 1e10).round() / 1e10;
    zero_sign(rounded).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_numbers() {
        assert_eq!(fmt_num(5.0), "5");
        assert_eq!(fmt_num(-2.5), "-2.5");
        assert_eq!(fmt_num(0.1 + 0.2), "0.3");
        assert_eq!(fmt_num(-0.0), "0");
    }

    #[test]
    fn fixed_decimals() {
        let options = FormatOptions::default();
        assert_eq!(options.fixed(5.0), "5.00");
        assert_eq!(options.fixed(2.0 / 3.0), "0.67");
        assert_eq!(options.fixed(-0.001), "0.00");

        let options = FormatOptionsBuilder::new().decimals(4).build();
        assert_eq!(options.fixed(std::f64::consts::LN_2), "0.6931");
    }

    #[test]
    fn markup() {
        assert_eq!(Markup::Plain.fraction("1", "3"), "1/3");
        assert_eq!(Markup::Latex.fraction("1", "3"), "\\frac{1}{3}");

        let options = Markup::Latex.inside(FormatOptions::default());
        assert_eq!(options.markup, Markup::Latex);
        assert_eq!(options.decimals, DEFAULT_DECIMALS);
    }
}
