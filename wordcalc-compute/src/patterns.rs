//! Patterns that recognize the shapes of queries.
//!
//! The classifier uses these to decide what a query asks for, and the handlers use the same
//! patterns to pull out the operands, so a query is never classified by one pattern and then
//! parsed by another.

use crate::numbers::compile;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// A number as written in a query, with an optional sign.
const NUM: &str = r"-?\d+(?:\.\d+)?";

macro_rules! pattern {
    ($(#[$meta:meta])* $name:ident = $pattern:expr) => {
        $(#[$meta])*
        pub(crate) static $name: Lazy<Regex> = Lazy::new(|| compile(&$pattern));
    };
}

pattern! {
    /// `x^2`, the marker of a quadratic equation. A coefficient such as `2x^2` may come before it,
    /// but not a letter.
    X_SQUARED = r"(?:^|[^a-z])x\s*\^\s*2\b"
}

pattern! {
    /// The variable `x` on its own, not as part of a word.
    STANDALONE_X = r"(?:^|[^a-z])x(?:[^a-z]|$)"
}

pattern! {
    /// A binding of `x` to a value, such as `at x = 2`. Captures the value.
    BINDING = format!(r"\b(?:at|when|for|where|with)\s+x\s*=\s*({})", NUM)
}

pattern! {
    /// A word equation, such as `a number plus 5 equals 12`. Captures the operation, the operand,
    /// and the result.
    WORD_EQUATION = format!(
        r"\b(?:a|the|some) number\s+(plus|minus|times|multiplied by|divided by)\s+({})\s+(?:equals|is|=)\s+({})",
        NUM,
        NUM,
    )
}

pattern! {
    /// A perfect square question, such as `n^2 + 3n + 5 is a perfect square`. Captures the signs
    /// and magnitudes of the linear and constant coefficients.
    PERFECT_SQUARE = r"n\s*\^\s*2\s*([+-])\s*(\d+)\s*n\s*([+-])\s*(\d+)"
}

pattern! {
    /// A logarithm of a number, such as `ln(2)`. Captures the function and the argument.
    LOGARITHM = format!(r"\b(ln|log|lg)\s*\(\s*({})\s*\)", NUM)
}

pattern! {
    /// A logarithm in an explicit base, such as `log base 2 of 8`. Captures the base and the
    /// argument.
    LOGARITHM_BASE = format!(r"\blog\s+base\s+({})\s+of\s+({})", NUM, NUM)
}

pattern! {
    /// A square root of a number, such as `sqrt 16`, `square root of 16`, or `√(16)`. Captures
    /// the argument.
    SQUARE_ROOT = format!(r"(?:\bsqrt|\bsquare root of|√)\s*\(?\s*({})\s*\)?", NUM)
}

pattern! {
    /// A base conversion, such as `convert 1010 base 2 to base 10`. Captures the digits and both
    /// bases.
    BASE_CONVERSION = r"\bconvert\s+([0-9a-z]+)\s+(?:from\s+)?base\s+(\d+)\s+(?:in)?to\s+base\s+(\d+)"
}

pattern! {
    /// Arithmetic within a base, such as `101 + 11 base 2`. Captures both operands, the operator,
    /// and the base.
    BASE_ARITHMETIC = r"\b([0-9a-z]+)\s*([+\-*/])\s*([0-9a-z]+)\s+(?:in\s+)?base\s+(\d+)"
}

pattern! {
    /// The keywords of base questions.
    BASE_KEYWORD = r"\b(?:base|convert)\b"
}

pattern! {
    /// The keywords of perimeter questions.
    PERIMETER_KEYWORD = r"\b(?:perimeter|circumference)\b"
}

pattern! {
    /// Operator words, and the symbols they stand for.
    OPERATOR_WORD = r"\b(?:plus|minus|times|multiplied by|divided by|over|to the power of)\b"
}

pattern! {
    /// A run of characters that can form an arithmetic expression.
    EXPRESSION_RUN = r"-?[\d.(√][\d.\s+\-*/^()×÷√]*[\d.)]"
}

pattern! {
    /// An operator between two operands.
    OPERATION = r"[\d.)]\s*[+\-*/^×÷]\s*[(\-√]*\s*[\d.(]"
}

pattern! {
    /// `add 3 and 5` or `add 3 to 5`.
    ADD_PHRASE = format!(r"\badd\s+({})\s+(?:and|to)\s+({})", NUM, NUM)
}

pattern! {
    /// `subtract 3 from 5`.
    SUBTRACT_PHRASE = format!(r"\bsubtract\s+({})\s+from\s+({})", NUM, NUM)
}

pattern! {
    /// `multiply 3 and 5` or `multiply 3 by 5`.
    MULTIPLY_PHRASE = format!(r"\bmultiply\s+({})\s+(?:and|by)\s+({})", NUM, NUM)
}

pattern! {
    /// `divide 10 by 2`.
    DIVIDE_PHRASE = format!(r"\bdivide\s+({})\s+by\s+({})", NUM, NUM)
}

pattern! {
    /// A descriptive number, such as `largest two-digit number`. Captures the extreme and the
    /// number of digits.
    DIGIT_NUMBER = r"\b(largest|greatest|biggest|smallest|least)\s+(\w+)[- ]digits?\s+numbers?\b"
}

pattern! {
    /// The keywords of integrals. The match ends where the integrand begins.
    INTEGRAL_KEYWORD = r"∫|\b(?:integrate|integral of|integral|antiderivative of)\b"
}

pattern! {
    /// The keywords of derivatives. The match ends where the expression begins.
    DERIVATIVE_KEYWORD = r"d/dx|\b(?:derivative of|derivative|differentiate)\b"
}

pattern! {
    /// The bounds of a definite integral, such as `from 0 to 3`.
    BOUNDS = format!(r"\s*\bfrom\s+({})\s+to\s+({})", NUM, NUM)
}

pattern! {
    /// The words before an expression to evaluate, such as `evaluate` or `what is`.
    EVALUATE_PREFIX = r"^\s*(?:please\s+)?(?:evaluate|compute|calculate|find|what is|what's)?\s*(?:the value of\s+)?(?:f\(x\)\s*=\s*)?"
}

pattern! {
    /// Words and punctuation that can follow the expression of a calculus query.
    TRAILING_NOISE = r"\s*(?:with respect to x|wrt x)?\s*[?.!,]*\s*$"
}

/// Rewrites operator words to their symbols, padding each symbol with spaces so that every
/// character keeps its position.
///
/// `5 plus 3` becomes `5 +    3`, so an error found in the rewritten text points at the same
/// place in the original.
pub(crate) fn symbolize(text: &str) -> String {
    OPERATOR_WORD
        .replace_all(text, |caps: &Captures| {
            let word = &caps[0];
            let symbol = match word {
                "plus" => "+",
                "minus" => "-",
                "times" | "multiplied by" => "*",
                "divided by" | "over" => "/",
                _ => "^",
            };
            format!("{:<width$}", symbol, width = word.len())
        })
        .into_owned()
}

/// Where an arithmetic expression in a query came from.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ArithmeticSource {
    /// The expression was written in the query at this byte offset, possibly with operator
    /// words.
    Written { expr: String, offset: usize },

    /// The expression was assembled from a phrase such as `subtract 3 from 5`.
    Phrased(String),
}

impl ArithmeticSource {
    /// Returns the expression to evaluate.
    pub(crate) fn expr(&self) -> &str {
        match self {
            Self::Written { expr, .. } => expr,
            Self::Phrased(expr) => expr,
        }
    }
}

/// Finds the arithmetic expression in a query: the first run of numbers and operators that
/// contains at least one operation, or a phrase like `add 3 and 5`.
pub(crate) fn find_arithmetic(text: &str) -> Option<ArithmeticSource> {
    let symbolized = symbolize(text);
    let written = EXPRESSION_RUN.find_iter(&symbolized)
        .find(|m| OPERATION.is_match(m.as_str()))
        .map(|m| ArithmeticSource::Written {
            expr: m.as_str().to_string(),
            offset: m.start(),
        });
    if written.is_some() {
        return written;
    }

    phrase(&ADD_PHRASE, text, |a, b| format!("{} + {}", a, b))
        .or_else(|| phrase(&SUBTRACT_PHRASE, text, |a, b| format!("{} - {}", b, a)))
        .or_else(|| phrase(&MULTIPLY_PHRASE, text, |a, b| format!("{} * {}", a, b)))
        .or_else(|| phrase(&DIVIDE_PHRASE, text, |a, b| format!("{} / {}", a, b)))
}

/// Builds an expression from the two operands captured by an arithmetic phrase.
fn phrase(pattern: &Regex, text: &str, build: fn(&str, &str) -> String) -> Option<ArithmeticSource> {
    pattern.captures(text).map(|caps| ArithmeticSource::Phrased(build(&caps[1], &caps[2])))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn symbolize_keeps_positions() {
        let text = "5 plus 3 divided by 2";
        let symbolized = symbolize(text);
        assert_eq!(symbolized, "5 +    3 /          2");
        assert_eq!(symbolized.len(), text.len());
    }

    #[test]
    fn written_arithmetic() {
        assert_eq!(
            find_arithmetic("what is 12 times 4?"),
            Some(ArithmeticSource::Written { expr: "12 *     4".to_string(), offset: 8 }),
        );
        assert_eq!(find_arithmetic("3 + 5").map(|s| s.expr().to_string()), Some("3 + 5".to_string()));
        assert_eq!(find_arithmetic("(1 + 2) * 3").map(|s| s.expr().to_string()), Some("(1 + 2) * 3".to_string()));
        assert_eq!(find_arithmetic("8 ÷ 2").map(|s| s.expr().to_string()), Some("8 ÷ 2".to_string()));
    }

    #[test]
    fn phrased_arithmetic() {
        assert_eq!(find_arithmetic("subtract 3 from 10"), Some(ArithmeticSource::Phrased("10 - 3".to_string())));
        assert_eq!(find_arithmetic("divide 9 by 3"), Some(ArithmeticSource::Phrased("9 / 3".to_string())));
    }

    #[test]
    fn no_arithmetic() {
        assert_eq!(find_arithmetic("mean of 4, 6"), None);
        assert_eq!(find_arithmetic("largest two-digit number"), None);
        assert_eq!(find_arithmetic("version 2.0"), None);
    }

    #[test]
    fn binding() {
        let caps = BINDING.captures("evaluate x^2 at x = -1.5").unwrap();
        assert_eq!(&caps[1], "-1.5");
        assert!(!BINDING.is_match("solve 2x = 4"));
    }

    #[test]
    fn digit_numbers() {
        let caps = DIGIT_NUMBER.captures("the largest two-digit number").unwrap();
        assert_eq!((&caps[1], &caps[2]), ("largest", "two"));
        let caps = DIGIT_NUMBER.captures("smallest 3 digit number").unwrap();
        assert_eq!((&caps[1], &caps[2]), ("smallest", "3"));
    }
}
