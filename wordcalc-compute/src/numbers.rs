//! Extraction of numeric literals from query text.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches an optionally negative decimal number.
static NUMBER: Lazy<Regex> = Lazy::new(|| compile(r"-?\d+(?:\.\d+)?"));

/// Compiles a regular expression that is a literal of this crate, or was built from escaped
/// literals.
pub(crate) fn compile(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(regex) => regex,
        Err(err) => panic!("invalid built-in pattern `{}`: {}", pattern, err),
    }
}

/// Extracts every number in the text, in the order they appear.
///
/// A `-` directly before the digits is taken as the sign of the number, so `5-3` yields `5` and
/// `-3`. Callers decide whether to pass the raw or the normalized query.
pub fn extract_numbers(text: &str) -> Vec<f64> {
    NUMBER.find_iter(text)
        .filter_map(|m| m.as_str().parse::<f64>().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn in_order() {
        assert_eq!(extract_numbers("average of 4, 6.5 and -9"), vec![4.0, 6.5, -9.0]);
    }

    #[test]
    fn none() {
        assert_eq!(extract_numbers("what is the mean?"), Vec::<f64>::new());
    }

    #[test]
    fn attached_sign() {
        assert_eq!(extract_numbers("5-3"), vec![5.0, -3.0]);
        assert_eq!(extract_numbers("x^2 + 10x"), vec![2.0, 10.0]);
    }

    #[test]
    fn trailing_dot_is_not_a_decimal() {
        assert_eq!(extract_numbers("I have 3. You have 4.25."), vec![3.0, 4.25]);
    }
}
