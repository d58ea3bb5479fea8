//! Searches over small integers.

use rug::Integer;
use std::ops::RangeInclusive;

/// The integers searched for solutions.
pub const SEARCH_RANGE: RangeInclusive<i64> = -100..=100;

/// Returns every integer `n` in [`SEARCH_RANGE`] for which `n^2 + bn + c` is a perfect square.
pub fn perfect_square_values(b: i64, c: i64) -> Vec<i64> {
    SEARCH_RANGE
        .filter(|&n| {
            let value = Integer::from(n) * n + Integer::from(b) * n + c;
            value.is_perfect_square()
        })
        .collect()
}

/// Renders the polynomial `n^2 + bn + c` with the signs folded into the operators.
fn polynomial(b: i64, c: i64) -> String {
    let term = |value: i64, suffix: &str| {
        if value < 0 {
            format!(" - {}{}", -value, suffix)
        } else {
            format!(" + {}{}", value, suffix)
        }
    };
    format!("n^2{}{}", term(b, "n"), term(c, ""))
}

/// Finds the integers `n` for which `n^2 + bn + c` is a perfect square, and describes them.
pub fn perfect_squares(b: i64, c: i64) -> String {
    let solutions = perfect_square_values(b, c);
    let polynomial = polynomial(b, c);
    if solutions.is_empty() {
        format!(
            "No integer solutions found for {} being a perfect square in range [{}, {}].",
            polynomial,
            SEARCH_RANGE.start(),
            SEARCH_RANGE.end(),
        )
    } else {
        format!(
            "Let's find integers n such that {} is a perfect square. Solutions: n = {}",
            polynomial,
            solutions.iter()
                .map(i64::to_string)
                .collect::<Vec<_>>()
                .join(", "),
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn squares_of_shifted_values() {
        // n^2 + 2n + 1 = (n + 1)^2 is always a perfect square
        assert_eq!(perfect_square_values(2, 1).len(), 201);
    }

    #[test]
    fn finite_solutions() {
        // n^2 + 3n + 5 = m^2 only at n = -4 (9) and n = 1 (9)
        assert_eq!(perfect_square_values(3, 5), vec![-4, 1]);
        assert_eq!(
            perfect_squares(3, 5),
            "Let's find integers n such that n^2 + 3n + 5 is a perfect square. Solutions: n = -4, 1",
        );
    }

    #[test]
    fn no_solutions() {
        // m^2 - n^2 = 2 has no solution, as both factors of (m - n)(m + n) have the same parity
        assert_eq!(perfect_square_values(0, 2), Vec::<i64>::new());
        assert_eq!(
            perfect_squares(0, 2),
            "No integer solutions found for n^2 + 0n + 2 being a perfect square in range [-100, 100].",
        );
    }

    #[test]
    fn negative_coefficients() {
        // n^2 - 1 is a square only at n = ±1
        assert_eq!(perfect_square_values(0, -1), vec![-1, 1]);
        assert!(perfect_squares(-2, 1).starts_with("Let's find integers n such that n^2 - 2n + 1 is"));
    }
}
