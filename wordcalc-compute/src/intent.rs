//! Classification of queries by what they ask for.
//!
//! A query is tested against each rule of [`RULES`] in order, and the first rule that matches
//! decides the [`Intent`]. The order is part of the contract: a query can match several rules
//! (`solve x^2 - 4 = 0` contains an arithmetic operation too), and only the earliest one is
//! used. From first to last:
//!
//! 1. quadratic equations, then linear equations, then word equations;
//! 2. evaluating an expression at a value of `x`;
//! 3. named computations: perfect squares, statistics, combinatorics, logarithms, square roots,
//!    base conversions, and perimeters;
//! 4. plain arithmetic;
//! 5. descriptive numbers, such as `the largest two-digit number`;
//! 6. integrals, then derivatives;
//! 7. word problems.
//!
//! A query that matches no rule is [`Intent::Unknown`].

use crate::{
    funcs::{combinatoric::CombKind, statistics::StatKind},
    numbers::compile,
    patterns::{
        find_arithmetic,
        BASE_KEYWORD,
        BINDING,
        DERIVATIVE_KEYWORD,
        DIGIT_NUMBER,
        INTEGRAL_KEYWORD,
        LOGARITHM,
        LOGARITHM_BASE,
        PERIMETER_KEYWORD,
        SQUARE_ROOT,
        STANDALONE_X,
        WORD_EQUATION,
        X_SQUARED,
    },
};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The operation of a word problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WordProblemKind {
    /// Something is taken away, as in `I had 10 apples and gave 3 away, how many are left?`.
    Subtract,

    /// Something is repeated, as in `3 pens cost 2 dollars each`.
    Multiply,

    /// Something is shared, as in `12 cookies split between 4 friends`.
    Divide,
}

/// What a query asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Intent {
    /// An arithmetic expression of numbers, such as `3 + 5` or `12 times 4`.
    Arithmetic,

    /// An equation of degree 1 in `x`.
    LinearEquation,

    /// An equation with an `x^2` term.
    QuadraticEquation,

    /// The derivative of one of the supported forms.
    Derivative,

    /// The integral of one of the supported forms, possibly with bounds.
    Integral,

    /// An expression evaluated at a value of `x`, such as `x^2 + 1 at x = 3`.
    Evaluate,

    /// A statistic of a list of numbers.
    Statistics(StatKind),

    /// The largest or smallest number with some number of digits, or arithmetic on them.
    Descriptive,

    /// The number of combinations or permutations.
    Combinatorics(CombKind),

    /// An equation stated in words, such as `a number plus 5 equals 12`.
    WordEquation,

    /// A story problem solved by one operation on the first two numbers.
    WordProblem(WordProblemKind),

    /// A natural, common, or explicit-base logarithm of a number.
    Logarithm,

    /// The square root of a number.
    SquareRoot,

    /// A conversion between bases, or arithmetic within a base.
    BaseConversion,

    /// The perimeter of a shape.
    Perimeter,

    /// The integers for which a quadratic in `n` is a perfect square.
    PerfectSquare,

    /// Nothing was recognized.
    Unknown,
}

/// A classification rule.
#[derive(Debug)]
pub struct Rule {
    /// A short name for the rule, used in logs.
    pub name: &'static str,

    /// Returns the intent of the query if this rule applies to it.
    pub classify: fn(&str) -> Option<Intent>,
}

/// Returns `intent` if `condition` holds.
fn when(condition: bool, intent: Intent) -> Option<Intent> {
    condition.then_some(intent)
}

/// Returns true if the query is an equation in `x`, rather than an expression bound to a value
/// of `x`.
fn is_equation(text: &str) -> bool {
    text.contains('=') && !BINDING.is_match(text)
}

/// Statistic keywords, checked in order. The minimum and maximum do not apply to descriptive
/// numbers like `the largest two-digit number`.
static STATISTICS: Lazy<Vec<(Regex, StatKind)>> = Lazy::new(|| {
    [
        (r"\bstandard deviation\b", StatKind::StandardDeviation),
        (r"\bvariance\b", StatKind::Variance),
        (r"\b(?:average|mean)\b", StatKind::Mean),
        (r"\bmedian\b", StatKind::Median),
        (r"\bmode\b", StatKind::Mode),
        (r"\brange\b", StatKind::Range),
        (r"\b(?:sum|total) of\b", StatKind::Sum),
        (r"\b(?:maximum|max|largest|biggest|greatest)\b", StatKind::Max),
        (r"\b(?:minimum|min|smallest|least)\b", StatKind::Min),
    ]
    .into_iter()
    .map(|(pattern, kind)| (compile(pattern), kind))
    .collect()
});

static COMBINATIONS: Lazy<Regex> = Lazy::new(|| compile(r"\b(?:combinations?|choose|ncr)\b|\bc\s*\(\s*\d"));
static PERMUTATIONS: Lazy<Regex> = Lazy::new(|| compile(r"\b(?:permutations?|arrangements?|npr)\b|\bp\s*\(\s*\d"));

static SUBTRACT_WORDS: Lazy<Regex> = Lazy::new(|| compile(r"\b(?:left|remain|remains|remaining|give|gives|gave)\b"));
static MULTIPLY_WORDS: Lazy<Regex> = Lazy::new(|| compile(r"\b(?:cost|costs|each)\b"));
static DIVIDE_WORDS: Lazy<Regex> = Lazy::new(|| compile(r"\b(?:per|split|shared)\b"));

fn statistic(text: &str) -> Option<Intent> {
    let descriptive = DIGIT_NUMBER.is_match(text);
    STATISTICS.iter()
        .filter(|(_, kind)| !(descriptive && matches!(kind, StatKind::Max | StatKind::Min)))
        .find(|(pattern, _)| pattern.is_match(text))
        .map(|(_, kind)| Intent::Statistics(*kind))
}

fn combinatorics(text: &str) -> Option<Intent> {
    if PERMUTATIONS.is_match(text) {
        Some(Intent::Combinatorics(CombKind::Permutations))
    } else if COMBINATIONS.is_match(text) {
        Some(Intent::Combinatorics(CombKind::Combinations))
    } else {
        None
    }
}

fn word_problem(text: &str) -> Option<Intent> {
    if SUBTRACT_WORDS.is_match(text) {
        Some(Intent::WordProblem(WordProblemKind::Subtract))
    } else if MULTIPLY_WORDS.is_match(text) {
        Some(Intent::WordProblem(WordProblemKind::Multiply))
    } else if DIVIDE_WORDS.is_match(text) {
        Some(Intent::WordProblem(WordProblemKind::Divide))
    } else {
        None
    }
}

/// The classification rules, in priority order.
pub static RULES: &[Rule] = &[
    Rule {
        name: "quadratic equation",
        classify: |text| when(is_equation(text) && X_SQUARED.is_match(text), Intent::QuadraticEquation),
    },
    Rule {
        name: "linear equation",
        classify: |text| when(is_equation(text) && STANDALONE_X.is_match(text), Intent::LinearEquation),
    },
    Rule {
        name: "word equation",
        classify: |text| when(WORD_EQUATION.is_match(text), Intent::WordEquation),
    },
    Rule {
        name: "evaluate",
        classify: |text| when(BINDING.is_match(text), Intent::Evaluate),
    },
    Rule {
        name: "perfect square",
        classify: |text| when(text.contains("perfect square"), Intent::PerfectSquare),
    },
    Rule {
        name: "statistics",
        classify: statistic,
    },
    Rule {
        name: "combinatorics",
        classify: combinatorics,
    },
    Rule {
        name: "logarithm",
        classify: |text| when(LOGARITHM.is_match(text) || LOGARITHM_BASE.is_match(text), Intent::Logarithm),
    },
    Rule {
        name: "square root",
        classify: |text| when(SQUARE_ROOT.is_match(text), Intent::SquareRoot),
    },
    Rule {
        name: "base",
        classify: |text| when(BASE_KEYWORD.is_match(text), Intent::BaseConversion),
    },
    Rule {
        name: "perimeter",
        classify: |text| when(PERIMETER_KEYWORD.is_match(text), Intent::Perimeter),
    },
    Rule {
        name: "arithmetic",
        classify: |text| when(
            !STANDALONE_X.is_match(text) && find_arithmetic(text).is_some(),
            Intent::Arithmetic,
        ),
    },
    Rule {
        name: "descriptive",
        classify: |text| when(DIGIT_NUMBER.is_match(text), Intent::Descriptive),
    },
    Rule {
        name: "integral",
        classify: |text| when(INTEGRAL_KEYWORD.is_match(text), Intent::Integral),
    },
    Rule {
        name: "derivative",
        classify: |text| when(DERIVATIVE_KEYWORD.is_match(text), Intent::Derivative),
    },
    Rule {
        name: "word problem",
        classify: word_problem,
    },
];

/// Classifies a normalized query.
pub fn classify(text: &str) -> Intent {
    for rule in RULES {
        if let Some(intent) = (rule.classify)(text) {
            debug!(rule = rule.name, ?intent, "classified query");
            return intent;
        }
    }

    debug!("no rule matched query");
    Intent::Unknown
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn equations() {
        assert_eq!(classify("solve x^2 - 4 = 0"), Intent::QuadraticEquation);
        assert_eq!(classify("solve x^2-4x+4=0"), Intent::QuadraticEquation);
        assert_eq!(classify("solve 2x^2 - 8 = 0"), Intent::QuadraticEquation);
        assert_eq!(classify("3x^2 = 12"), Intent::QuadraticEquation);
        assert_eq!(classify("solve 2x + 4 = 10"), Intent::LinearEquation);
        assert_eq!(classify("x = 3"), Intent::LinearEquation);
        assert_eq!(classify("a number plus 5 equals 12"), Intent::WordEquation);
    }

    #[test]
    fn evaluate_is_not_an_equation() {
        assert_eq!(classify("evaluate x^2 + 3x at x = 2"), Intent::Evaluate);
        assert_eq!(classify("what is 2x + 1 when x = -1"), Intent::Evaluate);
    }

    #[test]
    fn statistics() {
        assert_eq!(classify("average of 4, 6, 9"), Intent::Statistics(StatKind::Mean));
        assert_eq!(classify("standard deviation of 1, 2, 3"), Intent::Statistics(StatKind::StandardDeviation));
        assert_eq!(classify("median of 3 + 4, 5"), Intent::Statistics(StatKind::Median));
        assert_eq!(classify("biggest of 3, 9, 2"), Intent::Statistics(StatKind::Max));
        assert_eq!(classify("sum of 1, 2, 3"), Intent::Statistics(StatKind::Sum));
    }

    #[test]
    fn named_computations() {
        assert_eq!(classify("5 choose 2"), Intent::Combinatorics(CombKind::Combinations));
        assert_eq!(classify("permutations of 5 and 2"), Intent::Combinatorics(CombKind::Permutations));
        assert_eq!(classify("ln(2)"), Intent::Logarithm);
        assert_eq!(classify("log base 2 of 8"), Intent::Logarithm);
        assert_eq!(classify("√16"), Intent::SquareRoot);
        assert_eq!(classify("convert 1010 base 2 to base 10"), Intent::BaseConversion);
        assert_eq!(classify("101 + 11 base 2"), Intent::BaseConversion);
        assert_eq!(classify("perimeter of rectangle with sides 5 and 3"), Intent::Perimeter);
        assert_eq!(
            classify("find integers n such that n^2 + 3n + 5 is a perfect square"),
            Intent::PerfectSquare,
        );
    }

    #[test]
    fn arithmetic() {
        assert_eq!(classify("3 + 5"), Intent::Arithmetic);
        assert_eq!(classify("what is 12 times 4"), Intent::Arithmetic);
        assert_eq!(classify("subtract 3 from 10"), Intent::Arithmetic);
        assert_eq!(classify("7 / 0"), Intent::Arithmetic);
    }

    #[test]
    fn descriptive_numbers() {
        assert_eq!(classify("largest two-digit number"), Intent::Descriptive);
        assert_eq!(
            classify("largest two-digit number minus smallest two-digit number"),
            Intent::Descriptive,
        );
    }

    #[test]
    fn calculus() {
        assert_eq!(classify("∫x^2 dx"), Intent::Integral);
        assert_eq!(classify("integrate x^2 from 0 to 3"), Intent::Integral);
        assert_eq!(classify("derivative of sin(x)"), Intent::Derivative);
        assert_eq!(classify("differentiate x^3"), Intent::Derivative);
    }

    #[test]
    fn word_problems() {
        assert_eq!(
            classify("i had 10 apples and gave 3 away, how many are left?"),
            Intent::WordProblem(WordProblemKind::Subtract),
        );
        assert_eq!(
            classify("3 pens cost 2 dollars each"),
            Intent::WordProblem(WordProblemKind::Multiply),
        );
        assert_eq!(
            classify("12 cookies split between 4 friends"),
            Intent::WordProblem(WordProblemKind::Divide),
        );
    }

    #[test]
    fn unknown() {
        assert_eq!(classify("hello there"), Intent::Unknown);
        assert_eq!(classify(""), Intent::Unknown);
    }

    #[test]
    fn rule_names_are_unique() {
        let mut names = RULES.iter().map(|rule| rule.name).collect::<Vec<_>>();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), RULES.len());
    }
}
