//! Answering queries: normalization, classification, and the handler of each [`Intent`].

use crate::{
    error::{
        DivisionByZero,
        Error,
        InsufficientOperands,
        OutOfDomain,
        UnknownIntent,
        UnparsedQuery,
    },
    fmt::{fmt_num, FormatOptions},
    fraction::Fraction,
    funcs::{
        calculus,
        combinatoric::CombKind,
        geometry::Shape,
        number_theory,
        radix::{self, Digits, RadixOp},
        statistics::StatKind,
    },
    intent::{classify, Intent, WordProblemKind},
    numbers::extract_numbers,
    numerical::{ctxt::Ctxt, eval::Eval},
    patterns::{
        find_arithmetic,
        symbolize,
        ArithmeticSource,
        BASE_ARITHMETIC,
        BASE_CONVERSION,
        BINDING,
        BOUNDS,
        DERIVATIVE_KEYWORD,
        DIGIT_NUMBER,
        EVALUATE_PREFIX,
        INTEGRAL_KEYWORD,
        LOGARITHM,
        LOGARITHM_BASE,
        PERFECT_SQUARE,
        SQUARE_ROOT,
        TRAILING_NOISE,
        WORD_EQUATION,
    },
    solve,
    spell::normalize,
};
use levenshtein::levenshtein;
use regex::{Captures, Match};
use rug::Integer;
use std::{ops::Range, str::FromStr};
use tracing::debug;
use wordcalc_parser::parser::{ast::expr::Expr, Parser};

/// Logarithms are always shown to this many decimal places.
const LOG_DECIMALS: usize = 4;

/// Descriptive numbers with more digits than this are not computed.
const MAX_DIGITS: u32 = 1000;

/// Keywords suggested when a query is not recognized.
const VOCABULARY: &[&str] = &[
    "solve",
    "evaluate",
    "average",
    "mean",
    "median",
    "mode",
    "range",
    "variance",
    "standard deviation",
    "sum",
    "maximum",
    "minimum",
    "combinations",
    "permutations",
    "integrate",
    "derivative",
    "differentiate",
    "sqrt",
    "square root",
    "perimeter",
    "circumference",
    "convert",
    "base",
    "largest",
    "smallest",
];

/// The answer to a query.
#[derive(Debug)]
pub struct Answer {
    /// The query after spelling normalization. The spans of an error point into this text.
    pub normalized: String,

    /// What the query was classified as.
    pub intent: Intent,

    /// The rendered result, or the reason there is none.
    pub outcome: Result<String, Error>,
}

impl Answer {
    /// Returns the response to show for this answer: the result, or the error as a single line.
    pub fn response(&self) -> String {
        match &self.outcome {
            Ok(result) => result.clone(),
            Err(err) => err.to_string(),
        }
    }
}

/// Normalizes, classifies, and answers a query.
pub fn evaluate(raw: &str, options: &FormatOptions) -> Answer {
    let normalized = normalize(raw);
    let intent = classify(&normalized);
    let outcome = answer(&normalized, intent, options);
    if let Err(err) = &outcome {
        debug!(?intent, error = %err, "query failed");
    }
    Answer { normalized, intent, outcome }
}

/// Answers a query with the default formatting options, returning the response as text.
pub fn evaluate_query(raw: &str) -> String {
    evaluate(raw, &FormatOptions::default()).response()
}

/// Runs the handler of the intent.
fn answer(text: &str, intent: Intent, options: &FormatOptions) -> Result<String, Error> {
    match intent {
        Intent::Arithmetic => arithmetic(text, options),
        Intent::LinearEquation | Intent::QuadraticEquation => {
            solve::solve(text).map(|solution| solution.render(options.markup))
        },
        Intent::WordEquation => word_equation(text, options),
        Intent::Evaluate => evaluate_at(text),
        Intent::Statistics(kind) => statistics(text, kind, options),
        Intent::Combinatorics(kind) => combinatorics(text, kind),
        Intent::Logarithm => logarithm(text, options),
        Intent::SquareRoot => square_root(text, options),
        Intent::BaseConversion => base(text),
        Intent::Perimeter => perimeter(text, options),
        Intent::PerfectSquare => perfect_square(text),
        Intent::Descriptive => descriptive(text, options),
        Intent::Integral => integral(text, options),
        Intent::Derivative => derivative(text),
        Intent::WordProblem(kind) => word_problem(text, kind, options),
        Intent::Unknown => Err(unknown(text)),
    }
}

/// Parses a capture group, or returns an [`UnparsedQuery`] error.
fn captured<T: FromStr>(
    caps: &Captures,
    index: usize,
    operation: &'static str,
    example: &'static str,
) -> Result<T, Error> {
    caps.get(index)
        .and_then(|m| m.as_str().parse().ok())
        .ok_or_else(|| Error::spanless(UnparsedQuery { operation, example }))
}

/// Returns the span of a capture group.
fn span_of(m: Option<Match>) -> Range<usize> {
    m.map_or(0..0, |m| m.range())
}

/// Returns the first two numbers of the query, or an [`InsufficientOperands`] error.
fn two_numbers(text: &str) -> Result<(f64, f64), Error> {
    let numbers = extract_numbers(text);
    match numbers[..] {
        [a, b, ..] => Ok((a, b)),
        _ => Err(Error::spanless(InsufficientOperands { needed: 2, found: numbers.len() })),
    }
}

fn arithmetic(text: &str, options: &FormatOptions) -> Result<String, Error> {
    let source = find_arithmetic(text).ok_or_else(|| Error::spanless(UnparsedQuery {
        operation: "arithmetic",
        example: "3 + 5",
    }))?;

    // spans of a phrased expression do not correspond to the query
    let relocate = |err: Error| match &source {
        ArithmeticSource::Written { offset, .. } => err.offset(*offset),
        ArithmeticSource::Phrased(_) => Error { spans: Vec::new(), ..err },
    };

    let expr = Parser::new(source.expr()).try_parse_full::<Expr>().map_err(relocate)?;
    let value = expr.eval_default().map_err(relocate)?;
    Ok(format!("Let's compute: {} = {}", expr, options.fixed(value)))
}

fn word_equation(text: &str, options: &FormatOptions) -> Result<String, Error> {
    const EXAMPLE: &str = "a number plus 5 equals 12";
    let caps = WORD_EQUATION.captures(text).ok_or_else(|| Error::spanless(UnparsedQuery {
        operation: "word equation",
        example: EXAMPLE,
    }))?;
    let operand: f64 = captured(&caps, 2, "word equation", EXAMPLE)?;
    let result: f64 = captured(&caps, 3, "word equation", EXAMPLE)?;
    let operand_span = span_of(caps.get(2));

    let number = match &caps[1] {
        "plus" => Fraction::new(result - operand, 1.0)?,
        "minus" => Fraction::new(result + operand, 1.0)?,
        "divided by" if operand == 0.0 => return Err(Error::new(vec![operand_span], DivisionByZero)),
        "divided by" => Fraction::new(result * operand, 1.0)?,
        _ => Fraction::new(result, operand).map_err(|err| Error { spans: vec![operand_span], ..err })?,
    };
    Ok(format!("Solving: the number is {}", number.render(options.markup)))
}

fn evaluate_at(text: &str) -> Result<String, Error> {
    const EXAMPLE: &str = "evaluate x^2 + 3x at x = 2";
    let caps = BINDING.captures(text).ok_or_else(|| Error::spanless(UnparsedQuery {
        operation: "evaluate",
        example: EXAMPLE,
    }))?;
    let value: f64 = captured(&caps, 1, "evaluate", EXAMPLE)?;
    let binding_start = span_of(caps.get(0)).start;

    let before = &text[..binding_start];
    let start = EVALUATE_PREFIX.find(before).map_or(0, |m| m.end());
    let body = before[start..].trim_end().trim_end_matches(',');

    let expr = Parser::new(body).try_parse_full::<Expr>().map_err(|err| err.offset(start))?;
    let result = expr.eval(&Ctxt::with_x(value)).map_err(|err| err.offset(start))?;
    Ok(format!("Evaluating {} at x = {}: {}", expr, fmt_num(value), fmt_num(result)))
}

fn statistics(text: &str, kind: StatKind, options: &FormatOptions) -> Result<String, Error> {
    let values = extract_numbers(text);
    let result = kind.evaluate(&values, options)?;
    let listed = values.iter()
        .map(|value| fmt_num(*value))
        .collect::<Vec<_>>()
        .join(", ");
    Ok(format!("The {} of {} is {}", kind.name(), listed, result))
}

fn combinatorics(text: &str, kind: CombKind) -> Result<String, Error> {
    let (n, k) = two_numbers(text)?;
    kind.evaluate(n, k)
}

/// Applies a builtin function to a number, for queries such as `ln(2)` and `√16`.
fn apply_builtin(name: &str, arg: f64, arg_span: Range<usize>) -> Result<f64, Error> {
    let ctxt = Ctxt::default();
    let builtin = ctxt.get_func(name)
        .ok_or_else(|| Error::spanless(UnparsedQuery { operation: "function", example: "ln(2)" }))?;
    builtin.eval(arg).ok_or_else(|| Error::new(vec![arg_span], OutOfDomain {
        function: name.to_string(),
        value: arg,
        domain: builtin.domain.describe(),
    }))
}

fn logarithm(text: &str, options: &FormatOptions) -> Result<String, Error> {
    const EXAMPLE: &str = "ln(2)";
    let options = FormatOptions { decimals: LOG_DECIMALS, ..*options };

    if let Some(caps) = LOGARITHM_BASE.captures(text) {
        let base: f64 = captured(&caps, 1, "logarithm", EXAMPLE)?;
        let arg: f64 = captured(&caps, 2, "logarithm", EXAMPLE)?;
        if base <= 0.0 || base == 1.0 {
            return Err(Error::new(vec![span_of(caps.get(1))], OutOfDomain {
                function: "log base".to_string(),
                value: base,
                domain: "positive and not 1",
            }));
        }
        let numerator = apply_builtin("ln", arg, span_of(caps.get(2)))?;
        let value = numerator / base.ln();
        return Ok(format!("Computing: log_{}({}) = {}", fmt_num(base), fmt_num(arg), options.fixed(value)));
    }

    let caps = LOGARITHM.captures(text).ok_or_else(|| Error::spanless(UnparsedQuery {
        operation: "logarithm",
        example: EXAMPLE,
    }))?;
    let name = &caps[1];
    let arg: f64 = captured(&caps, 2, "logarithm", EXAMPLE)?;
    let value = apply_builtin(name, arg, span_of(caps.get(2)))?;
    Ok(format!("Computing: {}({}) = {}", name, fmt_num(arg), options.fixed(value)))
}

fn square_root(text: &str, options: &FormatOptions) -> Result<String, Error> {
    const EXAMPLE: &str = "√16";
    let caps = SQUARE_ROOT.captures(text).ok_or_else(|| Error::spanless(UnparsedQuery {
        operation: "square root",
        example: EXAMPLE,
    }))?;
    let arg: f64 = captured(&caps, 1, "square root", EXAMPLE)?;
    let value = apply_builtin("sqrt", arg, span_of(caps.get(1)))?;
    Ok(format!("Computing: √{} = {}", fmt_num(arg), options.fixed(value)))
}

/// Parses a base, saturating so that an absurdly large base is reported as unsupported.
fn base_of(m: Option<Match>) -> (u32, Range<usize>) {
    let base = m.map_or(0, |m| m.as_str().parse().unwrap_or(u32::MAX));
    (base, span_of(m))
}

fn digits_of<'a>(caps: &Captures<'a>, index: usize) -> Digits<'a> {
    let m = caps.get(index);
    Digits {
        digits: m.map_or("", |m| m.as_str()),
        span: span_of(m),
    }
}

fn base(text: &str) -> Result<String, Error> {
    const EXAMPLE: &str = "convert 1010 base 2 to base 10";
    if let Some(caps) = BASE_CONVERSION.captures(text) {
        return radix::convert(digits_of(&caps, 1), base_of(caps.get(2)), base_of(caps.get(3)));
    }

    let caps = BASE_ARITHMETIC.captures(text).ok_or_else(|| Error::spanless(UnparsedQuery {
        operation: "base",
        example: EXAMPLE,
    }))?;
    let op = caps[2].chars()
        .next()
        .and_then(RadixOp::from_symbol)
        .ok_or_else(|| Error::spanless(UnparsedQuery { operation: "base", example: EXAMPLE }))?;
    radix::compute(digits_of(&caps, 1), op, digits_of(&caps, 3), base_of(caps.get(4)))
}

fn perimeter(text: &str, options: &FormatOptions) -> Result<String, Error> {
    let numbers = extract_numbers(text);
    let needs = |needed: usize| -> Result<(), Error> {
        if numbers.len() < needed {
            Err(Error::spanless(InsufficientOperands { needed, found: numbers.len() }))
        } else {
            Ok(())
        }
    };

    let shape = if text.contains("rectangle") {
        needs(2)?;
        Shape::Rectangle { width: numbers[0], height: numbers[1] }
    } else if text.contains("triangle") {
        needs(3)?;
        Shape::Triangle { a: numbers[0], b: numbers[1], c: numbers[2] }
    } else if text.contains("square") {
        needs(1)?;
        Shape::Square { side: numbers[0] }
    } else if text.contains("circle") || text.contains("circumference") {
        needs(1)?;
        if text.contains("diameter") {
            Shape::Circle { radius: numbers[0] / 2.0 }
        } else {
            Shape::Circle { radius: numbers[0] }
        }
    } else {
        return Err(Error::spanless(UnparsedQuery {
            operation: "perimeter",
            example: "perimeter of rectangle with sides 5 and 3",
        }));
    };

    shape.describe(options)
}

fn perfect_square(text: &str) -> Result<String, Error> {
    const EXAMPLE: &str = "find integers n such that n^2 + 3n + 5 is a perfect square";
    let caps = PERFECT_SQUARE.captures(text).ok_or_else(|| Error::spanless(UnparsedQuery {
        operation: "perfect square",
        example: EXAMPLE,
    }))?;
    let signed = |sign: usize, magnitude: usize| -> Result<i64, Error> {
        let magnitude: i64 = captured(&caps, magnitude, "perfect square", EXAMPLE)?;
        Ok(if &caps[sign] == "-" { -magnitude } else { magnitude })
    };
    Ok(number_theory::perfect_squares(signed(1, 2)?, signed(3, 4)?))
}

/// Reads the number of digits of a descriptive number, written as a word or in digits.
fn digit_count(word: &str) -> Option<u32> {
    const WORDS: [&str; 10] = ["one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten"];
    WORDS.iter()
        .position(|w| *w == word)
        .map(|i| i as u32 + 1)
        .or_else(|| word.parse().ok())
        .filter(|count| (1..=MAX_DIGITS).contains(count))
}

/// Computes the descriptive number named by a match of [`DIGIT_NUMBER`].
fn digit_number(caps: &Captures) -> Result<Integer, Error> {
    let count = digit_count(&caps[2]).ok_or_else(|| Error::new(vec![span_of(caps.get(2))], UnparsedQuery {
        operation: "descriptive number",
        example: "largest two-digit number",
    }))?;
    let largest = matches!(&caps[1], "largest" | "greatest" | "biggest");
    Ok(match (largest, count) {
        (true, count) => Integer::from(Integer::u_pow_u(10, count)) - 1,
        (false, 1) => Integer::new(),
        (false, count) => Integer::from(Integer::u_pow_u(10, count - 1)),
    })
}

fn descriptive(text: &str, options: &FormatOptions) -> Result<String, Error> {
    let phrases = DIGIT_NUMBER.captures_iter(text).take(2).collect::<Vec<_>>();
    match &phrases[..] {
        [only] => Ok(format!(
            "The {} {}-digit number is {}",
            &only[1],
            &only[2],
            digit_number(only)?,
        )),
        [first, second] => {
            let a = digit_number(first)?;
            let b = digit_number(second)?;
            let between_start = span_of(first.get(0)).end;
            let between = symbolize(&text[between_start..span_of(second.get(0)).start]);
            let op = between.chars()
                .find_map(RadixOp::from_symbol)
                .ok_or_else(|| Error::spanless(UnparsedQuery {
                    operation: "descriptive number",
                    example: "largest two-digit number minus smallest two-digit number",
                }))?;

            let result = match op {
                RadixOp::Add => Integer::from(&a + &b).to_string(),
                RadixOp::Sub => Integer::from(&a - &b).to_string(),
                RadixOp::Mul => Integer::from(&a * &b).to_string(),
                RadixOp::Div if b == 0 => {
                    return Err(Error::new(vec![span_of(second.get(0))], DivisionByZero));
                },
                RadixOp::Div => options.fixed(a.to_f64() / b.to_f64()),
            };
            Ok(format!("Let's compute: {} {} {} = {}", a, op.symbol(), b, result))
        },
        _ => Err(Error::spanless(UnparsedQuery {
            operation: "descriptive number",
            example: "largest two-digit number",
        })),
    }
}

/// Returns the text after a keyword match, and its offset in the query.
fn after<'a>(text: &'a str, keyword: Match) -> (&'a str, usize) {
    (&text[keyword.end()..], keyword.end())
}

/// Removes trailing words and punctuation from the body of a calculus query.
fn trim_noise(body: &str) -> &str {
    TRAILING_NOISE.find(body).map_or(body, |m| &body[..m.start()])
}

/// Wraps an expression in parentheses unless it already is.
fn parenthesize(expr: &str) -> String {
    if expr.starts_with('(') && expr.ends_with(')') {
        expr.to_string()
    } else {
        format!("({})", expr)
    }
}

fn integral(text: &str, options: &FormatOptions) -> Result<String, Error> {
    let keyword = INTEGRAL_KEYWORD.find(text).ok_or_else(|| Error::spanless(UnparsedQuery {
        operation: "integral",
        example: "∫x^2 dx",
    }))?;
    let (rest, offset) = after(text, keyword);

    let (body, offset, bounds) = match BOUNDS.captures(rest) {
        Some(caps) => {
            let a: f64 = captured(&caps, 1, "integral", "integrate x^2 from 0 to 3")?;
            let b: f64 = captured(&caps, 2, "integral", "integrate x^2 from 0 to 3")?;
            let whole = span_of(caps.get(0));
            if rest[..whole.start].trim().is_empty() {
                // the bounds come first, as in `integrate from 0 to 3 x^2 dx`
                (&rest[whole.end..], offset + whole.end, Some((a, b)))
            } else {
                (&rest[..whole.start], offset, Some((a, b)))
            }
        },
        None => (rest, offset, None),
    };
    let body = trim_noise(body);

    let result = calculus::integral_with(body, bounds, options).map_err(|err| err.offset(offset))?;
    Ok(format!("∫{} dx = {}", calculus::strip_differential(body).trim_start(), result))
}

fn derivative(text: &str) -> Result<String, Error> {
    let keyword = DERIVATIVE_KEYWORD.find(text).ok_or_else(|| Error::spanless(UnparsedQuery {
        operation: "derivative",
        example: "derivative of x^3",
    }))?;
    let (body, offset) = after(text, keyword);
    let body = trim_noise(body);

    let result = calculus::derivative(body).map_err(|err| err.offset(offset))?;
    Ok(format!("d/dx{} = {}", parenthesize(body.trim()), result))
}

fn word_problem(text: &str, kind: WordProblemKind, options: &FormatOptions) -> Result<String, Error> {
    let (a, b) = two_numbers(text)?;
    Ok(match kind {
        WordProblemKind::Subtract => format!("Subtracting: {} - {} = {}", fmt_num(a), fmt_num(b), fmt_num(a - b)),
        WordProblemKind::Multiply => format!("Multiplying: {} × {} = {}", fmt_num(a), fmt_num(b), fmt_num(a * b)),
        WordProblemKind::Divide if b == 0.0 => return Err(Error::spanless(DivisionByZero)),
        WordProblemKind::Divide => {
            format!("Dividing: {} ÷ {} = {}", fmt_num(a), fmt_num(b), options.fixed(a / b))
        },
    })
}

/// Builds the error for an unrecognized query, suggesting keywords that are spelled like words
/// of the query.
fn unknown(text: &str) -> Error {
    let mut suggestions: Vec<String> = Vec::new();
    let words = text.split(|c: char| !c.is_alphabetic()).filter(|word| word.chars().count() >= 4);
    for word in words {
        for keyword in VOCABULARY {
            let distance = keyword.split(' ')
                .map(|part| levenshtein(word, part))
                .min()
                .unwrap_or(usize::MAX);
            if (1..=2).contains(&distance) && !suggestions.iter().any(|s| s == keyword) {
                suggestions.push(keyword.to_string());
            }
        }
    }
    suggestions.truncate(3);
    Error::spanless(UnknownIntent { suggestions })
}

#[cfg(test)]
mod tests {
    use crate::error::{
        DivergentIntegral,
        InsufficientData,
        InvalidDigits,
        InvalidEquation,
        InvalidFormat,
        InvalidRange,
        TooManyItems,
        UndefinedVariable,
        UnsupportedForm,
    };
    use pretty_assertions::assert_eq;
    use super::*;

    fn respond(query: &str) -> String {
        evaluate_query(query)
    }

    fn fail(query: &str) -> Error {
        match evaluate(query, &FormatOptions::default()).outcome {
            Ok(result) => panic!("expected `{}` to fail, got `{}`", query, result),
            Err(err) => err,
        }
    }

    #[test]
    fn arithmetic_matches_direct_computation() {
        for (a, op, b) in [(3.0, '+', 5.0), (10.0, '-', 4.5), (6.0, '*', 7.0), (7.0, '/', 2.0)] {
            let expected = match op {
                '+' => a + b,
                '-' => a - b,
                '*' => a * b,
                _ => a / b,
            };
            assert_eq!(
                respond(&format!("{} {} {}", a, op, b)),
                format!("Let's compute: {} {} {} = {:.2}", a, op, b, expected),
            );
        }
    }

    #[test]
    fn arithmetic_words() {
        assert_eq!(respond("What is 12 times 4?"), "Let's compute: 12 * 4 = 48.00");
        assert_eq!(respond("10 divided by 4"), "Let's compute: 10 / 4 = 2.50");
        assert_eq!(respond("subtract 3 from 10"), "Let's compute: 10 - 3 = 7.00");
        assert_eq!(respond("2 + 3 * 4"), "Let's compute: 2 + 3 * 4 = 14.00");
    }

    #[test]
    fn division_by_zero() {
        assert_eq!(respond("7 / 0"), "Error: Division by zero");
        let err = fail("what is 7 / 0");
        assert_eq!(err.spans, vec![12..13]);
    }

    #[test]
    fn equations() {
        assert_eq!(respond("solve 2x + 4 = 10"), "x = 3");
        assert_eq!(respond("Solv x^2 - 4 = 0"), "x = 2 or x = -2");
        assert_eq!(respond("solve x^2 - 2x + 1 = 0"), "x = 1");
        assert_eq!(respond("solve x^2 + 1 = 0"), "x = 0 ± 1i");
        assert!(fail("solve x^3 = 8").is::<InvalidEquation>());
    }

    #[test]
    fn quadratics_with_coefficients() {
        for query in ["solve 2x^2 - 8 = 0", "solve 2x² - 8 = 0"] {
            let answer = evaluate(query, &FormatOptions::default());
            assert_eq!(answer.intent, Intent::QuadraticEquation, "classifying `{}`", query);
            assert_eq!(answer.response(), "x = 2 or x = -2");
        }
    }

    #[test]
    fn latex_equations() {
        let options = FormatOptions { markup: crate::fmt::Markup::Latex, ..Default::default() };
        assert_eq!(evaluate("solve 3x = 1", &options).response(), "x = \\frac{1}{3}");
    }

    #[test]
    fn word_equations() {
        assert_eq!(respond("a number plus 5 equals 12"), "Solving: the number is 7");
        assert_eq!(respond("a number times 3 is 4"), "Solving: the number is 4/3");
        assert_eq!(respond("a number divided by 2 is 9"), "Solving: the number is 18");
        assert!(fail("a number times 0 is 4").is::<DivisionByZero>());
    }

    #[test]
    fn evaluate_expression() {
        assert_eq!(respond("evaluate x^2 + 3x at x = 2"), "Evaluating x^2 + 3x at x = 2: 10");
        assert_eq!(respond("what is 2x - 1 when x = -3"), "Evaluating 2x - 1 at x = -3: -7");
        let err = fail("evaluate y + 1 at x = 2");
        assert!(err.is::<UndefinedVariable>());
        assert_eq!(err.spans, vec![9..10]);
    }

    #[test]
    fn statistics_responses() {
        assert_eq!(respond("avrg of 4 and 6"), "The mean of 4, 6 is 5.00");
        assert_eq!(respond("median of 1, 2, 3, 4"), "The median of 1, 2, 3, 4 is 2.50");
        assert_eq!(respond("mode of 1, 1, 2"), "The mode of 1, 1, 2 is 1");
        assert_eq!(respond("range of 3, 10, 4"), "The range of 3, 10, 4 is 7");
        assert_eq!(respond("biggest of 3, 9, 2"), "The maximum of 3, 9, 2 is 9");
        assert!(fail("std dev of 5").is::<InsufficientData>());
    }

    #[test]
    fn combinatorics_responses() {
        assert_eq!(respond("5 choose 2"), "C(5, 2) = 10");
        assert_eq!(respond("permutations of 5 and 2"), "P(5, 2) = 20");
        assert!(fail("combinations of 5 and 6").is::<InvalidRange>());
        assert!(fail("combinations of 5").is::<InsufficientOperands>());
        assert!(fail("permutations of 4000000000 and 4000000000").is::<TooManyItems>());
    }

    #[test]
    fn logarithms_and_roots() {
        assert_eq!(respond("ln(2)"), "Computing: ln(2) = 0.6931");
        assert_eq!(respond("log(1000)"), "Computing: log(1000) = 3.0000");
        assert_eq!(respond("log base 2 of 8"), "Computing: log_2(8) = 3.0000");
        assert_eq!(respond("√16"), "Computing: √16 = 4.00");
        assert_eq!(respond("square root of 2"), "Computing: √2 = 1.41");
        let err = fail("ln(-1)");
        assert!(err.is::<OutOfDomain>());
        assert_eq!(err.spans, vec![3..5]);
        assert!(fail("sqrt(-4)").is::<OutOfDomain>());
    }

    #[test]
    fn bases() {
        assert_eq!(respond("convert 1010 base 2 to base 10"), "Converting 1010 from base 2 to base 10: 10");
        assert_eq!(respond("101 + 11 base 2"), "Computing in base 2: 101 + 11 = 1000");
        let err = fail("convert 1012 base 2 to base 10");
        assert!(err.is::<InvalidDigits>());
        assert_eq!(err.spans, vec![8..12]);
        assert!(fail("what base is this").is::<UnparsedQuery>());
    }

    #[test]
    fn perimeters() {
        assert_eq!(
            respond("perimeter of rectangle with sides 5 and 3"),
            "Perimeter of rectangle: 2(5 + 3) = 16.00",
        );
        assert_eq!(
            respond("circumference of a circle with radius 2"),
            "Circumference of circle: 2π × 2 ≈ 12.57",
        );
        assert!(fail("perimeter of triangle with sides 3 and 4").is::<InsufficientOperands>());
        assert!(fail("perimeter of a hexagon").is::<UnparsedQuery>());
    }

    #[test]
    fn perfect_squares() {
        assert_eq!(
            respond("find integers n such that n^2 + 3n + 5 is a perfect square"),
            "Let's find integers n such that n^2 + 3n + 5 is a perfect square. Solutions: n = -4, 1",
        );
    }

    #[test]
    fn descriptive_numbers() {
        assert_eq!(respond("largest two digit number"), "The largest two-digit number is 99");
        assert_eq!(respond("smallest 3 digit number"), "The smallest 3-digit number is 100");
        assert_eq!(respond("smallest one-digit number"), "The smallest one-digit number is 0");
        assert_eq!(
            respond("largest two digited number minus smallest two digited number"),
            "Let's compute: 99 - 10 = 89",
        );
    }

    #[test]
    fn calculus_responses() {
        assert_eq!(respond("∫x^2 dx"), "∫x^2 dx = x^3/3 + C");
        assert_eq!(respond("intergrate sin(x)cos(x) dx"), "∫sin(x)cos(x) dx = sin^2(x)/2 + C");
        assert_eq!(respond("integrate x^2 from 0 to 3"), "∫x^2 dx = [x^3/3] from 0 to 3 = 9.00");
        assert_eq!(respond("derivative of x^3"), "d/dx(x^3) = 3x^2");
        assert_eq!(respond("d/dx sin(x)"), "d/dx(sin(x)) = cos(x)");
        assert!(fail("∫1/x dx from -1 to 1").is::<DivergentIntegral>());

        let err = fail("∫tan(x) dx");
        assert!(err.is::<UnsupportedForm>());
        let start = "∫".len();
        assert_eq!(err.spans, vec![start..start + 6]);
    }

    #[test]
    fn word_problems() {
        assert_eq!(
            respond("I had 10 appels and gave 3 away. How many are left?"),
            "Subtracting: 10 - 3 = 7",
        );
        assert_eq!(respond("3 pens cost 2 dollars each"), "Multiplying: 3 × 2 = 6");
        assert_eq!(respond("10 cookies split between 4 friends"), "Dividing: 10 ÷ 4 = 2.50");
        assert!(fail("5 cookies split between 0 friends").is::<DivisionByZero>());
        assert!(fail("how many are left").is::<InsufficientOperands>());
    }

    #[test]
    fn unknown_queries() {
        assert_eq!(
            respond("hello"),
            r#"Error: Sorry, I don't recognize that command. Try something like "solve 2x + 4 = 10", "mean of 4, 6, 9", or "∫x^2 dx"."#,
        );
        let err = fail("perimter");
        assert!(err.is::<UnknownIntent>());
        assert_eq!(err.to_string(), r#"Error: Sorry, I don't recognize that command. Did you mean "perimeter"?"#);
    }

    #[test]
    fn never_panics_on_odd_input() {
        for query in ["", "   ", "=", "solve =", "∫", "d/dx", "(((", "mean of", "1e999 + 1", "x^2 at x = 1e400"] {
            let _ = evaluate_query(query);
        }
    }

    #[test]
    fn missing_equals_is_invalid_format() {
        assert!(solve::solve("solve 2x + 4").unwrap_err().is::<InvalidFormat>());
    }
}
