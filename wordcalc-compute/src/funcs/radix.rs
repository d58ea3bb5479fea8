//! Conversion between bases, and arithmetic on numbers written in a base.

use crate::error::{DivisionByZero, Error, InvalidDigits, UnsupportedBase};
use rug::Integer;
use std::ops::Range;

/// Returns an [`UnsupportedBase`] error unless the base is between 2 and 36 inclusive.
fn check_base(base: u32, span: Range<usize>) -> Result<u32, Error> {
    if (2..=36).contains(&base) {
        Ok(base)
    } else {
        Err(Error::new(vec![span], UnsupportedBase { base }))
    }
}

/// Parses digits written in the given base. The span is where the digits appear in the query.
pub fn from_radix(digits: &str, base: u32, span: Range<usize>) -> Result<Integer, Error> {
    let base = check_base(base, span.clone())?;
    let invalid = || Error::new(vec![span.clone()], InvalidDigits { digits: digits.to_string(), base });

    // `from_str_radix` also accepts a sign and underscores, which are not digits
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(base)) {
        return Err(invalid());
    }
    Integer::from_str_radix(digits, base as i32).map_err(|_| invalid())
}

/// Formats an integer in the given base, with lowercase letters for digits above 9.
pub fn to_radix(value: &Integer, base: u32) -> String {
    value.to_string_radix(base as i32)
}

/// An arithmetic operation on two numbers written in a base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadixOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl RadixOp {
    /// Returns the operation written with the given symbol.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    /// Returns the symbol of the operation.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

/// A number written in a base, with the span of its digits in the query.
#[derive(Debug, Clone, PartialEq)]
pub struct Digits<'a> {
    pub digits: &'a str,
    pub span: Range<usize>,
}

/// Converts a number from one base to another.
///
/// The span of `from` and `to` are used to point at an unsupported base.
pub fn convert(
    number: Digits,
    from: (u32, Range<usize>),
    to: (u32, Range<usize>),
) -> Result<String, Error> {
    let from_base = check_base(from.0, from.1)?;
    let to_base = check_base(to.0, to.1)?;
    let value = from_radix(number.digits, from_base, number.span)?;
    Ok(format!(
        "Converting {} from base {} to base {}: {}",
        number.digits,
        from_base,
        to_base,
        to_radix(&value, to_base),
    ))
}

/// Computes `lhs op rhs` on two numbers written in the same base, writing the result in that
/// base.
///
/// Division that does not come out even is written as a quotient and a remainder.
pub fn compute(
    lhs: Digits,
    op: RadixOp,
    rhs: Digits,
    base: (u32, Range<usize>),
) -> Result<String, Error> {
    let radix = check_base(base.0, base.1)?;
    let a = from_radix(lhs.digits, radix, lhs.span.clone())?;
    let b = from_radix(rhs.digits, radix, rhs.span.clone())?;

    let result = match op {
        RadixOp::Add => to_radix(&Integer::from(&a + &b), radix),
        RadixOp::Sub => to_radix(&Integer::from(&a - &b), radix),
        RadixOp::Mul => to_radix(&Integer::from(&a * &b), radix),
        RadixOp::Div if b == 0 => return Err(Error::new(vec![rhs.span], DivisionByZero)),
        RadixOp::Div => {
            let (quotient, remainder) = a.div_rem(b);
            if remainder == 0 {
                to_radix(&quotient, radix)
            } else {
                format!("{} remainder {}", to_radix(&quotient, radix), to_radix(&remainder, radix))
            }
        },
    };

    Ok(format!("Computing in base {}: {} {} {} = {}", radix, lhs.digits, op.symbol(), rhs.digits, result))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn digits(digits: &str) -> Digits {
        Digits { digits, span: 0..digits.len() }
    }

    #[test]
    fn binary_to_decimal() {
        let result = convert(digits("1010"), (2, 0..0), (10, 0..0)).unwrap();
        assert_eq!(result, "Converting 1010 from base 2 to base 10: 10");
    }

    #[test]
    fn decimal_to_hex() {
        let result = convert(digits("255"), (10, 0..0), (16, 0..0)).unwrap();
        assert_eq!(result, "Converting 255 from base 10 to base 16: ff");
    }

    #[test]
    fn large_numbers() {
        let value = from_radix("ffffffffffffffffffffffff", 16, 0..0).unwrap();
        assert_eq!(to_radix(&value, 10), "79228162514264337593543950335");
    }

    #[test]
    fn invalid_digits() {
        let err = convert(Digits { digits: "102", span: 8..11 }, (2, 0..0), (10, 0..0)).unwrap_err();
        assert!(err.is::<InvalidDigits>());
        assert_eq!(err.spans, vec![8..11]);
        assert!(from_radix("-1", 10, 0..2).unwrap_err().is::<InvalidDigits>());
    }

    #[test]
    fn unsupported_base() {
        let err = convert(digits("10"), (1, 3..4), (10, 0..0)).unwrap_err();
        assert!(err.is::<UnsupportedBase>());
        assert_eq!(err.spans, vec![3..4]);
        assert!(convert(digits("10"), (10, 0..0), (37, 0..0)).unwrap_err().is::<UnsupportedBase>());
    }

    #[test]
    fn arithmetic_in_base() {
        assert_eq!(
            compute(digits("101"), RadixOp::Add, digits("11"), (2, 0..0)).unwrap(),
            "Computing in base 2: 101 + 11 = 1000",
        );
        assert_eq!(
            compute(digits("11"), RadixOp::Sub, digits("101"), (2, 0..0)).unwrap(),
            "Computing in base 2: 11 - 101 = -10",
        );
        assert_eq!(
            compute(digits("ff"), RadixOp::Mul, digits("2"), (16, 0..0)).unwrap(),
            "Computing in base 16: ff * 2 = 1fe",
        );
    }

    #[test]
    fn division_in_base() {
        assert_eq!(
            compute(digits("110"), RadixOp::Div, digits("10"), (2, 0..0)).unwrap(),
            "Computing in base 2: 110 / 10 = 11",
        );
        assert_eq!(
            compute(digits("111"), RadixOp::Div, digits("10"), (2, 0..0)).unwrap(),
            "Computing in base 2: 111 / 10 = 11 remainder 1",
        );
        let err = compute(digits("1"), RadixOp::Div, digits("0"), (2, 0..0)).unwrap_err();
        assert!(err.is::<DivisionByZero>());
    }
}
