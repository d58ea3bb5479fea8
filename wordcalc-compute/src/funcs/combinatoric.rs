//! Counting functions.

use crate::error::{Error, InvalidRange, TooManyItems};
use rug::Integer;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Computes a partial factorial of an integer from `n` to `k`, where `k` is exclusive (i.e.
/// `n * (n - 1) * ... * (k + 1)`).
fn partial_factorial(n: u32, k: u32) -> Integer {
    (k + 1..=n).fold(Integer::from(1), |acc, i| acc * i)
}

/// The largest set whose combinations and permutations are counted.
pub const MAX_ITEMS: u32 = 10_000;

/// Converts the arguments of a counting function to integers, checking that
/// `0 <= k <= n <= MAX_ITEMS`.
fn checked_args(n: f64, k: f64) -> Result<(u32, u32), Error> {
    let is_whole = |value: f64| value.fract() == 0.0 && value >= 0.0;
    if !is_whole(n) || !is_whole(k) || k > n {
        return Err(Error::spanless(InvalidRange { n, k }));
    }
    if n > MAX_ITEMS as f64 {
        return Err(Error::spanless(TooManyItems { n, limit: MAX_ITEMS }));
    }
    Ok((n as u32, k as u32))
}

/// Combinations function. Returns the number of ways to choose `k` items from `n` items, where
/// the order of the items does not matter.
#[derive(Debug)]
pub struct Ncr;

impl Ncr {
    /// Computes `n choose k` with the multiplicative formula, multiplying and dividing one factor
    /// at a time so that no factorial is ever computed in full. `k` must not exceed `n`.
    pub fn eval_static(n: u32, k: u32) -> Integer {
        let k = if k > n / 2 { n - k } else { k };
        (1..=k).fold(Integer::from(1), |acc, i| {
            // exact: the product of `i` consecutive integers is divisible by `i!`
            acc * (n - k + i) / i
        })
    }
}

/// Permutations function. Returns the number of ways to choose `k` items from `n` items, where
/// the order of the items does matter. `k` must not exceed `n`.
#[derive(Debug)]
pub struct Npr;

impl Npr {
    pub fn eval_static(n: u32, k: u32) -> Integer {
        partial_factorial(n, n - k)
    }
}

/// Returns `n choose k`, or an [`InvalidRange`] error unless `n` and `k` are whole numbers with
/// `0 <= k <= n`.
pub fn combinations(n: f64, k: f64) -> Result<Integer, Error> {
    let (n, k) = checked_args(n, k)?;
    Ok(Ncr::eval_static(n, k))
}

/// Returns the number of `k`-permutations of `n` items, or an [`InvalidRange`] error unless `n`
/// and `k` are whole numbers with `0 <= k <= n`.
pub fn permutations(n: f64, k: f64) -> Result<Integer, Error> {
    let (n, k) = checked_args(n, k)?;
    Ok(Npr::eval_static(n, k))
}

/// A counting question that can be asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CombKind {
    Combinations,
    Permutations,
}

impl CombKind {
    /// Computes the count and formats it as `C(n, k) = count` or `P(n, k) = count`.
    pub fn evaluate(self, n: f64, k: f64) -> Result<String, Error> {
        let (symbol, count) = match self {
            CombKind::Combinations => ("C", combinations(n, k)?),
            CombKind::Permutations => ("P", permutations(n, k)?),
        };
        Ok(format!("{}({}, {}) = {}", symbol, n, k, count))
    }
}
