//! Descriptive statistics of a list of numbers.
//!
//! Every function takes the values in the order they were written and never reorders them;
//! functions that need sorted values sort a copy. An empty list is a [`NoData`] error rather than
//! `NaN`.

use crate::{
    error::{Error, InsufficientData, NoData},
    fmt::{fmt_num, FormatOptions},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Returns a [`NoData`] error if the list is empty.
fn non_empty(values: &[f64]) -> Result<&[f64], Error> {
    if values.is_empty() {
        Err(Error::spanless(NoData))
    } else {
        Ok(values)
    }
}

/// Returns a sorted copy of the values.
fn sorted(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Returns the sum of the values.
pub fn sum(values: &[f64]) -> Result<f64, Error> {
    Ok(non_empty(values)?.iter().sum())
}

/// Returns the arithmetic mean of the values.
pub fn mean(values: &[f64]) -> Result<f64, Error> {
    Ok(sum(values)? / values.len() as f64)
}

/// Returns the middle value, or the mean of the two middle values if there is an even number of
/// values.
pub fn median(values: &[f64]) -> Result<f64, Error> {
    let sorted = sorted(non_empty(values)?);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Ok(sorted[mid])
    }
}

/// Returns every value that appears the most times, in the order each first appears.
pub fn mode(values: &[f64]) -> Result<Vec<f64>, Error> {
    let mut counts: Vec<(f64, usize)> = Vec::new();
    for &value in non_empty(values)? {
        match counts.iter_mut().find(|(v, _)| *v == value) {
            Some((_, count)) => *count += 1,
            None => counts.push((value, 1)),
        }
    }

    let highest = counts.iter().map(|(_, count)| *count).max().unwrap_or(0);
    Ok(counts.into_iter()
        .filter(|(_, count)| *count == highest)
        .map(|(value, _)| value)
        .collect())
}

/// Returns the largest value.
pub fn max(values: &[f64]) -> Result<f64, Error> {
    Ok(non_empty(values)?.iter().copied().fold(f64::NEG_INFINITY, f64::max))
}

/// Returns the smallest value.
pub fn min(values: &[f64]) -> Result<f64, Error> {
    Ok(non_empty(values)?.iter().copied().fold(f64::INFINITY, f64::min))
}

/// Returns the difference between the largest and smallest values.
pub fn range(values: &[f64]) -> Result<f64, Error> {
    let sorted = sorted(non_empty(values)?);
    Ok(sorted[sorted.len() - 1] - sorted[0])
}

/// Returns the sample variance of the values, with Bessel's correction (dividing by `n - 1`).
pub fn sample_variance(values: &[f64]) -> Result<f64, Error> {
    sample_variance_of(values, "variance")
}

fn sample_variance_of(values: &[f64], statistic: &'static str) -> Result<f64, Error> {
    let mean = mean(values)?;
    if values.len() < 2 {
        return Err(Error::spanless(InsufficientData { statistic, needed: 2 }));
    }

    let squares = values.iter().map(|value| (value - mean).powi(2)).sum::<f64>();
    Ok(squares / (values.len() - 1) as f64)
}

/// Returns the sample standard deviation of the values.
pub fn sample_standard_deviation(values: &[f64]) -> Result<f64, Error> {
    sample_variance_of(values, "standard deviation").map(f64::sqrt)
}

/// A statistic that can be requested by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StatKind {
    Mean,
    Median,
    Mode,
    Range,
    Variance,
    StandardDeviation,
    Sum,
    Max,
    Min,
}

impl StatKind {
    /// Returns the name of the statistic as used in responses.
    pub fn name(self) -> &'static str {
        match self {
            StatKind::Mean => "mean",
            StatKind::Median => "median",
            StatKind::Mode => "mode",
            StatKind::Range => "range",
            StatKind::Variance => "variance",
            StatKind::StandardDeviation => "standard deviation",
            StatKind::Sum => "sum",
            StatKind::Max => "maximum",
            StatKind::Min => "minimum",
        }
    }

    /// Computes the statistic and formats it.
    ///
    /// Averages and spreads are rounded to the configured number of decimal places. The mode,
    /// range, sum, maximum, and minimum are formatted like the input values.
    pub fn evaluate(self, values: &[f64], options: &FormatOptions) -> Result<String, Error> {
        Ok(match self {
            StatKind::Mean => options.fixed(mean(values)?),
            StatKind::Median => options.fixed(median(values)?),
            StatKind::Variance => options.fixed(sample_variance(values)?),
            StatKind::StandardDeviation => options.fixed(sample_standard_deviation(values)?),
            StatKind::Mode => mode(values)?
                .into_iter()
                .map(fmt_num)
                .collect::<Vec<_>>()
                .join(", "),
            StatKind::Range => fmt_num(range(values)?),
            StatKind::Sum => fmt_num(sum(values)?),
            StatKind::Max => fmt_num(max(values)?),
            StatKind::Min => fmt_num(min(values)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;
    use pretty_assertions::assert_eq;
    use super::*;

    fn eval(kind: StatKind, values: &[f64]) -> String {
        kind.evaluate(values, &FormatOptions::default()).unwrap()
    }

    #[test]
    fn mean_of_two() {
        assert_eq!(eval(StatKind::Mean, &[4.0, 6.0]), "5.00");
    }

    #[test]
    fn median_even_and_odd() {
        assert_eq!(eval(StatKind::Median, &[1.0, 2.0, 3.0, 4.0]), "2.50");
        assert_eq!(eval(StatKind::Median, &[9.0, 1.0, 5.0]), "5.00");
    }

    #[test]
    fn median_does_not_reorder_input() {
        let values = [3.0, 1.0, 2.0];
        median(&values).unwrap();
        assert_eq!(values, [3.0, 1.0, 2.0]);
    }

    #[test]
    fn single_mode() {
        assert_eq!(eval(StatKind::Mode, &[1.0, 1.0, 2.0]), "1");
    }

    #[test]
    fn tied_modes() {
        assert_eq!(eval(StatKind::Mode, &[3.0, 1.0, 3.0, 1.0, 2.0]), "3, 1");
        assert_eq!(mode(&[2.5]).unwrap(), vec![2.5]);
    }

    #[test]
    fn spread() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_eq!(eval(StatKind::Range, &values), "7");
        assert_float_absolute_eq!(sample_variance(&values).unwrap(), 32.0 / 7.0);
        assert_eq!(eval(StatKind::StandardDeviation, &values), "2.14");
    }

    #[test]
    fn extremes_and_sum() {
        let values = [3.0, -1.5, 8.0];
        assert_eq!(eval(StatKind::Max, &values), "8");
        assert_eq!(eval(StatKind::Min, &values), "-1.5");
        assert_eq!(eval(StatKind::Sum, &values), "9.5");
    }

    #[test]
    fn insufficient_data() {
        let err = StatKind::StandardDeviation.evaluate(&[5.0], &FormatOptions::default()).unwrap_err();
        assert!(err.is::<InsufficientData>());
        assert!(sample_variance(&[5.0]).unwrap_err().is::<InsufficientData>());
    }

    #[test]
    fn no_data() {
        for kind in [StatKind::Mean, StatKind::Median, StatKind::Mode, StatKind::Range, StatKind::Max] {
            let err = kind.evaluate(&[], &FormatOptions::default()).unwrap_err();
            assert!(err.is::<NoData>(), "{:?} of an empty list", kind);
        }
        assert!(sample_standard_deviation(&[]).unwrap_err().is::<NoData>());
    }
}
