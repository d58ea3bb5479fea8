//! The computations behind each kind of query, independent of how the query was phrased.
//!
//! Each module takes already-extracted operands (a list of numbers, the body of an integral, the
//! digits of a number in some base) and returns either the rendered result or an [`Error`].
//!
//! [`Error`]: crate::error::Error

pub mod calculus;
pub mod combinatoric;
pub mod geometry;
pub mod number_theory;
pub mod radix;
pub mod statistics;
