//! Classification and evaluation of natural-language math queries.
//!
//! A query goes through three stages:
//!
//! 1. [`normalize`] lowercases it and corrects common misspellings and abbreviations
//! (`avrg` becomes `average`, `x²` becomes `x^2`).
//! 2. [`intent::classify`] decides what the query asks for by testing an ordered list of rules.
//! 3. The handler of that [`Intent`] extracts the operands with the same patterns the classifier
//! used, computes the result, and renders it as a response.
//!
//! [`evaluate`] runs all three stages and returns an [`Answer`], which keeps the normalized query
//! so that the spans of an [`error::Error`] can be highlighted in it. [`evaluate_query`] returns
//! only the response text.
//!
//! ```
//! use wordcalc_compute::evaluate_query;
//!
//! assert_eq!(evaluate_query("solve x^2 - 4 = 0"), "x = 2 or x = -2");
//! assert_eq!(evaluate_query("avrg of 4 and 6"), "The mean of 4, 6 is 5.00");
//! assert_eq!(evaluate_query("7 / 0"), "Error: Division by zero");
//! ```
//!
//! Evaluation has no state. A [`Session`] records a history of queries for front ends that need
//! one.

pub mod dispatch;
pub mod error;
pub mod fmt;
pub mod fraction;
pub mod funcs;
pub mod intent;
pub mod numbers;
pub mod numerical;
mod patterns;
pub mod session;
pub mod solve;
pub mod spell;

pub use dispatch::{evaluate, evaluate_query, Answer};
pub use fmt::{FormatOptions, Markup};
pub use intent::Intent;
pub use numbers::extract_numbers;
pub use session::{HistoryEntry, Session};
pub use spell::normalize;
