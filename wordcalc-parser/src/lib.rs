//! Tokenizer and parsers for the mathematical fragments of a query.
//!
//! A query such as `solve 2x + 4 = 10` or `evaluate x^2 + 3x at x = 2` is mostly prose; the
//! dispatcher in `wordcalc-compute` cuts out the mathematical part and hands it to one of the two
//! parsers in this crate:
//!
//! - [`parser::ast::poly::Polynomial`] parses one side of an equation into signed terms of degree
//! at most two, which are summed into [`parser::ast::poly::Coefficients`].
//! - [`parser::ast::expr::Expr`] parses a general arithmetic expression (with implicit
//! multiplication and function calls) into a tree that can be evaluated safely or matched against
//! calculus templates.

pub mod parser;
pub mod tokenizer;
