//! Safe numerical evaluation of parsed expressions.
//!
//! Expressions come from [`wordcalc_parser::parser::ast::expr::Expr`] and are evaluated by walking
//! the tree with [`eval::Eval`]; nothing in a query is ever executed as code. Only the builtin
//! functions in [`builtin`] and the variables of a [`ctxt::Ctxt`] are available.

pub mod builtin;
pub mod ctxt;
pub mod eval;
