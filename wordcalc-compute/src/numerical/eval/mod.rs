mod binary;
mod call;
mod literal;
mod unary;

use crate::error::{Error, NonFiniteValue};
use std::ops::Range;
use super::ctxt::Ctxt;
use wordcalc_parser::parser::ast::expr::Expr;

/// Any type that can be evaluated to produce a number.
pub trait Eval {
    /// Evaluate the expression to produce a number, using the given context.
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error>;

    /// Evaluate the expression to produce a number, using the default context.
    fn eval_default(&self) -> Result<f64, Error> {
        self.eval(&Default::default())
    }
}

impl Eval for Expr {
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        match self {
            Expr::Literal(literal) => literal.eval(ctxt),
            Expr::Paren(paren) => paren.expr.eval(ctxt),
            Expr::Call(call) => call.eval(ctxt),
            Expr::Unary(unary) => unary.eval(ctxt),
            Expr::Binary(binary) => binary.eval(ctxt),
        }
    }
}

/// Returns the value if it is finite, or a [`NonFiniteValue`] error pointing at the span.
pub(crate) fn finite(value: f64, span: Range<usize>) -> Result<f64, Error> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::new(vec![span], NonFiniteValue))
    }
}
