use crate::{
    error::{DivisionByZero, Error},
    numerical::{ctxt::Ctxt, eval::{finite, Eval}},
};
use wordcalc_parser::parser::{ast::binary::Binary, op::BinOpKind};

impl Eval for Binary {
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        let left = self.lhs.eval(ctxt)?;
        let right = self.rhs.eval(ctxt)?;

        let value = match self.op.kind {
            BinOpKind::Exp => left.powf(right),
            BinOpKind::Mul => left * right,
            BinOpKind::Div => {
                if right == 0.0 {
                    return Err(Error::new(vec![self.rhs.span()], DivisionByZero));
                }
                left / right
            },
            BinOpKind::Add => left + right,
            BinOpKind::Sub => left - right,
        };

        finite(value, self.span())
    }
}
