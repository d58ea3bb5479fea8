use crate::{
    error::Error,
    numerical::{ctxt::Ctxt, eval::Eval},
};
use wordcalc_parser::parser::{ast::unary::Unary, op::UnaryOpKind};

impl Eval for Unary {
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        let operand = self.operand.eval(ctxt)?;
        match self.op.kind {
            UnaryOpKind::Neg => Ok(-operand),
        }
    }
}
