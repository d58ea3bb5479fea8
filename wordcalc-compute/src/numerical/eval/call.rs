use crate::{
    error::{ArgumentCount, Error, OutOfDomain, UndefinedFunction},
    numerical::{ctxt::Ctxt, eval::{finite, Eval}},
};
use wordcalc_parser::parser::ast::call::Call;

impl Eval for Call {
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        let name = self.name.name.as_str();
        let Some(builtin) = ctxt.get_func(name) else {
            return Err(Error::new(vec![self.name.span.clone()], UndefinedFunction {
                name: name.to_string(),
                suggestions: ctxt.get_similar_funcs(name)
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            }));
        };

        let Some(arg) = self.single_arg() else {
            return Err(Error::new(vec![self.span.clone()], ArgumentCount {
                name: name.to_string(),
                given: self.args.len(),
            }));
        };

        let value = arg.eval(ctxt)?;
        let result = builtin.eval(value).ok_or_else(|| {
            Error::new(vec![arg.span()], OutOfDomain {
                function: name.to_string(),
                value,
                domain: builtin.domain.describe(),
            })
        })?;

        finite(result, self.span.clone())
    }
}
