use crate::{
    parser::{ast::{expr::Expr, literal::LitSym}, error::{kind, Error}, Parse, Parser},
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A function call, such as `sin(x)` or `log(100)`. Square roots written with the radical sign,
/// such as `√16`, are also represented as calls to `sqrt`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Call {
    /// The name of the function to call.
    pub name: LitSym,

    /// The arguments to the function.
    pub args: Vec<Expr>,

    /// The region of the source code that this function call was parsed from.
    pub span: Range<usize>,

    /// The region of the source code that includes the parentheses of the call. For radical
    /// notation, this is the span of the operand.
    pub paren_span: Range<usize>,
}

impl Call {
    /// Returns the single argument of this call, if it has exactly one.
    pub fn single_arg(&self) -> Option<&Expr> {
        match self.args.as_slice() {
            [arg] => Some(arg),
            _ => None,
        }
    }
}

impl Parse for Call {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let name = input.try_parse::<LitSym>()?;
        let open = input.expect(&[TokenKind::OpenParen])?;

        let mut args = Vec::new();
        if !input.at(TokenKind::CloseParen) {
            loop {
                args.push(input.try_parse::<Expr>()?);
                if input.at(TokenKind::Comma) {
                    input.next_token()?;
                } else {
                    break;
                }
            }
        }

        let close = input.expect(&[TokenKind::CloseParen])
            .map_err(|_| Error::new(vec![open.span.clone()], kind::UnclosedParenthesis { opening: true }))?;

        Ok(Self {
            span: name.span.start..close.span.end,
            paren_span: open.span.start..close.span.end,
            name,
            args,
        })
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", arg)?;
        }
        write!(f, ")")
    }
}
