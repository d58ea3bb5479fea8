use crate::{
    parser::{
        ast::{binary::Binary, call::Call, expr::Expr, literal::LitSym},
        error::Error,
        op::{UnaryOp, UnaryOpKind},
        Parser,
        Precedence,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A unary expression, such as `-x`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Unary {
    /// The operand of the unary expression.
    pub operand: Box<Expr>,

    /// The operator of the unary expression.
    pub op: UnaryOp,

    /// The region of the source code that this unary expression was parsed from.
    pub span: Range<usize>,
}

impl Unary {
    /// Parses a unary expression, or if there is no prefix operator, a primary expression.
    ///
    /// The operand of a prefix operator only extends over operators that bind more tightly than
    /// negation, so `-x^2` is `-(x^2)` while `-2 * 3` is `(-2) * 3`.
    pub fn parse_or_lower(input: &mut Parser) -> Result<Expr, Error> {
        match input.current_token().map(|token| token.kind) {
            Some(TokenKind::Sub) => {
                let op_token = input.next_token()?;
                let operand = Self::parse_operand(input)?;
                Ok(Expr::Unary(Self {
                    span: op_token.span.start..operand.span().end,
                    operand: Box::new(operand),
                    op: UnaryOp {
                        kind: UnaryOpKind::Neg,
                        span: op_token.span,
                    },
                }))
            },
            Some(TokenKind::Add) => {
                input.next_token()?;
                Self::parse_operand(input)
            },
            Some(TokenKind::Root) => {
                let root = input.next_token()?;
                let operand = Self::parse_operand(input)?;
                let span = root.span.start..operand.span().end;
                Ok(Expr::Call(Call {
                    name: LitSym {
                        name: "sqrt".to_string(),
                        span: root.span,
                    },
                    paren_span: operand.span(),
                    args: vec![operand],
                    span,
                }))
            },
            _ => Expr::parse_primary(input),
        }
    }

    /// Parses the operand of a prefix operator.
    fn parse_operand(input: &mut Parser) -> Result<Expr, Error> {
        input.nested(|input| {
            let operand = Self::parse_or_lower(input)?;
            Binary::parse_expr(input, operand, Precedence::Neg.tighter())
        })
    }
}

impl fmt::Display for Unary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.op.kind {
            UnaryOpKind::Neg => write!(f, "-{}", self.operand),
        }
    }
}
