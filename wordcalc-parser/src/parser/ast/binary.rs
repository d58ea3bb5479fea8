use crate::parser::{
    ast::{expr::Expr, unary::Unary},
    error::Error,
    op::{BinOp, BinOpKind},
    Associativity,
    Parser,
    Precedence,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A binary expression, such as `1 + 2`. Binary expressions can include nested expressions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Binary {
    /// The left-hand side of the binary expression.
    pub lhs: Box<Expr>,

    /// The operator of the binary expression.
    pub op: BinOp,

    /// The right-hand side of the binary expression.
    pub rhs: Box<Expr>,

    /// The region of the source code that this binary expression was parsed from.
    pub span: Range<usize>,
}

impl Binary {
    /// Returns the span of the binary expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Parses binary operators following `lhs` for as long as they bind at least as tightly as
    /// `precedence`, returning the resulting expression.
    ///
    /// When there is no operator but a primary expression follows (`2x`, `sin(x)cos(x)`), the two
    /// are joined by implicit multiplication, which has the precedence of `*`.
    pub fn parse_expr(
        input: &mut Parser,
        mut lhs: Expr,
        precedence: Precedence,
    ) -> Result<Expr, Error> {
        while let Some(token) = input.current_token().cloned() {
            let op = match BinOp::from_token(&token) {
                Some(op) if op.precedence() >= precedence => {
                    input.next_token()?;
                    op
                },
                Some(_) => break,
                None if token.kind.starts_primary() && Precedence::Factor >= precedence => BinOp {
                    kind: BinOpKind::Mul,
                    implicit: true,
                    span: lhs.span().end..token.span.start,
                },
                None => break,
            };

            // a right-associative operator lets an operator of the same precedence claim the
            // right-hand side first, as in `2^3^2 = 2^(3^2)`
            let rhs_precedence = match op.associativity() {
                Associativity::Left => op.precedence().tighter(),
                Associativity::Right => op.precedence(),
            };
            let rhs = input.nested(|input| {
                let rhs = Unary::parse_or_lower(input)?;
                Self::parse_expr(input, rhs, rhs_precedence)
            })?;

            let span = lhs.span().start..rhs.span().end;
            lhs = Expr::Binary(Binary {
                lhs: Box::new(lhs),
                op,
                rhs: Box::new(rhs),
                span,
            });
        }

        Ok(lhs)
    }
}

impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.op.kind {
            BinOpKind::Mul if self.op.implicit => write!(f, "{}{}", self.lhs, self.rhs),
            BinOpKind::Exp => write!(f, "{}^{}", self.lhs, self.rhs),
            kind => write!(f, "{} {} {}", self.lhs, kind, self.rhs),
        }
    }
}
