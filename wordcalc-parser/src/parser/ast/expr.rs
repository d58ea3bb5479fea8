use crate::{
    parser::{
        ast::{binary::Binary, call::Call, literal::{Literal, LitNum, LitSym}, paren::Paren, unary::Unary},
        error::{kind, Error},
        Parse,
        Parser,
        Precedence,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents a general arithmetic expression.
///
/// Expressions are what the `evaluate` queries compute, and what the calculus templates are
/// matched against.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A literal value.
    Literal(Literal),

    /// A parenthesized expression, such as `(1 + 2)`.
    Paren(Paren),

    /// A function call, such as `sin(x)`.
    Call(Call),

    /// A unary operation, such as `-1`.
    Unary(Unary),

    /// A binary operation, such as `1 + 2`.
    Binary(Binary),
}

impl Expr {
    /// Returns the span of the expression.
    pub fn span(&self) -> Range<usize> {
        match self {
            Expr::Literal(literal) => literal.span(),
            Expr::Paren(paren) => paren.span.clone(),
            Expr::Call(call) => call.span.clone(),
            Expr::Unary(unary) => unary.span.clone(),
            Expr::Binary(binary) => binary.span.clone(),
        }
    }

    /// If this expression is an [`Expr::Paren`], returns the innermost expression in the
    /// parenthesized expression. Otherwise, returns `self`.
    pub fn innermost(&self) -> &Expr {
        match self {
            Expr::Paren(paren) => paren.innermost(),
            expr => expr,
        }
    }

    /// Returns the value of this expression if it is a number literal, or a negated number
    /// literal, possibly in parentheses.
    pub fn as_number(&self) -> Option<f64> {
        match self.innermost() {
            Expr::Literal(Literal::Number(num)) => Some(num.value),
            Expr::Unary(unary) => unary.operand.as_number().map(|value| -value),
            _ => None,
        }
    }

    /// Returns true if this expression is the symbol with the given name, possibly in
    /// parentheses.
    pub fn is_symbol(&self, name: &str) -> bool {
        matches!(self.innermost(), Expr::Literal(Literal::Symbol(sym)) if sym.name == name)
    }

    /// Parses a primary expression: a literal, a parenthesized expression, or a function call.
    ///
    /// A name directly followed by an opening parenthesis is a function call, except for the
    /// variable `x`, where `x(x + 1)` is implicit multiplication.
    pub fn parse_primary(input: &mut Parser) -> Result<Expr, Error> {
        let Some(token) = input.current_token().cloned() else {
            return Err(input.error(kind::UnexpectedEof));
        };

        match token.kind {
            TokenKind::Number => input.try_parse::<LitNum>().map(|num| Expr::Literal(Literal::Number(num))),
            TokenKind::OpenParen => input.try_parse::<Paren>().map(Expr::Paren),
            TokenKind::Name => {
                let is_call = token.lexeme != "x"
                    && input.peek_next().is_some_and(|next| next.kind == TokenKind::OpenParen);

                if is_call {
                    input.try_parse::<Call>().map(Expr::Call)
                } else {
                    input.try_parse::<LitSym>().map(|sym| Expr::Literal(Literal::Symbol(sym)))
                }
            },
            _ => Err(input.unexpected(&[TokenKind::Number, TokenKind::Name, TokenKind::OpenParen])),
        }
    }
}

impl Parse for Expr {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        input.nested(|input| {
            let lhs = Unary::parse_or_lower(input)?;
            Binary::parse_expr(input, lhs, Precedence::Any)
        })
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Literal(literal) => literal.fmt(f),
            Expr::Paren(paren) => paren.fmt(f),
            Expr::Call(call) => call.fmt(f),
            Expr::Unary(unary) => unary.fmt(f),
            Expr::Binary(binary) => binary.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use crate::parser::op::{BinOp, BinOpKind, UnaryOp, UnaryOpKind};

    fn num(value: f64, span: Range<usize>) -> Expr {
        Expr::Literal(Literal::Number(LitNum { value, span }))
    }

    fn sym(name: &str, span: Range<usize>) -> Expr {
        Expr::Literal(Literal::Symbol(LitSym { name: name.to_string(), span }))
    }

    fn parse(source: &str) -> Result<Expr, Error> {
        Parser::new(source).try_parse_full::<Expr>()
    }

    #[test]
    fn literal_number() {
        assert_eq!(parse("3.14").unwrap(), num(3.14, 0..4));
    }

    #[test]
    fn precedence() {
        let expr = parse("1 + 2 * 3").unwrap();
        assert_eq!(expr, Expr::Binary(Binary {
            lhs: Box::new(num(1.0, 0..1)),
            op: BinOp { kind: BinOpKind::Add, implicit: false, span: 2..3 },
            rhs: Box::new(Expr::Binary(Binary {
                lhs: Box::new(num(2.0, 4..5)),
                op: BinOp { kind: BinOpKind::Mul, implicit: false, span: 6..7 },
                rhs: Box::new(num(3.0, 8..9)),
                span: 4..9,
            })),
            span: 0..9,
        }));
    }

    #[test]
    fn implicit_multiplication() {
        let expr = parse("2x^2").unwrap();
        assert_eq!(expr, Expr::Binary(Binary {
            lhs: Box::new(num(2.0, 0..1)),
            op: BinOp { kind: BinOpKind::Mul, implicit: true, span: 1..1 },
            rhs: Box::new(Expr::Binary(Binary {
                lhs: Box::new(sym("x", 1..2)),
                op: BinOp { kind: BinOpKind::Exp, implicit: false, span: 2..3 },
                rhs: Box::new(num(2.0, 3..4)),
                span: 1..4,
            })),
            span: 0..4,
        }));
    }

    #[test]
    fn negation_binds_looser_than_power() {
        let expr = parse("-x^2").unwrap();
        assert_eq!(expr, Expr::Unary(Unary {
            operand: Box::new(Expr::Binary(Binary {
                lhs: Box::new(sym("x", 1..2)),
                op: BinOp { kind: BinOpKind::Exp, implicit: false, span: 2..3 },
                rhs: Box::new(num(2.0, 3..4)),
                span: 1..4,
            })),
            op: UnaryOp { kind: UnaryOpKind::Neg, span: 0..1 },
            span: 0..4,
        }));
    }

    #[test]
    fn power_is_right_associative() {
        let expr = parse("2^3^2").unwrap();
        let Expr::Binary(outer) = expr else { panic!("expected binary expression") };
        assert_eq!(*outer.lhs, num(2.0, 0..1));
        assert_eq!(outer.rhs.to_string(), "3^2");
    }

    #[test]
    fn subtraction_is_left_associative() {
        let expr = parse("10 - 4 - 3").unwrap();
        let Expr::Binary(outer) = expr else { panic!("expected binary expression") };
        assert_eq!(outer.lhs.to_string(), "10 - 4");
        assert_eq!(*outer.rhs, num(3.0, 9..10));
    }

    #[test]
    fn product_of_calls() {
        let expr = parse("sin(x)cos(x)").unwrap();
        let Expr::Binary(product) = expr else { panic!("expected binary expression") };
        assert!(product.op.implicit);
        assert!(matches!(*product.lhs, Expr::Call(ref call) if call.name.name == "sin"));
        assert!(matches!(*product.rhs, Expr::Call(ref call) if call.name.name == "cos"));
    }

    #[test]
    fn variable_before_paren_multiplies() {
        let expr = parse("x(x + 1)").unwrap();
        assert_eq!(expr.to_string(), "x(x + 1)");
        assert!(matches!(expr, Expr::Binary(ref binary) if binary.op.implicit));
    }

    #[test]
    fn radical_sign() {
        let expr = parse("√16").unwrap();
        let Expr::Call(call) = expr else { panic!("expected call") };
        assert_eq!(call.name.name, "sqrt");
        assert_eq!(call.args, vec![num(16.0, 3..5)]);
    }

    #[test]
    fn as_number() {
        assert_eq!(parse("(-2)").unwrap().as_number(), Some(-2.0));
        assert_eq!(parse("x").unwrap().as_number(), None);
        assert!(parse("((x))").unwrap().is_symbol("x"));
    }

    #[test]
    fn unclosed_parenthesis() {
        let err = parse("(1 + 2").unwrap_err();
        assert!(err.is::<kind::UnclosedParenthesis>());
        assert_eq!(err.spans, vec![0..1]);
    }

    #[test]
    fn empty_parenthesis() {
        let err = parse("3 * ()").unwrap_err();
        assert!(err.is::<kind::EmptyParenthesis>());
    }

    #[test]
    fn trailing_operator() {
        let err = parse("3 +").unwrap_err();
        assert!(err.is::<kind::UnexpectedEof>());
    }

    #[test]
    fn deep_nesting() {
        let nested = |depth: usize| format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
        assert_eq!(parse(&nested(50)).unwrap().as_number(), Some(1.0));

        let err = parse(&nested(10_000)).unwrap_err();
        assert!(err.is::<kind::TooDeep>());
        assert!(parse(&"-".repeat(10_000)).unwrap_err().is::<kind::TooDeep>());
        assert!(parse(&"2^".repeat(10_000)).unwrap_err().is::<kind::TooDeep>());
    }

    #[test]
    fn stray_symbol() {
        let err = parse("3 $ 4").unwrap_err();
        assert!(err.is::<kind::ExpectedEof>());
    }
}
