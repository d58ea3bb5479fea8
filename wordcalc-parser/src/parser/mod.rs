pub mod ast;
pub mod error;
pub mod op;

use error::{Error, kind::{self, UnexpectedToken}};
use super::tokenizer::{tokenize_complete, Token, TokenKind};
use std::ops::Range;
use wordcalc_error::ErrorKind;

/// How deeply expressions can nest inside each other before parsing gives up.
pub const MAX_DEPTH: usize = 128;

/// A high-level parser for the math fragments of a query. This is the type to use to parse a
/// piece of a query into an abstract syntax tree.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing. Whitespace is not included.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,

    /// The length of the source, used to point errors at the end of the input.
    source_len: usize,

    /// How many nested expressions are being parsed right now.
    depth: usize,
}

impl<'source> Parser<'source> {
    /// Tokenizes the source and places the cursor on the first token.
    pub fn new(source: &'source str) -> Self {
        Self {
            tokens: tokenize_complete(source),
            cursor: 0,
            source_len: source.len(),
            depth: 0,
        }
    }

    /// Builds an error located at [`Parser::span`].
    pub fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// The empty span just past the last byte of the source.
    pub fn eof_span(&self) -> Range<usize> {
        self.source_len..self.source_len
    }

    /// The span of the token under the cursor. Once every token is consumed, this is
    /// [`Parser::eof_span`].
    pub fn span(&self) -> Range<usize> {
        self.tokens
            .get(self.cursor)
            .map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Peeks at the token under the cursor.
    pub fn current_token(&self) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor)
    }

    /// Peeks at the token after the one under the cursor.
    pub fn peek_next(&self) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor + 1)
    }

    /// Peeks at the token just consumed, if any.
    pub fn prev_token(&self) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor.checked_sub(1)?)
    }

    /// Returns true if the current token is of the given kind.
    pub fn at(&self, kind: TokenKind) -> bool {
        self.current_token().is_some_and(|token| token.kind == kind)
    }

    /// Returns true if every token has been consumed.
    pub fn is_done(&self) -> bool {
        self.cursor >= self.tokens.len()
    }

    /// Creates the error for finding the current token where one of `expected` was needed. At the
    /// end of the stream, this is an [`kind::UnexpectedEof`] error instead.
    pub fn unexpected(&self, expected: &'static [TokenKind]) -> Error {
        match self.current_token() {
            Some(token) => Error::new(vec![token.span.clone()], UnexpectedToken {
                expected,
                found: token.kind,
                lexeme: token.lexeme.to_string(),
            }),
            None => self.error(kind::UnexpectedEof),
        }
    }

    /// Consumes the token under the cursor. Fails with [`kind::UnexpectedEof`] when there is
    /// none left.
    pub fn next_token(&mut self) -> Result<Token<'source>, Error> {
        match self.tokens.get(self.cursor) {
            Some(token) => {
                self.cursor += 1;
                Ok(token.clone())
            },
            None => Err(self.error(kind::UnexpectedEof)),
        }
    }

    /// Consumes the next token if it is of the given kind, returning it. Otherwise, the cursor is
    /// left unchanged and an [`UnexpectedToken`] error is returned.
    pub fn expect(&mut self, expected: &'static [TokenKind]) -> Result<Token<'source>, Error> {
        match self.current_token() {
            Some(token) if expected.contains(&token.kind) => self.next_token(),
            _ => Err(self.unexpected(expected)),
        }
    }

    /// Parses a `T`, rewinding the cursor to where it was if `T` cannot be parsed here. Used to
    /// try alternatives, such as a coefficient that may or may not be present.
    pub fn try_parse<T: Parse>(&mut self) -> Result<T, Error> {
        let checkpoint = self.cursor;
        T::parse(self).map_err(|err| {
            self.cursor = checkpoint;
            err
        })
    }

    /// Runs `parse` one level of nesting deeper. Past [`MAX_DEPTH`] levels, fails with
    /// [`kind::TooDeep`] instead.
    pub fn nested<T>(
        &mut self,
        parse: impl FnOnce(&mut Self) -> Result<T, Error>,
    ) -> Result<T, Error> {
        if self.depth >= MAX_DEPTH {
            return Err(self.error(kind::TooDeep { limit: MAX_DEPTH }));
        }

        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    /// Parses a `T` that must span the whole source. Leftover tokens are an
    /// [`kind::ExpectedEof`] error.
    pub fn try_parse_full<T: Parse>(&mut self) -> Result<T, Error> {
        let value = T::parse(self)?;
        if self.is_done() {
            Ok(value)
        } else {
            Err(self.error(kind::ExpectedEof))
        }
    }
}

/// A syntax node that can be read from a [`Parser`].
pub trait Parse: Sized {
    /// Reads the node starting at the cursor, leaving the cursor after it on success.
    fn parse(input: &mut Parser) -> Result<Self, Error>;
}

/// Which way a chain of the same operator groups.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Associativity {
    /// `a - b - c` is `(a - b) - c`.
    Left,

    /// `a ^ b ^ c` is `a ^ (b ^ c)`.
    Right,
}

/// Binding strength of operators. Later variants bind tighter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Precedence {
    /// The floor used to start parsing an expression.
    Any,

    /// `+` and `-`.
    Term,

    /// `*`, `/`, and implicit multiplication such as `3x`.
    Factor,

    /// Negation.
    Neg,

    /// `^`.
    Exp,
}

impl Precedence {
    /// Returns the next-highest precedence. Used to make left-associative operators bind their
    /// right operand more tightly than themselves.
    pub fn tighter(self) -> Self {
        match self {
            Self::Any => Self::Term,
            Self::Term => Self::Factor,
            Self::Factor => Self::Neg,
            Self::Neg | Self::Exp => Self::Exp,
        }
    }
}

impl PartialOrd for Precedence {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        (*self as u8).partial_cmp(&(*other as u8))
    }
}
