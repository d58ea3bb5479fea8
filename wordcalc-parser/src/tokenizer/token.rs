use logos::Logos;
use std::ops::Range;

/// Token kinds of the math fragments of a query.
#[derive(Logos, Clone, Copy, Debug, PartialEq)]
pub enum TokenKind {
    #[regex(r"[\n\r]+")]
    NewLine,

    #[regex(r"[ \t]+")]
    Whitespace,

    #[token("+")]
    Add,

    #[token("-")]
    #[token("−")]
    Sub,

    #[token("*")]
    #[token("×")]
    #[token("·")]
    Mul,

    #[token("/")]
    #[token("÷")]
    Div,

    #[token("^")]
    Exp,

    #[token("√")]
    Root,

    #[token("=")]
    Assign,

    #[regex(r"[a-zA-Z_]+")]
    Name,

    #[token(",")]
    Comma,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,

    #[regex(r".", priority = 0)]
    Symbol,
}

impl TokenKind {
    /// Whitespace tokens are dropped before parsing.
    pub fn is_whitespace(self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::NewLine)
    }

    /// Returns true if the token can begin a primary expression, which is what allows implicit
    /// multiplication such as `2x` or `sin(x)cos(x)`.
    pub fn starts_primary(self) -> bool {
        matches!(self, TokenKind::Number | TokenKind::Name | TokenKind::OpenParen | TokenKind::Root)
    }
}

/// A lexeme of a query fragment, tagged with its kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'source> {
    /// Byte range of the token in the fragment.
    pub span: Range<usize>,

    /// What the token is.
    pub kind: TokenKind,

    /// The text of the token.
    pub lexeme: &'source str,
}

impl Token<'_> {
    /// Whitespace tokens are dropped before parsing.
    pub fn is_whitespace(&self) -> bool {
        self.kind.is_whitespace()
    }
}
