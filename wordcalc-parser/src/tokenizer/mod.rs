pub mod token;

use logos::{Lexer, Logos};
pub use token::{Token, TokenKind};

/// Lexes the input lazily, including whitespace.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the significant tokens produced by the tokenizer.
/// Whitespace is dropped here, so the parsers never have to skip it. This allows us to backtrack
/// in case of an error.
pub fn tokenize_complete(input: &str) -> Box<[Token]> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let kind = result.unwrap_or(TokenKind::Symbol);
        if kind.is_whitespace() {
            continue;
        }

        tokens.push(Token {
            span: lexer.span(),
            kind,
            lexeme: lexer.slice(),
        });
    }

    tokens.into_boxed_slice()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    /// Asserts that the input lexes to exactly the expected kinds and lexemes.
    fn compare_tokens<'source, const N: usize>(input: &'source str, expected: [(TokenKind, &'source str); N]) {
        let mut lexer = tokenize(input);

        for (expected_kind, expected_lexeme) in expected.into_iter() {
            assert_eq!(lexer.next(), Some(Ok(expected_kind)));
            assert_eq!(lexer.slice(), expected_lexeme);
        }

        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn basic_expr() {
        compare_tokens(
            "1 + 2",
            [
                (TokenKind::Number, "1"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Add, "+"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Number, "2"),
            ],
        );
    }

    #[test]
    fn equation_side() {
        compare_tokens(
            "-3.5x^2+1/2",
            [
                (TokenKind::Sub, "-"),
                (TokenKind::Number, "3.5"),
                (TokenKind::Name, "x"),
                (TokenKind::Exp, "^"),
                (TokenKind::Number, "2"),
                (TokenKind::Add, "+"),
                (TokenKind::Number, "1"),
                (TokenKind::Div, "/"),
                (TokenKind::Number, "2"),
            ],
        );
    }

    #[test]
    fn unicode_operators() {
        compare_tokens(
            "6×2÷√4 ∫",
            [
                (TokenKind::Number, "6"),
                (TokenKind::Mul, "×"),
                (TokenKind::Number, "2"),
                (TokenKind::Div, "÷"),
                (TokenKind::Root, "√"),
                (TokenKind::Number, "4"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Symbol, "∫"),
            ],
        );
    }

    #[test]
    fn complete_drops_whitespace() {
        let tokens = tokenize_complete("sin(x)  cos(x)");
        let kinds = tokens.iter().map(|token| token.kind).collect::<Vec<_>>();
        assert_eq!(kinds, vec![
            TokenKind::Name,
            TokenKind::OpenParen,
            TokenKind::Name,
            TokenKind::CloseParen,
            TokenKind::Name,
            TokenKind::OpenParen,
            TokenKind::Name,
            TokenKind::CloseParen,
        ]);
        assert_eq!(tokens[4].span, 8..11);
    }
}
