//! Numeric literal lexing.
//!
//! The subset has exactly one numeric form: a greedy run of decimal digits.
//! No underscores, no radix prefixes, no floats, no suffixes.

use crate::token::TokenKind;
use crate::Lexer;

impl Lexer<'_> {
    /// Lexes the remainder of an integer literal whose first digit has
    /// already been consumed.
    pub(crate) fn lex_numeric(&mut self) -> TokenKind {
        while self.cursor.peek(0).is_ascii_digit() {
            self.cursor.bump();
        }
        TokenKind::Integer
    }
}

#[cfg(test)]
mod tests {
    use crate::token::TokenKind;
    use crate::Lexer;

    #[test]
    fn test_single_digit() {
        let mut lexer = Lexer::new(b"7");
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::Integer);
        assert_eq!((token.start, token.end), (0, 1));
    }

    #[test]
    fn test_digit_run() {
        let mut lexer = Lexer::new(b"12345 ");
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::Integer);
        assert_eq!(token.text(lexer.source()), b"12345");
    }

    #[test]
    fn test_leading_zeros_are_one_token() {
        let mut lexer = Lexer::new(b"007");
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::Integer);
        assert_eq!((token.start, token.end), (0, 3));
    }

    #[test]
    fn test_no_float_support() {
        // `1.5` scans as an integer and then a bare dot ends the stream.
        let mut lexer = Lexer::new(b"1.5");
        assert_eq!(lexer.next_token().kind, TokenKind::Integer);
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    }

    #[test]
    fn test_integer_then_range() {
        let mut lexer = Lexer::new(b"1..9");
        assert_eq!(lexer.next_token().kind, TokenKind::Integer);
        assert_eq!(lexer.next_token().kind, TokenKind::DoubleDot);
        assert_eq!(lexer.next_token().kind, TokenKind::Integer);
    }
}
