//! Edge case tests for rbp-lex.

#[cfg(test)]
mod tests {
    use crate::token::{Token, TokenKind};
    use crate::Lexer;

    fn lex_all(source: &[u8]) -> Vec<Token> {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            if token.kind == TokenKind::Eof {
                break;
            }
            tokens.push(token);
        }
        tokens
    }

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all(b"").is_empty());
    }

    #[test]
    fn test_edge_whitespace_only() {
        assert!(lex_all(b"  \t \r ").is_empty());
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = b"a".repeat(10_000);
        let tokens = lex_all(&name);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!((tokens[0].start, tokens[0].end), (0, 10_000));
    }

    #[test]
    fn test_edge_long_integer() {
        let digits = b"9".repeat(1_000);
        let tokens = lex_all(&digits);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Integer);
    }

    #[test]
    fn test_edge_reference_and_operator_mix() {
        // Successive kinds across the trickiest dispatch families.
        let kinds: Vec<TokenKind> = lex_all(b"$1 $foo $& <<= === defined?")
            .iter()
            .map(|t| t.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::NthReference,
                TokenKind::GlobalVariable,
                TokenKind::BackReference,
                TokenKind::ShiftLeftEqual,
                TokenKind::TripleEqual,
                TokenKind::Defined,
            ]
        );
    }

    #[test]
    fn test_edge_span_monotonicity() {
        let source: &[u8] = b"begin\n[$a, $1] <=> x ** 2 if y\nensure\nz\nend\n";
        let tokens = lex_all(source);
        for pair in tokens.windows(2) {
            assert!(pair[0].end <= pair[1].start);
        }
    }

    #[test]
    fn test_edge_coverage() {
        // Concatenating token text with the intervening gaps reproduces the
        // source, so no byte is ever claimed twice or dropped.
        let source: &[u8] = b"a = [1, 2]\nb <<= 3 if c?\n";
        let tokens = lex_all(source);

        let mut rebuilt = Vec::new();
        let mut cursor = 0;
        for token in &tokens {
            rebuilt.extend_from_slice(&source[cursor..token.start]);
            rebuilt.extend_from_slice(token.text(source));
            cursor = token.end;
        }
        rebuilt.extend_from_slice(&source[cursor..]);
        assert_eq!(rebuilt, source);

        // And the gaps are pure whitespace.
        let mut cursor = 0;
        for token in &tokens {
            assert!(source[cursor..token.start]
                .iter()
                .all(|b| b" \t\r\x0b\x0c\n".contains(b)));
            cursor = token.end;
        }
    }

    #[test]
    fn test_edge_adjacent_operators_split_greedily() {
        let kinds: Vec<TokenKind> = lex_all(b"a<=>b").iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Identifier,
                TokenKind::Compare,
                TokenKind::Identifier,
            ]
        );
    }

    // ------------------------------------------------------------------------
    // PROPERTY-BASED TESTS - Using proptest for arbitrary inputs
    // ------------------------------------------------------------------------

    #[test]
    fn test_property_arbitrary_identifier_strings() {
        use proptest::prelude::*;

        proptest!(|(input in "[a-zA-Z_][a-zA-Z0-9_]{0,100}")| {
            let tokens = lex_all(input.as_bytes());
            // One token covering the whole input, identifier or keyword.
            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!((tokens[0].start, tokens[0].end), (0, input.len()));
        });
    }

    #[test]
    fn test_property_arbitrary_decimal_strings() {
        use proptest::prelude::*;

        proptest!(|(input in "[0-9]{1,20}")| {
            let tokens = lex_all(input.as_bytes());
            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!(tokens[0].kind, TokenKind::Integer);
            prop_assert_eq!(tokens[0].end, input.len());
        });
    }

    #[test]
    fn test_property_arbitrary_nth_references() {
        use proptest::prelude::*;

        proptest!(|(input in "\\$[1-9][0-9]{0,10}")| {
            let tokens = lex_all(input.as_bytes());
            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!(tokens[0].kind, TokenKind::NthReference);
        });
    }

    #[test]
    fn test_property_spans_stay_in_bounds() {
        use proptest::prelude::*;

        proptest!(|(input in "[ -~\\n]{0,200}")| {
            let source = input.as_bytes();
            let mut lexer = Lexer::new(source);
            let mut last_end = 0;
            loop {
                let token = lexer.next_token();
                prop_assert!(token.start <= token.end);
                prop_assert!(token.end <= source.len());
                prop_assert!(token.start >= last_end);
                last_end = token.end;
                if token.kind == TokenKind::Eof {
                    break;
                }
            }
        });
    }

    #[test]
    fn test_edge_statement_shaped_program() {
        let kinds: Vec<TokenKind> = lex_all(b"while x\ny\nend").iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::While,
                TokenKind::Identifier,
                TokenKind::Newline,
                TokenKind::Identifier,
                TokenKind::Newline,
                TokenKind::End,
            ]
        );
    }
}
