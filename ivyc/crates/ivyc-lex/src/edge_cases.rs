//! Edge case tests for ivyc-lex

#[cfg(test)]
mod tests {
    use crate::{Lexer, TokenKind};

    fn lex_kinds(source: &str) -> Vec<TokenKind> {
        Lexer::new(source).map(|t| t.kind).collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_kinds("").is_empty());
    }

    #[test]
    fn test_edge_single_char_ident() {
        let mut lexer = Lexer::new("x");
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::Ident);
        assert_eq!(token.literal, "x");
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let mut lexer = Lexer::new(&name);
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::Ident);
        assert_eq!(token.literal, name);
    }

    #[test]
    fn test_edge_underscore_only() {
        let mut lexer = Lexer::new("_");
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::Ident);
        assert_eq!(token.literal, "_");
    }

    #[test]
    fn test_edge_keywords_not_idents() {
        assert_eq!(
            lex_kinds("fn let if"),
            vec![TokenKind::Function, TokenKind::Let, TokenKind::If]
        );
    }

    #[test]
    fn test_edge_adjacent_ident_and_number() {
        // Digits never extend an identifier run, and letters end a number
        // run, so these split without any whitespace.
        let tokens: Vec<_> = Lexer::new("foo123bar").collect();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].literal, "foo");
        assert_eq!(tokens[0].kind, TokenKind::Ident);
        assert_eq!(tokens[1].literal, "123");
        assert_eq!(tokens[1].kind, TokenKind::Int);
        assert_eq!(tokens[2].literal, "bar");
        assert_eq!(tokens[2].kind, TokenKind::Ident);
    }

    #[test]
    fn test_edge_nested_delimiters() {
        let kinds = lex_kinds("((()))");
        assert_eq!(kinds.iter().filter(|k| **k == TokenKind::LParen).count(), 3);
        assert_eq!(kinds.iter().filter(|k| **k == TokenKind::RParen).count(), 3);
    }

    #[test]
    fn test_edge_illegal_ascii() {
        for source in ["@", "#", "$", "?", "&", "|", "^", "~", "\"", "'"] {
            let mut lexer = Lexer::new(source);
            let token = lexer.next_token();
            assert_eq!(token.kind, TokenKind::Illegal, "for input {:?}", source);
            assert_eq!(token.literal, source);
            assert!(lexer.next_token().is_eof());
        }
    }

    #[test]
    fn test_edge_illegal_non_ascii() {
        // One Illegal token per character, never a panic or a split
        // character.
        let tokens: Vec<_> = Lexer::new("é中😀").collect();
        let literals: Vec<_> = tokens.iter().map(|t| t.literal).collect();
        assert_eq!(literals, vec!["é", "中", "😀"]);
        assert!(tokens.iter().all(|t| t.kind == TokenKind::Illegal));
    }

    #[test]
    fn test_edge_illegal_between_tokens() {
        assert_eq!(
            lex_kinds("let @ x"),
            vec![TokenKind::Let, TokenKind::Illegal, TokenKind::Ident]
        );
    }

    #[test]
    fn test_edge_operators_without_spaces() {
        assert_eq!(
            lex_kinds("a==b!=c=d"),
            vec![
                TokenKind::Ident,
                TokenKind::Eq,
                TokenKind::Ident,
                TokenKind::NotEq,
                TokenKind::Ident,
                TokenKind::Assign,
                TokenKind::Ident,
            ]
        );
    }

    #[test]
    fn test_edge_trailing_equals_at_eof() {
        // Lookahead at the very end of input must see the sentinel, not
        // read past the buffer.
        assert_eq!(lex_kinds("x="), vec![TokenKind::Ident, TokenKind::Assign]);
        assert_eq!(lex_kinds("x!"), vec![TokenKind::Ident, TokenKind::Bang]);
    }

    // ==================== PROPERTIES ====================

    mod properties {
        use crate::{Lexer, TokenKind};
        use proptest::prelude::*;

        proptest! {
            /// The lexer is total: every input terminates in an EOF token
            /// after at most one token per character.
            #[test]
            fn prop_terminates_with_eof(source in ".*") {
                let mut lexer = Lexer::new(&source);
                let budget = source.chars().count() + 1;
                let mut reached_eof = false;
                for _ in 0..budget {
                    if lexer.next_token().is_eof() {
                        reached_eof = true;
                        break;
                    }
                }
                prop_assert!(reached_eof);
            }

            /// Every literal is the exact source substring it was produced
            /// from, and only whitespace is ever skipped between tokens.
            #[test]
            fn prop_literal_fidelity(source in ".*") {
                let mut rest = source.as_str();
                for token in Lexer::new(&source) {
                    let at = rest.find(token.literal)
                        .expect("literal not found in remaining source");
                    prop_assert!(
                        rest[..at].chars().all(|c| " \t\n\r".contains(c))
                    );
                    rest = &rest[at + token.literal.len()..];
                }
                prop_assert!(rest.chars().all(|c| " \t\n\r".contains(c)));
            }

            /// Non-EOF literals are never empty, so every call makes
            /// strict progress.
            #[test]
            fn prop_non_eof_literals_non_empty(source in ".*") {
                for token in Lexer::new(&source) {
                    prop_assert!(!token.literal.is_empty());
                }
            }

            /// Once EOF is reached the lexer stays there and the cursor
            /// stops moving.
            #[test]
            fn prop_eof_steady_state(source in ".*") {
                let mut lexer = Lexer::new(&source);
                while !lexer.next_token().is_eof() {}
                let position = lexer.position();
                for _ in 0..3 {
                    let token = lexer.next_token();
                    prop_assert_eq!(token.kind, TokenKind::Eof);
                    prop_assert_eq!(token.literal, "");
                    prop_assert_eq!(lexer.position(), position);
                }
            }
        }
    }
}
