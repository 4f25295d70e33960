//! Integration tests for the public tokenizer API.
//!
//! These tests check whole token streams for representative programs and
//! the coverage properties that hold for any well-formed input.

use caliburn::{
    errors::errors::ErrorImpl,
    lexer::tokens::{Token, TokenKind},
    tokenize,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn stream(source: &str) -> Vec<(TokenKind, String)> {
    tokenize(source.to_string(), Some("test.cbrn".to_string()))
        .unwrap()
        .into_iter()
        .map(|token| (token.kind, token.lexeme))
        .collect()
}

fn expected(tokens: &[(TokenKind, &str)]) -> Vec<(TokenKind, String)> {
    tokens
        .iter()
        .map(|(kind, lexeme)| (*kind, lexeme.to_string()))
        .collect()
}

/// Rebuilds the source from token lexemes plus the skipped gaps between them.
fn reassemble(source: &str, tokens: &[Token]) -> String {
    let mut result = String::new();
    let mut cursor = 0;

    for token in tokens {
        result.push_str(&source[cursor..token.span.start.offset]);
        result.push_str(&token.lexeme);
        cursor = token.span.end.offset;
    }

    result.push_str(&source[cursor..]);
    result
}

#[test]
fn test_simple_statement() {
    assert_eq!(
        stream("let x = 5;"),
        expected(&[
            (TokenKind::Keyword, "let"),
            (TokenKind::Identifier, "x"),
            (TokenKind::Operator, "="),
            (TokenKind::IntegerLiteral, "5"),
            (TokenKind::Semicolon, ";"),
        ])
    );
}

#[test]
fn test_line_comment_then_statement() {
    let tokens = tokenize("# comment\nlet y;".to_string(), None).unwrap();

    assert_eq!(
        tokens.iter().map(|t| (t.kind, t.lexeme.as_str())).collect::<Vec<_>>(),
        vec![
            (TokenKind::Keyword, "let"),
            (TokenKind::Identifier, "y"),
            (TokenKind::Semicolon, ";"),
        ]
    );
    assert_eq!(tokens[1].line(), 2);
}

#[test]
fn test_block_comment_then_statement() {
    assert_eq!(
        stream("### block\ncomment ### let z;"),
        expected(&[
            (TokenKind::Keyword, "let"),
            (TokenKind::Identifier, "z"),
            (TokenKind::Semicolon, ";"),
        ])
    );
}

#[test]
fn test_unterminated_string_literal() {
    let err = tokenize("\"unterminated".to_string(), None).unwrap_err();

    assert!(matches!(
        err.kind(),
        ErrorImpl::UnterminatedStringLiteral { delimiter: '"' }
    ));
}

#[test]
fn test_hex_and_float_literals() {
    assert_eq!(
        stream("0x1F + 3.14f"),
        expected(&[
            (TokenKind::IntegerLiteral, "0x1F"),
            (TokenKind::Operator, "+"),
            (TokenKind::FloatLiteral, "3.14f"),
        ])
    );
}

#[test]
fn test_boolean_operator_run() {
    assert_eq!(
        stream("true && false"),
        expected(&[
            (TokenKind::BooleanLiteral, "true"),
            (TokenKind::Operator, "&&"),
            (TokenKind::BooleanLiteral, "false"),
        ])
    );
}

#[test]
fn test_program() {
    let source = "\
import core;

### Shaders take their inputs
    from the pipeline ###
class Light extends Base {
    public shared const range = 1.5e3;   # metres

    def lit(v: vec3) {
        if (v.x > 0 || !visible) {
            return 'y';
        }
        pass;
    }
}
";
    let tokens = tokenize(source.to_string(), Some("light.cbrn".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Keyword);
    assert_eq!(tokens[3].lexeme, "class");
    assert_eq!(tokens[3].line(), 5);

    let range = tokens.iter().find(|t| t.lexeme == "1.5e3").unwrap();
    assert_eq!(range.kind, TokenKind::FloatLiteral);
    assert_eq!(range.line(), 6);

    let or = tokens.iter().find(|t| t.lexeme == "||").unwrap();
    assert_eq!(or.kind, TokenKind::Operator);

    let not = tokens.iter().find(|t| t.lexeme == "!").unwrap();
    assert_eq!(not.kind, TokenKind::Operator);

    let literal = tokens.iter().find(|t| t.kind == TokenKind::StringLiteral).unwrap();
    assert_eq!(literal.lexeme, "'y'");
    assert_eq!(literal.line(), 10);

    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::CloseBrace));
    assert_eq!(reassemble(source, &tokens), source);
}

#[test]
fn test_relexing_lexemes_is_not_a_round_trip() {
    let source = "let a = b # note\n;";
    let tokens = tokenize(source.to_string(), None).unwrap();

    let joined: String = tokens.iter().map(|t| t.lexeme.as_str()).collect();
    assert_eq!(joined, "leta=b;");

    let relexed = tokenize(joined, None).unwrap();
    assert_ne!(relexed.len(), tokens.len());
}

#[test]
fn test_token_streams_can_cross_threads() {
    let handles: Vec<_> = ["let a;", "let b = 2;"]
        .into_iter()
        .map(|source| std::thread::spawn(move || tokenize(source.to_string(), None)))
        .collect();

    let counts: Vec<usize> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap().unwrap().len())
        .collect();

    assert_eq!(counts, vec![3, 5]);
}

fn separator() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(" ".to_string()),
        Just("\n".to_string()),
        Just("\t".to_string()),
        Just("\r\n".to_string()),
        Just(" # line comment\n".to_string()),
        Just(" ### block\ncomment ### ".to_string()),
    ]
}

fn fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        "[g-z_][a-z0-9_]{0,6}",
        "[1-9][0-9]{0,4}",
        "[0-9]{1,3}\\.[0-9]{1,3}",
        "0x[0-9A-F]{1,4}",
        "(let|class|def|return|true|false)",
        "[=+*/%^&$!~-]{1,3}",
        "[;{}\\[\\]()<>.,:]",
        "\"[a-z ]{0,8}\"",
        "'[a-z\"]{0,4}'",
    ]
}

proptest! {
    #[test]
    fn prop_whitespace_and_comments_yield_nothing(parts in prop::collection::vec(separator(), 0..8)) {
        let source = parts.concat();
        let tokens = tokenize(source, None).unwrap();
        prop_assert!(tokens.is_empty());
    }

    #[test]
    fn prop_lexemes_and_gaps_cover_source(
        parts in prop::collection::vec((fragment(), separator()), 0..12)
    ) {
        let source: String = parts.iter().map(|(f, s)| format!("{}{}", f, s)).collect();
        let tokens = tokenize(source.clone(), None).unwrap();

        for token in &tokens {
            prop_assert!(!token.lexeme.is_empty());
            prop_assert!(token.line() >= 1 && token.column() >= 1);
            prop_assert_eq!(&source[token.span.start.offset..token.span.end.offset], token.lexeme.as_str());
        }

        prop_assert_eq!(reassemble(&source, &tokens), source);
    }
}
