#![allow(clippy::unwrap_used, clippy::expect_used)]

use kopi_ir::{ClassBuilder, NodeKind, Span, Token, TokenKind};
use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_display_names_kind_and_node() {
    let err = ParseError::structural(
        NodeKind::MultiLineComment,
        "Failed to find closing multi-line comment token!",
        Span::new(0, 2),
    );
    assert_eq!(
        err.to_string(),
        "structural error in multi-line comment: Failed to find closing multi-line comment token!"
    );
}

#[test]
fn test_semantic_keeps_every_message() {
    let err = ParseError::semantic(
        NodeKind::Javadoc,
        vec![
            "Found multiple author strings".to_string(),
            "Found multiple since strings".to_string(),
        ],
        Span::DUMMY,
    );
    assert_eq!(err.messages.len(), 2);
    assert!(err.mentions("since"));
    assert_eq!(err.message(), "Found multiple author strings");
}

#[test]
fn test_from_build_keeps_violations() {
    let build = ClassBuilder::editable().build().unwrap_err();
    let err = ParseError::from_build(build, Span::new(3, 9));
    assert_eq!(err.kind, ParseErrorKind::Build);
    assert_eq!(err.node, NodeKind::Class);
    assert_eq!(err.messages, vec!["Must specify className!"]);
}

#[test]
fn test_unexpected_classifies_lex_problems() {
    let bad = Token::new(TokenKind::Error, "#", Span::new(0, 1));
    assert_eq!(
        ParseError::unexpected(NodeKind::Field, &bad, "a name").kind,
        ParseErrorKind::Lex
    );

    let open = Token::new(TokenKind::StringLit, "\"abc", Span::new(0, 4));
    assert_eq!(
        ParseError::unexpected(NodeKind::Field, &open, "`;`").message(),
        "Unterminated string literal"
    );

    let semi = Token::new(TokenKind::Semicolon, ";", Span::new(0, 1));
    let err = ParseError::unexpected(NodeKind::Method, &semi, "`(`");
    assert_eq!(err.kind, ParseErrorKind::Structural);
    assert_eq!(err.message(), "Expected `(`, found `;`");
}
