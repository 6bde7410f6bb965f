#![allow(clippy::unwrap_used, clippy::expect_used)]

use kopi_ir::{NodeKind, TokenKind};
use kopi_lexer::tokenize;
use pretty_assertions::assert_eq;

use super::Cursor;

#[test]
fn test_advance_stops_at_eof() {
    let tokens = tokenize("a b");
    let mut cursor = Cursor::new(&tokens, 0);
    assert_eq!(cursor.advance().text, "a");
    assert_eq!(cursor.advance().text, "b");
    assert!(cursor.is_at_end());
    assert_eq!(cursor.advance().kind, TokenKind::Eof);
    assert_eq!(cursor.position(), 2);
}

#[test]
fn test_lookahead_clamps() {
    let tokens = tokenize("x;");
    let cursor = Cursor::new(&tokens, 0);
    assert_eq!(cursor.peek_kind(1), TokenKind::Semicolon);
    assert_eq!(cursor.peek_kind(10), TokenKind::Eof);
    assert_eq!(Cursor::new(&tokens, 99).position(), 2);
}

#[test]
fn test_skip_newlines_counts() {
    let tokens = tokenize("\n\n\nx");
    let mut cursor = Cursor::new(&tokens, 0);
    assert_eq!(cursor.skip_newlines(), 3);
    assert_eq!(cursor.current().text, "x");
}

#[test]
fn test_expect_reports_node() {
    let tokens = tokenize("int");
    let mut cursor = Cursor::new(&tokens, 0);
    assert_eq!(cursor.expect_ident(NodeKind::Field, "a type").unwrap(), "int");
    let err = cursor.expect(TokenKind::Semicolon, NodeKind::Field).unwrap_err();
    assert_eq!(err.node, NodeKind::Field);
    assert_eq!(err.message(), "Expected `;`, found end of input");
}

#[test]
fn test_eat() {
    let tokens = tokenize("static int");
    let mut cursor = Cursor::new(&tokens, 0);
    assert!(cursor.eat(TokenKind::Final).is_none());
    assert!(cursor.eat(TokenKind::Static).is_some());
    assert!(cursor.check(TokenKind::Ident));
}
