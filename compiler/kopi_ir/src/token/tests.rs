use super::*;

fn tok(kind: TokenKind, text: &str) -> Token<'_> {
    Token::new(kind, text, Span::DUMMY)
}

#[test]
fn test_from_tokens_appends_eof() {
    let list = TokenList::from_tokens("ab", vec![tok(TokenKind::Ident, "ab")]);
    assert_eq!(list.kinds(), vec![TokenKind::Ident, TokenKind::Eof]);
    assert_eq!(list[1].span, Span::new(2, 2));
}

#[test]
fn test_slice_uses_source_text() {
    let list = TokenList::from_tokens("int value", Vec::new());
    assert_eq!(list.slice(Span::new(4, 9)), "value");
    assert_eq!(list.slice(Span::new(40, 90)), "");
}

#[test]
fn test_comment_termination() {
    assert!(tok(TokenKind::BlockComment, "/* x */").is_terminated());
    assert!(tok(TokenKind::BlockComment, "/**/").is_terminated());
    assert!(!tok(TokenKind::BlockComment, "/*/").is_terminated());
    assert!(!tok(TokenKind::DocComment, "/** open").is_terminated());
}

#[test]
fn test_literal_termination_respects_escapes() {
    assert!(tok(TokenKind::StringLit, r#""ok""#).is_terminated());
    assert!(tok(TokenKind::StringLit, r#""\\""#).is_terminated());
    assert!(!tok(TokenKind::StringLit, r#""\""#).is_terminated());
    assert!(!tok(TokenKind::StringLit, "\"").is_terminated());
    assert!(tok(TokenKind::CharLit, r"'\''").is_terminated());
}

#[test]
fn test_word_and_modifier_classes() {
    assert!(TokenKind::Ident.is_word());
    assert!(TokenKind::Class.is_word());
    assert!(!TokenKind::Number.is_word());
    assert!(TokenKind::Synchronized.is_modifier());
    assert!(!TokenKind::Class.is_modifier());
    assert!(TokenKind::DocComment.is_comment());
}
