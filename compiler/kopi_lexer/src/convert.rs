//! Token Conversion
//!
//! Converts raw logos tokens to the final `TokenKind`.

use kopi_ir::TokenKind;

use crate::raw_token::RawToken;

/// Convert a raw token to a `TokenKind`.
///
/// Block comments opening with `/**` are doc comments, except the empty
/// comment `/**/`.
pub(crate) fn convert_token(raw: RawToken, slice: &str) -> TokenKind {
    match raw {
        RawToken::LineComment => TokenKind::LineComment,
        RawToken::BlockComment => {
            if slice.starts_with("/**") && slice != "/**/" {
                TokenKind::DocComment
            } else {
                TokenKind::BlockComment
            }
        }
        RawToken::Newline => TokenKind::Newline,

        // Keywords
        RawToken::Package => TokenKind::Package,
        RawToken::Import => TokenKind::Import,
        RawToken::Static => TokenKind::Static,
        RawToken::Public => TokenKind::Public,
        RawToken::Protected => TokenKind::Protected,
        RawToken::Private => TokenKind::Private,
        RawToken::Abstract => TokenKind::Abstract,
        RawToken::Final => TokenKind::Final,
        RawToken::Synchronized => TokenKind::Synchronized,
        RawToken::Volatile => TokenKind::Volatile,
        RawToken::Transient => TokenKind::Transient,
        RawToken::Native => TokenKind::Native,
        RawToken::Default => TokenKind::Default,
        RawToken::Strictfp => TokenKind::Strictfp,
        RawToken::Class => TokenKind::Class,
        RawToken::Interface => TokenKind::Interface,
        RawToken::Enum => TokenKind::Enum,
        RawToken::Extends => TokenKind::Extends,
        RawToken::Implements => TokenKind::Implements,
        RawToken::Throws => TokenKind::Throws,
        RawToken::Void => TokenKind::Void,

        // Punctuation
        RawToken::At => TokenKind::At,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::Lt => TokenKind::Lt,
        RawToken::Gt => TokenKind::Gt,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Ellipsis => TokenKind::Ellipsis,
        RawToken::Dot => TokenKind::Dot,
        RawToken::Eq => TokenKind::Eq,
        RawToken::Question => TokenKind::Question,
        RawToken::Star => TokenKind::Star,
        RawToken::Symbol => TokenKind::Symbol,

        // Literals and names
        RawToken::StringLit => TokenKind::StringLit,
        RawToken::CharLit => TokenKind::CharLit,
        RawToken::Number => TokenKind::Number,
        RawToken::Ident => TokenKind::Ident,
    }
}
