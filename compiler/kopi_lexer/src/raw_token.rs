//! Raw Token Definition
//!
//! The `RawToken` enum is the logos-derived scanner output before conversion
//! to `TokenKind`. Comments and literals are scanned by hand in callbacks so
//! that their spans stay atomic.

use logos::{Lexer, Logos};

/// Raw token from logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\f]+")] // Skip horizontal whitespace
pub(crate) enum RawToken {
    #[regex(r"//[^\n]*")]
    LineComment,

    #[token("/*", block_comment)]
    BlockComment,

    #[token("\n")]
    Newline,

    #[token("package")]
    Package,
    #[token("import")]
    Import,
    #[token("static")]
    Static,
    #[token("public")]
    Public,
    #[token("protected")]
    Protected,
    #[token("private")]
    Private,
    #[token("abstract")]
    Abstract,
    #[token("final")]
    Final,
    #[token("synchronized")]
    Synchronized,
    #[token("volatile")]
    Volatile,
    #[token("transient")]
    Transient,
    #[token("native")]
    Native,
    #[token("default")]
    Default,
    #[token("strictfp")]
    Strictfp,
    #[token("class")]
    Class,
    #[token("interface")]
    Interface,
    #[token("enum")]
    Enum,
    #[token("extends")]
    Extends,
    #[token("implements")]
    Implements,
    #[token("throws")]
    Throws,
    #[token("void")]
    Void,

    #[token("@")]
    At,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token("...")]
    Ellipsis,
    #[token(".")]
    Dot,
    #[token("=")]
    Eq,
    #[token("?")]
    Question,
    #[token("*")]
    Star,

    // Operators the grammar never inspects
    #[regex(r"[-+/%!~&|^:#\\]")]
    Symbol,

    #[token("\"", |lex| quoted(lex, '"'))]
    StringLit,

    #[token("'", |lex| quoted(lex, '\''))]
    CharLit,

    // Integer and floating literals, suffixes and radix prefixes included
    #[regex(r"[0-9][0-9A-Za-z_]*")]
    #[regex(r"[0-9][0-9A-Za-z_]*\.[0-9][0-9A-Za-z_]*")]
    Number,

    // Java letters: any Unicode identifier start, plus `_` and `$`
    #[regex(r"[\p{XID_Start}_$][\p{XID_Continue}$]*")]
    Ident,
}

/// Extend a `/*` token through the first `*/`, or to end of input.
fn block_comment(lex: &mut Lexer<'_, RawToken>) -> bool {
    let rest = lex.remainder();
    let len = rest.find("*/").map_or(rest.len(), |end| end + 2);
    lex.bump(len);
    true
}

/// Extend a quote token through its closing quote, honoring backslash
/// escapes. An unterminated literal stops before the end of its line.
fn quoted(lex: &mut Lexer<'_, RawToken>, quote: char) -> bool {
    let rest = lex.remainder();
    let mut chars = rest.char_indices();
    let mut len = rest.len();
    while let Some((i, c)) = chars.next() {
        match c {
            '\n' => {
                len = i;
                break;
            }
            '\\' => {
                if let Some((j, '\n')) = chars.next() {
                    len = j;
                    break;
                }
            }
            c if c == quote => {
                len = i + c.len_utf8();
                break;
            }
            _ => {}
        }
    }
    lex.bump(len);
    true
}
