//! Lexical tokens.
//!
//! A token is an immutable slice of the source text plus its classification.
//! Horizontal whitespace is never tokenized; newlines always are, because
//! comment attachment and blank-line detection count them.

use std::fmt;
use std::ops::{Deref, Index};

use crate::Span;

/// Token classification.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // Words
    Ident,
    Number,
    StringLit,
    CharLit,

    // Comments (atomic spans, possibly unterminated)
    LineComment,
    BlockComment,
    DocComment,

    Newline,

    // Keywords
    Package,
    Import,
    Static,
    Public,
    Protected,
    Private,
    Abstract,
    Final,
    Synchronized,
    Volatile,
    Transient,
    Native,
    Default,
    Strictfp,
    Class,
    Interface,
    Enum,
    Extends,
    Implements,
    Throws,
    Void,

    // Punctuation
    At,
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Lt,
    Gt,
    Comma,
    Semicolon,
    Dot,
    Ellipsis,
    Eq,
    Question,
    Star,
    /// Any other operator character.
    Symbol,

    /// Character the lexer could not classify.
    Error,
    Eof,
}

impl TokenKind {
    /// Identifiers and keywords.
    pub fn is_word(self) -> bool {
        matches!(
            self,
            TokenKind::Ident
                | TokenKind::Package
                | TokenKind::Import
                | TokenKind::Static
                | TokenKind::Public
                | TokenKind::Protected
                | TokenKind::Private
                | TokenKind::Abstract
                | TokenKind::Final
                | TokenKind::Synchronized
                | TokenKind::Volatile
                | TokenKind::Transient
                | TokenKind::Native
                | TokenKind::Default
                | TokenKind::Strictfp
                | TokenKind::Class
                | TokenKind::Interface
                | TokenKind::Enum
                | TokenKind::Extends
                | TokenKind::Implements
                | TokenKind::Throws
                | TokenKind::Void
        )
    }

    /// The keyword spelled `text`, if it is one the lexer reserves.
    pub fn keyword(text: &str) -> Option<TokenKind> {
        let kind = match text {
            "package" => TokenKind::Package,
            "import" => TokenKind::Import,
            "static" => TokenKind::Static,
            "public" => TokenKind::Public,
            "protected" => TokenKind::Protected,
            "private" => TokenKind::Private,
            "abstract" => TokenKind::Abstract,
            "final" => TokenKind::Final,
            "synchronized" => TokenKind::Synchronized,
            "volatile" => TokenKind::Volatile,
            "transient" => TokenKind::Transient,
            "native" => TokenKind::Native,
            "default" => TokenKind::Default,
            "strictfp" => TokenKind::Strictfp,
            "class" => TokenKind::Class,
            "interface" => TokenKind::Interface,
            "enum" => TokenKind::Enum,
            "extends" => TokenKind::Extends,
            "implements" => TokenKind::Implements,
            "throws" => TokenKind::Throws,
            "void" => TokenKind::Void,
            _ => return None,
        };
        Some(kind)
    }

    /// Declaration modifiers, including the ones the model does not carry.
    pub fn is_modifier(self) -> bool {
        matches!(
            self,
            TokenKind::Static
                | TokenKind::Public
                | TokenKind::Protected
                | TokenKind::Private
                | TokenKind::Abstract
                | TokenKind::Final
                | TokenKind::Synchronized
                | TokenKind::Volatile
                | TokenKind::Transient
                | TokenKind::Native
                | TokenKind::Default
                | TokenKind::Strictfp
        )
    }

    pub fn is_comment(self) -> bool {
        matches!(
            self,
            TokenKind::LineComment | TokenKind::BlockComment | TokenKind::DocComment
        )
    }

    /// Human-readable name for error messages.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Ident => "identifier",
            TokenKind::Number => "number",
            TokenKind::StringLit => "string literal",
            TokenKind::CharLit => "char literal",
            TokenKind::LineComment => "`//` comment",
            TokenKind::BlockComment => "`/*` comment",
            TokenKind::DocComment => "`/**` comment",
            TokenKind::Newline => "newline",
            TokenKind::Package => "`package`",
            TokenKind::Import => "`import`",
            TokenKind::Static => "`static`",
            TokenKind::Public => "`public`",
            TokenKind::Protected => "`protected`",
            TokenKind::Private => "`private`",
            TokenKind::Abstract => "`abstract`",
            TokenKind::Final => "`final`",
            TokenKind::Synchronized => "`synchronized`",
            TokenKind::Volatile => "`volatile`",
            TokenKind::Transient => "`transient`",
            TokenKind::Native => "`native`",
            TokenKind::Default => "`default`",
            TokenKind::Strictfp => "`strictfp`",
            TokenKind::Class => "`class`",
            TokenKind::Interface => "`interface`",
            TokenKind::Enum => "`enum`",
            TokenKind::Extends => "`extends`",
            TokenKind::Implements => "`implements`",
            TokenKind::Throws => "`throws`",
            TokenKind::Void => "`void`",
            TokenKind::At => "`@`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::LBrace => "`{`",
            TokenKind::RBrace => "`}`",
            TokenKind::LBracket => "`[`",
            TokenKind::RBracket => "`]`",
            TokenKind::Lt => "`<`",
            TokenKind::Gt => "`>`",
            TokenKind::Comma => "`,`",
            TokenKind::Semicolon => "`;`",
            TokenKind::Dot => "`.`",
            TokenKind::Ellipsis => "`...`",
            TokenKind::Eq => "`=`",
            TokenKind::Question => "`?`",
            TokenKind::Star => "`*`",
            TokenKind::Symbol => "symbol",
            TokenKind::Error => "invalid character",
            TokenKind::Eof => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A classified slice of the source text.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    pub span: Span,
}

impl<'src> Token<'src> {
    #[inline]
    pub fn new(kind: TokenKind, text: &'src str, span: Span) -> Self {
        Token { kind, text, span }
    }

    /// Whether a comment or literal token reached its closing delimiter.
    ///
    /// Always true for other kinds.
    pub fn is_terminated(&self) -> bool {
        match self.kind {
            TokenKind::BlockComment | TokenKind::DocComment => {
                self.text.len() >= 4 && self.text.ends_with("*/")
            }
            TokenKind::StringLit => {
                self.text.len() >= 2 && self.text.ends_with('"') && !ends_escaped(self.text)
            }
            TokenKind::CharLit => {
                self.text.len() >= 2 && self.text.ends_with('\'') && !ends_escaped(self.text)
            }
            _ => true,
        }
    }
}

/// Whether the final delimiter of a literal is escaped by an odd run of backslashes.
fn ends_escaped(text: &str) -> bool {
    let body = &text[..text.len() - 1];
    let backslashes = body.bytes().rev().take_while(|&b| b == b'\\').count();
    backslashes % 2 == 1
}

/// Token stream for one source text.
///
/// Invariant: the last token is always [`TokenKind::Eof`].
#[derive(Clone, Debug)]
pub struct TokenList<'src> {
    source: &'src str,
    tokens: Vec<Token<'src>>,
}

impl<'src> TokenList<'src> {
    /// Wrap scanned tokens, appending the EOF token.
    pub fn from_tokens(source: &'src str, mut tokens: Vec<Token<'src>>) -> Self {
        let eof = Span::from_range(source.len()..source.len());
        tokens.push(Token::new(TokenKind::Eof, "", eof));
        TokenList { source, tokens }
    }

    /// The full source text the tokens were sliced from.
    #[inline]
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Source text covered by a span.
    pub fn slice(&self, span: Span) -> &'src str {
        self.source.get(span.to_range()).unwrap_or("")
    }

    pub fn as_slice(&self) -> &[Token<'src>] {
        &self.tokens
    }

    /// Token kinds, mostly useful in tests.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }
}

impl<'src> Deref for TokenList<'src> {
    type Target = [Token<'src>];

    fn deref(&self) -> &Self::Target {
        &self.tokens
    }
}

impl<'src> Index<usize> for TokenList<'src> {
    type Output = Token<'src>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.tokens[index]
    }
}

#[cfg(test)]
mod tests;
