//! Lexer for Java source text using logos.
//!
//! Produces a `TokenList` whose tokens borrow their text from the source.
//! Lexing never fails: characters the scanner cannot classify become
//! `TokenKind::Error` tokens for the parser to reject.

mod convert;
mod raw_token;

use kopi_ir::{Span, Token, TokenKind, TokenList};
use logos::Logos;
use tracing::debug;

use crate::convert::convert_token;
use crate::raw_token::RawToken;

/// Lex source text into a `TokenList` ending in `Eof`.
///
/// Horizontal whitespace is skipped; every `\n` is its own token.
pub fn tokenize(source: &str) -> TokenList<'_> {
    let mut tokens = Vec::with_capacity(source.len() / 4);
    let mut logos = RawToken::lexer(source);

    while let Some(result) = logos.next() {
        let span = Span::from_range(logos.span());
        let slice = logos.slice();
        let kind = match result {
            Ok(raw) => convert_token(raw, slice),
            Err(()) => TokenKind::Error,
        };
        tokens.push(Token::new(kind, slice, span));
    }

    debug!(bytes = source.len(), tokens = tokens.len(), "tokenized");
    TokenList::from_tokens(source, tokens)
}
