//! Token cursor for navigating the token stream.
//!
//! Provides low-level token access, lookahead, and consumption methods.
//! Lookahead past the end clamps to the trailing EOF token.

use kopi_ir::{NodeKind, Span, Token, TokenKind, TokenList};
use tracing::trace;

use crate::ParseError;

#[cfg(test)]
mod tests;

/// Cursor for navigating tokens.
pub struct Cursor<'a> {
    tokens: &'a TokenList<'a>,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at `pos`, clamped to the EOF token.
    pub fn new(tokens: &'a TokenList<'a>, pos: usize) -> Self {
        Cursor {
            tokens,
            pos: pos.min(tokens.len().saturating_sub(1)),
        }
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Get the token list reference for slicing source text.
    #[inline]
    pub fn tokens(&self) -> &'a TokenList<'a> {
        self.tokens
    }

    /// Get the current token.
    ///
    /// Invariant: the position is always valid and the last token is EOF.
    #[inline]
    pub fn current(&self) -> &'a Token<'a> {
        self.token_at(self.pos)
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Span of the token before the current one.
    pub fn previous_span(&self) -> Span {
        if self.pos > 0 {
            self.tokens[self.pos - 1].span
        } else {
            Span::DUMMY
        }
    }

    /// Token at an absolute index; EOF past the end.
    #[inline]
    pub fn token_at(&self, index: usize) -> &'a Token<'a> {
        let last = self.tokens.len() - 1;
        &self.tokens[index.min(last)]
    }

    /// Kind at an absolute index; EOF past the end.
    #[inline]
    pub fn kind_at(&self, index: usize) -> TokenKind {
        self.token_at(index).kind
    }

    /// Kind `n` tokens ahead of the current one.
    #[inline]
    pub fn peek_kind(&self, n: usize) -> TokenKind {
        self.kind_at(self.pos + n)
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.check(TokenKind::Eof)
    }

    /// Advance to the next token and return the consumed token.
    ///
    /// Never moves past EOF.
    #[inline]
    pub fn advance(&mut self) -> &'a Token<'a> {
        let token = self.current();
        trace!(
            pos = self.pos,
            kind = %token.kind.display_name(),
            span_start = token.span.start,
            span_end = token.span.end,
            "advance"
        );
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    /// Skip newline tokens, returning how many were skipped.
    pub fn skip_newlines(&mut self) -> usize {
        let start = self.pos;
        while self.check(TokenKind::Newline) {
            self.advance();
        }
        self.pos - start
    }

    /// Consume the current token if it has the given kind.
    pub fn eat(&mut self, kind: TokenKind) -> Option<&'a Token<'a>> {
        if self.check(kind) {
            Some(self.advance())
        } else {
            None
        }
    }

    /// Expect the current token to be of the given kind, advance and return it.
    pub fn expect(&mut self, kind: TokenKind, node: NodeKind) -> Result<&'a Token<'a>, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(node, kind.display_name()))
        }
    }

    /// Expect and consume an identifier, returning its text.
    pub fn expect_ident(&mut self, node: NodeKind, what: &str) -> Result<&'a str, ParseError> {
        if self.check(TokenKind::Ident) {
            Ok(self.advance().text)
        } else {
            Err(self.unexpected(node, what))
        }
    }

    /// Build the error for a token no rule accepts here.
    #[cold]
    pub fn unexpected(&self, node: NodeKind, expected: &str) -> ParseError {
        ParseError::unexpected(node, self.current(), expected)
    }

    /// Source text covered by a span.
    #[inline]
    pub fn slice(&self, span: Span) -> &'a str {
        self.tokens.slice(span)
    }
}
