//! Type references and type parameters.
//!
//! The grammar here only decides where a type ends. The source text it
//! covers is then spelled canonically by [`kopi_ir::syntax`], the same
//! rules the builders apply, so parsed and built types always agree.

use kopi_ir::{syntax, NodeKind, Span, TokenKind, TypeTextError};

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse one type reference and return its canonical text.
    ///
    /// A trailing `...` (varargs) is part of the type.
    pub(crate) fn parse_type_text(&mut self, node: NodeKind) -> Result<String, ParseError> {
        let start = self.cursor.current_span();
        self.skip_type(node)?;
        self.cursor.eat(TokenKind::Ellipsis);
        self.canonical(node, start, syntax::canonical_type)
    }

    /// Parse `<T, U extends Bound & Other>` and return its canonical text.
    pub(crate) fn parse_type_parameters(&mut self, node: NodeKind) -> Result<String, ParseError> {
        let start = self.cursor.current_span();
        self.cursor.expect(TokenKind::Lt, node)?;
        loop {
            self.skip_annotations(node)?;
            match self.cursor.current_kind() {
                TokenKind::Ident | TokenKind::Question => {
                    self.cursor.advance();
                }
                _ => return Err(self.cursor.unexpected(node, "a type parameter")),
            }
            if self.cursor.eat(TokenKind::Extends).is_some() {
                self.skip_type(node)?;
                while self.cursor.current().text == "&" {
                    self.cursor.advance();
                    self.skip_type(node)?;
                }
            }
            if self.cursor.eat(TokenKind::Comma).is_some() {
                continue;
            }
            self.cursor.expect(TokenKind::Gt, node)?;
            return self.canonical(node, start, syntax::canonical_type_parameters);
        }
    }

    /// Canonical spelling of the source from `start` through the last
    /// consumed token.
    fn canonical(
        &self,
        node: NodeKind,
        start: Span,
        spell: fn(&str) -> Result<String, TypeTextError>,
    ) -> Result<String, ParseError> {
        let span = start.merge(self.cursor.previous_span());
        spell(self.cursor.slice(span))
            .map_err(|err| ParseError::semantic(node, vec![err.to_string()], span))
    }

    /// `Name(.Name)*` with optional type arguments on each segment, then
    /// array dimensions.
    fn skip_type(&mut self, node: NodeKind) -> Result<(), ParseError> {
        self.skip_annotations(node)?;
        match self.cursor.current_kind() {
            TokenKind::Ident | TokenKind::Void => {
                self.cursor.advance();
            }
            _ => return Err(self.cursor.unexpected(node, "a type")),
        }
        loop {
            if self.cursor.check(TokenKind::Lt) {
                self.skip_type_arguments(node)?;
            }
            if self.cursor.check(TokenKind::Dot) && self.cursor.peek_kind(1) == TokenKind::Ident {
                self.cursor.advance();
                self.cursor.advance();
            } else {
                break;
            }
        }
        while self.cursor.check(TokenKind::LBracket)
            && self.cursor.peek_kind(1) == TokenKind::RBracket
        {
            self.cursor.advance();
            self.cursor.advance();
        }
        Ok(())
    }

    /// `<A, ? extends B, ? super C>`
    fn skip_type_arguments(&mut self, node: NodeKind) -> Result<(), ParseError> {
        self.cursor.expect(TokenKind::Lt, node)?;
        if self.cursor.eat(TokenKind::Gt).is_some() {
            return Ok(());
        }
        loop {
            if self.cursor.eat(TokenKind::Question).is_some() {
                let bounded = self.cursor.check(TokenKind::Extends)
                    || (self.cursor.check(TokenKind::Ident) && self.cursor.current().text == "super");
                if bounded {
                    self.cursor.advance();
                    self.skip_type(node)?;
                }
            } else {
                self.skip_type(node)?;
            }
            if self.cursor.eat(TokenKind::Comma).is_some() {
                continue;
            }
            self.cursor.expect(TokenKind::Gt, node)?;
            return Ok(());
        }
    }

    /// Type-use annotations such as `@NonNull` or `@Named("x")`, kept as
    /// part of the type. Arguments are opaque.
    fn skip_annotations(&mut self, node: NodeKind) -> Result<(), ParseError> {
        while self.cursor.eat(TokenKind::At).is_some() {
            self.cursor.expect(TokenKind::Ident, node)?;
            while self.cursor.check(TokenKind::Dot) && self.cursor.peek_kind(1) == TokenKind::Ident
            {
                self.cursor.advance();
                self.cursor.advance();
            }
            if self.cursor.eat(TokenKind::LParen).is_some()
                && self.cursor.eat(TokenKind::RParen).is_none()
            {
                self.raw_text(node, |kind| kind == TokenKind::RParen)?;
                self.cursor.expect(TokenKind::RParen, node)?;
            }
        }
        Ok(())
    }
}
