//! Annotation parsing.

use kopi_ir::{Annotation, AnnotationBuilder, NodeKind, TokenKind};

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse `@Name`, `@Name(value)` or `@Name(key = value, ...)`.
    ///
    /// Argument values are raw source text; multi-line values are joined
    /// into one line.
    pub(crate) fn parse_annotation(&mut self) -> Result<Annotation, ParseError> {
        let at = self.cursor.expect(TokenKind::At, NodeKind::Annotation)?;
        let name = self.parse_qualified_name(NodeKind::Annotation, "an annotation name")?;
        let mut builder = AnnotationBuilder::editable().with_name(name);

        if self.cursor.eat(TokenKind::LParen).is_some() {
            self.cursor.skip_newlines();
            if self.cursor.eat(TokenKind::RParen).is_none() {
                loop {
                    self.cursor.skip_newlines();
                    // `x == 1` lexes as two `=` and is a bare value.
                    let keyed = self.cursor.check(TokenKind::Ident)
                        && self.cursor.peek_kind(1) == TokenKind::Eq
                        && self.cursor.peek_kind(2) != TokenKind::Eq;
                    let key = if keyed {
                        let key = self.cursor.advance().text;
                        self.cursor.advance();
                        Some(key)
                    } else {
                        None
                    };
                    let (value, _) = self.raw_text(NodeKind::Annotation, |kind| {
                        matches!(kind, TokenKind::Comma | TokenKind::RParen)
                    })?;
                    builder = match key {
                        Some(key) => builder.with_param(key, value),
                        None => builder.with_value(value),
                    };
                    if self.cursor.eat(TokenKind::Comma).is_some() {
                        continue;
                    }
                    if self.cursor.eat(TokenKind::RParen).is_some() {
                        break;
                    }
                    return Err(ParseError::structural(
                        NodeKind::Annotation,
                        "Failed to find closing parenthesis of annotation",
                        self.cursor.current_span(),
                    ));
                }
            }
        }

        let span = at.span.merge(self.cursor.previous_span());
        builder
            .build()
            .map_err(|err| ParseError::from_build(err, span))
    }

    /// Parse `a.b.C`, returning the dotted text.
    pub(crate) fn parse_qualified_name(
        &mut self,
        node: NodeKind,
        what: &str,
    ) -> Result<String, ParseError> {
        let mut name = self.cursor.expect_ident(node, what)?.to_string();
        while self.cursor.check(TokenKind::Dot) && self.cursor.peek_kind(1) == TokenKind::Ident {
            self.cursor.advance();
            name.push('.');
            name.push_str(self.cursor.advance().text);
        }
        Ok(name)
    }
}
