//! Field declarations.

use kopi_ir::{Field, FieldBuilder, NodeKind, TokenKind, Visibility};

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse `[prefix] Type name [= value];`.
    ///
    /// The initializer is kept as source text, joined into one line. A
    /// missing `;` is accepted at end of input.
    pub(crate) fn parse_field(&mut self) -> Result<Field, ParseError> {
        let prefix = self.parse_member_prefix(NodeKind::Field)?;
        prefix.modifiers.reject(
            NodeKind::Field,
            &[TokenKind::Abstract, TokenKind::Synchronized],
        )?;

        let ty = self.parse_type_text(NodeKind::Field)?;
        let name = self.cursor.expect_ident(NodeKind::Field, "a field name")?;
        let value = if self.cursor.eat(TokenKind::Eq).is_some() {
            self.cursor.skip_newlines();
            let (value, _) =
                self.raw_text(NodeKind::Field, |kind| kind == TokenKind::Semicolon)?;
            Some(value)
        } else {
            None
        };
        if self.cursor.eat(TokenKind::Semicolon).is_none() && !self.cursor.is_at_end() {
            return Err(self.cursor.unexpected(NodeKind::Field, "`;`"));
        }

        let modifiers = &prefix.modifiers;
        let mut builder = FieldBuilder::editable()
            .with_visibility(modifiers.visibility.unwrap_or(Visibility::PackagePrivate))
            .with_static(modifiers.is_static)
            .with_final(modifiers.is_final)
            .with_transient(modifiers.is_transient)
            .with_volatile(modifiers.is_volatile)
            .with_type(ty)
            .with_name(name);
        if let Some(comment) = prefix.section_comment {
            builder = builder.with_section_comment(comment);
        }
        if let Some(javadoc) = prefix.javadoc {
            builder = builder.with_javadoc(javadoc);
        }
        for annotation in prefix.annotations {
            builder = builder.with_annotation(annotation);
        }
        if let Some(value) = value {
            builder = builder.with_value(value);
        }

        let span = prefix.span.merge(self.cursor.previous_span());
        builder
            .build()
            .map_err(|err| ParseError::from_build(err, span))
    }
}
