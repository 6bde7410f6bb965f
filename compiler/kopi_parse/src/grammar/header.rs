//! `package` and `import` declarations.

use kopi_ir::{
    ImportStatement, ImportStatementBuilder, NodeKind, PackageDeclaration,
    PackageDeclarationBuilder, TokenKind,
};

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse `package a.b;`.
    pub(crate) fn parse_package(&mut self) -> Result<PackageDeclaration, ParseError> {
        let node = NodeKind::PackageDeclaration;
        let start = self.cursor.expect(TokenKind::Package, node)?.span;
        let name = self.parse_qualified_name(node, "a package name")?;
        let end = self.cursor.expect(TokenKind::Semicolon, node)?.span;
        PackageDeclarationBuilder::editable()
            .with_name(name)
            .build()
            .map_err(|err| ParseError::from_build(err, start.merge(end)))
    }

    /// Parse `import [static] a.b.C;` or a wildcard `import a.b.*;`.
    pub(crate) fn parse_import(&mut self) -> Result<ImportStatement, ParseError> {
        let node = NodeKind::ImportStatement;
        let start = self.cursor.expect(TokenKind::Import, node)?.span;
        let is_static = self.cursor.eat(TokenKind::Static).is_some();
        let mut path = self.parse_qualified_name(node, "an import path")?;
        if self.cursor.check(TokenKind::Dot) && self.cursor.peek_kind(1) == TokenKind::Star {
            self.cursor.advance();
            self.cursor.advance();
            path.push_str(".*");
        }
        let end = self.cursor.expect(TokenKind::Semicolon, node)?.span;
        ImportStatementBuilder::editable()
            .with_path(path)
            .with_static(is_static)
            .build()
            .map_err(|err| ParseError::from_build(err, start.merge(end)))
    }
}
