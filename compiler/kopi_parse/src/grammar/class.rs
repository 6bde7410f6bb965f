//! Class and interface declarations.

use kopi_ir::{
    Class, ClassBuilder, ElementKind, ElementRef, Node, NodeKind, TokenKind, Visibility,
};
use tracing::debug;

use crate::dispatch::Scope;
use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse a class or interface.
    ///
    /// At top level the declaration may be preceded by one `package` and any
    /// number of imports. Body elements keep their source order.
    pub(crate) fn parse_class(&mut self, scope: Scope) -> Result<Class, ParseError> {
        let node = NodeKind::Class;
        self.cursor.skip_newlines();
        let start = self.cursor.current_span();
        let inner = scope == Scope::ClassBody;
        let mut builder = ClassBuilder::editable().inner(inner);

        if !inner {
            let mut package_seen = false;
            loop {
                self.cursor.skip_newlines();
                match self.cursor.current_kind() {
                    TokenKind::Package => {
                        let span = self.cursor.current_span();
                        let package = self.parse_package()?;
                        if package_seen {
                            return Err(ParseError::semantic(
                                node,
                                vec!["Found multiple package declarations".to_string()],
                                span,
                            ));
                        }
                        package_seen = true;
                        builder = builder.with_package(package.name());
                    }
                    TokenKind::Import => {
                        let import = self.parse_import()?;
                        builder = if import.is_static() {
                            builder.with_static_import(import.path())
                        } else {
                            builder.with_import(import.path())
                        };
                    }
                    _ => break,
                }
            }
        }

        let prefix = self.parse_member_prefix(node)?;
        prefix.modifiers.reject(
            node,
            &[TokenKind::Transient, TokenKind::Volatile, TokenKind::Synchronized],
        )?;
        let modifiers = &prefix.modifiers;
        builder = builder
            .with_visibility(modifiers.visibility.unwrap_or(Visibility::PackagePrivate))
            .with_static(modifiers.is_static)
            .with_abstract(modifiers.is_abstract)
            .with_final(modifiers.is_final);
        if let Some(javadoc) = prefix.javadoc {
            builder = builder.with_javadoc(javadoc);
        }
        for annotation in prefix.annotations {
            builder = builder.with_annotation(annotation);
        }

        let is_interface = match self.cursor.current_kind() {
            TokenKind::Class => false,
            TokenKind::Interface => true,
            _ => return Err(self.cursor.unexpected(node, "`class` or `interface`")),
        };
        self.cursor.advance();
        builder = builder.interface(is_interface);

        let mut name = self.cursor.expect_ident(node, "a class name")?.to_string();
        if self.cursor.check(TokenKind::Lt) {
            name.push_str(&self.parse_type_parameters(node)?);
        }
        builder = builder.with_name(name.as_str());

        self.cursor.skip_newlines();
        if self.cursor.eat(TokenKind::Extends).is_some() {
            if is_interface {
                for interface in self.parse_type_list(node)? {
                    builder = builder.with_implements(interface);
                }
            } else {
                self.cursor.skip_newlines();
                builder = builder.with_superclass(self.parse_type_text(node)?);
            }
        }
        self.cursor.skip_newlines();
        if !is_interface && self.cursor.eat(TokenKind::Implements).is_some() {
            for interface in self.parse_type_list(node)? {
                builder = builder.with_implements(interface);
            }
        }

        self.cursor.skip_newlines();
        self.cursor.expect(TokenKind::LBrace, node)?;
        let mut order: Vec<ElementRef> = Vec::new();
        loop {
            self.cursor.skip_newlines();
            match self.cursor.current_kind() {
                TokenKind::RBrace => {
                    self.cursor.advance();
                    break;
                }
                TokenKind::Eof => {
                    return Err(ParseError::structural(
                        node,
                        format!("Failed to find closing brace of class {name}"),
                        start.merge(self.cursor.current_span()),
                    ));
                }
                TokenKind::Semicolon => {
                    self.cursor.advance();
                    continue;
                }
                _ => {}
            }

            let span = self.cursor.current_span();
            let element = self.parse_node(Scope::ClassBody)?;
            let kind = match &element {
                Node::SingleLineComment(_) => ElementKind::SingleLineComment,
                Node::MultiLineComment(_) => ElementKind::MultiLineComment,
                Node::Class(_) => ElementKind::InnerClass,
                Node::Field(_) => ElementKind::Field,
                Node::Method(_) => ElementKind::Method,
                other => {
                    return Err(ParseError::structural(
                        node,
                        format!("Dangling {} in class body", other.kind()),
                        span,
                    ));
                }
            };
            let index = order.iter().filter(|element| element.kind == kind).count();
            order.push(ElementRef::new(kind, index));
            builder = match element {
                Node::SingleLineComment(comment) => builder.with_single_line_comment(comment),
                Node::MultiLineComment(comment) => builder.with_multi_line_comment(comment),
                Node::Class(class) => builder.with_inner_class(class),
                Node::Field(field) => builder.with_field(field),
                Node::Method(method) => builder.with_method(method),
                _ => builder,
            };
        }

        debug!(class = %name, elements = order.len(), inner, "parsed class");
        let span = start.merge(self.cursor.previous_span());
        builder
            .with_element_order(order)
            .build()
            .map_err(|err| ParseError::from_build(err, span))
    }

    /// `A, B<T>, C`
    fn parse_type_list(&mut self, node: NodeKind) -> Result<Vec<String>, ParseError> {
        let mut types = Vec::new();
        loop {
            self.cursor.skip_newlines();
            types.push(self.parse_type_text(node)?);
            self.cursor.skip_newlines();
            if self.cursor.eat(TokenKind::Comma).is_none() {
                return Ok(types);
            }
        }
    }
}
