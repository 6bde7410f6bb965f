//! Top-level dispatch.
//!
//! Decides which sub-parser owns the construct at the cursor from its first
//! token and a bounded lookahead over the member prefix (Javadoc,
//! annotations, modifiers):
//!
//! - `//` is a single-line comment, unless a field or method follows on the
//!   next line, which owns it as its section comment
//! - `/**` and `@` belong to a following class, field or method, otherwise
//!   they are a standalone Javadoc or annotation
//! - `/*` is a multi-line comment
//! - `package` and `import` open a class file when a class follows
//! - otherwise `class`/`interface` make a class, and the first of `(` versus
//!   `;`/`=` separates methods from fields

use kopi_ir::{Node, NodeKind, TokenKind};
use tracing::trace;

use crate::{ParseError, Parser};


/// Where a construct appears.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Scope {
    /// A whole input or an embedded parse; classes here are outer classes.
    TopLevel,
    /// Inside a class body; classes here are inner classes.
    ClassBody,
}

/// What the tokens after a member prefix declare.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Target {
    Class,
    Field,
    Method,
    Enum,
    AnnotationType,
    Initializer,
    Unknown,
}

impl Parser<'_> {
    /// Parse the node starting at the cursor.
    pub(crate) fn parse_node(&mut self, scope: Scope) -> Result<Node, ParseError> {
        self.cursor.skip_newlines();
        let start = self.cursor.position();
        let kind = self.cursor.current_kind();
        trace!(pos = start, kind = %kind.display_name(), ?scope, "dispatch");

        match kind {
            TokenKind::LineComment => {
                if self.is_section_comment(start) {
                    self.parse_member(scope)
                } else {
                    Ok(Node::SingleLineComment(self.parse_single_line_comment()?))
                }
            }
            TokenKind::BlockComment => Ok(Node::MultiLineComment(self.parse_multi_line_comment()?)),
            TokenKind::Package | TokenKind::Import => {
                if scope == Scope::ClassBody {
                    return Err(self.cursor.unexpected(NodeKind::Class, "a class member"));
                }
                if self.class_follows(start) {
                    Ok(Node::Class(self.parse_class(scope)?))
                } else if kind == TokenKind::Package {
                    Ok(Node::PackageDeclaration(self.parse_package()?))
                } else {
                    Ok(Node::ImportStatement(self.parse_import()?))
                }
            }
            TokenKind::DocComment | TokenKind::At => match self.member_target(start) {
                Target::Unknown if kind == TokenKind::DocComment => {
                    Ok(Node::Javadoc(self.parse_javadoc()?))
                }
                Target::Unknown => Ok(Node::Annotation(self.parse_annotation()?)),
                _ => self.parse_member(scope),
            },
            _ => self.parse_member(scope),
        }
    }

    /// Parse a class, field or method, including its prefix.
    fn parse_member(&mut self, scope: Scope) -> Result<Node, ParseError> {
        let start = self.cursor.position();
        let target = self.member_target(start);
        trace!(pos = start, ?target, "member target");
        let span = self.cursor.current_span();
        match target {
            Target::Class => Ok(Node::Class(self.parse_class(scope)?)),
            Target::Field => Ok(Node::Field(self.parse_field()?)),
            Target::Method => Ok(Node::Method(self.parse_method()?)),
            Target::Enum => Err(ParseError::structural(
                NodeKind::Class,
                "Enum declarations are not supported",
                span,
            )),
            Target::AnnotationType => Err(ParseError::structural(
                NodeKind::Class,
                "Annotation type declarations are not supported",
                span,
            )),
            Target::Initializer => Err(ParseError::structural(
                NodeKind::Class,
                "Initializer blocks are not supported",
                span,
            )),
            Target::Unknown => Err(self.cursor.unexpected(NodeKind::Class, "a declaration")),
        }
    }

    /// A `//` comment directly followed, on the next line, by a field or
    /// method.
    fn is_section_comment(&self, index: usize) -> bool {
        self.cursor.kind_at(index + 1) == TokenKind::Newline
            && self.cursor.kind_at(index + 2) != TokenKind::Newline
            && matches!(self.member_target(index + 2), Target::Field | Target::Method)
    }

    /// Whether a `class` or `interface` keyword appears at or after `index`.
    fn class_follows(&self, index: usize) -> bool {
        self.cursor
            .tokens()
            .iter()
            .skip(index)
            .any(|t| matches!(t.kind, TokenKind::Class | TokenKind::Interface))
    }

    /// Classify the declaration starting at `index`, skipping its prefix.
    pub(crate) fn member_target(&self, index: usize) -> Target {
        let mut i = index;
        if self.cursor.kind_at(i) == TokenKind::LineComment
            && self.cursor.kind_at(i + 1) == TokenKind::Newline
        {
            i += 2;
        }
        loop {
            match self.cursor.kind_at(i) {
                TokenKind::Newline | TokenKind::DocComment => i += 1,
                TokenKind::At => {
                    if self.cursor.kind_at(i + 1) == TokenKind::Interface {
                        return Target::AnnotationType;
                    }
                    i = self.skip_annotation(i);
                }
                kind if kind.is_modifier() => i += 1,
                _ => break,
            }
        }

        match self.cursor.kind_at(i) {
            TokenKind::Class | TokenKind::Interface => return Target::Class,
            TokenKind::Enum => return Target::Enum,
            TokenKind::LBrace => return Target::Initializer,
            _ => {}
        }

        let mut significant = 0usize;
        loop {
            match self.cursor.kind_at(i) {
                TokenKind::LParen => return Target::Method,
                TokenKind::Semicolon | TokenKind::Eq => return Target::Field,
                TokenKind::Eof => {
                    return if significant >= 2 {
                        Target::Field
                    } else {
                        Target::Unknown
                    };
                }
                TokenKind::Newline => {}
                TokenKind::Ident
                | TokenKind::Void
                | TokenKind::Lt
                | TokenKind::Gt
                | TokenKind::Comma
                | TokenKind::Dot
                | TokenKind::LBracket
                | TokenKind::RBracket
                | TokenKind::Question
                | TokenKind::Ellipsis
                | TokenKind::Extends
                | TokenKind::Symbol => significant += 1,
                _ => return Target::Unknown,
            }
            i += 1;
        }
    }

    /// Index just past the annotation starting at `index` (`@Name(...)`).
    fn skip_annotation(&self, index: usize) -> usize {
        let mut i = index + 1;
        while matches!(self.cursor.kind_at(i), TokenKind::Ident | TokenKind::Dot) {
            i += 1;
        }
        if self.cursor.kind_at(i) != TokenKind::LParen {
            return i;
        }
        let mut depth = 0usize;
        loop {
            match self.cursor.kind_at(i) {
                TokenKind::LParen => depth += 1,
                TokenKind::RParen => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        return i + 1;
                    }
                }
                TokenKind::Eof => return i,
                _ => {}
            }
            i += 1;
        }
    }
}
