//! The prefix shared by classes, fields and methods: section comment,
//! Javadoc, annotations and modifiers.

use kopi_ir::{Annotation, Javadoc, NodeKind, Span, TokenKind, Visibility};

use super::comment::line_comment_text;
use crate::{ParseError, Parser};

/// Modifier keywords as written.
#[derive(Clone, Debug, Default)]
pub(crate) struct Modifiers {
    pub visibility: Option<Visibility>,
    pub is_static: bool,
    pub is_final: bool,
    pub is_abstract: bool,
    pub is_synchronized: bool,
    pub is_transient: bool,
    pub is_volatile: bool,
    /// Keywords seen in source order, for diagnostics.
    pub written: Vec<(TokenKind, Span)>,
}

impl Modifiers {
    /// Fail on any modifier `node` cannot carry.
    pub fn reject(&self, node: NodeKind, disallowed: &[TokenKind]) -> Result<(), ParseError> {
        let messages: Vec<String> = self
            .written
            .iter()
            .filter(|(kind, _)| disallowed.contains(kind))
            .map(|(kind, _)| format!("Modifier {kind} is not allowed on a {node}"))
            .collect();
        match self.written.iter().find(|(kind, _)| disallowed.contains(kind)) {
            Some(&(_, span)) => Err(ParseError::semantic(node, messages, span)),
            None => Ok(()),
        }
    }
}

/// Everything before a declaration's own keywords.
#[derive(Clone, Debug, Default)]
pub(crate) struct MemberPrefix {
    pub section_comment: Option<String>,
    pub javadoc: Option<Javadoc>,
    pub annotations: Vec<Annotation>,
    pub modifiers: Modifiers,
    pub span: Span,
}

impl Parser<'_> {
    /// Parse the member prefix. A `//` comment is only taken as a section
    /// comment when `node` can own one.
    pub(crate) fn parse_member_prefix(&mut self, node: NodeKind) -> Result<MemberPrefix, ParseError> {
        self.cursor.skip_newlines();
        let mut prefix = MemberPrefix {
            span: self.cursor.current_span(),
            ..MemberPrefix::default()
        };

        if matches!(node, NodeKind::Field | NodeKind::Method)
            && self.cursor.check(TokenKind::LineComment)
            && self.cursor.peek_kind(1) == TokenKind::Newline
        {
            prefix.section_comment = Some(line_comment_text(self.cursor.advance().text));
            self.cursor.advance();
        }

        self.cursor.skip_newlines();
        if self.cursor.check(TokenKind::DocComment) {
            prefix.javadoc = Some(self.parse_javadoc()?);
            self.cursor.skip_newlines();
        }

        while self.cursor.check(TokenKind::At) {
            prefix.annotations.push(self.parse_annotation()?);
            self.cursor.skip_newlines();
        }

        prefix.modifiers = self.parse_modifiers(node)?;
        Ok(prefix)
    }

    fn parse_modifiers(&mut self, node: NodeKind) -> Result<Modifiers, ParseError> {
        let mut modifiers = Modifiers::default();
        let mut problems = Vec::new();
        let mut first_problem = None;
        while self.cursor.current_kind().is_modifier() {
            let token = self.cursor.advance();
            let kind = token.kind;
            if modifiers.written.iter().any(|(seen, _)| *seen == kind) {
                problems.push(format!("Duplicate modifier {kind}"));
                first_problem.get_or_insert(token.span);
            }
            modifiers.written.push((kind, token.span));
            let visibility = match kind {
                TokenKind::Public => Some(Visibility::Public),
                TokenKind::Protected => Some(Visibility::Protected),
                TokenKind::Private => Some(Visibility::Private),
                _ => None,
            };
            if let Some(visibility) = visibility {
                if modifiers.visibility.is_some_and(|v| v != visibility) {
                    problems.push("Conflicting visibility modifiers".to_string());
                    first_problem.get_or_insert(token.span);
                }
                modifiers.visibility = Some(visibility);
            }
            match kind {
                TokenKind::Static => modifiers.is_static = true,
                TokenKind::Final => modifiers.is_final = true,
                TokenKind::Abstract => modifiers.is_abstract = true,
                TokenKind::Synchronized => modifiers.is_synchronized = true,
                TokenKind::Transient => modifiers.is_transient = true,
                TokenKind::Volatile => modifiers.is_volatile = true,
                TokenKind::Native | TokenKind::Default | TokenKind::Strictfp => {
                    problems.push(format!("Modifier {kind} is not supported"));
                    first_problem.get_or_insert(token.span);
                }
                _ => {}
            }
            self.cursor.skip_newlines();
        }
        match first_problem {
            Some(span) => Err(ParseError::semantic(node, problems, span)),
            None => Ok(modifiers),
        }
    }
}
