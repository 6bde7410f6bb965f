//! Parse error types.
//!
//! Every error names the node kind it occurred within. Structural problems
//! carry one message; semantic checks that can find several problems (such
//! as duplicate Javadoc tags) carry all of them.

use std::fmt;

use kopi_ir::{BuildError, NodeError, NodeKind, Span, Token, TokenKind};

#[cfg(test)]
mod tests;

/// What went wrong, independent of where.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// Unrecognized character or unterminated literal.
    Lex,
    /// Missing or unexpected delimiter, keyword or token.
    Structural,
    /// Well-formed tokens that do not make a valid node.
    Semantic,
    /// The parsed attributes failed builder validation.
    Build,
    /// A complete node was parsed but tokens remain.
    TrailingInput,
}

impl ParseErrorKind {
    pub fn description(self) -> &'static str {
        match self {
            ParseErrorKind::Lex => "lexical error",
            ParseErrorKind::Structural => "structural error",
            ParseErrorKind::Semantic => "semantic error",
            ParseErrorKind::Build => "invalid node",
            ParseErrorKind::TrailingInput => "trailing input",
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// A failed parse. No partial node is ever returned alongside it.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind} in {node}: {}", .messages.join("\n"))]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub node: NodeKind,
    pub messages: Vec<String>,
    pub span: Span,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, node: NodeKind, message: impl Into<String>, span: Span) -> Self {
        ParseError {
            kind,
            node,
            messages: vec![message.into()],
            span,
        }
    }

    pub fn structural(node: NodeKind, message: impl Into<String>, span: Span) -> Self {
        Self::new(ParseErrorKind::Structural, node, message, span)
    }

    pub fn lex(node: NodeKind, message: impl Into<String>, span: Span) -> Self {
        Self::new(ParseErrorKind::Lex, node, message, span)
    }

    /// Several semantic problems found in one pass.
    pub fn semantic(node: NodeKind, messages: Vec<String>, span: Span) -> Self {
        ParseError {
            kind: ParseErrorKind::Semantic,
            node,
            messages,
            span,
        }
    }

    /// Tokens left over after a complete `node`.
    pub fn trailing(node: NodeKind, found: &Token<'_>) -> Self {
        Self::new(
            ParseErrorKind::TrailingInput,
            node,
            format!(
                "Unexpected {} after complete {node}",
                found.kind.display_name()
            ),
            found.span,
        )
    }

    pub fn from_build(err: BuildError, span: Span) -> Self {
        ParseError {
            kind: ParseErrorKind::Build,
            node: err.kind,
            messages: err.violations,
            span,
        }
    }

    pub fn from_node_error(node: NodeKind, err: &NodeError, span: Span) -> Self {
        Self::new(ParseErrorKind::Build, node, err.to_string(), span)
    }

    /// Error for a token no rule accepts here.
    ///
    /// Error tokens and unterminated literals are reported as lexical
    /// problems; everything else as a structural one.
    pub fn unexpected(node: NodeKind, found: &Token<'_>, expected: &str) -> Self {
        match found.kind {
            TokenKind::Error => Self::lex(
                node,
                format!("Unrecognized character '{}'", found.text),
                found.span,
            ),
            TokenKind::StringLit | TokenKind::CharLit if !found.is_terminated() => Self::lex(
                node,
                format!("Unterminated {}", found.kind.display_name()),
                found.span,
            ),
            _ => Self::structural(
                node,
                format!("Expected {expected}, found {}", found.kind.display_name()),
                found.span,
            ),
        }
    }

    /// The first message.
    pub fn message(&self) -> &str {
        self.messages.first().map_or("", String::as_str)
    }

    /// Whether any message contains `needle`.
    pub fn mentions(&self, needle: &str) -> bool {
        self.messages.iter().any(|m| m.contains(needle))
    }
}
