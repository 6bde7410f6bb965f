//! Recursive descent parser for Java source files.
//!
//! Produces `kopi_ir` nodes. The dispatcher decides which sub-parser owns
//! the next construct with bounded lookahead; each sub-parser consumes
//! exactly one node's tokens and returns the node or a [`ParseError`].
//! Method bodies and initializer expressions are kept as source text.

mod config;
mod cursor;
mod dispatch;
mod error;
mod grammar;
mod validate;

pub use config::ParseConfig;
pub use cursor::Cursor;
pub use error::{ParseError, ParseErrorKind};
pub use validate::Validator;

use kopi_ir::{Node, NodeKind, Span, TokenList};
use tracing::debug;

use crate::dispatch::Scope;

/// Parser state.
pub(crate) struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(tokens: &'a TokenList<'a>, pos: usize) -> Self {
        Parser {
            cursor: Cursor::new(tokens, pos),
        }
    }
}

/// Parse a whole source text into a single node.
///
/// Fails on empty input and when tokens remain after the node.
pub fn parse_type(source: &str) -> Result<Node, ParseError> {
    parse_type_with(source, &ParseConfig::default())
}

pub fn parse_type_with(source: &str, config: &ParseConfig) -> Result<Node, ParseError> {
    let tokens = kopi_lexer::tokenize(source);
    let mut parser = Parser::new(&tokens, 0);
    parser.cursor.skip_newlines();
    if parser.cursor.is_at_end() {
        return Err(ParseError::structural(
            NodeKind::Class,
            "Expected a declaration, found end of input",
            parser.cursor.current_span(),
        ));
    }

    let start = parser.cursor.current_span();
    let node = parser.parse_node(Scope::TopLevel)?;
    parser.cursor.skip_newlines();
    if !parser.cursor.is_at_end() {
        return Err(ParseError::trailing(node.kind(), parser.cursor.current()));
    }
    debug!(kind = %node.kind(), tokens = tokens.len(), "parsed source");
    finish(node, config, start.merge(parser.cursor.previous_span()))
}

/// Parse the node starting at token index `start`.
///
/// Leading newlines are skipped. Returns the node and the index of the first
/// token after it, or `None` when only newlines remain.
pub fn parse_type_at(
    tokens: &TokenList<'_>,
    start: usize,
) -> Result<Option<(Node, usize)>, ParseError> {
    parse_type_at_with(tokens, start, &ParseConfig::default())
}

pub fn parse_type_at_with(
    tokens: &TokenList<'_>,
    start: usize,
    config: &ParseConfig,
) -> Result<Option<(Node, usize)>, ParseError> {
    let mut parser = Parser::new(tokens, start);
    parser.cursor.skip_newlines();
    if parser.cursor.is_at_end() {
        return Ok(None);
    }
    let span = parser.cursor.current_span();
    let node = parser.parse_node(Scope::TopLevel)?;
    let next = parser.cursor.position();
    debug!(kind = %node.kind(), start, next, "parsed embedded node");
    let node = finish(node, config, span.merge(parser.cursor.previous_span()))?;
    Ok(Some((node, next)))
}

/// Apply the configured post-processing to a freshly parsed, editable tree.
fn finish(mut node: Node, config: &ParseConfig, span: Span) -> Result<Node, ParseError> {
    if config.resolve_annotation_names {
        Validator::resolve_node_canonical_names(&mut node)
            .map_err(|err| ParseError::from_node_error(node.kind(), &err, span))?;
    }
    if config.mutability.is_editable() {
        Ok(node)
    } else {
        Ok(node.into_fixed())
    }
}
