//! Grammar modules for parsing.
//!
//! One sub-parser per node kind, each an `impl Parser` block:
//! - `comment`: single- and multi-line comments
//! - `javadoc`: `/** ... */` blocks and their tags
//! - `annotation`: `@Name(...)`
//! - `header`: `package` and `import`
//! - `types`: type references and type parameters
//! - `member`: the prefix shared by classes, fields and methods
//! - `field`, `method`, `class`

mod annotation;
mod class;
mod comment;
mod field;
mod header;
mod javadoc;
mod member;
mod method;
mod types;

#[cfg(test)]
mod tests;

use kopi_ir::{NodeKind, Span, TokenKind};

use crate::{ParseError, Parser};

/// Content lines of a block comment's interior (between `/*` or `/**` and
/// `*/`).
///
/// Every `\n` starts a line; a leading `*` continuation marker and one
/// following space are dropped. The opening and closing lines only count
/// when they carry text.
pub(crate) fn comment_lines(interior: &str) -> Vec<String> {
    let segments: Vec<&str> = interior.split('\n').collect();
    let last = segments.len() - 1;
    let mut lines = Vec::with_capacity(segments.len());
    for (i, segment) in segments.iter().enumerate() {
        let line = if i == 0 {
            segment.trim()
        } else {
            let text = segment.trim_start();
            let text = text
                .strip_prefix("* ")
                .or_else(|| text.strip_prefix('*'))
                .unwrap_or(text);
            text.trim_end()
        };
        if (i == 0 || i == last) && line.is_empty() {
            continue;
        }
        lines.push(line.to_string());
    }
    lines
}

/// Collapse runs of blank lines to one and drop blank lines at both ends.
pub(crate) fn collapse_blank_lines(lines: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    for line in lines {
        if line.is_empty() && out.last().map_or(true, String::is_empty) {
            continue;
        }
        out.push(line);
    }
    while out.last().is_some_and(String::is_empty) {
        out.pop();
    }
    out
}

/// Join multi-line source text into one line: each line trimmed, blank
/// lines dropped, the rest separated by one space.
pub(crate) fn join_lines(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

impl Parser<'_> {
    /// Raw source text from the cursor up to (not including) the first token
    /// at bracket depth zero for which `stop` holds.
    ///
    /// Brackets are counted over `()`, `{}` and `[]`; an unmatched closing
    /// bracket also ends the text. Strings and comments are atomic tokens,
    /// so brackets inside them never count.
    pub(crate) fn raw_text(
        &mut self,
        node: NodeKind,
        stop: impl Fn(TokenKind) -> bool,
    ) -> Result<(String, Span), ParseError> {
        let mut depth = 0usize;
        let mut first: Option<Span> = None;
        let mut last = Span::DUMMY;
        loop {
            let token = self.cursor.current();
            match token.kind {
                TokenKind::Eof => break,
                kind if depth == 0 && stop(kind) => break,
                TokenKind::LParen | TokenKind::LBrace | TokenKind::LBracket => depth += 1,
                TokenKind::RParen | TokenKind::RBrace | TokenKind::RBracket => {
                    if depth == 0 {
                        break;
                    }
                    depth -= 1;
                }
                TokenKind::Error => return Err(self.cursor.unexpected(node, "an expression")),
                TokenKind::StringLit | TokenKind::CharLit if !token.is_terminated() => {
                    return Err(self.cursor.unexpected(node, "an expression"));
                }
                _ => {}
            }
            if token.kind != TokenKind::Newline {
                first.get_or_insert(token.span);
                last = token.span;
            }
            self.cursor.advance();
        }

        match first {
            Some(first) => {
                let span = first.merge(last);
                Ok((join_lines(self.cursor.slice(span)), span))
            }
            None => Err(self.cursor.unexpected(node, "a value")),
        }
    }
}
