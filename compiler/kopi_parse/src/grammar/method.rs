//! Method and constructor declarations.
//!
//! Bodies are not parsed: the text between the braces is split into lines
//! with the method's own indentation plus one level removed, so a body
//! prints back at any nesting depth.

use kopi_ir::{Method, MethodBuilder, NodeKind, Span, TokenKind, Visibility};

use crate::{ParseError, Parser};

/// Width of one indentation level in method bodies.
const BODY_INDENT: usize = 4;

impl Parser<'_> {
    /// Parse `[prefix] [<T>] Type name(params) [throws X, Y] { body }`.
    ///
    /// An identifier directly followed by `(` is a constructor. `;` instead
    /// of a body makes a bodiless method; so does end of input.
    pub(crate) fn parse_method(&mut self) -> Result<Method, ParseError> {
        let prefix = self.parse_member_prefix(NodeKind::Method)?;
        prefix.modifiers.reject(
            NodeKind::Method,
            &[TokenKind::Transient, TokenKind::Volatile],
        )?;

        let modifiers = &prefix.modifiers;
        let mut builder = MethodBuilder::editable()
            .with_visibility(modifiers.visibility.unwrap_or(Visibility::PackagePrivate))
            .with_abstract(modifiers.is_abstract)
            .with_static(modifiers.is_static)
            .with_final(modifiers.is_final)
            .with_synchronized(modifiers.is_synchronized);
        if let Some(comment) = prefix.section_comment {
            builder = builder.with_section_comment(comment);
        }
        if let Some(javadoc) = prefix.javadoc {
            builder = builder.with_javadoc(javadoc);
        }
        for annotation in prefix.annotations {
            builder = builder.with_annotation(annotation);
        }

        if self.cursor.check(TokenKind::Lt) {
            builder = builder.with_type_parameters(self.parse_type_parameters(NodeKind::Method)?);
        }
        if self.cursor.check(TokenKind::Ident) && self.cursor.peek_kind(1) == TokenKind::LParen {
            builder = builder.with_return_type(self.cursor.advance().text);
        } else {
            builder = builder.with_return_type(self.parse_type_text(NodeKind::Method)?);
            builder = builder.with_name(self.cursor.expect_ident(NodeKind::Method, "a method name")?);
        }

        for (ty, name) in self.parse_parameters()? {
            builder = builder.with_param(ty, name);
        }

        self.cursor.skip_newlines();
        if self.cursor.eat(TokenKind::Throws).is_some() {
            loop {
                self.cursor.skip_newlines();
                builder = builder.with_throws(self.parse_type_text(NodeKind::Method)?);
                if self.cursor.eat(TokenKind::Comma).is_none() {
                    break;
                }
            }
        }

        self.cursor.skip_newlines();
        if self.cursor.check(TokenKind::LBrace) {
            builder = builder.with_body(self.parse_method_body()?);
        } else if self.cursor.eat(TokenKind::Semicolon).is_some() || self.cursor.is_at_end() {
            builder = builder.without_body();
        } else {
            return Err(self.cursor.unexpected(NodeKind::Method, "`{` or `;`"));
        }

        let span = prefix.span.merge(self.cursor.previous_span());
        builder
            .build()
            .map_err(|err| ParseError::from_build(err, span))
    }

    /// `(Type name, final Type... rest)`
    fn parse_parameters(&mut self) -> Result<Vec<(String, String)>, ParseError> {
        self.cursor.expect(TokenKind::LParen, NodeKind::Method)?;
        let mut params = Vec::new();
        self.cursor.skip_newlines();
        if self.cursor.eat(TokenKind::RParen).is_some() {
            return Ok(params);
        }
        loop {
            self.cursor.skip_newlines();
            let start = self.cursor.current_span();
            let is_final = self.cursor.eat(TokenKind::Final).is_some();
            let ty = self.parse_type_text(NodeKind::Method)?;
            let ty = if is_final { format!("final {ty}") } else { ty };
            self.cursor.skip_newlines();
            let Some(name) = self.cursor.eat(TokenKind::Ident) else {
                return Err(ParseError::semantic(
                    NodeKind::Method,
                    vec![format!("Malformed parameter: missing name after '{ty}'")],
                    start.merge(self.cursor.current_span()),
                ));
            };
            params.push((ty, name.text.to_string()));
            self.cursor.skip_newlines();
            if self.cursor.eat(TokenKind::Comma).is_some() {
                continue;
            }
            self.cursor.expect(TokenKind::RParen, NodeKind::Method)?;
            return Ok(params);
        }
    }

    /// Consume `{ ... }` and return the body lines.
    fn parse_method_body(&mut self) -> Result<Vec<String>, ParseError> {
        let open = self.cursor.expect(TokenKind::LBrace, NodeKind::Method)?;
        let mut depth = 1usize;
        let close = loop {
            let token = self.cursor.current();
            match token.kind {
                TokenKind::Eof => {
                    return Err(ParseError::structural(
                        NodeKind::Method,
                        "Failed to find closing brace of method body",
                        open.span.merge(token.span),
                    ));
                }
                TokenKind::LBrace => depth += 1,
                TokenKind::RBrace => {
                    depth -= 1;
                    if depth == 0 {
                        break self.cursor.advance();
                    }
                }
                _ => {}
            }
            self.cursor.advance();
        };

        let source = self.cursor.tokens().source();
        Ok(body_lines(source, open.span, close.span))
    }
}

/// Split the text between `open` and `close` into body lines.
///
/// The base indentation is the column of the closing brace when it starts
/// its line, otherwise the indentation of the opening brace's line. Up to
/// base plus one level of leading whitespace is removed from each line.
pub(super) fn body_lines(source: &str, open: Span, close: Span) -> Vec<String> {
    let (open_end, close_start) = (open.end as usize, close.start as usize);
    let text = source.get(open_end..close_start).unwrap_or("");
    if !text.contains('\n') {
        let line = text.trim();
        return if line.is_empty() {
            Vec::new()
        } else {
            vec![line.to_string()]
        };
    }

    let close_line = &source[line_start(source, close_start)..close_start];
    let base = if close_line.trim().is_empty() {
        close_line.chars().count()
    } else {
        let open_line = &source[line_start(source, open.start as usize)..];
        open_line.chars().take_while(|c| *c == ' ' || *c == '\t').count()
    };

    let segments: Vec<&str> = text.split('\n').collect();
    let last = segments.len() - 1;
    let mut lines: Vec<String> = Vec::with_capacity(segments.len());
    for (i, segment) in segments.iter().enumerate() {
        let line = if i == 0 {
            segment.trim()
        } else {
            strip_indent(segment, base + BODY_INDENT).trim_end()
        };
        if (i == 0 || i == last) && line.is_empty() {
            continue;
        }
        lines.push(line.to_string());
    }
    while lines.first().is_some_and(String::is_empty) {
        lines.remove(0);
    }
    while lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }
    lines
}

/// Byte offset of the start of the line containing `offset`.
fn line_start(source: &str, offset: usize) -> usize {
    source[..offset].rfind('\n').map_or(0, |i| i + 1)
}

/// Remove up to `width` leading whitespace characters.
fn strip_indent(line: &str, width: usize) -> &str {
    let cut = line
        .char_indices()
        .take(width)
        .take_while(|(_, c)| c.is_whitespace())
        .last()
        .map_or(0, |(i, c)| i + c.len_utf8());
    &line[cut..]
}
