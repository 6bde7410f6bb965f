//! Javadoc parsing.
//!
//! Lines starting with `@author`, `@version`, `@since`, `@param`, `@return`
//! or `@throws` (alias `@exception`) fill the structured fields. A plain line
//! directly after a tag continues that tag's text; a blank line ends it.
//! Unknown tags stay content. `@author`, `@version`, `@since` and `@return`
//! may each appear once; every duplicate is reported.

use kopi_ir::{Javadoc, JavadocBuilder, NodeKind, Span, TokenKind};

use super::{collapse_blank_lines, comment_lines};
use crate::{ParseError, Parser};

/// Tag whose text the next plain line continues.
#[derive(Copy, Clone)]
enum OpenTag {
    Author,
    Version,
    Since,
    Return,
    Param(usize),
    Throws(usize),
}

/// Tag texts collected before building.
#[derive(Default)]
struct Tags {
    content: Vec<String>,
    author: Option<String>,
    version: Option<String>,
    since: Option<String>,
    returns: Option<String>,
    params: Vec<(String, String)>,
    throws: Vec<(String, String)>,
    duplicates: Vec<&'static str>,
}

impl Tags {
    fn set_once(
        slot: &mut Option<String>,
        duplicates: &mut Vec<&'static str>,
        name: &'static str,
        text: &str,
    ) {
        if slot.is_some() {
            if !duplicates.contains(&name) {
                duplicates.push(name);
            }
        } else {
            *slot = Some(text.to_string());
        }
    }

    /// Apply one line; returns the tag a following plain line continues.
    fn apply(&mut self, line: &str, open: Option<OpenTag>) -> Option<OpenTag> {
        if line.is_empty() {
            self.content.push(String::new());
            return None;
        }
        let (word, rest) = split_first_word(line);
        match word {
            "@author" => {
                Self::set_once(&mut self.author, &mut self.duplicates, "author", rest);
                Some(OpenTag::Author)
            }
            "@version" => {
                Self::set_once(&mut self.version, &mut self.duplicates, "version", rest);
                Some(OpenTag::Version)
            }
            "@since" => {
                Self::set_once(&mut self.since, &mut self.duplicates, "since", rest);
                Some(OpenTag::Since)
            }
            "@return" => {
                Self::set_once(&mut self.returns, &mut self.duplicates, "return", rest);
                Some(OpenTag::Return)
            }
            "@param" => {
                let (name, description) = split_first_word(rest);
                self.params.push((name.to_string(), description.to_string()));
                Some(OpenTag::Param(self.params.len() - 1))
            }
            "@throws" | "@exception" => {
                let (exception, description) = split_first_word(rest);
                self.throws
                    .push((exception.to_string(), description.to_string()));
                Some(OpenTag::Throws(self.throws.len() - 1))
            }
            _ if word.starts_with('@') => {
                self.content.push(line.to_string());
                None
            }
            _ => match open {
                Some(tag) => {
                    self.continue_tag(tag, line);
                    Some(tag)
                }
                None => {
                    self.content.push(line.to_string());
                    None
                }
            },
        }
    }

    fn continue_tag(&mut self, tag: OpenTag, line: &str) {
        let text = match tag {
            OpenTag::Author => self.author.as_mut(),
            OpenTag::Version => self.version.as_mut(),
            OpenTag::Since => self.since.as_mut(),
            OpenTag::Return => self.returns.as_mut(),
            OpenTag::Param(i) => self.params.get_mut(i).map(|(_, d)| d),
            OpenTag::Throws(i) => self.throws.get_mut(i).map(|(_, d)| d),
        };
        if let Some(text) = text {
            if !text.is_empty() {
                text.push(' ');
            }
            text.push_str(line.trim());
        }
    }
}

/// Split off the first whitespace-delimited word.
fn split_first_word(text: &str) -> (&str, &str) {
    let text = text.trim();
    match text.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (text, ""),
    }
}

impl Parser<'_> {
    /// Parse a `/** ... */` block.
    ///
    /// The block is condensed unless `/**` is immediately followed by a
    /// line break; a space after `/**` makes it condensed even when the
    /// rest of the opening line is empty.
    pub(crate) fn parse_javadoc(&mut self) -> Result<Javadoc, ParseError> {
        let token = self.cursor.current();
        if token.kind != TokenKind::DocComment {
            return Err(ParseError::structural(
                NodeKind::Javadoc,
                "First token of javadoc must start with '/**'",
                token.span,
            ));
        }
        if !token.is_terminated() {
            return Err(ParseError::structural(
                NodeKind::Javadoc,
                "Failed to find closing javadoc token!",
                token.span,
            ));
        }
        self.cursor.advance();

        let interior = &token.text[3..token.text.len() - 2];
        let condensed = !(interior.starts_with('\n') || interior.starts_with("\r\n"));
        build_javadoc(comment_lines(interior), condensed, token.span)
    }
}

fn build_javadoc(lines: Vec<String>, condensed: bool, span: Span) -> Result<Javadoc, ParseError> {
    let mut tags = Tags::default();
    let mut open = None;
    for line in &lines {
        open = tags.apply(line, open);
    }

    if !tags.duplicates.is_empty() {
        let messages = tags
            .duplicates
            .iter()
            .map(|name| format!("Found multiple {name} strings"))
            .collect();
        return Err(ParseError::semantic(NodeKind::Javadoc, messages, span));
    }

    let mut builder = JavadocBuilder::editable().condensed(condensed);
    for line in collapse_blank_lines(tags.content) {
        builder = builder.with_content(line);
    }
    if let Some(author) = tags.author {
        builder = builder.with_author(author);
    }
    if let Some(version) = tags.version {
        builder = builder.with_version(version);
    }
    if let Some(since) = tags.since {
        builder = builder.with_since(since);
    }
    for (name, description) in tags.params {
        builder = builder.with_param(name, description);
    }
    if let Some(returns) = tags.returns {
        builder = builder.with_return(returns);
    }
    for (exception, description) in tags.throws {
        builder = builder.with_throws(exception, description);
    }
    builder
        .build()
        .map_err(|err| ParseError::from_build(err, span))
}
