//! Javadoc blocks.

use crate::builder::{check_comment_text, check_content_line, check_param_doc, check_throws_doc};

use super::{ensure_editable, validate, Mutability, NodeError, NodeKind};

/// One `@param name description` entry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParamDoc {
    pub name: String,
    pub description: String,
}

impl ParamDoc {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        ParamDoc {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// One `@throws Type description` entry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThrowsDoc {
    pub exception: String,
    pub description: String,
}

impl ThrowsDoc {
    pub fn new(exception: impl Into<String>, description: impl Into<String>) -> Self {
        ThrowsDoc {
            exception: exception.into(),
            description: description.into(),
        }
    }
}

/// A `/** ... */` block.
///
/// `condensed` blocks start their content on the opening line and carry no
/// blank separator lines. Free-form content always prints before the
/// author/version/since block, which prints before params, return and throws.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Javadoc {
    pub(crate) mode: Mutability,
    pub(crate) condensed: bool,
    pub(crate) content: Vec<String>,
    pub(crate) author: Option<String>,
    pub(crate) version: Option<String>,
    pub(crate) since: Option<String>,
    pub(crate) params: Vec<ParamDoc>,
    pub(crate) returns: Option<String>,
    pub(crate) throws: Vec<ThrowsDoc>,
}

impl Javadoc {
    pub fn mutability(&self) -> Mutability {
        self.mode
    }

    pub fn is_condensed(&self) -> bool {
        self.condensed
    }

    pub fn content(&self) -> &[String] {
        &self.content
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn since(&self) -> Option<&str> {
        self.since.as_deref()
    }

    pub fn params(&self) -> &[ParamDoc] {
        &self.params
    }

    pub fn returns(&self) -> Option<&str> {
        self.returns.as_deref()
    }

    pub fn throws(&self) -> &[ThrowsDoc] {
        &self.throws
    }

    /// `@author`, `@version` and `@since` lines, in print order.
    pub fn info_tags(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(author) = &self.author {
            lines.push(tag_line("@author", author));
        }
        if let Some(version) = &self.version {
            lines.push(tag_line("@version", version));
        }
        if let Some(since) = &self.since {
            lines.push(tag_line("@since", since));
        }
        lines
    }

    /// `@param`, `@return` and `@throws` lines, in print order.
    pub fn signature_tags(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for param in &self.params {
            lines.push(tag_line(
                &format!("@param {}", param.name),
                &param.description,
            ));
        }
        if let Some(returns) = &self.returns {
            lines.push(tag_line("@return", returns));
        }
        for throws in &self.throws {
            lines.push(tag_line(
                &format!("@throws {}", throws.exception),
                &throws.description,
            ));
        }
        lines
    }

    /// Content lines with blank runs coalesced and blank ends dropped.
    ///
    /// The parser produces content in this shape; the printer emits it so
    /// that hand-built content prints the same way parsed content does.
    pub fn normalized_content(&self) -> Vec<&str> {
        let mut lines: Vec<&str> = Vec::with_capacity(self.content.len());
        for line in &self.content {
            let blank = line.trim().is_empty();
            if blank && lines.last().map_or(true, |prev| prev.is_empty()) {
                continue;
            }
            lines.push(if blank { "" } else { line.as_str() });
        }
        while lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }
        lines
    }

    pub fn is_empty(&self) -> bool {
        self.normalized_content().is_empty()
            && self.info_tags().is_empty()
            && self.signature_tags().is_empty()
    }

    pub fn edit(&mut self) -> Result<JavadocMut<'_>, NodeError> {
        ensure_editable(NodeKind::Javadoc, self.mode)?;
        Ok(JavadocMut { node: self })
    }

    #[must_use]
    pub fn into_fixed(mut self) -> Self {
        self.mode = Mutability::Fixed;
        self
    }
}

fn tag_line(tag: &str, text: &str) -> String {
    if text.is_empty() {
        tag.to_string()
    } else {
        format!("{tag} {text}")
    }
}

/// Mutators of an editable [`Javadoc`].
pub struct JavadocMut<'a> {
    node: &'a mut Javadoc,
}

impl JavadocMut<'_> {
    pub fn set_condensed(&mut self, condensed: bool) -> &mut Self {
        self.node.condensed = condensed;
        self
    }

    pub fn push_content(&mut self, line: impl Into<String>) -> Result<&mut Self, NodeError> {
        let line = line.into();
        validate(|v| check_content_line(v, &line))?;
        self.node.content.push(line);
        Ok(self)
    }

    pub fn set_content(&mut self, lines: Vec<String>) -> Result<&mut Self, NodeError> {
        validate(|v| lines.iter().for_each(|line| check_content_line(v, line)))?;
        self.node.content = lines;
        Ok(self)
    }

    pub fn set_author(&mut self, author: Option<String>) -> Result<&mut Self, NodeError> {
        self.node.author = checked_tag(author)?;
        Ok(self)
    }

    pub fn set_version(&mut self, version: Option<String>) -> Result<&mut Self, NodeError> {
        self.node.version = checked_tag(version)?;
        Ok(self)
    }

    pub fn set_since(&mut self, since: Option<String>) -> Result<&mut Self, NodeError> {
        self.node.since = checked_tag(since)?;
        Ok(self)
    }

    pub fn push_param(&mut self, param: ParamDoc) -> Result<&mut Self, NodeError> {
        validate(|v| check_param_doc(v, &param))?;
        self.node.params.push(param);
        Ok(self)
    }

    pub fn set_returns(&mut self, returns: Option<String>) -> Result<&mut Self, NodeError> {
        self.node.returns = checked_tag(returns)?;
        Ok(self)
    }

    pub fn push_throws(&mut self, throws: ThrowsDoc) -> Result<&mut Self, NodeError> {
        validate(|v| check_throws_doc(v, &throws))?;
        self.node.throws.push(throws);
        Ok(self)
    }
}

fn checked_tag(text: Option<String>) -> Result<Option<String>, NodeError> {
    if let Some(text) = &text {
        validate(|v| check_comment_text(v, "Javadoc tag", text))?;
    }
    Ok(text)
}
