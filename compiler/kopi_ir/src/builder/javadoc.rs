use crate::node::{Javadoc, Mutability, NodeKind, ParamDoc, ThrowsDoc};

use super::{check_comment_text, starts_with_block_tag, BuildError};

/// Builds a [`Javadoc`].
#[derive(Clone, Debug, Default)]
pub struct JavadocBuilder {
    doc: Javadoc,
}

impl JavadocBuilder {
    pub fn new(mode: Mutability) -> Self {
        JavadocBuilder {
            doc: Javadoc {
                mode,
                ..Javadoc::default()
            },
        }
    }

    pub fn editable() -> Self {
        Self::new(Mutability::Editable)
    }

    pub fn fixed() -> Self {
        Self::new(Mutability::Fixed)
    }

    #[must_use]
    pub fn condensed(mut self, condensed: bool) -> Self {
        self.doc.condensed = condensed;
        self
    }

    #[must_use]
    pub fn with_content(mut self, line: impl Into<String>) -> Self {
        self.doc.content.push(line.into());
        self
    }

    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.doc.author = Some(author.into());
        self
    }

    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.doc.version = Some(version.into());
        self
    }

    #[must_use]
    pub fn with_since(mut self, since: impl Into<String>) -> Self {
        self.doc.since = Some(since.into());
        self
    }

    #[must_use]
    pub fn with_param(mut self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.doc.params.push(ParamDoc::new(name, description));
        self
    }

    #[must_use]
    pub fn with_return(mut self, description: impl Into<String>) -> Self {
        self.doc.returns = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_throws(
        mut self,
        exception: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.doc.throws.push(ThrowsDoc::new(exception, description));
        self
    }

    pub fn build(self) -> Result<Javadoc, BuildError> {
        let doc = self.doc;
        let mut violations = Vec::new();
        for line in &doc.content {
            check_content_line(&mut violations, line);
        }
        let tagged = [&doc.author, &doc.version, &doc.since, &doc.returns];
        for text in tagged.into_iter().flatten() {
            check_comment_text(&mut violations, "Javadoc tag", text);
        }
        for param in &doc.params {
            check_param_doc(&mut violations, param);
        }
        for throws in &doc.throws {
            check_throws_doc(&mut violations, throws);
        }
        BuildError::check(NodeKind::Javadoc, violations)?;
        Ok(doc)
    }
}

pub(crate) fn check_content_line(violations: &mut Vec<String>, line: &str) {
    check_comment_text(violations, "Javadoc line", line);
    if starts_with_block_tag(line) {
        violations.push(format!(
            "Javadoc content cannot start with a block tag: {line}"
        ));
    }
}

pub(crate) fn check_param_doc(violations: &mut Vec<String>, param: &ParamDoc) {
    check_word(violations, "@param name", &param.name);
    check_comment_text(violations, "Javadoc tag", &param.description);
}

pub(crate) fn check_throws_doc(violations: &mut Vec<String>, throws: &ThrowsDoc) {
    check_word(violations, "@throws type", &throws.exception);
    check_comment_text(violations, "Javadoc tag", &throws.description);
}

fn check_word(violations: &mut Vec<String>, what: &str, word: &str) {
    if word.is_empty() || word.chars().any(char::is_whitespace) {
        violations.push(format!("{what} must be a single word: '{word}'"));
    }
}
