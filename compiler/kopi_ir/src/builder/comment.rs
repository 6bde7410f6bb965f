use crate::node::{MultiLineComment, Mutability, NodeKind, SingleLineComment};

use super::{check_comment_text, BuildError};

/// Builds a [`SingleLineComment`]. Content defaults to empty.
#[derive(Clone, Debug, Default)]
pub struct SingleLineCommentBuilder {
    mode: Mutability,
    content: String,
}

impl SingleLineCommentBuilder {
    pub fn new(mode: Mutability) -> Self {
        SingleLineCommentBuilder {
            mode,
            content: String::new(),
        }
    }

    pub fn editable() -> Self {
        Self::new(Mutability::Editable)
    }

    pub fn fixed() -> Self {
        Self::new(Mutability::Fixed)
    }

    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn build(self) -> Result<SingleLineComment, BuildError> {
        let mut violations = Vec::new();
        if self.content.contains('\n') {
            violations.push("Comment text cannot contain a newline!".to_string());
        }
        BuildError::check(NodeKind::SingleLineComment, violations)?;
        Ok(SingleLineComment {
            mode: self.mode,
            content: self.content,
        })
    }
}

/// Builds a [`MultiLineComment`].
#[derive(Clone, Debug, Default)]
pub struct MultiLineCommentBuilder {
    mode: Mutability,
    lines: Vec<String>,
}

impl MultiLineCommentBuilder {
    pub fn new(mode: Mutability) -> Self {
        MultiLineCommentBuilder {
            mode,
            lines: Vec::new(),
        }
    }

    pub fn editable() -> Self {
        Self::new(Mutability::Editable)
    }

    pub fn fixed() -> Self {
        Self::new(Mutability::Fixed)
    }

    #[must_use]
    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    #[must_use]
    pub fn with_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines.extend(lines.into_iter().map(Into::into));
        self
    }

    pub fn build(self) -> Result<MultiLineComment, BuildError> {
        let mut violations = Vec::new();
        for line in &self.lines {
            check_comment_text(&mut violations, "Comment line", line);
        }
        BuildError::check(NodeKind::MultiLineComment, violations)?;
        Ok(MultiLineComment {
            mode: self.mode,
            lines: self.lines,
        })
    }
}
