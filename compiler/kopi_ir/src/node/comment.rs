//! Freestanding comments.

use crate::builder::check_comment_text;

use super::{ensure_editable, validate, Mutability, NodeError, NodeKind};

/// `// content`
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SingleLineComment {
    pub(crate) mode: Mutability,
    pub(crate) content: String,
}

impl SingleLineComment {
    pub fn mutability(&self) -> Mutability {
        self.mode
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn edit(&mut self) -> Result<SingleLineCommentMut<'_>, NodeError> {
        ensure_editable(NodeKind::SingleLineComment, self.mode)?;
        Ok(SingleLineCommentMut { node: self })
    }

    #[must_use]
    pub fn into_fixed(mut self) -> Self {
        self.mode = Mutability::Fixed;
        self
    }
}

/// Mutators of an editable [`SingleLineComment`].
pub struct SingleLineCommentMut<'a> {
    node: &'a mut SingleLineComment,
}

impl SingleLineCommentMut<'_> {
    pub fn set_content(&mut self, content: impl Into<String>) -> Result<&mut Self, NodeError> {
        let content = content.into();
        if content.contains('\n') {
            return Err(NodeError::InvalidValue(
                "Comment text cannot contain a newline!".to_string(),
            ));
        }
        self.node.content = content;
        Ok(self)
    }
}

/// `/* ... */` spanning one or more lines.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiLineComment {
    pub(crate) mode: Mutability,
    pub(crate) lines: Vec<String>,
}

impl MultiLineComment {
    pub fn mutability(&self) -> Mutability {
        self.mode
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn edit(&mut self) -> Result<MultiLineCommentMut<'_>, NodeError> {
        ensure_editable(NodeKind::MultiLineComment, self.mode)?;
        Ok(MultiLineCommentMut { node: self })
    }

    #[must_use]
    pub fn into_fixed(mut self) -> Self {
        self.mode = Mutability::Fixed;
        self
    }
}

/// Mutators of an editable [`MultiLineComment`].
pub struct MultiLineCommentMut<'a> {
    node: &'a mut MultiLineComment,
}

impl MultiLineCommentMut<'_> {
    pub fn push_line(&mut self, line: impl Into<String>) -> Result<&mut Self, NodeError> {
        let line = line.into();
        validate(|v| check_comment_text(v, "Comment line", &line))?;
        self.node.lines.push(line);
        Ok(self)
    }

    pub fn set_lines(&mut self, lines: Vec<String>) -> Result<&mut Self, NodeError> {
        validate(|v| {
            for line in &lines {
                check_comment_text(v, "Comment line", line);
            }
        })?;
        self.node.lines = lines;
        Ok(self)
    }
}
