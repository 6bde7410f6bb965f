//! Single-line and multi-line comment parsing.

use kopi_ir::{
    MultiLineComment, MultiLineCommentBuilder, NodeKind, SingleLineComment,
    SingleLineCommentBuilder, TokenKind,
};

use super::comment_lines;
use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse `// text` up to the end of the line.
    ///
    /// Whitespace runs in the text collapse to single spaces.
    pub(crate) fn parse_single_line_comment(&mut self) -> Result<SingleLineComment, ParseError> {
        let token = self
            .cursor
            .expect(TokenKind::LineComment, NodeKind::SingleLineComment)?;
        SingleLineCommentBuilder::editable()
            .with_content(line_comment_text(token.text))
            .build()
            .map_err(|err| ParseError::from_build(err, token.span))
    }

    /// Parse a `/* ... */` comment into its content lines.
    pub(crate) fn parse_multi_line_comment(&mut self) -> Result<MultiLineComment, ParseError> {
        let token = self.cursor.current();
        if !token.text.starts_with("/*") {
            return Err(ParseError::structural(
                NodeKind::MultiLineComment,
                "First token of multi-line comment must start with '/*'",
                token.span,
            ));
        }
        if !token.is_terminated() {
            return Err(ParseError::structural(
                NodeKind::MultiLineComment,
                "Failed to find closing multi-line comment token!",
                token.span,
            ));
        }
        self.cursor.advance();
        let interior = &token.text[2..token.text.len() - 2];
        MultiLineCommentBuilder::editable()
            .with_lines(comment_lines(interior))
            .build()
            .map_err(|err| ParseError::from_build(err, token.span))
    }
}

/// Text of a `//` comment token, whitespace-normalized.
pub(crate) fn line_comment_text(token_text: &str) -> String {
    let body = token_text.strip_prefix("//").unwrap_or(token_text);
    body.split_whitespace().collect::<Vec<_>>().join(" ")
}
