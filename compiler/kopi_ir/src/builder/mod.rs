//! Node builders.
//!
//! One builder per node kind. A builder takes the mode up front, accumulates
//! attributes through chained `with_*` calls and validates once in `build()`,
//! reporting every violation it found in a single [`BuildError`].
//!
//! Defaults: visibility package-private (methods: public), lists empty,
//! flags false.

mod annotation;
mod class;
mod comment;
mod field;
mod header;
mod javadoc;
mod method;


use std::fmt;

pub use annotation::AnnotationBuilder;
pub use class::ClassBuilder;
pub use comment::{MultiLineCommentBuilder, SingleLineCommentBuilder};
pub use field::FieldBuilder;
pub use header::{ImportStatementBuilder, PackageDeclarationBuilder};
pub use javadoc::JavadocBuilder;
pub(crate) use javadoc::{check_content_line, check_param_doc, check_throws_doc};
pub use method::MethodBuilder;

use crate::node::{Mutability, NodeKind};
use crate::syntax::{self, TypeTextError};

/// Every validation failure found while building one node.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub struct BuildError {
    pub kind: NodeKind,
    pub violations: Vec<String>,
}

impl BuildError {
    /// `Ok` when nothing was found.
    pub(crate) fn check(kind: NodeKind, violations: Vec<String>) -> Result<(), BuildError> {
        if violations.is_empty() {
            Ok(())
        } else {
            Err(BuildError { kind, violations })
        }
    }

    /// Whether any violation contains `needle`.
    pub fn mentions(&self, needle: &str) -> bool {
        self.violations.iter().any(|v| v.contains(needle))
    }
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to build {}:", self.kind)?;
        for violation in &self.violations {
            write!(f, "\n  {violation}")?;
        }
        Ok(())
    }
}

/// Record a violation when a child's mode differs from its parent's.
pub(crate) fn check_mode(
    violations: &mut Vec<String>,
    parent: NodeKind,
    parent_mode: Mutability,
    child: &str,
    child_mode: Mutability,
) {
    if parent_mode != child_mode {
        violations.push(format!(
            "{} {parent} cannot contain {child_mode} {child}!",
            parent_mode.title()
        ));
    }
}

/// Like [`check_mode`], once per category however many children mismatch.
pub(crate) fn check_modes(
    violations: &mut Vec<String>,
    parent: NodeKind,
    parent_mode: Mutability,
    child: &str,
    child_modes: impl IntoIterator<Item = Mutability>,
) {
    if let Some(mode) = child_modes.into_iter().find(|&m| m != parent_mode) {
        check_mode(violations, parent, parent_mode, child, mode);
    }
}

/// Javadoc block tags; a content line starting with one would reparse as a tag.
pub(crate) const BLOCK_TAGS: [&str; 7] = [
    "@author",
    "@version",
    "@since",
    "@param",
    "@return",
    "@throws",
    "@exception",
];

pub(crate) fn starts_with_block_tag(line: &str) -> bool {
    let first = line.split_whitespace().next().unwrap_or("");
    BLOCK_TAGS.contains(&first)
}

/// Record violations for text that must print on one comment line.
pub(crate) fn check_comment_text(violations: &mut Vec<String>, what: &str, text: &str) {
    if text.contains('\n') {
        violations.push(format!("{what} cannot contain a newline!"));
    }
    if text.contains("*/") {
        violations.push(format!("{what} cannot contain '*/'!"));
    }
}

/// Record a violation unless `name` is one Java identifier.
pub(crate) fn check_identifier(violations: &mut Vec<String>, what: &str, name: &str) {
    if !syntax::is_identifier(name) {
        violations.push(format!("{what} must be a single identifier: '{name}'"));
    }
}

/// Record a violation unless `name` is a dotted identifier.
pub(crate) fn check_qualified_name(violations: &mut Vec<String>, what: &str, name: &str) {
    if !syntax::is_qualified_name(name) {
        violations.push(format!("{what} must be a dotted name: '{name}'"));
    }
}

/// `a.b.C`, or `a.b.*` for an on-demand import.
pub(crate) fn check_import_path(violations: &mut Vec<String>, path: &str) {
    let path = path.strip_suffix(".*").unwrap_or(path);
    check_qualified_name(violations, "Import", path);
}

/// Canonical spelling of `text`, or a violation and the text unchanged.
pub(crate) fn check_type_text(
    violations: &mut Vec<String>,
    what: &str,
    text: String,
    canonical: fn(&str) -> Result<String, TypeTextError>,
) -> String {
    match canonical(&text) {
        Ok(canonical) => canonical,
        Err(err) => {
            violations.push(format!("Invalid {what} '{text}': {err}"));
            text
        }
    }
}

pub(crate) fn check_section_comment(violations: &mut Vec<String>, comment: &str) {
    if comment.contains('\n') {
        violations.push("Section comment cannot contain a newline!".to_string());
    }
}

/// Record violations for expression text printed inline on one line.
pub(crate) fn check_expression(violations: &mut Vec<String>, what: &str, text: &str) {
    if text.trim().is_empty() {
        violations.push(format!("{what} cannot be empty!"));
    }
    if text.contains('\n') {
        violations.push(format!("{what} cannot contain a newline!"));
    }
}

/// Record violations for method body lines that would not read back as
/// the same lines.
pub(crate) fn check_body(violations: &mut Vec<String>, lines: &[String]) {
    if lines.iter().any(|line| line.contains('\n')) {
        violations.push("Body lines cannot contain a newline!".to_string());
    }
    if lines.iter().any(|line| line.ends_with(char::is_whitespace)) {
        violations.push("Body lines cannot end in whitespace!".to_string());
    }
    if lines.first().is_some_and(String::is_empty) || lines.last().is_some_and(String::is_empty) {
        violations.push("Body cannot start or end with a blank line!".to_string());
    }
    if !syntax::braces_balanced(lines) {
        violations.push("Body lines must have balanced braces!".to_string());
    }
}
