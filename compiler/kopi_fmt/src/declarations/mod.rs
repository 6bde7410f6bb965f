//! Printers for every node kind.
//!
//! Each printer writes its node as lines into a [`FormatContext`] at the
//! context's current indentation:
//!
//! - [`comments`]: single-line comments, multi-line comments and Javadoc
//! - [`annotations`]: `@Name(...)`
//! - [`headers`]: `package` and `import`
//! - [`members`]: fields, methods and modifier lists
//! - [`classes`]: class files, inner classes and body layout

mod annotations;
mod classes;
mod comments;
mod headers;
mod members;

#[cfg(test)]
mod tests;

pub(crate) use annotations::{annotation_text, format_annotations};
pub(crate) use classes::format_class;
pub(crate) use comments::{
    format_javadoc, format_multi_line_comment, format_single_line_comment,
};
pub(crate) use headers::{import_text, package_text};
pub(crate) use members::{format_field, format_method};

use kopi_ir::Node;

use crate::context::FormatContext;
use crate::emitter::Emitter;

/// Print any node. Outer classes end with a newline; nothing else does.
pub(crate) fn format_node<E: Emitter>(ctx: &mut FormatContext<E>, node: &Node) {
    match node {
        Node::PackageDeclaration(package) => ctx.line(&package_text(package.name())),
        Node::ImportStatement(import) => {
            ctx.line(&import_text(import.path(), import.is_static()));
        }
        Node::Javadoc(javadoc) => format_javadoc(ctx, javadoc),
        Node::SingleLineComment(comment) => format_single_line_comment(ctx, comment.content()),
        Node::MultiLineComment(comment) => format_multi_line_comment(ctx, comment.lines()),
        Node::Annotation(annotation) => ctx.line(&annotation_text(annotation)),
        Node::Field(field) => format_field(ctx, field, false),
        Node::Method(method) => format_method(ctx, method),
        Node::Class(class) => format_class(ctx, class),
    }
}
