//! Source printer for the kopi Java source model.
//!
//! Every node prints deterministically through [`ToSource`]. Output is the
//! canonical form the parser reads back to an equal tree: 4-space
//! indentation per nesting level, modifiers in Java's canonical order, one
//! blank line between class body elements except consecutive plain fields.
//!
//! # Modules
//!
//! - [`emitter`]: output abstraction
//! - [`context`]: indentation and line tracking
//! - `declarations`: the printer for each node kind

pub mod context;
mod declarations;
pub mod emitter;

pub use context::{FormatContext, INDENT_WIDTH};
pub use emitter::{Emitter, StringEmitter};

use kopi_ir::{
    Annotation, Class, Field, ImportStatement, Javadoc, Method, MultiLineComment, Node,
    PackageDeclaration, SingleLineComment,
};

use crate::declarations::{
    annotation_text, format_class, format_field, format_javadoc, format_method,
    format_multi_line_comment, format_node, format_single_line_comment, import_text, package_text,
};

/// Print a node back to Java source.
pub trait ToSource {
    /// The node's canonical source text. Only outer classes end with a
    /// newline.
    fn to_source(&self) -> String;
}

/// Run a printer on a fresh context.
fn print_with(print: impl FnOnce(&mut FormatContext)) -> String {
    let mut ctx = FormatContext::new();
    print(&mut ctx);
    ctx.output()
}

impl ToSource for PackageDeclaration {
    fn to_source(&self) -> String {
        package_text(self.name())
    }
}

impl ToSource for ImportStatement {
    fn to_source(&self) -> String {
        import_text(self.path(), self.is_static())
    }
}

impl ToSource for SingleLineComment {
    fn to_source(&self) -> String {
        print_with(|ctx| format_single_line_comment(ctx, self.content()))
    }
}

impl ToSource for MultiLineComment {
    fn to_source(&self) -> String {
        print_with(|ctx| format_multi_line_comment(ctx, self.lines()))
    }
}

impl ToSource for Javadoc {
    fn to_source(&self) -> String {
        print_with(|ctx| format_javadoc(ctx, self))
    }
}

impl ToSource for Annotation {
    fn to_source(&self) -> String {
        annotation_text(self)
    }
}

impl ToSource for Field {
    /// Prefix lines and the declaration, without `;`.
    fn to_source(&self) -> String {
        print_with(|ctx| format_field(ctx, self, false))
    }
}

impl ToSource for Method {
    fn to_source(&self) -> String {
        print_with(|ctx| format_method(ctx, self))
    }
}

impl ToSource for Class {
    fn to_source(&self) -> String {
        let mut ctx = FormatContext::with_capacity(1024);
        format_class(&mut ctx, self);
        if self.is_inner_class() {
            ctx.output()
        } else {
            ctx.finalize()
        }
    }
}

impl ToSource for Node {
    fn to_source(&self) -> String {
        match self {
            Node::Class(class) => class.to_source(),
            _ => print_with(|ctx| format_node(ctx, self)),
        }
    }
}
