//! Kopi - parse, build and print Java source files.
//!
//! The facade over the kopi crates:
//! - [`tokenize`] turns source text into a [`TokenList`]
//! - [`parse_type`] and [`parse_type_at`] turn tokens into [`Node`] trees
//! - the builders in [`builder`] assemble trees by hand
//! - [`ToSource`] prints any node back to canonical Java source
//!
//! ```text
//! let node = kopi::parse_type("/** some content */")?;
//! assert_eq!(node.to_source(), "/** some content */");
//! ```
//!
//! Printing a parsed canonical source reproduces it byte for byte, and
//! parsing printed text reproduces an equal tree.

use std::sync::Once;

pub use kopi_fmt::{Emitter, FormatContext, StringEmitter, ToSource, INDENT_WIDTH};
pub use kopi_ir::{builder, node};
pub use kopi_ir::{
    Annotation, AnnotationBuilder, AnnotationParam, BuildError, Class, ClassBuilder, ClassMut,
    ElementKind, ElementRef, Field, FieldBuilder, FieldMut, ImportStatement,
    ImportStatementBuilder, Javadoc, JavadocBuilder, Method, MethodBuilder, MethodMut,
    MultiLineComment, MultiLineCommentBuilder, Mutability, Node, NodeError, NodeKind,
    PackageDeclaration, PackageDeclarationBuilder, ParamDoc, Parameter, SingleLineComment,
    SingleLineCommentBuilder, Span, ThrowsDoc, Token, TokenKind, TokenList, Visibility,
};
pub use kopi_lexer::tokenize;
pub use kopi_parse::{
    parse_type, parse_type_at, parse_type_at_with, parse_type_with, ParseConfig, ParseError,
    ParseErrorKind, Validator,
};

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber for parser diagnostics.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=kopi_parse=debug` or `RUST_LOG=kopi_parse=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

/// Parse a source text and print it back.
///
/// Canonical input comes back unchanged; other input comes back normalized.
pub fn reformat(source: &str) -> Result<String, ParseError> {
    parse_type(source).map(|node| node.to_source())
}
