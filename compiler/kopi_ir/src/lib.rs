//! Kopi IR - tokens, syntax tree and builders for Java source files.
//!
//! This crate holds the data shared by the lexer, parser and printer:
//! - Spans for source locations
//! - Tokens and `TokenList` for lexer output
//! - Syntax tree nodes (package, imports, comments, Javadoc, annotations,
//!   fields, methods, classes), each tagged with a [`Mutability`] mode
//! - One builder per node kind, validating the tree as it is assembled
//! - Canonical spelling of type text shared by builders and the parser
//!
//! # Design Philosophy
//!
//! - **One representation per node**: editable and fixed nodes share a type;
//!   mutators sit behind `edit()`, which refuses fixed nodes
//! - **Homogeneous trees**: builders and editors reject children whose mode
//!   differs from the parent's
//! - **Opaque bodies**: method bodies and initializers are kept as text

pub mod builder;
pub mod node;
mod span;
pub mod syntax;
mod token;

pub use builder::{
    AnnotationBuilder, BuildError, ClassBuilder, FieldBuilder, ImportStatementBuilder,
    JavadocBuilder, MethodBuilder, MultiLineCommentBuilder, PackageDeclarationBuilder,
    SingleLineCommentBuilder,
};
pub use node::{
    Annotation, AnnotationMut, AnnotationParam, Class, ClassMut, ElementKind, ElementRef, Field,
    FieldMut, ImportStatement, ImportStatementMut, Javadoc, JavadocMut, Method, MethodMut,
    MultiLineComment, MultiLineCommentMut, Mutability, Node, NodeError, NodeKind, PackageDeclaration,
    PackageDeclarationMut, ParamDoc, Parameter, SingleLineComment, SingleLineCommentMut, ThrowsDoc,
    Visibility,
};
pub use span::Span;
pub use syntax::TypeTextError;
pub use token::{Token, TokenKind, TokenList};
