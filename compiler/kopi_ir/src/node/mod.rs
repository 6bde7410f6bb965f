//! Syntax tree nodes.
//!
//! One struct per node kind, collected in the [`Node`] tagged union. Every
//! node carries a [`Mutability`] mode: read accessors are always available,
//! mutators only through the editor handle returned by `edit()`, which
//! refuses fixed nodes.
//!
//! Trees are built bottom-up and owned top-down; no node refers to its parent.

mod annotation;
mod class;
mod comment;
mod field;
mod header;
mod javadoc;
mod method;


use std::fmt;

pub use annotation::{Annotation, AnnotationMut, AnnotationParam};
pub use class::{Class, ClassMut, ElementKind, ElementRef};
pub use comment::{MultiLineComment, MultiLineCommentMut, SingleLineComment, SingleLineCommentMut};
pub use field::{Field, FieldMut};
pub use header::{ImportStatement, ImportStatementMut, PackageDeclaration, PackageDeclarationMut};
pub use javadoc::{Javadoc, JavadocMut, ParamDoc, ThrowsDoc};
pub use method::{Method, MethodMut, Parameter};

/// Discriminant of [`Node`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeKind {
    PackageDeclaration,
    ImportStatement,
    Javadoc,
    SingleLineComment,
    MultiLineComment,
    Annotation,
    Field,
    Method,
    Class,
}

impl NodeKind {
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::PackageDeclaration => "package declaration",
            NodeKind::ImportStatement => "import statement",
            NodeKind::Javadoc => "javadoc",
            NodeKind::SingleLineComment => "single-line comment",
            NodeKind::MultiLineComment => "multi-line comment",
            NodeKind::Annotation => "annotation",
            NodeKind::Field => "field",
            NodeKind::Method => "method",
            NodeKind::Class => "class",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether a node exposes mutators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mutability {
    #[default]
    Editable,
    Fixed,
}

impl Mutability {
    #[inline]
    pub fn is_editable(self) -> bool {
        self == Mutability::Editable
    }

    /// Capitalized form for the start of a message.
    pub fn title(self) -> &'static str {
        match self {
            Mutability::Editable => "Editable",
            Mutability::Fixed => "Fixed",
        }
    }
}

impl fmt::Display for Mutability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mutability::Editable => f.write_str("editable"),
            Mutability::Fixed => f.write_str("fixed"),
        }
    }
}

/// Java access level.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Visibility {
    Public,
    Protected,
    Private,
    /// No access keyword.
    #[default]
    PackagePrivate,
}

impl Visibility {
    /// The keyword to print, `None` for package-private.
    pub fn keyword(self) -> Option<&'static str> {
        match self {
            Visibility::Public => Some("public"),
            Visibility::Protected => Some("protected"),
            Visibility::Private => Some("private"),
            Visibility::PackagePrivate => None,
        }
    }
}

/// Errors raised by node editors.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NodeError {
    /// Mutation attempted on a fixed node.
    #[error("cannot modify fixed {0}")]
    Fixed(NodeKind),
    /// A child whose mode differs from its new parent.
    #[error("{parent_mode} {parent} cannot contain {child_mode} {child}")]
    ModeMismatch {
        parent: NodeKind,
        parent_mode: Mutability,
        child: &'static str,
        child_mode: Mutability,
    },
    /// An inner class built as an outer class, or the reverse.
    #[error("{0}")]
    InvalidChild(String),
    /// An element-order record that does not cover the class's children.
    #[error("invalid element order: {0}")]
    InvalidElementOrder(String),
    /// Text that would not print back as the same node.
    #[error("{0}")]
    InvalidValue(String),
    /// Body lines given to an abstract method.
    #[error("abstract method cannot have a body")]
    AbstractBody,
}

/// Run builder checks for one editor change, failing with
/// [`NodeError::InvalidValue`] when any violation is recorded.
pub(crate) fn validate<T>(check: impl FnOnce(&mut Vec<String>) -> T) -> Result<T, NodeError> {
    let mut violations = Vec::new();
    let value = check(&mut violations);
    if violations.is_empty() {
        Ok(value)
    } else {
        Err(NodeError::InvalidValue(violations.join("; ")))
    }
}

/// Fail with [`NodeError::Fixed`] unless `mode` is editable.
#[inline]
pub(crate) fn ensure_editable(kind: NodeKind, mode: Mutability) -> Result<(), NodeError> {
    if mode.is_editable() {
        Ok(())
    } else {
        Err(NodeError::Fixed(kind))
    }
}

/// Fail with [`NodeError::ModeMismatch`] unless the child's mode matches.
#[inline]
pub(crate) fn ensure_same_mode(
    parent: NodeKind,
    parent_mode: Mutability,
    child: &'static str,
    child_mode: Mutability,
) -> Result<(), NodeError> {
    if parent_mode == child_mode {
        Ok(())
    } else {
        Err(NodeError::ModeMismatch {
            parent,
            parent_mode,
            child,
            child_mode,
        })
    }
}

/// Any node of the source model.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Node {
    PackageDeclaration(PackageDeclaration),
    ImportStatement(ImportStatement),
    Javadoc(Javadoc),
    SingleLineComment(SingleLineComment),
    MultiLineComment(MultiLineComment),
    Annotation(Annotation),
    Field(Field),
    Method(Method),
    Class(Class),
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::PackageDeclaration(_) => NodeKind::PackageDeclaration,
            Node::ImportStatement(_) => NodeKind::ImportStatement,
            Node::Javadoc(_) => NodeKind::Javadoc,
            Node::SingleLineComment(_) => NodeKind::SingleLineComment,
            Node::MultiLineComment(_) => NodeKind::MultiLineComment,
            Node::Annotation(_) => NodeKind::Annotation,
            Node::Field(_) => NodeKind::Field,
            Node::Method(_) => NodeKind::Method,
            Node::Class(_) => NodeKind::Class,
        }
    }

    pub fn mutability(&self) -> Mutability {
        match self {
            Node::PackageDeclaration(n) => n.mutability(),
            Node::ImportStatement(n) => n.mutability(),
            Node::Javadoc(n) => n.mutability(),
            Node::SingleLineComment(n) => n.mutability(),
            Node::MultiLineComment(n) => n.mutability(),
            Node::Annotation(n) => n.mutability(),
            Node::Field(n) => n.mutability(),
            Node::Method(n) => n.mutability(),
            Node::Class(n) => n.mutability(),
        }
    }

    #[inline]
    pub fn is_editable(&self) -> bool {
        self.mutability().is_editable()
    }

    /// Convert the whole subtree to fixed mode.
    #[must_use]
    pub fn into_fixed(self) -> Node {
        match self {
            Node::PackageDeclaration(n) => Node::PackageDeclaration(n.into_fixed()),
            Node::ImportStatement(n) => Node::ImportStatement(n.into_fixed()),
            Node::Javadoc(n) => Node::Javadoc(n.into_fixed()),
            Node::SingleLineComment(n) => Node::SingleLineComment(n.into_fixed()),
            Node::MultiLineComment(n) => Node::MultiLineComment(n.into_fixed()),
            Node::Annotation(n) => Node::Annotation(n.into_fixed()),
            Node::Field(n) => Node::Field(n.into_fixed()),
            Node::Method(n) => Node::Method(n.into_fixed()),
            Node::Class(n) => Node::Class(n.into_fixed()),
        }
    }

    pub fn as_class(&self) -> Option<&Class> {
        match self {
            Node::Class(class) => Some(class),
            _ => None,
        }
    }

    pub fn as_class_mut(&mut self) -> Option<&mut Class> {
        match self {
            Node::Class(class) => Some(class),
            _ => None,
        }
    }

    pub fn into_class(self) -> Option<Class> {
        match self {
            Node::Class(class) => Some(class),
            _ => None,
        }
    }

    pub fn as_field(&self) -> Option<&Field> {
        match self {
            Node::Field(field) => Some(field),
            _ => None,
        }
    }

    pub fn as_method(&self) -> Option<&Method> {
        match self {
            Node::Method(method) => Some(method),
            _ => None,
        }
    }

    pub fn as_javadoc(&self) -> Option<&Javadoc> {
        match self {
            Node::Javadoc(javadoc) => Some(javadoc),
            _ => None,
        }
    }

    pub fn as_annotation(&self) -> Option<&Annotation> {
        match self {
            Node::Annotation(annotation) => Some(annotation),
            _ => None,
        }
    }
}

impl From<PackageDeclaration> for Node {
    fn from(node: PackageDeclaration) -> Self {
        Node::PackageDeclaration(node)
    }
}

impl From<ImportStatement> for Node {
    fn from(node: ImportStatement) -> Self {
        Node::ImportStatement(node)
    }
}

impl From<Javadoc> for Node {
    fn from(node: Javadoc) -> Self {
        Node::Javadoc(node)
    }
}

impl From<SingleLineComment> for Node {
    fn from(node: SingleLineComment) -> Self {
        Node::SingleLineComment(node)
    }
}

impl From<MultiLineComment> for Node {
    fn from(node: MultiLineComment) -> Self {
        Node::MultiLineComment(node)
    }
}

impl From<Annotation> for Node {
    fn from(node: Annotation) -> Self {
        Node::Annotation(node)
    }
}

impl From<Field> for Node {
    fn from(node: Field) -> Self {
        Node::Field(node)
    }
}

impl From<Method> for Node {
    fn from(node: Method) -> Self {
        Node::Method(node)
    }
}

impl From<Class> for Node {
    fn from(node: Class) -> Self {
        Node::Class(node)
    }
}
