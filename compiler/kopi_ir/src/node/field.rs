//! Field declarations.

use std::ops::Deref;

use crate::builder::{
    check_expression, check_identifier, check_section_comment, check_type_text,
};
use crate::syntax;

use super::{
    ensure_editable, ensure_same_mode, validate, Annotation, AnnotationMut, Javadoc, JavadocMut,
    Mutability, NodeError, NodeKind, Visibility,
};

/// `[modifiers] Type name [= value]`
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Field {
    pub(crate) mode: Mutability,
    pub(crate) section_comment: Option<String>,
    pub(crate) javadoc: Option<Javadoc>,
    pub(crate) annotations: Vec<Annotation>,
    pub(crate) visibility: Visibility,
    pub(crate) is_static: bool,
    pub(crate) is_final: bool,
    pub(crate) is_transient: bool,
    pub(crate) is_volatile: bool,
    pub(crate) ty: String,
    pub(crate) name: String,
    pub(crate) value: Option<String>,
}

impl Field {
    pub fn mutability(&self) -> Mutability {
        self.mode
    }

    /// `// ...` line printed directly above the declaration.
    pub fn section_comment(&self) -> Option<&str> {
        self.section_comment.as_deref()
    }

    pub fn javadoc(&self) -> Option<&Javadoc> {
        self.javadoc.as_ref()
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    pub fn is_final(&self) -> bool {
        self.is_final
    }

    pub fn is_transient(&self) -> bool {
        self.is_transient
    }

    pub fn is_volatile(&self) -> bool {
        self.is_volatile
    }

    pub fn ty(&self) -> &str {
        &self.ty
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Initializer expression text.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// No section comment, Javadoc or annotations.
    pub fn is_plain(&self) -> bool {
        self.section_comment.is_none() && self.javadoc.is_none() && self.annotations.is_empty()
    }

    pub fn edit(&mut self) -> Result<FieldMut<'_>, NodeError> {
        ensure_editable(NodeKind::Field, self.mode)?;
        Ok(FieldMut { node: self })
    }

    #[must_use]
    pub fn into_fixed(self) -> Self {
        Field {
            mode: Mutability::Fixed,
            javadoc: self.javadoc.map(Javadoc::into_fixed),
            annotations: self
                .annotations
                .into_iter()
                .map(Annotation::into_fixed)
                .collect(),
            ..self
        }
    }
}

/// Mutators of an editable [`Field`].
///
/// Children are reached through their own editors, so every change keeps
/// the tree homogeneous and printable.
pub struct FieldMut<'a> {
    node: &'a mut Field,
}

impl Deref for FieldMut<'_> {
    type Target = Field;

    fn deref(&self) -> &Field {
        self.node
    }
}

impl FieldMut<'_> {
    pub fn set_section_comment(
        &mut self,
        comment: Option<String>,
    ) -> Result<&mut Self, NodeError> {
        if let Some(comment) = &comment {
            validate(|v| check_section_comment(v, comment))?;
        }
        self.node.section_comment = comment;
        Ok(self)
    }

    pub fn set_javadoc(&mut self, javadoc: Option<Javadoc>) -> Result<&mut Self, NodeError> {
        if let Some(doc) = &javadoc {
            ensure_same_mode(NodeKind::Field, self.node.mode, "javadoc", doc.mode)?;
        }
        self.node.javadoc = javadoc;
        Ok(self)
    }

    pub fn javadoc_mut(&mut self) -> Option<JavadocMut<'_>> {
        self.node.javadoc.as_mut().and_then(|doc| doc.edit().ok())
    }

    pub fn push_annotation(&mut self, annotation: Annotation) -> Result<&mut Self, NodeError> {
        ensure_same_mode(
            NodeKind::Field,
            self.node.mode,
            "annotations",
            annotation.mode,
        )?;
        self.node.annotations.push(annotation);
        Ok(self)
    }

    pub fn annotations_mut(&mut self) -> impl Iterator<Item = AnnotationMut<'_>> {
        self.node
            .annotations
            .iter_mut()
            .map(Annotation::edit)
            .filter_map(Result::ok)
    }

    pub fn set_visibility(&mut self, visibility: Visibility) -> &mut Self {
        self.node.visibility = visibility;
        self
    }

    pub fn set_static(&mut self, is_static: bool) -> &mut Self {
        self.node.is_static = is_static;
        self
    }

    pub fn set_final(&mut self, is_final: bool) -> &mut Self {
        self.node.is_final = is_final;
        self
    }

    pub fn set_transient(&mut self, is_transient: bool) -> &mut Self {
        self.node.is_transient = is_transient;
        self
    }

    pub fn set_volatile(&mut self, is_volatile: bool) -> &mut Self {
        self.node.is_volatile = is_volatile;
        self
    }

    /// Stores the canonical spelling of `ty`.
    pub fn set_type(&mut self, ty: impl Into<String>) -> Result<&mut Self, NodeError> {
        let ty = validate(|v| check_type_text(v, "type", ty.into(), syntax::canonical_type))?;
        self.node.ty = ty;
        Ok(self)
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<&mut Self, NodeError> {
        let name = name.into();
        validate(|v| check_identifier(v, "Field name", &name))?;
        self.node.name = name;
        Ok(self)
    }

    pub fn set_value(&mut self, value: Option<String>) -> Result<&mut Self, NodeError> {
        if let Some(value) = &value {
            validate(|v| check_expression(v, "Field value", value))?;
        }
        self.node.value = value;
        Ok(self)
    }
}
