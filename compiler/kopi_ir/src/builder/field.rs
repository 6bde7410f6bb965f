use crate::node::{Annotation, Field, Javadoc, Mutability, NodeKind, Visibility};
use crate::syntax;

use super::{
    check_expression, check_identifier, check_mode, check_modes, check_section_comment,
    check_type_text, BuildError,
};

/// Builds a [`Field`]. Type and name are required.
#[derive(Clone, Debug, Default)]
pub struct FieldBuilder {
    mode: Mutability,
    section_comment: Option<String>,
    javadoc: Option<Javadoc>,
    annotations: Vec<Annotation>,
    visibility: Visibility,
    is_static: bool,
    is_final: bool,
    is_transient: bool,
    is_volatile: bool,
    ty: Option<String>,
    name: Option<String>,
    value: Option<String>,
}

impl FieldBuilder {
    pub fn new(mode: Mutability) -> Self {
        FieldBuilder {
            mode,
            ..Self::default()
        }
    }

    pub fn editable() -> Self {
        Self::new(Mutability::Editable)
    }

    pub fn fixed() -> Self {
        Self::new(Mutability::Fixed)
    }

    #[must_use]
    pub fn with_section_comment(mut self, comment: impl Into<String>) -> Self {
        self.section_comment = Some(comment.into());
        self
    }

    #[must_use]
    pub fn with_javadoc(mut self, javadoc: Javadoc) -> Self {
        self.javadoc = Some(javadoc);
        self
    }

    #[must_use]
    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    #[must_use]
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    #[must_use]
    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    #[must_use]
    pub fn with_final(mut self, is_final: bool) -> Self {
        self.is_final = is_final;
        self
    }

    #[must_use]
    pub fn with_transient(mut self, is_transient: bool) -> Self {
        self.is_transient = is_transient;
        self
    }

    #[must_use]
    pub fn with_volatile(mut self, is_volatile: bool) -> Self {
        self.is_volatile = is_volatile;
        self
    }

    #[must_use]
    pub fn with_type(mut self, ty: impl Into<String>) -> Self {
        self.ty = Some(ty.into());
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Initializer expression text, without `=`.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn build(self) -> Result<Field, BuildError> {
        let mut violations = Vec::new();
        let ty = self
            .ty
            .filter(|t| !t.trim().is_empty())
            .map(|t| check_type_text(&mut violations, "type", t, syntax::canonical_type));
        if ty.is_none() {
            violations.push("Must specify type!".to_string());
        }
        let name = self.name.filter(|n| !n.trim().is_empty());
        match &name {
            Some(name) => check_identifier(&mut violations, "Field name", name),
            None => violations.push("Must specify name!".to_string()),
        }
        if let Some(value) = &self.value {
            check_expression(&mut violations, "Field value", value);
        }
        if let Some(comment) = &self.section_comment {
            check_section_comment(&mut violations, comment);
        }
        if let Some(javadoc) = &self.javadoc {
            check_mode(&mut violations, NodeKind::Field, self.mode, "javadoc", javadoc.mode);
        }
        check_modes(
            &mut violations,
            NodeKind::Field,
            self.mode,
            "annotations",
            self.annotations.iter().map(|a| a.mode),
        );
        BuildError::check(NodeKind::Field, violations)?;
        Ok(Field {
            mode: self.mode,
            section_comment: self.section_comment,
            javadoc: self.javadoc,
            annotations: self.annotations,
            visibility: self.visibility,
            is_static: self.is_static,
            is_final: self.is_final,
            is_transient: self.is_transient,
            is_volatile: self.is_volatile,
            ty: ty.unwrap_or_default(),
            name: name.unwrap_or_default(),
            value: self.value,
        })
    }
}
