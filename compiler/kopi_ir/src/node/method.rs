//! Method and constructor declarations.

use std::ops::Deref;

use crate::builder::{check_body, check_identifier, check_section_comment, check_type_text};
use crate::syntax;

use super::{
    ensure_editable, ensure_same_mode, validate, Annotation, AnnotationMut, Javadoc, JavadocMut,
    Mutability, NodeError, NodeKind, Visibility,
};

/// One formal parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parameter {
    pub ty: String,
    pub name: String,
}

impl Parameter {
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Parameter {
            ty: ty.into(),
            name: name.into(),
        }
    }
}

/// A method, or a constructor when `name` is absent.
///
/// Body lines are opaque text stored without the body's own indentation
/// level; they are never parsed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Method {
    pub(crate) mode: Mutability,
    pub(crate) section_comment: Option<String>,
    pub(crate) javadoc: Option<Javadoc>,
    pub(crate) annotations: Vec<Annotation>,
    pub(crate) visibility: Visibility,
    pub(crate) is_abstract: bool,
    pub(crate) is_static: bool,
    pub(crate) is_final: bool,
    pub(crate) is_synchronized: bool,
    pub(crate) type_parameters: Option<String>,
    pub(crate) return_type: String,
    pub(crate) name: Option<String>,
    pub(crate) params: Vec<Parameter>,
    pub(crate) throws: Vec<String>,
    pub(crate) body: Vec<String>,
    pub(crate) has_body: bool,
}

impl Method {
    pub fn mutability(&self) -> Mutability {
        self.mode
    }

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

    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    pub fn is_final(&self) -> bool {
        self.is_final
    }

    pub fn is_synchronized(&self) -> bool {
        self.is_synchronized
    }

    /// Generic parameter text such as `<T extends Comparable<T>>`.
    pub fn type_parameters(&self) -> Option<&str> {
        self.type_parameters.as_deref()
    }

    /// Return type, or the class name for constructors.
    pub fn return_type(&self) -> &str {
        &self.return_type
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn is_constructor(&self) -> bool {
        self.name.is_none()
    }

    pub fn params(&self) -> &[Parameter] {
        &self.params
    }

    pub fn throws(&self) -> &[String] {
        &self.throws
    }

    pub fn body(&self) -> &[String] {
        &self.body
    }

    /// False for declarations ending in `;`.
    pub fn has_body(&self) -> bool {
        self.has_body
    }

    /// `name(Type, Type)`, identifying the method among its overloads.
    pub fn signature(&self) -> String {
        let types: Vec<&str> = self.params.iter().map(|p| p.ty.as_str()).collect();
        format!(
            "{}({})",
            self.name.as_deref().unwrap_or(&self.return_type),
            types.join(", ")
        )
    }

    pub fn is_plain(&self) -> bool {
        self.section_comment.is_none() && self.javadoc.is_none() && self.annotations.is_empty()
    }

    pub fn edit(&mut self) -> Result<MethodMut<'_>, NodeError> {
        ensure_editable(NodeKind::Method, self.mode)?;
        Ok(MethodMut { node: self })
    }

    #[must_use]
    pub fn into_fixed(self) -> Self {
        Method {
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

/// Mutators of an editable [`Method`].
///
/// Text setters store the canonical spelling and refuse text that would
/// not print back as the same method.
pub struct MethodMut<'a> {
    node: &'a mut Method,
}

impl Deref for MethodMut<'_> {
    type Target = Method;

    fn deref(&self) -> &Method {
        self.node
    }
}

impl MethodMut<'_> {
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
            ensure_same_mode(NodeKind::Method, self.node.mode, "javadoc", doc.mode)?;
        }
        self.node.javadoc = javadoc;
        Ok(self)
    }

    pub fn javadoc_mut(&mut self) -> Option<JavadocMut<'_>> {
        self.node.javadoc.as_mut().and_then(|doc| doc.edit().ok())
    }

    pub fn push_annotation(&mut self, annotation: Annotation) -> Result<&mut Self, NodeError> {
        ensure_same_mode(
            NodeKind::Method,
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

    pub fn set_synchronized(&mut self, is_synchronized: bool) -> &mut Self {
        self.node.is_synchronized = is_synchronized;
        self
    }

    /// Making a method abstract drops its body. Clearing the flag leaves
    /// the method bodiless until [`set_body`](Self::set_body) gives it one.
    pub fn set_abstract(&mut self, is_abstract: bool) -> &mut Self {
        self.node.is_abstract = is_abstract;
        if is_abstract {
            self.node.body.clear();
            self.node.has_body = false;
        }
        self
    }

    pub fn set_type_parameters(
        &mut self,
        type_parameters: Option<String>,
    ) -> Result<&mut Self, NodeError> {
        self.node.type_parameters = match type_parameters {
            Some(text) => Some(validate(|v| {
                check_type_text(v, "type parameters", text, syntax::canonical_type_parameters)
            })?),
            None => None,
        };
        Ok(self)
    }

    pub fn set_return_type(
        &mut self,
        return_type: impl Into<String>,
    ) -> Result<&mut Self, NodeError> {
        self.node.return_type = validate(|v| {
            check_type_text(v, "return type", return_type.into(), syntax::canonical_type)
        })?;
        Ok(self)
    }

    /// `None` turns the method into a constructor.
    pub fn set_name(&mut self, name: Option<String>) -> Result<&mut Self, NodeError> {
        if let Some(name) = &name {
            validate(|v| check_identifier(v, "Method name", name))?;
        }
        self.node.name = name;
        Ok(self)
    }

    pub fn push_param(&mut self, param: Parameter) -> Result<&mut Self, NodeError> {
        let param = validate(|v| {
            check_identifier(v, "Parameter name", &param.name);
            let ty = check_type_text(
                v,
                "parameter type",
                param.ty,
                syntax::canonical_parameter_type,
            );
            Parameter::new(ty, param.name)
        })?;
        self.node.params.push(param);
        Ok(self)
    }

    pub fn push_throws(&mut self, exception: impl Into<String>) -> Result<&mut Self, NodeError> {
        let exception = validate(|v| {
            check_type_text(v, "throws type", exception.into(), syntax::canonical_type)
        })?;
        self.node.throws.push(exception);
        Ok(self)
    }

    /// Replace the body, giving a bodiless method one.
    ///
    /// Abstract methods refuse any body.
    pub fn set_body(&mut self, lines: Vec<String>) -> Result<&mut Self, NodeError> {
        if self.node.is_abstract {
            return Err(NodeError::AbstractBody);
        }
        validate(|v| check_body(v, &lines))?;
        self.node.body = lines;
        self.node.has_body = true;
        Ok(self)
    }
}
