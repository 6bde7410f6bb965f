use crate::node::{Annotation, Javadoc, Method, Mutability, NodeKind, Parameter, Visibility};
use crate::syntax;

use super::{
    check_body, check_identifier, check_mode, check_modes, check_section_comment,
    check_type_text, BuildError,
};

/// Builds a [`Method`]. The return type is required; a method without a
/// name is a constructor whose return type is the class name.
#[derive(Clone, Debug)]
pub struct MethodBuilder {
    mode: Mutability,
    section_comment: Option<String>,
    javadoc: Option<Javadoc>,
    annotations: Vec<Annotation>,
    visibility: Visibility,
    is_abstract: bool,
    is_static: bool,
    is_final: bool,
    is_synchronized: bool,
    type_parameters: Option<String>,
    return_type: Option<String>,
    name: Option<String>,
    params: Vec<Parameter>,
    throws: Vec<String>,
    body: Vec<String>,
    has_body: bool,
}

impl Default for MethodBuilder {
    fn default() -> Self {
        MethodBuilder::new(Mutability::default())
    }
}

impl MethodBuilder {
    pub fn new(mode: Mutability) -> Self {
        MethodBuilder {
            mode,
            section_comment: None,
            javadoc: None,
            annotations: Vec::new(),
            visibility: Visibility::Public,
            is_abstract: false,
            is_static: false,
            is_final: false,
            is_synchronized: false,
            type_parameters: None,
            return_type: None,
            name: None,
            params: Vec::new(),
            throws: Vec::new(),
            body: Vec::new(),
            has_body: true,
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

    /// Abstract methods print without a body.
    #[must_use]
    pub fn with_abstract(mut self, is_abstract: bool) -> Self {
        self.is_abstract = is_abstract;
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
    pub fn with_synchronized(mut self, is_synchronized: bool) -> Self {
        self.is_synchronized = is_synchronized;
        self
    }

    /// Generic parameters including the angle brackets: `<T>`.
    #[must_use]
    pub fn with_type_parameters(mut self, type_parameters: impl Into<String>) -> Self {
        self.type_parameters = Some(type_parameters.into());
        self
    }

    #[must_use]
    pub fn with_return_type(mut self, return_type: impl Into<String>) -> Self {
        self.return_type = Some(return_type.into());
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_param(mut self, ty: impl Into<String>, name: impl Into<String>) -> Self {
        self.params.push(Parameter::new(ty, name));
        self
    }

    #[must_use]
    pub fn with_throws(mut self, exception: impl Into<String>) -> Self {
        self.throws.push(exception.into());
        self
    }

    /// One body line, relative to the body's indentation.
    #[must_use]
    pub fn with_body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    #[must_use]
    pub fn with_body<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.body.extend(lines.into_iter().map(Into::into));
        self
    }

    /// Declaration ending in `;`, as in interfaces.
    #[must_use]
    pub fn without_body(mut self) -> Self {
        self.has_body = false;
        self
    }

    pub fn build(self) -> Result<Method, BuildError> {
        let mut violations = Vec::new();
        let return_type = self.return_type.filter(|t| !t.trim().is_empty()).map(|t| {
            check_type_text(&mut violations, "return type", t, syntax::canonical_type)
        });
        if return_type.is_none() {
            violations.push("Must specify returnType!".to_string());
        }
        match self.name.as_deref() {
            Some(name) if name.trim().is_empty() => {
                violations.push("Must specify name!".to_string());
            }
            Some(name) => check_identifier(&mut violations, "Method name", name),
            None => {}
        }
        let type_parameters = self.type_parameters.map(|t| {
            check_type_text(
                &mut violations,
                "type parameters",
                t,
                syntax::canonical_type_parameters,
            )
        });
        let mut params = Vec::with_capacity(self.params.len());
        for param in self.params {
            if param.ty.trim().is_empty() || param.name.trim().is_empty() {
                violations.push(format!(
                    "Parameter must have a type and a name: '{} {}'",
                    param.ty, param.name
                ));
                params.push(param);
                continue;
            }
            check_identifier(&mut violations, "Parameter name", &param.name);
            let ty = check_type_text(
                &mut violations,
                "parameter type",
                param.ty,
                syntax::canonical_parameter_type,
            );
            params.push(Parameter::new(ty, param.name));
        }
        let throws: Vec<String> = self
            .throws
            .into_iter()
            .map(|t| check_type_text(&mut violations, "throws type", t, syntax::canonical_type))
            .collect();
        let has_body = self.has_body && !self.is_abstract;
        if self.is_abstract && !self.body.is_empty() {
            violations.push("Abstract method cannot have a body!".to_string());
        }
        if !has_body && !self.is_abstract && !self.body.is_empty() {
            violations.push("Bodiless method cannot have body lines!".to_string());
        }
        check_body(&mut violations, &self.body);
        if let Some(comment) = &self.section_comment {
            check_section_comment(&mut violations, comment);
        }
        if let Some(javadoc) = &self.javadoc {
            check_mode(&mut violations, NodeKind::Method, self.mode, "javadoc", javadoc.mode);
        }
        check_modes(
            &mut violations,
            NodeKind::Method,
            self.mode,
            "annotations",
            self.annotations.iter().map(|a| a.mode),
        );
        BuildError::check(NodeKind::Method, violations)?;
        Ok(Method {
            mode: self.mode,
            section_comment: self.section_comment,
            javadoc: self.javadoc,
            annotations: self.annotations,
            visibility: self.visibility,
            is_abstract: self.is_abstract,
            is_static: self.is_static,
            is_final: self.is_final,
            is_synchronized: self.is_synchronized,
            type_parameters,
            return_type: return_type.unwrap_or_default(),
            name: self.name,
            params,
            throws,
            body: self.body,
            has_body,
        })
    }
}
