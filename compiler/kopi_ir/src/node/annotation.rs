//! Annotations.

use std::ops::Deref;

use crate::builder::{check_expression, check_identifier, check_qualified_name};

use super::{ensure_editable, validate, Mutability, NodeError, NodeKind};

/// One annotation argument. A bare value (`@Name(value)`) has no key.
///
/// `value` is raw expression text; it is never evaluated.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnotationParam {
    pub key: Option<String>,
    pub value: String,
}

impl AnnotationParam {
    pub fn keyed(key: impl Into<String>, value: impl Into<String>) -> Self {
        AnnotationParam {
            key: Some(key.into()),
            value: value.into(),
        }
    }

    pub fn bare(value: impl Into<String>) -> Self {
        AnnotationParam {
            key: None,
            value: value.into(),
        }
    }
}

/// `@Name`, `@Name(value)` or `@Name(key = value, ...)`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Annotation {
    pub(crate) mode: Mutability,
    pub(crate) name: String,
    pub(crate) canonical_name: Option<String>,
    pub(crate) params: Vec<AnnotationParam>,
}

impl Annotation {
    pub fn mutability(&self) -> Mutability {
        self.mode
    }

    /// The name as written.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fully-qualified name, once resolved against the enclosing imports.
    pub fn canonical_name(&self) -> Option<&str> {
        self.canonical_name.as_deref()
    }

    /// Last segment of the written name.
    pub fn simple_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }

    pub fn params(&self) -> &[AnnotationParam] {
        &self.params
    }

    /// Value of the argument named `key`; `"value"` also matches a bare argument.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|p| match &p.key {
                Some(k) => k == key,
                None => key == "value",
            })
            .map(|p| p.value.as_str())
    }

    pub fn edit(&mut self) -> Result<AnnotationMut<'_>, NodeError> {
        ensure_editable(NodeKind::Annotation, self.mode)?;
        Ok(AnnotationMut { node: self })
    }

    #[must_use]
    pub fn into_fixed(mut self) -> Self {
        self.mode = Mutability::Fixed;
        self
    }
}

/// Mutators of an editable [`Annotation`].
pub struct AnnotationMut<'a> {
    node: &'a mut Annotation,
}

impl Deref for AnnotationMut<'_> {
    type Target = Annotation;

    fn deref(&self) -> &Annotation {
        self.node
    }
}

impl AnnotationMut<'_> {
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<&mut Self, NodeError> {
        let name = name.into();
        validate(|v| check_qualified_name(v, "Annotation name", &name))?;
        self.node.name = name;
        Ok(self)
    }

    pub fn set_canonical_name(&mut self, canonical_name: Option<String>) -> &mut Self {
        self.node.canonical_name = canonical_name;
        self
    }

    /// A bare value must stay the only argument.
    pub fn push_param(&mut self, param: AnnotationParam) -> Result<&mut Self, NodeError> {
        validate(|v| {
            if let Some(key) = &param.key {
                check_identifier(v, "Annotation key", key);
            }
            check_expression(v, "Annotation value", &param.value);
            let params = &self.node.params;
            if !params.is_empty() && (param.key.is_none() || params.iter().any(|p| p.key.is_none()))
            {
                v.push("Unnamed annotation value must be the only parameter!".to_string());
            }
        })?;
        self.node.params.push(param);
        Ok(self)
    }

    pub fn clear_params(&mut self) -> &mut Self {
        self.node.params.clear();
        self
    }
}
