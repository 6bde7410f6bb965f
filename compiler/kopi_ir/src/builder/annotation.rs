use crate::node::{Annotation, AnnotationParam, Mutability, NodeKind};

use super::{check_expression, check_identifier, check_qualified_name, BuildError};

/// Builds an [`Annotation`].
#[derive(Clone, Debug, Default)]
pub struct AnnotationBuilder {
    mode: Mutability,
    name: Option<String>,
    canonical_name: Option<String>,
    params: Vec<AnnotationParam>,
}

impl AnnotationBuilder {
    pub fn new(mode: Mutability) -> Self {
        AnnotationBuilder {
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

    /// The name without `@`.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_canonical_name(mut self, canonical_name: impl Into<String>) -> Self {
        self.canonical_name = Some(canonical_name.into());
        self
    }

    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push(AnnotationParam::keyed(key, value));
        self
    }

    /// A single unnamed argument: `@Name(value)`.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.params.push(AnnotationParam::bare(value));
        self
    }

    pub fn build(self) -> Result<Annotation, BuildError> {
        let mut violations = Vec::new();
        let name = self.name.filter(|n| !n.trim().is_empty());
        match &name {
            Some(name) => check_qualified_name(&mut violations, "Annotation name", name),
            None => violations.push("Must specify name!".to_string()),
        }
        for param in &self.params {
            if let Some(key) = &param.key {
                check_identifier(&mut violations, "Annotation key", key);
            }
            check_expression(&mut violations, "Annotation value", &param.value);
        }
        if self.params.len() > 1 && self.params.iter().any(|p| p.key.is_none()) {
            violations.push("Unnamed annotation value must be the only parameter!".to_string());
        }
        BuildError::check(NodeKind::Annotation, violations)?;
        Ok(Annotation {
            mode: self.mode,
            name: name.unwrap_or_default(),
            canonical_name: self.canonical_name,
            params: self.params,
        })
    }
}
