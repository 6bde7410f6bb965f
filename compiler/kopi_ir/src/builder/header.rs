use crate::node::{ImportStatement, Mutability, NodeKind, PackageDeclaration};

use super::{check_import_path, check_qualified_name, BuildError};

/// Builds a [`PackageDeclaration`].
#[derive(Clone, Debug, Default)]
pub struct PackageDeclarationBuilder {
    mode: Mutability,
    name: Option<String>,
}

impl PackageDeclarationBuilder {
    pub fn new(mode: Mutability) -> Self {
        PackageDeclarationBuilder { mode, name: None }
    }

    pub fn editable() -> Self {
        Self::new(Mutability::Editable)
    }

    pub fn fixed() -> Self {
        Self::new(Mutability::Fixed)
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn build(self) -> Result<PackageDeclaration, BuildError> {
        let mut violations = Vec::new();
        let name = self.name.filter(|n| !n.trim().is_empty());
        match &name {
            Some(name) => check_qualified_name(&mut violations, "Package", name),
            None => violations.push("Must specify packageName!".to_string()),
        }
        BuildError::check(NodeKind::PackageDeclaration, violations)?;
        Ok(PackageDeclaration {
            mode: self.mode,
            name: name.unwrap_or_default(),
        })
    }
}

/// Builds an [`ImportStatement`].
#[derive(Clone, Debug, Default)]
pub struct ImportStatementBuilder {
    mode: Mutability,
    path: Option<String>,
    is_static: bool,
}

impl ImportStatementBuilder {
    pub fn new(mode: Mutability) -> Self {
        ImportStatementBuilder {
            mode,
            path: None,
            is_static: false,
        }
    }

    pub fn editable() -> Self {
        Self::new(Mutability::Editable)
    }

    pub fn fixed() -> Self {
        Self::new(Mutability::Fixed)
    }

    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    pub fn build(self) -> Result<ImportStatement, BuildError> {
        let mut violations = Vec::new();
        let path = self.path.filter(|p| !p.trim().is_empty());
        match &path {
            Some(path) => check_import_path(&mut violations, path),
            None => violations.push("Must specify importName!".to_string()),
        }
        BuildError::check(NodeKind::ImportStatement, violations)?;
        Ok(ImportStatement {
            mode: self.mode,
            path: path.unwrap_or_default(),
            is_static: self.is_static,
        })
    }
}
