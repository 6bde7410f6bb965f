//! File header nodes: `package` and `import` lines.

use crate::builder::{check_import_path, check_qualified_name};

use super::{ensure_editable, validate, Mutability, NodeError, NodeKind};

/// `package a.b.c;`
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PackageDeclaration {
    pub(crate) mode: Mutability,
    pub(crate) name: String,
}

impl PackageDeclaration {
    pub fn mutability(&self) -> Mutability {
        self.mode
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn edit(&mut self) -> Result<PackageDeclarationMut<'_>, NodeError> {
        ensure_editable(NodeKind::PackageDeclaration, self.mode)?;
        Ok(PackageDeclarationMut { node: self })
    }

    #[must_use]
    pub fn into_fixed(mut self) -> Self {
        self.mode = Mutability::Fixed;
        self
    }
}

/// Mutators of an editable [`PackageDeclaration`].
pub struct PackageDeclarationMut<'a> {
    node: &'a mut PackageDeclaration,
}

impl PackageDeclarationMut<'_> {
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<&mut Self, NodeError> {
        let name = name.into();
        validate(|v| check_qualified_name(v, "Package", &name))?;
        self.node.name = name;
        Ok(self)
    }
}

/// `import a.b.C;` or `import static a.b.C.member;`
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImportStatement {
    pub(crate) mode: Mutability,
    pub(crate) path: String,
    pub(crate) is_static: bool,
}

impl ImportStatement {
    pub fn mutability(&self) -> Mutability {
        self.mode
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    /// Whether the import ends in `.*`.
    pub fn is_wildcard(&self) -> bool {
        self.path.ends_with(".*")
    }

    pub fn edit(&mut self) -> Result<ImportStatementMut<'_>, NodeError> {
        ensure_editable(NodeKind::ImportStatement, self.mode)?;
        Ok(ImportStatementMut { node: self })
    }

    #[must_use]
    pub fn into_fixed(mut self) -> Self {
        self.mode = Mutability::Fixed;
        self
    }
}

/// Mutators of an editable [`ImportStatement`].
pub struct ImportStatementMut<'a> {
    node: &'a mut ImportStatement,
}

impl ImportStatementMut<'_> {
    pub fn set_path(&mut self, path: impl Into<String>) -> Result<&mut Self, NodeError> {
        let path = path.into();
        validate(|v| check_import_path(v, &path))?;
        self.node.path = path;
        Ok(self)
    }

    pub fn set_static(&mut self, is_static: bool) -> &mut Self {
        self.node.is_static = is_static;
        self
    }
}
