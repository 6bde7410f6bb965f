//! Parser configuration.

use kopi_ir::Mutability;

/// Options for one parse.
///
/// Parsing always assembles an editable tree. When `resolve_annotation_names`
/// is set, annotation names are resolved against the file's imports before
/// the tree is frozen into `mutability`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ParseConfig {
    pub mutability: Mutability,
    pub resolve_annotation_names: bool,
}

impl Default for ParseConfig {
    fn default() -> Self {
        ParseConfig {
            mutability: Mutability::Editable,
            resolve_annotation_names: true,
        }
    }
}

impl ParseConfig {
    /// Produce fixed trees.
    pub fn fixed() -> Self {
        ParseConfig {
            mutability: Mutability::Fixed,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_mutability(mut self, mutability: Mutability) -> Self {
        self.mutability = mutability;
        self
    }

    #[must_use]
    pub fn with_resolve_annotation_names(mut self, resolve: bool) -> Self {
        self.resolve_annotation_names = resolve;
        self
    }
}
