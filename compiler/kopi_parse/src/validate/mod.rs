//! Post-parse semantic passes.
//!
//! Currently one pass: resolving annotation names to fully-qualified names
//! through the imports of the enclosing file.

use kopi_ir::{AnnotationMut, Class, ClassMut, Node, NodeError};
use rustc_hash::FxHashMap;
use tracing::debug;

#[cfg(test)]
mod tests;

/// `java.lang` annotations usable without an import.
const JAVA_LANG_ANNOTATIONS: &[&str] = &[
    "Override",
    "Deprecated",
    "SuppressWarnings",
    "FunctionalInterface",
    "SafeVarargs",
];

/// Simple name to qualified name, from non-wildcard imports.
type ImportTable = FxHashMap<String, String>;

/// Semantic passes over parsed trees.
pub struct Validator;

impl Validator {
    /// Fill the canonical name of every annotation in `class`, its fields,
    /// methods and inner classes.
    ///
    /// A qualified name stands for itself; a simple name matches an import's
    /// last segment or a well-known `java.lang` annotation. Anything else is
    /// left unresolved. Fails on a fixed tree.
    pub fn resolve_canonical_names(class: &mut Class) -> Result<(), NodeError> {
        let imports: ImportTable = class
            .imports()
            .iter()
            .filter(|path| !path.ends_with(".*"))
            .filter_map(|path| {
                path.rsplit_once('.')
                    .map(|(_, simple)| (simple.to_string(), path.clone()))
            })
            .collect();
        debug!(class = %class.name(), imports = imports.len(), "resolving annotation names");
        resolve_class(&mut class.edit()?, &imports);
        Ok(())
    }

    /// Apply name resolution to any node that can carry annotations.
    ///
    /// Nodes outside a class see no imports.
    pub fn resolve_node_canonical_names(node: &mut Node) -> Result<(), NodeError> {
        let imports = ImportTable::default();
        match node {
            Node::Class(class) => Self::resolve_canonical_names(class),
            Node::Field(field) => {
                resolve_all(field.edit()?.annotations_mut(), &imports);
                Ok(())
            }
            Node::Method(method) => {
                resolve_all(method.edit()?.annotations_mut(), &imports);
                Ok(())
            }
            Node::Annotation(annotation) => {
                resolve_one(&mut annotation.edit()?, &imports);
                Ok(())
            }
            Node::PackageDeclaration(_)
            | Node::ImportStatement(_)
            | Node::Javadoc(_)
            | Node::SingleLineComment(_)
            | Node::MultiLineComment(_) => Ok(()),
        }
    }
}

fn resolve_class(class: &mut ClassMut<'_>, imports: &ImportTable) {
    resolve_all(class.annotations_mut(), imports);
    for mut field in class.fields_mut() {
        resolve_all(field.annotations_mut(), imports);
    }
    for mut method in class.methods_mut() {
        resolve_all(method.annotations_mut(), imports);
    }
    for mut inner in class.inner_classes_mut() {
        resolve_class(&mut inner, imports);
    }
}

fn resolve_all<'a>(
    annotations: impl Iterator<Item = AnnotationMut<'a>>,
    imports: &ImportTable,
) {
    for mut annotation in annotations {
        resolve_one(&mut annotation, imports);
    }
}

fn resolve_one(annotation: &mut AnnotationMut<'_>, imports: &ImportTable) {
    let canonical = canonical_name(annotation.name(), imports);
    debug!(name = %annotation.name(), ?canonical, "resolved annotation");
    annotation.set_canonical_name(canonical);
}

/// The fully-qualified name `name` refers to, if known.
fn canonical_name(name: &str, imports: &ImportTable) -> Option<String> {
    if name.contains('.') {
        return Some(name.to_string());
    }
    if let Some(path) = imports.get(name) {
        return Some(path.clone());
    }
    JAVA_LANG_ANNOTATIONS
        .contains(&name)
        .then(|| format!("java.lang.{name}"))
}
