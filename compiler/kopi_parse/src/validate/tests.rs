#![allow(clippy::unwrap_used, clippy::expect_used)]

use kopi_ir::{
    Annotation, AnnotationBuilder, ClassBuilder, FieldBuilder, MethodBuilder, NodeError, NodeKind,
};
use pretty_assertions::assert_eq;

use super::*;

fn annotation(name: &str) -> Annotation {
    AnnotationBuilder::editable().with_name(name).build().unwrap()
}

fn service_class() -> Class {
    let inner = ClassBuilder::editable()
        .inner(true)
        .with_name("Cache")
        .with_annotation(annotation("Immutable"))
        .build()
        .unwrap();
    ClassBuilder::editable()
        .with_package("com.example")
        .with_import("javax.inject.Inject")
        .with_import("com.google.errorprone.annotations.Immutable")
        .with_import("java.util.*")
        .with_name("Service")
        .with_annotation(annotation("Singleton"))
        .with_field(
            FieldBuilder::editable()
                .with_type("Client")
                .with_name("client")
                .with_annotation(annotation("Inject"))
                .build()
                .unwrap(),
        )
        .with_method(
            MethodBuilder::editable()
                .with_return_type("String")
                .with_name("toString")
                .with_annotation(annotation("Override"))
                .with_annotation(annotation("javax.annotation.Nullable"))
                .build()
                .unwrap(),
        )
        .with_inner_class(inner)
        .build()
        .unwrap()
}

#[test]
fn test_resolves_through_every_level() {
    let mut class = service_class();
    Validator::resolve_canonical_names(&mut class).unwrap();

    assert_eq!(class.annotations()[0].canonical_name(), None);
    assert_eq!(
        class.fields()[0].annotations()[0].canonical_name(),
        Some("javax.inject.Inject")
    );
    let method = &class.methods()[0];
    assert_eq!(
        method.annotations()[0].canonical_name(),
        Some("java.lang.Override")
    );
    assert_eq!(
        method.annotations()[1].canonical_name(),
        Some("javax.annotation.Nullable")
    );
    assert_eq!(
        class.inner_classes()[0].annotations()[0].canonical_name(),
        Some("com.google.errorprone.annotations.Immutable")
    );
}

#[test]
fn test_wildcard_imports_do_not_resolve() {
    let imports = ImportTable::default();
    assert_eq!(canonical_name("List", &imports), None);
    assert_eq!(
        canonical_name("Deprecated", &imports).as_deref(),
        Some("java.lang.Deprecated")
    );
}

#[test]
fn test_fixed_tree_is_rejected() {
    let mut class = service_class().into_fixed();
    let err = Validator::resolve_canonical_names(&mut class).unwrap_err();
    assert_eq!(err, NodeError::Fixed(NodeKind::Class));
}

#[test]
fn test_standalone_nodes() {
    let mut node = Node::Annotation(annotation("SafeVarargs"));
    Validator::resolve_node_canonical_names(&mut node).unwrap();
    assert_eq!(
        node.as_annotation().unwrap().canonical_name(),
        Some("java.lang.SafeVarargs")
    );

    let mut node = Node::Field(
        FieldBuilder::editable()
            .with_type("int")
            .with_name("count")
            .with_annotation(annotation("Inject"))
            .build()
            .unwrap(),
    );
    Validator::resolve_node_canonical_names(&mut node).unwrap();
    assert_eq!(node.as_field().unwrap().annotations()[0].canonical_name(), None);
}
