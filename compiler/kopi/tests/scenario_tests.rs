//! End-to-end checks through the facade: parse, build, edit and print.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use kopi::{
    parse_type, reformat, AnnotationBuilder, ClassBuilder, FieldBuilder, JavadocBuilder,
    MethodBuilder, Mutability, Node, NodeError, NodeKind, ParseConfig, ParseErrorKind, ToSource,
};
use pretty_assertions::assert_eq;

// -- Concrete scenarios --

#[test]
fn empty_line_comment_keeps_trailing_space() {
    let node = parse_type("//").unwrap();
    let Node::SingleLineComment(comment) = &node else {
        panic!("expected a single-line comment, got {}", node.kind());
    };
    assert_eq!(comment.content(), "");
    assert_eq!(node.to_source(), "// ");
}

#[test]
fn empty_expanded_javadoc_round_trips() {
    let node = parse_type("/**\n */").unwrap();
    let javadoc = node.as_javadoc().unwrap();
    assert!(!javadoc.is_condensed());
    assert!(javadoc.content().is_empty());
    assert_eq!(node.to_source(), "/**\n */");
}

#[test]
fn condensed_javadoc_round_trips() {
    let node = parse_type("/** some content */").unwrap();
    let javadoc = node.as_javadoc().unwrap();
    assert!(javadoc.is_condensed());
    assert_eq!(javadoc.content(), ["some content"]);
    assert_eq!(node.to_source(), "/** some content */");
}

#[test]
fn built_field_prints_declaration() {
    let builder = FieldBuilder::editable().with_type("int").with_name("test");
    assert_eq!(builder.clone().build().unwrap().to_source(), "int test");
    assert_eq!(
        builder.with_value("42").build().unwrap().to_source(),
        "int test = 42"
    );
}

#[test]
fn class_without_name_is_rejected() {
    let err = ClassBuilder::editable().build().unwrap_err();
    assert_eq!(err.kind, NodeKind::Class);
    assert!(err.mentions("Must specify className!"));
}

#[test]
fn block_comment_needs_closer() {
    assert!(matches!(parse_type("/* */").unwrap(), Node::MultiLineComment(_)));

    let err = parse_type("/*").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::Structural);
    assert_eq!(err.node, NodeKind::MultiLineComment);
    assert!(err.mentions("Failed to find closing multi-line comment token!"));
}

// -- Mutability --

fn fixed_children() -> ClassBuilder {
    let javadoc = JavadocBuilder::fixed().with_content("doc").build().unwrap();
    let annotation = AnnotationBuilder::fixed().with_name("Marker").build().unwrap();
    let inner = ClassBuilder::fixed().inner(true).with_name("Inner").build().unwrap();
    let field = FieldBuilder::fixed()
        .with_type("int")
        .with_name("count")
        .build()
        .unwrap();
    let method = MethodBuilder::fixed()
        .with_return_type("void")
        .with_name("run")
        .build()
        .unwrap();
    ClassBuilder::editable()
        .with_name("Outer")
        .with_javadoc(javadoc)
        .with_annotation(annotation)
        .with_inner_class(inner)
        .with_field(field)
        .with_method(method)
}

#[test]
fn mixed_modes_report_every_category() {
    let err = fixed_children().build().unwrap_err();
    for category in ["javadoc", "annotations", "inner classes", "fields", "methods"] {
        assert!(
            err.mentions(&format!("Editable class cannot contain fixed {category}!")),
            "missing {category} in {err}"
        );
    }
    assert_eq!(err.violations.len(), 5);
}

#[test]
fn single_fixed_child_is_rejected() {
    let field = FieldBuilder::fixed()
        .with_type("int")
        .with_name("count")
        .build()
        .unwrap();
    let err = ClassBuilder::editable()
        .with_name("Outer")
        .with_field(field)
        .build()
        .unwrap_err();
    assert_eq!(err.violations, ["Editable class cannot contain fixed fields!"]);
}

#[test]
fn fixed_parse_refuses_edits() {
    let config = ParseConfig::fixed();
    let mut node = kopi::parse_type_with("class Counter {\n    int count;\n}\n", &config).unwrap();
    assert_eq!(node.mutability(), Mutability::Fixed);

    let class = node.as_class_mut().unwrap();
    assert_eq!(class.fields()[0].mutability(), Mutability::Fixed);
    assert_eq!(class.edit().err(), Some(NodeError::Fixed(NodeKind::Class)));
}

// -- Editing --

#[test]
fn edited_class_prints_changes() {
    let mut node = parse_type("public class Counter {\n    private int count;\n}\n").unwrap();
    let class = node.as_class_mut().unwrap();
    let increment = MethodBuilder::editable()
        .with_return_type("void")
        .with_name("increment")
        .with_body_line("count++;")
        .build()
        .unwrap();
    class.edit().unwrap().add_method(increment).unwrap();

    assert_eq!(
        node.to_source(),
        "public class Counter {
    private int count;

    public void increment() {
        count++;
    }
}
"
    );
}

#[test]
fn reformat_normalizes_layout() {
    let source = "public   class Pair{ final  int left ;final int right;\n\n\n}";
    assert_eq!(
        reformat(source).unwrap(),
        "public class Pair {\n    final int left;\n    final int right;\n}\n"
    );
}
