#![allow(clippy::unwrap_used, clippy::expect_used)]

use kopi_ir::{
    AnnotationBuilder, ClassBuilder, ElementKind, ElementRef, FieldBuilder, ImportStatementBuilder,
    JavadocBuilder, MethodBuilder, MultiLineCommentBuilder, Node, PackageDeclarationBuilder,
    SingleLineCommentBuilder, Visibility,
};
use pretty_assertions::assert_eq;

use crate::ToSource;

fn field(ty: &str, name: &str) -> FieldBuilder {
    FieldBuilder::editable().with_type(ty).with_name(name)
}

// Comments

#[test]
fn single_line_comment_keeps_trailing_space() {
    let empty = SingleLineCommentBuilder::editable().build().unwrap();
    assert_eq!(empty.to_source(), "// ");
    let note = SingleLineCommentBuilder::editable()
        .with_content("note")
        .build()
        .unwrap();
    assert_eq!(note.to_source(), "// note");
}

#[test]
fn multi_line_comment() {
    let comment = MultiLineCommentBuilder::editable()
        .with_lines(["first", "", "second"])
        .build()
        .unwrap();
    assert_eq!(comment.to_source(), "/*\n * first\n *\n * second\n */");

    let empty = MultiLineCommentBuilder::editable().build().unwrap();
    assert_eq!(empty.to_source(), "/*\n */");
}

// Javadoc

#[test]
fn condensed_javadoc() {
    let doc = JavadocBuilder::editable()
        .condensed(true)
        .with_content("some content")
        .build()
        .unwrap();
    assert_eq!(doc.to_source(), "/** some content */");

    let doc = JavadocBuilder::editable()
        .condensed(true)
        .with_content("Returns the size.")
        .with_return("the size")
        .build()
        .unwrap();
    assert_eq!(doc.to_source(), "/** Returns the size.\n * @return the size */");

    let empty = JavadocBuilder::editable().condensed(true).build().unwrap();
    assert_eq!(empty.to_source(), "/** */");
}

#[test]
fn non_condensed_javadoc_separates_groups() {
    let doc = JavadocBuilder::editable()
        .with_content("A bounded queue.")
        .with_content("")
        .with_content("Blocks when full.")
        .with_author("Ada")
        .with_since("1.2")
        .with_param("capacity", "maximum size")
        .with_throws("IllegalArgumentException", "if capacity is negative")
        .build()
        .unwrap();
    let expected = "/**
 * A bounded queue.
 *
 * Blocks when full.
 *
 * @author Ada
 * @since 1.2
 *
 * @param capacity maximum size
 * @throws IllegalArgumentException if capacity is negative
 */";
    assert_eq!(doc.to_source(), expected);

    let empty = JavadocBuilder::editable().build().unwrap();
    assert_eq!(empty.to_source(), "/**\n */");
}

#[test]
fn javadoc_content_is_normalized() {
    let doc = JavadocBuilder::editable()
        .with_content("")
        .with_content("a")
        .with_content("")
        .with_content("")
        .with_content("b")
        .with_content("")
        .build()
        .unwrap();
    assert_eq!(doc.to_source(), "/**\n * a\n *\n * b\n */");
}

// Annotations and headers

#[test]
fn annotations() {
    let marker = AnnotationBuilder::editable().with_name("Override").build().unwrap();
    assert_eq!(marker.to_source(), "@Override");

    let bare = AnnotationBuilder::editable()
        .with_name("SuppressWarnings")
        .with_value("\"unchecked\"")
        .build()
        .unwrap();
    assert_eq!(bare.to_source(), "@SuppressWarnings(\"unchecked\")");

    let keyed = AnnotationBuilder::editable()
        .with_name("Retry")
        .with_param("times", "3")
        .with_param("delay", "100")
        .build()
        .unwrap();
    assert_eq!(keyed.to_source(), "@Retry(times = 3, delay = 100)");
}

#[test]
fn headers() {
    let package = PackageDeclarationBuilder::editable()
        .with_name("com.example")
        .build()
        .unwrap();
    assert_eq!(package.to_source(), "package com.example;");

    let import = ImportStatementBuilder::editable()
        .with_path("java.lang.Math.max")
        .with_static(true)
        .build()
        .unwrap();
    assert_eq!(import.to_source(), "import static java.lang.Math.max;");
}

// Fields

#[test]
fn field_without_semicolon() {
    assert_eq!(field("int", "test").build().unwrap().to_source(), "int test");
    assert_eq!(
        field("int", "test").with_value("42").build().unwrap().to_source(),
        "int test = 42"
    );
}

#[test]
fn field_modifier_order() {
    let f = field("long", "count")
        .with_volatile(true)
        .with_static(true)
        .with_transient(true)
        .with_final(true)
        .with_visibility(Visibility::Protected)
        .build()
        .unwrap();
    assert_eq!(f.to_source(), "protected static final transient volatile long count");
}

#[test]
fn field_prefix_lines() {
    let f = field("int", "max")
        .with_section_comment("Limits")
        .with_javadoc(
            JavadocBuilder::editable()
                .condensed(true)
                .with_content("Upper bound.")
                .build()
                .unwrap(),
        )
        .with_annotation(AnnotationBuilder::editable().with_name("Nonnull").build().unwrap())
        .build()
        .unwrap();
    assert_eq!(
        f.to_source(),
        "// Limits\n/** Upper bound. */\n@Nonnull\nint max"
    );
}

// Methods

#[test]
fn method_with_body() {
    let method = MethodBuilder::editable()
        .with_type_parameters("<T>")
        .with_static(true)
        .with_synchronized(true)
        .with_return_type("T")
        .with_name("first")
        .with_param("List<T>", "items")
        .with_throws("IllegalStateException")
        .with_body(["if (items.isEmpty()) {", "    throw new IllegalStateException();", "}", "", "return items.get(0);"])
        .build()
        .unwrap();
    let expected = "public static synchronized <T> T first(List<T> items) throws IllegalStateException {
    if (items.isEmpty()) {
        throw new IllegalStateException();
    }

    return items.get(0);
}";
    assert_eq!(method.to_source(), expected);
}

#[test]
fn bodiless_and_abstract_methods() {
    let abstract_method = MethodBuilder::editable()
        .with_abstract(true)
        .with_visibility(Visibility::Protected)
        .with_return_type("void")
        .with_name("run")
        .build()
        .unwrap();
    assert_eq!(abstract_method.to_source(), "protected abstract void run();");

    let interface_method = MethodBuilder::editable()
        .with_visibility(Visibility::PackagePrivate)
        .with_return_type("double")
        .with_name("area")
        .without_body()
        .build()
        .unwrap();
    assert_eq!(interface_method.to_source(), "double area();");
}

#[test]
fn constructor_and_empty_body() {
    let constructor = MethodBuilder::editable()
        .with_return_type("Queue")
        .with_param("int", "capacity")
        .build()
        .unwrap();
    assert_eq!(constructor.to_source(), "public Queue(int capacity) {\n}");
}

// Classes

#[test]
fn outer_class_file_layout() {
    let class = ClassBuilder::editable()
        .with_package("com.example")
        .with_import("java.util.List")
        .with_import("java.util.Map")
        .with_static_import("java.lang.Math.max")
        .with_visibility(Visibility::Public)
        .with_final(true)
        .with_name("Registry")
        .with_implements("Iterable<String>")
        .with_field(field("int", "a").build().unwrap())
        .with_field(field("int", "b").build().unwrap())
        .with_method(
            MethodBuilder::editable()
                .with_return_type("int")
                .with_name("size")
                .with_body_line("return a + b;")
                .build()
                .unwrap(),
        )
        .build()
        .unwrap();
    let expected = "package com.example;

import java.util.List;
import java.util.Map;

import static java.lang.Math.max;

public final class Registry implements Iterable<String> {
    int a;
    int b;

    public int size() {
        return a + b;
    }
}
";
    assert_eq!(class.to_source(), expected);
}

#[test]
fn natural_order_and_separators() {
    let inner = ClassBuilder::editable()
        .inner(true)
        .with_static(true)
        .with_visibility(Visibility::Private)
        .with_name("Node")
        .with_field(field("Node", "next").build().unwrap())
        .build()
        .unwrap();
    let class = ClassBuilder::editable()
        .with_name("List")
        .with_field(field("int", "size").build().unwrap())
        .with_field(
            field("Node", "head")
                .with_section_comment("Links")
                .build()
                .unwrap(),
        )
        .with_inner_class(inner)
        .with_single_line_comment(SingleLineCommentBuilder::editable().with_content("state").build().unwrap())
        .build()
        .unwrap();
    let expected = "class List {
    // state

    private static class Node {
        Node next;
    }

    int size;

    // Links
    Node head;
}
";
    assert_eq!(class.to_source(), expected);
}

#[test]
fn recorded_order_wins() {
    let class = ClassBuilder::editable()
        .with_name("A")
        .with_method(
            MethodBuilder::editable()
                .with_return_type("void")
                .with_name("run")
                .build()
                .unwrap(),
        )
        .with_field(field("int", "x").build().unwrap())
        .with_element_order(vec![
            ElementRef::new(ElementKind::Method, 0),
            ElementRef::new(ElementKind::Field, 0),
        ])
        .build()
        .unwrap();
    assert_eq!(
        class.to_source(),
        "class A {\n    public void run() {\n    }\n\n    int x;\n}\n"
    );
}

#[test]
fn interface_extends_list_and_inner_class_has_no_trailing_newline() {
    let interface = ClassBuilder::editable()
        .inner(true)
        .interface(true)
        .with_name("Shape")
        .with_implements("Comparable<Shape>")
        .with_implements("Cloneable")
        .build()
        .unwrap();
    assert_eq!(
        interface.to_source(),
        "interface Shape extends Comparable<Shape>, Cloneable {\n}"
    );
    assert!(Node::Class(interface).to_source().ends_with('}'));
}
