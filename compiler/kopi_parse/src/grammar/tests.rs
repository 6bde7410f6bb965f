#![allow(clippy::unwrap_used, clippy::expect_used)]

use kopi_ir::{ElementKind, ElementRef, Node, NodeKind, Span, Visibility};
use pretty_assertions::assert_eq;

use super::method::body_lines;
use super::{collapse_blank_lines, comment_lines, join_lines};
use crate::{parse_type, ParseErrorKind};

fn parse_ok(source: &str) -> Node {
    match parse_type(source) {
        Ok(node) => node,
        Err(err) => panic!("failed to parse {source:?}: {err}"),
    }
}

// Helpers

#[test]
fn test_comment_lines_strip_markers() {
    assert_eq!(
        comment_lines("\n * first\n *\n * second\n "),
        vec!["first", "", "second"]
    );
    assert_eq!(comment_lines(" inline "), vec!["inline"]);
    assert!(comment_lines("").is_empty());
}

#[test]
fn test_collapse_blank_lines() {
    let lines = ["", "a", "", "", "b", ""].map(String::from).to_vec();
    assert_eq!(collapse_blank_lines(lines), vec!["a", "", "b"]);
}

#[test]
fn test_join_lines() {
    assert_eq!(join_lines("{1,\n   2,\n\n 3}"), "{1, 2, 3}");
}

fn lines_of(source: &str) -> Vec<String> {
    let open = source.find('{').unwrap();
    let close = source.rfind('}').unwrap();
    body_lines(
        source,
        Span::from_range(open..open + 1),
        Span::from_range(close..close + 1),
    )
}

#[test]
fn test_body_on_one_line() {
    assert_eq!(lines_of("void a() { run(); }"), vec!["run();"]);
    assert!(lines_of("void a() {}").is_empty());
}

#[test]
fn test_body_indentation_relative_to_closing_brace() {
    let source = "    void a() {\n        if (x) {\n            y();\n        }\n    }";
    assert_eq!(lines_of(source), vec!["if (x) {", "    y();", "}"]);
}

#[test]
fn test_body_blank_edges_dropped() {
    let source = "void a() {\n\n    a();\n\n    b();\n\n}";
    assert_eq!(lines_of(source), vec!["a();", "", "b();"]);
}

#[test]
fn test_body_text_on_brace_lines() {
    let source = "void a() { a();\n    b(); }";
    assert_eq!(lines_of(source), vec!["a();", "b();"]);
}

// Comments

#[test]
fn test_single_line_comment_normalizes_whitespace() {
    let node = parse_ok("//   hello    world  ");
    let Node::SingleLineComment(comment) = node else {
        panic!("expected a single-line comment");
    };
    assert_eq!(comment.content(), "hello world");
}

#[test]
fn test_multi_line_comment() {
    let node = parse_ok("/*\n * first\n *\n * second\n */");
    let Node::MultiLineComment(comment) = node else {
        panic!("expected a multi-line comment");
    };
    assert_eq!(comment.lines(), ["first", "", "second"]);
}

#[test]
fn test_unterminated_multi_line_comment() {
    let err = parse_type("/* never closed").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::Structural);
    assert_eq!(err.node, NodeKind::MultiLineComment);
    assert_eq!(err.message(), "Failed to find closing multi-line comment token!");
}

// Javadoc

#[test]
fn test_condensed_javadoc_with_tags() {
    let node = parse_ok("/** Returns the size.\n * @param strict whether to\n *   count twice\n * @return the size\n */");
    let javadoc = node.as_javadoc().unwrap();
    assert!(javadoc.is_condensed());
    assert_eq!(javadoc.content(), ["Returns the size."]);
    assert_eq!(javadoc.params()[0].name, "strict");
    assert_eq!(javadoc.params()[0].description, "whether to count twice");
    assert_eq!(javadoc.returns(), Some("the size"));
}

#[test]
fn test_non_condensed_javadoc() {
    let node = parse_ok("/**\n * A queue.\n *\n * @author Ada\n * @since 1.2\n * @exception IOException on failure\n */");
    let javadoc = node.as_javadoc().unwrap();
    assert!(!javadoc.is_condensed());
    assert_eq!(javadoc.content(), ["A queue."]);
    assert_eq!(javadoc.author(), Some("Ada"));
    assert_eq!(javadoc.since(), Some("1.2"));
    assert_eq!(javadoc.throws()[0].exception, "IOException");
    assert_eq!(javadoc.throws()[0].description, "on failure");
}

#[test]
fn test_condensed_unless_opener_ends_the_line() {
    let node = parse_ok("/** \n * a\n */");
    let javadoc = node.as_javadoc().unwrap();
    assert!(javadoc.is_condensed());
    assert_eq!(javadoc.content(), ["a"]);

    assert!(parse_ok("/**\t\n */").as_javadoc().unwrap().is_condensed());
    assert!(!parse_ok("/**\r\n * a\r\n */").as_javadoc().unwrap().is_condensed());
    assert!(!parse_ok("/**\n */").as_javadoc().unwrap().is_condensed());
}

#[test]
fn test_unknown_tags_stay_content() {
    let node = parse_ok("/** See below.\n * @see Other */");
    let javadoc = node.as_javadoc().unwrap();
    assert_eq!(javadoc.content(), ["See below.", "@see Other"]);
}

#[test]
fn test_javadoc_duplicates_reported_together() {
    let source = "/**\n * @author a\n * @author b\n * @since 1\n * @since 2\n */";
    let err = parse_type(source).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::Semantic);
    assert_eq!(err.node, NodeKind::Javadoc);
    assert_eq!(
        err.messages,
        vec!["Found multiple author strings", "Found multiple since strings"]
    );
}

#[test]
fn test_unterminated_javadoc() {
    let err = parse_type("/** never closed").unwrap_err();
    assert_eq!(err.node, NodeKind::Javadoc);
    assert_eq!(err.message(), "Failed to find closing javadoc token!");
}

// Annotations

#[test]
fn test_bare_annotation_value() {
    let node = parse_ok("@SuppressWarnings(\"unchecked\")");
    let annotation = node.as_annotation().unwrap();
    assert_eq!(annotation.name(), "SuppressWarnings");
    assert_eq!(annotation.param("value"), Some("\"unchecked\""));
    assert_eq!(
        annotation.canonical_name(),
        Some("java.lang.SuppressWarnings")
    );
}

#[test]
fn test_keyed_annotation_values_keep_nesting() {
    let node = parse_ok("@Retry(times = 3, on = {IOException.class, TimeoutException.class})");
    let annotation = node.as_annotation().unwrap();
    assert_eq!(annotation.param("times"), Some("3"));
    assert_eq!(
        annotation.param("on"),
        Some("{IOException.class, TimeoutException.class}")
    );
    assert_eq!(annotation.canonical_name(), None);
}

#[test]
fn test_equality_is_a_bare_value() {
    let node = parse_ok("@Check(x == 1)");
    let annotation = node.as_annotation().unwrap();
    assert_eq!(annotation.params().len(), 1);
    assert_eq!(annotation.param("value"), Some("x == 1"));

    let node = parse_ok("@Check(when = x == 1)");
    assert_eq!(node.as_annotation().unwrap().param("when"), Some("x == 1"));
}

#[test]
fn test_unclosed_annotation() {
    let err = parse_type("@Retry(times = 3").unwrap_err();
    assert_eq!(err.node, NodeKind::Annotation);
    assert_eq!(
        err.message(),
        "Failed to find closing parenthesis of annotation"
    );
}

// Fields

#[test]
fn test_field_with_generic_type() {
    let node =
        parse_ok("private static final Map<String, List<Integer>> CACHE = new HashMap<>();");
    let field = node.as_field().unwrap();
    assert_eq!(field.visibility(), Visibility::Private);
    assert!(field.is_static());
    assert!(field.is_final());
    assert_eq!(field.ty(), "Map<String, List<Integer>>");
    assert_eq!(field.name(), "CACHE");
    assert_eq!(field.value(), Some("new HashMap<>()"));
}

#[test]
fn test_field_without_semicolon_at_end() {
    let node = parse_ok("int test = 42");
    let field = node.as_field().unwrap();
    assert_eq!(field.visibility(), Visibility::PackagePrivate);
    assert_eq!(field.value(), Some("42"));
}

#[test]
fn test_multi_line_initializer_is_joined() {
    let node = parse_ok("int[] primes = {\n    2, 3,\n    5\n};");
    let field = node.as_field().unwrap();
    assert_eq!(field.ty(), "int[]");
    assert_eq!(field.value(), Some("{ 2, 3, 5 }"));
}

#[test]
fn test_abstract_field_rejected() {
    let err = parse_type("abstract int x;").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::Semantic);
    assert_eq!(err.message(), "Modifier `abstract` is not allowed on a field");
}

#[test]
fn test_unrecognized_character_in_initializer() {
    let err = parse_type("int x = `;").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::Lex);
    assert_eq!(err.node, NodeKind::Field);
    assert_eq!(err.message(), "Unrecognized character '`'");
}

#[test]
fn test_section_comment_attaches_to_field() {
    let node = parse_ok("// Limits\nint max = 10;");
    assert_eq!(node.as_field().unwrap().section_comment(), Some("Limits"));
}

#[test]
fn test_comment_before_blank_line_stays_separate() {
    let err = parse_type("// note\n\nint x;").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::TrailingInput);
    assert_eq!(err.node, NodeKind::SingleLineComment);
}

// Methods

#[test]
fn test_generic_method() {
    let source = "public <T extends Comparable<T>> T max(List<? extends T> items, T fallback) throws IllegalStateException {\n    return items.get(0);\n}";
    let node = parse_ok(source);
    let method = node.as_method().unwrap();
    assert_eq!(method.type_parameters(), Some("<T extends Comparable<T>>"));
    assert_eq!(method.return_type(), "T");
    assert_eq!(method.name(), Some("max"));
    assert_eq!(method.signature(), "max(List<? extends T>, T)");
    assert_eq!(method.params()[0].name, "items");
    assert_eq!(method.throws(), ["IllegalStateException"]);
    assert_eq!(method.body(), ["return items.get(0);"]);
}

#[test]
fn test_annotated_parameter_types() {
    let node = parse_ok("void f(@Named(\"x\") String s, @A @B.C( 1 ,\n 2 )int [] n) {\n}");
    let method = node.as_method().unwrap();
    assert_eq!(method.params()[0].ty, "@Named(\"x\") String");
    assert_eq!(method.params()[0].name, "s");
    assert_eq!(method.params()[1].ty, "@A @B.C(1 , 2) int[]");
    assert_eq!(method.params()[1].name, "n");
}

#[test]
fn test_non_canonical_types_are_respelled() {
    let node = parse_ok("Map < String,List<Integer> > counts;");
    assert_eq!(node.as_field().unwrap().ty(), "Map<String, List<Integer>>");

    let node = parse_ok("<T extends A&B> void f(String ... args) {}");
    let method = node.as_method().unwrap();
    assert_eq!(method.type_parameters(), Some("<T extends A & B>"));
    assert_eq!(method.params()[0].ty, "String...");
}

#[test]
fn test_unicode_names() {
    let node = parse_ok("int caf\u{00e9} = 1;");
    let field = node.as_field().unwrap();
    assert_eq!(field.name(), "caf\u{00e9}");
    assert_eq!(field.value(), Some("1"));
}

#[test]
fn test_constructor() {
    let node = parse_ok("Queue(int capacity) {\n    this.capacity = capacity;\n}");
    let method = node.as_method().unwrap();
    assert!(method.is_constructor());
    assert_eq!(method.return_type(), "Queue");
    assert_eq!(method.visibility(), Visibility::PackagePrivate);
    assert_eq!(method.body(), ["this.capacity = capacity;"]);
}

#[test]
fn test_varargs_and_final_parameters() {
    let node = parse_ok("static void log(final String format, Object... args) {}");
    let method = node.as_method().unwrap();
    assert_eq!(method.signature(), "log(final String, Object...)");
    assert!(method.body().is_empty());
    assert!(method.has_body());
}

#[test]
fn test_abstract_method_has_no_body() {
    let node = parse_ok("protected abstract void run();");
    let method = node.as_method().unwrap();
    assert!(method.is_abstract());
    assert!(!method.has_body());
    assert_eq!(method.visibility(), Visibility::Protected);
}

#[test]
fn test_abstract_method_with_body_fails_to_build() {
    let err = parse_type("abstract void run() {\n    go();\n}").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::Build);
    assert_eq!(err.node, NodeKind::Method);
    assert!(err.mentions("Abstract method cannot have a body!"));
}

#[test]
fn test_malformed_parameter() {
    let err = parse_type("void run(int) {}").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::Semantic);
    assert_eq!(err.message(), "Malformed parameter: missing name after 'int'");
}

#[test]
fn test_modifier_errors() {
    let err = parse_type("public public void run() {}").unwrap_err();
    assert_eq!(err.message(), "Duplicate modifier `public`");

    let err = parse_type("public private void run() {}").unwrap_err();
    assert_eq!(err.message(), "Conflicting visibility modifiers");

    let err = parse_type("native void run();").unwrap_err();
    assert_eq!(err.message(), "Modifier `native` is not supported");

    let err = parse_type("volatile void run() {}").unwrap_err();
    assert_eq!(err.message(), "Modifier `volatile` is not allowed on a method");
}

#[test]
fn test_unclosed_method_body() {
    let err = parse_type("void run() {\n    if (x) {\n}").unwrap_err();
    assert_eq!(err.node, NodeKind::Method);
    assert_eq!(err.message(), "Failed to find closing brace of method body");
}

#[test]
fn test_section_comment_and_annotation_on_method() {
    let node = parse_ok("// Accessors\n@Override\npublic int size() {\n    return size;\n}");
    let method = node.as_method().unwrap();
    assert_eq!(method.section_comment(), Some("Accessors"));
    assert_eq!(
        method.annotations()[0].canonical_name(),
        Some("java.lang.Override")
    );
}

// Classes

const QUEUE: &str = "package com.example;

import java.util.List;
import static java.lang.Math.max;

/**
 * A queue.
 */
@Deprecated
public final class Queue<T> extends Base implements Iterable<T>, Sized {
    private int size;

    // nested
    static class Node {
    }

    public int size() {
        return size;
    }
}
";

#[test]
fn test_outer_class_header() {
    let node = parse_ok(QUEUE);
    let class = node.as_class().unwrap();
    assert!(!class.is_inner_class());
    assert_eq!(class.package(), Some("com.example"));
    assert_eq!(class.imports(), ["java.util.List"]);
    assert_eq!(class.static_imports(), ["java.lang.Math.max"]);
    assert_eq!(class.javadoc().unwrap().content(), ["A queue."]);
    assert_eq!(
        class.annotations()[0].canonical_name(),
        Some("java.lang.Deprecated")
    );
    assert_eq!(class.visibility(), Visibility::Public);
    assert!(class.is_final());
    assert_eq!(class.name(), "Queue<T>");
    assert_eq!(class.simple_name(), "Queue");
    assert_eq!(class.superclass(), Some("Base"));
    assert_eq!(class.interfaces(), ["Iterable<T>", "Sized"]);
}

#[test]
fn test_class_body_keeps_source_order() {
    let node = parse_ok(QUEUE);
    let class = node.as_class().unwrap();
    assert_eq!(
        class.elements(),
        vec![
            ElementRef::new(ElementKind::Field, 0),
            ElementRef::new(ElementKind::SingleLineComment, 0),
            ElementRef::new(ElementKind::InnerClass, 0),
            ElementRef::new(ElementKind::Method, 0),
        ]
    );
    let inner = class.inner_class("Node").unwrap();
    assert!(inner.is_inner_class());
    assert!(inner.is_static());
    assert_eq!(class.method("size").unwrap().body(), ["return size;"]);
}

#[test]
fn test_interface_extends_list() {
    let node = parse_ok("interface Shape extends Comparable<Shape>, Cloneable {\n    double area();\n}");
    let class = node.as_class().unwrap();
    assert!(class.is_interface());
    assert_eq!(class.superclass(), None);
    assert_eq!(class.interfaces(), ["Comparable<Shape>", "Cloneable"]);
    let area = class.method("area").unwrap();
    assert!(!area.has_body());
    assert!(!area.is_abstract());
}

#[test]
fn test_unclosed_class() {
    let err = parse_type("class A {\n    int x;\n").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::Structural);
    assert_eq!(err.message(), "Failed to find closing brace of class A");
}

#[test]
fn test_stray_annotation_in_body() {
    let err = parse_type("class A {\n    @Deprecated\n}").unwrap_err();
    assert_eq!(err.node, NodeKind::Class);
    assert_eq!(err.message(), "Dangling annotation in class body");
}

#[test]
fn test_multiple_packages() {
    let err = parse_type("package a;\npackage b;\nclass A {}").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::Semantic);
    assert_eq!(err.message(), "Found multiple package declarations");
}

#[test]
fn test_class_rejects_member_modifiers() {
    let err = parse_type("transient class A {}").unwrap_err();
    assert_eq!(err.message(), "Modifier `transient` is not allowed on a class");
}
