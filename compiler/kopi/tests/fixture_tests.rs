//! Fixture corpus: canonical Java sources that must survive parse and print
//! byte for byte, and reparse to an equal tree.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use kopi::{parse_type, Class, ElementKind, Node, ToSource, Visibility};
use pretty_assertions::assert_eq;

const LOGGER_WRAPPER: &str = include_str!("fixtures/LoggerWrapper.java");
const DOWNLOADER: &str = include_str!("fixtures/Downloader.java");
const BOUNDED_QUEUE: &str = include_str!("fixtures/BoundedQueue.java");
const CHARSET_DICTIONARY: &str = include_str!("fixtures/CharsetDictionary.java");
const PARALLEL_WORKER: &str = include_str!("fixtures/ParallelWorker.java");

fn parse_class(source: &str) -> Class {
    kopi::init_tracing();
    match parse_type(source).expect("fixture should parse") {
        Node::Class(class) => class,
        other => panic!("expected a class, got {}", other.kind()),
    }
}

fn assert_fixture_round_trip(source: &str) {
    let class = parse_class(source);
    let printed = class.to_source();
    assert_eq!(printed, source);
    assert_eq!(parse_class(&printed), class);
}

#[test]
fn logger_wrapper_round_trips() {
    assert_fixture_round_trip(LOGGER_WRAPPER);
}

#[test]
fn downloader_round_trips() {
    assert_fixture_round_trip(DOWNLOADER);
}

#[test]
fn bounded_queue_round_trips() {
    assert_fixture_round_trip(BOUNDED_QUEUE);
}

#[test]
fn charset_dictionary_round_trips() {
    assert_fixture_round_trip(CHARSET_DICTIONARY);
}

#[test]
fn parallel_worker_round_trips() {
    assert_fixture_round_trip(PARALLEL_WORKER);
}

#[test]
fn logger_wrapper_structure() {
    let class = parse_class(LOGGER_WRAPPER);
    assert_eq!(class.package(), Some("com.example.logging"));
    assert_eq!(class.imports().len(), 2);
    assert!(class.is_final());

    let javadoc = class.javadoc().unwrap();
    assert_eq!(javadoc.author(), Some("Mira Holt"));
    assert_eq!(javadoc.since(), Some("1.0"));

    assert_eq!(class.constructors().count(), 2);
    let info = class.method("info").unwrap();
    assert_eq!(info.section_comment(), Some("Levels"));
    assert_eq!(info.params()[1].ty, "Object...");
    let log = class.method("log").unwrap();
    assert_eq!(log.visibility(), Visibility::Private);
    assert_eq!(log.body().len(), 4);
}

#[test]
fn downloader_structure() {
    let class = parse_class(DOWNLOADER);
    assert_eq!(class.multi_line_comments().len(), 1);
    assert_eq!(
        class.multi_line_comments()[0].lines(),
        [
            "Retries apply to connection failures only.",
            "A partial file is always removed."
        ]
    );

    let download = class.method("download").unwrap();
    assert_eq!(download.throws(), ["IOException"]);
    let javadoc = download.javadoc().unwrap();
    assert_eq!(javadoc.params().len(), 2);
    assert_eq!(javadoc.returns(), Some("the number of bytes written"));
    assert_eq!(javadoc.throws()[0].exception, "IOException");

    let kinds: Vec<ElementKind> = class.elements().iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        [
            ElementKind::Field,
            ElementKind::Field,
            ElementKind::MultiLineComment,
            ElementKind::Method,
            ElementKind::Method,
            ElementKind::Method,
        ]
    );
}

#[test]
fn bounded_queue_structure() {
    let class = parse_class(BOUNDED_QUEUE);
    assert_eq!(class.name(), "BoundedQueue<E>");
    assert_eq!(class.simple_name(), "BoundedQueue");
    let take = class.method("take").unwrap();
    assert!(take.is_synchronized());
    assert_eq!(
        take.body(),
        [
            "while (items.isEmpty()) {",
            "    wait();",
            "}",
            "",
            "E item = items.removeFirst();",
            "notifyAll();",
            "return item;",
        ]
    );
}

#[test]
fn charset_dictionary_structure() {
    let class = parse_class(CHARSET_DICTIONARY);
    assert_eq!(class.static_imports(), ["java.util.Objects.requireNonNull"]);
    assert!(class.javadoc().unwrap().is_condensed());

    let aliases = class.field("aliases").unwrap();
    assert_eq!(aliases.section_comment(), Some("Known aliases"));
    assert_eq!(aliases.ty(), "Map<String, Charset>");
    assert_eq!(aliases.value(), Some("new HashMap<>()"));

    let to_string = class.method("toString").unwrap();
    assert_eq!(
        to_string.annotations()[0].canonical_name(),
        Some("java.lang.Override")
    );
}

#[test]
fn parallel_worker_structure() {
    let class = parse_class(PARALLEL_WORKER);
    assert_eq!(class.interfaces(), ["AutoCloseable"]);
    assert_eq!(class.annotations()[0].name(), "SuppressWarnings");

    let run_all = class.method("runAll").unwrap();
    assert_eq!(run_all.type_parameters(), Some("<T>"));
    assert_eq!(run_all.return_type(), "List<T>");
    assert_eq!(run_all.params()[0].ty, "List<Task<T>>");

    let task = class.inner_class("Task").unwrap();
    assert!(task.is_interface());
    assert!(!task.methods()[0].has_body());

    let stats = class.inner_class("Stats").unwrap();
    assert!(stats.is_static());
    let deprecated = &stats.annotations()[0];
    assert_eq!(deprecated.canonical_name(), Some("java.lang.Deprecated"));
    assert_eq!(deprecated.params().len(), 2);
}
