//! Round-trip tests on hand-written canonical sources.
//!
//! Each sample is already in printed form, so parsing and printing it must
//! reproduce the input byte for byte.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use kopi_fmt::ToSource;
use kopi_parse::{parse_type_with, ParseConfig};
use pretty_assertions::assert_eq;

fn assert_round_trip(source: &str) {
    let config = ParseConfig::default().with_resolve_annotation_names(false);
    let node = parse_type_with(source, &config).expect("sample should parse");
    assert_eq!(node.to_source(), source);
}

#[test]
fn single_line_comment() {
    assert_round_trip("// keep the lock short");
}

#[test]
fn multi_line_comment() {
    assert_round_trip("/*\n * first\n *\n * third\n */");
}

#[test]
fn condensed_javadoc() {
    assert_round_trip("/** Returns the size.\n * @return the size */");
}

#[test]
fn expanded_javadoc() {
    assert_round_trip(
        "/**\n * Creates a queue.\n *\n * @author Ada\n * @since 1.2\n *\n * @param capacity the bound\n * @throws IllegalArgumentException when negative\n */",
    );
}

#[test]
fn annotations() {
    assert_round_trip("@Override");
    assert_round_trip("@SuppressWarnings(\"unchecked\")");
    assert_round_trip("@Retry(attempts = 3, delay = 100)");
    assert_round_trip("@Check(x == 1)");
}

#[test]
fn parameter_type_annotations() {
    assert_round_trip("void f(@Named(\"x\") String s) {\n}");
    assert_round_trip("void g(final @Size(min = 1) List<@NonNull String> names) {\n}");
}

#[test]
fn unicode_identifiers() {
    assert_round_trip("int caf\u{00e9} = 1");
}

#[test]
fn field_with_prefix() {
    assert_round_trip(
        "// Counters\n/** Total hits. */\n@Nullable\nprivate static volatile long hits = 0",
    );
}

#[test]
fn generic_method() {
    assert_round_trip(
        "public static <T extends Comparable<T>> T max(List<T> items, int from) throws EmptyException {\n    T best = items.get(from);\n    for (T item : items) {\n        if (item.compareTo(best) > 0) {\n            best = item;\n        }\n    }\n    return best;\n}",
    );
}

#[test]
fn constructor_and_empty_body() {
    assert_round_trip("public Queue(int capacity) {\n    this.capacity = capacity;\n}");
    assert_round_trip("protected void reset() {\n}");
}

#[test]
fn interface_method() {
    assert_round_trip("abstract void run();");
}

#[test]
fn outer_class() {
    assert_round_trip(
        "package com.example.cache;

import java.util.HashMap;
import java.util.Map;

import static java.util.Objects.requireNonNull;

/**
 * A tiny cache.
 */
@ThreadSafe
public final class Cache<K, V> extends Base implements Store<K, V>, Closeable {
    private final Map<K, V> entries = new HashMap<>();
    private int hits;

    // Lookup
    public V get(K key) {
        requireNonNull(key);
        return entries.get(key);
    }

    @Override
    public void close() {
        entries.clear();
    }

    static class Entry {
        int age;
    }
}
",
    );
}

#[test]
fn interface_with_extends_list() {
    assert_round_trip(
        "public interface Store<K, V> extends Closeable, Iterable<K> {
    V get(K key);

    void put(K key, V value);
}
",
    );
}
