use super::*;

#[test]
fn string_emitter_basic() {
    let mut emitter = StringEmitter::new();
    emitter.emit("public");
    emitter.emit(" ");
    emitter.emit("class");
    assert_eq!(emitter.output(), "public class");
}

#[test]
fn string_emitter_newline_and_indent() {
    let mut emitter = StringEmitter::new();
    emitter.emit("class A {");
    emitter.emit_newline();
    emitter.emit_indent(4);
    emitter.emit("int x;");
    emitter.emit_newline();
    emitter.emit("}");
    assert_eq!(emitter.output(), "class A {\n    int x;\n}");
}

#[test]
fn string_emitter_trailing_newline() {
    let mut emitter = StringEmitter::new();
    emitter.emit("}");
    emitter.ensure_trailing_newline();
    emitter.ensure_trailing_newline();
    assert_eq!(emitter.as_str(), "}\n");
}

#[test]
fn string_emitter_with_capacity() {
    let emitter = StringEmitter::with_capacity(1024);
    assert!(emitter.is_empty());
    assert_eq!(emitter.len(), 0);
}
