use super::*;

#[test]
fn context_basic_emit() {
    let mut ctx = FormatContext::new();
    ctx.emit("int");
    ctx.emit(" x");
    assert_eq!(ctx.emitter().len(), 5);
    assert_eq!(ctx.output(), "int x");
}

#[test]
fn context_lines_are_separated_not_terminated() {
    let mut ctx = FormatContext::new();
    ctx.line("class A {");
    ctx.with_indent(|ctx| ctx.line("int x;"));
    ctx.line("}");
    assert_eq!(ctx.as_str(), "class A {\n    int x;\n}");
    assert_eq!(ctx.finalize(), "class A {\n    int x;\n}\n");
}

#[test]
fn context_blank_lines_have_no_indent() {
    let mut ctx = FormatContext::new();
    ctx.indent();
    ctx.line("a();");
    ctx.blank_line();
    ctx.line("b();");
    assert_eq!(ctx.output(), "    a();\n\n    b();");
}

#[test]
fn context_with_indent_scope() {
    let mut ctx = FormatContext::new();
    ctx.with_indent(|ctx| {
        assert_eq!(ctx.indent_level(), 1);
        ctx.with_indent(|ctx| assert_eq!(ctx.indent_width(), 8));
        assert_eq!(ctx.indent_level(), 1);
    });
    assert_eq!(ctx.indent_level(), 0);
    ctx.dedent();
    assert_eq!(ctx.indent_level(), 0);
}

#[test]
fn context_indents_only_line_starts() {
    let mut ctx = FormatContext::new();
    ctx.indent();
    ctx.line("x");
    ctx.emit(" = 1;");
    ctx.emit_newline();
    assert_eq!(ctx.as_str(), "    x = 1;\n");
}
