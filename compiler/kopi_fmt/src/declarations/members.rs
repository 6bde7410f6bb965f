//! Fields, methods and their modifier lists.

use kopi_ir::{Field, Method, Visibility};

use super::{format_annotations, format_javadoc, format_single_line_comment};
use crate::context::FormatContext;
use crate::emitter::Emitter;

/// Modifier keywords in Java's canonical order.
#[derive(Default)]
pub(crate) struct Modifiers {
    pub visibility: Option<Visibility>,
    pub is_abstract: bool,
    pub is_static: bool,
    pub is_final: bool,
    pub is_transient: bool,
    pub is_volatile: bool,
    pub is_synchronized: bool,
}

impl Modifiers {
    /// Keywords followed by a space each, or empty.
    pub(crate) fn prefix(&self) -> String {
        let flags = [
            (self.is_abstract, "abstract"),
            (self.is_static, "static"),
            (self.is_final, "final"),
            (self.is_transient, "transient"),
            (self.is_volatile, "volatile"),
            (self.is_synchronized, "synchronized"),
        ];
        let mut out = String::new();
        if let Some(keyword) = self.visibility.and_then(Visibility::keyword) {
            out.push_str(keyword);
            out.push(' ');
        }
        for (_, keyword) in flags.iter().filter(|(set, _)| *set) {
            out.push_str(keyword);
            out.push(' ');
        }
        out
    }
}

/// `[modifiers] Type name [= value]`, without `;`.
fn field_declaration(field: &Field) -> String {
    let modifiers = Modifiers {
        visibility: Some(field.visibility()),
        is_static: field.is_static(),
        is_final: field.is_final(),
        is_transient: field.is_transient(),
        is_volatile: field.is_volatile(),
        ..Modifiers::default()
    };
    let mut text = format!("{}{} {}", modifiers.prefix(), field.ty(), field.name());
    if let Some(value) = field.value() {
        text.push_str(" = ");
        text.push_str(value);
    }
    text
}

/// Print a field with its section comment, Javadoc and annotations.
///
/// `terminated` appends the `;` a class body needs.
pub(crate) fn format_field<E: Emitter>(ctx: &mut FormatContext<E>, field: &Field, terminated: bool) {
    if let Some(comment) = field.section_comment() {
        format_single_line_comment(ctx, comment);
    }
    if let Some(javadoc) = field.javadoc() {
        format_javadoc(ctx, javadoc);
    }
    format_annotations(ctx, field.annotations());
    let mut declaration = field_declaration(field);
    if terminated {
        declaration.push(';');
    }
    ctx.line(&declaration);
}

/// `[modifiers] [<T>] Type [name](T a, U b) [throws X, Y]`
fn method_header(method: &Method) -> String {
    let modifiers = Modifiers {
        visibility: Some(method.visibility()),
        is_abstract: method.is_abstract(),
        is_static: method.is_static(),
        is_final: method.is_final(),
        is_synchronized: method.is_synchronized(),
        ..Modifiers::default()
    };
    let mut text = modifiers.prefix();
    if let Some(type_parameters) = method.type_parameters() {
        text.push_str(type_parameters);
        text.push(' ');
    }
    text.push_str(method.return_type());
    if let Some(name) = method.name() {
        text.push(' ');
        text.push_str(name);
    }
    let params: Vec<String> = method
        .params()
        .iter()
        .map(|param| format!("{} {}", param.ty, param.name))
        .collect();
    text.push('(');
    text.push_str(&params.join(", "));
    text.push(')');
    if !method.throws().is_empty() {
        text.push_str(" throws ");
        text.push_str(&method.throws().join(", "));
    }
    text
}

/// Print a method: prefix lines, header, then `;` or an indented body.
pub(crate) fn format_method<E: Emitter>(ctx: &mut FormatContext<E>, method: &Method) {
    if let Some(comment) = method.section_comment() {
        format_single_line_comment(ctx, comment);
    }
    if let Some(javadoc) = method.javadoc() {
        format_javadoc(ctx, javadoc);
    }
    format_annotations(ctx, method.annotations());

    let header = method_header(method);
    if !method.has_body() {
        ctx.line(&format!("{header};"));
        return;
    }
    ctx.line(&format!("{header} {{"));
    ctx.with_indent(|ctx| {
        for line in method.body() {
            ctx.line(line.trim_end());
        }
    });
    ctx.line("}");
}
