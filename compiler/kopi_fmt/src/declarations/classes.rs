//! Classes and interfaces.
//!
//! An outer class prints as a file: package, imports and static imports,
//! each group followed by a blank line, then the declaration. Body elements
//! follow the class's element order and are separated by one blank line,
//! except between two plain fields.

use kopi_ir::{Class, ElementKind, ElementRef};

use super::members::Modifiers;
use super::{
    format_annotations, format_field, format_javadoc, format_method, format_multi_line_comment,
    format_single_line_comment, import_text, package_text,
};
use crate::context::FormatContext;
use crate::emitter::Emitter;

pub(crate) fn format_class<E: Emitter>(ctx: &mut FormatContext<E>, class: &Class) {
    if !class.is_inner_class() {
        format_file_header(ctx, class);
    }
    if let Some(javadoc) = class.javadoc() {
        format_javadoc(ctx, javadoc);
    }
    format_annotations(ctx, class.annotations());
    ctx.line(&format!("{} {{", class_header(class)));

    ctx.with_indent(|ctx| {
        let mut previous: Option<ElementRef> = None;
        for element in class.elements() {
            if let Some(previous) = previous {
                if !(is_plain_field(class, previous) && is_plain_field(class, element)) {
                    ctx.blank_line();
                }
            }
            format_element(ctx, class, element);
            previous = Some(element);
        }
    });
    ctx.line("}");
}

fn format_file_header<E: Emitter>(ctx: &mut FormatContext<E>, class: &Class) {
    if let Some(package) = class.package() {
        ctx.line(&package_text(package));
        ctx.blank_line();
    }
    for (imports, is_static) in [(class.imports(), false), (class.static_imports(), true)] {
        if imports.is_empty() {
            continue;
        }
        for import in imports {
            ctx.line(&import_text(import, is_static));
        }
        ctx.blank_line();
    }
}

/// `[modifiers] class Name [extends S] [implements A, B]`
fn class_header(class: &Class) -> String {
    let modifiers = Modifiers {
        visibility: Some(class.visibility()),
        is_abstract: class.is_abstract(),
        is_static: class.is_static(),
        is_final: class.is_final(),
        ..Modifiers::default()
    };
    let keyword = if class.is_interface() { "interface" } else { "class" };
    let mut text = format!("{}{keyword} {}", modifiers.prefix(), class.name());
    if let Some(superclass) = class.superclass() {
        text.push_str(" extends ");
        text.push_str(superclass);
    }
    if !class.interfaces().is_empty() {
        text.push_str(if class.is_interface() {
            " extends "
        } else {
            " implements "
        });
        text.push_str(&class.interfaces().join(", "));
    }
    text
}

fn is_plain_field(class: &Class, element: ElementRef) -> bool {
    element.kind == ElementKind::Field
        && class.fields().get(element.index).is_some_and(|field| field.is_plain())
}

fn format_element<E: Emitter>(ctx: &mut FormatContext<E>, class: &Class, element: ElementRef) {
    let index = element.index;
    match element.kind {
        ElementKind::SingleLineComment => {
            if let Some(comment) = class.single_line_comments().get(index) {
                format_single_line_comment(ctx, comment.content());
            }
        }
        ElementKind::MultiLineComment => {
            if let Some(comment) = class.multi_line_comments().get(index) {
                format_multi_line_comment(ctx, comment.lines());
            }
        }
        ElementKind::InnerClass => {
            if let Some(inner) = class.inner_classes().get(index) {
                format_class(ctx, inner);
            }
        }
        ElementKind::Field => {
            if let Some(field) = class.fields().get(index) {
                format_field(ctx, field, true);
            }
        }
        ElementKind::Method => {
            if let Some(method) = class.methods().get(index) {
                format_method(ctx, method);
            }
        }
    }
}
