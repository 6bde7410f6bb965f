//! Annotations.

use kopi_ir::Annotation;

use crate::context::FormatContext;
use crate::emitter::Emitter;

/// `@Name`, `@Name(value)` or `@Name(k = v, k2 = v2)`.
pub(crate) fn annotation_text(annotation: &Annotation) -> String {
    let mut text = format!("@{}", annotation.name());
    let params = annotation.params();
    if params.is_empty() {
        return text;
    }
    let args: Vec<String> = params
        .iter()
        .map(|param| match &param.key {
            Some(key) => format!("{key} = {}", param.value),
            None => param.value.clone(),
        })
        .collect();
    text.push('(');
    text.push_str(&args.join(", "));
    text.push(')');
    text
}

/// One line per annotation.
pub(crate) fn format_annotations<E: Emitter>(ctx: &mut FormatContext<E>, annotations: &[Annotation]) {
    for annotation in annotations {
        ctx.line(&annotation_text(annotation));
    }
}
