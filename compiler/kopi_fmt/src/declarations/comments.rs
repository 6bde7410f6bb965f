//! Comments and Javadoc.
//!
//! Condensed Javadoc starts its text on the opening line and closes on the
//! last one; non-condensed Javadoc puts the delimiters on their own lines
//! and separates content, `@author`/`@version`/`@since` and
//! `@param`/`@return`/`@throws` with blank ` *` lines.

use kopi_ir::Javadoc;

use crate::context::FormatContext;
use crate::emitter::Emitter;

pub(crate) fn format_single_line_comment<E: Emitter>(ctx: &mut FormatContext<E>, content: &str) {
    ctx.line(&format!("// {content}"));
}

pub(crate) fn format_multi_line_comment<E: Emitter>(ctx: &mut FormatContext<E>, lines: &[String]) {
    ctx.line("/*");
    for line in lines {
        ctx.line(&star_line(line));
    }
    ctx.line(" */");
}

pub(crate) fn format_javadoc<E: Emitter>(ctx: &mut FormatContext<E>, javadoc: &Javadoc) {
    for line in javadoc_lines(javadoc) {
        ctx.line(&line);
    }
}

/// ` * text`, or ` *` for an empty line.
fn star_line(text: &str) -> String {
    if text.is_empty() {
        " *".to_string()
    } else {
        format!(" * {text}")
    }
}

fn javadoc_lines(javadoc: &Javadoc) -> Vec<String> {
    let content: Vec<String> = javadoc
        .normalized_content()
        .into_iter()
        .map(str::to_string)
        .collect();
    let groups = [content, javadoc.info_tags(), javadoc.signature_tags()];

    if javadoc.is_condensed() {
        let text: Vec<String> = groups.into_iter().flatten().collect();
        if text.is_empty() {
            return vec!["/** */".to_string()];
        }
        let mut lines: Vec<String> = text
            .iter()
            .enumerate()
            .map(|(i, line)| if i == 0 { format!("/** {line}") } else { star_line(line) })
            .collect();
        if let Some(last) = lines.last_mut() {
            last.push_str(" */");
        }
        return lines;
    }

    let mut lines = vec!["/**".to_string()];
    let mut first = true;
    for group in groups.iter().filter(|group| !group.is_empty()) {
        if !first {
            lines.push(" *".to_string());
        }
        first = false;
        lines.extend(group.iter().map(|line| star_line(line)));
    }
    lines.push(" */".to_string());
    lines
}
