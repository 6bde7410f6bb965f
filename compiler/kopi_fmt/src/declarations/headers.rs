//! `package` and `import` lines.

/// `package a.b;`
pub(crate) fn package_text(name: &str) -> String {
    format!("package {name};")
}

/// `import a.b.C;` or `import static a.b.C.m;`
pub(crate) fn import_text(path: &str, is_static: bool) -> String {
    if is_static {
        format!("import static {path};")
    } else {
        format!("import {path};")
    }
}
