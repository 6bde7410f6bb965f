//! Formatting context.
//!
//! Tracks the indentation level while printers write output
//! line by line. Lines are separated, not terminated: the first line needs
//! no newline before it and the last gets none after it, so every node
//! prints without a trailing newline unless the caller asks for one.

use crate::emitter::{Emitter, StringEmitter};

/// Spaces per indentation level.
pub const INDENT_WIDTH: usize = 4;

/// Output state for one print.
pub struct FormatContext<E: Emitter = StringEmitter> {
    emitter: E,
    indent_level: usize,
    lines: usize,
}

impl FormatContext<StringEmitter> {
    pub fn new() -> Self {
        Self::with_emitter(StringEmitter::new())
    }

    /// Create with pre-allocated capacity for the output buffer.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_emitter(StringEmitter::with_capacity(capacity))
    }

    /// Get the printed output.
    pub fn output(self) -> String {
        self.emitter.output()
    }

    /// Get the current output without consuming.
    pub fn as_str(&self) -> &str {
        self.emitter.as_str()
    }

    /// Output terminated by exactly one newline, as for a whole file.
    pub fn finalize(mut self) -> String {
        self.emitter.ensure_trailing_newline();
        self.emitter.output()
    }
}

impl Default for FormatContext<StringEmitter> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Emitter> FormatContext<E> {
    pub fn with_emitter(emitter: E) -> Self {
        Self {
            emitter,
            indent_level: 0,
            lines: 0,
        }
    }

    pub fn indent_level(&self) -> usize {
        self.indent_level
    }

    /// Current indentation width in spaces.
    pub fn indent_width(&self) -> usize {
        self.indent_level * INDENT_WIDTH
    }

    /// Emit a text fragment on the current line.
    pub fn emit(&mut self, text: &str) {
        self.emitter.emit(text);
    }

    pub fn emit_newline(&mut self) {
        self.emitter.emit_newline();
    }

    /// Emit indentation at the current level.
    pub fn emit_indent(&mut self) {
        self.emitter.emit_indent(self.indent_width());
    }

    /// Start a new line holding `text` at the current indentation.
    ///
    /// Empty lines carry no indentation.
    pub fn line(&mut self, text: &str) {
        if self.lines > 0 {
            self.emit_newline();
        }
        self.lines += 1;
        if !text.is_empty() {
            self.emit_indent();
            self.emit(text);
        }
    }

    /// Start an empty line.
    pub fn blank_line(&mut self) {
        self.line("");
    }

    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn dedent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    /// Execute a closure with increased indentation.
    pub fn with_indent<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut Self) -> R,
    {
        self.indent();
        let result = f(self);
        self.dedent();
        result
    }

    pub fn emitter(&self) -> &E {
        &self.emitter
    }
}

#[cfg(test)]
mod tests;
