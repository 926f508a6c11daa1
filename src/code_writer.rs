//! Indentation-tracking writer for brace-delimited output.
//!
//! Generated Go goes through `gofmt` eventually, but emitting it readably
//! indented makes golden assertions and eyeballing diffs far less painful.
//! Indentation is guard-based: [`CodeWriter::indent`] returns an RAII guard
//! and the level drops back when it goes out of scope. The level lives in an
//! `Rc<Cell<usize>>` so holding a guard does not borrow the writer.
//!
//! ```
//! use ketty_codegen::code_writer::CodeWriter;
//!
//! let mut out = String::new();
//! let mut w = CodeWriter::with_tabs(&mut out);
//! w.block("func hello() string", |w| {
//!     w.writeln("return \"hello\"")
//! })
//! .unwrap();
//! assert_eq!(out, "func hello() string {\n\treturn \"hello\"\n}\n");
//! ```

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Writer that prefixes each line with the current indentation.
pub struct CodeWriter<W> {
    writer: W,
    indent_level: Rc<Cell<usize>>,
    indent_string: String,
    at_line_start: Cell<bool>,
}

impl<W: fmt::Write> CodeWriter<W> {
    pub fn new(writer: W, indent_string: String) -> Self {
        Self {
            writer,
            indent_level: Rc::new(Cell::new(0)),
            indent_string,
            at_line_start: Cell::new(true),
        }
    }

    /// Tab indentation, matching what `gofmt` would settle on.
    pub fn with_tabs(writer: W) -> Self {
        Self::new(writer, "\t".to_string())
    }

    /// Write text without a trailing newline, indenting if at line start.
    pub fn write(&mut self, text: &str) -> fmt::Result {
        if text.is_empty() {
            return Ok(());
        }
        if self.at_line_start.get() && !text.trim().is_empty() {
            for _ in 0..self.indent_level.get() {
                self.writer.write_str(&self.indent_string)?;
            }
            self.at_line_start.set(false);
        }
        self.writer.write_str(text)
    }

    /// Write one full line.
    pub fn writeln(&mut self, text: &str) -> fmt::Result {
        self.write(text)?;
        self.writer.write_char('\n')?;
        self.at_line_start.set(true);
        Ok(())
    }

    pub fn blank_line(&mut self) -> fmt::Result {
        self.writer.write_char('\n')?;
        self.at_line_start.set(true);
        Ok(())
    }

    /// Raise the indent level until the returned guard is dropped.
    pub fn indent(&mut self) -> IndentGuard {
        self.indent_level.set(self.indent_level.get() + 1);
        IndentGuard {
            indent_level: Rc::clone(&self.indent_level),
        }
    }

    /// Write `header {`, run `body` one level deeper, then close the brace.
    pub fn block<F>(&mut self, header: &str, body: F) -> fmt::Result
    where
        F: FnOnce(&mut Self) -> fmt::Result,
    {
        self.writeln(&format!("{header} {{"))?;
        {
            let _indent = self.indent();
            body(self)?;
        }
        self.writeln("}")
    }
}

/// RAII guard holding one level of indentation.
pub struct IndentGuard {
    indent_level: Rc<Cell<usize>>,
}

impl Drop for IndentGuard {
    fn drop(&mut self) {
        let current = self.indent_level.get();
        self.indent_level.set(current.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_scopes_indentation() {
        let mut out = String::new();
        let mut w = CodeWriter::new(&mut out, "  ".to_string());

        w.writeln("a").unwrap();
        {
            let _indent = w.indent();
            w.writeln("b").unwrap();
            {
                let _indent = w.indent();
                w.writeln("c").unwrap();
            }
            w.writeln("d").unwrap();
        }
        w.writeln("e").unwrap();

        assert_eq!(out, "a\n  b\n    c\n  d\ne\n");
    }

    #[test]
    fn block_emits_braces_and_indents_body() {
        let mut out = String::new();
        let mut w = CodeWriter::with_tabs(&mut out);

        w.block("type EchoHandleT struct", |w| {
            w.writeln("desc *grpc.ServiceDesc")
        })
        .unwrap();

        assert_eq!(
            out,
            "type EchoHandleT struct {\n\tdesc *grpc.ServiceDesc\n}\n"
        );
    }

    #[test]
    fn partial_writes_indent_once_per_line() {
        let mut out = String::new();
        let mut w = CodeWriter::with_tabs(&mut out);

        let _indent = w.indent();
        w.write("return ").unwrap();
        w.writeln("out, nil").unwrap();

        assert_eq!(out, "\treturn out, nil\n");
    }

    #[test]
    fn blank_lines_carry_no_indentation() {
        let mut out = String::new();
        let mut w = CodeWriter::with_tabs(&mut out);

        let _indent = w.indent();
        w.writeln("x").unwrap();
        w.blank_line().unwrap();
        w.writeln("y").unwrap();

        assert_eq!(out, "\tx\n\n\ty\n");
    }
}
