//! Source emission helpers.
//!
//! [`RustFile`] accumulates indented lines of Rust source. It is used both
//! for whole generated files and for individual method/type fragments, which
//! are rendered at the indentation they will occupy in the final file.

use std::fmt::Write as FmtWrite;
use std::path::Path;

use anyhow::{Context, Result};

const INDENT: &str = "    ";

/// An in-progress Rust source buffer.
#[derive(Debug, Default)]
pub struct RustFile {
    /// The accumulated source.
    pub buf: String,
    indent: usize,
}

impl RustFile {
    /// Starts a generated file with a `//` header comment block.
    ///
    /// Line comments are used instead of `//!` so the file can be pulled into
    /// a module with `include!`.
    pub fn new(header: &str) -> Self {
        let mut f = Self::default();
        for line in header.lines() {
            if line.is_empty() {
                f.line("//");
            } else {
                let _ = writeln!(f.buf, "// {line}");
            }
        }
        f.blank();
        f
    }

    /// Starts a fragment whose lines are indented `indent` levels.
    pub fn fragment(indent: usize) -> Self {
        Self {
            buf: String::new(),
            indent,
        }
    }

    /// Writes one line at the current indentation.
    pub fn line(&mut self, line: &str) {
        if line.is_empty() {
            self.buf.push('\n');
            return;
        }
        for _ in 0..self.indent {
            self.buf.push_str(INDENT);
        }
        self.buf.push_str(line);
        self.buf.push('\n');
    }

    /// Writes an empty line.
    pub fn blank(&mut self) {
        self.buf.push('\n');
    }

    /// Writes a `///` doc comment line at the current indentation.
    pub fn doc_comment(&mut self, text: &str) {
        if text.is_empty() {
            self.line("///");
        } else {
            self.line(&format!("/// {text}"));
        }
    }

    /// Writes `header {` and indents the following lines.
    pub fn open(&mut self, header: &str) {
        self.line(&format!("{header} {{"));
        self.indent += 1;
    }

    /// Dedents and writes `closing` (usually `}`).
    pub fn close_with(&mut self, closing: &str) {
        self.indent = self.indent.saturating_sub(1);
        self.line(closing);
    }

    /// Dedents and writes `}`.
    pub fn close(&mut self) {
        self.close_with("}");
    }

    /// Indents subsequent lines one level without writing a brace.
    pub fn indent(&mut self) {
        self.indent += 1;
    }

    /// Reverses one [`indent`](Self::indent).
    pub fn dedent(&mut self) {
        self.indent = self.indent.saturating_sub(1);
    }

    /// Appends pre-rendered source verbatim.
    pub fn raw(&mut self, source: &str) {
        self.buf.push_str(source);
    }

    /// Returns the finished source.
    pub fn finish(self) -> String {
        self.buf
    }
}

/// Writes `content` to `path`, creating parent directories.
///
/// The file is left untouched when its content is already identical, so
/// build scripts regenerating on every run do not trigger rebuilds.
///
/// # Errors
///
/// Returns an error if a directory cannot be created or the file cannot be
/// written.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    if std::fs::read_to_string(path).is_ok_and(|existing| existing == content) {
        return Ok(());
    }
    std::fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
