//! Output writer with indentation tracking
//!
//! Accumulates generated text line by line. Lines are appended in call order
//! with no reordering or deduplication; indentation is applied once per line
//! at the current nesting level.

/// Number of spaces per indentation level in generated artifacts.
const INDENT_WIDTH: usize = 4;

/// Writer that tracks indentation and builds artifact output
pub struct LineWriter {
    /// The output buffer
    output: String,
    /// Current indentation level
    indent_level: usize,
    /// Whether we're at the start of a line
    at_line_start: bool,
}

impl Default for LineWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl LineWriter {
    pub fn new() -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            at_line_start: true,
        }
    }

    /// Get the generated output
    pub fn finish(self) -> String {
        self.output
    }

    /// Increase indentation level
    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decrease indentation level
    pub fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    /// Write indentation if at line start
    fn write_indent(&mut self) {
        if self.at_line_start {
            let indent = " ".repeat(self.indent_level * INDENT_WIDTH);
            self.output.push_str(&indent);
            self.at_line_start = false;
        }
    }

    /// Write a string (with auto-indent)
    pub fn write(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        self.write_indent();
        self.output.push_str(s);
    }

    /// Write a string and newline
    pub fn writeln(&mut self, s: &str) {
        self.write(s);
        self.newline();
    }

    /// Write just a newline
    pub fn newline(&mut self) {
        self.output.push('\n');
        self.at_line_start = true;
    }

    /// Write a blank line between sections
    pub fn blank(&mut self) {
        self.newline();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_writer_empty_output() {
        let writer = LineWriter::new();
        assert_eq!(writer.finish(), "");
    }

    #[test]
    fn test_writeln_adds_newline() {
        let mut writer = LineWriter::new();
        writer.writeln("hello");
        assert_eq!(writer.finish(), "hello\n");
    }

    #[test]
    fn test_lines_keep_call_order() {
        let mut writer = LineWriter::new();
        writer.writeln("zebra");
        writer.writeln("aardvark");
        writer.writeln("zebra");
        assert_eq!(writer.finish(), "zebra\naardvark\nzebra\n");
    }

    #[test]
    fn test_indent_affects_output() {
        let mut writer = LineWriter::new();
        writer.writeln("pub enum TokenKind {");
        writer.indent();
        writer.writeln("KwIf,");
        writer.dedent();
        writer.writeln("}");
        assert_eq!(writer.finish(), "pub enum TokenKind {\n    KwIf,\n}\n");
    }

    #[test]
    fn test_nested_indentation() {
        let mut writer = LineWriter::new();
        writer.writeln("a {");
        writer.indent();
        writer.writeln("b {");
        writer.indent();
        writer.writeln("c");
        writer.dedent();
        writer.writeln("}");
        writer.dedent();
        writer.writeln("}");
        assert_eq!(writer.finish(), "a {\n    b {\n        c\n    }\n}\n");
    }

    #[test]
    fn test_dedent_at_zero_stays_zero() {
        let mut writer = LineWriter::new();
        writer.dedent();
        writer.writeln("text");
        assert_eq!(writer.finish(), "text\n");
    }

    #[test]
    fn test_write_then_writeln_composes_one_line() {
        let mut writer = LineWriter::new();
        writer.indent();
        writer.write("KwIf");
        writer.writeln(",");
        assert_eq!(writer.finish(), "    KwIf,\n");
    }

    #[test]
    fn test_blank_line_between_sections() {
        let mut writer = LineWriter::new();
        writer.writeln("first");
        writer.blank();
        writer.writeln("second");
        assert_eq!(writer.finish(), "first\n\nsecond\n");
    }
}
