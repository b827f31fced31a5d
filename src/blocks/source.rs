//! Line-source abstraction over document text
//!
//! The scanner only ever needs a handful of per-line facts: the text, the
//! column of the first non-whitespace character, and whether the line is
//! blank. [`LineSource`] captures exactly that, so the scanner and tree are
//! testable against plain strings and adaptable to any host editor's
//! document type without touching the parsing code.

/// Minimal read-only view of one document's lines
pub trait LineSource {
    /// Number of lines in the document
    fn line_count(&self) -> usize;

    /// Raw text of line `i`, without any trailing newline
    fn line_text(&self, i: usize) -> &str;

    /// Column of the first non-whitespace character on line `i`; for blank
    /// lines this is the line length
    fn indentation(&self, i: usize) -> usize {
        let text = self.line_text(i);
        text.chars()
            .position(|c| !c.is_whitespace())
            .unwrap_or_else(|| text.chars().count())
    }

    /// Whether line `i` is empty or whitespace-only
    fn is_blank(&self, i: usize) -> bool {
        self.line_text(i).chars().all(|c| c.is_whitespace())
    }
}

/// An owned, immutable document built from a plain string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextDocument {
    lines: Vec<String>,
}

impl TextDocument {
    /// Split `text` into lines on `\n`, stripping a trailing `\r` from each
    /// line so CRLF input behaves like LF input. Empty text yields an empty
    /// document.
    pub fn from_text(text: &str) -> Self {
        if text.is_empty() {
            return Self { lines: Vec::new() };
        }
        let lines = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
            .collect();
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl LineSource for TextDocument {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line_text(&self, i: usize) -> &str {
        &self.lines[i]
    }
}

impl LineSource for Vec<String> {
    fn line_count(&self) -> usize {
        self.len()
    }

    fn line_text(&self, i: usize) -> &str {
        &self[i]
    }
}

impl LineSource for &[&str] {
    fn line_count(&self) -> usize {
        self.len()
    }

    fn line_text(&self, i: usize) -> &str {
        self[i]
    }
}
