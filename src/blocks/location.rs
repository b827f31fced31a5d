//! Position and line-range primitives for block boundaries
//!
//! Blocks are addressed in editor coordinates: zero-based line numbers and
//! character columns. A [`Position`] marks a single point (the character after
//! a header colon, the end of a body line); a [`LineRange`] is an inclusive
//! span of whole lines, which is the granularity the highlighting and
//! selection layers work in.

use serde::Serialize;
use std::fmt;

/// A point in a document: zero-based line and character column
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

/// An inclusive span of whole lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl LineRange {
    /// Create a range covering lines `start` through `end`, both inclusive
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "inverted line range {start}..{end}");
        Self { start, end }
    }

    /// Number of lines covered by this range; inclusive ranges are never empty
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Check if a line falls within this range
    pub fn contains(&self, line: usize) -> bool {
        self.start <= line && line <= self.end
    }
}

impl fmt::Display for LineRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
