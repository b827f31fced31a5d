//! The block data model
//!
//! A [`Block`] is one indentation-delimited scope: the span from the header
//! line that introduces it (a `def`, `class`, `if`, ... statement ending in a
//! colon) down to the last non-blank line of its body. The scanner emits
//! blocks in closing order, so a block's children always precede it in the
//! flat list.
//!
//! ```text
//! def f():          <- open (0, 8), header_end_line 0
//!     if x:         <- nested block: open (1, 9)
//!         y = 1     <- nested close (2, 13)
//!     return y      <- close (3, 12)
//! ```

use crate::blocks::location::{LineRange, Position};
use serde::Serialize;
use std::fmt;

/// One syntactic block: a header position, the line its colon lands on, and
/// the end of its last non-blank body line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Block {
    /// Position just after the header-terminating colon, on the line where
    /// the header begins
    pub open: Position,
    /// End of the last non-blank line belonging to the body; trailing blank
    /// lines are never included
    pub close: Position,
    /// Line carrying the colon that terminates the header; differs from
    /// `open.line` only for multi-line headers
    pub header_end_line: usize,
}

impl Block {
    pub fn new(open: Position, close: Position, header_end_line: usize) -> Self {
        Self {
            open,
            close,
            header_end_line,
        }
    }

    /// Whole-line span of the block, header line included
    pub fn line_range(&self) -> LineRange {
        LineRange::new(self.open.line, self.close.line)
    }

    /// Body size in lines; the measure used for containment tie-breaks
    pub fn span(&self) -> usize {
        self.close.line - self.open.line
    }

    /// Check whether a line falls inside this block (header line included)
    pub fn contains_line(&self, line: usize) -> bool {
        self.open.line <= line && line <= self.close.line
    }

    /// A block whose body collapsed to its own header line
    pub fn is_single_line(&self) -> bool {
        self.open.line == self.close.line
    }

    /// Stable identity of this block within one document snapshot
    pub fn key(&self) -> BlockKey {
        BlockKey {
            open_line: self.open.line,
            close_line: self.close.line,
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.open, self.close)
    }
}

/// Deterministic block identity derived from the open/close line pair
///
/// Keys are only meaningful within one tree snapshot, or compared by
/// line-pair equality across rebuilds of the same unchanged text. They are
/// how a prior selection is re-anchored against a freshly built tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BlockKey {
    pub open_line: usize,
    pub close_line: usize,
}

impl BlockKey {
    pub fn new(open_line: usize, close_line: usize) -> Self {
        Self {
            open_line,
            close_line,
        }
    }
}

impl fmt::Display for BlockKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.open_line, self.close_line)
    }
}
