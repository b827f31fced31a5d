//! Highlight band layout for a single block
//!
//! A renderer paints a block as up to four bands: the header lines before
//! the colon line, the colon line itself, the body, and the closing line.
//! Single-line blocks are their own case. This module computes those bands
//! as plain line ranges; actual painting (colors, opacities, decoration
//! handles) belongs to the host editor layer.

use crate::blocks::block::Block;
use crate::blocks::location::LineRange;

/// Line bands a renderer would paint for one block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockSegments {
    /// Header and body collapsed onto one line
    SingleLine { line: usize },
    /// A block spanning multiple lines
    Spanning {
        /// Header lines before the colon line; present only for multi-line
        /// headers
        header_lead: Option<LineRange>,
        /// The line carrying the header-terminating colon
        header_last: usize,
        /// Body lines strictly between the colon line and the closing line
        body: Option<LineRange>,
        /// Last content line of the block
        last_line: usize,
    },
}

impl BlockSegments {
    pub fn for_block(block: &Block) -> Self {
        if block.is_single_line() {
            return BlockSegments::SingleLine {
                line: block.open.line,
            };
        }

        let header_last = block.header_end_line;
        let header_lead = (block.open.line < header_last)
            .then(|| LineRange::new(block.open.line, header_last - 1));

        // A body that collapsed entirely into the header leaves no band
        // between the colon line and the closing line.
        let body = (header_last + 1 < block.close.line)
            .then(|| LineRange::new(header_last + 1, block.close.line - 1));

        BlockSegments::Spanning {
            header_lead,
            header_last,
            body,
            last_line: block.close.line,
        }
    }
}
