//! Single-pass block scanner
//!
//! Converts a flat sequence of lines into the set of indentation-delimited
//! blocks they form. The scanner keeps a stack of currently-open blocks;
//! a non-blank line at an indentation less than or equal to the top entry's
//! indentation closes that entry, and a line whose leading code starts with
//! a block keyword and reaches a colon outside brackets opens a new one.
//! Blocks are appended to the output when popped, so the result is in
//! closing order: children always precede their ancestors.
//!
//! Malformed input never fails. Unterminated strings, unbalanced brackets,
//! and headers that never find their colon all degrade to "no block detected
//! here" and scanning continues with the next line.

use crate::blocks::block::Block;
use crate::blocks::keywords::{is_block_opener, strip_comment};
use crate::blocks::location::Position;
use crate::blocks::mask::string_mask;
use crate::blocks::source::{LineSource, TextDocument};

/// Maximum number of continuation lines examined while looking for a
/// multi-line header's terminating colon; bounds lookahead on malformed input
const HEADER_LOOKAHEAD_BUDGET: usize = 20;

/// A block that has been opened but not yet closed
struct OpenBlock {
    indent: usize,
    start_line: usize,
    open_column: usize,
    header_end_line: usize,
}

/// Outcome of a successful header scan
struct HeaderMatch {
    /// Column just after the terminating colon
    open_column: usize,
    /// Line the colon appears on
    end_line: usize,
}

/// Scan `source` and return its blocks in closing order
///
/// The result satisfies the nesting invariant: any two returned blocks are
/// either disjoint or one strictly contains the other. Empty documents yield
/// an empty list; no input makes this function panic.
pub fn parse_blocks(source: &impl LineSource) -> Vec<Block> {
    let mask = string_mask(source);
    let mut blocks = Vec::new();
    let mut stack: Vec<OpenBlock> = Vec::new();

    let mut line = 0;
    while line < source.line_count() {
        if source.is_blank(line) {
            line += 1;
            continue;
        }

        let indent = source.indentation(line);

        // Lines inside a multi-line string never close blocks; a flush-left
        // docstring is not a dedent.
        if !mask[line] {
            while stack.last().is_some_and(|top| indent <= top.indent) {
                if let Some(open) = stack.pop() {
                    blocks.push(finalize(source, open, line - 1));
                }
            }
        }

        if let Some(header) = scan_header(source, line, indent) {
            stack.push(OpenBlock {
                indent,
                start_line: line,
                open_column: header.open_column,
                header_end_line: header.end_line,
            });
            // Header lines are consumed; resume after the colon line.
            line = header.end_line + 1;
            continue;
        }

        line += 1;
    }

    while let Some(open) = stack.pop() {
        let last_line = source.line_count() - 1;
        blocks.push(finalize(source, open, last_line));
    }

    blocks
}

/// Convenience wrapper: scan a plain string
pub fn parse_text(text: &str) -> Vec<Block> {
    parse_blocks(&TextDocument::from_text(text))
}

/// Try to read a block header starting at `start_line`
///
/// A header is a block-keyword line plus any continuation lines up to the
/// first colon outside `()[]{}` nesting. Detection fails if a later non-blank
/// line dedents back to the start indentation before that colon shows up, or
/// if the lookahead budget runs out.
fn scan_header(source: &impl LineSource, start_line: usize, indent: usize) -> Option<HeaderMatch> {
    let first_code = strip_comment(source.line_text(start_line));
    if !is_block_opener(first_code) {
        return None;
    }

    let mut depth: i64 = 0;
    if let Some(col) = colon_column(first_code, &mut depth) {
        return Some(HeaderMatch {
            open_column: col + 1,
            end_line: start_line,
        });
    }

    let mut line = start_line + 1;
    let mut scanned = 0;
    while line < source.line_count() && scanned < HEADER_LOOKAHEAD_BUDGET {
        scanned += 1;
        if source.is_blank(line) {
            line += 1;
            continue;
        }

        let code = strip_comment(source.line_text(line));
        if let Some(col) = colon_column(code, &mut depth) {
            return Some(HeaderMatch {
                open_column: col + 1,
                end_line: line,
            });
        }

        // Dedent without a terminating colon: not a header after all.
        if source.indentation(line) <= indent {
            return None;
        }

        line += 1;
    }

    None
}

/// Column of the first colon at bracket depth zero in `code`, updating
/// `depth` across continuation lines
///
/// Walrus (`:=`) colons are skipped; they bind a value, they never terminate
/// a header. Unbalanced closers may push the depth negative, which still
/// counts as "outside brackets".
fn colon_column(code: &str, depth: &mut i64) -> Option<usize> {
    let mut chars = code.chars().enumerate().peekable();
    while let Some((col, ch)) = chars.next() {
        match ch {
            '(' | '[' | '{' => *depth += 1,
            ')' | ']' | '}' => *depth -= 1,
            ':' if *depth <= 0 => {
                if chars.peek().map(|&(_, next)| next) == Some('=') {
                    continue;
                }
                return Some(col);
            }
            _ => {}
        }
    }
    None
}

/// Close an open block at `end_line`, excluding trailing blank lines
///
/// Walks backward to the last non-blank line; its end becomes the close
/// position. A body that was entirely blank collapses the block onto its own
/// header line.
fn finalize(source: &impl LineSource, open: OpenBlock, end_line: usize) -> Block {
    let mut last = end_line;
    while last > open.start_line && source.is_blank(last) {
        last -= 1;
    }

    let close_column = source.line_text(last).chars().count();
    Block::new(
        Position::new(open.start_line, open.open_column),
        Position::new(last, close_column),
        open.header_end_line,
    )
}
