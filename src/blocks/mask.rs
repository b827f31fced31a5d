//! String-literal masking pre-pass
//!
//! A docstring written flush-left inside an indented function would look like
//! a dedent to the scanner and spuriously close the enclosing block:
//!
//! ```text
//! def f():
//!     s = """
//! not a dedent        <- masked
//! """                 <- masked
//!     return s
//! ```
//!
//! This pass walks the document once, toggling an inside-string flag on every
//! line whose total count of triple-quote markers (either delimiter style) is
//! odd. `mask[i]` records the state *entering* line `i`: the opening
//! delimiter line is real code and keeps participating in indentation
//! decisions, while interior lines and the closing delimiter line are
//! excluded from block-closing.

use crate::blocks::source::LineSource;

const TRIPLE_DOUBLE: &str = "\"\"\"";
const TRIPLE_SINGLE: &str = "'''";

/// Per-line inside-string flags for `source`
pub fn string_mask(source: &impl LineSource) -> Vec<bool> {
    let mut mask = Vec::with_capacity(source.line_count());
    let mut inside = false;

    for i in 0..source.line_count() {
        mask.push(inside);
        if toggles_string_state(source.line_text(i)) {
            inside = !inside;
        }
    }

    mask
}

/// Whether a line flips the inside-string state: an odd number of
/// triple-quote markers means a string opens or closes here and does not
/// close again on the same line
fn toggles_string_state(text: &str) -> bool {
    let markers = text.matches(TRIPLE_DOUBLE).count() + text.matches(TRIPLE_SINGLE).count();
    markers % 2 == 1
}
