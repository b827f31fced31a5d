//! Block-introducing keyword detection
//!
//! A line can only open a block if its leading code starts with one of the
//! fixed block keywords: definitions, class declarations, conditionals,
//! loops, exception handlers, context managers, structural matches, and
//! their continuation keywords (`elif`, `else`, `except`, `finally`).
//! `async` is accepted as a prefix before `def`, `for`, and `with`.
//!
//! Matching is intentionally shallow: it looks at the keyword position only,
//! never at the rest of the statement. Whether a matching line actually opens
//! a block is decided by the scanner's colon search.

use once_cell::sync::Lazy;
use regex::Regex;

/// The block-introducing keywords of the language
pub const BLOCK_KEYWORDS: &[&str] = &[
    "def", "class", "if", "elif", "else", "for", "while", "try", "except", "finally", "with",
    "match", "case",
];

/// Lazy-compiled matcher for a leading block keyword with a word boundary,
/// optionally behind an `async` prefix
static BLOCK_OPENER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:async\s+(?:def|for|with)|def|class|if|elif|else|for|while|try|except|finally|with|match|case)\b",
    )
    .expect("block keyword pattern is valid")
});

/// Whether `code` (a line's text with any comment already removed) begins
/// with a block-introducing keyword
pub fn is_block_opener(code: &str) -> bool {
    BLOCK_OPENER.is_match(code.trim_start())
}

/// The part of a line before the first `#` comment marker
///
/// Hash characters inside string literals are not recognized; lexical edge
/// cases of that kind are out of scope and at worst make header detection
/// fail for the affected line.
pub fn strip_comment(text: &str) -> &str {
    match text.find('#') {
        Some(pos) => &text[..pos],
        None => text,
    }
}
