//! Scanner integration tests over realistic documents
//!
//! Unit tests next to the scanner cover boundary mechanics on minimal
//! inputs; these tests run whole documents through `parse_text` and check
//! the resulting structure end to end.

use pyscope::blocks::{parse_text, Position};
use rstest::rstest;

const MODULE: &str = "\
import math

def circle_area(r):
    \"\"\"Compute the area of a circle.\"\"\"
    if r < 0:
        raise ValueError(\"negative radius\")
    return math.pi * r ** 2


class Counter:
    def __init__(self):
        self.count = 0

    def bump(self, by=1):
        self.count += by
bump_all = None";

#[test]
fn test_module_block_ranges_in_closing_order() {
    let ranges: Vec<(usize, usize)> = parse_text(MODULE)
        .iter()
        .map(|b| (b.open.line, b.close.line))
        .collect();

    assert_eq!(
        ranges,
        vec![
            (4, 5),   // if
            (2, 6),   // def circle_area
            (10, 11), // def __init__
            (13, 14), // def bump
            (9, 14),  // class Counter
        ]
    );
}

#[test]
fn test_module_headers_are_single_line() {
    for block in parse_text(MODULE) {
        assert_eq!(block.header_end_line, block.open.line);
    }
}

#[test]
fn test_module_blank_lines_excluded_from_bodies() {
    let blocks = parse_text(MODULE);
    // `def circle_area` ends at its return, not at the blank lines after it
    assert_eq!(blocks[1].close.line, 6);
    // `def __init__` ends before the blank line separating the methods
    assert_eq!(blocks[2].close.line, 11);
}

#[rstest]
#[case::bare_else("else:\n    x = 1", 5)]
#[case::bare_try("try:\n    x = 1", 4)]
#[case::while_condition("while n > 0:\n    n -= 1", 12)]
#[case::for_loop("for i in xs:\n    use(i)", 12)]
#[case::with_statement("with open(p) as f:\n    f.read()", 18)]
#[case::except_clause("except ValueError:\n    pass", 18)]
#[case::match_statement("match point:\n    pass", 12)]
#[case::case_arm("case (0, 0):\n    pass", 12)]
fn test_open_column_is_after_colon(#[case] text: &str, #[case] column: usize) {
    let blocks = parse_text(text);
    assert_eq!(blocks.last().map(|b| b.open), Some(Position::new(0, column)));
}

#[rstest]
#[case::assignment("result = compute()")]
#[case::call("print(value)")]
#[case::import_line("import os")]
#[case::return_statement("return x")]
#[case::dict_literal("d = {1: 2, 3: 4}")]
#[case::keyword_prefix_identifier("iffy = classify(x)")]
fn test_non_header_lines_yield_no_blocks(#[case] text: &str) {
    assert!(parse_text(text).is_empty());
}

#[test]
fn test_try_except_finally_chain() {
    let text = "try:\n    risky()\nexcept ValueError:\n    recover()\nfinally:\n    cleanup()";
    let ranges: Vec<(usize, usize)> = parse_text(text)
        .iter()
        .map(|b| (b.open.line, b.close.line))
        .collect();

    assert_eq!(ranges, vec![(0, 1), (2, 3), (4, 5)]);
}

#[test]
fn test_deeply_nested_chain() {
    let text = "if a:\n    if b:\n        if c:\n            if d:\n                x = 1";
    let blocks = parse_text(text);
    assert_eq!(blocks.len(), 4);

    // Innermost closes first; every block ends on the last content line
    for (i, block) in blocks.iter().enumerate() {
        assert_eq!(block.open.line, 3 - i);
        assert_eq!(block.close.line, 4);
    }
}

#[test]
fn test_decorated_function_header_detected_from_keyword_line() {
    // The decorator line is plain text; the block starts at `def`
    let text = "@cached\ndef f():\n    return 1";
    let blocks = parse_text(text);
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].open.line, 1);
}

#[test]
fn test_multiline_signature_with_defaults() {
    let text = "def request(\n    url,\n    headers={\"accept\": \"text/plain\"},\n    timeout=30,\n):\n    return fetch(url)";
    let blocks = parse_text(text);
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].open.line, 0);
    assert_eq!(blocks[0].header_end_line, 4);
    assert_eq!(blocks[0].close.line, 5);
}

#[test]
fn test_docstring_with_unindented_lines() {
    let text = "def doc():\n    \"\"\"\nSummary line at column zero.\n\nMore prose.\n\"\"\"\n    return None";
    let blocks = parse_text(text);
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].close.line, 6);
}

#[test]
fn test_unterminated_string_masks_remaining_lines() {
    // The string never closes: following lines cannot close the block, so
    // it runs to the end of the document
    let text = "def f():\n    s = \"\"\"\ntext\nmore";
    let blocks = parse_text(text);
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].close.line, 3);
}

#[test]
fn test_windows_line_endings() {
    let blocks = parse_text("if x:\r\n    y = 1\r\n");
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].close.line, 1);
}
