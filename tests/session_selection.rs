//! Session lifecycle and selection-chain integration tests
//!
//! Drives a `DocumentSession` the way an editor integration would: point
//! queries while the cursor moves, expand-selection command streaks, undo,
//! and full rebuilds after text edits.

use pyscope::blocks::{DocumentSession, LineRange};

const MODULE: &str = "\
class Counter:
    def __init__(self):
        self.count = 0

    def bump(self, by=1):
        if by > 0:
            self.count += by";

#[test]
fn test_point_queries_follow_cursor() {
    let mut session = DocumentSession::new(MODULE);

    assert_eq!(session.block_at_line(2).map(|b| b.open.line), Some(1));
    assert_eq!(session.block_at_line(6).map(|b| b.open.line), Some(5));
    assert_eq!(session.block_at_line(4).map(|b| b.open.line), Some(4));
    assert_eq!(session.block_at_line(0).map(|b| b.open.line), Some(0));
}

#[test]
fn test_expand_selection_streak() {
    let mut session = DocumentSession::new(MODULE);

    // Cursor on the innermost statement: if -> bump -> class -> end
    assert_eq!(session.select_enclosing(6), Some(LineRange::new(5, 6)));
    assert_eq!(session.select_enclosing(6), Some(LineRange::new(4, 6)));
    assert_eq!(session.select_enclosing(6), Some(LineRange::new(0, 6)));
    assert_eq!(session.select_enclosing(6), None);

    // The chain stays ended until an explicit reset
    assert_eq!(session.select_enclosing(2), None);
    session.reset_selection();
    assert_eq!(session.select_enclosing(2), Some(LineRange::new(1, 2)));
}

#[test]
fn test_undo_walks_back_down() {
    let mut session = DocumentSession::new(MODULE);

    session.select_enclosing(6);
    session.select_enclosing(6);
    session.select_enclosing(6);

    assert_eq!(session.undo_selection(), Some(LineRange::new(4, 6)));
    assert_eq!(session.undo_selection(), Some(LineRange::new(5, 6)));
    assert_eq!(session.undo_selection(), None);

    // Stack exhausted: a new chain starts from the cursor again
    assert_eq!(session.select_enclosing(6), Some(LineRange::new(5, 6)));
}

#[test]
fn test_undo_after_chain_end_resumes() {
    let mut session = DocumentSession::new(MODULE);

    session.select_enclosing(2); // __init__
    session.select_enclosing(2); // class
    assert_eq!(session.select_enclosing(2), None); // chain ended

    // Undo drops the class selection and revives the chain at __init__
    assert_eq!(session.undo_selection(), Some(LineRange::new(1, 2)));
    assert_eq!(session.select_enclosing(2), Some(LineRange::new(0, 6)));
}

#[test]
fn test_replace_text_rebuilds_artifacts() {
    let mut session = DocumentSession::new(MODULE);
    assert_eq!(session.blocks().len(), 4);

    session.replace_text("def single():\n    pass");
    assert_eq!(session.blocks().len(), 1);
    assert_eq!(session.block_at_line(1).map(|b| b.open.line), Some(0));
    assert_eq!(session.block_at_line(5), None);
}

#[test]
fn test_selection_survives_rebuild_of_same_structure() {
    let mut session = DocumentSession::new(MODULE);
    assert_eq!(session.select_enclosing(6), Some(LineRange::new(5, 6)));

    session.invalidate();

    // Key-based re-anchor: the chain continues at the parent
    assert_eq!(session.select_enclosing(6), Some(LineRange::new(4, 6)));
}

#[test]
fn test_selection_restarts_when_anchor_vanishes() {
    let mut session = DocumentSession::new(MODULE);
    assert_eq!(session.select_enclosing(6), Some(LineRange::new(5, 6)));

    // New text without a block at the old key: the chain starts over at
    // the cursor instead of walking a stale parent
    session.replace_text("if fresh:\n    x = 1");
    assert_eq!(session.select_enclosing(0), Some(LineRange::new(0, 1)));
}

#[test]
fn test_empty_document_session() {
    let mut session = DocumentSession::new("");
    assert!(session.blocks().is_empty());
    assert_eq!(session.block_at_line(0), None);
    assert_eq!(session.select_enclosing(0), None);
    assert_eq!(session.undo_selection(), None);
}
