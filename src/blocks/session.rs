//! Per-document session state
//!
//! One [`DocumentSession`] owns everything the original kept in ambient
//! module scope: the cached block list and tree for the current text, and
//! the state of an in-progress "select enclosing scope" chain. The owning
//! integration layer creates a session when a document opens, calls
//! [`replace_text`](DocumentSession::replace_text) on every meaningful edit
//! (debouncing is its job, not ours), and drops the session on close.
//!
//! Artifacts are rebuilt lazily after invalidation; a selection made before
//! a rebuild is re-anchored in the fresh tree by its [`BlockKey`].

use crate::blocks::block::{Block, BlockKey};
use crate::blocks::location::LineRange;
use crate::blocks::scanner::parse_blocks;
use crate::blocks::source::TextDocument;
use crate::blocks::tree::BlockTree;

/// Owned scanning, indexing, and selection state for one open document
#[derive(Debug, Default)]
pub struct DocumentSession {
    doc: TextDocument,
    blocks: Option<Vec<Block>>,
    tree: Option<BlockTree>,
    selected: Option<BlockKey>,
    chain_ended: bool,
    selection_stack: Vec<BlockKey>,
}

impl DocumentSession {
    pub fn new(text: &str) -> Self {
        Self {
            doc: TextDocument::from_text(text),
            ..Self::default()
        }
    }

    pub fn document(&self) -> &TextDocument {
        &self.doc
    }

    /// Swap in new document text and drop the stale artifacts
    pub fn replace_text(&mut self, text: &str) {
        self.doc = TextDocument::from_text(text);
        self.invalidate();
    }

    /// Drop the cached block list and tree; they rebuild on next use
    ///
    /// The selection chain is kept: its anchor is a line-pair key and is
    /// re-resolved against the rebuilt tree on the next selection step.
    pub fn invalidate(&mut self) {
        self.blocks = None;
        self.tree = None;
    }

    /// Blocks of the current text, in closing order (built on demand)
    pub fn blocks(&mut self) -> &[Block] {
        self.ensure_artifacts();
        self.blocks.as_deref().unwrap_or(&[])
    }

    /// Containment tree of the current text (built on demand)
    pub fn tree(&mut self) -> &BlockTree {
        self.ensure_artifacts();
        self.tree.as_ref().expect("artifacts built above")
    }

    /// Smallest block containing `line`, if any
    pub fn block_at_line(&mut self, line: usize) -> Option<Block> {
        let tree = self.tree();
        let id = tree.find_node_at_line(line)?;
        tree.block(id).copied()
    }

    /// Step the selection chain outward and return the lines to select
    ///
    /// The first call selects the block under the cursor; each following
    /// call selects the parent of the previous selection. Reaching the root
    /// ends the chain: the call returns `None` and the chain stays ended
    /// until [`reset_selection`](Self::reset_selection). A cursor outside
    /// any block also returns `None`.
    pub fn select_enclosing(&mut self, cursor_line: usize) -> Option<LineRange> {
        if self.chain_ended {
            return None;
        }
        self.ensure_artifacts();
        let tree = self.tree.as_ref().expect("artifacts built above");

        let next: Option<Block> = match self.selected {
            Some(key) => match tree.find_node_by_key(key) {
                Some(id) => tree
                    .parent(id)
                    .filter(|&parent| parent != tree.root())
                    .and_then(|parent| tree.block(parent))
                    .copied(),
                // The previous selection has no counterpart in the rebuilt
                // tree; start a fresh chain at the cursor.
                None => tree
                    .find_node_at_line(cursor_line)
                    .and_then(|id| tree.block(id))
                    .copied(),
            },
            None => tree
                .find_node_at_line(cursor_line)
                .and_then(|id| tree.block(id))
                .copied(),
        };

        match next {
            Some(block) => {
                let key = block.key();
                self.selected = Some(key);
                self.selection_stack.push(key);
                Some(block.line_range())
            }
            None => {
                self.selected = None;
                self.chain_ended = true;
                None
            }
        }
    }

    /// Pop the most recent selection and return the one before it
    ///
    /// Returns `None` when the stack is exhausted, which also clears the
    /// chain anchor so the next [`select_enclosing`](Self::select_enclosing)
    /// starts over at the cursor.
    pub fn undo_selection(&mut self) -> Option<LineRange> {
        self.selection_stack.pop()?;
        self.chain_ended = false;
        match self.selection_stack.last().copied() {
            Some(key) => {
                self.selected = Some(key);
                Some(LineRange::new(key.open_line, key.close_line))
            }
            None => {
                self.selected = None;
                None
            }
        }
    }

    /// Abandon the selection chain; the next selection starts at the cursor
    pub fn reset_selection(&mut self) {
        self.selection_stack.clear();
        self.selected = None;
        self.chain_ended = false;
    }

    fn ensure_artifacts(&mut self) {
        if self.blocks.is_none() {
            self.blocks = Some(parse_blocks(&self.doc));
        }
        if self.tree.is_none() {
            let blocks = self.blocks.as_deref().unwrap_or(&[]);
            self.tree = Some(BlockTree::build(blocks));
        }
    }
}
