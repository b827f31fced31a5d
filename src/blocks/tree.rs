//! Containment tree over a flat block list
//!
//! The scanner's output is a flat list; the tree arranges it by containment
//! so the highlighting and selection layers can ask "which block holds line
//! N" and "what is the next enclosing scope". Nodes live in an arena indexed
//! by [`NodeId`]; the synthetic root at index zero stands for the whole
//! document, carries no block, and is never returned from queries.
//!
//! A tree is a derived artifact of one document snapshot. After any text
//! change it is stale and must be rebuilt; only [`BlockKey`] lookups are
//! meaningful across rebuilds.

use crate::blocks::block::{Block, BlockKey};
use std::collections::VecDeque;

/// Arena index of one tree node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

const ROOT: NodeId = NodeId(0);

#[derive(Debug)]
struct Node {
    /// `None` only for the synthetic root
    block: Option<Block>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Hierarchical containment index over one snapshot's blocks
#[derive(Debug)]
pub struct BlockTree {
    nodes: Vec<Node>,
}

impl BlockTree {
    /// Build the containment tree for `blocks`
    ///
    /// Nodes are processed smallest span first and each one attaches to the
    /// smallest other block that strictly contains it, falling back to the
    /// root. Correctness rests on the scanner's nesting invariant: ranges
    /// never partially overlap.
    pub fn build(blocks: &[Block]) -> Self {
        let mut nodes = vec![Node {
            block: None,
            parent: None,
            children: Vec::new(),
        }];

        let mut order: Vec<Block> = blocks.to_vec();
        order.sort_by_key(Block::span);

        for block in &order {
            nodes.push(Node {
                block: Some(*block),
                parent: None,
                children: Vec::new(),
            });
        }

        // Attach each node to the smallest block that strictly contains it.
        // The search scans the full node set with a running best candidate;
        // the ascending span order only fixes which sibling comes first in a
        // parent's child list.
        for (i, block) in order.iter().enumerate() {
            let mut parent: Option<usize> = None;
            for (j, candidate) in order.iter().enumerate() {
                let contains = candidate.open.line < block.open.line
                    && candidate.close.line >= block.close.line;
                if contains && parent.is_none_or(|p| candidate.span() < order[p].span()) {
                    parent = Some(j);
                }
            }

            let id = NodeId(i + 1);
            let parent_id = parent.map_or(ROOT, |j| NodeId(j + 1));
            nodes[id.0].parent = Some(parent_id);
            nodes[parent_id.0].children.push(id);
        }

        Self { nodes }
    }

    /// The synthetic whole-document node
    pub fn root(&self) -> NodeId {
        ROOT
    }

    /// Number of block nodes (the root is not counted)
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The block at `id`; `None` only for the root
    pub fn block(&self, id: NodeId) -> Option<&Block> {
        self.nodes[id.0].block.as_ref()
    }

    /// Parent of `id`; `None` only for the root
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Enclosing blocks of `id`, nearest first, excluding the root
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let mut current = self.parent(id);
        std::iter::from_fn(move || {
            let next = current.filter(|&node| node != ROOT)?;
            current = self.parent(next);
            Some(next)
        })
    }

    /// Smallest block containing `line`, or `None` when the line lies
    /// outside every block
    pub fn find_node_at_line(&self, line: usize) -> Option<NodeId> {
        let mut best: Option<NodeId> = None;
        self.search_at_line(ROOT, line, &mut best);
        best
    }

    fn search_at_line(&self, id: NodeId, line: usize, best: &mut Option<NodeId>) {
        if let Some(block) = self.block(id) {
            if block.contains_line(line) {
                let better = match best.and_then(|b| self.block(b)) {
                    Some(current) => block.span() < current.span(),
                    None => true,
                };
                if better {
                    *best = Some(id);
                }
            }
        }
        for &child in self.children(id) {
            self.search_at_line(child, line, best);
        }
    }

    /// First node whose block has the given open/close line pair
    ///
    /// Breadth-first, so an outer block wins over an inner one in the
    /// (structurally impossible for valid input) event of a key collision.
    pub fn find_node_by_key(&self, key: BlockKey) -> Option<NodeId> {
        let mut queue = VecDeque::from([ROOT]);
        while let Some(id) = queue.pop_front() {
            if self.block(id).map(Block::key) == Some(key) {
                return Some(id);
            }
            queue.extend(self.children(id).iter().copied());
        }
        None
    }
}
