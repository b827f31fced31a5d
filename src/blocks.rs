//! Block scanning and indexing for indentation-delimited source
//!
//! The pipeline is one-way: raw line text goes through the
//! [`scanner`](crate::blocks::scanner) to become a flat list of
//! [`Block`](crate::blocks::block::Block)s in closing order, and the
//! [`tree`](crate::blocks::tree) arranges that list into a containment
//! index for point and ancestor queries. The
//! [`session`](crate::blocks::session) layer owns both artifacts per open
//! document and drives selection-expansion on top of them.

pub mod block;
pub mod keywords;
pub mod location;
pub mod mask;
pub mod scanner;
pub mod segments;
pub mod session;
pub mod source;
pub mod tree;

pub use block::{Block, BlockKey};
pub use location::{LineRange, Position};
pub use scanner::{parse_blocks, parse_text};
pub use segments::BlockSegments;
pub use session::DocumentSession;
pub use source::{LineSource, TextDocument};
pub use tree::{BlockTree, NodeId};
