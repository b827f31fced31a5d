//! # pyscope
//!
//! A block-structure scanner and containment index for indentation-delimited
//! (Python-style) source text. Given a document's lines, pyscope finds the
//! syntactic blocks they form, answers "which block contains line N", and
//! tracks incremental "select enclosing scope" chains.
//!
//! The core is two pure pieces: [`blocks::scanner::parse_blocks`] turns lines
//! into a flat block list, and [`blocks::tree::BlockTree`] indexes that list
//! for point and ancestor queries. [`blocks::session::DocumentSession`] wraps
//! both with explicit per-document caching and invalidation.
//!
//! Anomalous input never fails: unterminated strings, unbalanced brackets,
//! and malformed headers degrade to "no block detected" and queries return
//! `None` for lines outside every block.

pub mod blocks;
