//! Plumbing commands (low-level object construction)
//!
//! ## Commands
//!
//! - `hash-object`: Compute a blob ID and optionally store the blob
//! - `mktree`: Build a tree from a textual listing
//! - `write-tree`: Snapshot a directory into blobs and trees
//! - `commit-tree`: Record a commit pointing at a tree

pub mod commit_tree;
pub mod hash_object;
pub mod mktree;
pub mod write_tree;
