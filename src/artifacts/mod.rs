//! Object model and storage primitives
//!
//! - `core`: Digest engine and compressor
//! - `database`: Storage backends for compressed objects
//! - `objects`: Object types (blob, tree, commit) and their encoding

pub mod core;
pub mod database;
pub mod objects;
