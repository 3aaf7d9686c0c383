//! Leaf building blocks of the object pipeline
//!
//! - `digest`: SHA-1 digest engine
//! - `compression`: zlib compressor

pub mod compression;
pub mod digest;
