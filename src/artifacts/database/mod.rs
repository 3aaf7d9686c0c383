//! Storage backends for compressed objects
//!
//! The object pipeline talks to storage only through the [`ObjectStore`]
//! trait, so encoding and hashing never touch the filesystem directly.
//!
//! - `file_store`: loose objects on disk, `<root>/xx/yyyy...`
//! - `memory_store`: in-process map, for tests and embedding

pub mod file_store;
pub mod memory_store;

use crate::artifacts::objects::object_id::ObjectId;
use crate::error::Result;
use bytes::Bytes;

/// Keyed storage of compressed object bytes
///
/// Keys are content digests, so a `put` for a key that is already present
/// always carries identical bytes and must succeed without rewriting.
pub trait ObjectStore: Send + Sync {
    fn contains(&self, oid: &ObjectId) -> Result<bool>;

    fn put(&self, oid: &ObjectId, data: &[u8]) -> Result<()>;

    /// Returns `None` when the object is absent
    fn get(&self, oid: &ObjectId) -> Result<Option<Bytes>>;
}
