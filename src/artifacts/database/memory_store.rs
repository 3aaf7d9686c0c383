//! In-memory object storage

use crate::artifacts::database::ObjectStore;
use crate::artifacts::objects::object_id::ObjectId;
use crate::error::Result;
use bytes::Bytes;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::trace;

/// Object store backed by a `RwLock<HashMap>`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    objects: RwLock<HashMap<ObjectId, Bytes>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.objects.read().len()
    }

    /// Overwrite stored bytes, bypassing content addressing
    #[cfg(test)]
    pub(crate) fn tamper(&self, oid: &ObjectId, data: &[u8]) {
        self.objects
            .write()
            .insert(oid.clone(), Bytes::copy_from_slice(data));
    }
}

impl ObjectStore for MemoryStore {
    fn contains(&self, oid: &ObjectId) -> Result<bool> {
        Ok(self.objects.read().contains_key(oid))
    }

    fn put(&self, oid: &ObjectId, data: &[u8]) -> Result<()> {
        self.objects
            .write()
            .entry(oid.clone())
            .or_insert_with(|| {
                trace!(%oid, size = data.len(), "stored object in memory");
                Bytes::copy_from_slice(data)
            });

        Ok(())
    }

    fn get(&self, oid: &ObjectId) -> Result<Option<Bytes>> {
        Ok(self.objects.read().get(oid).cloned())
    }
}
