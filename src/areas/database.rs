use crate::artifacts::core::compression::{compress, decompress};
use crate::artifacts::core::digest::digest;
use crate::artifacts::database::ObjectStore;
use crate::artifacts::database::file_store::FileStore;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::error::{ObjectError, Result};
use bytes::Bytes;
use std::path::Path;
use tracing::debug;

/// Object database: encode, hash, compress and persist objects
///
/// Generic over the storage backend so the pipeline can run against disk or
/// memory alike.
#[derive(Debug)]
pub struct Database<S: ObjectStore = FileStore> {
    store: S,
    verify_parents: bool,
}

impl Database<FileStore> {
    pub fn open(objects_path: impl AsRef<Path>) -> Self {
        Database::with_store(FileStore::new(objects_path.as_ref()))
    }
}

impl<S: ObjectStore> Database<S> {
    pub fn with_store(store: S) -> Self {
        Database {
            store,
            verify_parents: false,
        }
    }

    /// Require commit parents to be stored commits before a commit is written
    pub fn verify_parents(mut self, enabled: bool) -> Self {
        self.verify_parents = enabled;
        self
    }

    pub fn store_backend(&self) -> &S {
        &self.store
    }

    /// Digest of an object without writing it
    pub fn hash(&self, object: &impl Object) -> Result<ObjectId> {
        object.object_id()
    }

    /// Persist an object and return its id
    ///
    /// Storing an object that is already present is a successful no-op.
    pub fn store(&self, object: &impl Object) -> Result<ObjectId> {
        let object_content = object.serialize()?;
        let object_id = digest(&object_content);

        if self.store.contains(&object_id)? {
            debug!(oid = %object_id, kind = %object.object_type(), "object already present");
            return Ok(object_id);
        }

        let compressed = compress(&object_content)?;
        debug!(
            oid = %object_id,
            kind = %object.object_type(),
            size = object_content.len(),
            compressed = compressed.len(),
            "storing object"
        );
        self.store.put(&object_id, &compressed)?;

        Ok(object_id)
    }

    /// Persist a commit, checking its parent first when verification is on
    pub fn store_commit(&self, commit: &Commit) -> Result<ObjectId> {
        if self.verify_parents
            && let Some(parent) = commit.parent()
        {
            match self.object_type(parent) {
                Ok(ObjectType::Commit) => {}
                Ok(_) | Err(ObjectError::ObjectNotFound(_)) => {
                    return Err(ObjectError::DanglingParent(parent.clone()));
                }
                Err(e) => return Err(e),
            }
        }

        self.store(commit)
    }

    pub fn contains(&self, object_id: &ObjectId) -> Result<bool> {
        self.store.contains(object_id)
    }

    /// Read back an object as its type and payload
    ///
    /// The stored bytes are checked against their header; a length mismatch
    /// or undecodable data is reported as a corrupt object.
    pub fn load(&self, object_id: &ObjectId) -> Result<(ObjectType, Bytes)> {
        let compressed = self
            .store
            .get(object_id)?
            .ok_or_else(|| ObjectError::ObjectNotFound(object_id.clone()))?;

        let object_content = decompress(&compressed)?;
        let (object_type, payload) = ObjectType::parse_header(&object_content)?;
        let payload = object_content.slice_ref(payload);

        Ok((object_type, payload))
    }

    pub fn object_type(&self, object_id: &ObjectId) -> Result<ObjectType> {
        Ok(self.load(object_id)?.0)
    }
}
