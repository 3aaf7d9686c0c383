//! Loose object storage on disk
//!
//! Each object lives in its own file at `<root>/<hex[0..2]>/<hex[2..]>`.
//! Writes go to a temporary file in the target directory and are renamed into
//! place, so readers never observe a partially written object.

use crate::artifacts::database::ObjectStore;
use crate::artifacts::objects::object_id::ObjectId;
use crate::error::Result;
use bytes::Bytes;
use fake::rand;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

#[derive(Debug, Clone)]
pub struct FileStore {
    path: Box<Path>,
}

impl FileStore {
    /// The root directory is created lazily on the first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStore {
            path: path.into().into_boxed_path(),
        }
    }

    pub fn object_path(&self, oid: &ObjectId) -> PathBuf {
        self.path.join(oid.to_path())
    }

    fn write_object(&self, object_path: &Path, data: &[u8]) -> Result<()> {
        let object_dir = object_path
            .parent()
            .ok_or_else(|| std::io::Error::new(ErrorKind::InvalidInput, "object path has no parent"))?;

        // succeeds when another writer created the directory first
        std::fs::create_dir_all(object_dir)?;

        let temp_object_path = object_dir.join(Self::generate_temp_name());
        if let Err(e) = Self::write_temp_file(&temp_object_path, data) {
            let _ = std::fs::remove_file(&temp_object_path);
            return Err(e.into());
        }

        // rename the temp file to the object file to make it atomic
        let renamed = std::fs::rename(&temp_object_path, object_path);
        Self::settle_rename(renamed, &temp_object_path, object_path)
    }

    /// Resolve the outcome of moving a temp file into place
    ///
    /// A failed rename still succeeds when the object file exists, since a
    /// concurrent writer has stored the same content under the same name.
    fn settle_rename(renamed: std::io::Result<()>, temp_object_path: &Path, object_path: &Path) -> Result<()> {
        let Err(e) = renamed else {
            return Ok(());
        };
        let _ = std::fs::remove_file(temp_object_path);

        if object_path.is_file() {
            warn!(path = %object_path.display(), error = %e, "lost rename race, keeping existing object");
            return Ok(());
        }

        Err(e.into())
    }

    fn write_temp_file(temp_object_path: &Path, data: &[u8]) -> std::io::Result<()> {
        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(temp_object_path)?;

        file.write_all(data)?;
        file.sync_all()
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}", rand::random::<u64>())
    }
}

impl ObjectStore for FileStore {
    fn contains(&self, oid: &ObjectId) -> Result<bool> {
        Ok(self.object_path(oid).try_exists()?)
    }

    fn put(&self, oid: &ObjectId, data: &[u8]) -> Result<()> {
        let object_path = self.object_path(oid);

        if object_path.try_exists()? {
            trace!(%oid, "object already stored");
            return Ok(());
        }

        self.write_object(&object_path, data)?;
        debug!(%oid, path = %object_path.display(), size = data.len(), "wrote loose object");

        Ok(())
    }

    fn get(&self, oid: &ObjectId) -> Result<Option<Bytes>> {
        match std::fs::read(self.object_path(oid)) {
            Ok(data) => Ok(Some(data.into())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
