use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;
use std::path::Path;

impl Repository {
    pub fn hash_object(&mut self, object_path: &Path, write: bool) -> anyhow::Result<ObjectId> {
        let blob = self.workspace().parse_blob(object_path)?;

        let object_id = if write {
            self.database().store(&blob)?
        } else {
            self.database().hash(&blob)?
        };

        writeln!(self.writer(), "{object_id}")?;

        Ok(object_id)
    }
}
