use crate::areas::repository::Repository;
use crate::areas::workspace::WorkspaceEntry;
use crate::artifacts::objects::entry_mode::EntryMode;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::{Tree, TreeEntry};
use anyhow::Context;
use std::path::Path;
use tracing::debug;

impl Repository {
    /// Store a directory and everything below it, returning the root tree ID
    ///
    /// Children are written before their parent so every tree only references
    /// objects that already exist. Empty subdirectories are left out.
    pub fn write_tree(&mut self, dir_path: Option<&Path>) -> anyhow::Result<ObjectId> {
        let dir_path = dir_path.unwrap_or(Path::new(""));

        let tree = self.build_tree(dir_path)?.unwrap_or_default();
        let tree_id = self.database().store(&tree)?;
        writeln!(self.writer(), "{tree_id}")?;

        Ok(tree_id)
    }

    fn build_tree(&self, dir_path: &Path) -> anyhow::Result<Option<Tree>> {
        let mut tree = Tree::default();

        for entry in self.workspace().list_dir(dir_path)? {
            let name = entry
                .path()
                .file_name()
                .and_then(|name| name.to_str())
                .with_context(|| format!("File name is not valid UTF-8: {:?}", entry.path()))?
                .to_string();

            match entry {
                WorkspaceEntry::File { path, mode } => {
                    let blob = self.workspace().read_entry(&path, mode)?;
                    let blob_id = self.database().store(&blob)?;
                    tree.add_entry(TreeEntry::new(mode.into(), name, blob_id)?)?;
                }
                WorkspaceEntry::Directory { path } => {
                    if let Some(sub_tree) = self.build_tree(&path)? {
                        let sub_tree_id = self.database().store(&sub_tree)?;
                        tree.add_entry(TreeEntry::new(EntryMode::Directory, name, sub_tree_id)?)?;
                    } else {
                        debug!(path = %path.display(), "skipping empty directory");
                    }
                }
            }
        }

        Ok((!tree.is_empty()).then_some(tree))
    }
}
