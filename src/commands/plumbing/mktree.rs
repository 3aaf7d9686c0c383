use crate::areas::repository::Repository;
use crate::artifacts::objects::entry_mode::EntryMode;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::{Tree, TreeEntry};
use anyhow::Context;
use std::io::BufRead;

impl Repository {
    /// Build a tree from `ls-tree` formatted lines
    ///
    /// Each line reads `<mode> SP <type> SP <oid> TAB <name>`. Unless
    /// `allow_missing` is set, every referenced object must already be stored
    /// with the type the line declares.
    pub fn mktree(&mut self, input: impl BufRead, allow_missing: bool) -> anyhow::Result<ObjectId> {
        let mut tree = Tree::default();

        for (line_number, line) in input.lines().enumerate() {
            let line = line.context("Unable to read tree listing")?;
            if line.is_empty() {
                continue;
            }

            let entry = self
                .parse_listing_line(&line, allow_missing)
                .with_context(|| format!("Invalid tree listing on line {}: {line:?}", line_number + 1))?;
            tree.add_entry(entry)?;
        }

        let tree_id = self.database().store(&tree)?;
        writeln!(self.writer(), "{tree_id}")?;

        Ok(tree_id)
    }

    fn parse_listing_line(&self, line: &str, allow_missing: bool) -> anyhow::Result<TreeEntry> {
        let (meta, name) = line.split_once('\t').context("missing tab before entry name")?;

        let mut fields = meta.split(' ');
        let (Some(mode), Some(kind), Some(oid), None) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            anyhow::bail!("expected \"<mode> <type> <oid>\"");
        };

        let mode = EntryMode::try_from(mode)?;
        let kind = ObjectType::try_from(kind)?;
        let oid = ObjectId::try_parse(oid)?;

        if mode.object_type() != kind {
            anyhow::bail!("mode {mode} does not refer to a {kind}");
        }

        // gitlinks point into another repository
        if !allow_missing && mode != EntryMode::Gitlink {
            let stored_type = self
                .database()
                .object_type(&oid)
                .with_context(|| format!("entry {name:?} references {oid}"))?;
            if stored_type != kind {
                anyhow::bail!("entry {name:?} references {oid}, which is a {stored_type}, not a {kind}");
            }
        }

        Ok(TreeEntry::new(mode, name, oid)?)
    }
}
