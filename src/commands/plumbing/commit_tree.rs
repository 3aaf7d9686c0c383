use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::{Author, Commit};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;

impl Repository {
    /// Record a commit of `tree_oid` on top of an optional parent
    ///
    /// Author and committer come from the `GIT_AUTHOR_*` and `GIT_COMMITTER_*`
    /// environment variables.
    pub fn commit_tree(
        &mut self,
        tree_oid: &str,
        parent: Option<&str>,
        message: &str,
    ) -> anyhow::Result<ObjectId> {
        let tree_oid = ObjectId::try_parse(tree_oid)?;
        let parent = parent.map(ObjectId::try_parse).transpose()?;

        let tree_type = self
            .database()
            .object_type(&tree_oid)
            .with_context(|| format!("Unable to read tree {tree_oid}"))?;
        if tree_type != ObjectType::Tree {
            anyhow::bail!("{tree_oid} is a {tree_type}, not a tree");
        }

        let author = Author::load_author_from_env()?;
        let committer = Author::load_committer_from_env(&author)?;
        let commit = Commit::new(parent, tree_oid, author, committer, message);

        let commit_id = self.database().store_commit(&commit)?;
        writeln!(self.writer(), "{commit_id}")?;

        Ok(commit_id)
    }
}
