use crate::areas::database::Database;
use crate::areas::workspace::Workspace;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::{Path, PathBuf};

/// Environment variable overriding the object directory
pub const OBJECT_DIRECTORY_ENV: &str = "GIT_OBJECT_DIRECTORY";

pub struct Repository {
    writer: RefCell<Box<dyn std::io::Write>>,
    database: Database,
    workspace: Workspace,
}

impl Repository {
    /// Open the repository rooted at `path`
    ///
    /// Objects go to `$GIT_OBJECT_DIRECTORY` when set, otherwise to
    /// `<path>/.git/objects`. Missing directories are created on first write.
    pub fn new(path: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = path
            .canonicalize()
            .with_context(|| format!("Unable to open repository at {}", path.display()))?;

        let objects_path = match std::env::var_os(OBJECT_DIRECTORY_ENV) {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => path.join(".git").join("objects"),
        };

        let database = Database::open(objects_path).verify_parents(true);
        let workspace = Workspace::new(path.into_boxed_path());

        Ok(Repository {
            writer: RefCell::new(writer),
            database,
            workspace,
        })
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }
}
