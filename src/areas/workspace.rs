use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::entry_mode::FileMode;
use anyhow::Context;
use derive_new::new;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const IGNORED_PATHS: [&str; 1] = [".git"];

/// A child of a workspace directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkspaceEntry {
    File { path: PathBuf, mode: FileMode },
    Directory { path: PathBuf },
}

impl WorkspaceEntry {
    pub fn path(&self) -> &Path {
        match self {
            WorkspaceEntry::File { path, .. } | WorkspaceEntry::Directory { path } => path,
        }
    }
}

#[derive(Debug, new)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn parse_blob(&self, file_path: &Path) -> anyhow::Result<Blob> {
        Ok(Blob::new(self.read_file(file_path)?))
    }

    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<Vec<u8>> {
        let file_path = self.path.join(file_path);

        std::fs::read(&file_path).with_context(|| format!("Unable to read file {}", file_path.display()))
    }

    /// Immediate children of a directory, sorted by file name
    ///
    /// Paths are relative to the workspace root. The `.git` directory is
    /// skipped, and symlinks are reported as files carrying the symlink mode.
    pub fn list_dir(&self, dir_path: &Path) -> anyhow::Result<Vec<WorkspaceEntry>> {
        let absolute = self.path.join(dir_path);
        if !absolute.is_dir() {
            anyhow::bail!("The specified path is not a directory: {:?}", absolute);
        }

        WalkDir::new(&absolute)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !Self::is_ignored(entry.file_name().to_string_lossy().as_ref()))
            .map(|entry| {
                let entry = entry.with_context(|| format!("Unable to list {}", absolute.display()))?;
                let relative = dir_path.join(entry.file_name());
                let file_type = entry.file_type();

                let workspace_entry = if file_type.is_symlink() {
                    WorkspaceEntry::File {
                        path: relative,
                        mode: FileMode::Symlink,
                    }
                } else if file_type.is_dir() {
                    WorkspaceEntry::Directory { path: relative }
                } else {
                    let mode = if is_executable::is_executable(entry.path()) {
                        FileMode::Executable
                    } else {
                        FileMode::Regular
                    };
                    WorkspaceEntry::File { path: relative, mode }
                };

                Ok(workspace_entry)
            })
            .collect()
    }

    /// Content stored for a file entry: file bytes, or the link target for symlinks
    pub fn read_entry(&self, file_path: &Path, mode: FileMode) -> anyhow::Result<Blob> {
        match mode {
            FileMode::Symlink => {
                let target = std::fs::read_link(self.path.join(file_path))
                    .with_context(|| format!("Unable to read link {}", file_path.display()))?;
                Ok(Blob::new(Self::link_target_bytes(target)))
            }
            FileMode::Regular | FileMode::Executable => self.parse_blob(file_path),
        }
    }

    #[cfg(unix)]
    fn link_target_bytes(target: PathBuf) -> Vec<u8> {
        use std::os::unix::ffi::OsStringExt;

        target.into_os_string().into_vec()
    }

    #[cfg(not(unix))]
    fn link_target_bytes(target: PathBuf) -> Vec<u8> {
        target.to_string_lossy().into_owned().into_bytes()
    }

    fn is_ignored(name: &str) -> bool {
        IGNORED_PATHS.contains(&name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::TempDir;
    use assert_fs::prelude::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn list_dir_is_sorted_and_skips_git_dir() {
        let dir = TempDir::new().unwrap();
        dir.child("b.txt").write_str("b").unwrap();
        dir.child("a.txt").write_str("a").unwrap();
        dir.child("nested/c.txt").write_str("c").unwrap();
        dir.child(".git/objects").create_dir_all().unwrap();
        let workspace = Workspace::new(dir.path().into());

        let entries = workspace.list_dir(Path::new("")).unwrap();

        assert_eq!(
            entries,
            vec![
                WorkspaceEntry::File {
                    path: PathBuf::from("a.txt"),
                    mode: FileMode::Regular
                },
                WorkspaceEntry::File {
                    path: PathBuf::from("b.txt"),
                    mode: FileMode::Regular
                },
                WorkspaceEntry::Directory {
                    path: PathBuf::from("nested")
                },
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn executable_bit_is_detected() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let script = dir.child("run.sh");
        script.write_str("#!/bin/sh\n").unwrap();
        std::fs::set_permissions(script.path(), std::fs::Permissions::from_mode(0o755)).unwrap();
        let workspace = Workspace::new(dir.path().into());

        let entries = workspace.list_dir(Path::new("")).unwrap();

        assert_eq!(
            entries,
            vec![WorkspaceEntry::File {
                path: PathBuf::from("run.sh"),
                mode: FileMode::Executable
            }]
        );
    }

    #[cfg(unix)]
    #[test]
    fn symlink_target_is_stored_as_raw_bytes() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = TempDir::new().unwrap();
        let target = OsStr::from_bytes(b"target-\xff\xfe");
        std::os::unix::fs::symlink(target, dir.path().join("link")).unwrap();
        let workspace = Workspace::new(dir.path().into());

        let entries = workspace.list_dir(Path::new("")).unwrap();
        let blob = workspace.read_entry(Path::new("link"), FileMode::Symlink).unwrap();

        assert_eq!(
            entries,
            vec![WorkspaceEntry::File {
                path: PathBuf::from("link"),
                mode: FileMode::Symlink
            }]
        );
        assert_eq!(blob.content(), b"target-\xff\xfe");
    }

    #[test]
    fn file_content_is_read_as_raw_bytes() {
        let dir = TempDir::new().unwrap();
        dir.child("data.bin").write_binary(&[0, 1, 2, 255]).unwrap();
        let workspace = Workspace::new(dir.path().into());

        let blob = workspace.parse_blob(Path::new("data.bin")).unwrap();

        assert_eq!(blob.content(), &[0, 1, 2, 255]);
    }
}
