#![allow(dead_code)]

use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::io::Read;
use std::path::Path;

pub const AUTHOR_NAME: &str = "John Doe";
pub const AUTHOR_EMAIL: &str = "jd@someplace.com";
pub const AUTHOR_DATE: &str = "2023-01-01 12:00:00 +0000";

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

pub fn run_bit_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("bit-store").expect("Failed to find bit-store binary");
    cmd.env_remove("GIT_OBJECT_DIRECTORY");
    cmd.env_remove("GIT_COMMITTER_NAME");
    cmd.env_remove("GIT_COMMITTER_EMAIL");
    cmd.env_remove("GIT_COMMITTER_DATE");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn bit_commit_tree(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = run_bit_command(dir, &["commit-tree"]);
    cmd.args(args);
    cmd.envs(vec![
        ("GIT_AUTHOR_NAME", AUTHOR_NAME),
        ("GIT_AUTHOR_EMAIL", AUTHOR_EMAIL),
        ("GIT_AUTHOR_DATE", AUTHOR_DATE), // %Y-%m-%d %H:%M:%S %z
    ]);
    cmd
}

/// Run a command and return the single object ID it prints
pub fn stdout_oid(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output)
        .expect("stdout is not UTF-8")
        .trim()
        .to_string()
}

pub fn object_path(dir: &Path, oid: &str) -> std::path::PathBuf {
    dir.join(".git").join("objects").join(&oid[..2]).join(&oid[2..])
}

/// Decompressed `<kind> <len>\0<payload>` bytes of a stored object
pub fn read_object(dir: &Path, oid: &str) -> Vec<u8> {
    let compressed = std::fs::read(object_path(dir, oid))
        .unwrap_or_else(|e| panic!("Failed to read object {oid}: {e}"));

    let mut decoder = flate2::read::ZlibDecoder::new(compressed.as_slice());
    let mut content = Vec::new();
    decoder
        .read_to_end(&mut content)
        .unwrap_or_else(|e| panic!("Failed to decompress object {oid}: {e}"));
    content
}

pub fn count_objects(dir: &Path) -> usize {
    walkdir::WalkDir::new(dir.join(".git").join("objects"))
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .count()
}
