use assert_fs::TempDir;
use assert_fs::fixture::{FileWriteStr, PathChild, PathCreateDir};
use predicates::prelude::predicate;
use rstest::rstest;

mod common;
use common::repository_dir;

const HELLO_OID: &str = "557db03de997c86a4a028e1ebd3a1ceb225be238";

fn store_hello_blob(dir: &TempDir) -> String {
    dir.child("hello.txt").write_str("Hello World\n").unwrap();
    common::stdout_oid(&mut common::run_bit_command(
        dir.path(),
        &["hash-object", "-w", "hello.txt"],
    ))
}

#[rstest]
fn mktree_writes_a_single_entry_tree(repository_dir: TempDir) {
    let blob_oid = store_hello_blob(&repository_dir);

    let tree_oid = common::stdout_oid(
        common::run_bit_command(repository_dir.path(), &["mktree"])
            .write_stdin(format!("100644 blob {blob_oid}\thello.txt\n")),
    );

    let mut expected = b"tree 37\0100644 hello.txt\0".to_vec();
    expected.extend(hex::decode(HELLO_OID).unwrap());
    assert_eq!(common::read_object(repository_dir.path(), &tree_oid), expected);
}

#[rstest]
fn mktree_sorts_entries_by_name(repository_dir: TempDir) {
    let blob_oid = store_hello_blob(&repository_dir);

    let unsorted = common::stdout_oid(
        common::run_bit_command(repository_dir.path(), &["mktree"]).write_stdin(format!(
            "100644 blob {blob_oid}\tz.txt\n100644 blob {blob_oid}\ta.txt\n"
        )),
    );
    let sorted = common::stdout_oid(
        common::run_bit_command(repository_dir.path(), &["mktree"]).write_stdin(format!(
            "100644 blob {blob_oid}\ta.txt\n100644 blob {blob_oid}\tz.txt\n"
        )),
    );

    assert_eq!(unsorted, sorted);
}

#[rstest]
#[case::path_separator("100644 blob {oid}\tdir/file.txt\n", "path separator")]
#[case::duplicate("100644 blob {oid}\ta\n100755 blob {oid}\ta\n", "duplicate")]
#[case::mode_type_mismatch("40000 blob {oid}\tdir\n", "does not refer to a blob")]
#[case::unknown_mode("100600 blob {oid}\tfile\n", "invalid entry mode")]
#[case::missing_tab("100644 blob {oid} file\n", "missing tab")]
fn mktree_rejects_malformed_listings(
    repository_dir: TempDir,
    #[case] listing: &str,
    #[case] message: &str,
) {
    let blob_oid = store_hello_blob(&repository_dir);
    let objects_before = common::count_objects(repository_dir.path());

    common::run_bit_command(repository_dir.path(), &["mktree"])
        .write_stdin(listing.replace("{oid}", &blob_oid))
        .assert()
        .failure()
        .stderr(predicate::str::contains(message));

    assert_eq!(common::count_objects(repository_dir.path()), objects_before);
}

#[rstest]
fn mktree_requires_referenced_objects_unless_missing_is_allowed(repository_dir: TempDir) {
    let listing = format!("100644 blob {HELLO_OID}\thello.txt\n");

    common::run_bit_command(repository_dir.path(), &["mktree"])
        .write_stdin(listing.clone())
        .assert()
        .failure()
        .stderr(predicate::str::contains("object not found"));

    common::run_bit_command(repository_dir.path(), &["mktree", "--missing"])
        .write_stdin(listing)
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^[0-9a-f]{40}\n$").unwrap());
}

#[rstest]
fn write_tree_matches_mktree_for_the_same_directory(repository_dir: TempDir) {
    let blob_oid = store_hello_blob(&repository_dir);
    let snapshot = repository_dir.child("snapshot");
    snapshot.child("hello.txt").write_str("Hello World\n").unwrap();

    let written = common::stdout_oid(&mut common::run_bit_command(
        repository_dir.path(),
        &["write-tree", "snapshot"],
    ));
    let built = common::stdout_oid(
        common::run_bit_command(repository_dir.path(), &["mktree"])
            .write_stdin(format!("100644 blob {blob_oid}\thello.txt\n")),
    );

    assert_eq!(written, built);
}

#[rstest]
fn write_tree_stores_nested_directories(repository_dir: TempDir) {
    repository_dir.child("1.txt").write_str("one").unwrap();
    repository_dir.child("a/2.txt").write_str("two").unwrap();
    repository_dir.child("a/b/3.txt").write_str("three").unwrap();

    let root_oid = common::stdout_oid(&mut common::run_bit_command(
        repository_dir.path(),
        &["write-tree"],
    ));

    // three blobs, trees for a/b, a and the root
    assert_eq!(common::count_objects(repository_dir.path()), 6);

    let root = common::read_object(repository_dir.path(), &root_oid);
    assert!(root.starts_with(b"tree "));
    assert!(root.windows(b"100644 1.txt\0".len()).any(|w| w == b"100644 1.txt\0"));
    assert!(root.windows(b"40000 a\0".len()).any(|w| w == b"40000 a\0"));
}

#[rstest]
fn write_tree_skips_empty_directories_and_the_git_dir(repository_dir: TempDir) {
    repository_dir.child("file.txt").write_str("content").unwrap();
    repository_dir.child("empty").create_dir_all().unwrap();

    let with_empty = common::stdout_oid(&mut common::run_bit_command(
        repository_dir.path(),
        &["write-tree"],
    ));

    std::fs::remove_dir(repository_dir.child("empty").path()).unwrap();
    let without_empty = common::stdout_oid(&mut common::run_bit_command(
        repository_dir.path(),
        &["write-tree"],
    ));

    // .git/objects exists by now and must not show up in the snapshot
    assert_eq!(with_empty, without_empty);
}

#[rstest]
fn write_tree_of_an_empty_directory_is_the_empty_tree(repository_dir: TempDir) {
    repository_dir.child("nothing").create_dir_all().unwrap();

    common::run_bit_command(repository_dir.path(), &["write-tree", "nothing"])
        .assert()
        .success()
        .stdout("4b825dc642cb6eb9a060e54bf8d69288fbee4904\n");
}
