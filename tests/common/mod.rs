#![allow(dead_code)]

pub mod command;
pub mod objects;

use assert_fs::TempDir;
use objects::{TreeEntrySpec, write_blob, write_commit, write_tree};
use rstest::fixture;

pub const REGULAR: &str = "100644";
pub const EXECUTABLE: &str = "100755";
pub const SYMLINK: &str = "120000";
pub const DIRECTORY: &str = "40000";

/// Object ids of the sample repository built by [`sample_repository`]
///
/// ```text
/// hello.txt      "world"
/// run.sh         executable
/// link           symlink to hello.txt
/// sub/
///   nested.txt   "nested content\n"
///   deeper/
///     leaf.txt   "leaf"
/// ```
pub struct SampleRepository {
    pub dir: TempDir,
    pub commit: String,
    pub root_tree: String,
    pub hello_blob: String,
    pub sub_tree: String,
    pub deeper_tree: String,
    pub nested_blob: String,
}

#[fixture]
pub fn repository_dir() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    std::fs::create_dir_all(dir.path().join(".git").join("objects"))
        .expect("Failed to create objects dir");
    dir
}

#[fixture]
pub fn sample_repository(repository_dir: TempDir) -> SampleRepository {
    let root = repository_dir.path();

    let hello_blob = write_blob(root, b"world");
    let script_blob = write_blob(root, b"#!/bin/sh\necho hi\n");
    let link_blob = write_blob(root, b"hello.txt");
    let nested_blob = write_blob(root, b"nested content\n");
    let leaf_blob = write_blob(root, b"leaf");

    let deeper_tree = write_tree(
        root,
        &[TreeEntrySpec::new(REGULAR, "leaf.txt", &leaf_blob)],
    );
    let sub_tree = write_tree(
        root,
        &[
            TreeEntrySpec::new(DIRECTORY, "deeper", &deeper_tree),
            TreeEntrySpec::new(REGULAR, "nested.txt", &nested_blob),
        ],
    );
    let root_tree = write_tree(
        root,
        &[
            TreeEntrySpec::new(REGULAR, "hello.txt", &hello_blob),
            TreeEntrySpec::new(SYMLINK, "link", &link_blob),
            TreeEntrySpec::new(EXECUTABLE, "run.sh", &script_blob),
            TreeEntrySpec::new(DIRECTORY, "sub", &sub_tree),
        ],
    );
    let commit = write_commit(root, &root_tree, &[], "Initial commit\n");

    SampleRepository {
        dir: repository_dir,
        commit,
        root_tree,
        hello_blob,
        sub_tree,
        deeper_tree,
        nested_blob,
    }
}
