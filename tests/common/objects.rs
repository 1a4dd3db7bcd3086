use derive_new::new;
use flate2::Compression;
use flate2::write::ZlibEncoder;
use sha1::{Digest, Sha1};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, new)]
pub struct TreeEntrySpec<'a> {
    pub mode: &'a str,
    pub name: &'a str,
    pub oid: &'a str,
}

pub fn object_path(repository_root: &Path, oid: &str) -> PathBuf {
    let (dir, file) = oid.split_at(2);
    repository_root
        .join(".git")
        .join("objects")
        .join(dir)
        .join(file)
}

pub fn compress(data: &[u8]) -> Vec<u8> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(data)
        .expect("Unable to compress object content");
    encoder
        .finish()
        .expect("Unable to finish compressing object content")
}

/// Write `data` verbatim as the file of object `oid`
pub fn write_object_file(repository_root: &Path, oid: &str, data: &[u8]) {
    let path = object_path(repository_root, oid);
    std::fs::create_dir_all(path.parent().expect("object path has a parent"))
        .unwrap_or_else(|e| panic!("Failed to create object directory for {}: {}", oid, e));
    std::fs::write(&path, data)
        .unwrap_or_else(|e| panic!("Failed to write object {}: {}", oid, e));
}

/// Hash and store a complete object (`<kind> <length>\0<body>`), returning its id
pub fn write_raw_object(repository_root: &Path, content: &[u8]) -> String {
    let oid = format!("{:x}", Sha1::digest(content));
    write_object_file(repository_root, &oid, &compress(content));
    oid
}

pub fn write_object(repository_root: &Path, kind: &str, body: &[u8]) -> String {
    let mut content = format!("{} {}\0", kind, body.len()).into_bytes();
    content.extend_from_slice(body);
    write_raw_object(repository_root, &content)
}

pub fn write_blob(repository_root: &Path, content: &[u8]) -> String {
    write_object(repository_root, "blob", content)
}

pub fn tree_body(entries: &[TreeEntrySpec<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for entry in entries {
        body.extend_from_slice(entry.mode.as_bytes());
        body.push(b' ');
        body.extend_from_slice(entry.name.as_bytes());
        body.push(0);
        body.extend_from_slice(&hex::decode(entry.oid).expect("entry oid is hex"));
    }
    body
}

pub fn write_tree(repository_root: &Path, entries: &[TreeEntrySpec<'_>]) -> String {
    write_object(repository_root, "tree", &tree_body(entries))
}

pub fn commit_body(tree: &str, parents: &[&str], message: &str) -> String {
    let mut body = format!("tree {}\n", tree);
    for parent in parents {
        body.push_str(&format!("parent {}\n", parent));
    }
    body.push_str("author A U Thor <author@example.com> 1700000000 +0100\n");
    body.push_str("committer C O Mitter <committer@example.com> 1700000000 +0100\n");
    body.push('\n');
    body.push_str(message);
    body
}

pub fn write_commit(repository_root: &Path, tree: &str, parents: &[&str], message: &str) -> String {
    write_object(
        repository_root,
        "commit",
        commit_body(tree, parents, message).as_bytes(),
    )
}

/// An object id that is guaranteed not to be stored in the repository
pub fn absent_oid(seed: &str) -> String {
    format!("{:x}", Sha1::digest(format!("absent {}", seed)))
}
