//! Git tree object
//!
//! Trees represent directory snapshots in Git. They contain entries for files (blobs)
//! and subdirectories (other trees), along with their names and modes.
//!
//! ## Format
//!
//! On disk: `tree <size>\0<entries>`
//! Each entry: `<mode> <name>\0<20-byte-sha1>`
//!
//! Entries are kept in on-disk order, which is the order git writes them in.
//! Children are never loaded eagerly: [`Tree::blob`] and [`Tree::tree`] go
//! back to the object database on every call.

use crate::areas::repository::Repository;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::entry::Entry;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree_scanner::TreeScanner;
use crate::errors::{GitError, Result};
use std::io::{self, Read};

/// Size of the chunks fed to the tree scanner
const READ_CHUNK_SIZE: usize = 8 * 1024;

/// Git tree object
///
/// # Lifetime
///
/// `'r` is the repository the tree was read from; it must outlive the tree so
/// that children can be resolved later.
#[derive(Debug, Clone)]
pub struct Tree<'r> {
    repository: &'r Repository,
    oid: ObjectId,
    entries: Vec<Entry>,
}

impl<'r> Tree<'r> {
    /// Load and parse a tree object
    pub fn read(repository: &'r Repository, oid: &ObjectId) -> Result<Self> {
        let (_, reader) = repository
            .database()
            .read_object_as(oid, ObjectType::Tree)?;

        Self::parse(repository, oid.clone(), reader)
    }

    /// Parse a tree body whose header has already been consumed
    pub fn parse(repository: &'r Repository, oid: ObjectId, mut reader: impl Read) -> Result<Self> {
        let mut scanner = TreeScanner::new();
        let mut entries = Vec::new();
        let mut chunk = [0u8; READ_CHUNK_SIZE];

        loop {
            let n = match reader.read(&mut chunk) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(GitError::from_stream(&oid, e)),
            };

            scanner.feed(&chunk[..n]);
            while let Some(record) = scanner.next_record() {
                let entry = Entry::decode(&oid, &record)?;
                tracing::trace!(tree = %oid, name = %entry.name, mode = entry.mode.as_str(), "tree entry");
                entries.push(entry);
            }
        }

        scanner
            .finish()
            .map_err(|e| GitError::malformed(&oid, e.to_string()))?;

        tracing::debug!(tree = %oid, entries = entries.len(), "parsed tree");

        Ok(Tree {
            repository,
            oid,
            entries,
        })
    }

    pub fn oid(&self) -> &ObjectId {
        &self.oid
    }

    pub fn repository(&self) -> &'r Repository {
        self.repository
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry with exactly this name, in on-disk order
    pub fn entry(&self, name: impl AsRef<[u8]>) -> Option<&Entry> {
        let name = name.as_ref();
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// Open the blob stored under `name`
    pub fn blob(&self, name: impl AsRef<[u8]>) -> Result<Blob> {
        let entry = self.find(name.as_ref())?;
        Blob::read(self.repository.database(), &entry.oid)
    }

    /// Load the subtree stored under `name`
    pub fn tree(&self, name: impl AsRef<[u8]>) -> Result<Tree<'r>> {
        let entry = self.find(name.as_ref())?;
        Tree::read(self.repository, &entry.oid)
    }

    fn find(&self, name: &[u8]) -> Result<&Entry> {
        self.entry(name)
            .ok_or_else(|| GitError::EntryNotFound(String::from_utf8_lossy(name).into_owned()))
    }
}
