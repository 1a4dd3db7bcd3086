use crate::areas::database::Database;
use crate::artifacts::objects::entry::Entry;
use crate::artifacts::objects::entry_mode::EntryMode;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::{GitError, Result};
use bstr::BString;
use derive_new::new;

/// Listing information for one path of a snapshot
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct DirEntry {
    pub name: BString,
    pub mode: EntryMode,
    pub oid: ObjectId,
    /// Content length for files whose blob is present as a loose object
    pub size: Option<u64>,
}

impl DirEntry {
    /// Describe a tree entry, reading the blob header to learn its size.
    ///
    /// Entries whose object is not stored as a loose object (for example
    /// because it only exists in a pack) are still described, without a size.
    pub fn describe(database: &Database, entry: &Entry) -> Result<Self> {
        let size = match entry.mode.object_type() {
            ObjectType::Blob => match database.read_header(&entry.oid) {
                Ok(header) if header.object_type == ObjectType::Blob => Some(header.length),
                Ok(header) => {
                    return Err(GitError::WrongObjectKind {
                        oid: entry.oid.clone(),
                        expected: ObjectType::Blob,
                        found: header.object_type,
                    });
                }
                Err(GitError::ObjectNotFound(oid)) => {
                    tracing::warn!(name = %entry.name, %oid, "object is not stored loose, size unknown");
                    None
                }
                Err(e) => return Err(e),
            },
            ObjectType::Tree | ObjectType::Commit => None,
        };

        Ok(DirEntry::new(entry.name.clone(), entry.mode, entry.oid.clone(), size))
    }

    pub fn is_dir(&self) -> bool {
        self.mode.is_tree()
    }
}
