use crate::artifacts::objects::entry_mode::EntryMode;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree_scanner::TreeRecord;
use crate::errors::{GitError, Result};
use bstr::{BStr, BString, ByteSlice};
use derive_new::new;

/// One child of a tree object
///
/// The name is kept as raw bytes: git does not require tree entry names to
/// be valid UTF-8.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Entry {
    pub name: BString,
    pub mode: EntryMode,
    pub oid: ObjectId,
}

impl Entry {
    /// Decode a `<mode> <name>` record head and its raw id.
    ///
    /// `tree_oid` is the tree being parsed, for error context.
    pub fn decode(tree_oid: &ObjectId, record: &TreeRecord) -> Result<Self> {
        let (mode, name) = record.head.split_once_str(" ").ok_or_else(|| {
            GitError::malformed(
                tree_oid,
                format!(
                    "tree entry {:?} is not \"<mode> <name>\"",
                    BStr::new(&record.head)
                ),
            )
        })?;

        let mode = EntryMode::from_octal_str(mode).ok_or_else(|| {
            GitError::malformed(
                tree_oid,
                format!("invalid mode {:?} in tree entry", BStr::new(mode)),
            )
        })?;

        if name.is_empty() {
            return Err(GitError::malformed(tree_oid, "tree entry with an empty name"));
        }

        Ok(Entry::new(
            BString::from(name),
            mode,
            ObjectId::from_raw(&record.raw_oid),
        ))
    }

    pub fn name(&self) -> &BStr {
        self.name.as_bstr()
    }

    pub fn is_tree(&self) -> bool {
        self.mode.is_tree()
    }
}
