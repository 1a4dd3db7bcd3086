//! Git commit object
//!
//! Only the root tree is kept; it is all that is needed to walk the snapshot.
//!
//! ## Format
//!
//! On disk:
//! ```text
//! commit <size>\0
//! tree <tree-sha>
//! parent <parent-sha>
//! author <name> <email> <timestamp> <timezone>
//! committer <name> <email> <timestamp> <timezone>
//!
//! <commit message>
//! ```

use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::Tree;
use crate::errors::{GitError, Result};
use bstr::ByteSlice;
use std::io::{BufRead, BufReader, Read};

#[derive(Debug, Clone)]
pub struct Commit<'r> {
    repository: &'r Repository,
    oid: ObjectId,
    tree: ObjectId,
}

impl<'r> Commit<'r> {
    /// Load and parse a commit object
    pub fn read(repository: &'r Repository, oid: &ObjectId) -> Result<Self> {
        let (_, reader) = repository
            .database()
            .read_object_as(oid, ObjectType::Commit)?;

        Self::parse(repository, oid.clone(), reader)
    }

    /// Parse a commit body whose header has already been consumed
    ///
    /// Header lines are `<field> <value>`. Lines without a space are skipped,
    /// and the `tree` field is only honoured before the blank line that starts
    /// the message. The rest of the body is still read to its end.
    pub fn parse(repository: &'r Repository, oid: ObjectId, reader: impl Read) -> Result<Self> {
        let mut reader = BufReader::new(reader);
        let mut line = Vec::new();
        let mut in_headers = true;
        let mut tree = None;

        loop {
            line.clear();
            let n = reader
                .read_until(b'\n', &mut line)
                .map_err(|e| GitError::from_stream(&oid, e))?;
            if n == 0 {
                break;
            }
            if !in_headers {
                continue;
            }

            let text = line.strip_suffix(b"\n").unwrap_or(&line);
            if text.is_empty() {
                in_headers = false;
                continue;
            }

            let Some((field, value)) = text.split_once_str(" ") else {
                continue;
            };
            if field == b"tree" && tree.is_none() {
                let value = value.trim().to_str().map_err(|_| {
                    GitError::malformed(&oid, "commit tree id is not valid UTF-8")
                })?;
                let tree_oid = ObjectId::try_parse(value).map_err(|_| {
                    GitError::malformed(&oid, format!("invalid tree id {value:?} in commit"))
                })?;
                tree = Some(tree_oid);
            }
        }

        let tree = tree.ok_or_else(|| GitError::malformed(&oid, "commit has no tree line"))?;
        tracing::debug!(commit = %oid, tree = %tree, "parsed commit");

        Ok(Commit {
            repository,
            oid,
            tree,
        })
    }

    pub fn oid(&self) -> &ObjectId {
        &self.oid
    }

    pub fn tree_oid(&self) -> &ObjectId {
        &self.tree
    }

    /// Load the root tree. Parsed again on every call.
    pub fn tree(&self) -> Result<Tree<'r>> {
        Tree::read(self.repository, &self.tree)
    }
}

impl std::fmt::Display for Commit<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.oid)
    }
}
