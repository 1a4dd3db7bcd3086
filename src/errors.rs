//! Error type shared by every layer of the object reader
//!
//! Parsing fails fast: each layer returns the first error it meets and callers
//! propagate it with `?`. There is no partial-result mode, a tree either parses
//! completely or the caller gets an error.

use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GitError>;

#[derive(Debug, Error)]
pub enum GitError {
    #[error("could not locate git repository for path {}", .0.display())]
    RepositoryNotFound(PathBuf),
    #[error("object not found: {0}")]
    ObjectNotFound(ObjectId),
    #[error("invalid object id: {0:?}")]
    InvalidObjectId(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("corrupt object {oid}: {reason}")]
    CorruptObject { oid: ObjectId, reason: String },
    #[error("malformed object {oid}: {reason}")]
    MalformedHeader { oid: ObjectId, reason: String },
    #[error("expected {expected} for object {oid}, got {found}")]
    WrongObjectKind {
        oid: ObjectId,
        expected: ObjectType,
        found: ObjectType,
    },
    #[error("entry not found: {0}")]
    EntryNotFound(String),
}

impl GitError {
    pub fn corrupt(oid: &ObjectId, reason: impl Into<String>) -> Self {
        GitError::CorruptObject {
            oid: oid.clone(),
            reason: reason.into(),
        }
    }

    pub fn malformed(oid: &ObjectId, reason: impl Into<String>) -> Self {
        GitError::MalformedHeader {
            oid: oid.clone(),
            reason: reason.into(),
        }
    }

    /// Classify an error raised while reading a decompressed object stream.
    ///
    /// The inflate decoder reports bad deflate data as `InvalidInput` or
    /// `InvalidData`, and the body reader reports truncation as `UnexpectedEof`.
    /// All of these mean the object itself is damaged. Anything else is a
    /// plain filesystem failure.
    pub fn from_stream(oid: &ObjectId, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::InvalidInput
            | io::ErrorKind::InvalidData
            | io::ErrorKind::UnexpectedEof => GitError::corrupt(oid, err.to_string()),
            _ => GitError::Io(err),
        }
    }
}
