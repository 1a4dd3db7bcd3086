//! Object header: `<kind> <length>\0`
//!
//! The header is the only place where the object kind appears as text. It is
//! turned into [`ObjectType`] here and nowhere else, so unknown kinds are
//! rejected at a single point.

use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{GitError, Result};
use std::io::Read;

/// Longest header accepted before the terminating NUL.
///
/// `commit` plus a space plus the 20 digits of `u64::MAX` is 27 bytes.
pub const MAX_HEADER_LENGTH: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectType {
    Blob,
    Tree,
    Commit,
}

impl ObjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectType::Blob => "blob",
            ObjectType::Tree => "tree",
            ObjectType::Commit => "commit",
        }
    }
}

impl TryFrom<&[u8]> for ObjectType {
    type Error = ();

    fn try_from(value: &[u8]) -> std::result::Result<Self, ()> {
        match value {
            b"blob" => Ok(ObjectType::Blob),
            b"tree" => Ok(ObjectType::Tree),
            b"commit" => Ok(ObjectType::Commit),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Declared kind and body length of an object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectHeader {
    pub object_type: ObjectType,
    pub length: u64,
}

impl ObjectHeader {
    /// Consume the header from a decompressed object stream.
    ///
    /// Reads one byte at a time so that the reader is left exactly on the
    /// first body byte. `oid` is only used for error context.
    pub fn read_from(oid: &ObjectId, reader: &mut impl Read) -> Result<Self> {
        let mut header = Vec::with_capacity(MAX_HEADER_LENGTH);
        let mut byte = [0u8; 1];

        loop {
            let n = reader
                .read(&mut byte)
                .map_err(|e| GitError::from_stream(oid, e))?;
            if n == 0 {
                return Err(GitError::malformed(oid, "unexpected end of object header"));
            }
            if byte[0] == b'\0' {
                break;
            }
            if header.len() == MAX_HEADER_LENGTH {
                return Err(GitError::malformed(oid, "object header is too long"));
            }
            header.push(byte[0]);
        }

        Self::parse(oid, &header)
    }

    /// Parse the header text without its NUL terminator.
    pub fn parse(oid: &ObjectId, header: &[u8]) -> Result<Self> {
        let mut fields = header.split(|&b| b == b' ');
        let (Some(kind), Some(length), None) = (fields.next(), fields.next(), fields.next()) else {
            return Err(GitError::malformed(
                oid,
                format!("expected \"<kind> <length>\", got {:?}", bstr::BStr::new(header)),
            ));
        };

        let object_type = ObjectType::try_from(kind).map_err(|_| {
            GitError::malformed(
                oid,
                format!("unknown object kind {:?}", bstr::BStr::new(kind)),
            )
        })?;

        if length.is_empty() || !length.iter().all(u8::is_ascii_digit) {
            return Err(GitError::malformed(
                oid,
                format!("invalid object length {:?}", bstr::BStr::new(length)),
            ));
        }
        let length = std::str::from_utf8(length)
            .ok()
            .and_then(|digits| digits.parse::<u64>().ok())
            .ok_or_else(|| GitError::malformed(oid, "object length out of range"))?;

        Ok(Self {
            object_type,
            length,
        })
    }
}
