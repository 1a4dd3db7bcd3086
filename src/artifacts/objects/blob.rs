//! Git blob object
//!
//! Blobs store file content in Git. They contain only the raw file data,
//! without any metadata like filename or permissions (those are stored in trees).
//!
//! ## Format
//!
//! On disk: `blob <size>\0<content>`
//! In memory: the declared size and a reader yielding exactly that many
//! decompressed bytes

use crate::areas::database::{Database, ObjectReader};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::{GitError, Result};
use bytes::Bytes;
use std::io::{self, Read, Write};

/// Upper bound for buffers preallocated from a declared size
const MAX_PREALLOCATION: u64 = 1 << 20;

/// Open blob object
///
/// Reading yields exactly [`size`](Blob::size) bytes; a stream that is shorter
/// or longer than declared fails instead of being silently cut or padded.
/// The underlying file is closed when the blob is dropped.
#[derive(Debug)]
pub struct Blob {
    oid: ObjectId,
    size: u64,
    reader: ObjectReader,
}

impl Blob {
    pub fn read(database: &Database, oid: &ObjectId) -> Result<Self> {
        let (header, reader) = database.read_object_as(oid, ObjectType::Blob)?;

        Ok(Self {
            oid: oid.clone(),
            size: header.length,
            reader,
        })
    }

    pub fn oid(&self) -> &ObjectId {
        &self.oid
    }

    /// Declared content length in bytes
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Read the whole content into memory
    pub fn into_bytes(mut self) -> Result<Bytes> {
        let mut content = Vec::with_capacity(self.size.min(MAX_PREALLOCATION) as usize);
        self.reader
            .read_to_end(&mut content)
            .map_err(|e| GitError::from_stream(&self.oid, e))?;

        Ok(content.into())
    }

    /// Stream the content into `writer`, returning the number of bytes copied
    pub fn copy_to<W: Write + ?Sized>(&mut self, writer: &mut W) -> Result<u64> {
        let mut buffer = [0u8; 8 * 1024];
        let mut copied = 0u64;

        loop {
            let n = match self.reader.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(GitError::from_stream(&self.oid, e)),
            };
            writer.write_all(&buffer[..n])?;
            copied += n as u64;
        }

        Ok(copied)
    }
}

impl Read for Blob {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.reader.read(buf)
    }
}
