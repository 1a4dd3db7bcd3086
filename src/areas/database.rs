use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::{ObjectHeader, ObjectType};
use crate::errors::{GitError, Result};
use flate2::read::ZlibDecoder;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Decompressed body of a loose object, bounded by its declared length
pub type ObjectReader = BodyReader<ZlibDecoder<File>>;

/// Read-only view of `.git/objects`
///
/// Every call opens the object file afresh; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct Database {
    path: Box<Path>,
}

// TODO: read objects from pack files once `.git/objects/pack` support lands
impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    pub fn object_path(&self, object_id: &ObjectId) -> PathBuf {
        self.path.join(object_id.to_path())
    }

    /// Open the raw (still compressed) object file
    pub fn open(&self, object_id: &ObjectId) -> Result<File> {
        let object_path = self.object_path(object_id);

        File::open(&object_path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => GitError::ObjectNotFound(object_id.clone()),
            _ => GitError::Io(e),
        })
    }

    /// Open an object, consume its header and return the body stream.
    ///
    /// The file handle lives inside the returned reader and is closed when
    /// the reader is dropped, including on every error path of the caller.
    pub fn read_object(&self, object_id: &ObjectId) -> Result<(ObjectHeader, ObjectReader)> {
        let file = self.open(object_id)?;
        let mut decoder = ZlibDecoder::new(file);

        let header = ObjectHeader::read_from(object_id, &mut decoder)?;
        tracing::debug!(
            oid = %object_id,
            kind = %header.object_type,
            length = header.length,
            "opened loose object"
        );

        Ok((header, BodyReader::new(decoder, header.length)))
    }

    /// Like [`read_object`](Self::read_object), but fail unless the object
    /// has the expected kind.
    pub fn read_object_as(
        &self,
        object_id: &ObjectId,
        expected: ObjectType,
    ) -> Result<(ObjectHeader, ObjectReader)> {
        let (header, reader) = self.read_object(object_id)?;

        if header.object_type != expected {
            return Err(GitError::WrongObjectKind {
                oid: object_id.clone(),
                expected,
                found: header.object_type,
            });
        }

        Ok((header, reader))
    }

    /// Read only the header of an object
    pub fn read_header(&self, object_id: &ObjectId) -> Result<ObjectHeader> {
        self.read_object(object_id).map(|(header, _)| header)
    }
}

/// Reader yielding exactly `length` bytes of an object body
///
/// The declared length is checked against the decompressed stream in both
/// directions: a stream that ends early fails with `UnexpectedEof`, and one
/// that still has bytes once `length` bytes were read fails with
/// `InvalidData` when the caller reaches the end of the body.
pub struct BodyReader<R> {
    inner: R,
    remaining: u64,
    end_checked: bool,
}

impl<R: Read> BodyReader<R> {
    pub fn new(inner: R, length: u64) -> Self {
        Self {
            inner,
            remaining: length,
            end_checked: false,
        }
    }

    /// Bytes of the declared body not yet read
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    fn check_end(&mut self) -> io::Result<()> {
        if self.end_checked {
            return Ok(());
        }
        self.end_checked = true;

        let mut extra = [0u8; 1];
        loop {
            match self.inner.read(&mut extra) {
                Ok(0) => return Ok(()),
                Ok(_) => {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidData,
                        "object body is longer than its declared length",
                    ));
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

impl<R> std::fmt::Debug for BodyReader<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BodyReader")
            .field("remaining", &self.remaining)
            .field("end_checked", &self.end_checked)
            .finish_non_exhaustive()
    }
}

impl<R: Read> Read for BodyReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        if self.remaining == 0 {
            self.check_end()?;
            return Ok(0);
        }

        let max = buf.len().min(usize::try_from(self.remaining).unwrap_or(usize::MAX));
        let n = self.inner.read(&mut buf[..max])?;
        if n == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!(
                    "object body is truncated, {} of its declared bytes are missing",
                    self.remaining
                ),
            ));
        }

        self.remaining -= n as u64;
        Ok(n)
    }
}
