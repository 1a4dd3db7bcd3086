//! Incremental tokenizer for tree object bodies
//!
//! A tree body is a packed sequence of records:
//!
//! ```text
//! <octal mode> <name>\0<20 raw id bytes><octal mode> <name>\0<20 raw id bytes>...
//! ```
//!
//! Names are variable length, so the only reliable anchor is the NUL that ends
//! the name. The scanner finds that NUL first and then waits for the fixed
//! 20-byte suffix. It is fed arbitrary chunks and never assumes the whole body
//! is available at once.

use crate::artifacts::objects::RAW_OBJECT_ID_LENGTH;
use bytes::{Buf, Bytes, BytesMut};
use thiserror::Error;

/// One undecoded tree record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRecord {
    /// `<mode> <name>`, without the NUL
    pub head: Bytes,
    pub raw_oid: [u8; RAW_OBJECT_ID_LENGTH],
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("tree record truncated, {pending} bytes left without a complete record")]
pub struct TruncatedRecord {
    pub pending: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Looking for the NUL ending the current name. `scanned` bytes of the
    /// buffer are already known to be NUL-free.
    SeekingDelimiter { scanned: usize },
    /// NUL found at offset `head_length`, waiting for the raw id bytes.
    AwaitingSuffix { head_length: usize },
    Done,
}

#[derive(Debug)]
pub struct TreeScanner {
    buffer: BytesMut,
    state: ScanState,
}

impl Default for TreeScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeScanner {
    pub fn new() -> Self {
        Self {
            buffer: BytesMut::new(),
            state: ScanState::SeekingDelimiter { scanned: 0 },
        }
    }

    /// Append the next chunk of the body.
    pub fn feed(&mut self, chunk: &[u8]) {
        self.buffer.extend_from_slice(chunk);
    }

    /// Number of buffered bytes not yet returned as a record.
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    /// Take the next complete record, or `None` if more input is needed.
    pub fn next_record(&mut self) -> Option<TreeRecord> {
        loop {
            match self.state {
                ScanState::SeekingDelimiter { scanned } => {
                    match self.buffer[scanned..].iter().position(|&b| b == b'\0') {
                        Some(offset) => {
                            self.state = ScanState::AwaitingSuffix {
                                head_length: scanned + offset,
                            }
                        }
                        None => {
                            self.state = ScanState::SeekingDelimiter {
                                scanned: self.buffer.len(),
                            };
                            return None;
                        }
                    }
                }
                ScanState::AwaitingSuffix { head_length } => {
                    let record_length = head_length + 1 + RAW_OBJECT_ID_LENGTH;
                    if self.buffer.len() < record_length {
                        return None;
                    }

                    let head = self.buffer.split_to(head_length).freeze();
                    self.buffer.advance(1);
                    let mut raw_oid = [0u8; RAW_OBJECT_ID_LENGTH];
                    self.buffer.copy_to_slice(&mut raw_oid);

                    self.state = ScanState::SeekingDelimiter { scanned: 0 };
                    return Some(TreeRecord { head, raw_oid });
                }
                ScanState::Done => return None,
            }
        }
    }

    /// Signal end of input.
    ///
    /// Call once [`next_record`](Self::next_record) has returned `None` for the
    /// last chunk. Leftover bytes at this point are a partial record.
    pub fn finish(&mut self) -> Result<(), TruncatedRecord> {
        self.state = ScanState::Done;
        if self.buffer.is_empty() {
            Ok(())
        } else {
            Err(TruncatedRecord {
                pending: self.buffer.len(),
            })
        }
    }
}
