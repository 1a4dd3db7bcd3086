//! Directory-like view of a commit
//!
//! This is the surface a file-serving front end needs: list a directory,
//! stat a path, and open a file for reading. Paths are `/`-separated byte
//! strings relative to the commit's root tree.

pub mod dir_entry;
pub mod snapshot;
