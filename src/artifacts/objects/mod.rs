//! Git object types and operations
//!
//! Git stores all content as objects identified by SHA-1 hashes. Three types are read here:
//!
//! - **Blob**: File content (raw bytes)
//! - **Tree**: Directory listing (names, modes, and object IDs)
//! - **Commit**: Snapshot with metadata; only the root tree is kept
//!
//! Every object is stored as `<type> <size>\0<content>`, zlib-compressed.

pub mod blob;
pub mod commit;
pub mod entry;
pub mod entry_mode;
pub mod object_id;
pub mod object_type;
pub mod tree;
pub mod tree_scanner;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Length of a SHA-1 hash in binary format, as stored in tree records
pub const RAW_OBJECT_ID_LENGTH: usize = 20;
