//! Git data structures
//!
//! - `objects`: Git object types (blob, tree, commit) and their parsers
//! - `browse`: Directory-like view over a commit's tree

pub mod browse;
pub mod objects;
