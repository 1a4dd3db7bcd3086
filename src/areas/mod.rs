//! Core repository components
//!
//! - `database`: Loose-object store under `.git/objects`
//! - `repository`: Repository discovery and the entry point for reading commits

pub mod database;
pub mod repository;
