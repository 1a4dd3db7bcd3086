//! Command implementations behind the `gitdav` binary
//!
//! Only plumbing commands exist: the crate reads objects and never writes them.

pub mod plumbing;
