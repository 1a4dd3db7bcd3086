//! Read-only access to the loose objects of a git repository
//!
//! A [`Repository`] resolves a commit id to a [`Commit`], whose root [`Tree`]
//! can be walked down to [`Blob`] contents. Nothing is cached: every step
//! reopens and decompresses the object file it needs.
//!
//! ```no_run
//! use gitdav::{ObjectId, Repository};
//!
//! # fn main() -> gitdav::Result<()> {
//! let repository = Repository::discover(".")?;
//! let oid = ObjectId::try_parse("3b18e512dba79e4c8300dd08aeb37f8e728b8dad")?;
//! let tree = repository.commit(&oid)?.tree()?;
//! let readme = tree.blob("README.md")?.into_bytes()?;
//! # Ok(())
//! # }
//! ```

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;

pub use areas::repository::Repository;
pub use artifacts::browse::dir_entry::DirEntry;
pub use artifacts::browse::snapshot::Snapshot;
pub use artifacts::objects::blob::Blob;
pub use artifacts::objects::commit::Commit;
pub use artifacts::objects::entry::Entry;
pub use artifacts::objects::entry_mode::{EntryMode, FileMode};
pub use artifacts::objects::object_id::ObjectId;
pub use artifacts::objects::object_type::ObjectType;
pub use artifacts::objects::tree::Tree;
pub use errors::{GitError, Result};
