//! Plumbing commands (low-level Git operations)
//!
//! Read-only commands over one commit's snapshot. Each writes its output to
//! the writer it is given.
//!
//! ## Commands
//!
//! - `ls-tree`: List a directory of a commit
//! - `cat-file`: Print the content of a file of a commit
//! - `stat`: Describe one path of a commit
//! - `show-commit`: Print the root tree of a commit

pub mod cat_file;
pub mod ls_tree;
pub mod show_commit;
pub mod stat;
