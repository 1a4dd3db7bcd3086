use crate::areas::database::Database;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{GitError, Result};
use std::io;
use std::path::{Component, Path, PathBuf};

/// Name of the git directory inside a working tree
pub const GIT_DIR: &str = ".git";

/// Handle on a repository's loose-object store
///
/// Holds nothing but paths. Commits and trees borrow it while they are alive
/// so that further objects can be resolved.
#[derive(Debug, Clone)]
pub struct Repository {
    path: Box<Path>,
    database: Database,
}

impl Repository {
    /// Open the repository rooted exactly at `path`
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = absolute_clean(path.as_ref())?;

        if !is_git_root(&path)? {
            return Err(GitError::RepositoryNotFound(path));
        }

        Ok(Self::at(&path))
    }

    /// Find the repository containing `path`
    ///
    /// Walks up the directory hierarchy until a directory with a `.git`
    /// subdirectory is found, or the root of the file system is reached.
    pub fn discover(path: impl AsRef<Path>) -> Result<Self> {
        let start = absolute_clean(path.as_ref())?;

        for candidate in start.ancestors() {
            if is_git_root(candidate)? {
                tracing::debug!(path = %start.display(), root = %candidate.display(), "found repository");
                return Ok(Self::at(candidate));
            }
        }

        Err(GitError::RepositoryNotFound(start))
    }

    pub(crate) fn at(path: &Path) -> Self {
        let database = Database::new(path.join(GIT_DIR).join("objects").into_boxed_path());

        Repository {
            path: path.into(),
            database,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    /// Load the commit with the given id
    pub fn commit(&self, oid: &ObjectId) -> Result<Commit<'_>> {
        Commit::read(self, oid)
    }
}

/// Make `path` absolute and resolve `.` and `..` lexically, without following
/// symlinks, so that `ancestors` only yields real parent directories.
fn absolute_clean(path: &Path) -> Result<PathBuf> {
    let mut clean = PathBuf::new();

    for component in std::path::absolute(path)?.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                clean.pop();
            }
            other => clean.push(other),
        }
    }

    Ok(clean)
}

fn is_git_root(path: &Path) -> Result<bool> {
    match std::fs::metadata(path.join(GIT_DIR)) {
        Ok(metadata) => Ok(metadata.is_dir()),
        Err(e) if matches!(e.kind(), io::ErrorKind::NotFound | io::ErrorKind::NotADirectory) => {
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}
