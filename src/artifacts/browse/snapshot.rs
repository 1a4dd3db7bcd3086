use crate::artifacts::browse::dir_entry::DirEntry;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::entry_mode::EntryMode;
use crate::artifacts::objects::tree::Tree;
use crate::errors::{GitError, Result};
use bstr::{BStr, BString, ByteSlice};

/// File system view of one commit
///
/// The root tree is parsed once when the snapshot is created. Everything below
/// it is read from the object database again for each call.
#[derive(Debug, Clone)]
pub struct Snapshot<'r> {
    root: Tree<'r>,
}

impl<'r> Snapshot<'r> {
    pub fn new(root: Tree<'r>) -> Self {
        Snapshot { root }
    }

    pub fn from_commit(commit: &Commit<'r>) -> Result<Self> {
        Ok(Self::new(commit.tree()?))
    }

    pub fn root(&self) -> &Tree<'r> {
        &self.root
    }

    /// List the directory at `path` in on-disk order
    pub fn read_dir(&self, path: impl AsRef<[u8]>) -> Result<Vec<DirEntry>> {
        let components = components(path.as_ref());
        let subtree = self.walk(&components)?;
        let tree = subtree.as_ref().unwrap_or(&self.root);
        let database = tree.repository().database();

        tree.entries()
            .iter()
            .map(|entry| DirEntry::describe(database, entry))
            .collect()
    }

    /// Describe the file or directory at `path`; the root is a directory
    pub fn stat(&self, path: impl AsRef<[u8]>) -> Result<DirEntry> {
        let components = components(path.as_ref());

        let Some((name, parents)) = components.split_last() else {
            return Ok(DirEntry::new(
                BString::default(),
                EntryMode::Directory,
                self.root.oid().clone(),
                None,
            ));
        };

        let parent = self.walk(parents)?;
        let parent = parent.as_ref().unwrap_or(&self.root);
        let entry = parent
            .entry(name)
            .ok_or_else(|| not_found(path.as_ref()))?;

        DirEntry::describe(parent.repository().database(), entry)
    }

    /// Open the file at `path` for reading
    pub fn open(&self, path: impl AsRef<[u8]>) -> Result<Blob> {
        let components = components(path.as_ref());
        let (name, parents) = components
            .split_last()
            .ok_or_else(|| not_found(path.as_ref()))?;

        let parent = self.walk(parents)?;
        parent.as_ref().unwrap_or(&self.root).blob(name)
    }

    /// Resolve directories below the root. `None` stands for the root itself.
    fn walk(&self, components: &[&BStr]) -> Result<Option<Tree<'r>>> {
        let mut current: Option<Tree<'r>> = None;

        for name in components {
            let next = current.as_ref().unwrap_or(&self.root).tree(name)?;
            current = Some(next);
        }

        Ok(current)
    }
}

fn components(path: &[u8]) -> Vec<&BStr> {
    path.split_str("/")
        .filter(|component| !component.is_empty())
        .map(ByteSlice::as_bstr)
        .collect()
}

fn not_found(path: &[u8]) -> GitError {
    GitError::EntryNotFound(String::from_utf8_lossy(path).into_owned())
}
