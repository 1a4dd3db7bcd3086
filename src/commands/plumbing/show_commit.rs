use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Result;
use std::io::Write;

impl Repository {
    /// Print the root tree of a commit
    pub fn show_commit(&self, commit_id: &ObjectId, writer: &mut dyn Write) -> Result<()> {
        let commit = self.commit(commit_id)?;
        writeln!(writer, "tree {}", commit.tree_oid())?;
        Ok(())
    }
}
