use crate::areas::repository::Repository;
use crate::artifacts::browse::snapshot::Snapshot;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Result;
use std::io::Write;

impl Repository {
    /// Stream the content of the file at `path` of a commit
    pub fn cat_file(&self, commit_id: &ObjectId, path: &str, writer: &mut dyn Write) -> Result<()> {
        let commit = self.commit(commit_id)?;
        let mut blob = Snapshot::from_commit(&commit)?.open(path)?;

        let copied = blob.copy_to(writer)?;
        writer.flush()?;
        tracing::debug!(oid = %blob.oid(), bytes = copied, "wrote blob");

        Ok(())
    }
}
