use crate::areas::repository::Repository;
use crate::artifacts::browse::snapshot::Snapshot;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Result;
use std::io::Write;

impl Repository {
    /// Describe the path of a commit as `<name> <dir|file> <size|->`
    pub fn stat(&self, commit_id: &ObjectId, path: &str, writer: &mut dyn Write) -> Result<()> {
        let commit = self.commit(commit_id)?;
        let entry = Snapshot::from_commit(&commit)?.stat(path)?;

        let name = if entry.name.is_empty() {
            "/".into()
        } else {
            entry.name.to_string()
        };
        let kind = if entry.is_dir() { "dir" } else { "file" };
        let size = entry
            .size
            .map_or_else(|| "-".to_string(), |size| size.to_string());

        writeln!(writer, "{name} {kind} {size}")?;
        Ok(())
    }
}
