use crate::areas::repository::Repository;
use crate::artifacts::browse::dir_entry::DirEntry;
use crate::artifacts::browse::snapshot::Snapshot;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Result;
use bstr::{BString, ByteVec};
use std::io::Write;

#[derive(Debug, Clone, Copy, Default)]
pub struct LsTreeOptions {
    /// Descend into subdirectories
    pub recursive: bool,
    /// Show blob sizes
    pub long: bool,
}

impl Repository {
    /// List the directory at `path` of a commit, one entry per line:
    /// `<mode> <type> <oid>[ <size>]\t<path>`
    pub fn ls_tree(
        &self,
        commit_id: &ObjectId,
        path: &str,
        options: LsTreeOptions,
        writer: &mut dyn Write,
    ) -> Result<()> {
        let commit = self.commit(commit_id)?;
        let snapshot = Snapshot::from_commit(&commit)?;

        let target = snapshot.stat(path)?;
        let path = normalize(path);
        if !target.is_dir() {
            return write_entry(writer, &target, &path, options);
        }

        list_dir(&snapshot, path, options, writer)
    }
}

/// Drop leading, trailing and repeated slashes
fn normalize(path: &str) -> BString {
    let components = path
        .split('/')
        .filter(|component| !component.is_empty())
        .collect::<Vec<_>>();
    BString::from(components.join("/"))
}

fn list_dir(
    snapshot: &Snapshot<'_>,
    prefix: BString,
    options: LsTreeOptions,
    writer: &mut dyn Write,
) -> Result<()> {
    for entry in snapshot.read_dir(&prefix)? {
        let mut path = prefix.clone();
        if !path.is_empty() {
            path.push_byte(b'/');
        }
        path.push_str(&entry.name);

        if options.recursive && entry.is_dir() {
            list_dir(snapshot, path, options, writer)?;
        } else {
            write_entry(writer, &entry, &path, options)?;
        }
    }

    Ok(())
}

fn write_entry(
    writer: &mut dyn Write,
    entry: &DirEntry,
    path: &BString,
    options: LsTreeOptions,
) -> Result<()> {
    write!(
        writer,
        "{:06o} {} {}",
        entry.mode.as_u32(),
        entry.mode.object_type(),
        entry.oid
    )?;

    if options.long {
        match entry.size {
            Some(size) => write!(writer, " {size:>7}")?,
            None => write!(writer, " {:>7}", "-")?,
        }
    }

    writeln!(writer, "\t{path}")?;
    Ok(())
}
