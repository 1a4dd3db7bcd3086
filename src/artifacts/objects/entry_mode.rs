use crate::artifacts::objects::object_type::ObjectType;

const TYPE_MASK: u32 = 0o170000;
const REGULAR_TYPE: u32 = 0o100000;
const SYMLINK_TYPE: u32 = 0o120000;
const DIRECTORY_TYPE: u32 = 0o040000;
const GITLINK_TYPE: u32 = 0o160000;
const OWNER_EXECUTE: u32 = 0o100;

#[derive(Debug, Clone, Copy, Eq, Ord, Default, PartialEq, PartialOrd)]
pub enum FileMode {
    #[default]
    Regular,
    Executable,
}

/// Mode of a tree entry, as written in octal in front of the entry name
#[derive(Debug, Clone, Copy, Eq, Ord, PartialEq, PartialOrd)]
pub enum EntryMode {
    File(FileMode),
    Symlink,
    Directory,
    /// Gitlink to a commit of another repository
    Submodule,
}

impl EntryMode {
    pub fn as_str(&self) -> &str {
        match self {
            EntryMode::File(FileMode::Regular) => "100644",
            EntryMode::File(FileMode::Executable) => "100755",
            EntryMode::Symlink => "120000",
            EntryMode::Directory => "40000",
            EntryMode::Submodule => "160000",
        }
    }

    pub fn as_u32(&self) -> u32 {
        match self {
            EntryMode::File(FileMode::Regular) => 0o100644,
            EntryMode::File(FileMode::Executable) => 0o100755,
            EntryMode::Symlink => 0o120000,
            EntryMode::Directory => 0o40000,
            EntryMode::Submodule => 0o160000,
        }
    }

    pub fn is_tree(&self) -> bool {
        matches!(self, EntryMode::Directory)
    }

    /// Kind of object the entry points at
    pub fn object_type(&self) -> ObjectType {
        match self {
            EntryMode::File(_) | EntryMode::Symlink => ObjectType::Blob,
            EntryMode::Directory => ObjectType::Tree,
            EntryMode::Submodule => ObjectType::Commit,
        }
    }

    /// Parse the ASCII octal digits of a tree record.
    ///
    /// Only the file type bits decide the kind of entry. Permission bits other
    /// than the owner execute bit are ignored, so legacy modes such as `100664`
    /// or `100600` read as regular files, the way git canonicalises them.
    pub fn from_octal_str(mode: &[u8]) -> Option<Self> {
        if mode.is_empty() || !mode.iter().all(|b| (b'0'..=b'7').contains(b)) {
            return None;
        }
        let mode = u32::from_str_radix(std::str::from_utf8(mode).ok()?, 8).ok()?;

        match mode & TYPE_MASK {
            REGULAR_TYPE if mode & OWNER_EXECUTE != 0 => {
                Some(EntryMode::File(FileMode::Executable))
            }
            REGULAR_TYPE => Some(EntryMode::File(FileMode::Regular)),
            SYMLINK_TYPE => Some(EntryMode::Symlink),
            DIRECTORY_TYPE => Some(EntryMode::Directory),
            GITLINK_TYPE => Some(EntryMode::Submodule),
            _ => None,
        }
    }
}
