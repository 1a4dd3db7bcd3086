//! Git object identifier (SHA-1 hash)
//!
//! Object IDs are 40-character hexadecimal strings representing SHA-1 hashes.
//! Inside tree objects the same hash is stored as 20 raw bytes instead, so
//! both encodings need to be read.
//!
//! ## Storage
//!
//! Objects are stored in `.git/objects/<first-2-chars>/<remaining-38-chars>`

use crate::artifacts::objects::{OBJECT_ID_LENGTH, RAW_OBJECT_ID_LENGTH};
use crate::errors::{GitError, Result};
use std::path::PathBuf;

/// Git object identifier in lowercase hexadecimal form
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Parse and validate an object ID from a string
    ///
    /// Accepts exactly 40 ASCII hex digits in either case; the stored form is
    /// always lowercase since that is how the object files are named on disk.
    pub fn try_parse(id: impl AsRef<str>) -> Result<Self> {
        let id = id.as_ref();
        if id.len() != OBJECT_ID_LENGTH || !id.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(GitError::InvalidObjectId(id.to_string()));
        }
        Ok(Self(id.to_ascii_lowercase()))
    }

    /// Build an object ID from the 20 raw bytes found in tree records
    pub fn from_raw(raw: &[u8; RAW_OBJECT_ID_LENGTH]) -> Self {
        Self(hex::encode(raw))
    }

    /// Convert to file system path for object storage
    ///
    /// Splits the hash as `XX/YYYYYY...` where XX is the first 2 chars.
    pub fn to_path(&self) -> PathBuf {
        let (dir, file) = self.0.split_at(2);
        PathBuf::from(dir).join(file)
    }

    /// First 7 characters of the hash (standard Git abbreviation)
    pub fn to_short_oid(&self) -> &str {
        &self.0[..7]
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for ObjectId {
    type Err = GitError;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_parse(s)
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use std::path::Path;

    #[test]
    fn test_to_path_splits_after_two_chars() {
        let oid = ObjectId::try_parse("ce013625030ba8dba906f756967f9e9ca394464a").unwrap();
        assert_eq!(
            oid.to_path(),
            Path::new("ce").join("013625030ba8dba906f756967f9e9ca394464a")
        );
    }

    #[test]
    fn test_uppercase_input_is_normalised() {
        let oid = ObjectId::try_parse("CE013625030BA8DBA906F756967F9E9CA394464A").unwrap();
        assert_eq!(oid.as_ref(), "ce013625030ba8dba906f756967f9e9ca394464a");
        assert_eq!(oid.to_short_oid(), "ce01362");
    }

    #[test]
    fn test_from_raw_encodes_lowercase_hex() {
        let mut raw = [0u8; RAW_OBJECT_ID_LENGTH];
        raw[0] = 0xab;
        raw[19] = 0x0f;
        let oid = ObjectId::from_raw(&raw);
        assert_eq!(oid.as_ref(), "ab0000000000000000000000000000000000000f");
    }

    #[test]
    fn test_rejects_non_hex_characters() {
        let result = ObjectId::try_parse("zz013625030ba8dba906f756967f9e9ca394464a");
        assert!(matches!(result, Err(GitError::InvalidObjectId(_))));
    }

    proptest! {
        #[test]
        fn test_rejects_wrong_length(id in "[0-9a-f]{0,39}|[0-9a-f]{41,60}") {
            prop_assert!(ObjectId::try_parse(&id).is_err());
        }

        #[test]
        fn test_raw_ids_are_valid_hex_ids(raw in proptest::array::uniform20(any::<u8>())) {
            let oid = ObjectId::from_raw(&raw);
            prop_assert_eq!(oid.as_ref().len(), OBJECT_ID_LENGTH);
            prop_assert!(!oid.as_ref().bytes().any(|b| b.is_ascii_uppercase()));
        }
    }
}
