//! Object identifier (SHA-1 hash)
//!
//! Object IDs are 40-character lowercase hexadecimal strings. They key every
//! object in the store and double as commit identity.
//!
//! ## Storage
//!
//! Objects are stored flat, as `.sprout/objects/<40-hex-chars>`

use crate::artifacts::objects::{OBJECT_ID_LENGTH, SHORT_OID_LENGTH};
use crate::errors::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha1::{Digest, Sha1};
use std::path::PathBuf;

/// SHA-1 object identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Parse and validate an object ID from a string
    ///
    /// Upper-case hex is accepted and normalised to lower case.
    pub fn try_parse(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.len() != OBJECT_ID_LENGTH || !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::InvalidObjectId(id));
        }
        Ok(Self(id.to_ascii_lowercase()))
    }

    /// Compute the ID of a byte sequence
    pub fn hash_bytes(content: &[u8]) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(content);

        Self(format!("{:x}", hasher.finalize()))
    }

    /// File name of the object inside the objects directory
    pub fn to_path(&self) -> PathBuf {
        PathBuf::from(&self.0)
    }

    /// First 7 characters of the hash
    pub fn to_short_oid(&self) -> String {
        self.0[..SHORT_OID_LENGTH].to_string()
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for ObjectId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ObjectId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        ObjectId::try_parse(raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn hash_of_known_content_matches_sha1() {
        let oid = ObjectId::hash_bytes(b"hello\n");
        assert_eq!(oid.as_ref(), "f572d396fae9206628714fb2ce00f72e94f2258f");
        assert_eq!(oid.to_short_oid(), "f572d39");
    }

    #[test]
    fn empty_content_has_a_stable_hash() {
        assert_eq!(
            ObjectId::hash_bytes(b"").as_ref(),
            "da39a3ee5e6b4b0d3255bfef95601890afd80709"
        );
    }

    #[rstest]
    #[case("")]
    #[case("abc")]
    #[case("zz39a3ee5e6b4b0d3255bfef95601890afd80709")]
    #[case("da39a3ee5e6b4b0d3255bfef95601890afd807090")]
    fn malformed_ids_are_rejected(#[case] raw: &str) {
        assert!(matches!(
            ObjectId::try_parse(raw),
            Err(Error::InvalidObjectId(_))
        ));
    }

    #[test]
    fn upper_case_ids_are_normalised() -> Result<()> {
        let oid = ObjectId::try_parse("DA39A3EE5E6B4B0D3255BFEF95601890AFD80709")?;
        assert_eq!(oid.as_ref(), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
        Ok(())
    }

    #[test]
    fn serializes_as_plain_string() -> anyhow::Result<()> {
        let oid = ObjectId::hash_bytes(b"");
        let json = serde_json::to_string(&oid)?;
        assert_eq!(json, "\"da39a3ee5e6b4b0d3255bfef95601890afd80709\"");
        assert_eq!(serde_json::from_str::<ObjectId>(&json)?, oid);
        Ok(())
    }
}
