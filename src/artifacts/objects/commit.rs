//! Commit record
//!
//! A commit is a snapshot of the files staged at the time it was made, linked
//! to the previous commit by hash.
//!
//! ## Format
//!
//! On disk the record is compact JSON with a fixed field order:
//!
//! ```text
//! {"timestamp":"2024-01-01T12:00:00.000Z","message":"first","files":[...],"parent":null}
//! ```
//!
//! The commit hash is the SHA-1 of exactly those bytes. It is not part of the
//! record; it is the key the record is stored under.

use crate::artifacts::index::file_entry::FileEntry;
use crate::artifacts::objects::object::{Object, Packable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Error, Result};
use bytes::Bytes;
use chrono::{DateTime, SecondsFormat, Timelike, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct CommitRecord {
    #[serde(with = "iso_millis")]
    timestamp: DateTime<Utc>,
    message: String,
    files: Vec<FileEntry>,
    parent: Option<ObjectId>,
}

/// Immutable commit with its identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    oid: ObjectId,
    record: CommitRecord,
}

impl Commit {
    /// Build a commit and compute its hash
    ///
    /// The timestamp is truncated to millisecond precision so the stored
    /// record and the in-memory value agree.
    pub fn new(
        message: String,
        files: Vec<FileEntry>,
        parent: Option<ObjectId>,
        timestamp: DateTime<Utc>,
    ) -> Result<Self> {
        let millis = timestamp.nanosecond() / 1_000_000 * 1_000_000;
        let timestamp = timestamp.with_nanosecond(millis).unwrap_or(timestamp);

        let record = CommitRecord {
            timestamp,
            message,
            files,
            parent,
        };
        let oid = ObjectId::hash_bytes(&Self::encode(&record)?);

        Ok(Commit { oid, record })
    }

    /// Parse stored bytes as a commit record
    ///
    /// Returns `None` when the bytes are not a commit (for instance a file blob).
    pub fn parse(content: &[u8]) -> Option<Self> {
        let record = serde_json::from_slice::<CommitRecord>(content).ok()?;

        Some(Commit {
            oid: ObjectId::hash_bytes(content),
            record,
        })
    }

    fn encode(record: &CommitRecord) -> Result<Vec<u8>> {
        serde_json::to_vec(record).map_err(Error::Encode)
    }

    pub fn oid(&self) -> &ObjectId {
        &self.oid
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.record.timestamp
    }

    /// Timestamp in ISO-8601 form, as stored
    pub fn iso_timestamp(&self) -> String {
        self.record
            .timestamp
            .to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Timestamp in the form "Mon Jan 1 12:34:56 2024 +0000"
    pub fn readable_timestamp(&self) -> String {
        self.record
            .timestamp
            .format("%a %b %-d %H:%M:%S %Y %z")
            .to_string()
    }

    pub fn message(&self) -> &str {
        &self.record.message
    }

    /// First line of the message
    pub fn short_message(&self) -> &str {
        self.record.message.lines().next().unwrap_or("")
    }

    pub fn files(&self) -> &[FileEntry] {
        &self.record.files
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.record.parent.as_ref()
    }

    /// Look up the entry recorded for `path`
    ///
    /// When a path was staged more than once, the last entry wins.
    pub fn file(&self, path: &str) -> Option<&FileEntry> {
        self.record.files.iter().rev().find(|entry| entry.path == path)
    }
}

impl Packable for Commit {
    fn serialize(&self) -> Result<Bytes> {
        Ok(Self::encode(&self.record)?.into())
    }
}

impl Object for Commit {
    fn object_id(&self) -> Result<ObjectId> {
        Ok(self.oid.clone())
    }

    fn display(&self) -> String {
        let mut lines = vec![];

        lines.push(format!("timestamp {}", self.iso_timestamp()));
        if let Some(parent) = self.parent() {
            lines.push(format!("parent {parent}"));
        }
        for entry in self.files() {
            lines.push(format!("file {} {}", entry.hash, entry.path));
        }
        lines.push(String::new());
        lines.push(self.record.message.clone());

        lines.join("\n")
    }
}

mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        timestamp: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&timestamp.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|timestamp| timestamp.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
