//! Content-addressed object store
//!
//! Every object lives in its own file under `.sprout/objects/`, named by the
//! SHA-1 of its bytes. The store is append-only: a key, once written, is never
//! rewritten or removed, so concurrent writers of the same key cannot disagree.

use crate::artifacts::objects::MIN_PREFIX_LENGTH;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Error, Result};
use bytes::Bytes;
use fake::rand;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    /// Store raw bytes and return their key
    pub fn put(&self, content: &[u8]) -> Result<ObjectId> {
        let object_id = ObjectId::hash_bytes(content);
        let object_path = self.path.join(object_id.to_path());

        // write the object to disk unless it already exists
        if object_path.exists() {
            debug!(oid = %object_id, "object already stored");
        } else {
            self.write_object(&object_path, content)?;
            debug!(oid = %object_id, bytes = content.len(), "stored object");
        }

        Ok(object_id)
    }

    /// Serialize an object and store it
    pub fn store(&self, object: &impl Object) -> Result<ObjectId> {
        self.put(&object.serialize()?)
    }

    /// Read the bytes stored under `object_id`
    pub fn load(&self, object_id: &ObjectId) -> Result<Bytes> {
        let object_path = self.path.join(object_id.to_path());

        match std::fs::read(&object_path) {
            Ok(content) => Ok(content.into()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Err(Error::ObjectNotFound(object_id.to_string()))
            }
            Err(err) => Err(Error::read(object_path)(err)),
        }
    }

    pub fn contains(&self, object_id: &ObjectId) -> bool {
        self.path.join(object_id.to_path()).is_file()
    }

    pub fn parse_object_as_blob(&self, object_id: &ObjectId) -> Result<Blob> {
        Ok(Blob::new(self.load(object_id)?))
    }

    /// Load and parse a commit record
    ///
    /// # Returns
    ///
    /// `Ok(None)` when the object exists but is not a commit record.
    pub fn parse_object_as_commit(&self, object_id: &ObjectId) -> Result<Option<Commit>> {
        let content = self.load(object_id)?;

        Ok(Commit::parse(&content))
    }

    fn write_object(&self, object_path: &Path, content: &[u8]) -> Result<()> {
        let temp_object_path = self.path.join(Self::generate_temp_name());

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&temp_object_path)
            .map_err(Error::write(&temp_object_path))?;

        file.write_all(content)
            .map_err(Error::write(&temp_object_path))?;
        drop(file);

        // rename the temp file to the object file to make it atomic
        std::fs::rename(&temp_object_path, object_path).map_err(|err| {
            let _ = std::fs::remove_file(&temp_object_path);
            Error::write(object_path)(err)
        })
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}", rand::random::<u32>())
    }

    /// Find all objects whose ID starts with the given prefix
    ///
    /// Used to resolve abbreviated IDs. An empty vector means no match; more
    /// than one entry means the prefix is ambiguous.
    pub fn find_objects_by_prefix(&self, prefix: &str) -> Result<Vec<ObjectId>> {
        let prefix = prefix.to_ascii_lowercase();
        let entries = std::fs::read_dir(&self.path).map_err(Error::read(&*self.path))?;

        let mut matches = entries
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| {
                let file_name = entry.file_name().to_string_lossy().into_owned();
                if file_name.starts_with(&prefix) {
                    ObjectId::try_parse(file_name).ok()
                } else {
                    None
                }
            })
            .collect::<Vec<_>>();
        matches.sort();

        Ok(matches)
    }

    /// Resolve a full or abbreviated object ID to a stored object
    ///
    /// # Errors
    ///
    /// - `InvalidObjectId` for prefixes that are too short or not hexadecimal
    /// - `ObjectNotFound` when nothing matches
    /// - `AmbiguousObjectId` when several objects match
    pub fn resolve(&self, revision: &str) -> Result<ObjectId> {
        if let Ok(object_id) = ObjectId::try_parse(revision) {
            return if self.contains(&object_id) {
                Ok(object_id)
            } else {
                Err(Error::ObjectNotFound(object_id.to_string()))
            };
        }

        if revision.len() < MIN_PREFIX_LENGTH || !revision.chars().all(|c| c.is_ascii_hexdigit())
        {
            return Err(Error::InvalidObjectId(revision.to_string()));
        }

        let mut candidates = self.find_objects_by_prefix(revision)?;
        match candidates.len() {
            0 => Err(Error::ObjectNotFound(revision.to_string())),
            1 => Ok(candidates.remove(0)),
            _ => Err(Error::AmbiguousObjectId {
                prefix: revision.to_string(),
                candidates: candidates.iter().map(ToString::to_string).collect(),
            }),
        }
    }
}
