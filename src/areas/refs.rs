//! Head reference
//!
//! There are no branches: the only reference is `HEAD`, a text file holding
//! the hash of the newest commit. Before the first commit the file is empty.

use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Error, Result};
use derive_new::new;
use file_guard::Lock;
use std::io::Write;
use std::ops::DerefMut;
use std::path::Path;
use tracing::debug;

/// Name of the head reference file
pub const HEAD_REF_NAME: &str = "HEAD";

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the storage root (typically `.sprout`)
    path: Box<Path>,
}

impl Refs {
    pub fn head_path(&self) -> Box<Path> {
        self.path.join(HEAD_REF_NAME).into_boxed_path()
    }

    /// Read the current head commit
    ///
    /// # Returns
    ///
    /// `None` when the head file is missing or empty (no commits yet)
    pub fn read_head(&self) -> Result<Option<ObjectId>> {
        let head_path = self.head_path();

        let content = match std::fs::read_to_string(&head_path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(Error::read(&*head_path)(err)),
        };
        let content = content.trim();

        if content.is_empty() {
            return Ok(None);
        }

        ObjectId::try_parse(content)
            .map(Some)
            .map_err(|_| Error::ChainCorrupt {
                oid: content.to_string(),
                reason: format!("{HEAD_REF_NAME} does not hold a valid hash"),
            })
    }

    /// Point head at `oid`, overwriting the previous value
    ///
    /// Acquires an exclusive lock on the head file during the update.
    pub fn update_head(&self, oid: &ObjectId) -> Result<()> {
        self.write_head(oid.as_ref())?;
        debug!(%oid, "updated head");

        Ok(())
    }

    /// Create an empty head file unless one already exists
    pub fn ensure_head(&self) -> Result<()> {
        let head_path = self.head_path();
        if !head_path.exists() {
            self.write_head("")?;
        }

        Ok(())
    }

    fn write_head(&self, raw: &str) -> Result<()> {
        let head_path = self.head_path();

        let mut head_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&head_path)
            .map_err(Error::write(&*head_path))?;
        let mut lock = file_guard::lock(&mut head_file, Lock::Exclusive, 0, 1)
            .map_err(Error::write(&*head_path))?;

        lock.deref_mut()
            .write_all(raw.as_bytes())
            .map_err(Error::write(&*head_path))
    }
}
