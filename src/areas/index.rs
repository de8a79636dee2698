//! Staging index
//!
//! The index tracks which file versions go into the next commit. It is kept
//! on disk as a JSON array and rewritten in full on every update.
//!
//! ## Duplicate paths
//!
//! Staging a path that is already staged replaces the earlier entry in place,
//! so the entry keeps the position of the first time the path was staged.
//!
//! ## Locking
//!
//! Reads hold a shared lock and writes an exclusive lock on the index file for
//! the duration of the call. The read-modify-write cycle as a whole is not
//! protected across processes.

use crate::artifacts::index::file_entry::FileEntry;
use crate::errors::{Error, Result};
use std::io::{Read, Write};
use std::ops::DerefMut;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (typically `.sprout/index`)
    path: Box<Path>,
    /// Staged entries in staging order
    entries: Vec<FileEntry>,
    /// Set when the entries differ from what is on disk
    changed: bool,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            entries: Vec::new(),
            changed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_changed(&self) -> bool {
        self.changed
    }

    /// Load the index from disk
    ///
    /// A missing or zero-length file loads as an empty index.
    pub fn rehydrate(&mut self) -> Result<()> {
        self.entries.clear();
        self.changed = false;

        if !self.path.exists() {
            return Ok(());
        }

        let mut index_file = std::fs::OpenOptions::new()
            .read(true)
            .open(&self.path)
            .map_err(Error::read(self.path()))?;
        let mut lock = file_guard::lock(&mut index_file, file_guard::Lock::Shared, 0, 1)
            .map_err(Error::read(self.path()))?;

        let mut content = Vec::new();
        lock.deref_mut()
            .read_to_end(&mut content)
            .map_err(Error::read(self.path()))?;

        if content.iter().all(u8::is_ascii_whitespace) {
            return Ok(());
        }

        self.entries =
            serde_json::from_slice(&content).map_err(|source| Error::IndexCorrupt {
                path: self.path.to_path_buf(),
                source,
            })?;

        Ok(())
    }

    /// Stage an entry, replacing any entry already staged for the same path
    pub fn add(&mut self, entry: FileEntry) {
        match self.entries.iter_mut().find(|staged| staged.path == entry.path) {
            Some(staged) => *staged = entry,
            None => self.entries.push(entry),
        }

        self.changed = true;
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.changed = true;
    }

    /// Persist the full entry list
    pub fn write_updates(&mut self) -> Result<()> {
        let content = serde_json::to_vec(&self.entries).map_err(Error::Encode)?;

        let mut index_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)
            .map_err(Error::write(self.path()))?;
        let mut lock = file_guard::lock(&mut index_file, file_guard::Lock::Exclusive, 0, 1)
            .map_err(Error::write(self.path()))?;

        lock.deref_mut()
            .write_all(&content)
            .map_err(Error::write(self.path()))?;

        debug!(entries = self.entries.len(), "wrote index");
        self.changed = false;

        Ok(())
    }

    pub fn entries(&self) -> impl Iterator<Item = &FileEntry> {
        self.entries.iter()
    }

    pub fn into_entries(self) -> Vec<FileEntry> {
        self.entries
    }

    pub fn entry_by_path(&self, path: &str) -> Option<&FileEntry> {
        self.entries.iter().find(|entry| entry.path == path)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
