//! File content blob
//!
//! Blobs hold the raw bytes of a tracked file. Nothing else is recorded: the
//! path lives in a [`FileEntry`](crate::artifacts::index::file_entry::FileEntry)
//! and the bytes on disk are exactly the file's bytes.

use crate::artifacts::objects::object::{Object, Packable};
use crate::errors::Result;
use bytes::Bytes;
use derive_new::new;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Blob {
    content: Bytes,
}

impl Blob {
    pub fn content(&self) -> &Bytes {
        &self.content
    }

    /// Content decoded as text, replacing invalid UTF-8 sequences
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.content).into_owned()
    }
}

impl Packable for Blob {
    fn serialize(&self) -> Result<Bytes> {
        Ok(self.content.clone())
    }
}

impl Object for Blob {
    fn display(&self) -> String {
        self.text()
    }
}
