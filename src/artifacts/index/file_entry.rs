use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::path::{Component, Path};

/// Pointer from a tracked path to the blob holding its content
///
/// Paths are relative to the repository root and always use `/` as the
/// separator so that entries written on one platform read the same elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct FileEntry {
    pub path: String,
    pub hash: ObjectId,
}

impl FileEntry {
    /// Build an entry from a workspace-relative path
    pub fn from_relative_path(path: &Path, hash: ObjectId) -> Self {
        let path = path
            .components()
            .filter_map(|component| match component {
                Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/");

        Self::new(path, hash)
    }
}
