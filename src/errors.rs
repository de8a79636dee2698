//! Error taxonomy for repository operations
//!
//! Every fallible operation in the library returns [`Result`]. Storage failures
//! carry the path they concern so the binary can report them without extra
//! context. None of these errors are retried; the command that hit them stops
//! and leaves the on-disk state as it was before the failed step.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using the repository [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Writing to the storage root failed
    #[error("unable to write {}: {source}", .path.display())]
    StorageWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading from the storage root failed for a reason other than absence
    #[error("unable to read {}: {source}", .path.display())]
    StorageRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No blob is stored under the given hash
    #[error("object not found: {0}")]
    ObjectNotFound(String),

    /// The staging index file is not a valid JSON list of entries
    #[error("corrupt index file {}: {source}", .path.display())]
    IndexCorrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A hash reachable from head does not resolve to a commit record
    #[error("corrupt commit chain at {oid}: {reason}")]
    ChainCorrupt { oid: String, reason: String },

    /// The user supplied a hash that names no commit
    #[error("commit not found: {0}")]
    CommitNotFound(String),

    /// A path given to `add` does not exist or cannot be read
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("unable to encode commit record: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("invalid object id: {0}")]
    InvalidObjectId(String),

    #[error("ambiguous object id {prefix}: candidates are {}", .candidates.join(", "))]
    AmbiguousObjectId {
        prefix: String,
        candidates: Vec<String>,
    },

    /// The storage root has not been bootstrapped with `init`
    #[error("not a sprout repository: {}", .0.display())]
    NotARepository(PathBuf),
}

impl Error {
    pub(crate) fn write(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Error::StorageWrite { path, source }
    }

    pub(crate) fn read(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Error::StorageRead { path, source }
    }
}
