//! Stored object types
//!
//! Everything the object store holds is a sequence of bytes keyed by the SHA-1
//! of those bytes. Two kinds of content end up there:
//!
//! - **Blob**: raw file content, stored verbatim
//! - **Commit**: a JSON record of a snapshot (timestamp, message, files, parent)
//!
//! There is no type header on disk; a commit is recognised by parsing its bytes.

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Shortest prefix accepted when resolving an abbreviated object ID
pub const MIN_PREFIX_LENGTH: usize = 4;

/// Length of the abbreviated object ID used in human-facing output
pub const SHORT_OID_LENGTH: usize = 7;
