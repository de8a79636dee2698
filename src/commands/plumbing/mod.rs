//! Plumbing commands
//!
//! - `hash-object`: Compute a file's object ID and optionally store it
//! - `cat-file`: Print the content of a stored object

pub mod cat_file;
pub mod hash_object;
