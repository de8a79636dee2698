//! Version-control data structures and algorithms
//!
//! - `diff`: Myers line diff and segment coalescing
//! - `history`: Per-commit change reconstruction for `show`
//! - `index`: Staging entry type
//! - `log`: Commit chain traversal
//! - `objects`: Stored object types (blob, commit) and their IDs

pub mod diff;
pub mod history;
pub mod index;
pub mod log;
pub mod objects;
