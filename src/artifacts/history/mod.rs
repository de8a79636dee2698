//! History reconstruction
//!
//! Rebuilds what a commit changed: for every file recorded in the commit, the
//! content is compared with the same path in the parent commit.
//!
//! - `file_change`: per-file outcome (first commit, new file, or line diff)
//! - `inspector`: loads a commit and its parent and produces the report

pub mod file_change;
pub mod inspector;
