//! Command implementations
//!
//! Commands are `impl Repository` blocks, one file per command, split the way
//! git splits them:
//!
//! - `plumbing`: direct object store access (hash-object, cat-file)
//! - `porcelain`: the version-control workflow (init, add, commit, log, show, status)
//!
//! Each command exposes the typed operation it is built on and a thin wrapper
//! that renders the result to the repository writer.

pub mod plumbing;
pub mod porcelain;
