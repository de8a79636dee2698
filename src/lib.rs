//! sprout: a minimal local version control system
//!
//! - `areas`: on-disk state (object store, index, head, workspace) and the
//!   `Repository` handle tying them together
//! - `artifacts`: the values flowing between areas (objects, index entries,
//!   diffs, history reports)
//! - `commands`: operations exposed on `Repository`
//! - `errors`: the crate-wide error type

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;
