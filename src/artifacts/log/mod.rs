//! Commit history traversal
//!
//! - `rev_list`: lazy newest-first walk along parent links
//!
//! History is linear, so the walk is a loop over the object store that
//! follows one parent hash at a time and holds a single commit in memory.

pub mod rev_list;
