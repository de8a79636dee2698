//! Core repository components
//!
//! This module contains the on-disk building blocks of a repository:
//!
//! - `database`: Content-addressed object store for blobs and commits
//! - `index`: Staging area for changes going into the next commit
//! - `refs`: The head pointer
//! - `repository`: The handle tying the areas together
//! - `workspace`: Working directory file system access

pub mod database;
pub mod index;
pub mod refs;
pub mod repository;
pub mod workspace;
