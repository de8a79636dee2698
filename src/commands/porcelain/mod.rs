//! Porcelain commands (user-facing workflow)
//!
//! ## Commands
//!
//! - `init`: Create the storage layout
//! - `add`: Stage files for the next commit
//! - `commit`: Record the staged files as a new commit
//! - `log`: Show the commit chain, newest first
//! - `show`: Show what a commit changed relative to its parent
//! - `status`: Show the staged files

pub mod add;
pub mod commit;
pub mod init;
pub mod log;
pub mod show;
pub mod status;
