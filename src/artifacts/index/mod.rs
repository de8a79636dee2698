//! Staging index data structures
//!
//! The index file is a JSON array of [`FileEntry`](file_entry::FileEntry)
//! values, in staging order:
//!
//! ```text
//! [{"path":"a.txt","hash":"f572d396fae9206628714fb2ce00f72e94f2258f"}]
//! ```

pub mod file_entry;
