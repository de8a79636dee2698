//! Line diffing
//!
//! - `diff_algorithm`: Myers' shortest edit script over any comparable items
//! - `segment`: line-level diff of two texts, coalesced into tagged segments
//!
//! The segment view is what history reconstruction reports: runs of added,
//! removed and unchanged lines, each carrying the exact text (line terminators
//! included) so that either side can be rebuilt from the segments alone.

pub mod diff_algorithm;
pub mod segment;

pub use segment::{NO_NEWLINE_MARKER, Segment, SegmentKind, diff_lines};
