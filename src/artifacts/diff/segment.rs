use crate::artifacts::diff::diff_algorithm::{DiffAlgorithm, Edit, MyersDiff};
use derive_new::new;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    Added,
    Removed,
    Unchanged,
}

impl SegmentKind {
    /// Line prefix used when printing a segment
    pub fn marker(&self) -> char {
        match self {
            SegmentKind::Added => '+',
            SegmentKind::Removed => '-',
            SegmentKind::Unchanged => ' ',
        }
    }
}

/// A run of consecutive lines sharing one classification
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Segment {
    pub kind: SegmentKind,
    pub text: String,
}

impl Segment {
    /// Lines of the segment, without terminators
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }

    /// Whether the last line of the segment has no terminator
    pub fn missing_newline(&self) -> bool {
        !self.text.is_empty() && !self.text.ends_with('\n')
    }
}

pub const NO_NEWLINE_MARKER: &str = "\\ No newline at end of file";

impl Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}{}", self.kind.marker(), line)?;
        }
        if self.missing_newline() {
            writeln!(f, "{NO_NEWLINE_MARKER}")?;
        }
        Ok(())
    }
}

/// Diff two texts line by line
///
/// Lines keep their terminators, so the concatenated texts of the unchanged
/// and removed segments rebuild `old_text` and those of the unchanged and
/// added segments rebuild `new_text`. Within a changed region the removed
/// segment always precedes the added one.
pub fn diff_lines(old_text: &str, new_text: &str) -> Vec<Segment> {
    let old_lines = old_text.split_inclusive('\n').collect::<Vec<_>>();
    let new_lines = new_text.split_inclusive('\n').collect::<Vec<_>>();

    let edits = MyersDiff::new(&old_lines, &new_lines).diff();

    coalesce(edits)
}

fn coalesce(edits: Vec<Edit<&str>>) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut unchanged = String::new();
    let mut removed = String::new();
    let mut added = String::new();

    for edit in edits {
        match edit {
            Edit::Equal { value } => {
                flush(&mut segments, SegmentKind::Removed, &mut removed);
                flush(&mut segments, SegmentKind::Added, &mut added);
                unchanged.push_str(value);
            }
            Edit::Delete { value } => {
                flush(&mut segments, SegmentKind::Unchanged, &mut unchanged);
                removed.push_str(value);
            }
            Edit::Insert { value } => {
                flush(&mut segments, SegmentKind::Unchanged, &mut unchanged);
                added.push_str(value);
            }
        }
    }

    flush(&mut segments, SegmentKind::Unchanged, &mut unchanged);
    flush(&mut segments, SegmentKind::Removed, &mut removed);
    flush(&mut segments, SegmentKind::Added, &mut added);

    segments
}

fn flush(segments: &mut Vec<Segment>, kind: SegmentKind, text: &mut String) {
    if !text.is_empty() {
        segments.push(Segment::new(kind, std::mem::take(text)));
    }
}

/// Rebuild the old side of a diff
pub fn old_text(segments: &[Segment]) -> String {
    segments
        .iter()
        .filter(|segment| segment.kind != SegmentKind::Added)
        .map(|segment| segment.text.as_str())
        .collect()
}

/// Rebuild the new side of a diff
pub fn new_text(segments: &[Segment]) -> String {
    segments
        .iter()
        .filter(|segment| segment.kind != SegmentKind::Removed)
        .map(|segment| segment.text.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;

    fn segment(kind: SegmentKind, text: &str) -> Segment {
        Segment::new(kind, text.to_string())
    }

    #[test]
    fn appended_line_is_a_single_added_segment() {
        assert_eq!(
            diff_lines("hello\n", "hello\nworld\n"),
            vec![
                segment(SegmentKind::Unchanged, "hello\n"),
                segment(SegmentKind::Added, "world\n"),
            ]
        );
    }

    #[rstest]
    #[case("hello\n")]
    #[case("one\ntwo\nthree")]
    #[case("no newline")]
    fn identical_texts_are_one_unchanged_segment(#[case] text: &str) {
        assert_eq!(
            diff_lines(text, text),
            vec![segment(SegmentKind::Unchanged, text)]
        );
    }

    #[test]
    fn empty_old_text_is_one_added_segment() {
        assert_eq!(
            diff_lines("", "a\nb\n"),
            vec![segment(SegmentKind::Added, "a\nb\n")]
        );
    }

    #[test]
    fn empty_new_text_is_one_removed_segment() {
        assert_eq!(
            diff_lines("a\nb\n", ""),
            vec![segment(SegmentKind::Removed, "a\nb\n")]
        );
    }

    #[test]
    fn two_empty_texts_have_no_segments() {
        assert_eq!(diff_lines("", ""), Vec::new());
    }

    #[test]
    fn replaced_runs_read_removals_first() {
        assert_eq!(
            diff_lines("a\nb\nc\nd\n", "a\nx\ny\nd\ne\n"),
            vec![
                segment(SegmentKind::Unchanged, "a\n"),
                segment(SegmentKind::Removed, "b\nc\n"),
                segment(SegmentKind::Added, "x\ny\n"),
                segment(SegmentKind::Unchanged, "d\n"),
                segment(SegmentKind::Added, "e\n"),
            ]
        );
    }

    #[test]
    fn segments_print_with_line_markers() {
        let rendered = diff_lines("a\nb\n", "a\nc\n")
            .iter()
            .map(ToString::to_string)
            .collect::<String>();

        assert_eq!(rendered, " a\n-b\n+c\n");
    }

    #[test]
    fn added_terminator_is_visible_when_printed() {
        let segments = diff_lines("a", "a\n");
        let rendered = segments
            .iter()
            .map(ToString::to_string)
            .collect::<String>();

        assert_eq!(
            segments,
            vec![
                segment(SegmentKind::Removed, "a"),
                segment(SegmentKind::Added, "a\n"),
            ]
        );
        assert_eq!(rendered, "-a\n\\ No newline at end of file\n+a\n");
    }

    #[rstest]
    #[case("", false)]
    #[case("a\n", false)]
    #[case("a\nb", true)]
    fn missing_newline_only_flags_unterminated_text(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(
            segment(SegmentKind::Unchanged, text).missing_newline(),
            expected
        );
    }

    #[test]
    fn single_line_replacement_reads_removal_first() {
        assert_eq!(
            diff_lines("old\n", "new\n"),
            vec![
                segment(SegmentKind::Removed, "old\n"),
                segment(SegmentKind::Added, "new\n"),
            ]
        );
    }

    #[test]
    fn large_rewrites_are_rebuilt_from_segments() {
        let old = (0..4000).map(|i| format!("old {i}\n")).collect::<String>();
        let new = (0..4000).map(|i| format!("new {i}\n")).collect::<String>();

        let segments = diff_lines(&old, &new);

        assert_eq!(
            segments.iter().map(|segment| segment.kind).collect::<Vec<_>>(),
            vec![SegmentKind::Removed, SegmentKind::Added]
        );
        assert_eq!(old_text(&segments), old);
        assert_eq!(new_text(&segments), new);
    }

    proptest! {
        #[test]
        fn both_sides_are_rebuilt_from_segments(
            old in proptest::collection::vec("[abc]{0,3}\n?", 0..12).prop_map(|lines| lines.concat()),
            new in proptest::collection::vec("[abc]{0,3}\n?", 0..12).prop_map(|lines| lines.concat()),
        ) {
            let segments = diff_lines(&old, &new);

            prop_assert_eq!(old_text(&segments), old);
            prop_assert_eq!(new_text(&segments), new);
        }

        #[test]
        fn adjacent_segments_never_share_a_kind(
            old in "[ab\n]{0,24}",
            new in "[ab\n]{0,24}",
        ) {
            let segments = diff_lines(&old, &new);

            for pair in segments.windows(2) {
                prop_assert_ne!(pair[0].kind, pair[1].kind);
            }
            prop_assert!(segments.iter().all(|segment| !segment.text.is_empty()));
        }
    }
}
