use crate::areas::repository::Repository;
use crate::artifacts::diff::{NO_NEWLINE_MARKER, Segment, SegmentKind};
use crate::artifacts::history::file_change::CommitReport;
use crate::artifacts::history::inspector::HistoryInspector;
use crate::errors::Result;
use colored::Colorize;

impl Repository {
    /// Reconstruct what the commit named by `revision` changed
    pub fn inspect_commit(&self, revision: &str) -> Result<CommitReport> {
        self.ensure_initialized()?;

        HistoryInspector::new(self.database()).inspect(revision)
    }

    pub fn show(&self, revision: &str) -> anyhow::Result<CommitReport> {
        let report = self.inspect_commit(revision)?;

        self.show_commit_medium(&report.commit)?;

        for file in &report.files {
            writeln!(self.writer())?;
            writeln!(self.writer(), "{} {}", file.path.bold(), file.change)?;

            for segment in file.change.segments() {
                self.show_segment(segment)?;
            }
        }

        Ok(report)
    }

    fn show_segment(&self, segment: &Segment) -> anyhow::Result<()> {
        for line in segment.lines() {
            let line = format!("{}{}", segment.kind.marker(), line);
            let line = match segment.kind {
                SegmentKind::Added => line.green(),
                SegmentKind::Removed => line.red(),
                SegmentKind::Unchanged => line.normal(),
            };

            writeln!(self.writer(), "{}", line)?;
        }

        if segment.missing_newline() {
            writeln!(self.writer(), "{}", NO_NEWLINE_MARKER.dimmed())?;
        }

        Ok(())
    }
}
