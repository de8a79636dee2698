use crate::artifacts::diff::Segment;
use crate::artifacts::objects::commit::Commit;
use colored::Colorize;
use derive_new::new;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileChange {
    /// The commit has no parent; no diff is attempted
    FirstCommit,
    /// The parent commit does not record this path
    NewFile,
    /// Line diff against the parent's version of the file
    Modified(Vec<Segment>),
    /// Same blob as in the parent; the segments hold the whole file
    Unchanged(Vec<Segment>),
}

impl FileChange {
    /// Segments to print under the file header, if any
    pub fn segments(&self) -> &[Segment] {
        match self {
            FileChange::Modified(segments) | FileChange::Unchanged(segments) => segments,
            FileChange::FirstCommit | FileChange::NewFile => &[],
        }
    }
}

impl std::fmt::Display for FileChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileChange::FirstCommit => write!(f, "{}", "(first commit)".yellow()),
            FileChange::NewFile => write!(f, "{}", "(new file)".green()),
            FileChange::Modified(_) => write!(f, "{}", "(modified)".cyan()),
            FileChange::Unchanged(_) => write!(f, "{}", "(unchanged)".dimmed()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct FileReport {
    pub path: String,
    pub change: FileChange,
}

/// Everything `show` prints for one commit
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct CommitReport {
    pub commit: Commit,
    pub files: Vec<FileReport>,
}
