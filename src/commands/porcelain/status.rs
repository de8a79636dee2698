use crate::areas::repository::Repository;
use crate::artifacts::index::file_entry::FileEntry;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Result;
use colored::Colorize;
use std::collections::HashMap;

/// How a staged entry relates to the last committed version of its path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StagedState {
    /// No commit in the chain records the path
    NewFile,
    /// The newest commit recording the path holds different content
    Modified,
    /// The newest commit recording the path holds the same content
    Unchanged,
}

impl std::fmt::Display for StagedState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            StagedState::NewFile => "new file:",
            StagedState::Modified => "modified:",
            StagedState::Unchanged => "unchanged:",
        };
        write!(f, "{label:<11}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub head: Option<ObjectId>,
    pub staged: Vec<(FileEntry, StagedState)>,
}

impl Repository {
    /// Classify every staged entry against the commit chain
    pub fn staged_status(&self) -> Result<StatusReport> {
        self.ensure_initialized()?;

        let mut index = self.index();
        index.rehydrate()?;

        let head = self.refs().read_head()?;
        let mut committed = HashMap::<&str, Option<ObjectId>>::new();
        for entry in index.entries() {
            committed.insert(entry.path.as_str(), None);
        }

        let mut pending = committed.len();
        for commit in self.rev_list()? {
            if pending == 0 {
                break;
            }
            let commit = commit?;

            for (path, hash) in committed.iter_mut().filter(|(_, hash)| hash.is_none()) {
                if let Some(entry) = commit.file(path) {
                    *hash = Some(entry.hash.clone());
                    pending -= 1;
                }
            }
        }

        let staged = index
            .entries()
            .map(|entry| {
                let state = match committed.get(entry.path.as_str()) {
                    Some(Some(hash)) if *hash == entry.hash => StagedState::Unchanged,
                    Some(Some(_)) => StagedState::Modified,
                    _ => StagedState::NewFile,
                };
                (entry.clone(), state)
            })
            .collect();

        Ok(StatusReport { head, staged })
    }

    pub fn status(&self) -> anyhow::Result<()> {
        let report = self.staged_status()?;

        match &report.head {
            Some(head) => writeln!(self.writer(), "On commit {}", head.to_short_oid())?,
            None => writeln!(self.writer(), "No commits yet")?,
        }
        writeln!(self.writer())?;

        if report.staged.is_empty() {
            writeln!(self.writer(), "nothing staged")?;
            return Ok(());
        }

        writeln!(self.writer(), "Changes to be committed:")?;
        for (entry, state) in &report.staged {
            let line = format!("{} {}", state, entry.path);
            writeln!(self.writer(), "\t{}", line.green())?;
        }

        Ok(())
    }
}
