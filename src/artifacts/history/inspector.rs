use crate::areas::database::Database;
use crate::artifacts::diff::diff_lines;
use crate::artifacts::history::file_change::{CommitReport, FileChange, FileReport};
use crate::artifacts::log::rev_list::RevList;
use crate::artifacts::objects::commit::Commit;
use crate::errors::{Error, Result};
use derive_new::new;

#[derive(new)]
pub struct HistoryInspector<'r> {
    database: &'r Database,
}

impl<'r> HistoryInspector<'r> {
    /// Find the commit named by a full or abbreviated hash
    ///
    /// Anything that does not name a stored commit record, including a
    /// malformed hash or the hash of a file blob, is `CommitNotFound`.
    pub fn find_commit(&self, revision: &str) -> Result<Commit> {
        let not_found = || Error::CommitNotFound(revision.to_string());

        let commit_oid = match self.database.resolve(revision) {
            Ok(commit_oid) => commit_oid,
            Err(Error::ObjectNotFound(_) | Error::InvalidObjectId(_)) => return Err(not_found()),
            Err(err) => return Err(err),
        };

        self.database
            .parse_object_as_commit(&commit_oid)?
            .ok_or_else(not_found)
    }

    /// Build the full report for a commit before anything is printed
    pub fn inspect(&self, revision: &str) -> Result<CommitReport> {
        let commit = self.find_commit(revision)?;
        let parent = RevList::new(self.database, commit.parent().cloned())
            .next()
            .transpose()?;

        let files = commit
            .files()
            .iter()
            .map(|entry| {
                let blob = self.database.parse_object_as_blob(&entry.hash)?;

                let change = match &parent {
                    None => FileChange::FirstCommit,
                    Some(parent) => match parent.file(&entry.path) {
                        None => FileChange::NewFile,
                        Some(parent_entry) => {
                            let parent_blob =
                                self.database.parse_object_as_blob(&parent_entry.hash)?;
                            let segments = diff_lines(&parent_blob.text(), &blob.text());

                            if parent_entry.hash == entry.hash {
                                FileChange::Unchanged(segments)
                            } else {
                                FileChange::Modified(segments)
                            }
                        }
                    },
                };

                Ok(FileReport::new(entry.path.clone(), change))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(CommitReport::new(commit, files))
    }
}
