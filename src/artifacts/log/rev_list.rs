use crate::areas::database::Database;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Error, Result};

/// Newest-first iterator over the commit chain
///
/// Every step reads one commit from the store. A hash that does not resolve
/// to a commit record yields a single `ChainCorrupt` error, after which the
/// iterator is exhausted.
pub struct RevList<'r> {
    database: &'r Database,
    current_commit_oid: Option<ObjectId>,
}

impl<'r> RevList<'r> {
    pub fn new(database: &'r Database, start: Option<ObjectId>) -> Self {
        RevList {
            database,
            current_commit_oid: start,
        }
    }

    fn load(&self, commit_oid: &ObjectId) -> Result<Commit> {
        let corrupt = |reason: &str| Error::ChainCorrupt {
            oid: commit_oid.to_string(),
            reason: reason.to_string(),
        };

        match self.database.parse_object_as_commit(commit_oid) {
            Ok(Some(commit)) => Ok(commit),
            Ok(None) => Err(corrupt("object is not a commit record")),
            Err(Error::ObjectNotFound(_)) => Err(corrupt("commit object is missing")),
            Err(err) => Err(err),
        }
    }
}

impl Iterator for RevList<'_> {
    type Item = Result<Commit>;

    fn next(&mut self) -> Option<Self::Item> {
        let commit_oid = self.current_commit_oid.take()?;

        match self.load(&commit_oid) {
            Ok(commit) => {
                // Move to the parent commit for the next iteration
                self.current_commit_oid = commit.parent().cloned();
                Some(Ok(commit))
            }
            Err(err) => Some(Err(err)),
        }
    }
}
