use crate::areas::repository::Repository;
use crate::artifacts::index::file_entry::FileEntry;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Result;
use tracing::info;

impl Repository {
    /// Build a commit from `files` and store it
    ///
    /// Head and index are left alone; see `commit` for the full workflow.
    pub fn create_commit(
        &self,
        message: &str,
        files: Vec<FileEntry>,
        parent: Option<ObjectId>,
    ) -> Result<Commit> {
        let commit = Commit::new(message.to_string(), files, parent, self.now())?;
        self.database().store(&commit)?;

        Ok(commit)
    }

    /// Record the staged files as a new commit on top of head
    ///
    /// Head moves to the new commit and the index is emptied. An empty index
    /// still produces a commit with no files.
    pub fn commit_staged(&self, message: &str) -> Result<Commit> {
        self.ensure_initialized()?;

        let mut index = self.index();

        // Load the index file from the disk
        index.rehydrate()?;

        let parent = self.refs().read_head()?;
        let files = index.entries().cloned().collect::<Vec<_>>();

        let commit = self.create_commit(message, files, parent)?;
        self.refs().update_head(commit.oid())?;

        index.clear();
        index.write_updates()?;

        info!(oid = %commit.oid(), files = commit.files().len(), "created commit");

        Ok(commit)
    }

    pub fn commit(&self, message: &str) -> anyhow::Result<Commit> {
        let commit = self.commit_staged(message)?;

        let is_root = match commit.parent() {
            Some(_) => "",
            None => "(root-commit) ",
        };

        writeln!(
            self.writer(),
            "[{}{}] {}",
            is_root,
            commit.oid().to_short_oid(),
            commit.short_message()
        )?;

        Ok(commit)
    }
}
