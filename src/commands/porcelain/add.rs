use crate::areas::repository::Repository;
use crate::artifacts::index::file_entry::FileEntry;
use crate::errors::Result;
use std::path::PathBuf;
use tracing::info;

impl Repository {
    /// Stage files for the next commit
    ///
    /// Directories are expanded recursively. Every path is expanded and read
    /// before anything is stored, so a missing file leaves both the object
    /// store and the index untouched.
    pub fn add(&self, paths: &[PathBuf]) -> Result<Vec<FileEntry>> {
        self.ensure_initialized()?;

        let mut index = self.index();

        // Load the index file from the disk
        index.rehydrate()?;

        // Iterate over each provided file path and expand it if it's a directory
        let files = paths
            .iter()
            .map(|path| self.workspace().list_files(path))
            .collect::<Result<Vec<_>>>()?
            .into_iter()
            .flatten()
            .map(|path| {
                let blob = self.workspace().parse_blob(&path)?;
                Ok((path, blob))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut staged = Vec::with_capacity(files.len());
        for (path, blob) in files {
            let blob_id = self.database().store(&blob)?;
            let entry = FileEntry::from_relative_path(&path, blob_id);

            index.add(entry.clone());
            staged.push(entry);
        }

        index.write_updates()?;
        info!(files = staged.len(), "staged files");

        Ok(staged)
    }
}
