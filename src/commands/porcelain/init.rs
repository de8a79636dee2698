use crate::areas::repository::Repository;
use crate::errors::{Error, Result};
use std::fs;
use tracing::info;

impl Repository {
    /// Create the storage layout: objects directory, empty head, empty index
    ///
    /// Safe to run on an existing repository; nothing already present is
    /// touched.
    pub fn bootstrap(&self) -> Result<()> {
        let objects_path = self.database().objects_path();
        fs::create_dir_all(objects_path).map_err(Error::write(objects_path))?;

        self.refs().ensure_head()?;

        let mut index = self.index();
        if !index.path().exists() {
            index.clear();
            index.write_updates()?;
        }

        info!(path = %self.path().display(), "bootstrapped repository");

        Ok(())
    }

    pub fn init(&self) -> anyhow::Result<()> {
        self.bootstrap()?;

        writeln!(
            self.writer(),
            "Initialized empty sprout repository in {}",
            self.storage_path().display()
        )?;

        Ok(())
    }
}
