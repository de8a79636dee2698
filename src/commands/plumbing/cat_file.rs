use crate::areas::repository::Repository;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::Object;

impl Repository {
    /// Print an object; commit records are shown in a readable layout
    pub fn cat_file(&self, revision: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let object_id = self.database().resolve(revision)?;
        let content = self.database().load(&object_id)?;

        let display = match Commit::parse(&content) {
            Some(commit) => format!("{}\n", commit.display()),
            None => Blob::new(content).display(),
        };
        write!(self.writer(), "{}", display)?;

        Ok(())
    }
}
