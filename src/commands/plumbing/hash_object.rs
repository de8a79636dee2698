use crate::areas::repository::Repository;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use std::path::Path;

impl Repository {
    pub fn hash_object(&self, object_path: &Path, write: bool) -> anyhow::Result<ObjectId> {
        let files = self.workspace().list_files(object_path)?;
        let [file] = files.as_slice() else {
            anyhow::bail!("{} is not a single file", object_path.display());
        };

        let blob = self.workspace().parse_blob(file)?;
        let object_id = blob.object_id()?;

        if write {
            self.ensure_initialized()?;
            self.database().store(&blob)?;
        }

        writeln!(self.writer(), "{}", object_id)?;

        Ok(object_id)
    }
}
