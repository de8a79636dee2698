use crate::areas::repository::STORAGE_DIR;
use crate::artifacts::objects::blob::Blob;
use crate::errors::{Error, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const IGNORED_PATHS: [&str; 3] = [STORAGE_DIR, ".", ".."];

/// Working directory the repository tracks files from
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn parse_blob(&self, path: &Path) -> Result<Blob> {
        Ok(Blob::new(self.read_file(path)?.into()))
    }

    /// Expand a user-supplied path into workspace-relative file paths
    ///
    /// Directories are walked recursively, skipping the storage directory.
    /// Relative paths are taken relative to the workspace root.
    ///
    /// # Errors
    ///
    /// `FileNotFound` when the path does not exist or lies outside the workspace
    pub fn list_files(&self, root_file_path: &Path) -> Result<Vec<PathBuf>> {
        let root_file_path = self
            .path
            .join(root_file_path)
            .canonicalize()
            .map_err(|_| Error::FileNotFound(root_file_path.to_path_buf()))?;

        match self.relative_path(&root_file_path) {
            Some(relative) if !Self::is_ignored(&relative) => {}
            _ => return Err(Error::FileNotFound(root_file_path)),
        }

        if root_file_path.is_dir() {
            let mut files = WalkDir::new(&root_file_path)
                .into_iter()
                .filter_entry(|entry| !Self::is_ignored_name(entry.file_name()))
                .filter_map(|entry| entry.ok())
                .filter(|entry| entry.file_type().is_file())
                .filter_map(|entry| self.relative_path(entry.path()))
                .collect::<Vec<_>>();
            files.sort();

            Ok(files)
        } else {
            Ok(self.relative_path(&root_file_path).into_iter().collect())
        }
    }

    fn relative_path(&self, path: &Path) -> Option<PathBuf> {
        path.strip_prefix(&self.path).ok().map(Path::to_path_buf)
    }

    fn is_ignored_name(name: &std::ffi::OsStr) -> bool {
        IGNORED_PATHS.contains(&name.to_string_lossy().as_ref())
    }

    fn is_ignored(path: &Path) -> bool {
        path.components().any(|component| match component {
            std::path::Component::Normal(name) => Self::is_ignored_name(name),
            _ => false,
        })
    }

    /// Read a workspace-relative file
    pub fn read_file(&self, file_path: &Path) -> Result<Vec<u8>> {
        std::fs::read(self.path.join(file_path))
            .map_err(|_| Error::FileNotFound(file_path.to_path_buf()))
    }
}
