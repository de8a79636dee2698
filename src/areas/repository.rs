use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::workspace::Workspace;
use crate::errors::{Error, Result};
use chrono::{DateTime, Utc};
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// Name of the storage directory inside the repository root
pub const STORAGE_DIR: &str = ".sprout";

/// Name of the objects directory inside the storage directory
pub const OBJECTS_DIR: &str = "objects";

/// Name of the index file inside the storage directory
pub const INDEX_FILE: &str = "index";

/// Handle on one repository root
///
/// Every operation goes through this handle; it owns the paths to the object
/// store, the index and the head file, so several repositories can be used
/// side by side in one process.
pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    index: RefCell<Index>,
    database: Database,
    workspace: Workspace,
    refs: Refs,
    commit_date: Option<DateTime<Utc>>,
}

impl Repository {
    /// Open the repository rooted at `path`
    ///
    /// The root directory must exist; the storage layout is only required by
    /// operations other than `init`.
    pub fn new(path: &Path, writer: Box<dyn std::io::Write>) -> Result<Self> {
        let path = path
            .canonicalize()
            .map_err(|_| Error::NotARepository(path.to_path_buf()))?;
        let storage_path = path.join(STORAGE_DIR);

        let index = Index::new(storage_path.join(INDEX_FILE).into_boxed_path());
        let database = Database::new(storage_path.join(OBJECTS_DIR).into_boxed_path());
        let workspace = Workspace::new(path.clone().into_boxed_path());
        let refs = Refs::new(storage_path.into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            index: RefCell::new(index),
            database,
            workspace,
            refs,
            commit_date: None,
        })
    }

    /// Use a fixed timestamp for every commit created through this handle
    pub fn with_commit_date(mut self, commit_date: DateTime<Utc>) -> Self {
        self.commit_date = Some(commit_date);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn storage_path(&self) -> Box<Path> {
        self.path.join(STORAGE_DIR).into_boxed_path()
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn index(&'_ self) -> RefMut<'_, Index> {
        self.index.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub(crate) fn now(&self) -> DateTime<Utc> {
        self.commit_date.unwrap_or_else(Utc::now)
    }

    /// Fail with `NotARepository` unless `init` has been run on this root
    pub fn ensure_initialized(&self) -> Result<()> {
        if self.database.objects_path().is_dir() {
            Ok(())
        } else {
            Err(Error::NotARepository(self.path.to_path_buf()))
        }
    }
}
