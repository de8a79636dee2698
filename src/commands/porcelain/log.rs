use crate::areas::repository::Repository;
use crate::artifacts::log::rev_list::RevList;
use crate::artifacts::objects::commit::Commit;
use crate::errors::Result;
use colored::Colorize;

#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    pub oneline: bool,
}

impl Repository {
    /// Walk the commit chain from head, newest first
    pub fn rev_list(&'_ self) -> Result<RevList<'_>> {
        self.ensure_initialized()?;

        Ok(RevList::new(self.database(), self.refs().read_head()?))
    }

    pub fn log(&self, opts: &LogOptions) -> anyhow::Result<()> {
        for (position, commit) in self.rev_list()?.enumerate() {
            let commit = commit?;

            if opts.oneline {
                self.show_commit_oneline(&commit)?;
            } else {
                if position > 0 {
                    writeln!(self.writer())?;
                }
                self.show_commit_medium(&commit)?;
            }
        }

        Ok(())
    }

    pub(crate) fn show_commit_medium(&self, commit: &Commit) -> anyhow::Result<()> {
        writeln!(
            self.writer(),
            "{}",
            format!("commit {}", commit.oid()).yellow()
        )?;
        writeln!(self.writer(), "Date:   {}", commit.readable_timestamp())?;
        writeln!(self.writer())?;
        for message_line in commit.message().lines() {
            writeln!(self.writer(), "    {}", message_line)?;
        }

        Ok(())
    }

    fn show_commit_oneline(&self, commit: &Commit) -> anyhow::Result<()> {
        writeln!(
            self.writer(),
            "{} {}",
            commit.oid().to_short_oid().yellow(),
            commit.short_message()
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::areas::repository::Repository;
    use crate::errors::{Error, Result};
    use assert_fs::TempDir;
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn repository_dir() -> TempDir {
        TempDir::new().expect("Failed to create temp dir")
    }

    #[rstest]
    fn rev_list_is_empty_before_the_first_commit(repository_dir: TempDir) -> Result<()> {
        let repository = Repository::new(repository_dir.path(), Box::new(std::io::sink()))?;
        repository.bootstrap()?;

        assert_eq!(repository.rev_list()?.count(), 0);
        Ok(())
    }

    #[rstest]
    fn rev_list_walks_newest_first(repository_dir: TempDir) -> Result<()> {
        let repository = Repository::new(repository_dir.path(), Box::new(std::io::sink()))?;
        repository.bootstrap()?;
        let messages = ["one", "two", "three"];
        for message in messages {
            repository.commit_staged(message)?;
        }

        let walked = repository
            .rev_list()?
            .map(|commit| commit.map(|commit| commit.message().to_string()))
            .collect::<Result<Vec<_>>>()?;

        assert_eq!(walked, vec!["three", "two", "one"]);
        Ok(())
    }

    #[rstest]
    fn rev_list_requires_an_initialized_root(repository_dir: TempDir) -> Result<()> {
        let repository = Repository::new(repository_dir.path(), Box::new(std::io::sink()))?;

        assert!(matches!(
            repository.rev_list(),
            Err(Error::NotARepository(_))
        ));
        Ok(())
    }
}
