use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

/// Fixed commit date so hashes and log output are reproducible
pub const COMMIT_DATE: &str = "2024-01-01T12:00:00Z";

/// `COMMIT_DATE` as printed by `log` and `show`
pub const READABLE_COMMIT_DATE: &str = "Mon Jan 1 12:00:00 2024 +0000";

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_sprout_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    let file1 = FileSpec::new(repository_dir.path().join("1.txt"), "one\n".to_string());
    write_file(file1);

    let file2 = FileSpec::new(
        repository_dir.path().join("a").join("2.txt"),
        "two\n".to_string(),
    );
    write_file(file2);

    let file3 = FileSpec::new(
        repository_dir.path().join("a").join("b").join("3.txt"),
        "three\n".to_string(),
    );
    write_file(file3);

    run_sprout_command(repository_dir.path(), &["add", "."])
        .assert()
        .success();

    sprout_commit(repository_dir.path(), "Initial commit")
        .assert()
        .success();

    repository_dir
}

pub fn run_sprout_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("sprout").expect("Failed to find sprout binary");
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("SPROUT_ROOT");
    cmd.env_remove("SPROUT_COMMIT_DATE");
    cmd.env_remove("SPROUT_LOG");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn sprout_commit(dir: &Path, message: &str) -> Command {
    let mut cmd = run_sprout_command(dir, &["commit", "-m", message]);
    cmd.env("SPROUT_COMMIT_DATE", COMMIT_DATE);
    cmd
}

/// Stage `path` and commit it, returning the new head
pub fn add_and_commit(dir: &Path, path: &str, message: &str) -> String {
    run_sprout_command(dir, &["add", path]).assert().success();
    sprout_commit(dir, message).assert().success();

    crate::common::read_head(dir)
}
