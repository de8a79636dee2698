use crate::common::command::{init_repository_dir, repository_dir, run_sprout_command};
use assert_fs::TempDir;
use rstest::rstest;

mod common;

#[rstest]
fn status_of_a_fresh_repository(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_sprout_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    run_sprout_command(repository_dir.path(), &["status"])
        .assert()
        .success()
        .stdout("No commits yet\n\nnothing staged\n");

    Ok(())
}

#[rstest]
fn status_is_empty_right_after_a_commit(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let head = common::read_head(dir);

    run_sprout_command(dir, &["status"])
        .assert()
        .success()
        .stdout(format!("On commit {}\n\nnothing staged\n", &head[..7]));

    Ok(())
}

#[rstest]
fn status_classifies_staged_files_against_history(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let head = common::read_head(dir);
    std::fs::write(dir.join("1.txt"), "one changed\n")?;
    std::fs::write(dir.join("new.txt"), "new\n")?;

    run_sprout_command(dir, &["add", "1.txt", "a/2.txt", "new.txt"])
        .assert()
        .success();

    run_sprout_command(dir, &["status"])
        .assert()
        .success()
        .stdout(format!(
            "On commit {}\n\n\
             Changes to be committed:\n\
             \tmodified:   1.txt\n\
             \tunchanged:  a/2.txt\n\
             \tnew file:   new.txt\n",
            &head[..7]
        ));

    Ok(())
}
