use crate::common::command::{
    gitlet_commit, gitlet_stdout, init_repository_dir, run_gitlet_command,
};
use crate::common::file::{FileSpec, index_file, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn commit_without_changes_fails(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let index_before = std::fs::read(index_file(dir)).unwrap();

    gitlet_commit(dir, "nothing")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::eq("No changes added to the commit.\n"));

    assert_eq!(std::fs::read(index_file(dir)).unwrap(), index_before);
}

#[rstest]
fn commit_with_empty_message_fails(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("1.txt"), "changed".to_string()));
    run_gitlet_command(dir, &["add", "1.txt"]).assert().success();

    gitlet_commit(dir, "")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::eq("Please enter a commit message.\n"));
}

#[rstest]
fn commit_with_whitespace_message_is_kept_verbatim(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("1.txt"), "changed".to_string()));
    run_gitlet_command(dir, &["add", "1.txt"]).assert().success();

    gitlet_commit(dir, "   ").assert().success();

    let log = gitlet_stdout(dir, &["log"]);
    assert!(log.contains("+0000\n   \n\n"));
}

#[rstest]
fn commit_without_message_argument_fails(init_repository_dir: TempDir) {
    run_gitlet_command(init_repository_dir.path(), &["commit"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::eq("Please enter a commit message.\n"));
}
