use crate::common::command::{repository_dir, run_gitlet_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
#[case(&["status"])]
#[case(&["log"])]
#[case(&["global-log"])]
#[case(&["commit", "message"])]
#[case(&["branch", "other"])]
#[case(&["hash-object", "-w", "missing.txt"])]
fn commands_outside_repository_fail(repository_dir: TempDir, #[case] args: &[&str]) {
    run_gitlet_command(repository_dir.path(), args)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::eq("Not in an initialized Gitlet directory.\n"));

    assert!(!repository_dir.path().join(".gitlet").exists());
}
