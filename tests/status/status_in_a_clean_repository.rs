use crate::common::command::{empty_repository_dir, init_repository_dir, run_gitlet_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

const CLEAN_STATUS: &str = "\
=== Branches ===
*master

=== Staged Files ===

=== Removed Files ===

=== Modifications Not Staged For Commit ===

=== Untracked Files ===

";

#[rstest]
fn status_of_a_fresh_repository(empty_repository_dir: TempDir) {
    run_gitlet_command(empty_repository_dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::eq(CLEAN_STATUS));
}

#[rstest]
fn status_after_committing_everything(init_repository_dir: TempDir) {
    run_gitlet_command(init_repository_dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::eq(CLEAN_STATUS));
}
