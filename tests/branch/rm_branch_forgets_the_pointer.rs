use crate::common::command::{
    commit_file, gitlet_stdout, head_commit_id, init_repository_dir, run_gitlet_command,
};
use crate::common::file::count_objects;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn rm_branch_keeps_the_commits(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();

    run_gitlet_command(dir, &["branch", "feature"])
        .assert()
        .success();
    run_gitlet_command(dir, &["checkout", "feature"])
        .assert()
        .success();
    commit_file(dir, "feature.txt", "feature", "feature work");
    let feature_head = head_commit_id(dir);
    run_gitlet_command(dir, &["checkout", "master"])
        .assert()
        .success();
    let commits = count_objects(dir, "commit");

    run_gitlet_command(dir, &["rm-branch", "feature"])
        .assert()
        .success();

    let status = gitlet_stdout(dir, &["status"]);
    assert!(status.starts_with("=== Branches ===\n*master\n\n"));
    assert_eq!(count_objects(dir, "commit"), commits);
    assert!(gitlet_stdout(dir, &["cat-file", &feature_head]).ends_with("\nfeature work\n"));
}

#[rstest]
fn rm_branch_of_the_current_branch_fails(init_repository_dir: TempDir) {
    run_gitlet_command(init_repository_dir.path(), &["rm-branch", "master"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::eq("Cannot remove the current branch.\n"));
}

#[rstest]
#[case("missing")]
#[case("bad..name")]
fn rm_branch_of_an_unknown_branch_fails(init_repository_dir: TempDir, #[case] name: &str) {
    run_gitlet_command(init_repository_dir.path(), &["rm-branch", name])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::eq("No such branch exists.\n"));
}
