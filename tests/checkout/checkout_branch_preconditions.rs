use crate::common::command::{
    commit_file, head_commit_id, init_repository_dir, run_gitlet_command,
};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn checkout_of_the_current_branch_fails(init_repository_dir: TempDir) {
    run_gitlet_command(init_repository_dir.path(), &["checkout", "master"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::eq("No need to checkout the current branch.\n"));
}

#[rstest]
fn checkout_of_an_unknown_branch_fails(init_repository_dir: TempDir) {
    run_gitlet_command(init_repository_dir.path(), &["checkout", "nowhere"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::eq("No such branch exists.\n"));
}

#[rstest]
fn checkout_without_operands_fails(init_repository_dir: TempDir) {
    run_gitlet_command(init_repository_dir.path(), &["checkout"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::eq("Incorrect operands.\n"));
}

#[rstest]
fn checkout_branch_over_an_untracked_file_changes_nothing(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_gitlet_command(dir, &["branch", "feature"])
        .assert()
        .success();
    run_gitlet_command(dir, &["checkout", "feature"])
        .assert()
        .success();
    commit_file(dir, "new.txt", "from feature", "add new");
    run_gitlet_command(dir, &["checkout", "master"])
        .assert()
        .success();
    let master_head = head_commit_id(dir);

    write_file(FileSpec::new(dir.join("new.txt"), "mine".to_string()));
    write_file(FileSpec::new(dir.join("1.txt"), "edited".to_string()));

    run_gitlet_command(dir, &["checkout", "feature"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::eq(
            "There is an untracked file in the way; delete it, or add and commit it first.\n",
        ));

    assert_eq!(read_file(&dir.join("new.txt")), "mine");
    assert_eq!(read_file(&dir.join("1.txt")), "edited");
    assert_eq!(head_commit_id(dir), master_head);
}
