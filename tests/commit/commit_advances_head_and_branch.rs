use crate::common::command::{
    empty_repository_dir, gitlet_commit, gitlet_stdout, head_commit_id, log_commit_ids,
    run_gitlet_command,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use gitlet::artifacts::objects::object_id::ObjectId;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn commit_advances_head_and_branch(empty_repository_dir: TempDir) {
    let dir = empty_repository_dir.path();
    let root = head_commit_id(dir);

    write_file(FileSpec::new(dir.join("test.txt"), "hello".to_string()));
    run_gitlet_command(dir, &["add", "test.txt"]).assert().success();
    gitlet_commit(dir, "m1").assert().success();
    let m1 = head_commit_id(dir);

    write_file(FileSpec::new(dir.join("test.txt"), "hello!".to_string()));
    run_gitlet_command(dir, &["add", "test.txt"]).assert().success();
    gitlet_commit(dir, "m2").assert().success();
    let m2 = head_commit_id(dir);

    assert_eq!(log_commit_ids(dir), vec![m2.clone(), m1.clone(), root]);

    let description = gitlet_stdout(dir, &["cat-file", &m2]);
    let new_blob = ObjectId::digest(["hello!"]);
    assert!(description.contains(&format!("parent {m1}\n")));
    assert!(description.contains(&format!("blob {new_blob} test.txt\n")));
    assert!(description.ends_with("\nm2\n"));
}

#[rstest]
fn commit_clears_the_stage(empty_repository_dir: TempDir) {
    let dir = empty_repository_dir.path();

    write_file(FileSpec::new(dir.join("a.txt"), "a".to_string()));
    run_gitlet_command(dir, &["add", "a.txt"]).assert().success();
    gitlet_commit(dir, "add a").assert().success();

    let status = gitlet_stdout(dir, &["status"]);
    assert!(status.contains("=== Staged Files ===\n\n=== Removed Files ===\n\n"));
}

#[rstest]
fn commit_advances_only_the_current_branch(empty_repository_dir: TempDir) {
    let dir = empty_repository_dir.path();
    let root = head_commit_id(dir);
    run_gitlet_command(dir, &["branch", "other"]).assert().success();

    write_file(FileSpec::new(dir.join("a.txt"), "a".to_string()));
    run_gitlet_command(dir, &["add", "a.txt"]).assert().success();
    gitlet_commit(dir, "on master").assert().success();

    run_gitlet_command(dir, &["checkout", "other"]).assert().success();
    assert_eq!(head_commit_id(dir), root);
}
