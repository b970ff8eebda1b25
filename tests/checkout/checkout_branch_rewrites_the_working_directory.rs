use crate::common::command::{
    commit_file, gitlet_commit, gitlet_stdout, head_commit_id, init_repository_dir,
    run_gitlet_command,
};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

/// master: 1.txt "uno", a/2.txt removed; feature: the initial snapshot plus feature.txt
fn diverge(dir: &std::path::Path) {
    run_gitlet_command(dir, &["branch", "feature"])
        .assert()
        .success();

    write_file(FileSpec::new(dir.join("1.txt"), "uno".to_string()));
    run_gitlet_command(dir, &["add", "1.txt"]).assert().success();
    run_gitlet_command(dir, &["rm", "a/2.txt"]).assert().success();
    gitlet_commit(dir, "master work").assert().success();

    run_gitlet_command(dir, &["checkout", "feature"])
        .assert()
        .success();
    commit_file(dir, "feature.txt", "feature", "feature work");
}

#[rstest]
fn checkout_branch_writes_and_deletes_files(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    diverge(dir);

    assert_eq!(read_file(&dir.join("1.txt")), "one");
    assert_eq!(read_file(&dir.join("a/2.txt")), "two");

    run_gitlet_command(dir, &["checkout", "master"])
        .assert()
        .success();

    assert_eq!(read_file(&dir.join("1.txt")), "uno");
    assert!(!dir.join("a/2.txt").exists());
    assert!(!dir.join("feature.txt").exists());
    assert_eq!(read_file(&dir.join("a/b/3.txt")), "three");

    let status = gitlet_stdout(dir, &["status"]);
    assert!(status.starts_with("=== Branches ===\nfeature\n*master\n\n"));
    assert!(status.ends_with(
        "=== Modifications Not Staged For Commit ===\n\n=== Untracked Files ===\n\n"
    ));
}

#[rstest]
fn checkout_branch_clears_the_stage(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    diverge(dir);

    write_file(FileSpec::new(dir.join("staged.txt"), "staged".to_string()));
    run_gitlet_command(dir, &["add", "staged.txt"]).assert().success();

    run_gitlet_command(dir, &["checkout", "master"])
        .assert()
        .success();

    assert!(!dir.join("staged.txt").exists());
    let status = gitlet_stdout(dir, &["status"]);
    assert!(status.contains("=== Staged Files ===\n\n"));
    assert!(status.contains("=== Removed Files ===\n\n"));
}

#[rstest]
fn checkout_branch_leaves_untracked_files_alone(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    diverge(dir);
    write_file(FileSpec::new(dir.join("notes.txt"), "notes".to_string()));

    run_gitlet_command(dir, &["checkout", "master"])
        .assert()
        .success();

    assert_eq!(read_file(&dir.join("notes.txt")), "notes");
}

#[rstest]
fn checkout_branch_at_the_same_commit_only_switches(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let head = head_commit_id(dir);
    run_gitlet_command(dir, &["branch", "feature"])
        .assert()
        .success();
    write_file(FileSpec::new(dir.join("1.txt"), "dirty".to_string()));

    run_gitlet_command(dir, &["checkout", "feature"])
        .assert()
        .success();

    assert_eq!(head_commit_id(dir), head);
    assert_eq!(read_file(&dir.join("1.txt")), "dirty");
    assert!(gitlet_stdout(dir, &["status"]).starts_with("=== Branches ===\n*feature\nmaster\n\n"));
}
