use crate::common::command::{gitlet_stdout, init_repository_dir, run_gitlet_command};
use crate::common::file::{FileSpec, count_objects, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn adding_content_head_records_elsewhere_stages_nothing(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let blobs = count_objects(dir, "blob");

    write_file(FileSpec::new(dir.join("copy.txt"), "one".to_string()));
    run_gitlet_command(dir, &["add", "copy.txt"]).assert().success();

    assert_eq!(count_objects(dir, "blob"), blobs);
    let status = gitlet_stdout(dir, &["status"]);
    assert!(status.contains("=== Staged Files ===\n\n"));
    assert!(status.contains("=== Untracked Files ===\ncopy.txt\n"));
}

#[rstest]
fn adding_content_head_records_elsewhere_drops_a_prior_stage(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();

    write_file(FileSpec::new(dir.join("copy.txt"), "draft".to_string()));
    run_gitlet_command(dir, &["add", "copy.txt"]).assert().success();
    assert!(gitlet_stdout(dir, &["status"]).contains("=== Staged Files ===\ncopy.txt\n"));

    write_file(FileSpec::new(dir.join("copy.txt"), "two".to_string()));
    run_gitlet_command(dir, &["add", "copy.txt"]).assert().success();

    assert!(gitlet_stdout(dir, &["status"]).contains("=== Staged Files ===\n\n"));
}
