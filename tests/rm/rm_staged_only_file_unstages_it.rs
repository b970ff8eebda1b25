use crate::common::command::{gitlet_stdout, init_repository_dir, run_gitlet_command};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn rm_staged_only_file_unstages_it(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("new.txt"), "new".to_string()));
    run_gitlet_command(dir, &["add", "new.txt"]).assert().success();

    run_gitlet_command(dir, &["rm", "new.txt"]).assert().success();

    assert_eq!(read_file(&dir.join("new.txt")), "new");
    let status = gitlet_stdout(dir, &["status"]);
    assert!(status.contains("=== Staged Files ===\n\n"));
    assert!(status.contains("=== Removed Files ===\n\n"));
    assert!(status.contains("=== Untracked Files ===\nnew.txt\n"));
}
