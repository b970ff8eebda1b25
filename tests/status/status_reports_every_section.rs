use crate::common::command::{init_repository_dir, run_gitlet_command};
use crate::common::file::{FileSpec, delete_path, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn status_reports_every_section(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();

    run_gitlet_command(dir, &["branch", "other"])
        .assert()
        .success();

    // staged, then edited again
    write_file(FileSpec::new(dir.join("1.txt"), "staged".to_string()));
    run_gitlet_command(dir, &["add", "1.txt"]).assert().success();
    write_file(FileSpec::new(dir.join("1.txt"), "edited after add".to_string()));

    // staged new file
    write_file(FileSpec::new(dir.join("new.txt"), "new".to_string()));
    run_gitlet_command(dir, &["add", "new.txt"]).assert().success();

    // removed
    run_gitlet_command(dir, &["rm", "a/b/3.txt"]).assert().success();

    // tracked and deleted without rm
    delete_path(&dir.join("a/2.txt"));

    write_file(FileSpec::new(dir.join("z-untracked.txt"), "z".to_string()));
    write_file(FileSpec::new(dir.join("b/untracked.txt"), "b".to_string()));

    let expected = "\
=== Branches ===
*master
other

=== Staged Files ===
1.txt
new.txt

=== Removed Files ===
a/b/3.txt

=== Modifications Not Staged For Commit ===
1.txt (modified)
a/2.txt (deleted)

=== Untracked Files ===
b/untracked.txt
z-untracked.txt

";

    run_gitlet_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::eq(expected));
}

#[rstest]
fn staged_file_deleted_from_disk_is_reported_deleted(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("new.txt"), "new".to_string()));
    run_gitlet_command(dir, &["add", "new.txt"]).assert().success();
    delete_path(&dir.join("new.txt"));

    run_gitlet_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "=== Modifications Not Staged For Commit ===\nnew.txt (deleted)\n\n",
        ));
}

#[rstest]
fn removed_then_recreated_file_is_not_untracked(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_gitlet_command(dir, &["rm", "1.txt"]).assert().success();
    write_file(FileSpec::new(dir.join("1.txt"), "one".to_string()));

    run_gitlet_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Removed Files ===\n1.txt\n\n"))
        .stdout(predicate::str::contains("=== Untracked Files ===\n\n"));
}
