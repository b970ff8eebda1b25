use crate::common::command::{ROOT_DATE, empty_repository_dir, gitlet_stdout};
use crate::common::file::count_objects;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn init_creates_repository_layout(
    empty_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let gitlet_dir = empty_repository_dir.path().join(".gitlet");

    for dir in ["info", "commit", "blob"] {
        assert!(gitlet_dir.join(dir).is_dir(), "missing .gitlet/{dir}");
    }
    assert_eq!(count_objects(empty_repository_dir.path(), "info"), 1);
    assert_eq!(count_objects(empty_repository_dir.path(), "commit"), 1);
    assert_eq!(count_objects(empty_repository_dir.path(), "blob"), 0);

    let log = gitlet_stdout(empty_repository_dir.path(), &["log"]);
    let lines = log.lines().collect::<Vec<_>>();
    assert_eq!(lines[0], "===");
    assert!(lines[1].starts_with("commit "));
    assert_eq!(lines[2], format!("Date: {ROOT_DATE}"));
    assert_eq!(lines[3], "initial commit");

    Ok(())
}

#[rstest]
fn root_commit_id_is_the_same_in_every_repository(
    #[from(empty_repository_dir)] first: TempDir,
    #[from(empty_repository_dir)] second: TempDir,
) {
    assert_eq!(
        crate::common::command::head_commit_id(first.path()),
        crate::common::command::head_commit_id(second.path())
    );
}
