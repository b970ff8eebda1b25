use crate::common::command::repository_dir;
use crate::common::file::{FileSpec, write_file};
use crate::common::repository::open_repository;
use assert_fs::TempDir;
use gitlet::commands::porcelain::add::AddCommand;
use gitlet::commands::porcelain::commit::CommitCommand;
use gitlet::commands::porcelain::init::InitCommand;
use gitlet::commands::porcelain::log::LogCommand;
use gitlet::commands::porcelain::status::StatusCommand;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[tokio::test]
async fn commands_share_one_repository_handle(repository_dir: TempDir) -> anyhow::Result<()> {
    let dir = repository_dir.path();
    let (repository, writer) = open_repository(dir);

    repository.run(&InitCommand).await?;
    assert!(repository.is_initialized());

    write_file(FileSpec::new(dir.join("hello.txt"), "hello".to_string()));
    repository
        .run(&AddCommand::new("hello.txt".to_string()))
        .await?;
    repository
        .run(&CommitCommand::new("say hello".to_string()))
        .await?;
    writer.take();

    repository.run(&LogCommand).await?;
    let log = writer.take();
    let dates = log
        .lines()
        .filter(|line| line.starts_with("Date: "))
        .collect::<Vec<_>>();
    assert_eq!(
        dates,
        vec![
            "Date: Sun Jan 1 12:00:00 2023 +0000",
            "Date: Thu Jan 1 00:00:00 1970 +0000",
        ]
    );

    repository.run(&StatusCommand).await?;
    assert!(writer.take().starts_with("=== Branches ===\n*master\n\n=== Staged Files ===\n\n"));

    Ok(())
}

#[rstest]
#[tokio::test]
async fn head_commit_follows_commits(repository_dir: TempDir) -> anyhow::Result<()> {
    let dir = repository_dir.path();
    let (repository, _writer) = open_repository(dir);
    repository.run(&InitCommand).await?;

    write_file(FileSpec::new(dir.join("a.txt"), "a".to_string()));
    repository.run(&AddCommand::new("a.txt".to_string())).await?;
    repository
        .run(&CommitCommand::new("add a".to_string()))
        .await?;

    let index = repository.index();
    let mut index = index.lock().await;
    index.rehydrate()?;
    let head = repository.head_commit(&index)?;

    assert_eq!(head.message(), "add a");
    assert!(head.tracks(std::path::Path::new("a.txt")));
    assert!(index.staged().is_empty());

    Ok(())
}
