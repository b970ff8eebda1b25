use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit::Commit;
use crate::commands::Command;
use crate::errors::GitletError;
use anyhow::Context;
use tracing::info;

#[derive(Debug, Default)]
pub struct InitCommand;

impl Command for InitCommand {
    fn name(&self) -> &'static str {
        "init"
    }

    fn requires_repository(&self) -> bool {
        false
    }

    fn validate(&self, repository: &Repository, _index: &Index) -> anyhow::Result<()> {
        if repository.is_initialized() {
            return Err(GitletError::AlreadyInitialized.into());
        }

        Ok(())
    }

    fn execute(&self, repository: &Repository, index: &mut Index) -> anyhow::Result<()> {
        repository
            .database()
            .initialize()
            .context("Failed to create .gitlet object directories")?;
        std::fs::create_dir_all(index.path()).context("Failed to create .gitlet/info directory")?;

        let root = Commit::root();
        repository.database().store(&root)?;
        index.initialize(&root, BranchName::default_branch());

        info!(path = %repository.path().display(), "initialized repository");

        Ok(())
    }
}
