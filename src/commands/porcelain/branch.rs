use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::commands::Command;
use crate::errors::GitletError;
use derive_new::new;

/// Create a branch at head without switching to it
#[derive(Debug, new)]
pub struct BranchCommand {
    name: String,
}

impl Command for BranchCommand {
    fn name(&self) -> &'static str {
        "branch"
    }

    fn validate(&self, _repository: &Repository, index: &Index) -> anyhow::Result<()> {
        let branch_name = BranchName::try_parse(self.name.clone())?;

        if index.branch_commit(&branch_name).is_some() {
            return Err(GitletError::BranchExists.into());
        }

        Ok(())
    }

    fn execute(&self, _repository: &Repository, index: &mut Index) -> anyhow::Result<()> {
        let branch_name = BranchName::try_parse(self.name.clone())?;
        index.record_branch(branch_name, index.head().clone());

        Ok(())
    }
}
