use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::commands::Command;
use crate::errors::GitletError;
use derive_new::new;

/// Delete a branch pointer; the commits it pointed at stay in the store
#[derive(Debug, new)]
pub struct RmBranchCommand {
    name: String,
}

impl RmBranchCommand {
    fn branch_name(&self, index: &Index) -> anyhow::Result<BranchName> {
        BranchName::try_parse(self.name.clone())
            .ok()
            .filter(|name| index.branch_commit(name).is_some())
            .ok_or_else(|| GitletError::NoSuchBranch.into())
    }
}

impl Command for RmBranchCommand {
    fn name(&self) -> &'static str {
        "rm-branch"
    }

    fn validate(&self, _repository: &Repository, index: &Index) -> anyhow::Result<()> {
        let branch_name = self.branch_name(index)?;

        if &branch_name == index.current_branch() {
            return Err(GitletError::CannotRemoveCurrentBranch.into());
        }

        Ok(())
    }

    fn execute(&self, _repository: &Repository, index: &mut Index) -> anyhow::Result<()> {
        let branch_name = self.branch_name(index)?;
        index.forget_branch(&branch_name);

        Ok(())
    }
}
