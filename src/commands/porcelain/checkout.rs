use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::branch::HEAD_ALIAS;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::revision::Revision;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::inspector::Inspector;
use crate::commands::Command;
use crate::errors::GitletError;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutTarget {
    /// Switch to a branch, rewriting the working directory
    Branch(String),
    /// Restore one file from a commit, head when no revision is given
    File {
        revision: Option<String>,
        path: String,
    },
}

#[derive(Debug)]
pub struct CheckoutCommand {
    target: CheckoutTarget,
}

impl CheckoutCommand {
    pub fn branch(name: String) -> Self {
        CheckoutCommand {
            target: CheckoutTarget::Branch(name),
        }
    }

    pub fn file(revision: Option<String>, path: String) -> Self {
        CheckoutCommand {
            target: CheckoutTarget::File { revision, path },
        }
    }

    fn target_branch(name: &str, index: &Index) -> anyhow::Result<(BranchName, ObjectId)> {
        let branch_name =
            BranchName::try_parse(name.to_string()).map_err(|_| GitletError::NoSuchBranch)?;
        let commit_id = index
            .branch_commit(&branch_name)
            .cloned()
            .ok_or(GitletError::NoSuchBranch)?;

        Ok((branch_name, commit_id))
    }

    fn source_commit(
        repository: &Repository,
        index: &Index,
        revision: Option<&str>,
    ) -> anyhow::Result<Commit> {
        let revision = Revision::try_parse(revision.unwrap_or(HEAD_ALIAS))?;
        let commit_id = revision.resolve(repository.database(), index)?;

        repository.database().load_commit(&commit_id)
    }

    fn validate_branch(
        &self,
        repository: &Repository,
        index: &Index,
        name: &str,
    ) -> anyhow::Result<()> {
        let (branch_name, commit_id) = Self::target_branch(name, index)?;

        if &branch_name == index.current_branch() {
            return Err(GitletError::AlreadyOnBranch.into());
        }

        if &commit_id != index.head() {
            let head = repository.head_commit(index)?;
            let target = repository.database().load_commit(&commit_id)?;
            Migration::plan(repository, index, &head, &target)?.check_conflicts()?;
        }

        Ok(())
    }

    fn validate_file(
        &self,
        repository: &Repository,
        index: &Index,
        revision: Option<&str>,
        path: &str,
    ) -> anyhow::Result<()> {
        let commit = Self::source_commit(repository, index, revision)?;
        let path = repository.workspace().normalize_path(path)?;

        if !commit.tracks(&path) {
            return Err(GitletError::FileNotInCommit.into());
        }

        let head = repository.head_commit(index)?;
        if repository.workspace().exists(&path) && Inspector::is_untracked(&path, index, &head) {
            return Err(GitletError::UntrackedFileConflict.into());
        }

        Ok(())
    }

    fn checkout_branch(
        &self,
        repository: &Repository,
        index: &mut Index,
        name: &str,
    ) -> anyhow::Result<()> {
        let (branch_name, commit_id) = Self::target_branch(name, index)?;

        if &commit_id != index.head() {
            let head = repository.head_commit(index)?;
            let target = repository.database().load_commit(&commit_id)?;
            Migration::plan(repository, index, &head, &target)?.apply_changes()?;
            index.set_head(target.object_id());
        }

        index.clear_stage();
        info!(branch = %branch_name, head = %commit_id.to_short_oid(), "switched branch");
        index.set_branch(branch_name);

        Ok(())
    }

    fn checkout_file(
        &self,
        repository: &Repository,
        index: &Index,
        revision: Option<&str>,
        path: &str,
    ) -> anyhow::Result<()> {
        let commit = Self::source_commit(repository, index, revision)?;
        let path: PathBuf = repository.workspace().normalize_path(path)?;
        let blob_id = commit
            .tracked_blob(&path)
            .ok_or(GitletError::FileNotInCommit)?;

        let blob = repository.database().load_blob(blob_id)?;
        repository.workspace().write_file(&path, blob.content())?;

        Ok(())
    }
}

impl Command for CheckoutCommand {
    fn name(&self) -> &'static str {
        "checkout"
    }

    fn validate(&self, repository: &Repository, index: &Index) -> anyhow::Result<()> {
        match &self.target {
            CheckoutTarget::Branch(name) => self.validate_branch(repository, index, name),
            CheckoutTarget::File { revision, path } => {
                self.validate_file(repository, index, revision.as_deref(), path)
            }
        }
    }

    fn execute(&self, repository: &Repository, index: &mut Index) -> anyhow::Result<()> {
        match &self.target {
            CheckoutTarget::Branch(name) => self.checkout_branch(repository, index, name),
            CheckoutTarget::File { revision, path } => {
                self.checkout_file(repository, index, revision.as_deref(), path)
            }
        }
    }
}
