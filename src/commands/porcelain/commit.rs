use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::Object;
use crate::commands::Command;
use crate::errors::GitletError;
use derive_new::new;
use tracing::info;

#[derive(Debug, new)]
pub struct CommitCommand {
    message: String,
}

impl Command for CommitCommand {
    fn name(&self) -> &'static str {
        "commit"
    }

    fn validate(&self, _repository: &Repository, index: &Index) -> anyhow::Result<()> {
        if self.message.is_empty() {
            return Err(GitletError::EmptyMessage.into());
        }

        if index.staged().is_empty() && index.removed().is_empty() {
            return Err(GitletError::NothingToCommit.into());
        }

        Ok(())
    }

    fn execute(&self, repository: &Repository, index: &mut Index) -> anyhow::Result<()> {
        let parent = repository.head_commit(index)?;

        let mut snapshot = parent.snapshot().clone();
        for path in index.removed() {
            snapshot.remove(path);
        }
        for (path, blob_id) in index.staged() {
            snapshot.insert(path.clone(), blob_id.clone());
        }

        let commit = Commit::new(
            self.message.clone(),
            repository.config().commit_timestamp(),
            snapshot,
            Some(parent.object_id()),
            None,
        );
        let commit_id = commit.object_id();
        repository.database().store(&commit)?;

        index.set_head(commit_id.clone());
        index.record_branch(index.current_branch().clone(), commit_id.clone());
        index.clear_stage();

        info!(
            commit = %commit_id.to_short_oid(),
            branch = %index.current_branch(),
            "created commit"
        );

        Ok(())
    }
}
