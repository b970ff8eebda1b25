use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::commands::Command;
use crate::errors::GitletError;
use derive_new::new;

/// Unstage a file, or stop tracking it from the next commit on
#[derive(Debug, new)]
pub struct RmCommand {
    path: String,
}

impl Command for RmCommand {
    fn name(&self) -> &'static str {
        "rm"
    }

    fn validate(&self, repository: &Repository, index: &Index) -> anyhow::Result<()> {
        let path = repository.workspace().normalize_path(&self.path)?;
        let head = repository.head_commit(index)?;

        if index.staged_blob(&path).is_some() || head.tracks(&path) {
            return Ok(());
        }

        if repository.workspace().exists(&path) {
            Err(GitletError::NoReasonToRemove.into())
        } else {
            Err(GitletError::FileNotFound.into())
        }
    }

    fn execute(&self, repository: &Repository, index: &mut Index) -> anyhow::Result<()> {
        let path = repository.workspace().normalize_path(&self.path)?;
        let head = repository.head_commit(index)?;

        index.unstage_file(&path);

        if head.tracks(&path) {
            repository.workspace().remove_file(&path)?;
            index.mark_removed(path);
        }

        Ok(())
    }
}
