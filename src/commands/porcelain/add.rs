use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::objects::object::Object;
use crate::commands::Command;
use crate::errors::GitletError;
use derive_new::new;
use tracing::debug;

#[derive(Debug, new)]
pub struct AddCommand {
    path: String,
}

impl Command for AddCommand {
    fn name(&self) -> &'static str {
        "add"
    }

    fn validate(&self, repository: &Repository, _index: &Index) -> anyhow::Result<()> {
        let path = repository.workspace().normalize_path(&self.path)?;

        if !repository.workspace().exists(&path) {
            return Err(GitletError::FileNotFound.into());
        }

        Ok(())
    }

    fn execute(&self, repository: &Repository, index: &mut Index) -> anyhow::Result<()> {
        let path = repository.workspace().normalize_path(&self.path)?;
        let blob = repository.workspace().parse_blob(&path)?;
        let blob_id = blob.object_id();

        // content head already records under any path: nothing to stage, nothing to remove
        let head = repository.head_commit(index)?;
        if head.snapshot().values().any(|tracked| tracked == &blob_id) {
            debug!(path = %path.display(), "content already in head, unstaging");
            index.unstage_file(&path);
            index.clear_removed(&path);
            return Ok(());
        }

        if index.staged_blob(&path) == Some(&blob_id) {
            return Ok(());
        }

        repository.database().store(&blob)?;
        index.stage_file(path, blob_id);

        Ok(())
    }
}
