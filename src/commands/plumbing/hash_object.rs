use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::objects::object::Object;
use crate::commands::Command;
use crate::errors::GitletError;
use derive_new::new;
use std::io::Write;

/// Print the blob id of a file, storing the blob when `write` is set
#[derive(Debug, new)]
pub struct HashObjectCommand {
    path: String,
    write: bool,
}

impl Command for HashObjectCommand {
    fn name(&self) -> &'static str {
        "hash-object"
    }

    // hashing alone works outside a repository
    fn requires_repository(&self) -> bool {
        self.write
    }

    fn validate(&self, repository: &Repository, _index: &Index) -> anyhow::Result<()> {
        let path = repository.workspace().normalize_path(&self.path)?;

        if !repository.workspace().exists(&path) {
            return Err(GitletError::FileNotFound.into());
        }

        Ok(())
    }

    fn execute(&self, repository: &Repository, _index: &mut Index) -> anyhow::Result<()> {
        let path = repository.workspace().normalize_path(&self.path)?;
        let blob = repository.workspace().parse_blob(&path)?;

        writeln!(repository.writer(), "{}", blob.object_id())?;

        if self.write {
            repository.database().store(&blob)?;
        }

        Ok(())
    }
}
