use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::objects::object::ObjectBox;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::commands::Command;
use crate::errors::GitletError;
use derive_new::new;
use std::io::Write;

/// Print a stored object: blob content verbatim, commits as a description
#[derive(Debug, new)]
pub struct CatFileCommand {
    object_id: String,
}

impl CatFileCommand {
    /// Resolve a full id or an unambiguous prefix across both object kinds
    fn resolve(&self, repository: &Repository) -> anyhow::Result<ObjectId> {
        let prefix = self.object_id.to_ascii_lowercase();
        if prefix.is_empty() || !prefix.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(GitletError::NoSuchObject.into());
        }

        let mut matches = Vec::new();
        for object_type in [ObjectType::Blob, ObjectType::Commit] {
            matches.extend(
                repository
                    .database()
                    .find_objects_by_prefix(object_type, &prefix)?,
            );
        }

        if matches.len() == 1 {
            Ok(matches.remove(0))
        } else {
            Err(GitletError::NoSuchObject.into())
        }
    }

    fn load(&self, repository: &Repository) -> anyhow::Result<ObjectBox> {
        let object_id = self.resolve(repository)?;

        repository
            .database()
            .parse_object(&object_id)?
            .ok_or_else(|| GitletError::NoSuchObject.into())
    }
}

impl Command for CatFileCommand {
    fn name(&self) -> &'static str {
        "cat-file"
    }

    fn validate(&self, repository: &Repository, _index: &Index) -> anyhow::Result<()> {
        self.resolve(repository).map(|_| ())
    }

    fn execute(&self, repository: &Repository, _index: &mut Index) -> anyhow::Result<()> {
        let mut writer = repository.writer();

        match self.load(repository)? {
            ObjectBox::Blob(blob) => writer.write_all(blob.content())?,
            object @ ObjectBox::Commit(_) => writeln!(writer, "{}", object.display())?,
        }

        Ok(())
    }
}
