use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::file_change::ModificationType;
use derive_new::new;
use std::path::Path;

#[derive(new)]
pub struct Inspector<'r> {
    repository: &'r Repository,
}

impl<'r> Inspector<'r> {
    /// A file is untracked when neither staged nor recorded in the head commit.
    ///
    /// Removal marks play no part: a file removed with `rm` and then recreated
    /// is still known to the head commit.
    pub fn is_untracked(path: &Path, index: &Index, head: &Commit) -> bool {
        index.staged_blob(path).is_none() && !head.tracks(path)
    }

    pub fn is_content_changed(&self, path: &Path, oid: &ObjectId) -> anyhow::Result<bool> {
        let blob = self.repository.workspace().parse_blob(path)?;

        Ok(&blob.object_id() != oid)
    }

    /// Compare a staged file with its working copy
    pub fn check_staged_against_workspace(
        &self,
        path: &Path,
        staged_oid: &ObjectId,
    ) -> anyhow::Result<Option<ModificationType>> {
        if !self.repository.workspace().exists(path) {
            return Ok(Some(ModificationType::Deleted));
        }

        if self.is_content_changed(path, staged_oid)? {
            return Ok(Some(ModificationType::Modified));
        }

        Ok(None)
    }

    /// Compare a file tracked by the head commit with its working copy
    ///
    /// Staged files are left to [`Self::check_staged_against_workspace`]. A
    /// deletion only counts when the file was not marked removed.
    pub fn check_head_against_workspace(
        &self,
        path: &Path,
        head_oid: &ObjectId,
        index: &Index,
    ) -> anyhow::Result<Option<ModificationType>> {
        if index.staged_blob(path).is_some() {
            return Ok(None);
        }

        if !self.repository.workspace().exists(path) {
            return Ok((!index.is_removed(path)).then_some(ModificationType::Deleted));
        }

        if self.is_content_changed(path, head_oid)? {
            return Ok(Some(ModificationType::Modified));
        }

        Ok(None)
    }
}
