//! Checkout migration and conflict detection
//!
//! Moving the working directory from the head commit to a target commit:
//!
//! 1. Files tracked by head or staged, but absent from the target, are deleted
//! 2. Every file of the target snapshot is written
//! 3. Untracked files are left alone, unless the target would overwrite one,
//!    which is a conflict that aborts the checkout

use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::inspector::Inspector;
use crate::errors::GitletError;
use bytes::Bytes;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;
use tracing::{debug, warn};

pub struct Migration<'r> {
    repository: &'r Repository,
    /// Working files to delete
    deletions: BTreeSet<PathBuf>,
    /// Working files to (re)write, with the blob holding their content
    writes: BTreeMap<PathBuf, ObjectId>,
    /// Untracked working files the target would overwrite
    conflicts: BTreeSet<PathBuf>,
}

impl<'r> Migration<'r> {
    /// Plan the move from `head` to `target` without touching anything
    pub fn plan(
        repository: &'r Repository,
        index: &Index,
        head: &Commit,
        target: &Commit,
    ) -> anyhow::Result<Self> {
        let workspace = repository.workspace();

        let conflicts = workspace
            .list_files()?
            .into_iter()
            .filter(|path| Inspector::is_untracked(path, index, head) && target.tracks(path))
            .collect::<BTreeSet<_>>();

        let deletions = head
            .snapshot()
            .keys()
            .chain(index.staged().keys())
            .filter(|path| !target.tracks(path) && workspace.exists(path))
            .cloned()
            .collect::<BTreeSet<_>>();

        let writes = target.snapshot().clone();

        debug!(
            deletions = deletions.len(),
            writes = writes.len(),
            conflicts = conflicts.len(),
            "planned checkout migration"
        );

        Ok(Migration {
            repository,
            deletions,
            writes,
            conflicts,
        })
    }

    pub fn deletions(&self) -> &BTreeSet<PathBuf> {
        &self.deletions
    }

    pub fn writes(&self) -> &BTreeMap<PathBuf, ObjectId> {
        &self.writes
    }

    pub fn check_conflicts(&self) -> anyhow::Result<()> {
        if self.conflicts.is_empty() {
            return Ok(());
        }

        for path in &self.conflicts {
            warn!(path = %path.display(), "untracked file would be overwritten by checkout");
        }

        Err(GitletError::UntrackedFileConflict.into())
    }

    pub fn load_blob_data(&self, oid: &ObjectId) -> anyhow::Result<Bytes> {
        let blob = self.repository.database().load_blob(oid)?;

        Ok(blob.content().clone())
    }

    /// Refuse on conflicts, otherwise rewrite the working directory
    pub fn apply_changes(&self) -> anyhow::Result<()> {
        self.check_conflicts()?;
        self.repository.workspace().apply_migration(self)
    }
}
