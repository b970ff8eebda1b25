//! Gitlet command implementations
//!
//! Commands are organized into two categories following Git's architecture:
//!
//! - `plumbing`: Low-level object commands (hash-object, cat-file)
//! - `porcelain`: User-facing version control workflows (add, commit, log, etc.)
//!
//! Every command is split into `validate`, which checks all preconditions
//! without touching anything, and `execute`, which performs the change.
//! [`Repository::run`] drives both around loading and persisting the index.

use crate::areas::index::Index;
use crate::areas::repository::Repository;

pub mod plumbing;
pub mod porcelain;

pub trait Command {
    fn name(&self) -> &'static str;

    /// Whether the command needs an initialized repository (and its index)
    fn requires_repository(&self) -> bool {
        true
    }

    fn validate(&self, repository: &Repository, index: &Index) -> anyhow::Result<()>;

    fn execute(&self, repository: &Repository, index: &mut Index) -> anyhow::Result<()>;
}
