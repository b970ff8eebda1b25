//! Domain errors
//!
//! Every precondition a command can violate maps to exactly one variant with a
//! fixed, user-facing message. Commands raise them through `anyhow`, and the
//! binary recovers them with `downcast_ref::<GitletError>()` to print the message
//! on stdout. Anything that is not a `GitletError` (I/O, corrupt storage) is an
//! internal failure and keeps its `anyhow` context chain.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GitletError {
    #[error("A Gitlet version-control system already exists in the current directory.")]
    AlreadyInitialized,

    #[error("Not in an initialized Gitlet directory.")]
    NotInitialized,

    #[error("Incorrect operands.")]
    IncorrectOperands,

    #[error("File does not exist.")]
    FileNotFound,

    #[error("No changes added to the commit.")]
    NothingToCommit,

    #[error("Please enter a commit message.")]
    EmptyMessage,

    #[error("No reason to remove the file.")]
    NoReasonToRemove,

    #[error("No such branch exists.")]
    NoSuchBranch,

    #[error("A branch with that name already exists.")]
    BranchExists,

    #[error("Invalid branch name: {0}")]
    InvalidBranchName(String),

    #[error("No need to checkout the current branch.")]
    AlreadyOnBranch,

    #[error("Cannot remove the current branch.")]
    CannotRemoveCurrentBranch,

    #[error("No commit with that id exists.")]
    NoSuchCommit,

    #[error("No object with that id exists.")]
    NoSuchObject,

    #[error("File does not exist in that commit.")]
    FileNotInCommit,

    #[error("Found no commit with that message.")]
    NoCommitWithMessage,

    #[error("There is an untracked file in the way; delete it, or add and commit it first.")]
    UntrackedFileConflict,
}
