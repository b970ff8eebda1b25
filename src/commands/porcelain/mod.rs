//! Porcelain commands (user-facing gitlet operations)
//!
//! ## Commands
//!
//! - `init`: Initialize a new repository
//! - `add`: Stage a file for commit
//! - `commit`: Create a new commit
//! - `rm`: Unstage a file or mark it for removal
//! - `log`: Show the first-parent history of head
//! - `global-log`: Show every commit reachable from a branch
//! - `find`: Find commits by message
//! - `status`: Show working tree status
//! - `branch`/`rm-branch`: Create or delete branches
//! - `checkout`: Switch branches or restore files

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod find;
pub mod global_log;
pub mod init;
pub mod log;
pub mod rm;
pub mod rm_branch;
pub mod status;
