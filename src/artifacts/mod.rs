//! Gitlet data structures and algorithms
//!
//! This module contains the core types and algorithms:
//!
//! - `branch`: Branch names and revision (commit id prefix) resolution
//! - `checkout`: Checkout planning and untracked-file conflict detection
//! - `core`: Shared utilities (pager wrapper)
//! - `index`: On-disk index file format helpers
//! - `log`: Commit history traversal
//! - `objects`: Object types (blob, commit)
//! - `status`: Working tree status inspection

pub mod branch;
pub mod checkout;
pub mod core;
pub mod index;
pub mod log;
pub mod objects;
pub mod status;
