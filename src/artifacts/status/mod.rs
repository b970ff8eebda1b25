//! Working tree status inspection
//!
//! This module compares the working directory against the index and the head
//! commit.
//!
//! ## Components
//!
//! - `file_change`: How a tracked file differs from what gitlet expects
//! - `inspector`: Per-file checks (tracked, untracked, content changed)
//! - `status_info`: Status collection and rendering

pub mod file_change;
pub mod inspector;
pub mod status_info;
