//! Gitlet index file format
//!
//! The index file holds the whole mutable repository state: head, current branch,
//! branch table, staged files and removal marks.
//!
//! ## File Format (Version 1)
//!
//! ```text
//! Header (20 bytes):
//!   - Signature: "GLIX" (4 bytes)
//!   - Version: 1 (4 bytes)
//!   - Branch count, staged count, removed count (4 bytes each)
//!
//! Body:
//!   - Index id, head commit id (20 bytes each)
//!   - Current branch name (length-prefixed)
//!   - Branches: name, commit id
//!   - Staged files: path, blob id
//!   - Removed files: path
//!
//! Checksum (20 bytes):
//!   - SHA-1 hash of all preceding bytes
//! ```

pub mod checksum;
pub mod index_header;

/// Size of SHA-1 checksum in bytes
pub const CHECKSUM_SIZE: usize = 20;

/// Size of index header in bytes
pub const HEADER_SIZE: usize = 20;

/// Magic signature identifying index files
pub const SIGNATURE: &str = "GLIX";

/// Index file format version
pub const VERSION: u32 = 1;
