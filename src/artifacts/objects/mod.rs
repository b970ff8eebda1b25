//! Gitlet object types and operations
//!
//! Every stored object is identified by the SHA-1 digest of its logical fields:
//!
//! - **Blob**: raw file content, identified by `Hash(content)`
//! - **Commit**: snapshot with metadata (message, timestamp, tracked blobs, parents),
//!   identified by `Hash(log, timestamp, blob ids in path order, parent1, parent2)`
//!
//! The on-disk encoding (`<type> <size>\0<body>`) is independent of the identity,
//! so the storage format can change without changing any object id.

use std::path::Path;

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;
pub mod object_type;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Canonical `/`-separated form of a tracked path.
///
/// Snapshot ordering, hashing and the persisted encodings all go through this
/// form so that the same tree of files yields the same ids on every platform.
pub fn path_key(path: &Path) -> String {
    path.components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
