//! Plumbing commands (low-level object operations)
//!
//! - `hash-object`: Compute a file's blob id, optionally storing the blob
//! - `cat-file`: Print a stored blob or commit

pub mod cat_file;
pub mod hash_object;
