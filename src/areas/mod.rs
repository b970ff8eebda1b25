//! Core repository components
//!
//! - `database`: Object store for blobs and commits
//! - `index`: Head, branches, staged files and removal marks
//! - `repository`: Ties the areas together and runs commands against them
//! - `workspace`: Working directory file system operations

pub mod database;
pub mod index;
pub mod repository;
pub mod workspace;
