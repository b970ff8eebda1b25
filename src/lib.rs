//! Gitlet: a small, local, single-user version-control engine
//!
//! - `areas`: the object store, the repository index and the working directory
//! - `artifacts`: objects, revisions, history walks, status and checkout planning
//! - `commands`: the command set, each validated before it touches any state
//! - `config`: environment-driven settings
//! - `errors`: user-facing domain errors

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod config;
pub mod errors;
