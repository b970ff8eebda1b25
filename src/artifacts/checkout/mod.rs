//! Checkout planning
//!
//! Switching branches rewrites the working directory to the target commit's
//! snapshot. Every change is planned, and every untracked file in the way is
//! detected, before a single file is touched.

pub mod migration;
