//! Commit history traversal
//!
//! - `rev_list`: the first-parent history of a commit, and the history
//!   reachable from every branch
//!
//! ## Algorithm
//!
//! The first-parent walk simply follows `parent1` back to the root commit.
//! The global walk is a depth-first search over both parents, seeded with the
//! branch heads in name order, that visits every reachable commit exactly
//! once even when histories merge.

pub mod rev_list;
