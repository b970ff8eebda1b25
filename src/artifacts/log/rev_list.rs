use crate::areas::database::Database;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::HashSet;

/// First-parent history, newest first
pub struct RevList<'r> {
    database: &'r Database,
    current_commit_oid: Option<ObjectId>,
}

impl<'r> RevList<'r> {
    pub fn new(database: &'r Database, start: ObjectId) -> Self {
        RevList {
            database,
            current_commit_oid: Some(start),
        }
    }
}

impl Iterator for RevList<'_> {
    type Item = anyhow::Result<Commit>;

    fn next(&mut self) -> Option<Self::Item> {
        let commit_oid = self.current_commit_oid.take()?;

        match self.database.load_commit(&commit_oid) {
            Ok(commit) => {
                // Move to the parent commit for the next iteration
                self.current_commit_oid = commit.parent().cloned();
                Some(Ok(commit))
            }
            Err(error) => Some(Err(error)),
        }
    }
}

/// Every commit reachable from a set of starting points, each exactly once
///
/// Traversal is depth-first; a commit's first parent is explored before its
/// second parent, and starting points are explored in the given order.
pub struct GlobalRevList<'r> {
    database: &'r Database,
    pending: Vec<ObjectId>,
    visited: HashSet<ObjectId>,
}

impl<'r> GlobalRevList<'r> {
    pub fn new(database: &'r Database, starts: impl IntoIterator<Item = ObjectId>) -> Self {
        let mut pending = starts.into_iter().collect::<Vec<_>>();
        pending.reverse();

        GlobalRevList {
            database,
            pending,
            visited: HashSet::new(),
        }
    }
}

impl Iterator for GlobalRevList<'_> {
    type Item = anyhow::Result<Commit>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(commit_oid) = self.pending.pop() {
            if !self.visited.insert(commit_oid.clone()) {
                continue;
            }

            return match self.database.load_commit(&commit_oid) {
                Ok(commit) => {
                    self.pending.extend(commit.second_parent().cloned());
                    self.pending.extend(commit.parent().cloned());
                    Some(Ok(commit))
                }
                Err(error) => Some(Err(error)),
            };
        }

        None
    }
}
