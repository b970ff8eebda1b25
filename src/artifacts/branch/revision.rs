use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::artifacts::branch::{COMMIT_PREFIX_REGEX, HEAD_ALIAS, REF_ALIASES};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::GitletError;
use anyhow::Context;
use tracing::debug;

/// A way of naming a commit on the command line.
///
/// Supports:
/// - `HEAD` and its alias `@`: the current head commit
/// - Full or abbreviated commit ids, 6 to 40 hexadecimal characters
///
/// An abbreviation is only accepted when exactly one stored commit starts with
/// it; unknown and ambiguous prefixes alike name no commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Revision {
    Head,
    CommitPrefix(String),
}

impl Revision {
    pub fn try_parse(revision: &str) -> anyhow::Result<Revision> {
        let resolved_name = *REF_ALIASES.get(revision).unwrap_or(&revision);
        if resolved_name == HEAD_ALIAS {
            return Ok(Revision::Head);
        }

        let is_prefix = regex::Regex::new(COMMIT_PREFIX_REGEX)
            .with_context(|| format!("invalid commit prefix regex: {COMMIT_PREFIX_REGEX}"))?
            .is_match(resolved_name);

        if is_prefix {
            Ok(Revision::CommitPrefix(resolved_name.to_ascii_lowercase()))
        } else {
            Err(GitletError::NoSuchCommit.into())
        }
    }

    pub fn resolve(&self, database: &Database, index: &Index) -> anyhow::Result<ObjectId> {
        match self {
            Revision::Head => Ok(index.head().clone()),
            Revision::CommitPrefix(prefix) => {
                let mut matches = database.find_objects_by_prefix(ObjectType::Commit, prefix)?;

                match matches.len() {
                    1 => Ok(matches.remove(0)),
                    0 => Err(GitletError::NoSuchCommit.into()),
                    candidates => {
                        debug!(prefix, candidates, "ambiguous commit prefix");
                        Err(GitletError::NoSuchCommit.into())
                    }
                }
            }
        }
    }
}
