use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::log::rev_list::GlobalRevList;
use crate::artifacts::objects::object::Object;
use crate::commands::Command;
use crate::errors::GitletError;
use derive_new::new;
use std::io::Write;

/// Print the id of every reachable commit whose message is exactly `message`
#[derive(Debug, new)]
pub struct FindCommand {
    message: String,
}

impl Command for FindCommand {
    fn name(&self) -> &'static str {
        "find"
    }

    fn validate(&self, _repository: &Repository, _index: &Index) -> anyhow::Result<()> {
        Ok(())
    }

    fn execute(&self, repository: &Repository, index: &mut Index) -> anyhow::Result<()> {
        let branch_heads = index.branches().values().cloned();
        let mut matches = Vec::new();

        for commit in GlobalRevList::new(repository.database(), branch_heads) {
            let commit = commit?;
            if commit.message() == self.message {
                matches.push(commit.object_id());
            }
        }

        if matches.is_empty() {
            return Err(GitletError::NoCommitWithMessage.into());
        }

        let mut writer = repository.writer();
        for commit_id in matches {
            writeln!(writer, "{}", commit_id)?;
        }

        Ok(())
    }
}
