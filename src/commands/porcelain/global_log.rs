use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::log::rev_list::GlobalRevList;
use crate::commands::Command;
use crate::commands::porcelain::log::write_log_entry;

/// Show every commit reachable from any branch, each once
#[derive(Debug, Default)]
pub struct GlobalLogCommand;

impl Command for GlobalLogCommand {
    fn name(&self) -> &'static str {
        "global-log"
    }

    fn validate(&self, _repository: &Repository, _index: &Index) -> anyhow::Result<()> {
        Ok(())
    }

    fn execute(&self, repository: &Repository, index: &mut Index) -> anyhow::Result<()> {
        let color = repository.config().color;
        let mut writer = repository.writer();
        let branch_heads = index.branches().values().cloned();

        for commit in GlobalRevList::new(repository.database(), branch_heads) {
            write_log_entry(&mut **writer, &commit?, color)?;
        }

        Ok(())
    }
}
