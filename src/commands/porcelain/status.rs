use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::commands::Command;

#[derive(Debug, Default)]
pub struct StatusCommand;

impl Command for StatusCommand {
    fn name(&self) -> &'static str {
        "status"
    }

    fn validate(&self, _repository: &Repository, _index: &Index) -> anyhow::Result<()> {
        Ok(())
    }

    fn execute(&self, repository: &Repository, index: &mut Index) -> anyhow::Result<()> {
        let status = repository.status().initialize(index)?;

        let mut writer = repository.writer();
        status.write_to(&mut **writer, repository.config().color)
    }
}
