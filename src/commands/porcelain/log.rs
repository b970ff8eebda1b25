use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::log::rev_list::RevList;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::Object;
use crate::commands::Command;
use colored::Colorize;
use std::io::Write;

/// Show the first-parent history of head
#[derive(Debug, Default)]
pub struct LogCommand;

/// Write one history entry:
///
/// ```text
/// ===
/// commit <id>
/// Merge: <parent1> <parent2>
/// Date: <timestamp>
/// <message>
///
/// ```
///
/// The `Merge:` line only appears for merge commits.
pub(crate) fn write_log_entry(
    writer: &mut dyn Write,
    commit: &Commit,
    color: bool,
) -> anyhow::Result<()> {
    writeln!(writer, "===")?;

    let commit_line = format!("commit {}", commit.object_id());
    if color {
        writeln!(writer, "{}", commit_line.yellow())?;
    } else {
        writeln!(writer, "{}", commit_line)?;
    }

    if let (Some(parent1), Some(parent2)) = (commit.parent(), commit.second_parent()) {
        writeln!(
            writer,
            "Merge: {} {}",
            parent1.to_short_oid(),
            parent2.to_short_oid()
        )?;
    }

    writeln!(writer, "Date: {}", commit.readable_timestamp())?;
    writeln!(writer, "{}", commit.message())?;
    writeln!(writer)?;

    Ok(())
}

impl Command for LogCommand {
    fn name(&self) -> &'static str {
        "log"
    }

    fn validate(&self, _repository: &Repository, _index: &Index) -> anyhow::Result<()> {
        Ok(())
    }

    fn execute(&self, repository: &Repository, index: &mut Index) -> anyhow::Result<()> {
        let color = repository.config().color;
        let mut writer = repository.writer();

        for commit in RevList::new(repository.database(), index.head().clone()) {
            write_log_entry(&mut **writer, &commit?, color)?;
        }

        Ok(())
    }
}
