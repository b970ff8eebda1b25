use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::objects::path_key;
use crate::artifacts::status::file_change::ModificationType;
use crate::artifacts::status::inspector::Inspector;
use colored::Colorize;
use derive_new::new;
use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;

pub type FileSet = BTreeSet<String>;
pub type ChangeSet = BTreeMap<String, ModificationType>;

/// Everything `status` reports, keyed by `/`-separated path so every section
/// sorts the same way
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusInfo {
    pub(crate) branches: Vec<String>,
    pub(crate) current_branch: String,
    pub(crate) staged: FileSet,
    pub(crate) removed: FileSet,
    pub(crate) modified: ChangeSet,
    pub(crate) untracked: FileSet,
}

impl StatusInfo {
    pub fn staged(&self) -> &FileSet {
        &self.staged
    }

    pub fn removed(&self) -> &FileSet {
        &self.removed
    }

    pub fn modified(&self) -> &ChangeSet {
        &self.modified
    }

    pub fn untracked(&self) -> &FileSet {
        &self.untracked
    }

    pub fn write_to(&self, writer: &mut dyn Write, color: bool) -> anyhow::Result<()> {
        let branches = self
            .branches
            .iter()
            .map(|branch| {
                if *branch == self.current_branch {
                    let line = format!("*{}", branch);
                    if color { line.green().to_string() } else { line }
                } else {
                    branch.clone()
                }
            })
            .collect::<Vec<_>>();
        Self::write_section(writer, "Branches", branches, color)?;

        let staged = self
            .staged
            .iter()
            .map(|path| if color { path.green().to_string() } else { path.clone() })
            .collect::<Vec<_>>();
        Self::write_section(writer, "Staged Files", staged, color)?;

        let removed = self
            .removed
            .iter()
            .map(|path| if color { path.green().to_string() } else { path.clone() })
            .collect::<Vec<_>>();
        Self::write_section(writer, "Removed Files", removed, color)?;

        let modified = self
            .modified
            .iter()
            .map(|(path, change)| change.describe(path, color))
            .collect::<Vec<_>>();
        Self::write_section(writer, "Modifications Not Staged For Commit", modified, color)?;

        let untracked = self
            .untracked
            .iter()
            .map(|path| if color { path.red().to_string() } else { path.clone() })
            .collect::<Vec<_>>();
        Self::write_section(writer, "Untracked Files", untracked, color)?;

        Ok(())
    }

    fn write_section(
        writer: &mut dyn Write,
        title: &str,
        lines: Vec<String>,
        color: bool,
    ) -> anyhow::Result<()> {
        let header = format!("=== {} ===", title);
        if color {
            writeln!(writer, "{}", header.bold())?;
        } else {
            writeln!(writer, "{}", header)?;
        }

        for line in lines {
            writeln!(writer, "{}", line)?;
        }
        writeln!(writer)?;

        Ok(())
    }
}

#[derive(new)]
pub struct Status<'r> {
    repository: &'r Repository,
}

impl<'r> Status<'r> {
    pub fn initialize(&self, index: &Index) -> anyhow::Result<StatusInfo> {
        let head = self.repository.database().load_commit(index.head())?;
        let inspector = Inspector::new(self.repository);

        let branches = index
            .branches()
            .keys()
            .map(|branch| branch.to_string())
            .collect::<Vec<_>>();

        let staged = index
            .staged()
            .keys()
            .map(|path| path_key(path))
            .collect::<FileSet>();
        let removed = index
            .removed()
            .iter()
            .map(|path| path_key(path))
            .collect::<FileSet>();

        let mut modified = ChangeSet::new();
        for (path, oid) in index.staged() {
            if let Some(change) = inspector.check_staged_against_workspace(path, oid)? {
                modified.insert(path_key(path), change);
            }
        }
        for (path, oid) in head.snapshot() {
            if let Some(change) = inspector.check_head_against_workspace(path, oid, index)? {
                modified.insert(path_key(path), change);
            }
        }

        let untracked = self
            .repository
            .workspace()
            .list_files()?
            .into_iter()
            .filter(|path| Inspector::is_untracked(path, index, &head))
            .map(|path| path_key(&path))
            .collect::<FileSet>();

        Ok(StatusInfo {
            branches,
            current_branch: index.current_branch().to_string(),
            staged,
            removed,
            modified,
            untracked,
        })
    }
}
