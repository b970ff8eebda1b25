use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::objects::blob::Blob;
use anyhow::Context;
use bytes::Bytes;
use std::collections::BTreeSet;
use std::io::Write;
use std::path::{Component, Path, PathBuf};
use tracing::trace;
use walkdir::WalkDir;

const IGNORED_PATHS: [&str; 1] = [".gitlet"];

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn parse_blob(&self, path: &Path) -> anyhow::Result<Blob> {
        let data = self.read_file(path)?;
        Ok(Blob::new(data))
    }

    /// Every regular file under the root, relative to it, outside `.gitlet`
    pub fn list_files(&self) -> anyhow::Result<BTreeSet<PathBuf>> {
        let mut files = BTreeSet::new();

        let walker = WalkDir::new(&self.path)
            .min_depth(1)
            .into_iter()
            .filter_entry(|entry| !Self::is_ignored(entry.path()));

        for entry in walker {
            let entry = entry.with_context(|| {
                format!("Unable to walk working directory {}", self.path.display())
            })?;

            if entry.file_type().is_file()
                && let Ok(relative) = entry.path().strip_prefix(self.path.as_ref())
            {
                files.insert(relative.to_path_buf());
            }
        }

        Ok(files)
    }

    fn is_ignored(path: &Path) -> bool {
        path.file_name()
            .map(|name| IGNORED_PATHS.contains(&name.to_string_lossy().as_ref()))
            .unwrap_or(false)
    }

    /// Resolve a user-supplied path to a path relative to the root
    ///
    /// Relative inputs are taken relative to the root. `.` and `..` are folded
    /// lexically; paths escaping the root are rejected.
    pub fn normalize_path(&self, raw: &str) -> anyhow::Result<PathBuf> {
        let raw = Path::new(raw);
        let relative = if raw.is_absolute() {
            raw.strip_prefix(self.path.as_ref())
                .with_context(|| format!("{} is outside the repository", raw.display()))?
        } else {
            raw
        };

        let mut normalized = PathBuf::new();
        for component in relative.components() {
            match component {
                Component::Normal(part) => normalized.push(part),
                Component::CurDir => {}
                Component::ParentDir => {
                    if !normalized.pop() {
                        anyhow::bail!("{} is outside the repository", raw.display());
                    }
                }
                Component::RootDir | Component::Prefix(_) => {
                    anyhow::bail!("{} is outside the repository", raw.display());
                }
            }
        }

        Ok(normalized)
    }

    pub fn exists(&self, file_path: &Path) -> bool {
        self.path.join(file_path).is_file()
    }

    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<Bytes> {
        let full_path = self.path.join(file_path);

        let content = std::fs::read(&full_path)
            .with_context(|| format!("Unable to read file {}", full_path.display()))?;

        Ok(content.into())
    }

    /// Write `data` to `file_path`, creating missing parent directories
    pub fn write_file(&self, file_path: &Path, data: &[u8]) -> anyhow::Result<()> {
        let full_path = self.path.join(file_path);

        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {:?}", parent))?;
        }

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&full_path)
            .with_context(|| format!("Failed to open file: {:?}", file_path))?;

        file.write_all(data)
            .with_context(|| format!("Failed to write to file: {:?}", file_path))?;
        trace!(path = %file_path.display(), "wrote working file");

        Ok(())
    }

    /// Delete `file_path` if present, then prune parent directories it left empty
    pub fn remove_file(&self, file_path: &Path) -> anyhow::Result<()> {
        let full_path = self.path.join(file_path);

        if full_path.is_file() {
            std::fs::remove_file(&full_path)
                .with_context(|| format!("Failed to remove file: {:?}", file_path))?;
            trace!(path = %file_path.display(), "removed working file");
        }

        let mut parent = file_path.parent();
        while let Some(dir) = parent {
            if dir.as_os_str().is_empty() {
                break;
            }

            let dir_path = self.path.join(dir);
            let is_empty = std::fs::read_dir(&dir_path)
                .map(|mut entries| entries.next().is_none())
                .unwrap_or(false);
            if !is_empty {
                break;
            }

            std::fs::remove_dir(&dir_path)
                .with_context(|| format!("Failed to remove directory: {:?}", dir))?;
            parent = dir.parent();
        }

        Ok(())
    }

    // Deletions go first so that a file replacing a pruned directory can be written.
    pub fn apply_migration(&self, migration: &Migration) -> anyhow::Result<()> {
        migration
            .deletions()
            .iter()
            .map(|file_path| self.remove_file(file_path))
            .collect::<Result<Vec<()>, _>>()?;

        migration
            .writes()
            .iter()
            .map(|(file_path, blob_id)| {
                let data = migration.load_blob_data(blob_id)?;
                self.write_file(file_path, &data)
            })
            .collect::<Result<Vec<()>, _>>()?;

        Ok(())
    }
}
