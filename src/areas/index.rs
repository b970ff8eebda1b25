//! Gitlet repository index
//!
//! The index is the single mutable record of a repository. Besides the staging
//! area it owns the head pointer, the current branch and the branch table, so a
//! command only ever has to load and persist this one file.
//!
//! ## Index File Format
//!
//! The index file contains:
//! - Header: Signature, version, and entry counts
//! - Body: Index id, head, current branch, branches, staged and removed files
//! - Checksum: SHA-1 hash of the entire index for integrity verification
//!
//! ## Invariants
//!
//! - A path is never both staged and marked removed
//! - `head` and every branch point at stored commits

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::index::checksum::Checksum;
use crate::artifacts::index::index_header::IndexHeader;
use crate::artifacts::index::{HEADER_SIZE, SIGNATURE, VERSION};
use crate::artifacts::objects::commit::{Commit, INITIAL_COMMIT_MESSAGE};
use crate::artifacts::objects::object::{Object, Packable, Unpackable, write_str};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::path_key;
use crate::errors::GitletError;
use anyhow::{Context, anyhow};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Index {
    /// Directory holding the index file (`.gitlet/info`)
    path: Box<Path>,
    /// Identity of this repository's index, which also names its file
    id: ObjectId,
    head: ObjectId,
    current_branch: BranchName,
    branches: BTreeMap<BranchName, ObjectId>,
    staged: BTreeMap<PathBuf, ObjectId>,
    removed: BTreeSet<PathBuf>,
    /// Flag indicating if the index has been modified since loading
    changed: bool,
}

impl Index {
    /// Create a new empty index
    ///
    /// # Arguments
    ///
    /// * `path` - Directory the index file lives in (`.gitlet/info`)
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            id: ObjectId::default(),
            head: ObjectId::default(),
            current_branch: BranchName::default(),
            branches: BTreeMap::new(),
            staged: BTreeMap::new(),
            removed: BTreeSet::new(),
            changed: false,
        }
    }

    /// The id of the index created alongside `root` for `branch`
    pub fn index_id(root: &Commit, branch: &BranchName) -> ObjectId {
        ObjectId::digest([
            INITIAL_COMMIT_MESSAGE,
            root.readable_timestamp().as_str(),
            branch.as_ref(),
        ])
    }

    /// Reset to a fresh repository whose only commit is `root`
    pub fn initialize(&mut self, root: &Commit, branch: BranchName) {
        self.clear();
        self.id = Self::index_id(root, &branch);
        self.head = root.object_id();
        self.branches.insert(branch.clone(), root.object_id());
        self.current_branch = branch;
        self.changed = true;
    }

    /// Get the directory holding the index file
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_path(&self) -> PathBuf {
        self.path.join(self.id.as_str())
    }

    pub fn id(&self) -> &ObjectId {
        &self.id
    }

    pub fn head(&self) -> &ObjectId {
        &self.head
    }

    pub fn current_branch(&self) -> &BranchName {
        &self.current_branch
    }

    pub fn branches(&self) -> &BTreeMap<BranchName, ObjectId> {
        &self.branches
    }

    pub fn branch_commit(&self, name: &BranchName) -> Option<&ObjectId> {
        self.branches.get(name)
    }

    pub fn staged(&self) -> &BTreeMap<PathBuf, ObjectId> {
        &self.staged
    }

    pub fn staged_blob(&self, path: &Path) -> Option<&ObjectId> {
        self.staged.get(path)
    }

    pub fn removed(&self) -> &BTreeSet<PathBuf> {
        &self.removed
    }

    pub fn is_removed(&self, path: &Path) -> bool {
        self.removed.contains(path)
    }

    pub fn is_changed(&self) -> bool {
        self.changed
    }

    /// Stage `path` at `blob_id`, dropping any removal mark for it
    pub fn stage_file(&mut self, path: PathBuf, blob_id: ObjectId) {
        self.removed.remove(&path);
        self.staged.insert(path, blob_id);
        self.changed = true;
    }

    pub fn unstage_file(&mut self, path: &Path) {
        if self.staged.remove(path).is_some() {
            self.changed = true;
        }
    }

    /// Mark `path` for removal in the next commit, unstaging it
    pub fn mark_removed(&mut self, path: PathBuf) {
        self.staged.remove(&path);
        self.removed.insert(path);
        self.changed = true;
    }

    pub fn clear_removed(&mut self, path: &Path) {
        if self.removed.remove(path) {
            self.changed = true;
        }
    }

    /// Drop every staged entry and removal mark
    pub fn clear_stage(&mut self) {
        if !self.staged.is_empty() || !self.removed.is_empty() {
            self.staged.clear();
            self.removed.clear();
            self.changed = true;
        }
    }

    pub fn set_head(&mut self, commit_id: ObjectId) {
        self.head = commit_id;
        self.changed = true;
    }

    pub fn set_branch(&mut self, name: BranchName) {
        self.current_branch = name;
        self.changed = true;
    }

    /// Point `name` at `commit_id`, creating the branch if needed
    pub fn record_branch(&mut self, name: BranchName, commit_id: ObjectId) {
        self.branches.insert(name, commit_id);
        self.changed = true;
    }

    pub fn forget_branch(&mut self, name: &BranchName) {
        if self.branches.remove(name).is_some() {
            self.changed = true;
        }
    }

    fn clear(&mut self) {
        self.id = ObjectId::default();
        self.head = ObjectId::default();
        self.current_branch = BranchName::default();
        self.branches.clear();
        self.staged.clear();
        self.removed.clear();
        self.changed = false;
    }

    /// Locate the single index file under the info directory
    fn locate_index_file(&self) -> anyhow::Result<PathBuf> {
        if !self.path.is_dir() {
            return Err(GitletError::NotInitialized.into());
        }

        let mut candidates = std::fs::read_dir(&self.path)
            .with_context(|| format!("Unable to read {}", self.path.display()))?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file());

        candidates
            .next()
            .ok_or_else(|| GitletError::NotInitialized.into())
    }

    /// Load the index from disk
    ///
    /// Reads the index file, parses the header and body, and verifies the
    /// checksum. A missing index means the directory was never initialized.
    ///
    /// # Locking
    ///
    /// Acquires a shared lock on the index file during reading.
    pub fn rehydrate(&mut self) -> anyhow::Result<()> {
        let index_path = self.locate_index_file()?;

        let mut index_file = std::fs::OpenOptions::new()
            .read(true)
            .open(&index_path)
            .with_context(|| format!("Unable to open index {}", index_path.display()))?;
        let lock = file_guard::lock(&mut index_file, file_guard::Lock::Shared, 0, 1)?;

        self.clear();

        let mut reader = Checksum::new(lock);
        let header = self.parse_header(&mut reader)?;
        self.parse_body(&header, &mut reader)?;
        reader.verify()?;

        debug!(
            head = %self.head,
            branch = %self.current_branch,
            staged = self.staged.len(),
            removed = self.removed.len(),
            "loaded index"
        );

        Ok(())
    }

    fn parse_header(&self, reader: &mut Checksum) -> anyhow::Result<IndexHeader> {
        let header_bytes = reader.read(HEADER_SIZE)?;
        let header = IndexHeader::deserialize(header_bytes.as_ref())?;

        if header.marker != SIGNATURE {
            return Err(anyhow!("Invalid index file signature"));
        }

        if header.version != VERSION {
            return Err(anyhow!(
                "Unsupported index file version: {}",
                header.version
            ));
        }

        Ok(header)
    }

    fn parse_body(&mut self, header: &IndexHeader, reader: &mut Checksum) -> anyhow::Result<()> {
        self.id = reader.read_oid()?;
        self.head = reader.read_oid()?;
        self.current_branch = BranchName::try_parse(reader.read_str()?)?;

        for _ in 0..header.branches_count {
            let name = BranchName::try_parse(reader.read_str()?)?;
            let commit_id = reader.read_oid()?;
            self.branches.insert(name, commit_id);
        }

        for _ in 0..header.staged_count {
            let path = PathBuf::from(reader.read_str()?);
            let blob_id = reader.read_oid()?;
            self.staged.insert(path, blob_id);
        }

        for _ in 0..header.removed_count {
            self.removed.insert(PathBuf::from(reader.read_str()?));
        }

        Ok(())
    }

    fn serialize_body(&self) -> anyhow::Result<Vec<u8>> {
        let mut body = Vec::new();

        self.id.write_h40_to(&mut body)?;
        self.head.write_h40_to(&mut body)?;
        write_str(&mut body, self.current_branch.as_ref())?;

        for (name, commit_id) in &self.branches {
            write_str(&mut body, name.as_ref())?;
            commit_id.write_h40_to(&mut body)?;
        }

        for (path, blob_id) in &self.staged {
            write_str(&mut body, &path_key(path))?;
            blob_id.write_h40_to(&mut body)?;
        }

        for path in &self.removed {
            write_str(&mut body, &path_key(path))?;
        }

        Ok(body)
    }

    /// Persist the index under an exclusive lock
    pub fn write_updates(&mut self) -> anyhow::Result<()> {
        std::fs::create_dir_all(&self.path)
            .with_context(|| format!("Unable to create {}", self.path.display()))?;

        let index_path = self.file_path();
        let mut index_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&index_path)
            .with_context(|| format!("Unable to open index {}", index_path.display()))?;
        let lock = file_guard::lock(&mut index_file, file_guard::Lock::Exclusive, 0, 1)?;

        let mut writer = Checksum::new(lock);

        let header = IndexHeader {
            branches_count: u32::try_from(self.branches.len())?,
            staged_count: u32::try_from(self.staged.len())?,
            removed_count: u32::try_from(self.removed.len())?,
            ..IndexHeader::empty()
        };
        writer.write(&header.serialize()?)?;
        writer.write(&self.serialize_body()?)?;
        writer.write_checksum()?;

        self.changed = false;
        debug!(path = %index_path.display(), "wrote index");

        Ok(())
    }
}
