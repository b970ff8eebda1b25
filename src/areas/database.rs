use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{Object, ObjectBox, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use bytes::Bytes;
use fake::rand;
use std::io::{BufRead, Cursor, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Append-only, content-addressed object store rooted at `.gitlet`
///
/// Every kind of object lives in its own flat directory (`blob/`, `commit/`),
/// one file per id. Objects are never updated nor deleted.
#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn objects_dir(&self, object_type: ObjectType) -> PathBuf {
        self.path.join(object_type.directory())
    }

    /// Create the per-kind object directories.
    pub fn initialize(&self) -> anyhow::Result<()> {
        for object_type in [ObjectType::Blob, ObjectType::Commit] {
            let dir = self.objects_dir(object_type);
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("Unable to create object directory {}", dir.display()))?;
        }

        Ok(())
    }

    pub fn contains(&self, object_type: ObjectType, object_id: &ObjectId) -> bool {
        self.objects_dir(object_type)
            .join(object_id.as_str())
            .is_file()
    }

    /// Store `object` unless an object with the same id is already present.
    ///
    /// Returns `true` when the object was already stored.
    pub fn store(&self, object: &impl Object) -> anyhow::Result<bool> {
        let object_path = self.path.join(object.object_path());

        if object_path.exists() {
            trace!(oid = %object.object_id(), "object already stored");
            return Ok(true);
        }

        let object_content = object.serialize()?;
        self.write_object(object_path, object_content)?;
        debug!(
            oid = %object.object_id(),
            kind = %object.object_type(),
            "stored object"
        );

        Ok(false)
    }

    pub fn load_blob(&self, object_id: &ObjectId) -> anyhow::Result<Blob> {
        let object_reader = self.parse_object_as_bytes(ObjectType::Blob, object_id)?;
        Blob::deserialize(object_reader)
    }

    pub fn load_commit(&self, object_id: &ObjectId) -> anyhow::Result<Commit> {
        let object_reader = self.parse_object_as_bytes(ObjectType::Commit, object_id)?;
        Commit::deserialize(object_reader)
    }

    /// Load whichever kind of object is stored under `object_id`, if any.
    pub fn parse_object(&self, object_id: &ObjectId) -> anyhow::Result<Option<ObjectBox>> {
        if self.contains(ObjectType::Commit, object_id) {
            let commit = self.load_commit(object_id)?;
            return Ok(Some(ObjectBox::Commit(Box::new(commit))));
        }

        if self.contains(ObjectType::Blob, object_id) {
            let blob = self.load_blob(object_id)?;
            return Ok(Some(ObjectBox::Blob(Box::new(blob))));
        }

        Ok(None)
    }

    fn parse_object_as_bytes(
        &self,
        expected_type: ObjectType,
        object_id: &ObjectId,
    ) -> anyhow::Result<impl BufRead> {
        let object_path = self.objects_dir(expected_type).join(object_id.as_str());
        let object_content = self.read_object(object_path)?;
        let mut object_reader = Cursor::new(object_content);

        let object_type = ObjectType::parse_object_type(&mut object_reader)?;
        if object_type != expected_type {
            anyhow::bail!(
                "object {} is a {}, not a {}",
                object_id.to_short_oid(),
                object_type,
                expected_type
            );
        }

        Ok(object_reader)
    }

    fn read_object(&self, object_path: PathBuf) -> anyhow::Result<Bytes> {
        let object_content = std::fs::read(&object_path).with_context(|| {
            format!("Unable to read object file {}", object_path.display())
        })?;

        Ok(object_content.into())
    }

    fn write_object(&self, object_path: PathBuf, object_content: Bytes) -> anyhow::Result<()> {
        let object_dir = object_path
            .parent()
            .context(format!("Invalid object path {}", object_path.display()))?;
        std::fs::create_dir_all(object_dir).with_context(|| {
            format!("Unable to create object directory {}", object_dir.display())
        })?;
        let temp_object_path = object_dir.join(Self::generate_temp_name());

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&temp_object_path)
            .with_context(|| {
                format!("Unable to open object file {}", temp_object_path.display())
            })?;

        file.write_all(&object_content).with_context(|| {
            format!("Unable to write object file {}", temp_object_path.display())
        })?;

        // rename the temp file to the object file to make it atomic
        std::fs::rename(&temp_object_path, &object_path).with_context(|| {
            format!("Unable to rename object file to {}", object_path.display())
        })?;

        Ok(())
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}", rand::random::<u32>())
    }

    /// Find all objects of `object_type` whose id starts with `prefix`.
    ///
    /// More than one match means the prefix is ambiguous; callers decide what
    /// that means for them.
    pub fn find_objects_by_prefix(
        &self,
        object_type: ObjectType,
        prefix: &str,
    ) -> anyhow::Result<Vec<ObjectId>> {
        let dir_path = self.objects_dir(object_type);
        let mut matches = Vec::new();

        if !dir_path.is_dir() {
            return Ok(matches);
        }

        for entry in std::fs::read_dir(&dir_path)? {
            let entry = entry?;
            let file_name = entry.file_name();
            let file_name_str = file_name.to_string_lossy();

            if file_name_str.starts_with(prefix)
                && let Ok(oid) = ObjectId::try_parse(file_name_str.into_owned())
            {
                matches.push(oid);
            }
        }

        matches.sort();
        Ok(matches)
    }
}
