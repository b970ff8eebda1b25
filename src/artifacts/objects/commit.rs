//! Gitlet commit object
//!
//! Commits represent snapshots of the working directory at specific points in time.
//! They contain:
//! - A log message
//! - A timestamp
//! - The snapshot: every tracked path mapped to the blob holding its content
//! - Up to two parent commit IDs (none for the root, two for merges)
//!
//! ## Identity
//!
//! ```text
//! Hash(message, timestamp, <blob ids in ascending path order>, parent1, parent2)
//! ```
//!
//! Blob ids are concatenated after an explicit sort on the canonical path form,
//! so the same logical snapshot always hashes to the same id.
//!
//! ## Format
//!
//! On disk: `commit <size>\0` followed by length-prefixed fields
//! (message, seconds, offset, parents, entry count, entries).

use crate::artifacts::objects::object::{
    Object, Packable, Unpackable, read_str, with_header, write_str,
};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::path_key;
use anyhow::Context;
use byteorder::{NetworkEndian, ReadBytesExt, WriteBytesExt};
use bytes::Bytes;
use chrono::{DateTime, FixedOffset, Timelike, Utc};
use std::collections::BTreeMap;
use std::io::{BufRead, Read};
use std::path::{Path, PathBuf};

/// Display and hashing format of commit timestamps
pub const TIMESTAMP_FORMAT: &str = "%a %b %-d %H:%M:%S %Y %z";
/// Log message of the root commit created by `init`
pub const INITIAL_COMMIT_MESSAGE: &str = "initial commit";

/// Tracked path -> blob id
pub type Snapshot = BTreeMap<PathBuf, ObjectId>;

/// Gitlet commit object
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    oid: ObjectId,
    message: String,
    timestamp: DateTime<FixedOffset>,
    snapshot: Snapshot,
    parent1: Option<ObjectId>,
    parent2: Option<ObjectId>,
}

impl Commit {
    /// Create a new commit and compute its id
    ///
    /// Timestamps are truncated to whole seconds, the resolution they are
    /// hashed and stored with.
    pub fn new(
        message: String,
        timestamp: DateTime<FixedOffset>,
        snapshot: Snapshot,
        parent1: Option<ObjectId>,
        parent2: Option<ObjectId>,
    ) -> Self {
        let timestamp = timestamp.with_nanosecond(0).unwrap_or(timestamp);
        let oid = Self::compute_id(&message, &timestamp, &snapshot, &parent1, &parent2);

        Commit {
            oid,
            message,
            timestamp,
            snapshot,
            parent1,
            parent2,
        }
    }

    /// The root commit every repository starts from
    pub fn root() -> Self {
        Self::new(
            INITIAL_COMMIT_MESSAGE.to_string(),
            DateTime::<Utc>::UNIX_EPOCH.fixed_offset(),
            Snapshot::new(),
            None,
            None,
        )
    }

    fn compute_id(
        message: &str,
        timestamp: &DateTime<FixedOffset>,
        snapshot: &Snapshot,
        parent1: &Option<ObjectId>,
        parent2: &Option<ObjectId>,
    ) -> ObjectId {
        let mut entries = snapshot
            .iter()
            .map(|(path, oid)| (path_key(path), oid))
            .collect::<Vec<_>>();
        entries.sort_by(|(left, _), (right, _)| left.cmp(right));

        let blob_ref = entries
            .iter()
            .map(|(_, oid)| oid.as_str())
            .collect::<String>();
        let timestamp = timestamp.format(TIMESTAMP_FORMAT).to_string();

        ObjectId::digest([
            message,
            timestamp.as_str(),
            blob_ref.as_str(),
            parent1.as_ref().map(ObjectId::as_str).unwrap_or(""),
            parent2.as_ref().map(ObjectId::as_str).unwrap_or(""),
        ])
    }

    /// Get the full commit message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Format timestamp in human-readable form
    ///
    /// # Returns
    ///
    /// String like "Mon Jan 1 12:34:56 2024 +0000"
    pub fn readable_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Blob recorded for `path` in this snapshot
    pub fn tracked_blob(&self, path: &Path) -> Option<&ObjectId> {
        self.snapshot.get(path)
    }

    pub fn tracks(&self, path: &Path) -> bool {
        self.snapshot.contains_key(path)
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parent1.as_ref()
    }

    pub fn second_parent(&self) -> Option<&ObjectId> {
        self.parent2.as_ref()
    }

    pub fn parents(&self) -> impl Iterator<Item = &ObjectId> {
        self.parent1.iter().chain(self.parent2.iter())
    }

    pub fn is_merge(&self) -> bool {
        self.parent2.is_some()
    }

    fn write_optional_oid(bytes: &mut Vec<u8>, oid: &Option<ObjectId>) -> anyhow::Result<()> {
        match oid {
            Some(oid) => {
                bytes.write_u8(1)?;
                oid.write_h40_to(bytes)
            }
            None => Ok(bytes.write_u8(0)?),
        }
    }

    fn read_optional_oid(reader: &mut impl Read) -> anyhow::Result<Option<ObjectId>> {
        match reader.read_u8()? {
            0 => Ok(None),
            1 => Ok(Some(ObjectId::read_h40_from(reader)?)),
            flag => anyhow::bail!("Invalid commit object: bad parent flag {flag}"),
        }
    }
}

impl Packable for Commit {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let mut body = Vec::new();

        write_str(&mut body, &self.message)?;
        body.write_i64::<NetworkEndian>(self.timestamp.timestamp())?;
        body.write_i32::<NetworkEndian>(self.timestamp.offset().local_minus_utc())?;
        Self::write_optional_oid(&mut body, &self.parent1)?;
        Self::write_optional_oid(&mut body, &self.parent2)?;

        let entries_count = u32::try_from(self.snapshot.len())
            .context("Too many tracked files to encode in a commit")?;
        body.write_u32::<NetworkEndian>(entries_count)?;
        for (path, oid) in &self.snapshot {
            write_str(&mut body, &path_key(path))?;
            oid.write_h40_to(&mut body)?;
        }

        with_header(self.object_type(), &body)
    }
}

impl Unpackable for Commit {
    fn deserialize(mut reader: impl BufRead) -> anyhow::Result<Self> {
        // the header has already been read
        let message = read_str(&mut reader).context("Invalid commit object: bad message")?;

        let seconds = reader.read_i64::<NetworkEndian>()?;
        let offset = reader.read_i32::<NetworkEndian>()?;
        let offset = FixedOffset::east_opt(offset)
            .context("Invalid commit object: timezone offset out of range")?;
        let timestamp = DateTime::from_timestamp(seconds, 0)
            .context("Invalid commit object: timestamp out of range")?
            .with_timezone(&offset);

        let parent1 = Self::read_optional_oid(&mut reader)?;
        let parent2 = Self::read_optional_oid(&mut reader)?;

        let entries_count = reader.read_u32::<NetworkEndian>()?;
        let mut snapshot = Snapshot::new();
        for _ in 0..entries_count {
            let path = read_str(&mut reader).context("Invalid commit object: bad path")?;
            let oid = ObjectId::read_h40_from(&mut reader)?;
            snapshot.insert(PathBuf::from(path), oid);
        }

        Ok(Self::new(message, timestamp, snapshot, parent1, parent2))
    }
}

impl Object for Commit {
    fn object_type(&self) -> ObjectType {
        ObjectType::Commit
    }

    fn display(&self) -> String {
        let mut lines = vec![];

        for parent in self.parents() {
            lines.push(format!("parent {}", parent));
        }
        lines.push(format!("date {}", self.readable_timestamp()));
        for (path, oid) in &self.snapshot {
            lines.push(format!("blob {} {}", oid, path_key(path)));
        }
        lines.push(String::new());
        lines.push(self.message.to_string());

        lines.join("\n")
    }

    fn object_id(&self) -> ObjectId {
        self.oid.clone()
    }
}
