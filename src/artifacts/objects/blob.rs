//! Gitlet blob object
//!
//! Blobs store file content. They contain only the raw file data,
//! without any metadata like the file name (that lives in commit snapshots).
//!
//! ## Format
//!
//! On disk: `blob <size>\0<content>`
//! Identity: `Hash(content)`

use crate::artifacts::objects::object::{Object, Packable, Unpackable, with_header};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use bytes::Bytes;
use std::io::BufRead;

/// Gitlet blob object representing file content
///
/// Each unique file content is stored once, identified by its SHA-1 hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    content: Bytes,
}

impl Blob {
    pub fn new(content: impl Into<Bytes>) -> Self {
        Blob {
            content: content.into(),
        }
    }

    /// Get the raw file content
    pub fn content(&self) -> &Bytes {
        &self.content
    }
}

impl Packable for Blob {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        with_header(self.object_type(), &self.content)
    }
}

impl Unpackable for Blob {
    fn deserialize(reader: impl BufRead) -> anyhow::Result<Self> {
        // the header has already been read
        let content = reader
            .bytes()
            .collect::<Result<Vec<u8>, std::io::Error>>()?;

        Ok(Self::new(content))
    }
}

impl Object for Blob {
    fn object_type(&self) -> ObjectType {
        ObjectType::Blob
    }

    fn display(&self) -> String {
        String::from_utf8_lossy(&self.content).into_owned()
    }

    fn object_id(&self) -> ObjectId {
        ObjectId::digest([&self.content])
    }
}
