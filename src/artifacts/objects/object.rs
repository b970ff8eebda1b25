use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::{Context, Result};
use byteorder::{NetworkEndian, ReadBytesExt, WriteBytesExt};
use bytes::Bytes;
use std::io::{BufRead, Read, Write};
use std::path::PathBuf;

pub trait Packable {
    fn serialize(&self) -> Result<Bytes>;
}

pub trait Unpackable {
    fn deserialize(reader: impl BufRead) -> Result<Self>
    where
        Self: Sized;
}

pub trait Object: Packable {
    fn object_type(&self) -> ObjectType;

    fn display(&self) -> String;

    /// Identity computed over the object's logical fields, never over its encoding
    fn object_id(&self) -> ObjectId;

    fn object_path(&self) -> PathBuf {
        PathBuf::from(self.object_type().directory()).join(self.object_id().as_ref())
    }
}

pub enum ObjectBox {
    Blob(Box<Blob>),
    Commit(Box<Commit>),
}

impl ObjectBox {
    pub fn display(&self) -> String {
        match self {
            ObjectBox::Blob(blob) => blob.display(),
            ObjectBox::Commit(commit) => commit.display(),
        }
    }
}

/// Prefix `body` with the `<type> <size>\0` object header
pub(crate) fn with_header(object_type: ObjectType, body: &[u8]) -> Result<Bytes> {
    let mut object_bytes = Vec::with_capacity(body.len() + 16);
    let header = format!("{} {}\0", object_type.as_str(), body.len());
    object_bytes.write_all(header.as_bytes())?;
    object_bytes.write_all(body)?;

    Ok(Bytes::from(object_bytes))
}

/// Write a length-prefixed UTF-8 string
pub(crate) fn write_str<W: Write>(writer: &mut W, value: &str) -> Result<()> {
    let len = u32::try_from(value.len()).context("string field too long to encode")?;
    writer.write_u32::<NetworkEndian>(len)?;
    writer.write_all(value.as_bytes())?;

    Ok(())
}

/// Read a length-prefixed UTF-8 string written by [`write_str`]
pub(crate) fn read_str<R: Read>(reader: &mut R) -> Result<String> {
    let len = reader.read_u32::<NetworkEndian>()? as usize;
    let mut buffer = vec![0; len];
    reader
        .read_exact(&mut buffer)
        .context("Unexpected end-of-file while reading string field")?;

    String::from_utf8(buffer).context("string field is not valid UTF-8")
}
