use crate::artifacts::index::{HEADER_SIZE, SIGNATURE, VERSION};
use crate::artifacts::objects::object::{Packable, Unpackable};
use anyhow::anyhow;
use byteorder::{ByteOrder, WriteBytesExt};
use bytes::Bytes;
use derive_new::new;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct IndexHeader {
    pub(crate) marker: String,
    pub(crate) version: u32,
    pub(crate) branches_count: u32,
    pub(crate) staged_count: u32,
    pub(crate) removed_count: u32,
}

impl IndexHeader {
    pub(crate) fn empty() -> Self {
        IndexHeader::new(String::from(SIGNATURE), VERSION, 0, 0, 0)
    }
}

impl Packable for IndexHeader {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let mut bytes = Vec::with_capacity(HEADER_SIZE);
        bytes.write_all(self.marker.as_bytes())?;
        bytes.write_u32::<byteorder::NetworkEndian>(self.version)?;
        bytes.write_u32::<byteorder::NetworkEndian>(self.branches_count)?;
        bytes.write_u32::<byteorder::NetworkEndian>(self.staged_count)?;
        bytes.write_u32::<byteorder::NetworkEndian>(self.removed_count)?;

        Ok(Bytes::from(bytes))
    }
}

impl Unpackable for IndexHeader {
    fn deserialize(mut reader: impl BufRead) -> anyhow::Result<Self> {
        let mut bytes = [0u8; HEADER_SIZE];
        reader
            .read_exact(&mut bytes)
            .map_err(|_| anyhow!("Invalid header size"))?;

        let marker = String::from_utf8(bytes[0..4].to_vec())
            .map_err(|_| anyhow!("Invalid marker in index header"))?;
        let version = byteorder::NetworkEndian::read_u32(&bytes[4..8]);
        let branches_count = byteorder::NetworkEndian::read_u32(&bytes[8..12]);
        let staged_count = byteorder::NetworkEndian::read_u32(&bytes[12..16]);
        let removed_count = byteorder::NetworkEndian::read_u32(&bytes[16..20]);

        Ok(IndexHeader {
            marker,
            version,
            branches_count,
            staged_count,
            removed_count,
        })
    }
}
