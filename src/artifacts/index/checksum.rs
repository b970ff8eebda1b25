use crate::artifacts::index::CHECKSUM_SIZE;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::{Context, anyhow};
use byteorder::{ByteOrder, NetworkEndian};
use bytes::Bytes;
use file_guard::FileGuard;
use sha1::{Digest, Sha1};
use std::io::{Read, Write};
use std::ops::DerefMut;

/// Reader/writer over a locked index file that digests every byte it moves
#[derive(Debug)]
pub struct Checksum<'f> {
    file: FileGuard<&'f mut std::fs::File>,
    digest: Sha1,
}

impl<'f> Checksum<'f> {
    pub(crate) fn new(file: FileGuard<&'f mut std::fs::File>) -> Self {
        Checksum {
            file,
            digest: Sha1::new(),
        }
    }

    pub(crate) fn read(&mut self, size: usize) -> anyhow::Result<Bytes> {
        let mut buffer = vec![0; size];
        self.file
            .deref_mut()
            .read_exact(&mut buffer)
            .map_err(|_| anyhow!("Unexpected end-of-file while reading index"))?;

        self.digest.update(&buffer);
        Ok(Bytes::from(buffer))
    }

    pub(crate) fn read_u32(&mut self) -> anyhow::Result<u32> {
        let bytes = self.read(4)?;
        Ok(NetworkEndian::read_u32(&bytes))
    }

    pub(crate) fn read_str(&mut self) -> anyhow::Result<String> {
        let len = self.read_u32()? as usize;
        let bytes = self.read(len)?;

        String::from_utf8(bytes.to_vec()).context("Index contains a non UTF-8 name")
    }

    pub(crate) fn read_oid(&mut self) -> anyhow::Result<ObjectId> {
        let bytes = self.read(CHECKSUM_SIZE)?;
        ObjectId::read_h40_from(&mut bytes.as_ref())
    }

    pub(crate) fn write(&mut self, data: &[u8]) -> anyhow::Result<()> {
        self.file.deref_mut().write_all(data)?;
        self.digest.update(data);
        Ok(())
    }

    pub(crate) fn write_checksum(&mut self) -> anyhow::Result<()> {
        let checksum = self.digest.clone().finalize();
        self.file
            .deref_mut()
            .write_all(checksum.as_slice())
            .map_err(|_| anyhow!("Failed to write checksum to index file"))?;

        Ok(())
    }

    pub(crate) fn verify(&mut self) -> anyhow::Result<()> {
        let mut expected_checksum = [0u8; CHECKSUM_SIZE];
        self.file.deref_mut().read_exact(&mut expected_checksum)?;

        let actual_checksum = self.digest.clone().finalize();
        let actual_checksum = actual_checksum.as_slice();

        if expected_checksum != actual_checksum {
            return Err(anyhow!("Checksum does not match value stored on disk"));
        }

        Ok(())
    }
}
