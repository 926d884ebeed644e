// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::error::{Result, ZipError};
use crate::spec::consts::{MAX_FILE_NAME_LENGTH, NON_ZIP64_MAX_SIZE};

/// An immutable, stored (uncompressed) ZIP entry.
///
/// The CRC-32 checksum is computed once on construction and never recomputed. An entry is only ever constructed
/// through [`ZipEntry::new()`], so its file name and data lengths always fit their header fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZipEntry {
    pub(crate) filename: String,
    pub(crate) data: Vec<u8>,
    pub(crate) crc32: u32,
}

impl ZipEntry {
    /// Constructs a new entry, taking ownership of its data.
    ///
    /// # Errors
    /// - [`ZipError::EmptyFileName`] if the filename is empty.
    /// - [`ZipError::FileNameTooLarge`] if the UTF-8 encoded filename is longer than 65535 bytes.
    /// - [`ZipError::DataTooLarge`] if the data is longer than `u32::MAX` bytes.
    pub fn new(filename: impl Into<String>, data: impl Into<Vec<u8>>) -> Result<Self> {
        let filename = filename.into();
        let data = data.into();

        if filename.is_empty() {
            return Err(ZipError::EmptyFileName);
        }
        if filename.len() > MAX_FILE_NAME_LENGTH {
            return Err(ZipError::FileNameTooLarge(filename.len()));
        }
        if data.len() as u64 > NON_ZIP64_MAX_SIZE as u64 {
            return Err(ZipError::DataTooLarge(data.len()));
        }

        let crc32 = crate::crc::compute(&data);
        Ok(Self { filename, data, crc32 })
    }

    /// Returns the entry's filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Returns the entry's stored data.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns the CRC-32 checksum computed over the entry's data.
    pub fn crc32(&self) -> u32 {
        self.crc32
    }

    /// Returns the entry's size, which is both its compressed and uncompressed size.
    pub fn size(&self) -> u32 {
        self.data.len() as u32
    }
}
