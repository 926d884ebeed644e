// Copyright (c) 2021-2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! A module which supports building stored ZIP archives in memory.
//!
//! # Example
//! ```
//! # use stored_zip::write::ZipFileBuilder;
//! # use stored_zip::error::ZipError;
//! #
//! # fn run() -> Result<(), ZipError> {
//! let mut builder = ZipFileBuilder::new();
//!
//! builder.add_entry("foo.txt", b"This is an example file.".to_vec())?;
//! builder.add_entry_base64("pixel.png", "data:image/png;base64,iVBORw0KGgo=")?;
//!
//! let archive = builder.finalize();
//! assert_eq!(&archive.as_bytes()[..4], b"PK\x03\x04");
//! #   Ok(())
//! # }
//! # run().unwrap();
//! ```

pub(crate) mod data_url;

use crate::buffer::ZipBuffer;
use crate::entry::ZipEntry;
use crate::error::{Result, ZipError};
use crate::spec::consts::{NON_ZIP64_MAX_NUM_FILES, NON_ZIP64_MAX_SIZE};
use crate::spec::header::{CentralDirectoryRecord, EndOfCentralDirectoryHeader, LocalFileHeader};

/// An in-memory ZIP archive builder which stores (never compresses) its entries.
///
/// Entries are kept in insertion order, which is also their order within the finished archive. Every size and
/// offset limit of a non-ZIP64 archive is enforced when an entry is added, so [`ZipFileBuilder::finalize()`] cannot
/// fail.
///
/// # Note
/// Concurrent producers must serialise their calls to [`ZipFileBuilder::add_entry()`] themselves (eg. behind a
/// `Mutex`).
#[derive(Debug, Clone, Default)]
pub struct ZipFileBuilder {
    pub(crate) entries: Vec<ZipEntry>,
    pub(crate) local_size: u64,
    pub(crate) cd_size: u64,
}

impl ZipFileBuilder {
    /// Constructs a new, empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs a new, empty builder with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { entries: Vec::with_capacity(capacity), ..Default::default() }
    }

    /// Adds a new entry of known data, taking ownership of it.
    ///
    /// Duplicate filenames are permitted and result in two entries of the same name.
    ///
    /// # Errors
    /// On error the builder is left exactly as it was.
    /// - [`ZipError::EmptyFileName`] or [`ZipError::FileNameTooLarge`] if the filename doesn't fit its field.
    /// - [`ZipError::DataTooLarge`] if the data doesn't fit a 32-bit size field.
    /// - [`ZipError::TooManyEntries`] or [`ZipError::ArchiveTooLarge`] if the archive would need ZIP64.
    pub fn add_entry(&mut self, filename: impl Into<String>, data: impl Into<Vec<u8>>) -> Result<()> {
        let entry = ZipEntry::new(filename, data).inspect_err(|err| tracing::warn!("rejected entry: {err}"))?;
        self.push_entry(entry)
    }

    /// Adds a new entry whose data is given as base64 text, or as a data URL carrying a base64 payload (eg.
    /// `data:image/png;base64,iVBORw0KGgo=`).
    ///
    /// # Errors
    /// As [`ZipFileBuilder::add_entry()`], plus [`ZipError::Base64DecodeError`] for malformed base64 and
    /// [`ZipError::DataUrlNotBase64`] for a data URL without a base64 payload. Nothing is added on error.
    pub fn add_entry_base64(&mut self, filename: impl Into<String>, text: &str) -> Result<()> {
        let data = data_url::decode(text).inspect_err(|err| tracing::warn!("rejected entry data: {err}"))?;
        self.add_entry(filename, data)
    }

    /// Adds an already constructed entry.
    ///
    /// # Errors
    /// [`ZipError::TooManyEntries`] or [`ZipError::ArchiveTooLarge`] if the archive would need ZIP64.
    pub fn push_entry(&mut self, entry: ZipEntry) -> Result<()> {
        if self.entries.len() >= NON_ZIP64_MAX_NUM_FILES as usize {
            tracing::warn!(filename = entry.filename(), "rejected entry: {}", ZipError::TooManyEntries);
            return Err(ZipError::TooManyEntries);
        }

        let local = LocalFileHeader::stored(&entry);
        let record = CentralDirectoryRecord::from_local(&local, 0);
        let local_size = self.local_size + local.record_length() as u64 + entry.size() as u64;
        let cd_size = self.cd_size + record.record_length() as u64;

        // Every local header offset lies below the central directory offset, which equals `local_size`.
        if local_size > NON_ZIP64_MAX_SIZE as u64 || cd_size > NON_ZIP64_MAX_SIZE as u64 {
            tracing::warn!(filename = entry.filename(), "rejected entry: {}", ZipError::ArchiveTooLarge);
            return Err(ZipError::ArchiveTooLarge);
        }

        tracing::debug!(filename = entry.filename(), size = entry.size(), crc32 = entry.crc32(), "added entry");

        self.local_size = local_size;
        self.cd_size = cd_size;
        self.entries.push(entry);
        Ok(())
    }

    /// Returns the entries added so far, in archive order.
    pub fn entries(&self) -> &[ZipEntry] {
        &self.entries
    }

    /// Returns the number of entries added so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether no entries have been added.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the exact length in bytes of the archive [`ZipFileBuilder::finalize()`] would currently produce.
    pub fn archive_length(&self) -> usize {
        (self.local_size + self.cd_size) as usize + EndOfCentralDirectoryHeader::record_length()
    }

    /// Serialises all entries into a complete archive.
    ///
    /// This consists of:
    /// - a local file header followed by the stored data, for each entry.
    /// - a central directory record for each entry, in the same order.
    /// - the end of central directory record.
    ///
    /// The output depends only on the entries added, so repeated calls produce byte-identical archives. An empty
    /// builder produces an archive consisting solely of the end of central directory record.
    #[tracing::instrument(skip(self), fields(entries = self.entries.len()))]
    pub fn finalize(&self) -> ZipBuffer {
        let mut buffer = Vec::with_capacity(self.archive_length());
        let mut cd_entries = Vec::with_capacity(self.entries.len());

        for entry in &self.entries {
            // Registration limits keep every offset within u32.
            let lh_offset = buffer.len() as u32;
            let header = LocalFileHeader::stored(entry);

            header.write(&mut buffer, entry.filename().as_bytes());
            buffer.extend_from_slice(entry.data());

            cd_entries.push(CentralDirectoryRecord::from_local(&header, lh_offset));
        }

        let cd_offset = buffer.len();

        for (record, entry) in cd_entries.iter().zip(&self.entries) {
            record.write(&mut buffer, entry.filename().as_bytes());
        }

        let cd_size = buffer.len() - cd_offset;
        let eocdr =
            EndOfCentralDirectoryHeader::single_disk(self.entries.len() as u16, cd_size as u32, cd_offset as u32);
        eocdr.write(&mut buffer);

        debug_assert_eq!(buffer.len(), self.archive_length());
        tracing::debug!(cd_offset, cd_size, length = buffer.len(), "finalized archive");

        ZipBuffer::new(buffer)
    }
}
