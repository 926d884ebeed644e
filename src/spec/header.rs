// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::entry::ZipEntry;
use crate::spec::consts::COMPRESSION_STORED;

// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#437
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalFileHeader {
    pub version: u16,
    pub flags: u16,
    pub compression: u16,
    pub mod_time: u16,
    pub mod_date: u16,
    pub crc: u32,
    pub compressed_size: u32,
    pub uncompressed_size: u32,
    pub file_name_length: u16,
    pub extra_field_length: u16,
}

// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#4312
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CentralDirectoryRecord {
    pub v_made_by: u16,
    pub v_needed: u16,
    pub flags: u16,
    pub compression: u16,
    pub mod_time: u16,
    pub mod_date: u16,
    pub crc: u32,
    pub compressed_size: u32,
    pub uncompressed_size: u32,
    pub file_name_length: u16,
    pub extra_field_length: u16,
    pub file_comment_length: u16,
    pub disk_start: u16,
    pub inter_attr: u16,
    pub exter_attr: u32,
    pub lh_offset: u32,
}

// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#4316
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndOfCentralDirectoryHeader {
    pub(crate) disk_num: u16,
    pub(crate) start_cent_dir_disk: u16,
    pub(crate) num_of_entries_disk: u16,
    pub(crate) num_of_entries: u16,
    pub(crate) size_cent_dir: u32,
    pub(crate) cent_dir_offset: u32,
    pub(crate) file_comm_length: u16,
}

impl LocalFileHeader {
    /// Describes a stored entry with no timestamp and no extra field.
    ///
    /// Lengths were range-checked when the entry was registered.
    pub fn stored(entry: &ZipEntry) -> Self {
        Self {
            version: crate::spec::version::NEEDED_TO_EXTRACT,
            flags: 0,
            compression: COMPRESSION_STORED,
            mod_time: 0,
            mod_date: 0,
            crc: entry.crc32(),
            compressed_size: entry.size(),
            uncompressed_size: entry.size(),
            file_name_length: entry.filename().len() as u16,
            extra_field_length: 0,
        }
    }
}

impl CentralDirectoryRecord {
    /// Mirrors a local file header, pointing back at it via `lh_offset`.
    pub fn from_local(header: &LocalFileHeader, lh_offset: u32) -> Self {
        Self {
            v_made_by: crate::spec::version::MADE_BY,
            v_needed: header.version,
            flags: header.flags,
            compression: header.compression,
            mod_time: header.mod_time,
            mod_date: header.mod_date,
            crc: header.crc,
            compressed_size: header.compressed_size,
            uncompressed_size: header.uncompressed_size,
            file_name_length: header.file_name_length,
            extra_field_length: header.extra_field_length,
            file_comment_length: 0,
            disk_start: 0,
            inter_attr: 0,
            exter_attr: 0,
            lh_offset,
        }
    }
}

impl EndOfCentralDirectoryHeader {
    /// Describes a single-disk archive without a comment.
    pub fn single_disk(num_of_entries: u16, size_cent_dir: u32, cent_dir_offset: u32) -> Self {
        Self {
            disk_num: 0,
            start_cent_dir_disk: 0,
            num_of_entries_disk: num_of_entries,
            num_of_entries,
            size_cent_dir,
            cent_dir_offset,
            file_comm_length: 0,
        }
    }
}
