// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::spec::consts::{
    CDH_LENGTH, CDH_SIGNATURE, EOCDR_LENGTH, EOCDR_SIGNATURE, LFH_LENGTH, LFH_SIGNATURE, SIGNATURE_LENGTH,
};
use crate::spec::header::{CentralDirectoryRecord, EndOfCentralDirectoryHeader, LocalFileHeader};

/// Replace elements of an array at a given cursor index for use with a zero-initialised array.
macro_rules! array_push {
    ($arr:ident, $cursor:ident, $value:expr) => {{
        for entry in $value {
            $arr[$cursor] = entry;
            $cursor += 1;
        }
    }};
}

impl LocalFileHeader {
    pub fn as_slice(&self) -> [u8; LFH_LENGTH] {
        let mut array = [0; LFH_LENGTH];
        let mut cursor = 0;

        array_push!(array, cursor, self.version.to_le_bytes());
        array_push!(array, cursor, self.flags.to_le_bytes());
        array_push!(array, cursor, self.compression.to_le_bytes());
        array_push!(array, cursor, self.mod_time.to_le_bytes());
        array_push!(array, cursor, self.mod_date.to_le_bytes());
        array_push!(array, cursor, self.crc.to_le_bytes());
        array_push!(array, cursor, self.compressed_size.to_le_bytes());
        array_push!(array, cursor, self.uncompressed_size.to_le_bytes());
        array_push!(array, cursor, self.file_name_length.to_le_bytes());
        array_push!(array, cursor, self.extra_field_length.to_le_bytes());

        array
    }

    /// The full on-disk length of this header, including its signature and the file name that follows it.
    pub fn record_length(&self) -> usize {
        SIGNATURE_LENGTH + LFH_LENGTH + self.file_name_length as usize + self.extra_field_length as usize
    }

    /// Appends the signature, the fixed fields, and the file name.
    #[tracing::instrument(level = "trace", skip(buffer, file_name))]
    pub fn write(&self, buffer: &mut Vec<u8>, file_name: &[u8]) {
        buffer.extend_from_slice(&LFH_SIGNATURE.to_le_bytes());
        buffer.extend_from_slice(&self.as_slice());
        buffer.extend_from_slice(file_name);
    }
}

impl CentralDirectoryRecord {
    pub fn as_slice(&self) -> [u8; CDH_LENGTH] {
        let mut array = [0; CDH_LENGTH];
        let mut cursor = 0;

        array_push!(array, cursor, self.v_made_by.to_le_bytes());
        array_push!(array, cursor, self.v_needed.to_le_bytes());
        array_push!(array, cursor, self.flags.to_le_bytes());
        array_push!(array, cursor, self.compression.to_le_bytes());
        array_push!(array, cursor, self.mod_time.to_le_bytes());
        array_push!(array, cursor, self.mod_date.to_le_bytes());
        array_push!(array, cursor, self.crc.to_le_bytes());
        array_push!(array, cursor, self.compressed_size.to_le_bytes());
        array_push!(array, cursor, self.uncompressed_size.to_le_bytes());
        array_push!(array, cursor, self.file_name_length.to_le_bytes());
        array_push!(array, cursor, self.extra_field_length.to_le_bytes());
        array_push!(array, cursor, self.file_comment_length.to_le_bytes());
        array_push!(array, cursor, self.disk_start.to_le_bytes());
        array_push!(array, cursor, self.inter_attr.to_le_bytes());
        array_push!(array, cursor, self.exter_attr.to_le_bytes());
        array_push!(array, cursor, self.lh_offset.to_le_bytes());

        array
    }

    /// The full on-disk length of this record, including its signature and variable-length trailer.
    pub fn record_length(&self) -> usize {
        SIGNATURE_LENGTH
            + CDH_LENGTH
            + self.file_name_length as usize
            + self.extra_field_length as usize
            + self.file_comment_length as usize
    }

    /// Appends the signature, the fixed fields, and the file name.
    #[tracing::instrument(level = "trace", skip(buffer, file_name))]
    pub fn write(&self, buffer: &mut Vec<u8>, file_name: &[u8]) {
        buffer.extend_from_slice(&CDH_SIGNATURE.to_le_bytes());
        buffer.extend_from_slice(&self.as_slice());
        buffer.extend_from_slice(file_name);
    }
}

impl EndOfCentralDirectoryHeader {
    pub fn as_slice(&self) -> [u8; EOCDR_LENGTH] {
        let mut array = [0; EOCDR_LENGTH];
        let mut cursor = 0;

        array_push!(array, cursor, self.disk_num.to_le_bytes());
        array_push!(array, cursor, self.start_cent_dir_disk.to_le_bytes());
        array_push!(array, cursor, self.num_of_entries_disk.to_le_bytes());
        array_push!(array, cursor, self.num_of_entries.to_le_bytes());
        array_push!(array, cursor, self.size_cent_dir.to_le_bytes());
        array_push!(array, cursor, self.cent_dir_offset.to_le_bytes());
        array_push!(array, cursor, self.file_comm_length.to_le_bytes());

        array
    }

    pub const fn record_length() -> usize {
        SIGNATURE_LENGTH + EOCDR_LENGTH
    }

    #[tracing::instrument(level = "trace", skip(buffer))]
    pub fn write(&self, buffer: &mut Vec<u8>) {
        buffer.extend_from_slice(&EOCDR_SIGNATURE.to_le_bytes());
        buffer.extend_from_slice(&self.as_slice());
    }
}
