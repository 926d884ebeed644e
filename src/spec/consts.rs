// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

pub const SIGNATURE_LENGTH: usize = 4;

// Local file header constants
//
// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#437
pub const LFH_SIGNATURE: u32 = 0x4034b50;
pub const LFH_LENGTH: usize = 26;

// Central directory header constants
//
// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#4312
pub const CDH_SIGNATURE: u32 = 0x2014b50;
pub const CDH_LENGTH: usize = 42;

// End of central directory record constants
//
// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#4316
pub const EOCDR_SIGNATURE: u32 = 0x6054b50;
pub const EOCDR_LENGTH: usize = 18;

/// The largest size or offset representable without ZIP64.
pub const NON_ZIP64_MAX_SIZE: u32 = 0xFFFFFFFF;
/// The largest entry count representable without ZIP64.
pub const NON_ZIP64_MAX_NUM_FILES: u16 = 0xFFFF;
/// The largest file name length representable by its 16-bit length field.
pub const MAX_FILE_NAME_LENGTH: usize = u16::MAX as usize;

/// Compression method "stored" (no compression).
pub const COMPRESSION_STORED: u16 = 0;
