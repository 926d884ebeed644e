// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! A module which holds relevant error reporting structures/types.

use thiserror::Error;

/// A Result type alias over ZipError to minimise repetition.
pub type Result<V> = std::result::Result<V, ZipError>;

/// An enum of possible errors and their descriptions.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ZipError {
    #[error("file name length exceeds the 16-bit length field ({0} bytes)")]
    FileNameTooLarge(usize),
    #[error("file name must not be empty")]
    EmptyFileName,
    #[error("entry data length exceeds the 32-bit size field ({0} bytes)")]
    DataTooLarge(usize),
    #[error("entry count would exceed the 16-bit end of central directory counters")]
    TooManyEntries,
    #[error("archive would exceed the 32-bit offset range without ZIP64")]
    ArchiveTooLarge,

    #[error("unable to decode base64 entry data: {0}")]
    Base64DecodeError(#[from] base64::DecodeError),
    #[error("data URL does not carry a base64 payload")]
    DataUrlNotBase64,

    #[error("an upstream writer returned an error: {0}")]
    UpstreamWriteError(#[from] std::io::Error),
}
