// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! # stored_zip
//!
//! An in-memory ZIP archive builder which stores entries without compression.
//!
//! ## Features
//! - Deterministic, single-pass serialisation into one contiguous buffer.
//! - A built-in table-driven CRC-32 implementation.
//! - Entry data from raw bytes, base64 text, or base64 data URLs.
//! - Optional delivery of the finished archive to `futures` or `tokio` writers, or to disk (`tokio-fs`).
//! - Aims for reasonable [specification](https://pkware.cachefly.net/webdocs/casestudies/APPNOTE.TXT) compliance.
//!
//! ## Example
//! ```
//! # use stored_zip::ZipFileBuilder;
//! # fn run() -> stored_zip::error::Result<()> {
//! let mut builder = ZipFileBuilder::new();
//! builder.add_entry("page_1.png", vec![0x89, 0x50, 0x4E, 0x47])?;
//!
//! let archive = builder.finalize();
//! assert_eq!(archive.len(), 30 + 10 + 4 + 46 + 10 + 22);
//! assert_eq!(archive.content_type(), "application/zip");
//! #   Ok(())
//! # }
//! # run().unwrap();
//! ```
//!
//! ## Non-goals
//! Compression, encryption, ZIP64, multi-volume archives, and reading archives are all out of scope.

pub mod buffer;
pub mod crc;
pub mod entry;
pub mod error;
pub(crate) mod spec;
pub mod write;

#[cfg(test)]
pub(crate) mod tests;

pub use crate::buffer::ZipBuffer;
pub use crate::entry::ZipEntry;
pub use crate::write::ZipFileBuilder;
