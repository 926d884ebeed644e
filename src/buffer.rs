// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! A module which holds the finalized archive and its delivery helpers.
//!
//! The archive is fully assembled before any of these helpers run; they only hand the unchanged bytes to a writer.

use crate::error::Result;

use futures_lite::io::{AsyncWrite, AsyncWriteExt};

#[cfg(feature = "tokio")]
use tokio_util::compat::TokioAsyncWriteCompatExt;

/// A complete ZIP archive, as produced by [`crate::write::ZipFileBuilder::finalize()`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZipBuffer {
    inner: Vec<u8>,
}

impl ZipBuffer {
    /// The media type of ZIP archives.
    pub const MIME_TYPE: &'static str = "application/zip";

    pub(crate) fn new(inner: Vec<u8>) -> Self {
        Self { inner }
    }

    /// Returns the media type to tag this archive with (eg. as a `Content-Type` header).
    pub fn content_type(&self) -> &'static str {
        Self::MIME_TYPE
    }

    /// Returns the archive's bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.inner
    }

    /// Returns the archive's length in bytes.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns whether the archive has no bytes, which is never the case for a finalized archive.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Consumes this buffer and returns the archive's bytes.
    pub fn into_inner(self) -> Vec<u8> {
        self.inner
    }

    /// Writes the whole archive to the given writer and flushes it.
    #[tracing::instrument(skip_all, fields(length = self.inner.len()))]
    pub async fn write_to<W: AsyncWrite + Unpin>(&self, mut writer: W) -> Result<()> {
        writer.write_all(&self.inner).await?;
        writer.flush().await?;
        Ok(())
    }

    /// Writes the whole archive to the given tokio writer and flushes it.
    #[cfg(feature = "tokio")]
    pub async fn write_to_tokio<W: tokio::io::AsyncWrite + Unpin>(&self, writer: W) -> Result<()> {
        self.write_to(writer.compat_write()).await
    }

    /// Writes the archive to a file at the given path, creating or truncating it.
    #[cfg(feature = "tokio-fs")]
    #[tracing::instrument(skip_all, fields(length = self.inner.len()))]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        tokio::fs::write(path, &self.inner).await?;
        Ok(())
    }
}

impl AsRef<[u8]> for ZipBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.inner
    }
}

impl From<ZipBuffer> for Vec<u8> {
    fn from(buffer: ZipBuffer) -> Vec<u8> {
        buffer.inner
    }
}
