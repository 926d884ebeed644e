// Copyright (c) 2023 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::error::{Result, ZipError};

use base64::Engine;

const DATA_URL_SCHEME: &str = "data:";
const BASE64_MARKER: &str = "base64";

/// Decodes entry data given as standard base64 text or as a `data:[<mediatype>][;base64],<data>` URL.
///
/// A data URL must carry the base64 marker as its final parameter; percent-encoded data URLs are not entry data.
pub(crate) fn decode(text: &str) -> Result<Vec<u8>> {
    let text = text.trim();

    let payload = match text.get(..DATA_URL_SCHEME.len()) {
        Some(scheme) if scheme.eq_ignore_ascii_case(DATA_URL_SCHEME) => {
            let (meta, payload) = text[DATA_URL_SCHEME.len()..].split_once(',').ok_or(ZipError::DataUrlNotBase64)?;

            match meta.rsplit_once(';') {
                Some((_, marker)) if marker.eq_ignore_ascii_case(BASE64_MARKER) => payload,
                _ => return Err(ZipError::DataUrlNotBase64),
            }
        }
        _ => text,
    };

    Ok(base64::engine::general_purpose::STANDARD.decode(payload)?)
}
