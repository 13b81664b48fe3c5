//! Input encoding detection.

use std::borrow::Cow;

use encoding_rs::{Encoding, UTF_8};
use log::debug;

use super::types::error::{JmdictError, Result};

/// Returns `bytes` as UTF-8, transcoding when a byte order mark says otherwise.
///
/// Without a BOM the input is taken to be UTF-8, which is what JMdict ships in.
/// A UTF-8 BOM is stripped.
pub fn to_utf8(bytes: &[u8]) -> Result<Cow<'_, [u8]>> {
    let Some((encoding, bom_len)) = Encoding::for_bom(bytes) else {
        return Ok(Cow::Borrowed(bytes));
    };
    let body = &bytes[bom_len..];
    if encoding == UTF_8 {
        return Ok(Cow::Borrowed(body));
    }

    debug!("Byte order mark found, transcoding input from {}", encoding.name());
    let (text, had_errors) = encoding.decode_without_bom_handling(body);
    if had_errors {
        return Err(JmdictError::MalformedDocument(format!(
            "Input is not valid {}",
            encoding.name()
        )));
    }
    Ok(Cow::Owned(text.into_owned().into_bytes()))
}
