//! Text encoding detection and fallback decoding.
//!
//! Uploaded delimited files arrive in a mix of encodings (UTF-8 with or
//! without BOM, UTF-16 exports, legacy single-byte code pages). Detection
//! samples a prefix of the raw bytes; decoding walks an ordered fallback
//! chain and surfaces the whole chain in the error when every attempt fails.

use encoding_rs::{Encoding, ISO_8859_15, UTF_8, WINDOWS_1252};

use crate::error::{IngestError, Result};

/// Bytes sampled from the start of the stream for detection.
const DETECTION_SAMPLE_LEN: usize = 8 * 1024;

/// Best-guess encoding for a byte stream.
///
/// BOM wins outright; otherwise a UTF-8-valid prefix means UTF-8 and
/// anything else falls back to windows-1252, the dominant legacy code page
/// for spreadsheet exports.
pub fn detect_encoding(bytes: &[u8]) -> &'static Encoding {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(bytes) {
        return encoding;
    }
    let sample = &bytes[..bytes.len().min(DETECTION_SAMPLE_LEN)];
    if prefix_is_utf8(sample) {
        UTF_8
    } else {
        WINDOWS_1252
    }
}

/// UTF-8 validity check tolerating a multi-byte sequence cut at the sample
/// boundary.
fn prefix_is_utf8(sample: &[u8]) -> bool {
    match std::str::from_utf8(sample) {
        Ok(_) => true,
        // error_len() of None means the sample ends mid-sequence.
        Err(err) => err.error_len().is_none(),
    }
}

/// Decodes a byte stream, trying the detected encoding first and then the
/// fixed legacy chain.
///
/// An attempt fails when the decoder reports malformed sequences or the
/// decoded text contains NUL (the signature of mis-detected UTF-16).
pub fn decode_text(bytes: &[u8]) -> Result<String> {
    let detected = detect_encoding(bytes);
    // Legacy encodings attempted, in order, after the detected best guess.
    let fallbacks = [UTF_8, WINDOWS_1252, ISO_8859_15];
    let mut tried: Vec<&str> = Vec::new();
    for encoding in std::iter::once(detected).chain(fallbacks) {
        if tried.contains(&encoding.name()) {
            continue;
        }
        tried.push(encoding.name());
        // decode() sniffs and strips any BOM itself.
        let (text, used, had_errors) = encoding.decode(bytes);
        if had_errors || text.contains('\0') {
            tracing::debug!(encoding = used.name(), "decode attempt rejected");
            continue;
        }
        tracing::debug!(encoding = used.name(), "decoded text data");
        return Ok(text.into_owned());
    }
    Err(IngestError::Decode {
        tried: tried.join(", "),
    })
}
