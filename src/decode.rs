//! Byte-to-text decoding with a single-byte fallback

use encoding_rs::WINDOWS_1252;
use tracing::debug;

/// Decode bytes as UTF-8, or as Latin-1 when they are not valid UTF-8.
///
/// Never fails: the single-byte charset maps every byte to a character.
#[must_use]
pub fn decode_text(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(e) => {
            debug!(
                "Invalid UTF-8 at byte {}, decoding as Latin-1",
                e.valid_up_to()
            );
            let (text, _) = WINDOWS_1252.decode_without_bom_handling(bytes);
            text.into_owned()
        }
    }
}

/// Lossy UTF-8 decode; invalid sequences become U+FFFD
#[must_use]
pub(crate) fn decode_lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
