//! Hexadecimal text encoding for signature bytes.
//!
//! Hex is used instead of base64 because it survives being retyped by hand:
//! case does not matter.

use crate::error::{LicenseError, LicenseResult};

/// Encodes bytes as lowercase hex.
#[must_use]
pub fn encode_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Decodes hex text, ignoring letter case.
///
/// Blank input decodes to an empty buffer.
///
/// # Errors
///
/// Returns [`LicenseError::InvalidFormat`] if the text has an odd length or
/// contains a character that is not a hex digit.
pub fn decode_hex(text: &str) -> LicenseResult<Vec<u8>> {
    if text.len() % 2 != 0 {
        return Err(LicenseError::format("signature hex has odd length"));
    }
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    hex::decode(text.to_ascii_uppercase())
        .map_err(|e| LicenseError::format(format!("signature is not valid hex: {e}")))
}
