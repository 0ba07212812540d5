//! # Value Codec
//!
//! Reversible text obfuscation of the numeric asset value.
//!
//! Encoded form is the decimal rendering of the value, base64-encoded and
//! tagged with the `FHE-` prefix. The tag distinguishes encoded strings from
//! legacy plain numeric text, which [`decode`] still accepts for backward
//! compatibility.
//!
//! This is an obfuscation layer, not cryptography: anyone holding the string
//! can reverse it. Confidentiality comes from the reveal gate in the service
//! layer, not from this transform.
//!
//! Purely functional, no side effects, safe to call concurrently.

use super::errors::CodecError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Tag marking an encoded value string.
pub const ENCODED_PREFIX: &str = "FHE-";

/// Encode a numeric value into its tagged, reversible text form.
///
/// Round-trips exactly for every finite f64: the decimal rendering is
/// shortest-unambiguous, so `decode(encode(v)) == v`.
pub fn encode(value: f64) -> String {
    format!("{ENCODED_PREFIX}{}", STANDARD.encode(value.to_string()))
}

/// Decode an obfuscated (or legacy plain) value string.
///
/// Tagged input is un-base64ed and parsed; untagged input is parsed directly
/// as a number (the backward-compatibility fallback). Malformed input of
/// either kind is a typed [`CodecError`], never a NaN sentinel.
pub fn decode(text: &str) -> Result<f64, CodecError> {
    let decimal = match text.strip_prefix(ENCODED_PREFIX) {
        Some(payload) => {
            let bytes = STANDARD
                .decode(payload)
                .map_err(|_| CodecError::InvalidBase64)?;
            String::from_utf8(bytes).map_err(|_| CodecError::InvalidUtf8)?
        }
        None => text.to_string(),
    };

    decimal
        .trim()
        .parse::<f64>()
        .map_err(|_| CodecError::InvalidNumber { text: decimal })
}
