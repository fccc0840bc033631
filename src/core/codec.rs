//! Payload codec.
//!
//! The secret-management tool prints payloads as URL-safe base64. Binary-safe
//! decoding maps `_` to `/` and `-` to `+`, then applies standard base64.
//! Hashing is used only to detect whether a scratch file changed.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use sha2::{Digest as _, Sha256};
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::trace;
use zeroize::Zeroizing;

use crate::core::constants::HASH_BLOCK_SIZE;
use crate::error::CodecError;

/// Standard alphabet, padding optional on decode.
const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Decode tool output into UTF-8 text.
///
/// Surrounding whitespace (the tool ends its output with a newline) is ignored.
///
/// # Errors
///
/// Returns `CodecError::Base64` if the substituted input is not base64, or
/// `CodecError::Utf8` if the decoded bytes are not UTF-8.
pub fn decode(raw: &[u8]) -> Result<Zeroizing<String>, CodecError> {
    let translated: Zeroizing<Vec<u8>> = Zeroizing::new(
        raw.iter()
            .filter(|b| !b.is_ascii_whitespace())
            .map(|b| match b {
                b'_' => b'/',
                b'-' => b'+',
                other => *other,
            })
            .collect(),
    );

    let bytes = STANDARD_LENIENT.decode(translated.as_slice())?;
    let text = String::from_utf8(bytes)?;
    trace!(encoded_len = raw.len(), decoded_len = text.len(), "decoded payload");
    Ok(Zeroizing::new(text))
}

/// Encode text the way the tool prints payloads.
pub fn encode(text: &str) -> String {
    base64::engine::general_purpose::STANDARD
        .encode(text.as_bytes())
        .chars()
        .map(|c| match c {
            '/' => '_',
            '+' => '-',
            other => other,
        })
        .collect()
}

/// SHA-256 digest of a file's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; 32]);

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

/// Hash a file in fixed-size blocks.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or read.
pub fn hash_file(path: &Path) -> std::io::Result<Digest> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    let mut block = [0u8; HASH_BLOCK_SIZE];

    loop {
        let read = file.read(&mut block)?;
        if read == 0 {
            break;
        }
        hasher.update(&block[..read]);
    }

    Ok(Digest(hasher.finalize().into()))
}
