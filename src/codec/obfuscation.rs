//! Fixed-key XOR obfuscation of persisted lines
//!
//! Each line is XORed byte-wise with a repeating key compiled into the
//! binary and then base64 encoded so it stays on one printable line.
//!
//! This is obfuscation only. The key ships with every copy of the program,
//! so it offers no confidentiality. Anything that needs real protection
//! must use authenticated encryption with proper key management instead.

use base64::{engine::general_purpose::STANDARD, Engine};
use thiserror::Error;

/// Repeating XOR key
const OBFUSCATION_KEY: &[u8] = b"MySuperSecretKey123";

/// Why an opaque line could not be revealed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RevealError {
    #[error("invalid base64 payload: {0}")]
    Base64(String),

    #[error("revealed bytes are not valid UTF-8")]
    Utf8,
}

fn xor_with_key(data: &[u8]) -> Vec<u8> {
    data.iter()
        .zip(OBFUSCATION_KEY.iter().cycle())
        .map(|(byte, key)| byte ^ key)
        .collect()
}

/// Obscure a plain line into a printable opaque line
pub fn obscure(plain: &str) -> String {
    STANDARD.encode(xor_with_key(plain.as_bytes()))
}

/// Reveal an opaque line, reporting why it failed
pub fn try_reveal(opaque: &str) -> Result<String, RevealError> {
    let bytes = STANDARD
        .decode(opaque.trim())
        .map_err(|e| RevealError::Base64(e.to_string()))?;

    String::from_utf8(xor_with_key(&bytes)).map_err(|_| RevealError::Utf8)
}

/// Reveal an opaque line
///
/// On malformed input the original text is returned unchanged. The caller
/// then tries to parse it as a plain line and drops it if that fails too.
pub fn reveal(opaque: &str) -> String {
    match try_reveal(opaque) {
        Ok(plain) => plain,
        Err(e) => {
            tracing::debug!("Reveal failed ({}), treating line as plain text", e);
            opaque.to_string()
        }
    }
}
