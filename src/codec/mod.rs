//! Record codec
//!
//! Turns records into persistable lines and back: a delimited line format
//! (`line`) wrapped in a fixed-key obfuscation layer (`obfuscation`).

pub mod line;
pub mod obfuscation;

pub use line::{join_fields, split_fields, DecodeError, LineRecord, DELIMITER};
pub use obfuscation::{obscure, reveal, try_reveal, RevealError};

/// Encode and obscure a record into one stored line
pub fn seal<T: LineRecord>(record: &T) -> String {
    obscure(&record.encode())
}

/// Reveal and decode one stored line
pub fn unseal<T: LineRecord>(stored: &str) -> Result<T, DecodeError> {
    T::decode(&reveal(stored))
}
