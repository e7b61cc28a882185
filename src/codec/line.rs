//! Line encoding for persisted records
//!
//! Every record is written as a single line of comma-separated fields in a
//! fixed order. Backslash and comma inside a field are escaped (`\\`, `\,`)
//! so free text such as a description cannot shift the field layout. Lines
//! without any backslash decode exactly as a plain `split(',')` would.

use thiserror::Error;

/// Field delimiter used in every persisted line
pub const DELIMITER: char = ',';

const ESCAPE: char = '\\';

/// Why a stored line could not be turned back into a record
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("line is empty")]
    Empty,

    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("unknown transaction kind '{0}'")]
    Kind(String),

    #[error("invalid amount '{0}'")]
    Amount(String),

    #[error("invalid date '{0}'")]
    Date(String),

    #[error("invalid category '{0}'")]
    Category(String),
}

/// A record that can be persisted as one delimited line
///
/// `decode` never panics: every malformed input maps to a [`DecodeError`]
/// so the caller can skip the line and keep loading the rest of the file.
pub trait LineRecord: Sized {
    /// Human-readable record name used in log messages
    const RECORD_NAME: &'static str;

    /// Exact number of fields in an encoded line
    const FIELD_COUNT: usize;

    /// Deterministic single-line representation of every field
    fn encode(&self) -> String;

    /// Parse a line produced by [`LineRecord::encode`]
    fn decode(line: &str) -> Result<Self, DecodeError>;
}

/// Escape a single field so it can be joined with [`DELIMITER`]
pub fn escape_field(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    for c in field.chars() {
        if c == ESCAPE || c == DELIMITER {
            out.push(ESCAPE);
        }
        out.push(c);
    }
    out
}

/// Escape and join fields into one line
pub fn join_fields<S: AsRef<str>>(fields: &[S]) -> String {
    fields
        .iter()
        .map(|f| escape_field(f.as_ref()))
        .collect::<Vec<_>>()
        .join(&DELIMITER.to_string())
}

/// Split a line on unescaped delimiters and unescape each field
///
/// Fails unless exactly `expected` fields are present.
pub fn split_fields(line: &str, expected: usize) -> Result<Vec<String>, DecodeError> {
    if line.trim().is_empty() {
        return Err(DecodeError::Empty);
    }

    let mut fields = Vec::with_capacity(expected);
    let mut current = String::new();
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            ESCAPE => match chars.next() {
                Some(next) => current.push(next),
                // dangling escape at end of line, keep it literally
                None => current.push(ESCAPE),
            },
            DELIMITER => fields.push(std::mem::take(&mut current)),
            other => current.push(other),
        }
    }
    fields.push(current);

    if fields.len() != expected {
        return Err(DecodeError::FieldCount {
            expected,
            found: fields.len(),
        });
    }

    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_fields_are_untouched() {
        assert_eq!(join_fields(&["a", "B", "10.00"]), "a,B,10.00");
        assert_eq!(split_fields("a,B,10.00", 3).unwrap(), vec!["a", "B", "10.00"]);
    }

    #[test]
    fn test_comma_in_field_survives() {
        let line = join_fields(&["lunch, with Sam", "x"]);
        assert_eq!(line, r"lunch\, with Sam,x");
        assert_eq!(
            split_fields(&line, 2).unwrap(),
            vec!["lunch, with Sam".to_string(), "x".to_string()]
        );
    }

    #[test]
    fn test_backslash_in_field_survives() {
        let line = join_fields(&[r"C:\temp\", "y"]);
        assert_eq!(split_fields(&line, 2).unwrap()[0], r"C:\temp\");
    }

    #[test]
    fn test_field_count_mismatch() {
        assert_eq!(
            split_fields("a,b", 3),
            Err(DecodeError::FieldCount {
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            split_fields("a,b,c,d", 3),
            Err(DecodeError::FieldCount {
                expected: 3,
                found: 4
            })
        );
    }

    #[test]
    fn test_empty_line() {
        assert_eq!(split_fields("", 3), Err(DecodeError::Empty));
        assert_eq!(split_fields("   ", 3), Err(DecodeError::Empty));
    }

    #[test]
    fn test_empty_fields_are_kept() {
        assert_eq!(split_fields("a,,", 3).unwrap(), vec!["a", "", ""]);
    }

    #[test]
    fn test_dangling_escape() {
        assert_eq!(split_fields(r"a,b\", 2).unwrap(), vec!["a", r"b\"]);
    }
}
