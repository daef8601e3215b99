//! Error types for codec operations.

use std::fmt;

use bytestream::StreamError;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur during diff, apply, or delta wire encoding/decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Byte stream error (truncated input or varint overflow).
    Stream(StreamError),

    /// A presence byte that is neither `0x00` nor `0x01`.
    UnknownPresenceMarker {
        /// Index of the field whose marker was invalid.
        field: usize,
        /// The byte that was read.
        found: u8,
    },

    /// A snapshot or delta whose field count does not match the schema.
    FieldCountMismatch {
        /// Field count the schema defines.
        expected: usize,
        /// Field count actually provided.
        actual: usize,
    },

    /// A field value whose variant does not match its wire category.
    TypeMismatch {
        /// Index of the offending field.
        field: usize,
        /// Category name the schema expects.
        expected: &'static str,
        /// Variant name actually found.
        found: &'static str,
    },

    /// A decoded string that is not valid UTF-8.
    InvalidUtf8 {
        /// Byte offset of the string's length prefix in the input.
        offset: usize,
    },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stream(e) => write!(f, "stream error: {e}"),
            Self::UnknownPresenceMarker { field, found } => {
                write!(
                    f,
                    "unknown presence marker 0x{found:02X} for field {field}"
                )
            }
            Self::FieldCountMismatch { expected, actual } => {
                write!(f, "field count mismatch: expected {expected}, got {actual}")
            }
            Self::TypeMismatch {
                field,
                expected,
                found,
            } => {
                write!(
                    f,
                    "type mismatch for field {field}: expected {expected}, found {found}"
                )
            }
            Self::InvalidUtf8 { offset } => {
                write!(f, "invalid UTF-8 in string at byte offset {offset}")
            }
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Stream(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StreamError> for CodecError {
    fn from(err: StreamError) -> Self {
        Self::Stream(err)
    }
}
