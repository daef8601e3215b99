//! Error types for byte stream operations.

use std::fmt;

/// Result type for byte stream operations.
pub type StreamResult<T> = Result<T, StreamError>;

/// Errors that can occur while decoding from a byte stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamError {
    /// The input ended before a complete value could be read.
    TruncatedInput {
        /// Number of bytes requested.
        requested: usize,
        /// Number of bytes available.
        available: usize,
    },

    /// A variable-length integer exceeded 32 bits of accumulated value.
    VarintOverflow {
        /// Bit shift reached when the overflow was detected.
        shift: u32,
    },
}

impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TruncatedInput {
                requested,
                available,
            } => {
                write!(
                    f,
                    "truncated input: requested {requested} bytes but only {available} available"
                )
            }
            Self::VarintOverflow { shift } => {
                write!(f, "varint overflow: value exceeds 32 bits at shift {shift}")
            }
        }
    }
}

impl std::error::Error for StreamError {}
