//! Error types for byte-level operations.

use std::fmt;

/// Result type for byte-level operations.
pub type ByteResult<T> = Result<T, ByteError>;

/// Errors that can occur while reading or writing scalar wire fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ByteError {
    /// Attempted to read past the end of the buffer.
    UnexpectedEof {
        /// Number of bytes requested.
        requested: usize,
        /// Number of bytes available.
        available: usize,
    },

    /// A length-prefixed field declared more content than its buffer holds.
    LengthOutOfRange {
        /// The declared (or attempted) content length.
        declared: usize,
        /// Capacity of the field's buffer.
        max: usize,
    },

    /// A fixed text field has no NUL terminator within its capacity.
    UnterminatedString {
        /// Capacity of the text field in bytes.
        capacity: usize,
    },
}

impl fmt::Display for ByteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEof {
                requested,
                available,
            } => {
                write!(
                    f,
                    "attempted to read {requested} bytes but only {available} bytes available"
                )
            }
            Self::LengthOutOfRange { declared, max } => {
                write!(f, "declared length {declared} exceeds field capacity {max}")
            }
            Self::UnterminatedString { capacity } => {
                write!(f, "text field of {capacity} bytes has no terminator")
            }
        }
    }
}

impl std::error::Error for ByteError {}
