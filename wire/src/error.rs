//! Error types for message framing.

use std::fmt;

use crate::catalog::{MessageFamily, MessageType};

/// Result type for wire operations.
pub type WireResult<T> = Result<T, DecodeError>;

/// Errors raised before any field of a message body is looked at.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeError {
    /// Buffer is too small to hold a discriminator.
    TooShort { actual: usize, required: usize },

    /// Buffer length disagrees with the fixed size of its message type.
    SizeMismatch {
        message_type: MessageType,
        expected: usize,
        actual: usize,
    },

    /// Discriminator is not in the catalog.
    UnknownMessageType { discriminator: u32 },
}

impl DecodeError {
    /// Returns the family of an unknown discriminator, if that is the error.
    #[must_use]
    pub const fn unknown_family(&self) -> Option<MessageFamily> {
        match self {
            Self::UnknownMessageType { discriminator } => Some(MessageFamily::of(*discriminator)),
            _ => None,
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort { actual, required } => {
                write!(
                    f,
                    "buffer too small: {actual} bytes, need at least {required}"
                )
            }
            Self::SizeMismatch {
                message_type,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "size mismatch for {message_type}: expected {expected} bytes, got {actual}"
                )
            }
            Self::UnknownMessageType { discriminator } => {
                write!(f, "unknown message type: {discriminator}")
            }
        }
    }
}

impl std::error::Error for DecodeError {}
