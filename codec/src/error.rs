//! Error types for codec operations.

use std::fmt;

use bytestream::ByteError;
use wire::{DecodeError, MessageType};

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while decoding a message.
///
/// Encoding never fails: every in-memory message is valid by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Framing error: size mismatch, unknown discriminator, short buffer.
    Wire(DecodeError),

    /// Field-level error: length prefix out of range, unterminated text.
    Bytes(ByteError),

    /// Buffer holds a different (known) message than the one requested.
    UnexpectedMessageType {
        expected: MessageType,
        found: MessageType,
    },

    /// A field holds a value outside its domain.
    InvalidValue { kind: ValueKind, value: u32 },
}

/// Fields whose wire value is range-checked on decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    PlayerSlot,
    GameState,
}

impl CodecError {
    /// Returns `true` if decoding again with
    /// [`DecodeOptions::lenient`](wire::DecodeOptions::lenient) can succeed.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Bytes(ByteError::UnterminatedString { .. }))
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wire(err) => write!(f, "wire error: {err}"),
            Self::Bytes(err) => write!(f, "field error: {err}"),
            Self::UnexpectedMessageType { expected, found } => {
                write!(f, "expected {expected} but buffer holds {found}")
            }
            Self::InvalidValue { kind, value } => {
                write!(f, "invalid {kind}: {value}")
            }
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::PlayerSlot => "player slot",
            Self::GameState => "game state",
        };
        write!(f, "{name}")
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Wire(err) => Some(err),
            Self::Bytes(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DecodeError> for CodecError {
    fn from(err: DecodeError) -> Self {
        Self::Wire(err)
    }
}

impl From<ByteError> for CodecError {
    fn from(err: ByteError) -> Self {
        Self::Bytes(err)
    }
}
