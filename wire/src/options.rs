//! Decoder configuration.

use bytestream::TextPolicy;

/// What to do with a message whose discriminator is not in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownMessagePolicy {
    /// Report it as an error (treat as protocol desync).
    #[default]
    Reject,
    /// Skip it (peer may be newer than us).
    Ignore,
}

/// Decoder behaviour for recoverable conditions.
///
/// Size checks and length-prefix bounds are not configurable; a buffer that
/// fails them is always rejected.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DecodeOptions {
    /// Handling of text fields with no terminator.
    pub text_policy: TextPolicy,

    /// Handling of unknown discriminators during dispatch.
    pub unknown_messages: UnknownMessagePolicy,
}

impl DecodeOptions {
    /// Rejects everything that is not well formed.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            text_policy: TextPolicy::Strict,
            unknown_messages: UnknownMessagePolicy::Reject,
        }
    }

    /// Recovers from unterminated text and skips unknown messages.
    #[must_use]
    pub const fn lenient() -> Self {
        Self {
            text_policy: TextPolicy::Truncate,
            unknown_messages: UnknownMessagePolicy::Ignore,
        }
    }
}
