//! Message type discriminators and the fixed size of each layout.

use bytestream::ByteReader;

use crate::constants::{
    CLIENT_UPDATE_SIZE, DISCRIMINATOR_SIZE, MAX_TOKEN_LEN, MAX_VOICE_PAYLOAD_LEN,
    SERVER_NAME_CAPACITY, WORLD_STATE_SIZE,
};
use crate::error::{DecodeError, WireResult};

/// Every message in the catalog, keyed by its wire discriminator.
///
/// Discriminator values are part of the interop contract and must never
/// change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u32)]
pub enum MessageType {
    ServerSendInfo = 1,
    ServerFailAuthentication = 2,
    ServerPassAuthentication = 3,
    ServerUpdateWorld = 4,
    ServerExiting = 5,
    ClientBeginAuthentication = 502,
    ClientSendLocalUpdate = 503,
    P2PSendingTicket = 601,
    VoiceChatData = 702,
}

impl MessageType {
    /// All catalog entries in discriminator order.
    pub const ALL: [Self; 9] = [
        Self::ServerSendInfo,
        Self::ServerFailAuthentication,
        Self::ServerPassAuthentication,
        Self::ServerUpdateWorld,
        Self::ServerExiting,
        Self::ClientBeginAuthentication,
        Self::ClientSendLocalUpdate,
        Self::P2PSendingTicket,
        Self::VoiceChatData,
    ];

    /// Parses a discriminator.
    pub const fn parse(raw: u32) -> WireResult<Self> {
        match raw {
            1 => Ok(Self::ServerSendInfo),
            2 => Ok(Self::ServerFailAuthentication),
            3 => Ok(Self::ServerPassAuthentication),
            4 => Ok(Self::ServerUpdateWorld),
            5 => Ok(Self::ServerExiting),
            502 => Ok(Self::ClientBeginAuthentication),
            503 => Ok(Self::ClientSendLocalUpdate),
            601 => Ok(Self::P2PSendingTicket),
            702 => Ok(Self::VoiceChatData),
            _ => Err(DecodeError::UnknownMessageType {
                discriminator: raw,
            }),
        }
    }

    /// Returns the raw discriminator.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self as u32
    }

    /// Returns the exact encoded size of this message, discriminator included.
    #[must_use]
    pub const fn wire_size(self) -> usize {
        let body = match self {
            Self::ServerSendInfo => 8 + 1 + SERVER_NAME_CAPACITY,
            Self::ServerFailAuthentication | Self::ServerExiting => 0,
            Self::ServerPassAuthentication => 4,
            Self::ServerUpdateWorld => WORLD_STATE_SIZE,
            Self::ClientBeginAuthentication | Self::P2PSendingTicket => 4 + MAX_TOKEN_LEN + 8,
            Self::ClientSendLocalUpdate => 4 + CLIENT_UPDATE_SIZE,
            Self::VoiceChatData => 4 + MAX_VOICE_PAYLOAD_LEN + 8,
        };
        DISCRIMINATOR_SIZE + body
    }

    /// Returns the family this message belongs to.
    #[must_use]
    pub const fn family(self) -> MessageFamily {
        MessageFamily::of(self.raw())
    }

    /// Returns a stable human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ServerSendInfo => "ServerSendInfo",
            Self::ServerFailAuthentication => "ServerFailAuthentication",
            Self::ServerPassAuthentication => "ServerPassAuthentication",
            Self::ServerUpdateWorld => "ServerUpdateWorld",
            Self::ServerExiting => "ServerExiting",
            Self::ClientBeginAuthentication => "ClientBeginAuthentication",
            Self::ClientSendLocalUpdate => "ClientSendLocalUpdate",
            Self::P2PSendingTicket => "P2PSendingTicket",
            Self::VoiceChatData => "VoiceChatData",
        }
    }
}

impl std::fmt::Display for MessageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u32> for MessageType {
    type Error = DecodeError;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        Self::parse(raw)
    }
}

impl From<MessageType> for u32 {
    fn from(message_type: MessageType) -> Self {
        message_type.raw()
    }
}

/// Discriminator ranges grouping messages by sender and channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MessageFamily {
    /// Server to client, `0..500`.
    Server,
    /// Client to server, `500..600`.
    Client,
    /// Peer-to-peer ticket relay, `600..700`.
    PeerAuth,
    /// Voice chat, `700` and up.
    Voice,
}

impl MessageFamily {
    /// First discriminator of the server family.
    pub const SERVER_BEGIN: u32 = 0;
    /// First discriminator of the client family.
    pub const CLIENT_BEGIN: u32 = 500;
    /// First discriminator of the peer auth family.
    pub const PEER_AUTH_BEGIN: u32 = 600;
    /// First discriminator of the voice family.
    pub const VOICE_BEGIN: u32 = 700;

    /// Classifies any discriminator, known or not.
    #[must_use]
    pub const fn of(raw: u32) -> Self {
        if raw < Self::CLIENT_BEGIN {
            Self::Server
        } else if raw < Self::PEER_AUTH_BEGIN {
            Self::Client
        } else if raw < Self::VOICE_BEGIN {
            Self::PeerAuth
        } else {
            Self::Voice
        }
    }
}

/// Reads the discriminator from the front of a received buffer.
///
/// Only the first four bytes are examined; the length is not checked
/// against the layout here.
pub fn identify(buf: &[u8]) -> WireResult<MessageType> {
    MessageType::parse(peek_discriminator(buf)?)
}

/// Reads the raw discriminator without checking it against the catalog.
pub fn peek_discriminator(buf: &[u8]) -> WireResult<u32> {
    ByteReader::new(buf)
        .read_u32()
        .map_err(|_| DecodeError::TooShort {
            actual: buf.len(),
            required: DISCRIMINATOR_SIZE,
        })
}

/// Checks that `buf` is exactly the size of `message_type`'s layout.
pub const fn check_size(buf: &[u8], message_type: MessageType) -> WireResult<()> {
    let expected = message_type.wire_size();
    if buf.len() != expected {
        return Err(DecodeError::SizeMismatch {
            message_type,
            expected,
            actual: buf.len(),
        });
    }
    Ok(())
}
