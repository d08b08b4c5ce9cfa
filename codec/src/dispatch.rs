//! Decoding an incoming buffer into whichever message it holds.

use wire::{
    identify, peek_discriminator, DecodeError, DecodeOptions, MessageFamily, MessageType,
    UnknownMessagePolicy,
};

use crate::client::ClientSendLocalUpdate;
use crate::error::{CodecError, CodecResult};
use crate::message::WireMessage;
use crate::relay::{P2PSendingTicket, VoiceChatData};
use crate::signalling::{
    ClientBeginAuthentication, ServerExiting, ServerFailAuthentication, ServerPassAuthentication,
    ServerSendInfo,
};
use crate::world::ServerUpdateWorld;

/// Any message in the catalog.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", content = "body"))]
pub enum Message {
    ServerSendInfo(ServerSendInfo),
    ServerFailAuthentication(ServerFailAuthentication),
    ServerPassAuthentication(ServerPassAuthentication),
    ServerUpdateWorld(Box<ServerUpdateWorld>),
    ServerExiting(ServerExiting),
    ClientBeginAuthentication(ClientBeginAuthentication),
    ClientSendLocalUpdate(ClientSendLocalUpdate),
    P2PSendingTicket(P2PSendingTicket),
    VoiceChatData(VoiceChatData),
}

impl Message {
    /// Returns the discriminator this message is encoded with.
    #[must_use]
    pub const fn message_type(&self) -> MessageType {
        match self {
            Self::ServerSendInfo(_) => MessageType::ServerSendInfo,
            Self::ServerFailAuthentication(_) => MessageType::ServerFailAuthentication,
            Self::ServerPassAuthentication(_) => MessageType::ServerPassAuthentication,
            Self::ServerUpdateWorld(_) => MessageType::ServerUpdateWorld,
            Self::ServerExiting(_) => MessageType::ServerExiting,
            Self::ClientBeginAuthentication(_) => MessageType::ClientBeginAuthentication,
            Self::ClientSendLocalUpdate(_) => MessageType::ClientSendLocalUpdate,
            Self::P2PSendingTicket(_) => MessageType::P2PSendingTicket,
            Self::VoiceChatData(_) => MessageType::VoiceChatData,
        }
    }

    /// Encodes the wrapped message.
    #[must_use]
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::ServerSendInfo(m) => m.encode(),
            Self::ServerFailAuthentication(m) => m.encode(),
            Self::ServerPassAuthentication(m) => m.encode(),
            Self::ServerUpdateWorld(m) => m.encode(),
            Self::ServerExiting(m) => m.encode(),
            Self::ClientBeginAuthentication(m) => m.encode(),
            Self::ClientSendLocalUpdate(m) => m.encode(),
            Self::P2PSendingTicket(m) => m.encode(),
            Self::VoiceChatData(m) => m.encode(),
        }
    }
}

macro_rules! impl_from_message {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Message {
                fn from(message: $variant) -> Self {
                    Self::$variant(message)
                }
            }
        )*
    };
}

impl_from_message!(
    ServerSendInfo,
    ServerFailAuthentication,
    ServerPassAuthentication,
    ServerExiting,
    ClientBeginAuthentication,
    ClientSendLocalUpdate,
    P2PSendingTicket,
    VoiceChatData,
);

impl From<ServerUpdateWorld> for Message {
    fn from(message: ServerUpdateWorld) -> Self {
        Self::ServerUpdateWorld(Box::new(message))
    }
}

/// Identifies and decodes `buf`.
///
/// Unknown discriminators are always an error here; see
/// [`try_decode_message`] for the policy-aware variant.
pub fn decode_message(buf: &[u8], options: &DecodeOptions) -> CodecResult<Message> {
    let message_type = identify(buf).map_err(|err| {
        tracing::debug!(len = buf.len(), error = %err, "rejecting unidentifiable buffer");
        CodecError::from(err)
    })?;
    let result = decode_known(message_type, buf, options);
    match &result {
        Ok(_) => tracing::trace!(%message_type, len = buf.len(), "decoded message"),
        Err(err) => {
            tracing::debug!(%message_type, len = buf.len(), error = %err, "rejecting message");
        }
    }
    result
}

/// Like [`decode_message`], but honours [`DecodeOptions::unknown_messages`].
///
/// Returns `Ok(None)` when the discriminator is outside the catalog and the
/// policy is [`UnknownMessagePolicy::Ignore`].
pub fn try_decode_message(buf: &[u8], options: &DecodeOptions) -> CodecResult<Option<Message>> {
    match decode_message(buf, options) {
        Ok(message) => Ok(Some(message)),
        Err(CodecError::Wire(DecodeError::UnknownMessageType { discriminator }))
            if options.unknown_messages == UnknownMessagePolicy::Ignore =>
        {
            tracing::debug!(
                discriminator,
                family = ?MessageFamily::of(discriminator),
                "ignoring unknown message"
            );
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

/// Returns the raw discriminator without validating it.
pub fn peek_message_type(buf: &[u8]) -> CodecResult<u32> {
    Ok(peek_discriminator(buf)?)
}

fn decode_known(
    message_type: MessageType,
    buf: &[u8],
    options: &DecodeOptions,
) -> CodecResult<Message> {
    let message = match message_type {
        MessageType::ServerSendInfo => ServerSendInfo::decode_with(buf, options)?.into(),
        MessageType::ServerFailAuthentication => {
            ServerFailAuthentication::decode_with(buf, options)?.into()
        }
        MessageType::ServerPassAuthentication => {
            ServerPassAuthentication::decode_with(buf, options)?.into()
        }
        MessageType::ServerUpdateWorld => ServerUpdateWorld::decode_with(buf, options)?.into(),
        MessageType::ServerExiting => ServerExiting::decode_with(buf, options)?.into(),
        MessageType::ClientBeginAuthentication => {
            ClientBeginAuthentication::decode_with(buf, options)?.into()
        }
        MessageType::ClientSendLocalUpdate => {
            ClientSendLocalUpdate::decode_with(buf, options)?.into()
        }
        MessageType::P2PSendingTicket => P2PSendingTicket::decode_with(buf, options)?.into(),
        MessageType::VoiceChatData => VoiceChatData::decode_with(buf, options)?.into(),
    };
    Ok(message)
}
