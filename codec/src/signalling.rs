//! Connection lifecycle messages.

use bytestream::{ByteReader, ByteWriter};
use wire::{DecodeOptions, MessageType, MAX_TOKEN_LEN, SERVER_NAME_CAPACITY};

use crate::error::CodecResult;
use crate::message::WireMessage;
use crate::types::{PeerId, PlayerSlot, TicketBytes};

/// Sent by the server as soon as a connection is established.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ServerSendInfo {
    pub server_id: PeerId,
    pub anti_cheat_secure: bool,
    /// Truncated to 127 bytes on encode.
    pub server_name: String,
}

impl WireMessage for ServerSendInfo {
    const MESSAGE_TYPE: MessageType = MessageType::ServerSendInfo;

    fn encode_body(&self, writer: &mut ByteWriter) {
        writer.write_u64(self.server_id.raw());
        writer.write_netbool(self.anti_cheat_secure);
        if writer.write_fixed_str(&self.server_name, SERVER_NAME_CAPACITY) {
            tracing::trace!(len = self.server_name.len(), "server name truncated");
        }
    }

    fn decode_body(reader: &mut ByteReader<'_>, options: &DecodeOptions) -> CodecResult<Self> {
        Ok(Self {
            server_id: PeerId::new(reader.read_u64()?),
            anti_cheat_secure: reader.read_netbool()?,
            server_name: reader.read_fixed_str(SERVER_NAME_CAPACITY, options.text_policy)?,
        })
    }
}

/// Sent by the server when refusing a connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ServerFailAuthentication;

impl WireMessage for ServerFailAuthentication {
    const MESSAGE_TYPE: MessageType = MessageType::ServerFailAuthentication;

    fn encode_body(&self, _writer: &mut ByteWriter) {}

    fn decode_body(_reader: &mut ByteReader<'_>, _options: &DecodeOptions) -> CodecResult<Self> {
        Ok(Self)
    }
}

/// Sent by the server when accepting a pending connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ServerPassAuthentication {
    pub player_slot: PlayerSlot,
}

impl WireMessage for ServerPassAuthentication {
    const MESSAGE_TYPE: MessageType = MessageType::ServerPassAuthentication;

    fn encode_body(&self, writer: &mut ByteWriter) {
        writer.write_u32(self.player_slot.raw());
    }

    fn decode_body(reader: &mut ByteReader<'_>, _options: &DecodeOptions) -> CodecResult<Self> {
        Ok(Self {
            player_slot: PlayerSlot::try_from(reader.read_u32()?)?,
        })
    }
}

/// Sent by the server to every client when it shuts down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ServerExiting;

impl WireMessage for ServerExiting {
    const MESSAGE_TYPE: MessageType = MessageType::ServerExiting;

    fn encode_body(&self, _writer: &mut ByteWriter) {}

    fn decode_body(_reader: &mut ByteReader<'_>, _options: &DecodeOptions) -> CodecResult<Self> {
        Ok(Self)
    }
}

/// Sent by a client to start authentication.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClientBeginAuthentication {
    pub token: TicketBytes,
    pub client_id: PeerId,
}

impl WireMessage for ClientBeginAuthentication {
    const MESSAGE_TYPE: MessageType = MessageType::ClientBeginAuthentication;

    fn encode_body(&self, writer: &mut ByteWriter) {
        self.token.write_to(writer);
        writer.write_u64(self.client_id.raw());
    }

    fn decode_body(reader: &mut ByteReader<'_>, _options: &DecodeOptions) -> CodecResult<Self> {
        let token = TicketBytes::from_slice(reader.read_len_prefixed(MAX_TOKEN_LEN)?)?;
        Ok(Self {
            token,
            client_id: PeerId::new(reader.read_u64()?),
        })
    }
}
