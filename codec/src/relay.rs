//! Peer-to-peer sub-channel messages.

use bytestream::{ByteReader, ByteWriter};
use wire::{DecodeOptions, MessageType, MAX_TOKEN_LEN, MAX_VOICE_PAYLOAD_LEN};

use crate::error::CodecResult;
use crate::message::WireMessage;
use crate::types::{PeerId, TicketBytes, VoiceBytes};

/// An authentication ticket relayed directly between peers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct P2PSendingTicket {
    pub token: TicketBytes,
    pub sender_id: PeerId,
}

impl WireMessage for P2PSendingTicket {
    const MESSAGE_TYPE: MessageType = MessageType::P2PSendingTicket;

    fn encode_body(&self, writer: &mut ByteWriter) {
        self.token.write_to(writer);
        writer.write_u64(self.sender_id.raw());
    }

    fn decode_body(reader: &mut ByteReader<'_>, _options: &DecodeOptions) -> CodecResult<Self> {
        let token = TicketBytes::from_slice(reader.read_len_prefixed(MAX_TOKEN_LEN)?)?;
        Ok(Self {
            token,
            sender_id: PeerId::new(reader.read_u64()?),
        })
    }
}

/// A chunk of compressed voice from one player.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VoiceChatData {
    pub payload: VoiceBytes,
    pub sender_id: PeerId,
}

impl WireMessage for VoiceChatData {
    const MESSAGE_TYPE: MessageType = MessageType::VoiceChatData;

    fn encode_body(&self, writer: &mut ByteWriter) {
        self.payload.write_to(writer);
        writer.write_u64(self.sender_id.raw());
    }

    fn decode_body(reader: &mut ByteReader<'_>, _options: &DecodeOptions) -> CodecResult<Self> {
        let payload = VoiceBytes::from_slice(reader.read_len_prefixed(MAX_VOICE_PAYLOAD_LEN)?)?;
        Ok(Self {
            payload,
            sender_id: PeerId::new(reader.read_u64()?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodecError;
    use bytestream::ByteError;

    #[test]
    fn ticket_roundtrip() {
        let msg = P2PSendingTicket {
            token: TicketBytes::from_slice(b"opaque-ticket").unwrap(),
            sender_id: PeerId::new(0xFFFF_FFFF_FFFF_FFFF),
        };
        let bytes = msg.encode();
        assert_eq!(bytes.len(), 1040);
        assert_eq!(&bytes[0..4], &601u32.to_le_bytes());
        assert_eq!(P2PSendingTicket::decode(&bytes).unwrap(), msg);
    }

    #[test]
    fn ticket_declared_1025_rejected() {
        let mut bytes = P2PSendingTicket::default().encode();
        bytes[4..8].copy_from_slice(&1025u32.to_le_bytes());
        assert!(matches!(
            P2PSendingTicket::decode(&bytes),
            Err(CodecError::Bytes(ByteError::LengthOutOfRange {
                declared: 1025,
                max: 1024
            }))
        ));
    }

    #[test]
    fn ticket_ignores_bytes_past_declared_length() {
        let msg = P2PSendingTicket {
            token: TicketBytes::from_slice(&[1, 2, 3]).unwrap(),
            sender_id: PeerId::new(5),
        };
        let mut bytes = msg.encode();
        // Garbage in the unused tail of the token buffer.
        for byte in &mut bytes[11..1032] {
            *byte = 0xEE;
        }
        assert_eq!(P2PSendingTicket::decode(&bytes).unwrap(), msg);
    }

    #[test]
    fn voice_roundtrip_full_payload() {
        let msg = VoiceChatData {
            payload: VoiceBytes::new(vec![0x42; 1024]).unwrap(),
            sender_id: PeerId::new(11),
        };
        let bytes = msg.encode();
        assert_eq!(bytes.len(), 1040);
        assert_eq!(VoiceChatData::decode(&bytes).unwrap(), msg);
    }

    #[test]
    fn voice_sender_after_payload() {
        let msg = VoiceChatData {
            payload: VoiceBytes::empty(),
            sender_id: PeerId::new(0x1122_3344_5566_7788),
        };
        let bytes = msg.encode();
        assert_eq!(
            &bytes[1032..1040],
            &0x1122_3344_5566_7788u64.to_le_bytes()
        );
    }
}
