//! The per-type encode/decode contract.

use bytestream::{ByteReader, ByteWriter};
use wire::{check_size, identify, DecodeOptions, MessageType, DISCRIMINATOR_SIZE};

use crate::error::{CodecError, CodecResult};

/// A message with a fixed wire layout.
///
/// Implementors only describe their body; the discriminator and size checks
/// are shared.
pub trait WireMessage: Sized {
    /// Discriminator written in front of the body.
    const MESSAGE_TYPE: MessageType;

    /// Exact encoded size, discriminator included.
    const WIRE_SIZE: usize = Self::MESSAGE_TYPE.wire_size();

    /// Writes every field after the discriminator.
    fn encode_body(&self, writer: &mut ByteWriter);

    /// Reads every field after the discriminator.
    ///
    /// The reader holds exactly the body, already size-checked.
    fn decode_body(reader: &mut ByteReader<'_>, options: &DecodeOptions) -> CodecResult<Self>;

    /// Encodes the full message.
    fn encode(&self) -> Vec<u8> {
        let mut writer = ByteWriter::with_capacity(Self::WIRE_SIZE);
        self.encode_into(&mut writer);
        writer.finish()
    }

    /// Appends the full message to `writer`.
    fn encode_into(&self, writer: &mut ByteWriter) {
        let start = writer.bytes_written();
        writer.write_u32(Self::MESSAGE_TYPE.raw());
        self.encode_body(writer);
        debug_assert_eq!(
            writer.bytes_written() - start,
            Self::WIRE_SIZE,
            "{} layout drifted from its declared size",
            Self::MESSAGE_TYPE
        );
    }

    /// Decodes a full message with default options.
    fn decode(buf: &[u8]) -> CodecResult<Self> {
        Self::decode_with(buf, &DecodeOptions::default())
    }

    /// Decodes a full message.
    ///
    /// The length is checked before the discriminator, so a buffer of the
    /// wrong size is always a size mismatch.
    fn decode_with(buf: &[u8], options: &DecodeOptions) -> CodecResult<Self> {
        check_size(buf, Self::MESSAGE_TYPE)?;
        let found = identify(buf)?;
        if found != Self::MESSAGE_TYPE {
            return Err(CodecError::UnexpectedMessageType {
                expected: Self::MESSAGE_TYPE,
                found,
            });
        }
        let mut reader = ByteReader::new(&buf[DISCRIMINATOR_SIZE..]);
        let message = Self::decode_body(&mut reader, options)?;
        debug_assert!(reader.is_empty(), "body decoder left bytes unread");
        Ok(message)
    }
}

/// Encodes any catalog message.
pub fn encode<M: WireMessage>(message: &M) -> Vec<u8> {
    message.encode()
}

/// Decodes `buf` as a specific message type.
pub fn decode_as<M: WireMessage>(buf: &[u8], options: &DecodeOptions) -> CodecResult<M> {
    M::decode_with(buf, options)
}
