//! Client input, client to server.

use bytestream::{ByteReader, ByteWriter};
use wire::{DecodeOptions, MessageType, PLAYER_NAME_CAPACITY};

use crate::error::CodecResult;
use crate::message::WireMessage;
use crate::types::PlayerSlot;

/// Control state and cosmetics a client reports each tick.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClientUpdate {
    pub fire: bool,
    pub turn_left: bool,
    pub turn_right: bool,
    pub forward_thrust: bool,
    pub reverse_thrust: bool,
    pub decoration: i32,
    pub weapon: i32,
    pub power: i32,
    pub shield: i32,
    /// Truncated to 63 bytes on encode.
    pub player_name: String,
    pub thruster_level: f32,
    pub turn_speed: f32,
}

impl ClientUpdate {
    /// Writes the client update record.
    pub fn encode_into(&self, writer: &mut ByteWriter) {
        writer.write_netbool(self.fire);
        writer.write_netbool(self.turn_left);
        writer.write_netbool(self.turn_right);
        writer.write_netbool(self.forward_thrust);
        writer.write_netbool(self.reverse_thrust);
        writer.write_i32(self.decoration);
        writer.write_i32(self.weapon);
        writer.write_i32(self.power);
        writer.write_i32(self.shield);
        if writer.write_fixed_str(&self.player_name, PLAYER_NAME_CAPACITY) {
            tracing::trace!(len = self.player_name.len(), "player name truncated");
        }
        writer.write_netfloat(self.thruster_level);
        writer.write_netfloat(self.turn_speed);
    }

    /// Reads a client update record.
    pub fn decode_from(reader: &mut ByteReader<'_>, options: &DecodeOptions) -> CodecResult<Self> {
        Ok(Self {
            fire: reader.read_netbool()?,
            turn_left: reader.read_netbool()?,
            turn_right: reader.read_netbool()?,
            forward_thrust: reader.read_netbool()?,
            reverse_thrust: reader.read_netbool()?,
            decoration: reader.read_i32()?,
            weapon: reader.read_i32()?,
            power: reader.read_i32()?,
            shield: reader.read_i32()?,
            player_name: reader.read_fixed_str(PLAYER_NAME_CAPACITY, options.text_policy)?,
            thruster_level: reader.read_netfloat()?,
            turn_speed: reader.read_netfloat()?,
        })
    }
}

/// A client's input for the slot it was assigned.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClientSendLocalUpdate {
    pub ship_slot: PlayerSlot,
    pub update: ClientUpdate,
}

impl ClientSendLocalUpdate {
    /// Creates an update for `ship_slot`.
    #[must_use]
    pub const fn new(ship_slot: PlayerSlot, update: ClientUpdate) -> Self {
        Self { ship_slot, update }
    }
}

impl WireMessage for ClientSendLocalUpdate {
    const MESSAGE_TYPE: MessageType = MessageType::ClientSendLocalUpdate;

    fn encode_body(&self, writer: &mut ByteWriter) {
        writer.write_u32(self.ship_slot.raw());
        self.update.encode_into(writer);
    }

    fn decode_body(reader: &mut ByteReader<'_>, options: &DecodeOptions) -> CodecResult<Self> {
        Ok(Self {
            ship_slot: PlayerSlot::try_from(reader.read_u32()?)?,
            update: ClientUpdate::decode_from(reader, options)?,
        })
    }
}
