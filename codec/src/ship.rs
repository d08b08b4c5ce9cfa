//! Ship and photon beam sub-layouts of the world update.

use bytestream::{ByteReader, ByteResult, ByteWriter};
use wire::MAX_PHOTON_BEAMS_PER_SHIP;

use crate::types::Vec2;

/// One photon beam slot (21 bytes).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhotonBeam {
    pub active: bool,
    pub rotation: f32,
    pub velocity: Vec2,
    pub position: Vec2,
}

impl PhotonBeam {
    /// Writes the beam record.
    pub fn encode_into(&self, writer: &mut ByteWriter) {
        writer.write_netbool(self.active);
        writer.write_netfloat(self.rotation);
        self.velocity.write_to(writer);
        self.position.write_to(writer);
    }

    /// Reads a beam record.
    pub fn decode_from(reader: &mut ByteReader<'_>) -> ByteResult<Self> {
        Ok(Self {
            active: reader.read_netbool()?,
            rotation: reader.read_netfloat()?,
            velocity: Vec2::read_from(reader)?,
            position: Vec2::read_from(reader)?,
        })
    }
}

/// Per-player ship snapshot (207 bytes).
///
/// Beam slots are always all present on the wire; consumers skip the ones
/// whose `active` flag is clear.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipRecord {
    pub rotation: f32,
    pub rotation_delta: f32,
    pub acceleration: Vec2,
    pub velocity: Vec2,
    pub position: Vec2,
    pub exploding: bool,
    pub disabled: bool,
    pub forward_thrusters: bool,
    pub reverse_thrusters: bool,
    pub decoration: i32,
    pub weapon: i32,
    pub power: i32,
    pub shield_strength: i32,
    pub photon_beams: [PhotonBeam; MAX_PHOTON_BEAMS_PER_SHIP],
    pub thruster_level: f32,
    pub turn_speed: f32,
}

impl ShipRecord {
    /// Iterates over beams that are in flight.
    pub fn active_beams(&self) -> impl Iterator<Item = &PhotonBeam> {
        self.photon_beams.iter().filter(|beam| beam.active)
    }

    /// Writes the ship record.
    pub fn encode_into(&self, writer: &mut ByteWriter) {
        writer.write_netfloat(self.rotation);
        writer.write_netfloat(self.rotation_delta);
        self.acceleration.write_to(writer);
        self.velocity.write_to(writer);
        self.position.write_to(writer);
        writer.write_netbool(self.exploding);
        writer.write_netbool(self.disabled);
        writer.write_netbool(self.forward_thrusters);
        writer.write_netbool(self.reverse_thrusters);
        writer.write_i32(self.decoration);
        writer.write_i32(self.weapon);
        writer.write_i32(self.power);
        writer.write_i32(self.shield_strength);
        for beam in &self.photon_beams {
            beam.encode_into(writer);
        }
        writer.write_netfloat(self.thruster_level);
        writer.write_netfloat(self.turn_speed);
    }

    /// Reads a ship record.
    pub fn decode_from(reader: &mut ByteReader<'_>) -> ByteResult<Self> {
        let rotation = reader.read_netfloat()?;
        let rotation_delta = reader.read_netfloat()?;
        let acceleration = Vec2::read_from(reader)?;
        let velocity = Vec2::read_from(reader)?;
        let position = Vec2::read_from(reader)?;
        let exploding = reader.read_netbool()?;
        let disabled = reader.read_netbool()?;
        let forward_thrusters = reader.read_netbool()?;
        let reverse_thrusters = reader.read_netbool()?;
        let decoration = reader.read_i32()?;
        let weapon = reader.read_i32()?;
        let power = reader.read_i32()?;
        let shield_strength = reader.read_i32()?;
        let mut photon_beams = [PhotonBeam::default(); MAX_PHOTON_BEAMS_PER_SHIP];
        for beam in &mut photon_beams {
            *beam = PhotonBeam::decode_from(reader)?;
        }
        Ok(Self {
            rotation,
            rotation_delta,
            acceleration,
            velocity,
            position,
            exploding,
            disabled,
            forward_thrusters,
            reverse_thrusters,
            decoration,
            weapon,
            power,
            shield_strength,
            photon_beams,
            thruster_level: reader.read_netfloat()?,
            turn_speed: reader.read_netfloat()?,
        })
    }
}
