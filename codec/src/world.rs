//! Authoritative per-tick world snapshot, server to client.

use bytestream::{ByteReader, ByteWriter};
use wire::{DecodeOptions, MessageType, MAX_PLAYERS_PER_SERVER};

use crate::error::CodecResult;
use crate::message::WireMessage;
use crate::ship::ShipRecord;
use crate::types::{PeerId, PlayerSlot, ServerGameState};

/// World state broadcast by the server every update tick.
///
/// All four player slots are always on the wire. Slots whose
/// `players_active` flag is clear carry stale or zeroed data.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ServerUpdateWorld {
    pub game_state: ServerGameState,
    /// Only meaningful when `game_state` is [`ServerGameState::Winner`].
    pub player_who_won: u32,
    pub players_active: [bool; MAX_PLAYERS_PER_SERVER],
    pub player_scores: [u32; MAX_PLAYERS_PER_SERVER],
    pub ships: [ShipRecord; MAX_PLAYERS_PER_SERVER],
    pub player_ids: [PeerId; MAX_PLAYERS_PER_SERVER],
}

/// One active player's view into a world update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivePlayer<'a> {
    pub slot: PlayerSlot,
    pub score: u32,
    pub id: PeerId,
    pub ship: &'a ShipRecord,
}

impl ServerUpdateWorld {
    /// Creates an update with every slot empty.
    #[must_use]
    pub fn new(game_state: ServerGameState, player_who_won: u32) -> Self {
        Self {
            game_state,
            player_who_won,
            ..Self::default()
        }
    }

    /// Returns the winning slot when the round has a winner.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerSlot> {
        if self.game_state != ServerGameState::Winner {
            return None;
        }
        PlayerSlot::try_from(self.player_who_won).ok()
    }

    /// Iterates over slots whose active flag is set.
    pub fn active_slots(&self) -> impl Iterator<Item = ActivePlayer<'_>> {
        PlayerSlot::all()
            .filter(|slot| self.players_active[slot.index()])
            .map(|slot| {
                let i = slot.index();
                ActivePlayer {
                    slot,
                    score: self.player_scores[i],
                    id: self.player_ids[i],
                    ship: &self.ships[i],
                }
            })
    }
}

impl WireMessage for ServerUpdateWorld {
    const MESSAGE_TYPE: MessageType = MessageType::ServerUpdateWorld;

    fn encode_body(&self, writer: &mut ByteWriter) {
        writer.write_u32(self.game_state.raw());
        writer.write_u32(self.player_who_won);
        for &active in &self.players_active {
            writer.write_netbool(active);
        }
        for &score in &self.player_scores {
            writer.write_u32(score);
        }
        for ship in &self.ships {
            ship.encode_into(writer);
        }
        for id in &self.player_ids {
            writer.write_u64(id.raw());
        }
    }

    fn decode_body(reader: &mut ByteReader<'_>, _options: &DecodeOptions) -> CodecResult<Self> {
        let game_state = ServerGameState::try_from(reader.read_u32()?)?;
        let player_who_won = reader.read_u32()?;

        let mut players_active = [false; MAX_PLAYERS_PER_SERVER];
        for active in &mut players_active {
            *active = reader.read_netbool()?;
        }
        let mut player_scores = [0u32; MAX_PLAYERS_PER_SERVER];
        for score in &mut player_scores {
            *score = reader.read_u32()?;
        }
        let mut ships: [ShipRecord; MAX_PLAYERS_PER_SERVER] = Default::default();
        for ship in &mut ships {
            *ship = ShipRecord::decode_from(reader)?;
        }
        let mut player_ids = [PeerId::NONE; MAX_PLAYERS_PER_SERVER];
        for id in &mut player_ids {
            *id = PeerId::new(reader.read_u64()?);
        }

        Ok(Self {
            game_state,
            player_who_won,
            players_active,
            player_scores,
            ships,
            player_ids,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CodecError, ValueKind};
    use wire::SHIP_RECORD_SIZE;

    #[test]
    fn empty_world_size() {
        let bytes = ServerUpdateWorld::new(ServerGameState::WaitingForPlayers, 0).encode();
        assert_eq!(bytes.len(), 892);
        assert_eq!(&bytes[0..4], &[4, 0, 0, 0]);
    }

    #[test]
    fn scores_and_flags_keep_slot_order() {
        let mut world = ServerUpdateWorld::new(ServerGameState::Active, 0);
        world.player_scores = [10, 0, 5, 0];
        world.players_active = [true, false, true, false];

        let decoded = ServerUpdateWorld::decode(&world.encode()).unwrap();
        assert_eq!(decoded.player_scores, [10, 0, 5, 0]);
        assert_eq!(decoded.players_active, [true, false, true, false]);
    }

    #[test]
    fn field_offsets() {
        let mut world = ServerUpdateWorld::new(ServerGameState::Winner, 2);
        world.players_active = [false, true, false, false];
        world.player_scores[1] = 0xAABB;
        world.player_ids[3] = PeerId::new(0x0102_0304_0506_0708);
        let bytes = world.encode();

        assert_eq!(&bytes[4..8], &[3, 0, 0, 0]);
        assert_eq!(&bytes[8..12], &[2, 0, 0, 0]);
        assert_eq!(&bytes[12..16], &[0, 1, 0, 0]);
        assert_eq!(&bytes[20..24], &0xAABBu32.to_le_bytes());
        let ids_start = 32 + 4 * SHIP_RECORD_SIZE;
        assert_eq!(ids_start, 860);
        assert_eq!(&bytes[ids_start + 24..ids_start + 32], &[8, 7, 6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn unknown_game_state_rejected() {
        let mut bytes = ServerUpdateWorld::default().encode();
        bytes[4..8].copy_from_slice(&9u32.to_le_bytes());
        assert_eq!(
            ServerUpdateWorld::decode(&bytes).unwrap_err(),
            CodecError::InvalidValue {
                kind: ValueKind::GameState,
                value: 9
            }
        );
    }

    #[test]
    fn winner_only_when_state_says_so() {
        let world = ServerUpdateWorld::new(ServerGameState::Winner, 1);
        assert_eq!(world.winner(), PlayerSlot::new(1));
        let world = ServerUpdateWorld::new(ServerGameState::Draw, 1);
        assert_eq!(world.winner(), None);
        let world = ServerUpdateWorld::new(ServerGameState::Winner, 17);
        assert_eq!(world.winner(), None);
    }

    #[test]
    fn active_slots_skips_inactive_slots() {
        let mut world = ServerUpdateWorld::new(ServerGameState::Active, 0);
        world.players_active = [false, true, false, true];
        world.player_scores = [99, 1, 99, 3];
        world.player_ids = [PeerId::new(9), PeerId::new(10), PeerId::new(9), PeerId::new(30)];
        world.ships[3].position.x = 42.0;

        let active: Vec<_> = world.active_slots().collect();
        assert_eq!(active.len(), 2);
        assert_eq!(active[0].slot.index(), 1);
        assert_eq!(active[0].score, 1);
        assert_eq!(active[1].id, PeerId::new(30));
        assert_eq!(active[1].ship.position.x, 42.0);
    }

    #[test]
    fn inactive_slots_still_decoded() {
        let mut world = ServerUpdateWorld::new(ServerGameState::Active, 0);
        world.ships[2].rotation = 3.0;
        let decoded = ServerUpdateWorld::decode(&world.encode()).unwrap();
        assert!(!decoded.players_active[2]);
        assert_eq!(decoded.ships[2].rotation, 3.0);
    }
}
