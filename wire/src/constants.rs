//! Protocol constants and field layout sizes.
//!
//! None of these are negotiated. Both peers compile them in, and any change
//! breaks interop with existing peers.

/// Maximum number of players who can join a server and play simultaneously.
pub const MAX_PLAYERS_PER_SERVER: usize = 4;

/// How long photon beams live before expiring, in ticks.
pub const PHOTON_BEAM_LIFETIME_TICKS: u32 = 1750;

/// Minimum ticks between two shots from the same ship.
pub const PHOTON_BEAM_FIRE_INTERVAL_TICKS: u32 = 250;

/// Beam slots per ship: enough for every beam that can be alive at once.
pub const MAX_PHOTON_BEAMS_PER_SHIP: usize =
    (PHOTON_BEAM_LIFETIME_TICKS / PHOTON_BEAM_FIRE_INTERVAL_TICKS) as usize;

/// Capacity of an authentication or P2P ticket buffer.
pub const MAX_TOKEN_LEN: usize = 1024;

/// Capacity of a voice chat payload buffer.
pub const MAX_VOICE_PAYLOAD_LEN: usize = 1024;

/// Capacity of the server display name field, terminator included.
pub const SERVER_NAME_CAPACITY: usize = 128;

/// Capacity of the player display name field, terminator included.
pub const PLAYER_NAME_CAPACITY: usize = 64;

/// Size of the leading message type discriminator.
pub const DISCRIMINATOR_SIZE: usize = 4;

/// UDP port the game server listens on.
pub const SERVER_PORT: u16 = 27015;

/// UDP port the master server updater listens on.
pub const MASTER_SERVER_UPDATER_PORT: u16 = 27016;

/// World updates sent by the server per second.
pub const SERVER_UPDATE_SEND_RATE: u32 = 60;

/// Local updates sent by each client per second.
pub const CLIENT_UPDATE_SEND_RATE: u32 = 30;

/// Photon beam record: active flag + rotation + velocity(2) + position(2).
pub const PHOTON_BEAM_SIZE: usize = 1 + 5 * 4;

/// Ship record (207 bytes).
pub const SHIP_RECORD_SIZE: usize = 8 * 4 // rotation, delta, accel(2), velocity(2), position(2)
    + 4 // exploding, disabled, forward thrust, reverse thrust
    + 4 * 4 // decoration, weapon, power, shield
    + MAX_PHOTON_BEAMS_PER_SHIP * PHOTON_BEAM_SIZE
    + 2 * 4; // thruster level, turn speed

/// Client input record (93 bytes).
pub const CLIENT_UPDATE_SIZE: usize = 5 // control flags
    + 4 * 4 // decoration, weapon, power, shield
    + PLAYER_NAME_CAPACITY
    + 2 * 4; // thruster level, turn speed

/// Per-tick world state after the discriminator (888 bytes).
pub const WORLD_STATE_SIZE: usize = 4 // game state
    + 4 // winner
    + MAX_PLAYERS_PER_SERVER // active flags
    + MAX_PLAYERS_PER_SERVER * 4 // scores
    + MAX_PLAYERS_PER_SERVER * SHIP_RECORD_SIZE
    + MAX_PLAYERS_PER_SERVER * 8; // identities
