//! Message catalog, fixed sizes and dispatch for the spacewar wire protocol.
//!
//! This crate knows the shape of the protocol but not its contents: which
//! discriminators exist, how many bytes each layout occupies, and how to route
//! an opaque buffer to the right decoder. Field encoding lives in `codec`.
//!
//! # Wire format
//!
//! ```text
//! ┌──────────────────┬─────────────────────────────────────────────┐
//! │ messageType (u32)│ type-specific fields, no padding            │
//! └──────────────────┴─────────────────────────────────────────────┘
//! ```
//!
//! All multi-byte values are little-endian. Every message type has exactly
//! one valid length; see [`MessageType::wire_size`].
//!
//! # Design Principles
//!
//! - **Stable wire format** - Discriminators and sizes are the interop contract.
//! - **Exact sizes** - A buffer must match its layout byte for byte.
//! - **Caller decides policy** - Unknown discriminators are reported, and
//!   [`DecodeOptions`] says whether they are fatal.

mod catalog;
mod constants;
mod disconnect;
mod error;
mod options;

pub use catalog::{check_size, identify, peek_discriminator, MessageFamily, MessageType};
pub use constants::{
    CLIENT_UPDATE_SEND_RATE, CLIENT_UPDATE_SIZE, DISCRIMINATOR_SIZE, MASTER_SERVER_UPDATER_PORT,
    MAX_PHOTON_BEAMS_PER_SHIP, MAX_PLAYERS_PER_SERVER, MAX_TOKEN_LEN, MAX_VOICE_PAYLOAD_LEN,
    PHOTON_BEAM_FIRE_INTERVAL_TICKS, PHOTON_BEAM_LIFETIME_TICKS, PHOTON_BEAM_SIZE,
    PLAYER_NAME_CAPACITY, SERVER_NAME_CAPACITY, SERVER_PORT, SERVER_UPDATE_SEND_RATE,
    SHIP_RECORD_SIZE, WORLD_STATE_SIZE,
};
pub use disconnect::{DisconnectReason, APP_CLOSE_CODE_BASE};
pub use error::{DecodeError, WireResult};
pub use options::{DecodeOptions, UnknownMessagePolicy};
