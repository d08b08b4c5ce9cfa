//! Typed encoding/decoding for every spacewar wire message.
//!
//! This is the main codec crate that ties together `bytestream` and `wire`:
//! each message in the catalog is a plain struct that implements
//! [`WireMessage`], and [`decode_message`] routes an opaque buffer to the
//! right decoder.
//!
//! # Example
//!
//! ```
//! use codec::{decode_message, Message, PeerId, ServerSendInfo, WireMessage};
//! use wire::DecodeOptions;
//!
//! let info = ServerSendInfo {
//!     server_id: PeerId::new(90_210),
//!     anti_cheat_secure: true,
//!     server_name: "Nebula".to_owned(),
//! };
//! let bytes = info.encode();
//! assert_eq!(bytes.len(), 141);
//!
//! let decoded = decode_message(&bytes, &DecodeOptions::default()).unwrap();
//! assert_eq!(decoded, Message::ServerSendInfo(info));
//! ```
//!
//! # Design Principles
//!
//! - **Exact layouts** - Every message encodes to its catalog size, always.
//! - **Size before type** - A buffer of the wrong length is rejected before
//!   its discriminator is trusted.
//! - **Domain types at the edge** - Slots, game states and bounded payloads
//!   are validated on decode, not left to the caller.

mod client;
mod dispatch;
mod error;
mod message;
mod relay;
mod ship;
mod signalling;
mod types;
mod world;

pub use client::{ClientSendLocalUpdate, ClientUpdate};
pub use dispatch::{decode_message, peek_message_type, try_decode_message, Message};
pub use error::{CodecError, CodecResult, ValueKind};
pub use message::{decode_as, encode, WireMessage};
pub use relay::{P2PSendingTicket, VoiceChatData};
pub use ship::{PhotonBeam, ShipRecord};
pub use signalling::{
    ClientBeginAuthentication, ServerExiting, ServerFailAuthentication, ServerPassAuthentication,
    ServerSendInfo,
};
pub use types::{
    BoundedBytes, PeerId, PlayerSlot, ServerGameState, TicketBytes, Vec2, VoiceBytes,
};
pub use world::{ActivePlayer, ServerUpdateWorld};
