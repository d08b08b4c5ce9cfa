//! Inspection and decoding tools for spacewar wire messages.
//!
//! This crate backs the `spacewar-tools` binary:
//!
//! - Inspect a captured buffer: discriminator, family, expected vs actual size
//! - Decode a captured buffer into JSON or a human-readable summary
//!
//! # Design Principles
//!
//! - **First-class tooling** - These tools are part of the product, not afterthoughts.
//! - **Human-readable output** - Make it easy to see why a buffer was rejected.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use codec::{try_decode_message, Message};
use serde::Serialize;
use wire::{identify, peek_discriminator, DecodeOptions, MessageFamily, MessageType};

/// Structural facts about a buffer, gathered without decoding its body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InspectReport {
    pub len: usize,
    pub discriminator: u32,
    pub family: MessageFamily,
    pub message_type: Option<MessageType>,
    pub expected_size: Option<usize>,
}

impl InspectReport {
    /// Returns true when the discriminator is known and the length matches.
    pub fn size_ok(&self) -> bool {
        self.expected_size == Some(self.len)
    }
}

/// Reads the discriminator and checks the size against the catalog.
///
/// Fails only if the buffer cannot hold a discriminator.
pub fn inspect_packet(bytes: &[u8]) -> Result<InspectReport> {
    let discriminator = peek_discriminator(bytes).context("read discriminator")?;
    let message_type = identify(bytes).ok();
    Ok(InspectReport {
        len: bytes.len(),
        discriminator,
        family: MessageFamily::of(discriminator),
        message_type,
        expected_size: message_type.map(MessageType::wire_size),
    })
}

/// Result of decoding one buffer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodeOutput {
    pub discriminator: u32,
    pub size: usize,
    /// `None` when the discriminator is unknown and the options ignore it.
    pub message: Option<Message>,
}

/// Decodes a buffer into a serializable value.
pub fn decode_packet_json(bytes: &[u8], options: &DecodeOptions) -> Result<DecodeOutput> {
    let discriminator = peek_discriminator(bytes).context("read discriminator")?;
    let message = try_decode_message(bytes, options)
        .with_context(|| format!("decode message {discriminator}"))?;
    Ok(DecodeOutput {
        discriminator,
        size: bytes.len(),
        message,
    })
}

/// Renders a decoded buffer for humans.
pub fn format_decode_pretty(output: &DecodeOutput) -> String {
    let mut out = String::new();
    let Some(message) = &output.message else {
        let _ = write!(
            out,
            "unknown message {} ({:?} family, {} bytes), skipped",
            output.discriminator,
            MessageFamily::of(output.discriminator),
            output.size
        );
        return out;
    };

    let _ = writeln!(out, "{} ({} bytes)", message.message_type(), output.size);
    match message {
        Message::ServerSendInfo(info) => {
            let _ = writeln!(out, "  server id: {}", info.server_id.raw());
            let _ = writeln!(out, "  anti-cheat secure: {}", info.anti_cheat_secure);
            let _ = write!(out, "  name: {:?}", info.server_name);
        }
        Message::ServerFailAuthentication(_) | Message::ServerExiting(_) => {
            let _ = write!(out, "  (no fields)");
        }
        Message::ServerPassAuthentication(pass) => {
            let _ = write!(out, "  player slot: {}", pass.player_slot.index());
        }
        Message::ServerUpdateWorld(world) => {
            let _ = write!(out, "  state: {:?}", world.game_state);
            if let Some(winner) = world.winner() {
                let _ = write!(out, " (winner: slot {})", winner.index());
            }
            for player in world.active_slots() {
                let ship = player.ship;
                let _ = write!(
                    out,
                    "\n  slot {}: id {} score {} pos ({:.1}, {:.1}) beams {}{}",
                    player.slot.index(),
                    player.id.raw(),
                    player.score,
                    ship.position.x,
                    ship.position.y,
                    ship.active_beams().count(),
                    if ship.exploding { " exploding" } else { "" }
                );
            }
        }
        Message::ClientBeginAuthentication(auth) => {
            let _ = writeln!(out, "  client id: {}", auth.client_id.raw());
            let _ = write!(out, "  token: {} bytes", auth.token.len());
        }
        Message::ClientSendLocalUpdate(local) => {
            let update = &local.update;
            let controls = [
                ("fire", update.fire),
                ("left", update.turn_left),
                ("right", update.turn_right),
                ("fwd", update.forward_thrust),
                ("rev", update.reverse_thrust),
            ];
            let held: Vec<&str> = controls
                .iter()
                .filter(|(_, on)| *on)
                .map(|(name, _)| *name)
                .collect();
            let _ = writeln!(out, "  ship slot: {}", local.ship_slot.index());
            let _ = writeln!(out, "  player: {:?}", update.player_name);
            let _ = write!(out, "  controls: [{}]", held.join(" "));
        }
        Message::P2PSendingTicket(ticket) => {
            let _ = writeln!(out, "  sender id: {}", ticket.sender_id.raw());
            let _ = write!(out, "  token: {} bytes", ticket.token.len());
        }
        Message::VoiceChatData(voice) => {
            let _ = writeln!(out, "  sender id: {}", voice.sender_id.raw());
            let _ = write!(out, "  payload: {} bytes", voice.payload.len());
        }
    }
    out
}
