//! Typed field values shared by several messages.

use bytestream::{ByteError, ByteReader, ByteWriter};
use wire::{MAX_PLAYERS_PER_SERVER, MAX_TOKEN_LEN, MAX_VOICE_PAYLOAD_LEN};

use crate::error::{CodecError, ValueKind};

/// A 64-bit player or server identity as issued by the identity provider.
///
/// Zero means "nobody".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PeerId(u64);

impl PeerId {
    /// The empty identity.
    pub const NONE: Self = Self(0);

    /// Creates a new identity.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw identity value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Returns `true` if this is a real identity.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }
}

impl From<u64> for PeerId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<PeerId> for u64 {
    fn from(id: PeerId) -> Self {
        id.0
    }
}

/// Index of a player slot on a server, always below
/// [`MAX_PLAYERS_PER_SERVER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u32", into = "u32"))]
pub struct PlayerSlot(u8);

impl PlayerSlot {
    /// Creates a slot, `None` if `index` is out of range.
    #[must_use]
    pub const fn new(index: usize) -> Option<Self> {
        if index < MAX_PLAYERS_PER_SERVER {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Returns the slot as an array index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the slot as carried on the wire.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0 as u32
    }

    /// Iterates over every slot in order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..MAX_PLAYERS_PER_SERVER).filter_map(Self::new)
    }
}

impl TryFrom<u32> for PlayerSlot {
    type Error = CodecError;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        usize::try_from(raw)
            .ok()
            .and_then(Self::new)
            .ok_or(CodecError::InvalidValue {
                kind: ValueKind::PlayerSlot,
                value: raw,
            })
    }
}

impl From<PlayerSlot> for u32 {
    fn from(slot: PlayerSlot) -> Self {
        slot.raw()
    }
}

/// What phase the server's round is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u32)]
pub enum ServerGameState {
    #[default]
    WaitingForPlayers = 0,
    Active = 1,
    Draw = 2,
    Winner = 3,
    Exiting = 4,
}

impl ServerGameState {
    /// Returns the value carried on the wire.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self as u32
    }
}

impl TryFrom<u32> for ServerGameState {
    type Error = CodecError;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Self::WaitingForPlayers),
            1 => Ok(Self::Active),
            2 => Ok(Self::Draw),
            3 => Ok(Self::Winner),
            4 => Ok(Self::Exiting),
            _ => Err(CodecError::InvalidValue {
                kind: ValueKind::GameState,
                value: raw,
            }),
        }
    }
}

/// A byte payload no longer than `MAX`.
///
/// On the wire this is a `u32` length followed by a `MAX`-byte buffer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<u8>", into = "Vec<u8>"))]
pub struct BoundedBytes<const MAX: usize>(Vec<u8>);

/// Authentication or peer ticket bytes.
pub type TicketBytes = BoundedBytes<MAX_TOKEN_LEN>;

/// Encoded voice samples.
pub type VoiceBytes = BoundedBytes<MAX_VOICE_PAYLOAD_LEN>;

impl<const MAX: usize> BoundedBytes<MAX> {
    /// Field capacity in bytes.
    pub const CAPACITY: usize = MAX;

    /// Creates an empty payload.
    #[must_use]
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    /// Wraps `bytes`.
    ///
    /// # Errors
    ///
    /// Returns [`ByteError::LengthOutOfRange`] if `bytes` is longer than `MAX`.
    pub fn new(bytes: Vec<u8>) -> Result<Self, ByteError> {
        if bytes.len() > MAX {
            return Err(ByteError::LengthOutOfRange {
                declared: bytes.len(),
                max: MAX,
            });
        }
        Ok(Self(bytes))
    }

    /// Copies `bytes` into a new payload.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ByteError> {
        Self::new(bytes.to_vec())
    }

    /// Returns the payload bytes.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Returns the payload length.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the payload is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Unwraps the payload bytes.
    #[must_use]
    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }

    pub(crate) fn write_to(&self, writer: &mut ByteWriter) {
        let written = writer.write_len_prefixed(&self.0, MAX);
        debug_assert!(written.is_ok(), "length is bounded at construction");
    }
}

impl<const MAX: usize> TryFrom<Vec<u8>> for BoundedBytes<MAX> {
    type Error = ByteError;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        Self::new(bytes)
    }
}

impl<const MAX: usize> TryFrom<&[u8]> for BoundedBytes<MAX> {
    type Error = ByteError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(bytes)
    }
}

impl<const MAX: usize> From<BoundedBytes<MAX>> for Vec<u8> {
    fn from(bytes: BoundedBytes<MAX>) -> Self {
        bytes.0
    }
}

impl<const MAX: usize> AsRef<[u8]> for BoundedBytes<MAX> {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// A pair of single-precision axis values.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// Creates a new vector.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub(crate) fn write_to(self, writer: &mut ByteWriter) {
        writer.write_netfloat(self.x);
        writer.write_netfloat(self.y);
    }

    pub(crate) fn read_from(reader: &mut ByteReader<'_>) -> Result<Self, ByteError> {
        Ok(Self {
            x: reader.read_netfloat()?,
            y: reader.read_netfloat()?,
        })
    }
}
