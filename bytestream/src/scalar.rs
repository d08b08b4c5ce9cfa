//! Single-value wire conventions.
//!
//! Booleans travel as exactly one byte and floats travel as the raw bit
//! pattern of an IEEE-754 single, so both ends agree on layout regardless of
//! how their host language stores either type.

/// Encodes a boolean as its one-byte wire form (`0x00` or `0x01`).
#[must_use]
pub const fn encode_netbool(value: bool) -> u8 {
    value as u8
}

/// Decodes a one-byte wire boolean. Any nonzero byte is `true`.
#[must_use]
pub const fn decode_netbool(byte: u8) -> bool {
    byte != 0
}

/// Reinterprets a float as its 32-bit wire pattern.
///
/// No numeric conversion happens: NaN payloads and signed zero survive.
#[must_use]
pub fn encode_netfloat(value: f32) -> u32 {
    value.to_bits()
}

/// Reinterprets a 32-bit wire pattern as a float.
///
/// Every pattern is accepted. Callers that cannot tolerate NaN or infinity
/// must check `is_finite` themselves.
#[must_use]
pub fn decode_netfloat(bits: u32) -> f32 {
    f32::from_bits(bits)
}
