//! Byte writer for fixed-layout messages.

use crate::error::{ByteError, ByteResult};
use crate::scalar::{encode_netbool, encode_netfloat};
use crate::text::truncate_for_field;

/// A growable writer producing little-endian, unpadded field layouts.
///
/// Call [`finish`](Self::finish) to take the encoded bytes.
#[derive(Debug, Default)]
pub struct ByteWriter {
    bytes: Vec<u8>,
}

impl ByteWriter {
    /// Creates a new empty `ByteWriter`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new `ByteWriter` with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bytes),
        }
    }

    /// Returns the number of bytes written so far.
    #[must_use]
    pub fn bytes_written(&self) -> usize {
        self.bytes.len()
    }

    /// Writes a single byte.
    pub fn write_u8(&mut self, value: u8) {
        self.bytes.push(value);
    }

    /// Writes a `u32` (little-endian).
    pub fn write_u32(&mut self, value: u32) {
        self.bytes.extend_from_slice(&value.to_le_bytes());
    }

    /// Writes a `u64` (little-endian).
    pub fn write_u64(&mut self, value: u64) {
        self.bytes.extend_from_slice(&value.to_le_bytes());
    }

    /// Writes an `i32` (little-endian, two's complement).
    pub fn write_i32(&mut self, value: i32) {
        self.bytes.extend_from_slice(&value.to_le_bytes());
    }

    /// Writes a one-byte boolean.
    pub fn write_netbool(&mut self, value: bool) {
        self.write_u8(encode_netbool(value));
    }

    /// Writes a float as its raw 32-bit pattern.
    pub fn write_netfloat(&mut self, value: f32) {
        self.write_u32(encode_netfloat(value));
    }

    /// Writes raw bytes.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes);
    }

    /// Writes `count` zero bytes.
    pub fn write_zeros(&mut self, count: usize) {
        self.bytes.resize(self.bytes.len() + count, 0);
    }

    /// Writes `text` into a fixed field of exactly `capacity` bytes.
    ///
    /// The text is truncated to fit, and the remainder of the field
    /// (always at least one byte when `capacity > 0`) is zero-filled.
    /// Content ends at the first `'\0'` in `text`; nothing after it is
    /// written. Returns `true` if any of `text` was dropped.
    pub fn write_fixed_str(&mut self, text: &str, capacity: usize) -> bool {
        let kept = truncate_for_field(text, capacity);
        self.write_bytes(kept.as_bytes());
        self.write_zeros(capacity - kept.len());
        kept.len() < text.len()
    }

    /// Writes a `u32` length followed by a `max`-byte buffer holding `content`.
    ///
    /// Capacity beyond `content` is zero-filled.
    ///
    /// # Errors
    ///
    /// Returns [`ByteError::LengthOutOfRange`] if `content` is longer than `max`.
    pub fn write_len_prefixed(&mut self, content: &[u8], max: usize) -> ByteResult<()> {
        let out_of_range = ByteError::LengthOutOfRange {
            declared: content.len(),
            max,
        };
        if content.len() > max {
            return Err(out_of_range);
        }
        let len = u32::try_from(content.len()).map_err(|_| out_of_range)?;
        self.write_u32(len);
        self.write_bytes(content);
        self.write_zeros(max - content.len());
        Ok(())
    }

    /// Finishes writing and returns the byte buffer.
    #[must_use]
    pub fn finish(self) -> Vec<u8> {
        self.bytes
    }

    /// Finishes writing and appends to the provided buffer.
    pub fn finish_into(mut self, buf: &mut Vec<u8>) {
        buf.append(&mut self.bytes);
    }
}
