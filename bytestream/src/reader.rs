//! Bounded byte reader for fixed-layout messages.

use crate::error::{ByteError, ByteResult};
use crate::scalar::{decode_netbool, decode_netfloat};
use crate::text::{decode_text_field, TextPolicy};

/// A byte reader for decoding fixed-layout, little-endian fields.
///
/// All read operations are bounds-checked and return errors on failure.
/// The reader never panics on malformed input.
#[derive(Debug)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    /// Creates a new `ByteReader` from a byte slice.
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the number of bytes remaining to read.
    #[must_use]
    pub const fn bytes_remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Returns `true` if there are no more bytes to read.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bytes_remaining() == 0
    }

    /// Returns the current byte position.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Reads a single byte.
    pub fn read_u8(&mut self) -> ByteResult<u8> {
        let [byte] = self.read_array::<1>()?;
        Ok(byte)
    }

    /// Reads a `u32` (little-endian).
    pub fn read_u32(&mut self) -> ByteResult<u32> {
        self.read_array().map(u32::from_le_bytes)
    }

    /// Reads a `u64` (little-endian).
    pub fn read_u64(&mut self) -> ByteResult<u64> {
        self.read_array().map(u64::from_le_bytes)
    }

    /// Reads an `i32` (little-endian, two's complement).
    pub fn read_i32(&mut self) -> ByteResult<i32> {
        self.read_array().map(i32::from_le_bytes)
    }

    /// Reads a one-byte boolean.
    pub fn read_netbool(&mut self) -> ByteResult<bool> {
        self.read_u8().map(decode_netbool)
    }

    /// Reads a float carried as its raw 32-bit pattern.
    pub fn read_netfloat(&mut self) -> ByteResult<f32> {
        self.read_u32().map(decode_netfloat)
    }

    /// Reads `len` raw bytes.
    pub fn read_bytes(&mut self, len: usize) -> ByteResult<&'a [u8]> {
        self.ensure_bytes(len)?;
        let out = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(out)
    }

    /// Skips `len` bytes.
    pub fn skip(&mut self, len: usize) -> ByteResult<()> {
        self.read_bytes(len).map(|_| ())
    }

    /// Reads a fixed text field of `capacity` bytes.
    ///
    /// The full capacity is always consumed.
    pub fn read_fixed_str(&mut self, capacity: usize, policy: TextPolicy) -> ByteResult<String> {
        let field = self.read_bytes(capacity)?;
        decode_text_field(field, policy)
    }

    /// Reads a `u32` length followed by a `max`-byte buffer.
    ///
    /// Returns only the declared content; the rest of the buffer is consumed
    /// but never looked at.
    ///
    /// # Errors
    ///
    /// Returns [`ByteError::LengthOutOfRange`] if the declared length exceeds `max`.
    pub fn read_len_prefixed(&mut self, max: usize) -> ByteResult<&'a [u8]> {
        let declared = self.read_u32()? as usize;
        if declared > max {
            return Err(ByteError::LengthOutOfRange { declared, max });
        }
        let buffer = self.read_bytes(max)?;
        Ok(&buffer[..declared])
    }

    /// Reads a fixed-size byte array.
    pub fn read_array<const N: usize>(&mut self) -> ByteResult<[u8; N]> {
        let bytes = self.read_bytes(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    fn ensure_bytes(&self, len: usize) -> ByteResult<()> {
        let available = self.bytes_remaining();
        if len > available {
            return Err(ByteError::UnexpectedEof {
                requested: len,
                available,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_reader() {
        let reader = ByteReader::new(&[]);
        assert!(reader.is_empty());
        assert_eq!(reader.bytes_remaining(), 0);
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn read_from_empty_fails() {
        let mut reader = ByteReader::new(&[]);
        let err = reader.read_u8().unwrap_err();
        assert_eq!(
            err,
            ByteError::UnexpectedEof {
                requested: 1,
                available: 0
            }
        );
    }

    #[test]
    fn read_little_endian_u32() {
        let mut reader = ByteReader::new(&[0x78, 0x56, 0x34, 0x12]);
        assert_eq!(reader.read_u32().unwrap(), 0x1234_5678);
        assert!(reader.is_empty());
    }

    #[test]
    fn read_negative_i32() {
        let mut reader = ByteReader::new(&[0xFF, 0xFF, 0xFF, 0xFF]);
        assert_eq!(reader.read_i32().unwrap(), -1);
    }

    #[test]
    fn short_read_does_not_advance() {
        let mut reader = ByteReader::new(&[1, 2, 3]);
        assert!(reader.read_u32().is_err());
        assert_eq!(reader.position(), 0);
        assert_eq!(reader.read_u8().unwrap(), 1);
    }

    #[test]
    fn netbool_any_nonzero_true() {
        let mut reader = ByteReader::new(&[0, 1, 0xFE]);
        assert!(!reader.read_netbool().unwrap());
        assert!(reader.read_netbool().unwrap());
        assert!(reader.read_netbool().unwrap());
    }

    #[test]
    fn len_prefixed_returns_declared_content_only() {
        let bytes = [2, 0, 0, 0, 0xAA, 0xBB, 0xCC, 0xDD, 0x99];
        let mut reader = ByteReader::new(&bytes);
        assert_eq!(reader.read_len_prefixed(4).unwrap(), &[0xAA, 0xBB]);
        assert_eq!(reader.read_u8().unwrap(), 0x99);
    }

    #[test]
    fn len_prefixed_rejects_overlong_declaration() {
        let bytes = [5, 0, 0, 0, 0, 0, 0, 0];
        let mut reader = ByteReader::new(&bytes);
        let err = reader.read_len_prefixed(4).unwrap_err();
        assert_eq!(
            err,
            ByteError::LengthOutOfRange {
                declared: 5,
                max: 4
            }
        );
    }

    #[test]
    fn len_prefixed_huge_declaration() {
        let bytes = [0xFF, 0xFF, 0xFF, 0xFF];
        let mut reader = ByteReader::new(&bytes);
        assert!(matches!(
            reader.read_len_prefixed(1024),
            Err(ByteError::LengthOutOfRange { max: 1024, .. })
        ));
    }

    #[test]
    fn fixed_str_consumes_capacity() {
        let bytes = b"abc\0zzzz!";
        let mut reader = ByteReader::new(bytes);
        let text = reader.read_fixed_str(8, TextPolicy::Strict).unwrap();
        assert_eq!(text, "abc");
        assert_eq!(reader.read_u8().unwrap(), b'!');
    }

    #[test]
    fn skip_bounds_checked() {
        let mut reader = ByteReader::new(&[0; 4]);
        reader.skip(3).unwrap();
        assert!(reader.skip(2).is_err());
        assert_eq!(reader.bytes_remaining(), 1);
    }
}
