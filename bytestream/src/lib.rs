//! Fixed-layout scalar primitives for the spacewar wire protocol.
//!
//! This crate provides [`ByteWriter`] and [`ByteReader`] for the handful of
//! scalar shapes every message is built from: little-endian integers,
//! one-byte booleans ("netbool"), floats carried as raw 32-bit patterns
//! ("netfloat"), NUL-terminated text in fixed buffers, and length-prefixed
//! byte buffers with a fixed capacity.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Layouts are written field by field, never transmuted.
//! - **One byte order** - Every multi-byte value is little-endian on the wire.
//! - **Bounded operations** - All reads are bounds-checked.
//! - **No domain knowledge** - This crate knows nothing about ships or players.
//!
//! # Example
//!
//! ```
//! use bytestream::{ByteReader, ByteWriter, TextPolicy};
//!
//! let mut writer = ByteWriter::new();
//! writer.write_netbool(true);
//! writer.write_netfloat(-0.0);
//! writer.write_fixed_str("Stardust", 16);
//!
//! let bytes = writer.finish();
//! assert_eq!(bytes.len(), 1 + 4 + 16);
//!
//! let mut reader = ByteReader::new(&bytes);
//! assert!(reader.read_netbool().unwrap());
//! assert_eq!(reader.read_netfloat().unwrap().to_bits(), (-0.0f32).to_bits());
//! assert_eq!(reader.read_fixed_str(16, TextPolicy::Strict).unwrap(), "Stardust");
//! ```

mod error;
mod reader;
mod scalar;
mod text;
mod writer;

pub use error::{ByteError, ByteResult};
pub use reader::ByteReader;
pub use scalar::{decode_netbool, decode_netfloat, encode_netbool, encode_netfloat};
pub use text::{decode_text_field, truncate_for_field, TextPolicy};
pub use writer::ByteWriter;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_roundtrip() {
        let writer = ByteWriter::new();
        let bytes = writer.finish();
        assert!(bytes.is_empty());

        let reader = ByteReader::new(&bytes);
        assert!(reader.is_empty());
    }

    #[test]
    fn mixed_roundtrip() {
        let mut writer = ByteWriter::new();
        writer.write_u32(4);
        writer.write_u64(0x0110_0001_0000_1234);
        writer.write_netbool(false);
        writer.write_i32(-7);
        writer.write_len_prefixed(b"ticket", 16).unwrap();
        writer.write_netfloat(2.5);
        let bytes = writer.finish();
        assert_eq!(bytes.len(), 4 + 8 + 1 + 4 + 4 + 16 + 4);

        let mut reader = ByteReader::new(&bytes);
        assert_eq!(reader.read_u32().unwrap(), 4);
        assert_eq!(reader.read_u64().unwrap(), 0x0110_0001_0000_1234);
        assert!(!reader.read_netbool().unwrap());
        assert_eq!(reader.read_i32().unwrap(), -7);
        assert_eq!(reader.read_len_prefixed(16).unwrap(), b"ticket");
        assert_eq!(reader.read_netfloat().unwrap(), 2.5);
        assert!(reader.is_empty());
    }

    #[test]
    fn doctest_example() {
        let mut writer = ByteWriter::new();
        writer.write_fixed_str("Stardust", 16);
        let bytes = writer.finish();

        let mut reader = ByteReader::new(&bytes);
        assert_eq!(
            reader.read_fixed_str(16, TextPolicy::Strict).unwrap(),
            "Stardust"
        );
    }
}
