use bytestream::{ByteReader, ByteWriter, TextPolicy};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    U8(u8),
    U32(u32),
    U64(u64),
    I32(i32),
    Bool(bool),
    FloatBits(u32),
    Text(String, usize),
    Payload(Vec<u8>, usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<u8>().prop_map(Op::U8),
        any::<u32>().prop_map(Op::U32),
        any::<u64>().prop_map(Op::U64),
        any::<i32>().prop_map(Op::I32),
        any::<bool>().prop_map(Op::Bool),
        any::<u32>().prop_map(Op::FloatBits),
        ("[a-zA-Z0-9 ]{0,80}", 1usize..=64).prop_map(|(s, cap)| Op::Text(s, cap)),
        (prop::collection::vec(any::<u8>(), 0..=32), 32usize..=48)
            .prop_map(|(bytes, max)| Op::Payload(bytes, max)),
    ]
}

proptest! {
    #[test]
    fn prop_roundtrip_ops(ops in prop::collection::vec(op_strategy(), 1..48)) {
        let mut writer = ByteWriter::new();
        for op in &ops {
            match op {
                Op::U8(v) => writer.write_u8(*v),
                Op::U32(v) => writer.write_u32(*v),
                Op::U64(v) => writer.write_u64(*v),
                Op::I32(v) => writer.write_i32(*v),
                Op::Bool(v) => writer.write_netbool(*v),
                Op::FloatBits(bits) => writer.write_netfloat(f32::from_bits(*bits)),
                Op::Text(text, cap) => {
                    writer.write_fixed_str(text, *cap);
                }
                Op::Payload(bytes, max) => writer.write_len_prefixed(bytes, *max).unwrap(),
            }
        }

        let bytes = writer.finish();
        let mut reader = ByteReader::new(&bytes);

        for op in &ops {
            match op {
                Op::U8(v) => {
                    prop_assert_eq!(reader.read_u8().unwrap(), *v);
                }
                Op::U32(v) => {
                    prop_assert_eq!(reader.read_u32().unwrap(), *v);
                }
                Op::U64(v) => {
                    prop_assert_eq!(reader.read_u64().unwrap(), *v);
                }
                Op::I32(v) => {
                    prop_assert_eq!(reader.read_i32().unwrap(), *v);
                }
                Op::Bool(v) => {
                    prop_assert_eq!(reader.read_netbool().unwrap(), *v);
                }
                Op::FloatBits(bits) => {
                    prop_assert_eq!(reader.read_netfloat().unwrap().to_bits(), *bits);
                }
                Op::Text(text, cap) => {
                    let read = reader.read_fixed_str(*cap, TextPolicy::Strict).unwrap();
                    let expected_len = text.len().min(cap - 1);
                    prop_assert_eq!(read.as_str(), &text[..expected_len]);
                }
                Op::Payload(expected, max) => {
                    prop_assert_eq!(reader.read_len_prefixed(*max).unwrap(), expected.as_slice());
                }
            }
        }
        prop_assert!(reader.is_empty());
    }

    #[test]
    fn prop_netfloat_bit_fidelity(bits in any::<u32>()) {
        let mut writer = ByteWriter::new();
        writer.write_netfloat(f32::from_bits(bits));
        let bytes = writer.finish();
        prop_assert_eq!(bytes.len(), 4);
        let mut reader = ByteReader::new(&bytes);
        prop_assert_eq!(reader.read_netfloat().unwrap().to_bits(), bits);
    }

    #[test]
    fn prop_reader_never_panics(data in prop::collection::vec(any::<u8>(), 0..256), cap in 0usize..300) {
        let mut reader = ByteReader::new(&data);
        let _ = reader.read_len_prefixed(cap);
        let _ = reader.read_fixed_str(cap, TextPolicy::Strict);
        let _ = reader.read_fixed_str(cap, TextPolicy::Truncate);
        let _ = reader.read_u64();
    }
}
