#![no_main]

use bytestream::{ByteReader, TextPolicy};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut reader = ByteReader::new(data);
    let mut idx = 0usize;

    // Use input bytes to drive a bounded sequence of operations.
    while idx < data.len() && idx < 1024 {
        let op = data[idx] % 7;
        idx += 1;

        match op {
            0 => {
                let _ = reader.read_netbool();
            }
            1 => {
                let _ = reader.read_u32();
            }
            2 => {
                let _ = reader.read_u64();
            }
            3 => {
                let _ = reader.read_netfloat();
            }
            4 => {
                let capacity = usize::from(data[idx.saturating_sub(1)] % 128).saturating_add(1);
                let _ = reader.read_fixed_str(capacity, TextPolicy::Truncate);
            }
            5 => {
                let max = usize::from(data[idx.saturating_sub(1)]);
                let _ = reader.read_len_prefixed(max);
            }
            _ => {
                let _ = reader.skip(1);
            }
        }
    }
});
