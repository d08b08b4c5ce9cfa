#![no_main]

use codec::{decode_message, try_decode_message};
use libfuzzer_sys::fuzz_target;
use wire::{identify, DecodeOptions};

fuzz_target!(|data: &[u8]| {
    let strict = decode_message(data, &DecodeOptions::strict());
    let lenient = try_decode_message(data, &DecodeOptions::lenient());

    if let Ok(message) = &strict {
        assert_eq!(identify(data).ok(), Some(message.message_type()));
        assert_eq!(data.len(), message.message_type().wire_size());
        // Strict success implies lenient success with the same value. Floats
        // may be NaN, so compare encodings.
        let relaxed = lenient.as_ref().ok().and_then(Option::as_ref);
        assert_eq!(relaxed.map(codec::Message::encode), Some(message.encode()));
    }

    if let Ok(Some(message)) = lenient {
        assert_eq!(message.encode().len(), data.len());
    }
});
