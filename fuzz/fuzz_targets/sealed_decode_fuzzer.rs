//! Fuzz target for `SealedValue::decode`
//!
//! Structural wire parsing with arbitrary byte sequences: decoding must
//! never panic, and every successfully decoded value must re-encode to
//! the exact input bytes.

#![no_main]

use dirloom_proto::SealedValue;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(sealed) = SealedValue::decode(data) {
        assert_eq!(sealed.to_bytes(), data);
    }
});
