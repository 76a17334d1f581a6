//! Fuzz target for attribute-value unsealing
//!
//! Feeds arbitrary bytes through `unseal_value` under every policy to find:
//! - Panics on malformed or truncated wire values
//! - Slice-index or length-arithmetic mistakes around the 20-byte prefix
//! - RID block-transform alignment handling on hostile body lengths
//!
//! The fuzzer should NEVER panic. All invalid inputs must return an error.

#![no_main]

use dirloom_crypto::unseal_value;
use dirloom_proto::ValuePolicy;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    for policy in [ValuePolicy::Passthrough, ValuePolicy::Sealed, ValuePolicy::RidSealed] {
        // Any outcome but a panic is acceptable for arbitrary input.
        let _ = unseal_value(b"fuzz-session-key", policy, 500, data);
        let _ = unseal_value(b"", policy, u32::MAX, data);
    }
});
