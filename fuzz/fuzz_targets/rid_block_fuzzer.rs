//! Fuzz target for the RID-keyed block transform
//!
//! Exercises the involution contract over arbitrary (RID, block) pairs:
//! unsealing a sealed block must restore it exactly for every nonzero
//! RID, and neither direction may panic.

#![no_main]

use dirloom_crypto::rid_key::{rid_seal_block, rid_unseal_block};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (u32, [u8; 16])| {
    let (rid, block) = input;
    if rid == 0 {
        return;
    }

    let sealed = rid_seal_block(rid, &block);
    assert_eq!(rid_unseal_block(rid, &sealed), block);

    let opened = rid_unseal_block(rid, &block);
    assert_eq!(rid_seal_block(rid, &opened), block);
});
