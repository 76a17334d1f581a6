//! RID-keyed block transform for account secrets.
//!
//! Password hashes and their histories are stored, and replicated, under
//! a transform keyed to the owning account's RID. The construction comes
//! from the account-credential encryption portion of the directory
//! protocol suite: the RID's four little-endian bytes are repeated into
//! a 14-byte key string, split into two 7-byte halves, and each half is
//! expanded into an 8-byte DES key; the two keys then DES-ECB the two
//! 8-byte halves of a 16-byte block independently.
//!
//! This module belongs to the account-credential trust boundary, not the
//! replication-transform one: the sealing layer treats it as an opaque
//! pair of inverse block functions and only relies on the involution
//! contract below.
//!
//! # Contract
//!
//! For every block `b` and every `rid != 0`:
//! `rid_unseal_block(rid, rid_seal_block(rid, b)) == b`.
//!
//! RID zero means "no real account" and is rejected by the sealing layer
//! before these functions are reached.
//!
//! # Security
//!
//! A RID is not secret — this transform adds no confidentiality against
//! an attacker who knows the account. Its purpose is to bind stored and
//! replicated hashes to their owning account so a blob copied between
//! accounts does not decrypt to a usable hash.

use des::{
    Des,
    cipher::{BlockDecrypt, BlockEncrypt, KeyInit, generic_array::GenericArray},
};

/// Block size of the transform (two DES blocks).
pub const BLOCK_SIZE: usize = 16;

/// Repeat the RID's little-endian bytes into the 14-byte key string.
fn rid_key_material(rid: u32) -> [u8; 14] {
    let raw = rid.to_le_bytes();
    let mut material = [0u8; 14];
    for (i, byte) in material.iter_mut().enumerate() {
        *byte = raw[i % 4];
    }
    material
}

/// Expand a 7-byte key half into an 8-byte DES key.
///
/// Each output byte takes 7 consecutive input bits, left-shifted one
/// position; DES ignores the low (parity) bit of every key byte, so the
/// shift places the 7 payload bits where the cipher reads them.
fn spread_key(half: &[u8; 7]) -> [u8; 8] {
    let mut key = [
        half[0] >> 1,
        ((half[0] & 0x01) << 6) | (half[1] >> 2),
        ((half[1] & 0x03) << 5) | (half[2] >> 3),
        ((half[2] & 0x07) << 4) | (half[3] >> 4),
        ((half[3] & 0x0F) << 3) | (half[4] >> 5),
        ((half[4] & 0x1F) << 2) | (half[5] >> 6),
        ((half[5] & 0x3F) << 1) | (half[6] >> 7),
        half[6] & 0x7F,
    ];
    for byte in &mut key {
        *byte <<= 1;
    }
    key
}

/// The two DES instances keyed by a RID.
fn des_pair(rid: u32) -> (Des, Des) {
    let material = rid_key_material(rid);

    let mut first = [0u8; 7];
    let mut second = [0u8; 7];
    first.copy_from_slice(&material[..7]);
    second.copy_from_slice(&material[7..]);

    (
        Des::new(GenericArray::from_slice(&spread_key(&first))),
        Des::new(GenericArray::from_slice(&spread_key(&second))),
    )
}

/// Apply the RID transform to one block (storage/wire direction).
#[must_use]
pub fn rid_seal_block(rid: u32, block: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
    let (first, second) = des_pair(rid);

    let mut lo = GenericArray::clone_from_slice(&block[..8]);
    let mut hi = GenericArray::clone_from_slice(&block[8..]);
    first.encrypt_block(&mut lo);
    second.encrypt_block(&mut hi);

    let mut out = [0u8; BLOCK_SIZE];
    out[..8].copy_from_slice(&lo);
    out[8..].copy_from_slice(&hi);
    out
}

/// Invert the RID transform on one block (plaintext direction).
#[must_use]
pub fn rid_unseal_block(rid: u32, block: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
    let (first, second) = des_pair(rid);

    let mut lo = GenericArray::clone_from_slice(&block[..8]);
    let mut hi = GenericArray::clone_from_slice(&block[8..]);
    first.decrypt_block(&mut lo);
    second.decrypt_block(&mut hi);

    let mut out = [0u8; BLOCK_SIZE];
    out[..8].copy_from_slice(&lo);
    out[8..].copy_from_slice(&hi);
    out
}
