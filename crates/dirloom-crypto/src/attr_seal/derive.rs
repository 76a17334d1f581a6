//! Stream-key derivation.
//!
//! The per-value cipher key is MD5 over the session key bytes followed
//! by the 16 confounder bytes. MD5 serves purely as a key-derivation
//! function here — the wire format mandates it — and its collision
//! weaknesses are irrelevant to that role. The input order (session key
//! first, confounder second) is part of the wire contract.

use md5::{Digest, Md5};
use zeroize::Zeroize;

use dirloom_proto::SealedValue;

/// A derived 128-bit keystream cipher key.
///
/// Valid for exactly one sealed value: the confounder that went into the
/// derivation is bound to that value on the wire. Zeroized on drop.
pub struct StreamKey([u8; 16]);

impl StreamKey {
    /// Raw key bytes for the keystream cipher.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }
}

impl Drop for StreamKey {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// Derive the stream key for one sealed value.
///
/// `MD5(session_key ‖ confounder)`, with the session key contributing
/// secrecy and the confounder contributing per-value uniqueness. The
/// session key is opaque and may be any length.
#[must_use]
pub fn derive_stream_key(
    session_key: &[u8],
    confounder: &[u8; SealedValue::CONFOUNDER_SIZE],
) -> StreamKey {
    let mut hasher = Md5::new();
    hasher.update(session_key);
    hasher.update(confounder);
    let digest = hasher.finalize();

    let mut key = [0u8; 16];
    key.copy_from_slice(&digest);
    StreamKey(key)
}
