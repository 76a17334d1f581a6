//! Keystream cipher application.
//!
//! RC4 with the derived 128-bit stream key, used purely as a keystream
//! generator XORed over the payload. Length-preserving and symmetric:
//! applying the same key twice is the identity, so sealing and unsealing
//! share this one entry point.

use rc4::{KeyInit, Rc4, StreamCipher, consts::U16};

use super::derive::StreamKey;

/// Apply the keystream to `data` in place.
///
/// Each [`StreamKey`] keys an independent cipher instance, so calls do
/// not share keystream position; a key must never be applied to two
/// different sealed payloads (the per-value confounder guarantees this
/// upstream).
pub fn apply_keystream(data: &mut [u8], key: &StreamKey) {
    let mut cipher = Rc4::<U16>::new(key.as_bytes().into());
    cipher.apply_keystream(data);
}
