//! Sealed attribute value wire type.
//!
//! A `SealedValue` is the on-wire form of an encrypted attribute value:
//! a 16-byte random confounder followed by the stream-ciphered payload
//! (checksum + body). The value's total length is delimited by the
//! surrounding replication message, so decoding consumes the entire
//! buffer.
//!
//! This is a pure data holder plus structural validation. The payload
//! stays opaque here; removing the stream cipher and verifying the
//! checksum happen in `dirloom-crypto`.

use bytes::{BufMut, Bytes};

use crate::errors::{ProtocolError, Result};

/// Wire form of a sealed attribute value.
///
/// Layout on the wire:
/// `[confounder: 16 bytes] + [payload: >= 4 bytes]`
///
/// # Invariants
///
/// - Minimum Payload: `payload.len()` is at least [`SealedValue::CHECKSUM_SIZE`]
///   (the deciphered payload starts with a 4-byte checksum). Enforced by
///   [`SealedValue::new`] and verified by [`SealedValue::decode`].
///
/// # Security
///
/// Provides structural validity only: the confounder/payload split and
/// the minimum length. Does NOT verify the checksum (the payload is
/// still under the stream cipher here) and does NOT guarantee the
/// confounder was randomly generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SealedValue {
    /// Random confounder, unique per seal.
    pub confounder: [u8; 16],

    /// Stream-ciphered payload: checksum + body, still opaque.
    pub payload: Bytes,
}

impl SealedValue {
    /// Size of the leading confounder (16 bytes).
    pub const CONFOUNDER_SIZE: usize = 16;

    /// Size of the checksum at the start of the deciphered payload.
    pub const CHECKSUM_SIZE: usize = 4;

    /// Minimum total wire length: confounder + checksum.
    pub const MIN_WIRE_SIZE: usize = Self::CONFOUNDER_SIZE + Self::CHECKSUM_SIZE;

    /// Create a sealed value from its fields.
    ///
    /// # Errors
    ///
    /// - [`ProtocolError::ValueTooShort`] if the payload cannot hold the
    ///   4-byte checksum.
    pub fn new(confounder: [u8; 16], payload: impl Into<Bytes>) -> Result<Self> {
        let payload = payload.into();

        if payload.len() < Self::CHECKSUM_SIZE {
            return Err(ProtocolError::ValueTooShort {
                expected: Self::MIN_WIRE_SIZE,
                actual: Self::CONFOUNDER_SIZE + payload.len(),
            });
        }

        Ok(Self { confounder, payload })
    }

    /// Decode a sealed value from wire bytes.
    ///
    /// Consumes the entire buffer: the value's length is delimited by the
    /// surrounding replication message, not by the blob itself.
    ///
    /// # Errors
    ///
    /// - [`ProtocolError::ValueTooShort`] if fewer than
    ///   [`Self::MIN_WIRE_SIZE`] bytes are supplied.
    ///
    /// # Security
    ///
    /// - Fail Fast: the length check happens before any allocation or
    ///   cryptographic work. A truncated or garbage blob is rejected here
    ///   without touching key material.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < Self::MIN_WIRE_SIZE {
            return Err(ProtocolError::ValueTooShort {
                expected: Self::MIN_WIRE_SIZE,
                actual: bytes.len(),
            });
        }

        // INVARIANT: bytes.len() >= MIN_WIRE_SIZE > CONFOUNDER_SIZE, so both
        // slices below are in bounds.
        let mut confounder = [0u8; Self::CONFOUNDER_SIZE];
        confounder.copy_from_slice(&bytes[..Self::CONFOUNDER_SIZE]);
        let payload = Bytes::copy_from_slice(&bytes[Self::CONFOUNDER_SIZE..]);

        debug_assert!(payload.len() >= Self::CHECKSUM_SIZE);

        Ok(Self { confounder, payload })
    }

    /// Encode into a buffer: `confounder || payload`.
    pub fn encode(&self, dst: &mut impl BufMut) {
        dst.put_slice(&self.confounder);
        dst.put_slice(&self.payload);
    }

    /// Encode into a freshly allocated vector.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut wire = Vec::with_capacity(self.wire_len());
        self.encode(&mut wire);
        wire
    }

    /// Total length on the wire.
    #[must_use]
    pub fn wire_len(&self) -> usize {
        Self::CONFOUNDER_SIZE + self.payload.len()
    }

    /// Length of the sealed body (payload minus the checksum prefix).
    #[must_use]
    pub fn body_len(&self) -> usize {
        self.payload.len().saturating_sub(Self::CHECKSUM_SIZE)
    }
}
