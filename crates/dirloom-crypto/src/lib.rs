//! Dirloom Attribute Sealing
//!
//! Confidentiality transform for secret attribute values carried in the
//! directory replication stream. Pure functions with deterministic
//! outputs; the only entropy is the per-value confounder, which the
//! caller's RNG supplies (or the caller passes explicitly for
//! deterministic testing).
//!
//! # Sealing Pipeline
//!
//! Every sealed value is protected by a key derived from the
//! authenticated session key and a fresh random confounder:
//!
//! ```text
//! Session Key ── MD5(session key ‖ confounder) ──▶ Stream Key
//!        │
//!        ▼
//! RC4 Keystream ──▶ seals [checksum ‖ body]
//!        │
//!        ▼
//! Wire Value: [confounder (16)] [sealed checksum (4) + body (N)]
//! ```
//!
//! Password hashes and their histories carry one more layer: before
//! sealing (and after unsealing), each 16-byte block of the body is
//! transformed under a DES key pair derived from the owning account's
//! RID. See [`rid_key`].
//!
//! # Integrity
//!
//! The stream cipher provides no integrity on its own. A little-endian
//! CRC32 over the body rides inside the sealed region; after the
//! keystream is removed, a checksum disagreement means a wrong session
//! key, transport corruption, or tampering, and the value is rejected
//! rather than returned as garbage.
//!
//! # Wire Compatibility
//!
//! MD5, RC4, and DES are mandated by the replication wire format and are
//! weak by modern standards. They are kept bit-exact for interoperability
//! and isolated behind the [`attr_seal::derive`], [`attr_seal::keystream`],
//! [`attr_seal::checksum`], and [`rid_key`] module seams; substituting a
//! stronger construction is a wire-format change, not a refactor, and must
//! never be done silently.
//!
//! # Security
//!
//! - Confounders are drawn fresh per seal; identical plaintexts under the
//!   same key produce unrelated ciphertexts
//! - Derived stream keys are zeroized on drop
//! - Errors never carry key material, confounders, or plaintext

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod attr_seal;
pub mod rid_key;

pub use attr_seal::{
    Result, SealError, StreamKey, derive_stream_key, seal_attribute, seal_value,
    seal_value_with_confounder, unseal_attribute, unseal_value,
};
