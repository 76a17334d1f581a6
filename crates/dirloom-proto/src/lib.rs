//! Dirloom Replication Wire Types
//!
//! Attribute-level wire types for the directory replication stream:
//! which attributes carry confidential values, and the on-wire layout of
//! a sealed (encrypted) attribute value.
//!
//! This crate is structural only. It classifies attributes and splits
//! sealed blobs into their fields; it performs no cryptography. The
//! sealing and unsealing transforms live in `dirloom-crypto`.
//!
//! # Wire Layout
//!
//! A sealed attribute value on the wire:
//!
//! ```text
//! offset  size  field
//! 0       16    confounder (random, unique per seal)
//! 16      4     checksum over the deciphered body (little-endian CRC32,
//!               only meaningful after the stream cipher is removed)
//! 20      N     sealed body
//! ```
//!
//! Bytes 16.. are a single opaque region under the stream cipher; this
//! crate splits off the confounder and validates the minimum length, and
//! nothing else.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod attr;
pub mod errors;
pub mod sealed;

pub use attr::{AttrId, ValuePolicy};
pub use errors::{ProtocolError, Result};
pub use sealed::SealedValue;
