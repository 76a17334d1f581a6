//! Error types for wire-level validation.
//!
//! Structural failures only: a blob that cannot even be split into its
//! fields. Cryptographic failures (bad checksum, wrong key) are reported
//! by `dirloom-crypto`, which converts these errors at its boundary.

use thiserror::Error;

/// Result alias for wire-level operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;

/// Errors from structural validation of replication wire data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// Sealed value shorter than the fixed confounder + checksum prefix.
    ///
    /// Rejected before any cryptographic work: a blob this short cannot
    /// contain a confounder and a checksum, let alone a body.
    #[error("sealed value too short: expected at least {expected} bytes, got {actual}")]
    ValueTooShort {
        /// Minimum wire length for a sealed value.
        expected: usize,
        /// Length actually received.
        actual: usize,
    },
}
