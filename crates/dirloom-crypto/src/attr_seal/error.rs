//! Error types for attribute sealing.
//!
//! Two failure kinds exist and they are deliberately coarse: parameter
//! violations (caller or wire data breaks the sealing contract) and
//! checksum disagreement (the integrity gate). The kind surfaces
//! unchanged to the replication layer, which decides whether to abort
//! the operation or retry at the session level; this layer never retries
//! and never logs secret material.

use dirloom_proto::ProtocolError;
use thiserror::Error;

/// Result alias for sealing operations.
pub type Result<T> = std::result::Result<T, SealError>;

/// Errors from sealing or unsealing an attribute value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SealError {
    /// A caller-supplied parameter or wire value violates the sealing
    /// contract: RID zero where the block transform is required, a
    /// sealed value shorter than 20 bytes, a body that is not a positive
    /// multiple of 16 under the RID policy, or a multi-valued attribute
    /// where the construction requires a single value.
    #[error("invalid parameter: {reason}")]
    InvalidParameter {
        /// What was violated. Never contains key material or value bytes.
        reason: String,
    },

    /// Integrity check failed after the keystream was removed.
    ///
    /// Signals a wrong session key, transport corruption, or tampering.
    /// No plaintext is returned in this case.
    #[error("checksum mismatch (claimed {claimed:#010x}, computed {computed:#010x})")]
    ChecksumMismatch {
        /// Checksum carried inside the sealed region.
        claimed: u32,
        /// Checksum computed over the deciphered body.
        computed: u32,
    },
}

impl SealError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParameter { reason: reason.into() }
    }
}

/// Structural wire failures are parameter violations at this layer.
impl From<ProtocolError> for SealError {
    fn from(err: ProtocolError) -> Self {
        Self::invalid(err.to_string())
    }
}
