//! Seal and unseal operations for replicated attribute values.
//!
//! The two wire operations are mutually inverse, stateless, and pure up
//! to the confounder draw. Validation order is part of the contract:
//! passthrough short-circuits everything, RID checks precede structural
//! checks, and the checksum gate precedes the RID block transform on the
//! unseal path. The first failure wins and no partial result is ever
//! returned.

use bytes::Bytes;
use rand::{CryptoRng, RngCore};
use tracing::debug;

use dirloom_proto::{AttrId, SealedValue, ValuePolicy};

use crate::rid_key::{self, BLOCK_SIZE};

use super::{
    checksum::{unwrap_checksummed, wrap_checksummed},
    derive::derive_stream_key,
    error::{Result, SealError},
    keystream::apply_keystream,
};

/// Unseal one attribute value.
///
/// For [`ValuePolicy::Passthrough`] the value is returned unchanged. For
/// the sealed policies the pipeline runs in reverse of
/// [`seal_value_with_confounder`]: split off the confounder, derive the
/// stream key, remove the keystream, verify the checksum, then (under
/// [`ValuePolicy::RidSealed`]) invert the RID block transform.
///
/// # Errors
///
/// - [`SealError::InvalidParameter`] for RID zero under the RID policy,
///   a value shorter than 20 bytes, or a deciphered body that is not a
///   positive multiple of 16 where the RID transform applies. The RID
///   and length checks run before any cryptographic work.
/// - [`SealError::ChecksumMismatch`] if the integrity gate fails after
///   the keystream is removed: wrong session key, corruption, or
///   tampering. The stream cipher itself cannot detect any of these.
pub fn unseal_value(
    session_key: &[u8],
    policy: ValuePolicy,
    rid: u32,
    ciphertext: &[u8],
) -> Result<Vec<u8>> {
    if policy == ValuePolicy::Passthrough {
        return Ok(ciphertext.to_vec());
    }
    if policy == ValuePolicy::RidSealed && rid == 0 {
        return Err(SealError::invalid("RID 0 cannot key the block transform"));
    }

    let sealed = SealedValue::decode(ciphertext)?;

    let stream_key = derive_stream_key(session_key, &sealed.confounder);
    let mut payload = sealed.payload.to_vec();
    apply_keystream(&mut payload, &stream_key);

    let mut body = unwrap_checksummed(&payload)?.to_vec();

    if policy == ValuePolicy::RidSealed {
        if body.is_empty() || body.len() % BLOCK_SIZE != 0 {
            return Err(SealError::invalid(format!(
                "RID-sealed body must be a positive multiple of {BLOCK_SIZE} bytes, got {}",
                body.len()
            )));
        }
        for chunk in body.chunks_exact_mut(BLOCK_SIZE) {
            let Ok(block) = <[u8; BLOCK_SIZE]>::try_from(&*chunk) else {
                unreachable!("chunks_exact_mut yields {BLOCK_SIZE}-byte chunks");
            };
            chunk.copy_from_slice(&rid_key::rid_unseal_block(rid, &block));
        }
    }

    Ok(body)
}

/// Seal one attribute value, drawing a fresh confounder from `rng`.
///
/// The confounder must be unpredictable and unique per call; give every
/// seal a cryptographically secure generator. Two seals of the same
/// value under the same key produce unrelated ciphertexts.
///
/// Output length is always `plaintext.len() + 20` for the sealed
/// policies, and the input length for passthrough.
///
/// # Errors
///
/// Same parameter checks as [`unseal_value`]: RID zero, or a plaintext
/// that is not a positive multiple of 16 under
/// [`ValuePolicy::RidSealed`].
pub fn seal_value<R: RngCore + CryptoRng>(
    session_key: &[u8],
    policy: ValuePolicy,
    rid: u32,
    plaintext: &[u8],
    rng: &mut R,
) -> Result<Vec<u8>> {
    if policy == ValuePolicy::Passthrough {
        return Ok(plaintext.to_vec());
    }

    let mut confounder = [0u8; SealedValue::CONFOUNDER_SIZE];
    rng.fill_bytes(&mut confounder);

    seal_value_with_confounder(session_key, policy, rid, plaintext, confounder)
}

/// Seal one attribute value with a caller-chosen confounder.
///
/// Deterministic core of [`seal_value`]; exists so tests can pin the
/// confounder and compare whole ciphertexts. Production callers must use
/// [`seal_value`]: reusing a confounder under the same session key reuses
/// the keystream, which breaks confidentiality for both values.
pub fn seal_value_with_confounder(
    session_key: &[u8],
    policy: ValuePolicy,
    rid: u32,
    plaintext: &[u8],
    confounder: [u8; SealedValue::CONFOUNDER_SIZE],
) -> Result<Vec<u8>> {
    if policy == ValuePolicy::Passthrough {
        return Ok(plaintext.to_vec());
    }
    if policy == ValuePolicy::RidSealed && rid == 0 {
        return Err(SealError::invalid("RID 0 cannot key the block transform"));
    }

    let mut body = plaintext.to_vec();

    if policy == ValuePolicy::RidSealed {
        if body.is_empty() || body.len() % BLOCK_SIZE != 0 {
            return Err(SealError::invalid(format!(
                "RID-sealed plaintext must be a positive multiple of {BLOCK_SIZE} bytes, got {}",
                body.len()
            )));
        }
        for chunk in body.chunks_exact_mut(BLOCK_SIZE) {
            let Ok(block) = <[u8; BLOCK_SIZE]>::try_from(&*chunk) else {
                unreachable!("chunks_exact_mut yields {BLOCK_SIZE}-byte chunks");
            };
            chunk.copy_from_slice(&rid_key::rid_seal_block(rid, &block));
        }
    }

    let mut payload = wrap_checksummed(&body);

    let stream_key = derive_stream_key(session_key, &confounder);
    apply_keystream(&mut payload, &stream_key);

    let sealed = SealedValue::new(confounder, payload)?;
    Ok(sealed.to_bytes())
}

/// Unseal a replicated attribute: classify, gate, and transform.
///
/// Passthrough attributes (the classifier default) are returned
/// unchanged, values and all. Sealed attributes must be single-valued —
/// the wire construction is defined only for one value — and the single
/// value is unsealed under the attribute's policy.
pub fn unseal_attribute(
    session_key: &[u8],
    rid: u32,
    attr: AttrId,
    values: &[Bytes],
) -> Result<Vec<Bytes>> {
    let policy = attr.policy();
    if policy == ValuePolicy::Passthrough {
        return Ok(values.to_vec());
    }

    let [value] = values else {
        return Err(single_value_violation(attr, values.len()));
    };

    debug!(attr = attr.as_u32(), ?policy, len = value.len(), "unsealing attribute value");

    let plain = unseal_value(session_key, policy, rid, value)?;
    Ok(vec![Bytes::from(plain)])
}

/// Seal a replicated attribute: classify, gate, and transform.
///
/// Mirror of [`unseal_attribute`]; the same single-value rule applies.
pub fn seal_attribute<R: RngCore + CryptoRng>(
    session_key: &[u8],
    rid: u32,
    attr: AttrId,
    values: &[Bytes],
    rng: &mut R,
) -> Result<Vec<Bytes>> {
    let policy = attr.policy();
    if policy == ValuePolicy::Passthrough {
        return Ok(values.to_vec());
    }

    let [value] = values else {
        return Err(single_value_violation(attr, values.len()));
    };

    debug!(attr = attr.as_u32(), ?policy, len = value.len(), "sealing attribute value");

    let sealed = seal_value(session_key, policy, rid, value, rng)?;
    Ok(vec![Bytes::from(sealed)])
}

fn single_value_violation(attr: AttrId, count: usize) -> SealError {
    SealError::invalid(format!(
        "encrypted attribute {:#x} must be single-valued, got {count} values",
        attr.as_u32()
    ))
}
