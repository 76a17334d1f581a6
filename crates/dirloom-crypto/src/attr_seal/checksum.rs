//! CRC32 integrity envelope.
//!
//! The sealed region of a wire value is `LE-u32(crc32(body)) ‖ body`.
//! CRC32 (IEEE reflected polynomial) is an error-detecting code, not a
//! MAC; its role here is to detect a wrong session key, transport
//! corruption, or tampering after the keystream is removed. The
//! checksum is little-endian on the wire.

use super::error::{Result, SealError};

const CRC_TABLE: [u32; 256] = {
    let mut table = [0u32; 256];
    let mut i = 0usize;
    while i < 256 {
        let mut crc = i as u32;
        let mut bit = 0;
        while bit < 8 {
            crc = if crc & 1 != 0 { (crc >> 1) ^ 0xEDB8_8320 } else { crc >> 1 };
            bit += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
};

/// CRC-32 over `data` (IEEE 802.3 reflected polynomial).
#[must_use]
pub fn crc32(data: &[u8]) -> u32 {
    let crc = data.iter().fold(0xFFFF_FFFF_u32, |crc, &byte| {
        CRC_TABLE[((crc ^ u32::from(byte)) & 0xFF) as usize] ^ (crc >> 8)
    });
    !crc
}

/// Build the integrity envelope: `LE-u32(crc32(body)) ‖ body`.
#[must_use]
pub fn wrap_checksummed(body: &[u8]) -> Vec<u8> {
    let mut payload = Vec::with_capacity(4 + body.len());
    payload.extend_from_slice(&crc32(body).to_le_bytes());
    payload.extend_from_slice(body);
    payload
}

/// Verify the envelope and return the body.
///
/// # Errors
///
/// - [`SealError::InvalidParameter`] if the payload cannot hold the
///   4-byte checksum (structurally impossible for values that came
///   through wire decoding, which enforces the minimum length).
/// - [`SealError::ChecksumMismatch`] if the claimed checksum disagrees
///   with the one computed over the body. This is the integrity gate:
///   no body bytes are returned on disagreement.
pub fn unwrap_checksummed(payload: &[u8]) -> Result<&[u8]> {
    let Some((claimed_bytes, body)) = payload.split_at_checked(4) else {
        return Err(SealError::invalid(format!(
            "payload too short for checksum envelope (len={})",
            payload.len()
        )));
    };

    // INVARIANT: split_at_checked(4) yielded exactly 4 bytes.
    let mut claimed_le = [0u8; 4];
    claimed_le.copy_from_slice(claimed_bytes);
    let claimed = u32::from_le_bytes(claimed_le);

    let computed = crc32(body);
    if claimed != computed {
        return Err(SealError::ChecksumMismatch { claimed, computed });
    }

    Ok(body)
}
