//! Hash function primitives.
//!
//! Keccak-256 is the only digest this system uses: it hashes the canonical
//! message encoding, stamps the signed digest, and fingerprints public keys
//! into addresses. Note this is the legacy Keccak padding, not the
//! finalized SHA3-256; the two produce different digests.

use sha3::{Digest, Keccak256};

/// Compute the Keccak-256 hash of the input data.
///
/// # Arguments
/// * `data` - Byte slice to hash.
///
/// # Returns
/// A 32-byte Keccak-256 digest.
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute the Keccak-256 hash of two concatenated inputs.
///
/// Equivalent to `keccak256(a ‖ b)` without building the intermediate
/// buffer.
///
/// # Arguments
/// * `a` - First byte slice.
/// * `b` - Second byte slice.
///
/// # Returns
/// A 32-byte Keccak-256 digest.
pub fn keccak256_concat(a: &[u8], b: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(a);
    hasher.update(b);
    hasher.finalize().into()
}
