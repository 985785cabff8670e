//! # Checksum Hashing
//!
//! The integrity checksum on every encoded string is the first four bytes
//! of `SHA-256(SHA-256(payload))`. These are the only hash functions the
//! codec needs.

use sha2::{Digest, Sha256};

use crate::config::CHECKSUM_LENGTH;

/// Compute the SHA-256 digest of `data` as a fixed-size array.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Compute the double-SHA-256 hash: `SHA-256(SHA-256(data))`.
///
/// # Example
///
/// ```
/// use ledger_address_codec::hash::double_sha256;
///
/// let digest = double_sha256(b"payload");
/// assert_eq!(digest.len(), 32);
/// ```
pub fn double_sha256(data: &[u8]) -> [u8; 32] {
    sha256(&sha256(data))
}

/// The 4-byte checksum appended to `payload` before text encoding.
pub fn checksum(payload: &[u8]) -> [u8; CHECKSUM_LENGTH] {
    let digest = double_sha256(payload);
    let mut out = [0u8; CHECKSUM_LENGTH];
    out.copy_from_slice(&digest[..CHECKSUM_LENGTH]);
    out
}
