//! # Seeds
//!
//! Seeds are 16 bytes of entropy behind an algorithm-specific prefix. This
//! module only encodes and decodes them; turning a seed into keys is the
//! signing layer's job.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::base58::{decode_with_prefix, encode_with_prefix};
use crate::config::{ED25519_SEED_PREFIX, SECP256K1_SEED_PREFIX, SEED_LENGTH};
use crate::error::{AddressCodecError, Result};

/// The signing algorithm a seed is intended for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CryptoAlgorithm {
    Ed25519,
    #[default]
    Secp256k1,
}

impl CryptoAlgorithm {
    /// Order in which prefixes are tried when decoding without a hint.
    const DECODE_ORDER: [CryptoAlgorithm; 2] =
        [CryptoAlgorithm::Ed25519, CryptoAlgorithm::Secp256k1];

    fn seed_prefix(self) -> &'static [u8] {
        match self {
            CryptoAlgorithm::Ed25519 => &ED25519_SEED_PREFIX,
            CryptoAlgorithm::Secp256k1 => &SECP256K1_SEED_PREFIX,
        }
    }
}

impl fmt::Display for CryptoAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CryptoAlgorithm::Ed25519 => f.write_str("ed25519"),
            CryptoAlgorithm::Secp256k1 => f.write_str("secp256k1"),
        }
    }
}

/// Encode 16 bytes of seed entropy for `algorithm`.
///
/// # Example
///
/// ```
/// use ledger_address_codec::{encode_seed, CryptoAlgorithm};
///
/// let entropy = [0xCFu8, 0x2D, 0xE3, 0x78, 0xFB, 0xDD, 0x7E, 0x2E,
///                0xE8, 0x7D, 0x48, 0x6D, 0xFB, 0x5A, 0x7B, 0xFF];
/// let seed = encode_seed(&entropy, CryptoAlgorithm::Secp256k1).unwrap();
/// assert_eq!(seed, "sn259rEFXrQrWyx3Q7XneWcwV6dfL");
/// ```
pub fn encode_seed(entropy: &[u8], algorithm: CryptoAlgorithm) -> Result<String> {
    encode_with_prefix(entropy, algorithm.seed_prefix(), SEED_LENGTH)
}

/// Decode a seed into its entropy and algorithm.
///
/// With `algorithm: Some(..)` only that algorithm's prefix is accepted.
/// With `None`, each known prefix is tried in turn; checksum and alphabet
/// errors are reported as-is since no prefix can fix them.
pub fn decode_seed(
    seed: &str,
    algorithm: Option<CryptoAlgorithm>,
) -> Result<(Vec<u8>, CryptoAlgorithm)> {
    if let Some(algorithm) = algorithm {
        let entropy = decode_with_prefix(seed, algorithm.seed_prefix(), SEED_LENGTH)?;
        return Ok((entropy, algorithm));
    }

    for algorithm in CryptoAlgorithm::DECODE_ORDER {
        match decode_with_prefix(seed, algorithm.seed_prefix(), SEED_LENGTH) {
            Ok(entropy) => return Ok((entropy, algorithm)),
            Err(
                AddressCodecError::InvalidVersion { .. } | AddressCodecError::InvalidLength { .. },
            ) => continue,
            Err(other) => return Err(other),
        }
    }
    Err(AddressCodecError::UnknownSeedPrefix)
}
