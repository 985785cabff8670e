//! # Codec Constants
//!
//! Every reserved byte in the address formats lives here. None of these are
//! tunable: changing one produces strings no other implementation accepts.

// ---------------------------------------------------------------------------
// Alphabet
// ---------------------------------------------------------------------------

/// The 58-symbol alphabet used by every encoding in this crate. `r` is the
/// "zero" digit, which is why classic addresses (version byte `0x00`) always
/// start with `r`.
pub const ALPHABET: &[u8; 58] = b"rpshnaf39wBUDNEGHJKLM4PQRST7VWXYZ2bcdeCg65jkm8oFqi1tuvAxyz";

/// Number of checksum bytes appended before text encoding.
pub const CHECKSUM_LENGTH: usize = 4;

// ---------------------------------------------------------------------------
// Version Prefixes
// ---------------------------------------------------------------------------

/// Version byte prepended to an account id to form a classic address.
pub const CLASSIC_ADDRESS_PREFIX: [u8; 1] = [0x00];

/// X-address network prefix for the production ledger. Encodes to a leading `X`.
pub const MAIN_NETWORK_PREFIX: [u8; 2] = [0x05, 0x44];

/// X-address network prefix for the test ledger. Encodes to a leading `T`.
pub const TEST_NETWORK_PREFIX: [u8; 2] = [0x04, 0x93];

/// Family seed prefix for secp256k1 keys. Encodes to a leading `s`.
pub const SECP256K1_SEED_PREFIX: [u8; 1] = [0x21];

/// Seed prefix for ed25519 keys. Encodes to a leading `sEd`.
pub const ED25519_SEED_PREFIX: [u8; 3] = [0x01, 0xE1, 0x4B];

/// Node (validator) public key prefix. Encodes to a leading `n`.
pub const NODE_PUBLIC_KEY_PREFIX: [u8; 1] = [0x1C];

/// Account public key prefix. Encodes to a leading `a`.
pub const ACCOUNT_PUBLIC_KEY_PREFIX: [u8; 1] = [0x23];

// ---------------------------------------------------------------------------
// Lengths
// ---------------------------------------------------------------------------

/// Account ids are always 20 bytes.
pub const ACCOUNT_ID_LENGTH: usize = 20;

/// Seed entropy length, for either algorithm.
pub const SEED_LENGTH: usize = 16;

/// Compressed public key length (node and account keys).
pub const PUBLIC_KEY_LENGTH: usize = 33;

/// Largest tag an X-address can carry.
pub const MAX_32_BIT_UNSIGNED_INT: u64 = u32::MAX as u64;
