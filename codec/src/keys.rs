//! Public key encodings: node (validator) keys and account keys. Both are
//! 33-byte compressed keys behind a one-byte prefix.

use crate::base58::{decode_with_prefix, encode_with_prefix};
use crate::config::{ACCOUNT_PUBLIC_KEY_PREFIX, NODE_PUBLIC_KEY_PREFIX, PUBLIC_KEY_LENGTH};
use crate::error::Result;

/// Encode a 33-byte node public key (`n...`).
pub fn encode_node_public_key(public_key: &[u8]) -> Result<String> {
    encode_with_prefix(public_key, &NODE_PUBLIC_KEY_PREFIX, PUBLIC_KEY_LENGTH)
}

/// Decode a node public key into its 33 raw bytes.
pub fn decode_node_public_key(text: &str) -> Result<Vec<u8>> {
    decode_with_prefix(text, &NODE_PUBLIC_KEY_PREFIX, PUBLIC_KEY_LENGTH)
}

/// Encode a 33-byte account public key (`a...`).
pub fn encode_account_public_key(public_key: &[u8]) -> Result<String> {
    encode_with_prefix(public_key, &ACCOUNT_PUBLIC_KEY_PREFIX, PUBLIC_KEY_LENGTH)
}

/// Decode an account public key into its 33 raw bytes.
pub fn decode_account_public_key(text: &str) -> Result<Vec<u8>> {
    decode_with_prefix(text, &ACCOUNT_PUBLIC_KEY_PREFIX, PUBLIC_KEY_LENGTH)
}
