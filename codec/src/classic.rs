//! # Classic Addresses
//!
//! A classic address is the base58-check encoding of a single version byte
//! (`0x00`) followed by a 20-byte account id. The zero version byte is why
//! every classic address starts with `r`:
//!
//! ```text
//! [0x00][account id: 20 bytes][checksum: 4 bytes] -> rU6K7V3Po4snVhBBaU29sesqs2qTQJWDw1
//! ```

use crate::base58::{decode_with_prefix, encode_with_prefix};
use crate::config::{ACCOUNT_ID_LENGTH, CLASSIC_ADDRESS_PREFIX};
use crate::error::Result;
use crate::types::AccountId;

/// Encode a 20-byte account id as a classic address.
///
/// Fails with [`InvalidLength`](crate::AddressCodecError::InvalidLength)
/// if `account_id` is not exactly 20 bytes.
///
/// # Example
///
/// ```
/// use ledger_address_codec::encode_classic_address;
///
/// let address = encode_classic_address(&[0u8; 20]).unwrap();
/// assert_eq!(address, "rrrrrrrrrrrrrrrrrrrrrhoLvTp");
/// ```
pub fn encode_classic_address(account_id: &[u8]) -> Result<String> {
    encode_with_prefix(account_id, &CLASSIC_ADDRESS_PREFIX, ACCOUNT_ID_LENGTH)
}

/// Decode a classic address back into its 20-byte account id.
///
/// Propagates checksum and alphabet failures from the base codec, and fails
/// with [`InvalidVersion`](crate::AddressCodecError::InvalidVersion) when the
/// leading byte is not the account version byte.
pub fn decode_classic_address(address: &str) -> Result<AccountId> {
    let body = decode_with_prefix(address, &CLASSIC_ADDRESS_PREFIX, ACCOUNT_ID_LENGTH)?;
    AccountId::from_slice(&body)
}

/// Whether `text` is a well-formed classic address.
///
/// Never fails: every decode error maps to `false`.
pub fn is_valid_classic_address(text: &str) -> bool {
    decode_classic_address(text).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AddressCodecError;

    const GENESIS_ADDRESS: &str = "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh";
    const GENESIS_ACCOUNT_ID: &str = "b5f762798a53d543a014caf8b297cff8f2f937e8";

    #[test]
    fn encodes_known_account() {
        let id = hex::decode(GENESIS_ACCOUNT_ID).unwrap();
        assert_eq!(encode_classic_address(&id).unwrap(), GENESIS_ADDRESS);
    }

    #[test]
    fn decodes_known_account() {
        let id = decode_classic_address(GENESIS_ADDRESS).unwrap();
        assert_eq!(hex::encode(id.as_bytes()), GENESIS_ACCOUNT_ID);
    }

    #[test]
    fn special_accounts() {
        assert_eq!(
            encode_classic_address(&[0u8; 20]).unwrap(),
            "rrrrrrrrrrrrrrrrrrrrrhoLvTp"
        );
        let mut one = [0u8; 20];
        one[19] = 1;
        assert_eq!(
            encode_classic_address(&one).unwrap(),
            "rrrrrrrrrrrrrrrrrrrrBZbvji"
        );
    }

    #[test]
    fn encode_rejects_wrong_length() {
        for len in [0usize, 19, 21, 33] {
            let err = encode_classic_address(&vec![1u8; len]).unwrap_err();
            assert_eq!(
                err,
                AddressCodecError::InvalidLength {
                    expected: 20,
                    got: len
                }
            );
        }
    }

    #[test]
    fn decode_rejects_other_version() {
        // A node public key is valid base58-check but carries prefix 0x1C.
        let err =
            decode_classic_address("n9MXXueo837zYH36DvMc13BwHcqtfAWNJY5czWVbp7uYTj7x17TH")
                .unwrap_err();
        assert!(matches!(err, AddressCodecError::InvalidVersion { .. }));
    }

    #[test]
    fn decode_rejects_xaddress() {
        let err =
            decode_classic_address("X7AcgcsBL6XDcUb289X4mJ8djcdyKaB5hJDWMArnXr61cqZ").unwrap_err();
        assert!(matches!(err, AddressCodecError::InvalidVersion { .. }));
    }

    #[test]
    fn valid_secp256k1_account() {
        assert!(is_valid_classic_address("rU6K7V3Po4snVhBBaU29sesqs2qTQJWDw1"));
    }

    #[test]
    fn valid_ed25519_account() {
        assert!(is_valid_classic_address("rLUEXYuLiQptky37CqLcm9USQpPiz5rkpD"));
    }

    #[test]
    fn altered_last_character_is_invalid() {
        assert!(!is_valid_classic_address("rU6K7V3Po4snVhBBaU29sesqs2qTQJWDw2"));
    }

    #[test]
    fn validator_is_total() {
        for text in [
            "",
            "r",
            "0OIl",
            "rU6K7V3Po4snVhBBaU29sesqs2qTQJWDw1 ",
            "rrrrrrrrrrrrrrrrrrrrBZbvjirr",
            "sn259rEFXrQrWyx3Q7XneWcwV6dfL",
            "\u{1F600}",
        ] {
            assert!(!is_valid_classic_address(text), "accepted {:?}", text);
        }
    }
}
