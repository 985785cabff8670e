//! # X-Addresses
//!
//! An X-address folds an account id, an optional tag, and the network into
//! one checksummed string. The decoded payload is fixed at 31 bytes:
//!
//! ```text
//! offset  len  field
//! 0       2    network prefix (0x05 0x44 main, 0x04 0x93 test)
//! 2       20   account id
//! 22      1    tag flag (0 = no tag, 1 = tag present)
//! 23      4    tag, little-endian (zero when absent)
//! 27      4    reserved, always zero
//! ```
//!
//! Decoding is strict: any reserved byte that is not zero is rejected, for
//! both flag values.

use std::ops::Range;
use tracing::trace;

use crate::base58::{decode_check, encode_check};
use crate::error::{AddressCodecError, Result};
use crate::types::{AccountId, Network, XAddress};

/// Decoded X-address payload length, before the checksum.
pub const XADDRESS_PAYLOAD_LENGTH: usize = 31;

const PREFIX: Range<usize> = 0..2;
const ACCOUNT_ID: Range<usize> = 2..22;
const FLAG: usize = 22;
const TAG: Range<usize> = 23..27;
const RESERVED: Range<usize> = 27..31;
/// Both halves of the 8-byte tag field.
const TAG_FIELD: Range<usize> = 23..31;

const FLAG_NO_TAG: u8 = 0;
const FLAG_TAG: u8 = 1;

/// Lay out the 31-byte payload. Inputs are already validated by type.
pub(crate) fn build_payload(
    account_id: &AccountId,
    tag: Option<u32>,
    network: Network,
) -> [u8; XADDRESS_PAYLOAD_LENGTH] {
    let mut payload = [0u8; XADDRESS_PAYLOAD_LENGTH];
    payload[PREFIX].copy_from_slice(&network.prefix());
    payload[ACCOUNT_ID].copy_from_slice(account_id.as_bytes());
    match tag {
        Some(tag) => {
            payload[FLAG] = FLAG_TAG;
            payload[TAG].copy_from_slice(&tag.to_le_bytes());
        }
        None => payload[FLAG] = FLAG_NO_TAG,
    }
    payload
}

pub(crate) fn encode_payload(payload: &[u8; XADDRESS_PAYLOAD_LENGTH]) -> String {
    encode_check(payload)
}

/// Encode an account id, optional tag, and network as an X-address.
///
/// Fails with [`InvalidLength`](AddressCodecError::InvalidLength) if
/// `account_id` is not 20 bytes and with
/// [`TagOutOfRange`](AddressCodecError::TagOutOfRange) if `tag` does not fit
/// in 32 bits. Tags are never truncated.
///
/// # Example
///
/// ```
/// use ledger_address_codec::{decode_classic_address, encode_xaddress};
///
/// let id = decode_classic_address("r9cZA1mLK5R5Am25ArfXFmqgNwjZgnfk59").unwrap();
/// let x = encode_xaddress(id.as_bytes(), Some(1), false).unwrap();
/// assert_eq!(x, "X7AcgcsBL6XDcUb289X4mJ8djcdyKaGZMhc9YTE92ehJ2Fu");
/// ```
pub fn encode_xaddress(
    account_id: &[u8],
    tag: Option<u64>,
    is_test_network: bool,
) -> Result<String> {
    let account_id = AccountId::from_slice(account_id)?;
    let tag = tag.map(checked_tag).transpose()?;
    let network = Network::from_is_test(is_test_network);
    Ok(encode_payload(&build_payload(&account_id, tag, network)))
}

/// Decode an X-address into `(account_id, tag, is_test_network)`.
pub fn decode_xaddress(address: &str) -> Result<(AccountId, Option<u32>, bool)> {
    let x = parse_xaddress(address)?;
    Ok((x.account_id, x.tag, x.network.is_test()))
}

/// Whether `text` is a well-formed X-address. Never fails.
pub fn is_valid_xaddress(text: &str) -> bool {
    parse_xaddress(text).is_ok()
}

pub(crate) fn parse_xaddress(address: &str) -> Result<XAddress> {
    let payload = decode_check(address)?;
    if payload.len() != XADDRESS_PAYLOAD_LENGTH {
        return Err(AddressCodecError::InvalidLength {
            expected: XADDRESS_PAYLOAD_LENGTH,
            got: payload.len(),
        });
    }

    let prefix = [payload[PREFIX.start], payload[PREFIX.start + 1]];
    let network = Network::from_prefix(prefix).map_err(|e| {
        trace!(prefix = ?prefix, "unknown X-address network prefix");
        e
    })?;

    let account_id = AccountId::from_slice(&payload[ACCOUNT_ID])?;
    let tag = decode_tag_field(payload[FLAG], &payload[TAG_FIELD])?;

    Ok(XAddress {
        account_id,
        tag,
        network,
    })
}

fn checked_tag(tag: u64) -> Result<u32> {
    u32::try_from(tag).map_err(|_| AddressCodecError::TagOutOfRange(tag))
}

/// Interpret the flag byte and the 8-byte tag field that follows it.
fn decode_tag_field(flag: u8, field: &[u8]) -> Result<Option<u32>> {
    // `field` covers TAG then RESERVED; rebase both ranges onto it.
    let tag_bytes = &field[..TAG.len()];
    let reserved = &field[TAG.len()..TAG.len() + RESERVED.len()];

    match flag {
        FLAG_TAG => {
            if reserved.iter().any(|&b| b != 0) {
                trace!("reserved bytes set on tagged X-address");
                return Err(AddressCodecError::NonZeroReservedBytes);
            }
            let mut le = [0u8; 4];
            le.copy_from_slice(tag_bytes);
            Ok(Some(u32::from_le_bytes(le)))
        }
        FLAG_NO_TAG => {
            if field.iter().any(|&b| b != 0) {
                trace!("tag bytes set on untagged X-address");
                return Err(AddressCodecError::NonZeroReservedBytes);
            }
            Ok(None)
        }
        other => {
            trace!(flag = other, "invalid X-address flag");
            Err(AddressCodecError::InvalidFlag(other))
        }
    }
}
