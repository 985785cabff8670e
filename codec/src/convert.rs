//! # Cross-Format Conversion
//!
//! Classic address <-> X-address, composed from the two codecs. Errors from
//! either side propagate unchanged; nothing here retries or guesses.

use tracing::debug;

use crate::classic::{decode_classic_address, encode_classic_address};
use crate::error::{AddressCodecError, Result};
use crate::xaddress::{decode_xaddress, encode_xaddress, is_valid_xaddress};

/// Convert a classic address plus optional tag to an X-address.
///
/// # Example
///
/// ```
/// use ledger_address_codec::classic_address_to_xaddress;
///
/// let x = classic_address_to_xaddress("r9cZA1mLK5R5Am25ArfXFmqgNwjZgnfk59", None, true).unwrap();
/// assert_eq!(x, "T719a5UwUCnEs54UsxG9CJYYDhwmFCqkr7wxCcNcfZ6p5GZ");
/// ```
pub fn classic_address_to_xaddress(
    classic_address: &str,
    tag: Option<u64>,
    is_test_network: bool,
) -> Result<String> {
    let account_id = decode_classic_address(classic_address)?;
    encode_xaddress(account_id.as_bytes(), tag, is_test_network)
}

/// Convert an X-address to `(classic_address, tag, is_test_network)`.
pub fn xaddress_to_classic_address(xaddress: &str) -> Result<(String, Option<u32>, bool)> {
    let (account_id, tag, is_test_network) = decode_xaddress(xaddress)?;
    let classic_address = encode_classic_address(account_id.as_bytes())?;
    Ok((classic_address, tag, is_test_network))
}

/// Accept either format and return the classic address.
///
/// X-addresses that carry a tag are rejected with
/// [`TagNotSupported`](AddressCodecError::TagNotSupported); the tag is never
/// dropped.
pub fn ensure_classic_address(account: &str) -> Result<String> {
    if is_valid_xaddress(account) {
        let (classic_address, tag, _) = xaddress_to_classic_address(account)?;
        if tag.is_some() {
            debug!("refusing to strip tag from X-address");
            return Err(AddressCodecError::TagNotSupported);
        }
        return Ok(classic_address);
    }
    decode_classic_address(account)?;
    Ok(account.to_string())
}
