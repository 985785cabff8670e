//! # Base58-Check Codec
//!
//! Byte-sequence to text transform with an integrity guarantee, and nothing
//! more. Address semantics live one layer up.
//!
//! ```text
//! payload
//!     -> payload || double_sha256(payload)[..4]
//!     -> base58 over the ledger alphabet (leading 0x00 bytes become `r`)
//! ```
//!
//! The big-integer base conversion is delegated to `bs58`; the checksum is
//! computed here so that checksum failures and alphabet failures surface as
//! distinct error kinds.

use bs58::Alphabet;
use tracing::trace;

use crate::config::CHECKSUM_LENGTH;
use crate::error::{AddressCodecError, Result};
use crate::hash::checksum;

/// Encode `payload` with a trailing 4-byte checksum.
///
/// # Example
///
/// ```
/// use ledger_address_codec::base58::{decode_check, encode_check};
///
/// let text = encode_check(&[0u8; 21]);
/// assert_eq!(text, "rrrrrrrrrrrrrrrrrrrrrhoLvTp");
/// assert_eq!(decode_check(&text).unwrap(), vec![0u8; 21]);
/// ```
pub fn encode_check(payload: &[u8]) -> String {
    let mut buf = Vec::with_capacity(payload.len() + CHECKSUM_LENGTH);
    buf.extend_from_slice(payload);
    buf.extend_from_slice(&checksum(payload));
    bs58::encode(buf).with_alphabet(Alphabet::RIPPLE).into_string()
}

/// Decode `text` and verify its trailing checksum.
///
/// Returns the payload with the checksum stripped. Fails with
/// [`AddressCodecError::InvalidCharacter`] on a symbol outside the alphabet
/// and [`AddressCodecError::InvalidChecksum`] when the checksum does not
/// match (including inputs too short to hold one).
pub fn decode_check(text: &str) -> Result<Vec<u8>> {
    let mut bytes = bs58::decode(text)
        .with_alphabet(Alphabet::RIPPLE)
        .into_vec()
        .map_err(|e| alphabet_error(text, e))?;

    if bytes.len() < CHECKSUM_LENGTH {
        trace!(len = bytes.len(), "decoded text too short to carry a checksum");
        return Err(AddressCodecError::InvalidChecksum);
    }

    let split = bytes.len() - CHECKSUM_LENGTH;
    let valid = {
        let (payload, check) = bytes.split_at(split);
        checksum(payload).as_slice() == check
    };
    if !valid {
        trace!(payload_len = split, "checksum mismatch");
        return Err(AddressCodecError::InvalidChecksum);
    }

    bytes.truncate(split);
    Ok(bytes)
}

/// Encode `payload` behind a reserved version `prefix`.
///
/// `payload` must be exactly `expected_len` bytes.
pub fn encode_with_prefix(payload: &[u8], prefix: &[u8], expected_len: usize) -> Result<String> {
    if payload.len() != expected_len {
        return Err(AddressCodecError::InvalidLength {
            expected: expected_len,
            got: payload.len(),
        });
    }
    let mut buf = Vec::with_capacity(prefix.len() + payload.len());
    buf.extend_from_slice(prefix);
    buf.extend_from_slice(payload);
    Ok(encode_check(&buf))
}

/// Decode `text`, require it to start with `prefix`, and return the
/// `expected_len` bytes that follow.
pub fn decode_with_prefix(text: &str, prefix: &[u8], expected_len: usize) -> Result<Vec<u8>> {
    let decoded = decode_check(text)?;

    if !decoded.starts_with(prefix) {
        let got = decoded[..prefix.len().min(decoded.len())].to_vec();
        trace!(expected = ?prefix, got = ?got, "version prefix mismatch");
        return Err(AddressCodecError::InvalidVersion {
            expected: prefix.to_vec(),
            got,
        });
    }

    let body = &decoded[prefix.len()..];
    if body.len() != expected_len {
        return Err(AddressCodecError::InvalidLength {
            expected: expected_len,
            got: body.len(),
        });
    }
    Ok(body.to_vec())
}

fn alphabet_error(text: &str, err: bs58::decode::Error) -> AddressCodecError {
    match err {
        bs58::decode::Error::InvalidCharacter { character, index } => {
            AddressCodecError::InvalidCharacter { character, index }
        }
        bs58::decode::Error::NonAsciiCharacter { index } => AddressCodecError::InvalidCharacter {
            character: text
                .get(index..)
                .and_then(|rest| rest.chars().next())
                .unwrap_or(char::REPLACEMENT_CHARACTER),
            index,
        },
        // Only buffer-sizing errors remain; `into_vec` sizes its own buffer.
        other => {
            trace!(error = %other, "unexpected base58 decode failure");
            AddressCodecError::InvalidChecksum
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ALPHABET;

    #[test]
    fn alphabet_constant_matches_digit_order() {
        for (digit, &symbol) in ALPHABET.iter().enumerate() {
            let text = bs58::encode([digit as u8])
                .with_alphabet(Alphabet::RIPPLE)
                .into_string();
            assert_eq!(text, (symbol as char).to_string(), "digit {}", digit);
        }
    }

    #[test]
    fn leading_zero_bytes_become_leading_r() {
        let mut payload = vec![0u8; 20];
        payload.push(1);
        let ones = encode_check(&payload);
        assert_eq!(ones, "rrrrrrrrrrrrrrrrrrrrBZbvji");
        assert!(encode_check(&[0u8; 21]).starts_with("rrrrrrrrrrrrrrrrrrrrr"));
    }

    #[test]
    fn decode_strips_checksum() {
        let payload = b"arbitrary payload".to_vec();
        let text = encode_check(&payload);
        assert_eq!(decode_check(&text).unwrap(), payload);
    }

    #[test]
    fn empty_text_is_checksum_error() {
        assert_eq!(decode_check(""), Err(AddressCodecError::InvalidChecksum));
    }

    #[test]
    fn short_text_is_checksum_error() {
        assert_eq!(decode_check("r"), Err(AddressCodecError::InvalidChecksum));
        assert_eq!(decode_check("rpsh"), Err(AddressCodecError::InvalidChecksum));
    }

    #[test]
    fn invalid_character_reports_position() {
        // `0` is not in the alphabet.
        let err = decode_check("rU6K7V3Po4snVhBBaU29sesqs2qTQJWD0").unwrap_err();
        assert_eq!(
            err,
            AddressCodecError::InvalidCharacter {
                character: '0',
                index: 32
            }
        );
    }

    #[test]
    fn non_ascii_is_alphabet_error() {
        let err = decode_check("rU6K7V3Po4snVhBBaU29sesqs2qTQJWDé").unwrap_err();
        assert!(matches!(
            err,
            AddressCodecError::InvalidCharacter {
                character: 'é',
                ..
            }
        ));
    }

    #[test]
    fn prefixed_round_trip() {
        let text = encode_with_prefix(&[9u8; 16], &[0x21], 16).unwrap();
        assert!(text.starts_with('s'));
        assert_eq!(decode_with_prefix(&text, &[0x21], 16).unwrap(), vec![9u8; 16]);
    }

    #[test]
    fn prefixed_encode_rejects_wrong_length() {
        assert_eq!(
            encode_with_prefix(&[9u8; 15], &[0x21], 16),
            Err(AddressCodecError::InvalidLength {
                expected: 16,
                got: 15
            })
        );
    }

    #[test]
    fn prefixed_decode_rejects_other_prefix() {
        let text = encode_with_prefix(&[9u8; 16], &[0x21], 16).unwrap();
        assert_eq!(
            decode_with_prefix(&text, &[0x00], 16),
            Err(AddressCodecError::InvalidVersion {
                expected: vec![0x00],
                got: vec![0x21]
            })
        );
    }

    #[test]
    fn prefixed_decode_rejects_wrong_body_length() {
        let text = encode_with_prefix(&[9u8; 16], &[0x21], 16).unwrap();
        assert_eq!(
            decode_with_prefix(&text, &[0x21], 20),
            Err(AddressCodecError::InvalidLength {
                expected: 20,
                got: 16
            })
        );
    }
}
