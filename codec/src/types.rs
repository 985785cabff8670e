//! # Typed Address Values
//!
//! Strongly-typed wrappers over the free encode/decode functions. The free
//! functions accept raw slices and integers (and validate them); the types
//! here make invalid values unrepresentable, so their conversions to text
//! never fail.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::base58::encode_check;
use crate::config::{
    ACCOUNT_ID_LENGTH, CLASSIC_ADDRESS_PREFIX, MAIN_NETWORK_PREFIX, TEST_NETWORK_PREFIX,
};
use crate::error::{AddressCodecError, Result};

// ---------------------------------------------------------------------------
// AccountId
// ---------------------------------------------------------------------------

/// A 20-byte ledger account identifier.
///
/// Opaque: the bytes are never interpreted, only encoded. Derivation from
/// key material happens elsewhere.
///
/// # Examples
///
/// ```
/// use ledger_address_codec::AccountId;
///
/// let id: AccountId = "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh".parse().unwrap();
/// assert_eq!(id.to_string(), "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountId([u8; ACCOUNT_ID_LENGTH]);

impl AccountId {
    /// Wrap a fixed-size byte array.
    pub const fn new(bytes: [u8; ACCOUNT_ID_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Copy an account id out of a slice, which must be exactly 20 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let array: [u8; ACCOUNT_ID_LENGTH] =
            bytes.try_into().map_err(|_| AddressCodecError::InvalidLength {
                expected: ACCOUNT_ID_LENGTH,
                got: bytes.len(),
            })?;
        Ok(Self(array))
    }

    /// The raw account id bytes.
    pub fn as_bytes(&self) -> &[u8; ACCOUNT_ID_LENGTH] {
        &self.0
    }

    /// Encode as a classic address.
    pub fn to_classic_address(&self) -> String {
        let mut payload = [0u8; 1 + ACCOUNT_ID_LENGTH];
        payload[..1].copy_from_slice(&CLASSIC_ADDRESS_PREFIX);
        payload[1..].copy_from_slice(&self.0);
        encode_check(&payload)
    }
}

impl From<[u8; ACCOUNT_ID_LENGTH]> for AccountId {
    fn from(bytes: [u8; ACCOUNT_ID_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for AccountId {
    type Error = AddressCodecError;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_slice(bytes)
    }
}

impl AsRef<[u8]> for AccountId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for AccountId {
    type Err = AddressCodecError;

    /// Parse a classic address.
    fn from_str(s: &str) -> Result<Self> {
        crate::classic::decode_classic_address(s)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_classic_address())
    }
}

impl fmt::Debug for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountId({})", hex::encode_upper(self.0))
    }
}

impl Serialize for AccountId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.to_classic_address())
        } else {
            serializer.serialize_bytes(&self.0)
        }
    }
}

impl<'de> Deserialize<'de> for AccountId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            let s = String::deserialize(deserializer)?;
            s.parse().map_err(serde::de::Error::custom)
        } else {
            let bytes = <Vec<u8>>::deserialize(deserializer)?;
            AccountId::from_slice(&bytes).map_err(serde::de::Error::custom)
        }
    }
}

// ---------------------------------------------------------------------------
// Network
// ---------------------------------------------------------------------------

/// Which ledger an X-address belongs to. Always explicit, never inferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// The production ledger.
    Main,
    /// The test ledger.
    Test,
}

impl Network {
    /// Map the boolean network flag used by the free functions.
    pub fn from_is_test(is_test_network: bool) -> Self {
        if is_test_network {
            Network::Test
        } else {
            Network::Main
        }
    }

    pub fn is_test(self) -> bool {
        matches!(self, Network::Test)
    }

    /// The reserved 2-byte X-address prefix for this network.
    pub fn prefix(self) -> [u8; 2] {
        match self {
            Network::Main => MAIN_NETWORK_PREFIX,
            Network::Test => TEST_NETWORK_PREFIX,
        }
    }

    /// Inverse of [`prefix`](Self::prefix). Unknown prefixes are an error,
    /// never a guess.
    pub fn from_prefix(prefix: [u8; 2]) -> Result<Self> {
        match prefix {
            MAIN_NETWORK_PREFIX => Ok(Network::Main),
            TEST_NETWORK_PREFIX => Ok(Network::Test),
            other => Err(AddressCodecError::UnknownNetworkPrefix(other)),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Main => f.write_str("main"),
            Network::Test => f.write_str("test"),
        }
    }
}

// ---------------------------------------------------------------------------
// XAddress
// ---------------------------------------------------------------------------

/// The decoded contents of an X-address.
///
/// # Examples
///
/// ```
/// use ledger_address_codec::{Network, XAddress};
///
/// let x: XAddress = "X7AcgcsBL6XDcUb289X4mJ8djcdyKaGZMhc9YTE92ehJ2Fu".parse().unwrap();
/// assert_eq!(x.tag, Some(1));
/// assert_eq!(x.network, Network::Main);
/// assert_eq!(x.account_id.to_string(), "r9cZA1mLK5R5Am25ArfXFmqgNwjZgnfk59");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct XAddress {
    pub account_id: AccountId,
    /// `None` is distinct from `Some(0)`.
    pub tag: Option<u32>,
    pub network: Network,
}

impl XAddress {
    pub fn new(account_id: AccountId, tag: Option<u32>, network: Network) -> Self {
        Self {
            account_id,
            tag,
            network,
        }
    }

    /// Encode as X-address text.
    pub fn encode(&self) -> String {
        crate::xaddress::encode_payload(&crate::xaddress::build_payload(
            &self.account_id,
            self.tag,
            self.network,
        ))
    }

    /// The classic address of the underlying account, dropping tag and network.
    pub fn classic_address(&self) -> String {
        self.account_id.to_classic_address()
    }
}

impl FromStr for XAddress {
    type Err = AddressCodecError;

    fn from_str(s: &str) -> Result<Self> {
        crate::xaddress::parse_xaddress(s)
    }
}

impl fmt::Display for XAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl Serialize for XAddress {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.encode())
    }
}

impl<'de> Deserialize<'de> for XAddress {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
