//! Error types for the address codec.
//!
//! Every fallible operation returns an [`AddressCodecError`]. Each variant
//! maps to exactly one [`ErrorKind`], so callers can tell "wrong network"
//! apart from "corrupted input" without matching on payload fields.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AddressCodecError>;

/// Errors that can occur while encoding or decoding addresses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressCodecError {
    /// A payload or decoded buffer has the wrong number of bytes.
    #[error("invalid length: expected {expected} bytes, got {got}")]
    InvalidLength {
        /// Number of bytes required.
        expected: usize,
        /// Number of bytes supplied or decoded.
        got: usize,
    },

    /// The tag does not fit in an unsigned 32-bit integer.
    #[error("tag {0} exceeds the 32-bit unsigned range")]
    TagOutOfRange(u64),

    /// The trailing checksum does not match the payload.
    #[error("checksum mismatch")]
    InvalidChecksum,

    /// The text contains a symbol outside the 58-character alphabet.
    #[error("invalid character {character:?} at index {index}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Byte offset into the input text.
        index: usize,
    },

    /// The leading version bytes do not match the expected prefix.
    #[error("invalid version prefix: expected {expected:02x?}, got {got:02x?}")]
    InvalidVersion {
        /// The reserved prefix this decoder accepts.
        expected: Vec<u8>,
        /// The leading bytes actually found.
        got: Vec<u8>,
    },

    /// The X-address network prefix matches neither reserved constant.
    #[error("unknown X-address network prefix {0:02x?}")]
    UnknownNetworkPrefix([u8; 2]),

    /// The X-address tag flag byte is neither 0 nor 1.
    #[error("invalid X-address tag flag {0}")]
    InvalidFlag(u8),

    /// Reserved tag-field bytes that must be zero are not.
    #[error("X-address reserved tag bytes are not zero")]
    NonZeroReservedBytes,

    /// A seed matched none of the known algorithm prefixes.
    #[error("seed prefix matches no known algorithm")]
    UnknownSeedPrefix,

    /// An X-address carried a tag where only a bare account is accepted.
    #[error("a tag is not supported here; use an address without a tag")]
    TagNotSupported,
}

/// Failure category of an [`AddressCodecError`], without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Length,
    Range,
    Checksum,
    Alphabet,
    Version,
    Prefix,
    Flag,
    ReservedBytes,
    TagNotSupported,
}

impl AddressCodecError {
    /// The failure category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidLength { .. } => ErrorKind::Length,
            Self::TagOutOfRange(_) => ErrorKind::Range,
            Self::InvalidChecksum => ErrorKind::Checksum,
            Self::InvalidCharacter { .. } => ErrorKind::Alphabet,
            Self::InvalidVersion { .. } | Self::UnknownSeedPrefix => ErrorKind::Version,
            Self::UnknownNetworkPrefix(_) => ErrorKind::Prefix,
            Self::InvalidFlag(_) => ErrorKind::Flag,
            Self::NonZeroReservedBytes => ErrorKind::ReservedBytes,
            Self::TagNotSupported => ErrorKind::TagNotSupported,
        }
    }
}
