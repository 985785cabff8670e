// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # Ledger Address Codec
//!
//! Converts 20-byte ledger account ids to and from their human-facing text
//! forms. A wrong byte here sends funds to the wrong account, so every
//! decode verifies a checksum and every layout check is strict.
//!
//! ## Layers
//!
//! - **base58** — base58-check over the ledger alphabet. Bytes in, text out,
//!   checksum verified on the way back. No address semantics.
//! - **classic** — `[0x00][account id]`, the `r...` addresses.
//! - **xaddress** — `[network prefix][account id][flag][tag][reserved]`, the
//!   `X...`/`T...` addresses carrying an optional tag and the network.
//! - **convert** — classic <-> X-address, built from the two above.
//! - **seed**, **keys** — the same base58-check scheme for seeds and public
//!   keys.
//!
//! Everything is a pure function over immutable inputs. There is no global
//! mutable state, so all of it is safe to call from any thread.
//!
//! ## Example
//!
//! ```
//! use ledger_address_codec::{classic_address_to_xaddress, xaddress_to_classic_address};
//!
//! let x = classic_address_to_xaddress("r9cZA1mLK5R5Am25ArfXFmqgNwjZgnfk59", Some(1), false)?;
//! assert_eq!(x, "X7AcgcsBL6XDcUb289X4mJ8djcdyKaGZMhc9YTE92ehJ2Fu");
//!
//! let (classic, tag, is_test) = xaddress_to_classic_address(&x)?;
//! assert_eq!(classic, "r9cZA1mLK5R5Am25ArfXFmqgNwjZgnfk59");
//! assert_eq!(tag, Some(1));
//! assert!(!is_test);
//! # Ok::<(), ledger_address_codec::AddressCodecError>(())
//! ```

pub mod base58;
pub mod classic;
pub mod config;
pub mod convert;
pub mod error;
pub mod hash;
pub mod keys;
pub mod seed;
pub mod types;
pub mod xaddress;

pub use classic::{decode_classic_address, encode_classic_address, is_valid_classic_address};
pub use convert::{classic_address_to_xaddress, ensure_classic_address, xaddress_to_classic_address};
pub use error::{AddressCodecError, ErrorKind, Result};
pub use keys::{
    decode_account_public_key, decode_node_public_key, encode_account_public_key,
    encode_node_public_key,
};
pub use seed::{decode_seed, encode_seed, CryptoAlgorithm};
pub use types::{AccountId, Network, XAddress};
pub use xaddress::{decode_xaddress, encode_xaddress, is_valid_xaddress};
