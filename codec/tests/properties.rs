//! Randomised round-trip and checksum-sensitivity checks.
//!
//! Seeded RNG so failures reproduce.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use ledger_address_codec::base58::{decode_check, encode_check};
use ledger_address_codec::{
    classic_address_to_xaddress, decode_classic_address, decode_xaddress, encode_classic_address,
    encode_xaddress, is_valid_classic_address, xaddress_to_classic_address, AccountId,
    AddressCodecError, ErrorKind, Network, XAddress,
};

const ITERATIONS: usize = 256;

fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed_0001)
}

fn random_tag(rng: &mut StdRng) -> Option<u32> {
    match rng.gen_range(0..4) {
        0 => None,
        1 => Some(0),
        2 => Some(u32::MAX),
        _ => Some(rng.gen()),
    }
}

#[test]
fn xaddress_round_trip() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let id: [u8; 20] = rng.gen();
        let tag = random_tag(&mut rng);
        let is_test: bool = rng.gen();

        let x = encode_xaddress(&id, tag.map(u64::from), is_test).unwrap();
        assert_eq!(decode_xaddress(&x).unwrap(), (AccountId::new(id), tag, is_test));
    }
}

#[test]
fn classic_round_trip() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let id: [u8; 20] = rng.gen();
        let address = encode_classic_address(&id).unwrap();
        assert!(address.starts_with('r'));
        assert!(is_valid_classic_address(&address));
        assert_eq!(decode_classic_address(&address).unwrap().as_bytes(), &id);
    }
}

#[test]
fn cross_format_round_trip() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let id: [u8; 20] = rng.gen();
        let classic = encode_classic_address(&id).unwrap();
        let tag = random_tag(&mut rng);
        let is_test: bool = rng.gen();

        let x = classic_address_to_xaddress(&classic, tag.map(u64::from), is_test).unwrap();
        assert_eq!(
            xaddress_to_classic_address(&x).unwrap(),
            (classic, tag, is_test)
        );
    }
}

#[test]
fn networks_produce_distinct_strings() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let id: [u8; 20] = rng.gen();
        let tag = random_tag(&mut rng).map(u64::from);
        let main = encode_xaddress(&id, tag, false).unwrap();
        let test = encode_xaddress(&id, tag, true).unwrap();
        assert_ne!(main, test);
        assert!(main.starts_with('X'), "{}", main);
        assert!(test.starts_with('T'), "{}", test);
        assert!(!decode_xaddress(&main).unwrap().2);
        assert!(decode_xaddress(&test).unwrap().2);
    }
}

#[test]
fn flipping_any_byte_breaks_the_checksum() {
    let mut rng = rng();
    for _ in 0..64 {
        let id: [u8; 20] = rng.gen();
        let tag = random_tag(&mut rng).map(u64::from);
        let x = encode_xaddress(&id, tag, rng.gen()).unwrap();

        // Raw payload || checksum, so corruption can land on either part.
        let full = bs58::decode(&x)
            .with_alphabet(bs58::Alphabet::RIPPLE)
            .into_vec()
            .unwrap();
        assert_eq!(full.len(), 31 + 4);

        for index in 0..full.len() {
            let mut corrupted = full.clone();
            corrupted[index] ^= 1 << rng.gen_range(0..8);
            let text = bs58::encode(&corrupted)
                .with_alphabet(bs58::Alphabet::RIPPLE)
                .into_string();
            assert_eq!(
                decode_xaddress(&text).unwrap_err(),
                AddressCodecError::InvalidChecksum,
                "byte {} flipped",
                index
            );
        }
    }
}

#[test]
fn base_codec_round_trips_arbitrary_payloads() {
    let mut rng = rng();
    for len in 0..64 {
        let mut payload = vec![0u8; len];
        rng.fill(payload.as_mut_slice());
        // Leading zeros exercise the `r` padding rule.
        if len > 2 {
            payload[0] = 0;
            payload[1] = 0;
        }
        assert_eq!(decode_check(&encode_check(&payload)).unwrap(), payload);
    }
}

#[test]
fn typed_and_free_functions_agree() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let id = AccountId::new(rng.gen());
        let tag = random_tag(&mut rng);
        let network = if rng.gen() { Network::Test } else { Network::Main };

        let typed = XAddress::new(id, tag, network);
        let free = encode_xaddress(id.as_bytes(), tag.map(u64::from), network.is_test()).unwrap();
        assert_eq!(typed.to_string(), free);
        assert_eq!(free.parse::<XAddress>().unwrap(), typed);
        assert_eq!(id.to_string(), encode_classic_address(id.as_bytes()).unwrap());
    }
}

#[test]
fn out_of_range_tags_always_rejected() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let tag = rng.gen_range(u64::from(u32::MAX) + 1..=u64::MAX);
        let err = encode_xaddress(&[0u8; 20], Some(tag), rng.gen()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
    }
}
