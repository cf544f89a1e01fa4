// File: src/recipient/x25519/tests.rs
use super::*;
use crate::kdf::ecies_hkdf_symmetric_key;

// RFC 7748 section 6.1 Diffie-Hellman test vectors.
const ALICE_PRIVATE: &str = "77076d0a7318a57d3c16c17251b26645df4c2f87ebc0992ab177fba51db92c2a";
const ALICE_PUBLIC: &str = "8520f0098930a754748b7ddcb43ef75a0dbf3a0d26381af4eba4a98eaa9b4e6a";
const BOB_PRIVATE: &str = "5dab087e624a8a4b79e17f8b83800ee66f3bb1292618b6fd1c2f8b27ff88e0eb";
const BOB_PUBLIC: &str = "de9edb7d7b7dc1b4d35b61c2ece435373f8343c85b78674dadfc7e146f882b4f";
const SHARED: &str = "4a5d9d5ba4ce2de1728e3bf480350f25e07e21c947d19e3376f09b3c1e161742";

fn recipient(private_hex: &str) -> EciesX25519RecipientKem {
    EciesX25519RecipientKem::new(&hex::decode(private_hex).unwrap()).unwrap()
}

#[test]
fn derives_key_from_rfc7748_shared_secret() {
    // The derived key must equal the deriver applied to the RFC's published
    // shared secret K, with Bob's public value as the bound KEM bytes.
    let kem_bytes = hex::decode(BOB_PUBLIC).unwrap();
    let shared = hex::decode(SHARED).unwrap();

    let key = recipient(ALICE_PRIVATE)
        .generate_key(
            &kem_bytes,
            HashType::Sha256,
            b"salt",
            b"info",
            32,
            EcPointFormat::Compressed,
        )
        .unwrap();

    let expected =
        ecies_hkdf_symmetric_key(HashType::Sha256, &kem_bytes, &shared, b"salt", b"info", 32)
            .unwrap();
    assert_eq!(*key, *expected);
}

#[test]
fn both_directions_agree_on_the_raw_secret() {
    // Alice deriving against Bob's public value and Bob deriving against
    // Alice's must both reduce to the same RFC 7748 shared secret; with the
    // same KEM bytes bound, the derived keys coincide.
    let kem_bytes = hex::decode(ALICE_PUBLIC).unwrap();
    let shared = hex::decode(SHARED).unwrap();

    let key = recipient(BOB_PRIVATE)
        .generate_key(
            &kem_bytes,
            HashType::Sha512,
            b"",
            b"",
            64,
            EcPointFormat::Compressed,
        )
        .unwrap();

    let expected =
        ecies_hkdf_symmetric_key(HashType::Sha512, &kem_bytes, &shared, b"", b"", 64).unwrap();
    assert_eq!(*key, *expected);
}

#[test]
fn derived_key_matches_pinned_vector() {
    // Full-composition vectors: X25519 over the RFC 7748 key pair followed
    // by HKDF-SHA256, checked against independently computed output bytes.
    // Catches a regression in the composition even if the halves still
    // agree with each other.
    let kem = recipient(ALICE_PRIVATE);
    let kem_bytes = hex::decode(BOB_PUBLIC).unwrap();

    let key = kem
        .generate_key(&kem_bytes, HashType::Sha256, b"", b"", 32, EcPointFormat::Compressed)
        .unwrap();
    assert_eq!(
        hex::encode(&*key),
        "d70eeee714cf3238ddf53a3bcabbe080b3736a25ac87b7d5c87a8b6ca7fd89d8"
    );

    let key = kem
        .generate_key(
            &kem_bytes,
            HashType::Sha256,
            b"salt",
            b"context info",
            32,
            EcPointFormat::Compressed,
        )
        .unwrap();
    assert_eq!(
        hex::encode(&*key),
        "ba2ff36fa37c1872ab688737189159baf0485e7060d943619261ba892215c2d7"
    );
}

#[test]
fn generate_key_is_deterministic() {
    let kem = recipient(ALICE_PRIVATE);
    let kem_bytes = hex::decode(BOB_PUBLIC).unwrap();

    let a = kem
        .generate_key(&kem_bytes, HashType::Sha256, b"s", b"i", 32, EcPointFormat::Compressed)
        .unwrap();
    let b = kem
        .generate_key(&kem_bytes, HashType::Sha256, b"s", b"i", 32, EcPointFormat::Compressed)
        .unwrap();
    assert_eq!(*a, *b);
}

#[test]
fn different_kem_bytes_give_different_keys() {
    let kem = recipient(ALICE_PRIVATE);
    let a = kem
        .generate_key(
            &hex::decode(BOB_PUBLIC).unwrap(),
            HashType::Sha256,
            b"",
            b"",
            32,
            EcPointFormat::Compressed,
        )
        .unwrap();
    let b = kem
        .generate_key(
            &hex::decode(ALICE_PUBLIC).unwrap(),
            HashType::Sha256,
            b"",
            b"",
            32,
            EcPointFormat::Compressed,
        )
        .unwrap();
    assert_ne!(*a, *b);
}

#[test]
fn shorter_output_is_a_prefix_of_the_expansion() {
    // For lengths up to one hash block, HKDF-Expand truncates the same
    // first block, so the 16-byte key is a prefix of the 32-byte key.
    let kem = recipient(ALICE_PRIVATE);
    let kem_bytes = hex::decode(BOB_PUBLIC).unwrap();

    let long = kem
        .generate_key(&kem_bytes, HashType::Sha256, b"", b"", 32, EcPointFormat::Compressed)
        .unwrap();
    let short = kem
        .generate_key(&kem_bytes, HashType::Sha256, b"", b"", 16, EcPointFormat::Compressed)
        .unwrap();
    assert_eq!(*short, long[..16]);
}

#[test]
fn output_length_is_exact() {
    let kem = recipient(ALICE_PRIVATE);
    let kem_bytes = hex::decode(BOB_PUBLIC).unwrap();
    for len in [0usize, 1, 16, 32, 33, 64, 100] {
        let key = kem
            .generate_key(&kem_bytes, HashType::Sha256, b"", b"", len, EcPointFormat::Compressed)
            .unwrap();
        assert_eq!(key.len(), len);
    }
}

#[test]
fn rejects_uncompressed_point_format() {
    // Rejected before any length check: X25519 has no alternate encodings.
    let kem = recipient(ALICE_PRIVATE);
    let err = kem
        .generate_key(
            &hex::decode(BOB_PUBLIC).unwrap(),
            HashType::Sha256,
            b"",
            b"",
            32,
            EcPointFormat::Uncompressed,
        )
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));

    // Also rejected with garbage KEM bytes.
    let err = kem
        .generate_key(&[0u8; 7], HashType::Sha256, b"", b"", 32, EcPointFormat::Uncompressed)
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[test]
fn rejects_wrong_size_kem_bytes() {
    let kem = recipient(ALICE_PRIVATE);
    for len in [0usize, 16, 31, 33, 64] {
        let err = kem
            .generate_key(
                &vec![0x42u8; len],
                HashType::Sha256,
                b"",
                b"",
                32,
                EcPointFormat::Compressed,
            )
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }), "len {}", len);
    }
}

#[test]
fn rejects_wrong_size_private_key() {
    for len in [0usize, 16, 31, 33, 64] {
        let err = EciesX25519RecipientKem::new(&vec![0u8; len]).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }), "len {}", len);
    }
}
