// File: src/kdf/mod.rs
//! ECIES symmetric key derivation (HKDF, RFC 5869)
//!
//! Both recipient variants funnel their shared secret through this module.
//! The input keying material is `kem_bytes || shared_secret`: binding the
//! transmitted public value ahead of the secret ties the derived key to the
//! specific ephemeral exchange, not merely to the secret value. This binding
//! is a fixed protocol decision and is not configurable per call.

use hkdf::Hkdf;
use sha2::{Sha224, Sha256, Sha384, Sha512};
use zeroize::Zeroizing;

use crate::error::{Error, Result};
use crate::types::HashType;

#[cfg(not(feature = "std"))]
use alloc::{format, vec, vec::Vec};

/// Derive a symmetric key of exactly `key_size` bytes from an ECIES exchange.
///
/// # Arguments
/// * `hash` - Hash function for HKDF extract and expand
/// * `kem_bytes` - The transmitted ephemeral public value, bound into the IKM
/// * `shared_secret` - The raw Diffie-Hellman shared secret
/// * `salt` - HKDF salt; an empty salt is equivalent to a zero-filled one
/// * `info` - HKDF context/application info
/// * `key_size` - Exact output length in bytes; zero is permitted
///
/// # Errors
/// `InvalidArgument` when `key_size` exceeds the HKDF expand limit of
/// 255 hash-lengths.
pub fn ecies_hkdf_symmetric_key(
    hash: HashType,
    kem_bytes: &[u8],
    shared_secret: &[u8],
    salt: &[u8],
    info: &[u8],
    key_size: usize,
) -> Result<Zeroizing<Vec<u8>>> {
    let mut ikm = Zeroizing::new(Vec::with_capacity(kem_bytes.len() + shared_secret.len()));
    ikm.extend_from_slice(kem_bytes);
    ikm.extend_from_slice(shared_secret);

    let mut okm = Zeroizing::new(vec![0u8; key_size]);
    let expanded = match hash {
        HashType::Sha224 => Hkdf::<Sha224>::new(Some(salt), &ikm).expand(info, &mut okm),
        HashType::Sha256 => Hkdf::<Sha256>::new(Some(salt), &ikm).expand(info, &mut okm),
        HashType::Sha384 => Hkdf::<Sha384>::new(Some(salt), &ikm).expand(info, &mut okm),
        HashType::Sha512 => Hkdf::<Sha512>::new(Some(salt), &ikm).expand(info, &mut okm),
    };
    expanded.map_err(|e| Error::InvalidArgument {
        context: "ecies_hkdf_symmetric_key",
        message: format!("requested key size {}: {}", key_size, e),
    })?;

    Ok(okm)
}
