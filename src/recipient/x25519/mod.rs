// File: src/recipient/x25519/mod.rs
//! Recipient key agreement over X25519 (RFC 7748)
//!
//! X25519 is a fixed-function Diffie-Hellman construction: keys, public
//! values, and shared secrets are all exactly 32 bytes, and there is only
//! one point encoding. Length checks happen before any arithmetic, so a
//! call either passes both checks and derives a key or fails with no
//! partial state.

use x25519_dalek::{PublicKey, StaticSecret};
use zeroize::{Zeroize, Zeroizing};

use crate::error::{Error, Result};
use crate::kdf;
use crate::recipient::RecipientKem;
use crate::types::{EcPointFormat, HashType};

#[cfg(not(feature = "std"))]
use alloc::{format, vec::Vec};

/// X25519 private key length in bytes
pub const X25519_PRIVATE_KEY_LEN: usize = 32;

/// X25519 public value (KEM bytes) length in bytes
pub const X25519_PUBLIC_VALUE_LEN: usize = 32;

/// Recipient key agreement bound to one X25519 private key.
///
/// The 32-byte key is copied at construction into a buffer that zeroizes
/// on drop; state is read-only afterwards.
pub struct EciesX25519RecipientKem {
    private_key: StaticSecret,
}

// No fields: the private key must not appear in debug output.
impl core::fmt::Debug for EciesX25519RecipientKem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EciesX25519RecipientKem")
            .finish_non_exhaustive()
    }
}

impl EciesX25519RecipientKem {
    /// Create a recipient instance owning a copy of the 32-byte private key.
    ///
    /// # Errors
    /// `InvalidArgument` when `private_key` is not exactly 32 bytes.
    pub fn new(private_key: &[u8]) -> Result<Self> {
        if private_key.len() != X25519_PRIVATE_KEY_LEN {
            return Err(Error::InvalidArgument {
                context: "EciesX25519RecipientKem::new",
                message: format!(
                    "private key must be {} bytes, got {}",
                    X25519_PRIVATE_KEY_LEN,
                    private_key.len()
                ),
            });
        }

        let mut key_bytes = [0u8; X25519_PRIVATE_KEY_LEN];
        key_bytes.copy_from_slice(private_key);
        let secret = StaticSecret::from(key_bytes);
        key_bytes.zeroize();

        Ok(Self {
            private_key: secret,
        })
    }
}

impl RecipientKem for EciesX25519RecipientKem {
    fn generate_key(
        &self,
        kem_bytes: &[u8],
        hash: HashType,
        salt: &[u8],
        info: &[u8],
        key_size: usize,
        point_format: EcPointFormat,
    ) -> Result<Zeroizing<Vec<u8>>> {
        // X25519 has no alternate point encodings.
        if point_format != EcPointFormat::Compressed {
            return Err(Error::InvalidArgument {
                context: "EciesX25519RecipientKem::generate_key",
                message: "X25519 only supports compressed points".into(),
            });
        }
        if kem_bytes.len() != X25519_PUBLIC_VALUE_LEN {
            return Err(Error::InvalidArgument {
                context: "EciesX25519RecipientKem::generate_key",
                message: format!(
                    "invalid KEM bytes: expected {} bytes, got {}",
                    X25519_PUBLIC_VALUE_LEN,
                    kem_bytes.len()
                ),
            });
        }

        let mut public_bytes = [0u8; X25519_PUBLIC_VALUE_LEN];
        public_bytes.copy_from_slice(kem_bytes);
        let shared_secret = self.private_key.diffie_hellman(&PublicKey::from(public_bytes));

        kdf::ecies_hkdf_symmetric_key(
            hash,
            kem_bytes,
            shared_secret.as_bytes(),
            salt,
            info,
            key_size,
        )
    }
}

#[cfg(test)]
mod tests;
