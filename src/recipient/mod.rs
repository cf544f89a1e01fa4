// File: src/recipient/mod.rs
//! Recipient-side key agreement variants and their factory
//!
//! The set of supported curve families is fixed protocol surface, so the
//! variants form a closed enum rather than an open extension point. Callers
//! that want uniform polymorphic use go through the [`RecipientKem`] trait,
//! which both variants and the enum itself implement.

pub mod nistp;
pub mod x25519;

use zeroize::Zeroizing;

use crate::error::{Error, Result};
use crate::types::{EcCurve, EcPointFormat, HashType};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

pub use nistp::EciesNistPRecipientKem;
pub use x25519::EciesX25519RecipientKem;

/// Capability interface shared by all recipient key-agreement variants.
///
/// A variant is bound to one curve and one private key for its lifetime.
/// `generate_key` is a pure function of the instance state and its
/// arguments; instances may be shared across threads freely.
pub trait RecipientKem {
    /// Recover the shared secret from `kem_bytes` and derive a symmetric
    /// key of exactly `key_size` bytes.
    ///
    /// # Arguments
    /// * `kem_bytes` - The sender's transmitted ephemeral public value
    /// * `hash` - Hash function for the HKDF derivation step
    /// * `salt` - HKDF salt
    /// * `info` - HKDF context/application info
    /// * `key_size` - Exact output length in bytes
    /// * `point_format` - Encoding of `kem_bytes`; X25519 accepts only
    ///   [`EcPointFormat::Compressed`]
    fn generate_key(
        &self,
        kem_bytes: &[u8],
        hash: HashType,
        salt: &[u8],
        info: &[u8],
        key_size: usize,
        point_format: EcPointFormat,
    ) -> Result<Zeroizing<Vec<u8>>>;
}

/// A recipient KEM instance for one of the supported curve families.
///
/// Construct with [`EciesRecipientKem::new`], which dispatches on the curve
/// identifier and validates the private key material up front.
pub enum EciesRecipientKem {
    /// NIST prime-order curve variant (P-256, P-384, P-521)
    NistP(EciesNistPRecipientKem),
    /// X25519 variant
    X25519(EciesX25519RecipientKem),
}

// Variant name only: the inner types hold private key material and must
// not appear in debug output.
impl core::fmt::Debug for EciesRecipientKem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NistP(_) => f.write_str("EciesRecipientKem::NistP(..)"),
            Self::X25519(_) => f.write_str("EciesRecipientKem::X25519(..)"),
        }
    }
}

impl EciesRecipientKem {
    /// Create the recipient KEM variant for `curve`.
    ///
    /// # Errors
    /// * `InvalidArgument` - empty private key for a NIST curve, or an
    ///   X25519 key whose length is not exactly 32 bytes
    /// * `Unimplemented` - a recognized curve with no recipient KEM
    ///   implementation (currently secp256k1)
    pub fn new(curve: EcCurve, private_key: &[u8]) -> Result<Self> {
        match curve {
            EcCurve::P256 | EcCurve::P384 | EcCurve::P521 => Ok(Self::NistP(
                EciesNistPRecipientKem::new(curve, private_key)?,
            )),
            EcCurve::X25519 => Ok(Self::X25519(EciesX25519RecipientKem::new(private_key)?)),
            EcCurve::K256 => Err(Error::Unimplemented {
                curve: curve.name(),
            }),
        }
    }
}

impl RecipientKem for EciesRecipientKem {
    fn generate_key(
        &self,
        kem_bytes: &[u8],
        hash: HashType,
        salt: &[u8],
        info: &[u8],
        key_size: usize,
        point_format: EcPointFormat,
    ) -> Result<Zeroizing<Vec<u8>>> {
        match self {
            Self::NistP(kem) => {
                kem.generate_key(kem_bytes, hash, salt, info, key_size, point_format)
            }
            Self::X25519(kem) => {
                kem.generate_key(kem_bytes, hash, salt, info, key_size, point_format)
            }
        }
    }
}
