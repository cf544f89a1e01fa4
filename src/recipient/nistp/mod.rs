// File: src/recipient/nistp/mod.rs
//! Recipient key agreement over NIST prime-order curves
//!
//! Computes the ECDH shared secret between a static private scalar and the
//! sender's ephemeral public point, then derives the symmetric key with the
//! ECIES-HKDF step. The shared secret is the affine x-coordinate of the
//! shared point at fixed field width, as produced by the `elliptic-curve`
//! ECDH primitive.
//!
//! The private scalar is kept as the caller's big-endian byte encoding and
//! decoded per call; encodings shorter than the field width are accepted and
//! left-padded, redundant leading zero bytes are tolerated.

use elliptic_curve::ecdh::diffie_hellman;
use elliptic_curve::generic_array::typenum::Unsigned;
use elliptic_curve::sec1::{FromEncodedPoint, ModulusSize, ToEncodedPoint};
use elliptic_curve::{AffinePoint, CurveArithmetic, FieldBytes, FieldBytesSize, PublicKey, SecretKey};
use zeroize::Zeroizing;

use crate::error::{Error, Result};
use crate::kdf;
use crate::types::{EcCurve, EcPointFormat, HashType};
use crate::recipient::RecipientKem;

#[cfg(not(feature = "std"))]
use alloc::{format, vec, vec::Vec};

/// Recipient key agreement bound to one NIST curve and one private scalar.
///
/// Construct directly or through
/// [`EciesRecipientKem::new`](crate::EciesRecipientKem::new). State is
/// read-only after construction; the scalar bytes are zeroized on drop.
pub struct EciesNistPRecipientKem {
    curve: EcCurve,
    private_key: Zeroizing<Vec<u8>>,
}

// Curve only: the private scalar bytes must not appear in debug output.
impl core::fmt::Debug for EciesNistPRecipientKem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EciesNistPRecipientKem")
            .field("curve", &self.curve)
            .finish_non_exhaustive()
    }
}

impl EciesNistPRecipientKem {
    /// Create a recipient instance for `curve` owning a copy of the
    /// big-endian private scalar encoding.
    ///
    /// # Errors
    /// `InvalidArgument` when `private_key` is empty or `curve` is not one
    /// of P-256, P-384, P-521.
    pub fn new(curve: EcCurve, private_key: &[u8]) -> Result<Self> {
        match curve {
            EcCurve::P256 | EcCurve::P384 | EcCurve::P521 => {}
            _ => {
                return Err(Error::InvalidArgument {
                    context: "EciesNistPRecipientKem::new",
                    message: format!("{} is not a NIST prime-order curve", curve.name()),
                })
            }
        }
        if private_key.is_empty() {
            return Err(Error::InvalidArgument {
                context: "EciesNistPRecipientKem::new",
                message: "empty private key".into(),
            });
        }
        Ok(Self {
            curve,
            private_key: Zeroizing::new(private_key.to_vec()),
        })
    }

    /// The curve this instance is bound to
    pub fn curve(&self) -> EcCurve {
        self.curve
    }
}

impl RecipientKem for EciesNistPRecipientKem {
    fn generate_key(
        &self,
        kem_bytes: &[u8],
        hash: HashType,
        salt: &[u8],
        info: &[u8],
        key_size: usize,
        point_format: EcPointFormat,
    ) -> Result<Zeroizing<Vec<u8>>> {
        let shared_secret = match self.curve {
            EcCurve::P256 => {
                shared_secret::<p256::NistP256>(&self.private_key, kem_bytes, point_format)?
            }
            EcCurve::P384 => {
                shared_secret::<p384::NistP384>(&self.private_key, kem_bytes, point_format)?
            }
            EcCurve::P521 => {
                shared_secret::<p521::NistP521>(&self.private_key, kem_bytes, point_format)?
            }
            // Unreachable for instances built through `new`, which only
            // accepts the three curves above.
            other => {
                return Err(Error::InvalidArgument {
                    context: "EciesNistPRecipientKem::generate_key",
                    message: format!("{} is not a NIST prime-order curve", other.name()),
                })
            }
        };

        kdf::ecies_hkdf_symmetric_key(hash, kem_bytes, &shared_secret, salt, info, key_size)
    }
}

/// ECDH against a SEC1-encoded public point; returns the affine
/// x-coordinate of the shared point at fixed field width.
fn shared_secret<C>(
    private_key: &[u8],
    kem_bytes: &[u8],
    point_format: EcPointFormat,
) -> Result<Zeroizing<Vec<u8>>>
where
    C: CurveArithmetic,
    FieldBytesSize<C>: ModulusSize,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
{
    let field_len = FieldBytesSize::<C>::USIZE;
    check_sec1_framing(field_len, kem_bytes, point_format)?;

    // `from_sec1_bytes` validates that the point is on the curve and
    // rejects the identity encoding.
    let public_key = PublicKey::<C>::from_sec1_bytes(kem_bytes).map_err(|_| {
        Error::InvalidArgument {
            context: "ecdh_shared_secret",
            message: "invalid KEM bytes: not a valid point on the curve".into(),
        }
    })?;

    let secret_key = decode_scalar::<C>(private_key)?;
    let shared = diffie_hellman(secret_key.to_nonzero_scalar(), public_key.as_affine());
    Ok(Zeroizing::new(shared.raw_secret_bytes().to_vec()))
}

/// Parse a big-endian scalar encoding of arbitrary length into a secret key.
fn decode_scalar<C>(private_key: &[u8]) -> Result<SecretKey<C>>
where
    C: CurveArithmetic,
{
    let field_len = FieldBytesSize::<C>::USIZE;

    let mut scalar = private_key;
    while scalar.len() > field_len && scalar[0] == 0 {
        scalar = &scalar[1..];
    }
    if scalar.len() > field_len {
        return Err(Error::InvalidArgument {
            context: "ecdh_shared_secret",
            message: format!(
                "private key is {} bytes, wider than the {}-byte field",
                private_key.len(),
                field_len
            ),
        });
    }

    let mut padded = Zeroizing::new(vec![0u8; field_len]);
    padded[field_len - scalar.len()..].copy_from_slice(scalar);
    SecretKey::<C>::from_bytes(FieldBytes::<C>::from_slice(&padded)).map_err(|_| {
        Error::Primitive {
            context: "ecdh_shared_secret",
            message: "private scalar is zero or outside the group order".into(),
        }
    })
}

/// Validate the SEC1 length and tag byte for the requested point format
/// before handing the bytes to the point decoder.
fn check_sec1_framing(
    field_len: usize,
    kem_bytes: &[u8],
    point_format: EcPointFormat,
) -> Result<()> {
    let (expected_len, tag_ok) = match point_format {
        EcPointFormat::Compressed => (
            field_len + 1,
            matches!(kem_bytes.first(), Some(0x02 | 0x03)),
        ),
        EcPointFormat::Uncompressed => (2 * field_len + 1, matches!(kem_bytes.first(), Some(0x04))),
    };
    if kem_bytes.len() != expected_len {
        return Err(Error::InvalidArgument {
            context: "ecdh_shared_secret",
            message: format!(
                "invalid KEM bytes: expected {} bytes for a {} point, got {}",
                expected_len,
                point_format.name(),
                kem_bytes.len()
            ),
        });
    }
    if !tag_ok {
        return Err(Error::InvalidArgument {
            context: "ecdh_shared_secret",
            message: format!(
                "invalid KEM bytes: wrong tag byte for a {} point",
                point_format.name()
            ),
        });
    }
    Ok(())
}
