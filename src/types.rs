//! Shared enums for curve selection, point encoding, and HKDF hash choice

/// Elliptic curves recognized by the recipient KEM dispatcher.
///
/// Recognition is not the same as support: [`K256`](EcCurve::K256) is a
/// valid identifier on the wire but has no recipient KEM implementation,
/// so the factory rejects it with [`Error::Unimplemented`](crate::Error).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EcCurve {
    /// NIST P-256 (secp256r1)
    P256,
    /// NIST P-384 (secp384r1)
    P384,
    /// NIST P-521 (secp521r1)
    P521,
    /// secp256k1 (recognized, not supported)
    K256,
    /// Curve25519 in its Diffie-Hellman form (RFC 7748)
    X25519,
}

impl EcCurve {
    /// Curve name for error messages and display purposes
    pub const fn name(self) -> &'static str {
        match self {
            EcCurve::P256 => "P-256",
            EcCurve::P384 => "P-384",
            EcCurve::P521 => "P-521",
            EcCurve::K256 => "secp256k1",
            EcCurve::X25519 => "X25519",
        }
    }

    /// Size in bytes of one field element (the affine x-coordinate width)
    pub const fn field_element_size(self) -> usize {
        match self {
            EcCurve::P256 | EcCurve::K256 => 32,
            EcCurve::P384 => 48,
            EcCurve::P521 => 66,
            EcCurve::X25519 => 32,
        }
    }
}

/// Wire encoding of an elliptic-curve point (SEC1 framing for NIST curves)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EcPointFormat {
    /// `0x04 || x || y`
    Uncompressed,
    /// `0x02/0x03 || x`; the only format X25519 accepts
    Compressed,
}

impl EcPointFormat {
    /// Format name for error messages
    pub const fn name(self) -> &'static str {
        match self {
            EcPointFormat::Uncompressed => "uncompressed",
            EcPointFormat::Compressed => "compressed",
        }
    }
}

/// Hash function used inside the HKDF derivation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashType {
    /// SHA-224
    Sha224,
    /// SHA-256
    Sha256,
    /// SHA-384
    Sha384,
    /// SHA-512
    Sha512,
}

impl HashType {
    /// Digest output size in bytes
    pub const fn output_size(self) -> usize {
        match self {
            HashType::Sha224 => 28,
            HashType::Sha256 => 32,
            HashType::Sha384 => 48,
            HashType::Sha512 => 64,
        }
    }
}
