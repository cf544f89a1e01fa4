//! Recipient-side ECIES-HKDF key encapsulation
//!
//! This crate implements the recipient half of the ECIES key-encapsulation
//! mechanism: given a static private key and the sender's transmitted
//! ephemeral public value ("KEM bytes"), it recovers the Diffie-Hellman
//! shared secret and derives a symmetric key of the requested length with
//! HKDF. The KEM bytes are bound into the derivation ahead of the shared
//! secret, so the derived key is tied to the specific ephemeral exchange.
//!
//! Two curve families are supported behind the [`RecipientKem`] trait:
//!
//! - NIST prime-order curves (P-256, P-384, P-521) via the `elliptic-curve`
//!   family of crates, with SEC1 point decoding in compressed or
//!   uncompressed format
//! - X25519 via `x25519-dalek`, with fixed 32-byte keys and public values
//!
//! The sender/encapsulation side and the outer authenticated encryption are
//! out of scope; pair this crate with an AEAD of your choice.
//!
//! # Example
//!
//! ```
//! use ecies_kem::{EcCurve, EcPointFormat, EciesRecipientKem, HashType, RecipientKem};
//!
//! let private_key = [0x42u8; 32];
//! let kem = EciesRecipientKem::new(EcCurve::X25519, &private_key)?;
//!
//! // `kem_bytes` is the sender's ephemeral public value.
//! let kem_bytes = [0x09u8; 32];
//! let key = kem.generate_key(
//!     &kem_bytes,
//!     HashType::Sha256,
//!     b"salt",
//!     b"context info",
//!     32,
//!     EcPointFormat::Compressed,
//! )?;
//! assert_eq!(key.len(), 32);
//! # Ok::<(), ecies_kem::Error>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod error;
pub mod kdf;
pub mod recipient;
pub mod types;

// Re-exports
pub use error::{Error, Result};
pub use recipient::nistp::EciesNistPRecipientKem;
pub use recipient::x25519::EciesX25519RecipientKem;
pub use recipient::{EciesRecipientKem, RecipientKem};
pub use types::{EcCurve, EcPointFormat, HashType};
