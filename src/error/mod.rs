//! Error handling for recipient KEM operations

use core::fmt;

#[cfg(not(feature = "std"))]
use alloc::string::String;

/// Error type for recipient KEM operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A caller-supplied argument was malformed or had the wrong size
    InvalidArgument {
        /// Operation that rejected the argument
        context: &'static str,
        /// What was wrong with it
        message: String,
    },

    /// The curve identifier has no recipient KEM implementation
    Unimplemented {
        /// Name of the unsupported curve
        curve: &'static str,
    },

    /// Failure surfaced from an underlying cryptographic primitive
    Primitive {
        /// Operation during which the primitive failed
        context: &'static str,
        /// Diagnostic detail from the primitive, where available
        message: String,
    },
}

/// Result type for recipient KEM operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument { context, message } => {
                write!(f, "invalid argument in {}: {}", context, message)
            }
            Error::Unimplemented { curve } => {
                write!(f, "unsupported elliptic curve: {}", curve)
            }
            Error::Primitive { context, message } => {
                write!(f, "primitive failure in {}: {}", context, message)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
