//! Top-level error type shared across crates.

use thiserror::Error;

/// Common error type for parsing and decoding portal values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PortalError {
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("invalid hex string: {0}")]
    InvalidHex(String),

    #[error("invalid signature: {0}")]
    InvalidSignature(String),

    #[error("invalid key: {0}")]
    InvalidKey(String),
}
