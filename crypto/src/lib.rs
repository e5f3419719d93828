//! Cryptographic primitives for the delegation portal.
//!
//! - **secp256k1 ECDSA** (recoverable) for signing and signer recovery
//! - **Keccak-256** for message hashing and address derivation
//! - **Packed encoding** of the `(address, address, bytes)` delegation tuple
//! - Random delegation identifiers and placeholder signatures

pub mod hash;
pub mod keys;
pub mod packed;
pub mod random;
pub mod sign;

use thiserror::Error;

pub use hash::{keccak256, keccak256_multi};
pub use keys::{
    address_from_public, generate_keypair, keypair_from_private, keypair_from_seed,
    public_from_private,
};
pub use packed::{delegation_hash, encode_packed_delegation};
pub use random::{generate_delegation_id, placeholder_signature};
pub use sign::{eth_message_hash, recover_address, sign_message, verify_signature};

/// Errors from hashing, key handling and signature recovery.
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("invalid private key: {0}")]
    InvalidKey(String),

    #[error("signature recovery failed: {0}")]
    Recovery(String),

    #[error("signing failed: {0}")]
    Signing(String),
}
