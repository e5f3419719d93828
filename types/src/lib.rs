//! Fundamental types for the delegation portal.
//!
//! This crate defines the core types shared across every other crate in the workspace:
//! addresses, delegation records, caveats, message hashes, signatures and the shared error.

pub mod address;
pub mod delegation;
pub mod error;
pub mod hash;
pub mod keys;

pub use address::Address;
pub use delegation::{Caveat, Delegation, DelegationId, DelegationType};
pub use error::PortalError;
pub use hash::MessageHash;
pub use keys::{KeyPair, PrivateKey, PublicKey, Signature};
