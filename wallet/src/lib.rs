//! Signing identities for the delegation portal.
//!
//! - [`Signer`]: the capability "sign these bytes with the active identity".
//!   Implementations may fail (user rejection, locked wallet) and callers
//!   must cope with a signer being absent altogether.
//! - [`LocalWallet`]: an in-process secp256k1 key implementing [`Signer`].

pub mod error;
pub mod local;
pub mod signer;

pub use error::SignerError;
pub use local::LocalWallet;
pub use signer::Signer;
