//! Nullable infrastructure for deterministic testing.
//!
//! External collaborators (the signer capability, storage) are abstracted
//! behind traits. This crate provides test-friendly implementations that:
//! - Return deterministic values
//! - Can be told to fail on demand
//! - Never touch the network or a real wallet
//!
//! Usage: swap real implementations for nullables in tests.

pub mod signer;
pub mod store;

pub use signer::NullSigner;
pub use store::NullDelegationStore;
