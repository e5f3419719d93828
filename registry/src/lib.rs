//! Delegation registry for the portal.
//!
//! A delegation is a permission grant from a delegator address to a
//! delegatee address, constrained by an opaque caveat. The registry:
//! - creates delegations, signing `keccak256(delegator ‖ delegatee ‖ caveat)`
//!   with the caller's signer when one is available
//! - verifies a delegation by identifier
//! - lists delegations an address takes part in
//! - revokes (deletes) delegations by identifier
//!
//! There is no authorization layer: anyone holding an identifier may verify
//! or revoke it.

pub mod config;
pub mod error;
pub mod registry;
pub mod stats;

pub use config::{RegistryConfig, SignatureFallback, VerificationMode};
pub use error::RegistryError;
pub use registry::DelegationRegistry;
pub use stats::{RegistryStats, StatsSnapshot};
