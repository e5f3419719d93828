//! HTTP JSON API for the delegation portal.
//!
//! Provides endpoints for:
//! - Creating a delegation (signed with the server's signer, if configured)
//! - Verifying a delegation by identifier
//! - Fetching and revoking a delegation
//! - Listing the delegations an address takes part in
//! - Registry counters

pub mod error;
pub mod handlers;
pub mod server;

pub use error::RpcError;
pub use server::{router, AppState, RpcServer};
