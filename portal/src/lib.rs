//! Delegation portal application layer.
//!
//! Ties the registry, the signer and the HTTP API together:
//! - [`PortalConfig`]: TOML-backed process configuration
//! - [`PortalSession`]: connected-wallet state and user-facing status messages
//! - [`app`]: builds the registry, signer and server from a config

pub mod app;
pub mod config;
pub mod error;
pub mod session;

pub use config::PortalConfig;
pub use error::{PortalAppError, SessionError};
pub use session::{network_display_name, PortalSession, Status};
