//! Shared utilities for the delegation portal.

pub mod format;
pub mod logging;

pub use format::format_address;
pub use logging::{init_logging, LogFormat};
