//! Portal configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use portal_registry::RegistryConfig;
use portal_utils::LogFormat;

use crate::PortalAppError;

/// Configuration for a portal process.
///
/// Can be loaded from a TOML file via [`PortalConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PortalConfig {
    /// Interface the HTTP API binds to.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: IpAddr,

    /// HTTP API port.
    #[serde(default = "default_rpc_port")]
    pub rpc_port: u16,

    /// Network name reported by the session (e.g. "homestead", "sepolia").
    #[serde(default = "default_network")]
    pub network: String,

    /// Hex-encoded private key for the server-side signer. Without one,
    /// created delegations go through the registry's fallback policy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signer_private_key: Option<String>,

    #[serde(default)]
    pub log_format: LogFormat,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub registry: RegistryConfig,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_listen_addr() -> IpAddr {
    IpAddr::V4(Ipv4Addr::LOCALHOST)
}

fn default_rpc_port() -> u16 {
    7090
}

fn default_network() -> String {
    "homestead".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl PortalConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &str) -> Result<Self, PortalAppError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| PortalAppError::Config(format!("{path}: {e}")))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, PortalAppError> {
        toml::from_str(s).map_err(|e| PortalAppError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> String {
        toml::to_string_pretty(self).expect("PortalConfig is always serializable to TOML")
    }

    pub fn rpc_socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.listen_addr, self.rpc_port)
    }
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            rpc_port: default_rpc_port(),
            network: default_network(),
            signer_private_key: None,
            log_format: LogFormat::default(),
            log_level: default_log_level(),
            registry: RegistryConfig::default(),
        }
    }
}
