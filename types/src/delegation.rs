//! Delegation records and their identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::address::{strip_hex_prefix, Address};
use crate::error::PortalError;
use crate::keys::Signature;

/// Opaque identifier of a stored delegation, e.g. `delegation_k3x9q0a1z`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DelegationId(String);

impl DelegationId {
    /// Prefix carried by every generated identifier.
    pub const PREFIX: &'static str = "delegation_";

    /// Number of random base-36 characters following the prefix.
    pub const SUFFIX_LEN: usize = 9;

    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this identifier has the shape of a generated one.
    ///
    /// Lookups accept any string; this is only a syntactic check.
    pub fn is_well_formed(&self) -> bool {
        match self.0.strip_prefix(Self::PREFIX) {
            Some(suffix) => {
                suffix.len() == Self::SUFFIX_LEN
                    && suffix
                        .bytes()
                        .all(|b| b.is_ascii_digit() || b.is_ascii_lowercase())
            }
            None => false,
        }
    }
}

impl fmt::Display for DelegationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for DelegationId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for DelegationId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Opaque, hex-encoded constraint data attached to a delegation.
///
/// The registry never interprets caveat contents. `0x` is the
/// empty-constraint marker and the default.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Caveat(String);

impl Caveat {
    /// The empty-constraint marker.
    pub const EMPTY: &'static str = "0x";

    /// Wrap a raw caveat string. Blank input becomes the empty marker.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        if raw.trim().is_empty() {
            Self::default()
        } else {
            Self(raw)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode the caveat bytes for packed encoding.
    pub fn to_bytes(&self) -> Result<Vec<u8>, PortalError> {
        hex::decode(strip_hex_prefix(&self.0))
            .map_err(|e| PortalError::InvalidHex(format!("caveat {}: {e}", self.0)))
    }
}

impl Default for Caveat {
    fn default() -> Self {
        Self(Self::EMPTY.to_string())
    }
}

impl fmt::Display for Caveat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Signing scheme tag recorded on a delegation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DelegationType {
    /// Structured-data signing (EIP-712).
    #[default]
    #[serde(rename = "eip712")]
    Eip712,
}

impl DelegationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eip712 => "eip712",
        }
    }
}

/// A permission grant from `delegator` to `delegatee`, constrained by `caveat`.
///
/// Records are immutable once stored; the only mutation is removal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Delegation {
    pub delegation_id: DelegationId,
    pub delegator: Address,
    pub delegatee: Address,
    pub caveat: Caveat,
    #[serde(rename = "type")]
    pub kind: DelegationType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<Signature>,
}

impl Delegation {
    /// Whether `address` is the delegator or the delegatee (exact match).
    pub fn involves(&self, address: &Address) -> bool {
        &self.delegator == address || &self.delegatee == address
    }
}
