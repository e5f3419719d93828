//! Account address type (`0x`-prefixed, 20 bytes of hex).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::PortalError;

/// An account address as supplied by a caller.
///
/// The raw string is kept verbatim: addresses are not validated when a
/// delegation is created, only when their packed binary form is needed
/// (see [`Address::to_bytes`]).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    /// The standard prefix for hex-encoded addresses.
    pub const PREFIX: &'static str = "0x";

    /// Length of an address in bytes.
    pub const LEN: usize = 20;

    /// Create an address from a raw string without validation.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Build the canonical lowercase form from raw address bytes.
    pub fn from_bytes(bytes: &[u8; 20]) -> Self {
        Self(format!("{}{}", Self::PREFIX, hex::encode(bytes)))
    }

    /// Return the raw address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode the address into its 20-byte binary form.
    pub fn to_bytes(&self) -> Result<[u8; 20], PortalError> {
        let digits = strip_hex_prefix(&self.0);
        let decoded =
            hex::decode(digits).map_err(|e| PortalError::InvalidAddress(format!("{}: {e}", self.0)))?;
        decoded.try_into().map_err(|v: Vec<u8>| {
            PortalError::InvalidAddress(format!(
                "{}: expected {} bytes, got {}",
                self.0,
                Self::LEN,
                v.len()
            ))
        })
    }

    /// Validate that this address is well-formed.
    pub fn is_valid(&self) -> bool {
        self.to_bytes().is_ok()
    }

    /// Compare two addresses ignoring hex letter case.
    pub fn eq_ignore_case(&self, other: &Address) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }

    /// Whether the address string is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Address {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for Address {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Strip an optional `0x` / `0X` prefix.
pub(crate) fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_checksummed_address() {
        let addr = Address::new("0x52908400098527886E0F7030069857D2E4169EE7");
        let bytes = addr.to_bytes().unwrap();
        assert_eq!(bytes[0], 0x52);
        assert_eq!(bytes[19], 0xe7);
    }

    #[test]
    fn rejects_short_address() {
        let addr = Address::new("0xAAA");
        assert!(matches!(addr.to_bytes(), Err(PortalError::InvalidAddress(_))));
        assert!(!addr.is_valid());
    }

    #[test]
    fn rejects_non_hex() {
        let addr = Address::new("0xzz908400098527886e0f7030069857d2e4169ee7");
        assert!(addr.to_bytes().is_err());
    }

    #[test]
    fn from_bytes_is_lowercase() {
        let addr = Address::from_bytes(&[0xAB; 20]);
        assert_eq!(addr.as_str(), format!("0x{}", "ab".repeat(20)));
        assert!(addr.is_valid());
    }

    #[test]
    fn case_insensitive_compare() {
        let a = Address::new("0xABCDEF0000000000000000000000000000000001");
        let b = Address::new("0xabcdef0000000000000000000000000000000001");
        assert_ne!(a, b);
        assert!(a.eq_ignore_case(&b));
    }
}
