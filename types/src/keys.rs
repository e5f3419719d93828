//! Cryptographic key types for account identity and signing.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::address::strip_hex_prefix;
use crate::error::PortalError;

/// A 33-byte compressed secp256k1 public key (SEC1 encoding).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PublicKey(pub [u8; 33]);

/// A 32-byte secp256k1 private key (secret scalar).
///
/// This type intentionally does not implement `Debug`, `Serialize`, or `Clone`
/// to prevent accidental exposure. Key bytes are zeroized on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey(pub [u8; 32]);

/// A 65-byte recoverable ECDSA signature laid out as `r || s || v`.
///
/// Serialized as a `0x`-prefixed hex string of 130 digits.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Signature(pub [u8; 65]);

/// A secp256k1 key pair (public + private).
///
/// Use `portal_crypto::generate_keypair()` or `portal_crypto::keypair_from_private()`
/// to construct key pairs. This struct is intentionally just data.
pub struct KeyPair {
    pub public: PublicKey,
    pub private: PrivateKey,
}

impl PublicKey {
    pub fn as_bytes(&self) -> &[u8; 33] {
        &self.0
    }
}

impl PrivateKey {
    /// Parse a private key from hex (`0x` prefix optional).
    pub fn from_hex(s: &str) -> Result<Self, PortalError> {
        let mut bytes =
            hex::decode(strip_hex_prefix(s.trim())).map_err(|e| PortalError::InvalidKey(e.to_string()))?;
        let arr: Result<[u8; 32], _> = bytes.as_slice().try_into();
        let len = bytes.len();
        bytes.zeroize();
        arr.map(Self)
            .map_err(|_| PortalError::InvalidKey(format!("expected 32 bytes, got {len}")))
    }
}

impl Signature {
    /// Length of the encoded signature in bytes.
    pub const LEN: usize = 65;

    pub fn as_bytes(&self) -> &[u8; 65] {
        &self.0
    }

    /// The recovery byte (`v`), 27 or 28 for signatures produced by wallets.
    pub fn v(&self) -> u8 {
        self.0[64]
    }

    /// `0x`-prefixed lowercase hex.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Parse a signature from hex (`0x` prefix optional).
    pub fn from_hex(s: &str) -> Result<Self, PortalError> {
        let bytes = hex::decode(strip_hex_prefix(s))
            .map_err(|e| PortalError::InvalidSignature(e.to_string()))?;
        let arr: [u8; 65] = bytes.as_slice().try_into().map_err(|_| {
            PortalError::InvalidSignature(format!("expected {} bytes, got {}", Self::LEN, bytes.len()))
        })?;
        Ok(Self(arr))
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({}..)", hex::encode(&self.0[..4]))
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Serialize for Signature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Signature {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Signature::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signature_hex_has_wallet_length() {
        let sig = Signature([7u8; 65]);
        assert_eq!(sig.to_hex().len(), 132);
        assert_eq!(Signature::from_hex(&sig.to_hex()).unwrap(), sig);
    }

    #[test]
    fn signature_rejects_wrong_length() {
        assert!(Signature::from_hex("0x1234").is_err());
    }

    #[test]
    fn private_key_from_hex() {
        let key = PrivateKey::from_hex(&format!("0x{}", "11".repeat(32))).unwrap();
        assert_eq!(key.0, [0x11; 32]);
        assert!(PrivateKey::from_hex("0x11").is_err());
    }
}
