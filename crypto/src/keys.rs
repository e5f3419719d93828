//! secp256k1 key generation and address derivation.

use k256::ecdsa::{SigningKey, VerifyingKey};
use k256::elliptic_curve::sec1::ToEncodedPoint;
use portal_types::{Address, KeyPair, PrivateKey, PublicKey};
use rand::Rng;

use crate::hash::keccak256;
use crate::CryptoError;

/// Generate a new key pair from the thread-local CSPRNG.
pub fn generate_keypair() -> KeyPair {
    let mut rng = rand::rng();
    loop {
        let mut seed = [0u8; 32];
        rng.fill(&mut seed);
        // Rejects zero and values above the curve order; retry is astronomically rare.
        if let Ok(kp) = keypair_from_seed(&seed) {
            return kp;
        }
    }
}

/// Derive a key pair from a 32-byte seed used directly as the secret scalar.
pub fn keypair_from_seed(seed: &[u8; 32]) -> Result<KeyPair, CryptoError> {
    let signing_key = signing_key(seed)?;
    Ok(KeyPair {
        public: encode_public(signing_key.verifying_key()),
        private: PrivateKey(*seed),
    })
}

/// Derive the public key from a private key.
pub fn public_from_private(private: &PrivateKey) -> Result<PublicKey, CryptoError> {
    let signing_key = signing_key(&private.0)?;
    Ok(encode_public(signing_key.verifying_key()))
}

/// Reconstruct a full key pair from a private key.
pub fn keypair_from_private(private: PrivateKey) -> Result<KeyPair, CryptoError> {
    let public = public_from_private(&private)?;
    Ok(KeyPair { public, private })
}

/// Derive the account address of a public key.
///
/// `address = keccak256(uncompressed_point[1..])[12..]`
pub fn address_from_public(public: &PublicKey) -> Result<Address, CryptoError> {
    let verifying_key = VerifyingKey::from_sec1_bytes(&public.0)
        .map_err(|e| CryptoError::InvalidKey(e.to_string()))?;
    Ok(address_from_verifying_key(&verifying_key))
}

pub(crate) fn address_from_verifying_key(key: &VerifyingKey) -> Address {
    let point = key.to_encoded_point(false);
    let digest = keccak256(&point.as_bytes()[1..]);
    let mut bytes = [0u8; 20];
    bytes.copy_from_slice(&digest[12..]);
    Address::from_bytes(&bytes)
}

pub(crate) fn signing_key(secret: &[u8; 32]) -> Result<SigningKey, CryptoError> {
    SigningKey::from_bytes((&secret[..]).into()).map_err(|e| CryptoError::InvalidKey(e.to_string()))
}

fn encode_public(key: &VerifyingKey) -> PublicKey {
    let point = key.to_encoded_point(true);
    let mut bytes = [0u8; 33];
    bytes.copy_from_slice(point.as_bytes());
    PublicKey(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_produces_valid_keypair() {
        let kp = generate_keypair();
        assert_ne!(kp.private.0, [0u8; 32]);
        assert!(kp.public.0[0] == 0x02 || kp.public.0[0] == 0x03);
    }

    #[test]
    fn known_address_for_private_key_one() {
        let mut seed = [0u8; 32];
        seed[31] = 1;
        let kp = keypair_from_seed(&seed).unwrap();
        let addr = address_from_public(&kp.public).unwrap();
        assert_eq!(addr.as_str(), "0x7e5f4552091a69125d5dfcb7b8c2659029395bdf");
    }

    #[test]
    fn zero_seed_rejected() {
        assert!(keypair_from_seed(&[0u8; 32]).is_err());
    }

    #[test]
    fn keypair_from_seed_deterministic() {
        let kp1 = keypair_from_seed(&[42u8; 32]).unwrap();
        let kp2 = keypair_from_seed(&[42u8; 32]).unwrap();
        assert_eq!(kp1.public, kp2.public);
    }

    #[test]
    fn keypair_from_private_roundtrip() {
        let kp1 = generate_keypair();
        let kp2 = keypair_from_private(PrivateKey(kp1.private.0)).unwrap();
        assert_eq!(kp1.public, kp2.public);
    }
}
