//! Personal-message (EIP-191) signing and signer recovery.

use k256::ecdsa::{RecoveryId, Signature as EcdsaSignature, VerifyingKey};
use portal_types::{Address, PrivateKey, Signature};

use crate::hash::keccak256_multi;
use crate::keys::{address_from_verifying_key, signing_key};
use crate::CryptoError;

const MESSAGE_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n";

/// Hash of `message` as wallets sign it:
/// `keccak256("\x19Ethereum Signed Message:\n" || len(message) || message)`.
pub fn eth_message_hash(message: &[u8]) -> [u8; 32] {
    let len = message.len().to_string();
    keccak256_multi(&[MESSAGE_PREFIX, len.as_bytes(), message])
}

/// Sign a message with a private key, returning a recoverable `r || s || v` signature.
///
/// `v` is 27 or 28, matching what wallets return from `personal_sign`.
pub fn sign_message(message: &[u8], private_key: &PrivateKey) -> Result<Signature, CryptoError> {
    let key = signing_key(&private_key.0)?;
    let digest = eth_message_hash(message);
    let (sig, recovery_id) = key
        .sign_prehash_recoverable(&digest)
        .map_err(|e| CryptoError::Signing(e.to_string()))?;

    let mut out = [0u8; 65];
    out[..64].copy_from_slice(&sig.to_bytes());
    out[64] = 27 + recovery_id.to_byte();
    Ok(Signature(out))
}

/// Recover the address that produced `signature` over `message`.
pub fn recover_address(message: &[u8], signature: &Signature) -> Result<Address, CryptoError> {
    let sig = EcdsaSignature::from_slice(&signature.0[..64])
        .map_err(|e| CryptoError::Recovery(e.to_string()))?;
    let v = match signature.v() {
        v @ 27..=28 => v - 27,
        v => v,
    };
    let recovery_id = RecoveryId::from_byte(v)
        .ok_or_else(|| CryptoError::Recovery(format!("invalid recovery byte {}", signature.v())))?;

    let digest = eth_message_hash(message);
    let key = VerifyingKey::recover_from_prehash(&digest, &sig, recovery_id)
        .map_err(|e| CryptoError::Recovery(e.to_string()))?;
    Ok(address_from_verifying_key(&key))
}

/// Verify that `signature` over `message` was produced by `address`.
///
/// Returns `false` for malformed signatures rather than an error.
pub fn verify_signature(message: &[u8], signature: &Signature, address: &Address) -> bool {
    recover_address(message, signature)
        .map(|recovered| recovered.eq_ignore_case(address))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::{address_from_public, generate_keypair, keypair_from_seed};

    #[test]
    fn sign_and_recover() {
        let kp = generate_keypair();
        let addr = address_from_public(&kp.public).unwrap();
        let sig = sign_message(b"delegate to bob", &kp.private).unwrap();
        assert!(sig.v() == 27 || sig.v() == 28);
        assert_eq!(recover_address(b"delegate to bob", &sig).unwrap(), addr);
        assert!(verify_signature(b"delegate to bob", &sig, &addr));
    }

    #[test]
    fn wrong_message_fails() {
        let kp = generate_keypair();
        let addr = address_from_public(&kp.public).unwrap();
        let sig = sign_message(b"correct message", &kp.private).unwrap();
        assert!(!verify_signature(b"wrong message", &sig, &addr));
    }

    #[test]
    fn wrong_key_fails() {
        let kp1 = generate_keypair();
        let kp2 = generate_keypair();
        let sig = sign_message(b"test", &kp1.private).unwrap();
        let other = address_from_public(&kp2.public).unwrap();
        assert!(!verify_signature(b"test", &sig, &other));
    }

    #[test]
    fn signature_deterministic() {
        let kp = keypair_from_seed(&[99u8; 32]).unwrap();
        let sig1 = sign_message(b"deterministic", &kp.private).unwrap();
        let sig2 = sign_message(b"deterministic", &kp.private).unwrap();
        assert_eq!(sig1, sig2);
    }

    #[test]
    fn garbage_signature_does_not_verify() {
        let kp = generate_keypair();
        let addr = address_from_public(&kp.public).unwrap();
        assert!(!verify_signature(b"test", &Signature([0xFF; 65]), &addr));
        assert!(recover_address(b"test", &Signature([0u8; 65])).is_err());
    }

    fn key_one() -> PrivateKey {
        let mut key = [0u8; 32];
        key[31] = 1;
        PrivateKey(key)
    }

    #[test]
    fn message_hash_matches_wallet_prefixing() {
        // hashMessage("hello")
        assert_eq!(
            hex::encode(eth_message_hash(b"hello")),
            "50b2c43fd39106bafbba0da34fc430e1f91e3c96ea2acee2bc34119f92b37750"
        );
    }

    #[test]
    fn signs_delegation_hash_like_a_wallet() {
        // Wallet(key 1).signMessage(getBytes(delegation hash))
        let hash = crate::delegation_hash(
            &Address::new("0x52908400098527886E0F7030069857D2E4169EE7"),
            &Address::new("0x8617E340B3D01FA5F11F306F4090FD50E238070D"),
            &portal_types::Caveat::new("0xdeadbeef"),
        )
        .unwrap();
        let sig = sign_message(hash.as_bytes(), &key_one()).unwrap();
        assert_eq!(
            sig.to_hex(),
            "0x7cc0a4c644c69b9d4868f24bc42e209fefde46f22d987a826dfb77adf56f2571\
             501b508d92099898bcafe178d46dba2c0a9cf5138373e6252e42ad3ce6b816041c"
        );
        assert_eq!(
            recover_address(hash.as_bytes(), &sig).unwrap().as_str(),
            "0x7e5f4552091a69125d5dfcb7b8c2659029395bdf"
        );
    }

    #[test]
    fn signs_text_like_a_wallet() {
        // Wallet(key 1).signMessage("hello")
        let sig = sign_message(b"hello", &key_one()).unwrap();
        assert_eq!(
            sig.to_hex(),
            "0xe5ddc160e4c8f92de507c7db9b982d4f9b7197bfa421864aeadc586bc96b09ae\
             0ba0c5b131650ae4994cff1839341d00f3735ef5abc62ac8fe2cf50f65208e2a1b"
        );
    }

    #[test]
    fn message_hash_includes_length_prefix() {
        assert_ne!(eth_message_hash(b"ab"), eth_message_hash(b"a"));
        assert_eq!(eth_message_hash(b""), keccak256_multi(&[MESSAGE_PREFIX, b"0"]));
    }
}
