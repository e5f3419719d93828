//! In-process secp256k1 wallet.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use portal_types::{Address, KeyPair, PrivateKey, Signature};

use crate::{Signer, SignerError};

/// A wallet holding its private key in memory.
///
/// The key is zeroized on drop. A locked wallet refuses to sign.
pub struct LocalWallet {
    keypair: KeyPair,
    address: Address,
    locked: AtomicBool,
}

impl LocalWallet {
    /// Build a wallet from an existing private key.
    pub fn from_private_key(private: PrivateKey) -> Result<Self, SignerError> {
        let keypair =
            portal_crypto::keypair_from_private(private).map_err(|e| SignerError::Key(e.to_string()))?;
        Self::from_keypair(keypair)
    }

    /// Build a wallet from a hex-encoded private key (`0x` prefix optional).
    pub fn from_private_key_hex(hex: &str) -> Result<Self, SignerError> {
        let private = PrivateKey::from_hex(hex).map_err(|e| SignerError::Key(e.to_string()))?;
        Self::from_private_key(private)
    }

    /// Generate a wallet with a fresh random key.
    pub fn random() -> Self {
        Self::from_keypair(portal_crypto::generate_keypair())
            .expect("generated key pair always has a valid public key")
    }

    fn from_keypair(keypair: KeyPair) -> Result<Self, SignerError> {
        let address = portal_crypto::address_from_public(&keypair.public)
            .map_err(|e| SignerError::Key(e.to_string()))?;
        tracing::debug!(%address, "loaded local wallet");
        Ok(Self {
            keypair,
            address,
            locked: AtomicBool::new(false),
        })
    }

    pub fn lock(&self) {
        self.locked.store(true, Ordering::SeqCst);
    }

    pub fn unlock(&self) {
        self.locked.store(false, Ordering::SeqCst);
    }

    pub fn is_locked(&self) -> bool {
        self.locked.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Signer for LocalWallet {
    fn address(&self) -> Address {
        self.address.clone()
    }

    async fn sign_message(&self, message: &[u8]) -> Result<Signature, SignerError> {
        if self.is_locked() {
            return Err(SignerError::Locked);
        }
        portal_crypto::sign_message(message, &self.keypair.private)
            .map_err(|e| SignerError::Backend(e.to_string()))
    }
}
