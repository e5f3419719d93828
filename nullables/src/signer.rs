//! Nullable signer: deterministic keys, scripted failures.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use portal_types::{Address, PrivateKey, Signature};
use portal_wallet::{Signer, SignerError};

/// A deterministic signer for testing.
///
/// Signs with a key derived from a one-byte seed, so addresses and
/// signatures are stable across runs. Queued failures are returned (in
/// order) before signing resumes.
pub struct NullSigner {
    address: Address,
    key: Option<PrivateKey>,
    failures: Mutex<VecDeque<SignerError>>,
    calls: AtomicUsize,
}

impl NullSigner {
    /// A signer whose private key is `[seed; 32]`.
    ///
    /// # Panics
    /// Panics if `seed` is zero (not a valid secp256k1 scalar).
    pub fn new(seed: u8) -> Self {
        let kp = portal_crypto::keypair_from_seed(&[seed; 32]).expect("non-zero seed");
        let address = portal_crypto::address_from_public(&kp.public).expect("valid public key");
        Self {
            address,
            key: Some(kp.private),
            failures: Mutex::new(VecDeque::new()),
            calls: AtomicUsize::new(0),
        }
    }

    /// A signer for `address` that rejects every request, like a user
    /// dismissing every wallet prompt.
    pub fn rejecting(address: impl Into<Address>) -> Self {
        Self {
            address: address.into(),
            key: None,
            failures: Mutex::new(VecDeque::new()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Make the next signing request fail with `error`.
    pub fn fail_next(&self, error: SignerError) {
        self.failures.lock().unwrap().push_back(error);
    }

    /// Number of signing requests received.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Signer for NullSigner {
    fn address(&self) -> Address {
        self.address.clone()
    }

    async fn sign_message(&self, message: &[u8]) -> Result<Signature, SignerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.failures.lock().unwrap().pop_front() {
            return Err(err);
        }
        match &self.key {
            Some(key) => portal_crypto::sign_message(message, key)
                .map_err(|e| SignerError::Backend(e.to_string())),
            None => Err(SignerError::Rejected),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn deterministic_address_and_signature() {
        let a = NullSigner::new(7);
        let b = NullSigner::new(7);
        assert_eq!(a.address(), b.address());
        assert_eq!(
            a.sign_message(b"x").await.unwrap(),
            b.sign_message(b"x").await.unwrap()
        );
    }

    #[tokio::test]
    async fn queued_failures_come_first() {
        let signer = NullSigner::new(3);
        signer.fail_next(SignerError::Locked);
        assert_eq!(signer.sign_message(b"x").await, Err(SignerError::Locked));
        assert!(signer.sign_message(b"x").await.is_ok());
        assert_eq!(signer.call_count(), 2);
    }

    #[tokio::test]
    async fn rejecting_signer_always_fails() {
        let signer = NullSigner::rejecting("0xAAA");
        assert_eq!(signer.sign_message(b"x").await, Err(SignerError::Rejected));
        assert_eq!(signer.address().as_str(), "0xAAA");
    }
}
