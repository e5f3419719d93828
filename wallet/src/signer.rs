use async_trait::async_trait;
use portal_types::{Address, Signature};

use crate::SignerError;

/// An identity able to sign arbitrary bytes.
///
/// `sign_message` follows personal-message semantics: the implementation
/// applies the `"\x19Ethereum Signed Message:\n"` prefix before hashing, so
/// the returned signature recovers to [`Signer::address`] via
/// `portal_crypto::recover_address(message, &signature)`.
///
/// Signing may suspend (e.g. waiting for a user confirmation) and has no
/// timeout; callers that need one must impose it themselves.
#[async_trait]
pub trait Signer: Send + Sync {
    /// Address of the active identity.
    fn address(&self) -> Address;

    /// Sign `message` with the active identity.
    async fn sign_message(&self, message: &[u8]) -> Result<Signature, SignerError>;
}
