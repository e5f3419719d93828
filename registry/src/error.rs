use portal_store::StoreError;
use portal_types::PortalError;
use portal_wallet::SignerError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("cannot hash delegation: {0}")]
    Hash(#[from] PortalError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("signing failed: {0}")]
    Signing(#[from] SignerError),

    #[error("no signer available to sign the delegation")]
    NoSigner,

    #[error("could not allocate an unused delegation id after {0} attempts")]
    IdExhausted(usize),
}
