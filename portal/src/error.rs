use thiserror::Error;

#[derive(Debug, Error)]
pub enum PortalAppError {
    #[error("config error: {0}")]
    Config(String),

    #[error("registry error: {0}")]
    Registry(#[from] portal_registry::RegistryError),

    #[error("signer error: {0}")]
    Signer(#[from] portal_wallet::SignerError),

    #[error("RPC server error: {0}")]
    Rpc(#[from] portal_rpc::RpcError),

    #[error("{0}")]
    Session(#[from] SessionError),
}

/// Failures surfaced to the person driving a [`crate::PortalSession`].
///
/// The `Display` text is the status message shown to them.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Please connect your wallet first")]
    NotConnected,

    #[error("Please enter a delegatee address")]
    MissingDelegatee,

    #[error("Please enter a delegation ID")]
    MissingDelegationId,

    #[error("Failed to create delegation: {0}")]
    Create(#[source] portal_registry::RegistryError),

    #[error("Failed to verify delegation: {0}")]
    Verify(#[source] portal_registry::RegistryError),
}
