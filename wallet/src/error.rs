use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SignerError {
    #[error("user rejected the signature request")]
    Rejected,

    #[error("wallet is locked")]
    Locked,

    #[error("signer unavailable: {0}")]
    Unavailable(String),

    #[error("key error: {0}")]
    Key(String),

    #[error("signing backend error: {0}")]
    Backend(String),
}
