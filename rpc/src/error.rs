//! RPC error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use portal_registry::RegistryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RpcError {
    #[error("delegation not found: {0}")]
    DelegationNotFound(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("{context}: {source}")]
    Registry {
        context: &'static str,
        #[source]
        source: RegistryError,
    },

    #[error("server error: {0}")]
    Server(String),
}

impl RpcError {
    /// Wrap a registry failure with the user-facing action that failed.
    pub fn registry(context: &'static str) -> impl FnOnce(RegistryError) -> Self {
        move |source| Self::Registry { context, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::DelegationNotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::Registry { .. } | Self::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RpcError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}
