//! Axum-based RPC server.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use portal_registry::DelegationRegistry;
use portal_wallet::Signer;
use tracing::info;

use crate::error::RpcError;
use crate::handlers;

/// State shared by every request handler.
pub struct AppState {
    pub registry: Arc<DelegationRegistry>,
    /// Identity used to sign delegations created through the API. When
    /// absent, the registry's signature fallback policy applies.
    pub signer: Option<Arc<dyn Signer>>,
}

impl AppState {
    pub fn new(registry: Arc<DelegationRegistry>, signer: Option<Arc<dyn Signer>>) -> Self {
        Self { registry, signer }
    }
}

/// Build the API router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/delegations", post(handlers::create_delegation))
        .route(
            "/delegations/:id",
            get(handlers::get_delegation).delete(handlers::revoke_delegation),
        )
        .route("/delegations/:id/verify", get(handlers::verify_delegation))
        .route(
            "/addresses/:address/delegations",
            get(handlers::delegations_for_address),
        )
        .route("/stats", get(handlers::stats))
        .with_state(state)
}

/// The HTTP server, configured with a bind address and shared state.
pub struct RpcServer {
    pub addr: SocketAddr,
    pub state: Arc<AppState>,
}

impl RpcServer {
    pub fn new(addr: SocketAddr, state: Arc<AppState>) -> Self {
        Self { addr, state }
    }

    /// Start serving. Runs until `shutdown` resolves.
    pub async fn start(
        &self,
        shutdown: impl std::future::Future<Output = ()> + Send + 'static,
    ) -> Result<(), RpcError> {
        let app = router(self.state.clone());
        let listener = tokio::net::TcpListener::bind(self.addr)
            .await
            .map_err(|e| RpcError::Server(format!("bind {}: {e}", self.addr)))?;
        info!("RPC server listening on {}", self.addr);
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| RpcError::Server(e.to_string()))
    }
}
