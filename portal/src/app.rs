//! Wiring from configuration to running components.

use std::future::Future;
use std::sync::Arc;

use portal_registry::DelegationRegistry;
use portal_rpc::{AppState, RpcServer};
use portal_store::MemoryDelegationStore;
use portal_wallet::{LocalWallet, Signer};

use crate::{PortalAppError, PortalConfig, PortalSession};

/// Build the registry described by `config`.
pub fn build_registry(config: &PortalConfig) -> Arc<DelegationRegistry> {
    Arc::new(DelegationRegistry::new(
        MemoryDelegationStore::new(),
        config.registry.clone(),
    ))
}

/// Load the server-side signer, if a private key is configured.
pub fn build_signer(config: &PortalConfig) -> Result<Option<Arc<dyn Signer>>, PortalAppError> {
    let Some(key) = config.signer_private_key.as_deref() else {
        return Ok(None);
    };
    let wallet = LocalWallet::from_private_key_hex(key)?;
    tracing::info!(address = %wallet.address(), "server signer loaded");
    Ok(Some(Arc::new(wallet)))
}

/// Build the HTTP server for `config`.
pub fn build_server(config: &PortalConfig) -> Result<RpcServer, PortalAppError> {
    let state = AppState::new(build_registry(config), build_signer(config)?);
    Ok(RpcServer::new(config.rpc_socket_addr(), Arc::new(state)))
}

/// Serve the HTTP API until `shutdown` resolves.
pub async fn serve(
    config: &PortalConfig,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), PortalAppError> {
    let server = build_server(config)?;
    server.start(shutdown).await?;
    Ok(())
}

/// Drive one delegation through a session: create, verify, revoke, verify.
///
/// Signs with the configured key, or a throwaway wallet when none is set.
/// Returns the status lines the session produced along the way.
pub async fn run_demo(
    config: &PortalConfig,
    delegatee: &str,
    caveat: &str,
) -> Result<Vec<String>, PortalAppError> {
    let registry = build_registry(config);
    let signer: Arc<dyn Signer> = match build_signer(config)? {
        Some(signer) => signer,
        None => Arc::new(LocalWallet::random()),
    };

    let mut session = PortalSession::new(registry.clone());
    session.connect(signer, config.network.clone());
    let mut lines = vec![format!(
        "Connected {} on {}",
        session.display_address().unwrap_or_default(),
        session.network_name().unwrap_or_default()
    )];
    let mut report = |session: &PortalSession| {
        if let Some(status) = session.status() {
            lines.push(status.message().to_string());
        }
    };

    let id = session.create(delegatee, caveat).await?;
    report(&session);
    session.verify(id.as_str())?;
    report(&session);
    let revoked = registry.revoke_delegation(&id, None)?;
    tracing::info!(%id, revoked, "demo delegation revoked");
    session.verify(id.as_str())?;
    report(&session);

    lines.insert(1, format!("Delegation ID: {id}"));
    Ok(lines)
}
