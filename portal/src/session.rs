//! Interactive portal session.
//!
//! Tracks the connected wallet, the outcome of the last action and the most
//! recently created delegation, and turns registry results into the status
//! messages shown to the user.

use std::sync::Arc;

use portal_registry::DelegationRegistry;
use portal_types::{Address, Caveat, DelegationId};
use portal_utils::format_address;
use portal_wallet::Signer;

use crate::SessionError;

const APP_TITLE: &str = "MetaMask Delegation Portal";

/// Outcome of the last session action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Success(String),
    Error(String),
}

impl Status {
    pub fn message(&self) -> &str {
        match self {
            Self::Success(m) | Self::Error(m) => m,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

struct Connection {
    signer: Arc<dyn Signer>,
    network: String,
}

pub struct PortalSession {
    registry: Arc<DelegationRegistry>,
    connection: Option<Connection>,
    status: Option<Status>,
    last_delegation_id: Option<DelegationId>,
    last_verification: Option<bool>,
}

impl PortalSession {
    pub fn new(registry: Arc<DelegationRegistry>) -> Self {
        Self {
            registry,
            connection: None,
            status: None,
            last_delegation_id: None,
            last_verification: None,
        }
    }

    // ── Connection ─────────────────────────────────────────────────────

    /// Connect `signer` on `network` (the provider's raw network name).
    pub fn connect(&mut self, signer: Arc<dyn Signer>, network: impl Into<String>) {
        let was_connected = self.is_connected();
        let network = network.into();
        tracing::info!(address = %signer.address(), %network, "wallet connected");
        self.connection = Some(Connection { signer, network });
        if !was_connected {
            self.reset();
        }
    }

    pub fn disconnect(&mut self) {
        if self.connection.take().is_some() {
            tracing::info!("wallet disconnected");
            self.reset();
        }
    }

    /// The wallet reported a different active account. `None` means it has
    /// no accounts left, which disconnects the session.
    ///
    /// Switching between accounts keeps the session state; only a change in
    /// connectedness clears it.
    pub fn switch_account(&mut self, signer: Option<Arc<dyn Signer>>) {
        match signer {
            Some(signer) => match self.connection.as_mut() {
                Some(conn) => {
                    tracing::info!(address = %signer.address(), "account switched");
                    conn.signer = signer;
                }
                None => self.connect(signer, String::new()),
            },
            None => self.disconnect(),
        }
    }

    fn reset(&mut self) {
        self.status = None;
        self.last_delegation_id = None;
        self.last_verification = None;
    }

    pub fn is_connected(&self) -> bool {
        self.connection.is_some()
    }

    pub fn address(&self) -> Option<Address> {
        self.connection.as_ref().map(|c| c.signer.address())
    }

    /// The connected address shortened for display.
    pub fn display_address(&self) -> Option<String> {
        self.address().map(|a| format_address(a.as_str()))
    }

    pub fn network_name(&self) -> Option<String> {
        self.connection
            .as_ref()
            .map(|c| network_display_name(&c.network))
    }

    // ── Actions ────────────────────────────────────────────────────────

    /// Create a delegation from the connected address to `delegatee`.
    ///
    /// A blank `caveat` means no constraint.
    pub async fn create(&mut self, delegatee: &str, caveat: &str) -> Result<DelegationId, SessionError> {
        let signer = match &self.connection {
            Some(conn) => conn.signer.clone(),
            None => return Err(self.fail(SessionError::NotConnected)),
        };
        if delegatee.is_empty() {
            return Err(self.fail(SessionError::MissingDelegatee));
        }
        self.status = None;

        let result = self
            .registry
            .create_delegation(
                signer.address(),
                Address::new(delegatee),
                Some(Caveat::new(caveat)),
                Some(signer.as_ref()),
            )
            .await;

        match result {
            Ok(delegation) => {
                let id = delegation.delegation_id;
                self.last_delegation_id = Some(id.clone());
                self.status = Some(Status::Success("Delegation created successfully!".into()));
                Ok(id)
            }
            Err(e) => Err(self.fail(SessionError::Create(e))),
        }
    }

    /// Check whether `delegation_id` names a valid delegation.
    pub fn verify(&mut self, delegation_id: &str) -> Result<bool, SessionError> {
        let signer = match &self.connection {
            Some(conn) => conn.signer.clone(),
            None => return Err(self.fail(SessionError::NotConnected)),
        };
        if delegation_id.is_empty() {
            return Err(self.fail(SessionError::MissingDelegationId));
        }
        self.status = None;
        self.last_verification = None;

        match self
            .registry
            .verify_delegation(&DelegationId::new(delegation_id), Some(signer.as_ref()))
        {
            Ok(valid) => {
                self.last_verification = Some(valid);
                let message = if valid {
                    "Delegation is valid!"
                } else {
                    "Delegation is invalid!"
                };
                self.status = Some(Status::Success(message.into()));
                Ok(valid)
            }
            Err(e) => Err(self.fail(SessionError::Verify(e))),
        }
    }

    fn fail(&mut self, error: SessionError) -> SessionError {
        tracing::warn!(%error, "session action failed");
        self.status = Some(Status::Error(error.to_string()));
        error
    }

    // ── Accessors ──────────────────────────────────────────────────────

    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    pub fn last_delegation_id(&self) -> Option<&DelegationId> {
        self.last_delegation_id.as_ref()
    }

    pub fn last_verification(&self) -> Option<bool> {
        self.last_verification
    }

    /// Window title naming the last created delegation, if any.
    pub fn title(&self) -> String {
        match &self.last_delegation_id {
            Some(id) => {
                let short: String = id.as_str().chars().take(8).collect();
                format!("Delegation {short} | {APP_TITLE}")
            }
            None => APP_TITLE.to_string(),
        }
    }
}

/// Human-readable name for a provider network name.
pub fn network_display_name(network: &str) -> String {
    match network {
        "homestead" | "mainnet" => "Ethereum Mainnet".to_string(),
        other => other.to_string(),
    }
}
