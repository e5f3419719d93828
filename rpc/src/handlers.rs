//! RPC request handlers.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use portal_registry::StatsSnapshot;
use portal_types::{Address, Caveat, Delegation, DelegationId};
use serde::{Deserialize, Serialize};

use crate::error::RpcError;
use crate::server::AppState;

// ── Create ───────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateDelegationRequest {
    #[serde(default)]
    pub delegator: String,
    #[serde(default)]
    pub delegatee: String,
    #[serde(default)]
    pub caveat: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDelegationResponse {
    pub delegation_id: DelegationId,
    pub delegation: Delegation,
}

pub async fn create_delegation(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateDelegationRequest>,
) -> Result<Json<CreateDelegationResponse>, RpcError> {
    let delegator = Address::new(req.delegator);
    let delegatee = Address::new(req.delegatee);
    if delegator.is_blank() {
        return Err(RpcError::InvalidRequest("delegator address is required".into()));
    }
    if delegatee.is_blank() {
        return Err(RpcError::InvalidRequest("delegatee address is required".into()));
    }

    let delegation = state
        .registry
        .create_delegation(
            delegator,
            delegatee,
            req.caveat.map(Caveat::new),
            state.signer.as_deref(),
        )
        .await
        .map_err(RpcError::registry("Failed to create delegation"))?;

    Ok(Json(CreateDelegationResponse {
        delegation_id: delegation.delegation_id.clone(),
        delegation,
    }))
}

// ── Read ─────────────────────────────────────────────────────────────────

pub async fn get_delegation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Delegation>, RpcError> {
    state
        .registry
        .get_delegation(&DelegationId::new(id.as_str()))
        .map_err(RpcError::registry("Failed to load delegation"))?
        .map(Json)
        .ok_or(RpcError::DelegationNotFound(id))
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyDelegationResponse {
    pub delegation_id: DelegationId,
    pub valid: bool,
}

pub async fn verify_delegation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<VerifyDelegationResponse>, RpcError> {
    let delegation_id = DelegationId::new(id);
    let valid = state
        .registry
        .verify_delegation(&delegation_id, state.signer.as_deref())
        .map_err(RpcError::registry("Failed to verify delegation"))?;
    Ok(Json(VerifyDelegationResponse {
        delegation_id,
        valid,
    }))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AddressDelegationsResponse {
    pub address: Address,
    pub delegations: Vec<Delegation>,
}

pub async fn delegations_for_address(
    State(state): State<Arc<AppState>>,
    Path(address): Path<String>,
) -> Result<Json<AddressDelegationsResponse>, RpcError> {
    let address = Address::new(address);
    let delegations = state
        .registry
        .delegations_for_address(&address)
        .map_err(RpcError::registry("Failed to get delegations"))?;
    Ok(Json(AddressDelegationsResponse {
        address,
        delegations,
    }))
}

// ── Revoke ───────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevokeDelegationResponse {
    pub delegation_id: DelegationId,
    pub revoked: bool,
}

pub async fn revoke_delegation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<RevokeDelegationResponse>, RpcError> {
    let delegation_id = DelegationId::new(id);
    let revoked = state
        .registry
        .revoke_delegation(&delegation_id, state.signer.as_deref())
        .map_err(RpcError::registry("Failed to revoke delegation"))?;
    Ok(Json(RevokeDelegationResponse {
        delegation_id,
        revoked,
    }))
}

// ── Stats ────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub delegation_count: u64,
    #[serde(flatten)]
    pub counters: StatsSnapshot,
}

pub async fn stats(State(state): State<Arc<AppState>>) -> Result<Json<StatsResponse>, RpcError> {
    let delegation_count = state
        .registry
        .len()
        .map_err(RpcError::registry("Failed to read stats"))?;
    Ok(Json(StatsResponse {
        delegation_count,
        counters: state.registry.stats(),
    }))
}
