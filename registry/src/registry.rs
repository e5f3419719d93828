//! The delegation registry.

use portal_store::{DelegationStore, MemoryDelegationStore, StoreError};
use portal_types::{Address, Caveat, Delegation, DelegationId, DelegationType, Signature};
use portal_wallet::{Signer, SignerError};

use crate::config::{RegistryConfig, SignatureFallback, VerificationMode};
use crate::error::RegistryError;
use crate::stats::{RegistryStats, StatsSnapshot};

/// Attempts at storing a delegation under a freshly drawn identifier.
const MAX_ID_ATTEMPTS: usize = 8;

/// Creates, verifies, lists and revokes delegations over a [`DelegationStore`].
///
/// Each registry is an independent instance; nothing is shared between two
/// registries. All methods take `&self`, so a registry can sit behind an
/// `Arc` and serve concurrent callers. A record is written to the store only
/// after its signature has been obtained, so a create suspended on the
/// signer is never visible to other callers.
pub struct DelegationRegistry<S = MemoryDelegationStore> {
    store: S,
    config: RegistryConfig,
    stats: RegistryStats,
}

impl DelegationRegistry<MemoryDelegationStore> {
    /// A registry backed by a fresh in-memory store with default settings.
    pub fn in_memory() -> Self {
        Self::new(MemoryDelegationStore::new(), RegistryConfig::default())
    }
}

impl Default for DelegationRegistry<MemoryDelegationStore> {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl<S: DelegationStore> DelegationRegistry<S> {
    pub fn new(store: S, config: RegistryConfig) -> Self {
        Self {
            store,
            config,
            stats: RegistryStats::default(),
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Create and store a delegation from `delegator` to `delegatee`.
    ///
    /// The addresses are not validated up front, but both must decode to 20
    /// bytes (and the caveat to hex) for the canonical hash to be computed;
    /// otherwise [`RegistryError::Hash`] is returned and nothing is stored.
    /// `caveat` defaults to the empty-constraint marker `0x`.
    ///
    /// When `signer` is absent or fails, the configured
    /// [`SignatureFallback`] decides the outcome.
    pub async fn create_delegation(
        &self,
        delegator: Address,
        delegatee: Address,
        caveat: Option<Caveat>,
        signer: Option<&dyn Signer>,
    ) -> Result<Delegation, RegistryError> {
        let caveat = caveat.unwrap_or_default();
        let hash = portal_crypto::delegation_hash(&delegator, &delegatee, &caveat)?;

        let signature = match signer {
            Some(signer) => match signer.sign_message(hash.as_bytes()).await {
                Ok(sig) => Some(sig),
                Err(e) => self.signature_fallback(Some(e))?,
            },
            None => self.signature_fallback(None)?,
        };

        let mut delegation = Delegation {
            delegation_id: portal_crypto::generate_delegation_id(),
            delegator,
            delegatee,
            caveat,
            kind: DelegationType::Eip712,
            signature,
        };
        self.insert_with_fresh_id(&mut delegation)?;
        self.stats.record_created();

        tracing::info!(
            id = %delegation.delegation_id,
            delegator = %delegation.delegator,
            delegatee = %delegation.delegatee,
            hash = %hash,
            signed = delegation.signature.is_some(),
            "created delegation"
        );
        Ok(delegation)
    }

    /// Whether `id` names a valid delegation.
    ///
    /// Under [`VerificationMode::Existence`] this is a presence check only and
    /// says nothing about the stored signature. Under
    /// [`VerificationMode::Signature`] the stored signature must also recover
    /// to the delegator. `signer` is accepted for interface symmetry and is
    /// only recorded in the log.
    pub fn verify_delegation(
        &self,
        id: &DelegationId,
        signer: Option<&dyn Signer>,
    ) -> Result<bool, RegistryError> {
        self.stats.record_verification();
        let valid = match self.config.verification_mode {
            VerificationMode::Existence => self.store.contains_delegation(id)?,
            VerificationMode::Signature => match self.store.get_delegation(id)? {
                Some(record) => signature_matches(&record)?,
                None => false,
            },
        };
        tracing::debug!(
            %id,
            valid,
            mode = ?self.config.verification_mode,
            caller = ?signer.map(|s| s.address()),
            "verified delegation"
        );
        Ok(valid)
    }

    /// Every stored delegation where `address` is the delegator or the
    /// delegatee, in insertion order. Matching is exact string equality.
    pub fn delegations_for_address(&self, address: &Address) -> Result<Vec<Delegation>, RegistryError> {
        Ok(self
            .store
            .iter_delegations()?
            .into_iter()
            .filter(|d| d.involves(address))
            .collect())
    }

    /// Delete the delegation `id`. Returns whether a record was removed.
    ///
    /// No authorization check is made: any caller knowing an identifier can
    /// revoke it. Revoking an absent identifier returns `false`.
    pub fn revoke_delegation(
        &self,
        id: &DelegationId,
        signer: Option<&dyn Signer>,
    ) -> Result<bool, RegistryError> {
        let removed = self.store.remove_delegation(id)?.is_some();
        if removed {
            self.stats.record_revoked();
            tracing::info!(
                %id,
                revoked_by = ?signer.map(|s| s.address()),
                "revoked delegation"
            );
        } else {
            tracing::debug!(%id, "revoke of unknown delegation");
        }
        Ok(removed)
    }

    pub fn get_delegation(&self, id: &DelegationId) -> Result<Option<Delegation>, RegistryError> {
        Ok(self.store.get_delegation(id)?)
    }

    pub fn len(&self) -> Result<u64, RegistryError> {
        Ok(self.store.delegation_count()?)
    }

    pub fn is_empty(&self) -> Result<bool, RegistryError> {
        Ok(self.len()? == 0)
    }

    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    fn signature_fallback(
        &self,
        error: Option<SignerError>,
    ) -> Result<Option<Signature>, RegistryError> {
        let reason = error
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_else(|| "no signer".to_string());

        match self.config.signature_fallback {
            SignatureFallback::Placeholder => {
                self.stats.record_fallback();
                tracing::warn!(%reason, "signing unavailable, storing placeholder signature");
                Ok(Some(portal_crypto::placeholder_signature()))
            }
            SignatureFallback::Unsigned => {
                self.stats.record_fallback();
                tracing::warn!(%reason, "signing unavailable, storing unsigned delegation");
                Ok(None)
            }
            SignatureFallback::Reject => match error {
                Some(e) => Err(RegistryError::Signing(e)),
                None => Err(RegistryError::NoSigner),
            },
        }
    }

    /// Insert `delegation`, drawing a new identifier whenever the store
    /// already holds the current one. The store's duplicate check is the
    /// only collision test, so concurrent creates cannot race past it.
    fn insert_with_fresh_id(&self, delegation: &mut Delegation) -> Result<(), RegistryError> {
        for attempt in 1..=MAX_ID_ATTEMPTS {
            match self.store.put_delegation(delegation) {
                Ok(()) => return Ok(()),
                Err(StoreError::Duplicate(_)) if attempt < MAX_ID_ATTEMPTS => {
                    tracing::debug!(id = %delegation.delegation_id, "delegation id collision, drawing again");
                    delegation.delegation_id = portal_crypto::generate_delegation_id();
                }
                Err(StoreError::Duplicate(_)) => break,
                Err(e) => return Err(e.into()),
            }
        }
        Err(RegistryError::IdExhausted(MAX_ID_ATTEMPTS))
    }
}

fn signature_matches(record: &Delegation) -> Result<bool, RegistryError> {
    let Some(signature) = &record.signature else {
        return Ok(false);
    };
    let hash = portal_crypto::delegation_hash(&record.delegator, &record.delegatee, &record.caveat)?;
    Ok(portal_crypto::verify_signature(
        hash.as_bytes(),
        signature,
        &record.delegator,
    ))
}
