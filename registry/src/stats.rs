//! Operation counters.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Lock-free counters updated by the registry.
#[derive(Debug, Default)]
pub struct RegistryStats {
    created: AtomicU64,
    revoked: AtomicU64,
    verifications: AtomicU64,
    signing_fallbacks: AtomicU64,
}

/// Point-in-time copy of [`RegistryStats`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSnapshot {
    pub created: u64,
    pub revoked: u64,
    pub verifications: u64,
    pub signing_fallbacks: u64,
}

impl RegistryStats {
    pub(crate) fn record_created(&self) {
        self.created.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_revoked(&self) {
        self.revoked.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_verification(&self) {
        self.verifications.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_fallback(&self) {
        self.signing_fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            created: self.created.load(Ordering::Relaxed),
            revoked: self.revoked.load(Ordering::Relaxed),
            verifications: self.verifications.load(Ordering::Relaxed),
            signing_fallbacks: self.signing_fallbacks.load(Ordering::Relaxed),
        }
    }
}
