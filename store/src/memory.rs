//! Volatile in-memory delegation store.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard};

use portal_types::{Delegation, DelegationId};

use crate::{DelegationStore, StoreError};

struct Entry {
    seq: u64,
    record: Delegation,
}

#[derive(Default)]
struct Inner {
    records: HashMap<DelegationId, Entry>,
    /// Insertion sequence → id, so iteration follows insertion order.
    order: BTreeMap<u64, DelegationId>,
    next_seq: u64,
}

/// An in-memory delegation store that preserves insertion order.
/// Thread-safe for use with tokio's multi-threaded runtime.
#[derive(Default)]
pub struct MemoryDelegationStore {
    inner: Mutex<Inner>,
}

impl MemoryDelegationStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, StoreError> {
        self.inner
            .lock()
            .map_err(|_| StoreError::Backend("delegation map lock poisoned".to_string()))
    }
}

impl DelegationStore for MemoryDelegationStore {
    fn put_delegation(&self, record: &Delegation) -> Result<(), StoreError> {
        let mut inner = self.lock()?;
        if inner.records.contains_key(&record.delegation_id) {
            return Err(StoreError::Duplicate(record.delegation_id.to_string()));
        }
        let seq = inner.next_seq;
        inner.next_seq += 1;
        inner.order.insert(seq, record.delegation_id.clone());
        inner.records.insert(
            record.delegation_id.clone(),
            Entry {
                seq,
                record: record.clone(),
            },
        );
        tracing::trace!(id = %record.delegation_id, seq, "stored delegation");
        Ok(())
    }

    fn get_delegation(&self, id: &DelegationId) -> Result<Option<Delegation>, StoreError> {
        Ok(self.lock()?.records.get(id).map(|e| e.record.clone()))
    }

    fn contains_delegation(&self, id: &DelegationId) -> Result<bool, StoreError> {
        Ok(self.lock()?.records.contains_key(id))
    }

    fn remove_delegation(&self, id: &DelegationId) -> Result<Option<Delegation>, StoreError> {
        let mut inner = self.lock()?;
        match inner.records.remove(id) {
            Some(entry) => {
                inner.order.remove(&entry.seq);
                Ok(Some(entry.record))
            }
            None => Ok(None),
        }
    }

    fn iter_delegations(&self) -> Result<Vec<Delegation>, StoreError> {
        let inner = self.lock()?;
        Ok(inner
            .order
            .values()
            .filter_map(|id| inner.records.get(id))
            .map(|e| e.record.clone())
            .collect())
    }

    fn delegation_count(&self) -> Result<u64, StoreError> {
        Ok(self.lock()?.records.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_types::{Address, Caveat, DelegationType};

    fn record(id: &str, delegator: &str, delegatee: &str) -> Delegation {
        Delegation {
            delegation_id: DelegationId::new(id),
            delegator: Address::new(delegator),
            delegatee: Address::new(delegatee),
            caveat: Caveat::default(),
            kind: DelegationType::Eip712,
            signature: None,
        }
    }

    #[test]
    fn put_get_remove() {
        let store = MemoryDelegationStore::new();
        let d = record("delegation_000000001", "0xA", "0xB");
        store.put_delegation(&d).unwrap();
        assert!(store.contains_delegation(&d.delegation_id).unwrap());
        assert_eq!(store.get_delegation(&d.delegation_id).unwrap(), Some(d.clone()));
        assert_eq!(store.remove_delegation(&d.delegation_id).unwrap(), Some(d.clone()));
        assert!(!store.contains_delegation(&d.delegation_id).unwrap());
        assert_eq!(store.remove_delegation(&d.delegation_id).unwrap(), None);
    }

    #[test]
    fn duplicate_id_rejected() {
        let store = MemoryDelegationStore::new();
        let d = record("delegation_000000001", "0xA", "0xB");
        store.put_delegation(&d).unwrap();
        assert!(matches!(store.put_delegation(&d), Err(StoreError::Duplicate(_))));
        assert_eq!(store.delegation_count().unwrap(), 1);
    }

    #[test]
    fn iteration_follows_insertion_order() {
        let store = MemoryDelegationStore::new();
        for id in ["delegation_zzzzzzzzz", "delegation_000000000", "delegation_mmmmmmmmm"] {
            store.put_delegation(&record(id, "0xA", "0xB")).unwrap();
        }
        store
            .remove_delegation(&DelegationId::new("delegation_000000000"))
            .unwrap();
        store
            .put_delegation(&record("delegation_000000000", "0xA", "0xB"))
            .unwrap();

        let ids: Vec<String> = store
            .iter_delegations()
            .unwrap()
            .into_iter()
            .map(|d| d.delegation_id.to_string())
            .collect();
        assert_eq!(
            ids,
            vec!["delegation_zzzzzzzzz", "delegation_mmmmmmmmm", "delegation_000000000"]
        );
    }
}
