//! Nullable store: in-memory storage that can be switched into a failing state.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use portal_store::{DelegationStore, MemoryDelegationStore, StoreError};
use portal_types::{Delegation, DelegationId};

/// An in-memory delegation store for testing error propagation.
///
/// Behaves like [`MemoryDelegationStore`] until [`NullDelegationStore::set_failing`]
/// is turned on, after which every call returns [`StoreError::Backend`].
/// [`NullDelegationStore::collide_next`] makes inserts report an identifier
/// clash, as if another writer had just claimed it.
#[derive(Default)]
pub struct NullDelegationStore {
    inner: MemoryDelegationStore,
    failing: AtomicBool,
    collisions: AtomicUsize,
}

impl NullDelegationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that fails from the first call.
    pub fn failing() -> Self {
        let store = Self::new();
        store.set_failing(true);
        store
    }

    /// Reject the next `count` inserts with [`StoreError::Duplicate`].
    pub fn collide_next(&self, count: usize) {
        self.collisions.store(count, Ordering::SeqCst);
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.failing.load(Ordering::SeqCst) {
            Err(StoreError::Backend("null store set to fail".to_string()))
        } else {
            Ok(())
        }
    }
}

impl DelegationStore for NullDelegationStore {
    fn put_delegation(&self, record: &Delegation) -> Result<(), StoreError> {
        self.check()?;
        let collided = self
            .collisions
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if collided {
            return Err(StoreError::Duplicate(record.delegation_id.to_string()));
        }
        self.inner.put_delegation(record)
    }

    fn get_delegation(&self, id: &DelegationId) -> Result<Option<Delegation>, StoreError> {
        self.check()?;
        self.inner.get_delegation(id)
    }

    fn contains_delegation(&self, id: &DelegationId) -> Result<bool, StoreError> {
        self.check()?;
        self.inner.contains_delegation(id)
    }

    fn remove_delegation(&self, id: &DelegationId) -> Result<Option<Delegation>, StoreError> {
        self.check()?;
        self.inner.remove_delegation(id)
    }

    fn iter_delegations(&self) -> Result<Vec<Delegation>, StoreError> {
        self.check()?;
        self.inner.iter_delegations()
    }

    fn delegation_count(&self) -> Result<u64, StoreError> {
        self.check()?;
        self.inner.delegation_count()
    }
}
