use portal_types::{Delegation, DelegationId};

use crate::StoreError;

/// Keyed storage of delegation records.
///
/// Records are keyed by `delegation_id` only; there is no secondary index,
/// so address lookups go through [`DelegationStore::iter_delegations`].
pub trait DelegationStore: Send + Sync {
    /// Insert a new record. Fails with [`StoreError::Duplicate`] if the id is taken.
    fn put_delegation(&self, record: &Delegation) -> Result<(), StoreError>;
    fn get_delegation(&self, id: &DelegationId) -> Result<Option<Delegation>, StoreError>;
    fn contains_delegation(&self, id: &DelegationId) -> Result<bool, StoreError>;
    /// Remove a record, returning it if it was present.
    fn remove_delegation(&self, id: &DelegationId) -> Result<Option<Delegation>, StoreError>;
    /// All records in insertion order.
    fn iter_delegations(&self) -> Result<Vec<Delegation>, StoreError>;
    fn delegation_count(&self) -> Result<u64, StoreError>;
}
