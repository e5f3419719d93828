//! Storage for delegation records.
//!
//! Backends implement [`DelegationStore`]; the registry depends only on the
//! trait. The portal ships a single volatile backend, [`MemoryDelegationStore`],
//! whose contents live exactly as long as the value itself.

pub mod delegation;
pub mod error;
pub mod memory;

pub use delegation::DelegationStore;
pub use error::StoreError;
pub use memory::MemoryDelegationStore;
