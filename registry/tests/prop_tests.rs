use std::collections::HashSet;

use proptest::prelude::*;

use portal_registry::DelegationRegistry;
use portal_types::{Address, Caveat, DelegationId};

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime")
}

fn addr(byte: u8) -> Address {
    Address::from_bytes(&[byte; 20])
}

/// Identifiers are pairwise distinct across many creates.
///
/// Probabilistic: ids are drawn from 36^9 values, and the registry redraws
/// on a collision with a live record.
#[test]
fn ids_unique_over_many_creates() {
    let rt = runtime();
    let registry = DelegationRegistry::in_memory();
    let mut ids = HashSet::new();
    rt.block_on(async {
        for i in 0..5_000u32 {
            let d = registry
                .create_delegation(addr((i % 251) as u8), addr(0xEE), None, None)
                .await
                .unwrap();
            assert!(ids.insert(d.delegation_id), "duplicate id on create #{i}");
        }
    });
    assert_eq!(registry.len().unwrap(), 5_000);
}

/// create(0xAAA…, 0xBBB…, "0x") → verify true → revoke true → verify false.
#[test]
fn create_verify_revoke_scenario() {
    let rt = runtime();
    let registry = DelegationRegistry::in_memory();
    let delegator = Address::new(format!("0x{}", "A".repeat(40)));
    let delegatee = Address::new(format!("0x{}", "B".repeat(40)));

    let d = rt
        .block_on(registry.create_delegation(delegator, delegatee, Some(Caveat::new("0x")), None))
        .unwrap();
    let id = d.delegation_id.clone();
    assert!(id.as_str().starts_with(DelegationId::PREFIX));
    assert_eq!(id.as_str().len(), "delegation_xxxxxxxxx".len());

    assert!(registry.verify_delegation(&id, None).unwrap());
    assert!(registry.revoke_delegation(&id, None).unwrap());
    assert!(!registry.verify_delegation(&id, None).unwrap());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// A created delegation verifies immediately, and stops verifying once revoked.
    #[test]
    fn round_trip_then_revoke(
        a in prop::array::uniform20(0u8..),
        b in prop::array::uniform20(0u8..),
        caveat in prop::collection::vec(0u8.., 0..32),
    ) {
        let rt = runtime();
        let registry = DelegationRegistry::in_memory();
        let caveat = Caveat::new(format!("0x{}", caveat.iter().map(|x| format!("{x:02x}")).collect::<String>()));
        let d = rt
            .block_on(registry.create_delegation(
                Address::from_bytes(&a),
                Address::from_bytes(&b),
                Some(caveat.clone()),
                None,
            ))
            .unwrap();
        prop_assert_eq!(&d.caveat, &caveat);
        prop_assert!(registry.verify_delegation(&d.delegation_id, None).unwrap());
        prop_assert!(registry.revoke_delegation(&d.delegation_id, None).unwrap());
        prop_assert!(!registry.verify_delegation(&d.delegation_id, None).unwrap());
        prop_assert!(!registry.revoke_delegation(&d.delegation_id, None).unwrap());
    }

    /// Revoking an identifier that was never created is `false` and never an error.
    #[test]
    fn revoke_absent_is_false(suffix in "[0-9a-z]{9}") {
        let registry = DelegationRegistry::in_memory();
        let id = DelegationId::new(format!("delegation_{suffix}"));
        prop_assert!(!registry.revoke_delegation(&id, None).unwrap());
    }

    /// The address filter returns exactly the delegations naming the address,
    /// in creation order.
    #[test]
    fn address_filter_exact(pairs in prop::collection::vec((0u8..6, 0u8..6), 0..24), probe in 0u8..6) {
        let rt = runtime();
        let registry = DelegationRegistry::in_memory();
        let mut created = Vec::new();
        for (from, to) in &pairs {
            let d = rt
                .block_on(registry.create_delegation(addr(*from), addr(*to), None, None))
                .unwrap();
            created.push(d);
        }

        let target = addr(probe);
        let expected: Vec<_> = created
            .iter()
            .filter(|d| d.delegator == target || d.delegatee == target)
            .cloned()
            .collect();
        prop_assert_eq!(registry.delegations_for_address(&target).unwrap(), expected);
    }
}
