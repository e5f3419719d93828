//! Tightly packed encoding of the delegation tuple.
//!
//! Layout (Solidity `abi.encodePacked(address, address, bytes)`):
//! `delegator (20 bytes) || delegatee (20 bytes) || caveat (raw bytes)`.
//! No padding and no length prefix on the trailing `bytes` value.

use portal_types::{Address, Caveat, MessageHash, PortalError};

use crate::hash::keccak256;

/// Pack `(delegator, delegatee, caveat)` into their binary form.
///
/// Fails if either address is not 20 bytes of hex or the caveat is not hex.
pub fn encode_packed_delegation(
    delegator: &Address,
    delegatee: &Address,
    caveat: &Caveat,
) -> Result<Vec<u8>, PortalError> {
    let delegator = delegator.to_bytes()?;
    let delegatee = delegatee.to_bytes()?;
    let caveat = caveat.to_bytes()?;

    let mut packed = Vec::with_capacity(2 * Address::LEN + caveat.len());
    packed.extend_from_slice(&delegator);
    packed.extend_from_slice(&delegatee);
    packed.extend_from_slice(&caveat);
    Ok(packed)
}

/// The canonical hash a delegator signs: Keccak-256 over the packed tuple.
pub fn delegation_hash(
    delegator: &Address,
    delegatee: &Address,
    caveat: &Caveat,
) -> Result<MessageHash, PortalError> {
    let packed = encode_packed_delegation(delegator, delegatee, caveat)?;
    Ok(MessageHash::new(keccak256(&packed)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(byte: u8) -> Address {
        Address::from_bytes(&[byte; 20])
    }

    #[test]
    fn packed_layout() {
        let packed = encode_packed_delegation(&addr(0xAA), &addr(0xBB), &Caveat::new("0x0102")).unwrap();
        assert_eq!(packed.len(), 42);
        assert_eq!(&packed[..20], &[0xAA; 20]);
        assert_eq!(&packed[20..40], &[0xBB; 20]);
        assert_eq!(&packed[40..], &[0x01, 0x02]);
    }

    #[test]
    fn empty_caveat_packs_addresses_only() {
        let packed = encode_packed_delegation(&addr(1), &addr(2), &Caveat::default()).unwrap();
        assert_eq!(packed.len(), 40);
    }

    #[test]
    fn hash_depends_on_every_field() {
        let base = delegation_hash(&addr(1), &addr(2), &Caveat::default()).unwrap();
        assert_ne!(base, delegation_hash(&addr(3), &addr(2), &Caveat::default()).unwrap());
        assert_ne!(base, delegation_hash(&addr(1), &addr(3), &Caveat::default()).unwrap());
        assert_ne!(base, delegation_hash(&addr(1), &addr(2), &Caveat::new("0x00")).unwrap());
    }

    #[test]
    fn hash_ignores_address_case() {
        let lower = Address::new("0xabcdef0000000000000000000000000000000001");
        let upper = Address::new("0xABCDEF0000000000000000000000000000000001");
        assert_eq!(
            delegation_hash(&lower, &addr(2), &Caveat::default()).unwrap(),
            delegation_hash(&upper, &addr(2), &Caveat::default()).unwrap()
        );
    }

    #[test]
    fn matches_solidity_packed_keccak() {
        // solidityPackedKeccak256(["address", "address", "bytes"], [delegator, delegatee, caveat])
        let delegator = Address::new("0x52908400098527886E0F7030069857D2E4169EE7");
        let delegatee = Address::new("0x8617E340B3D01FA5F11F306F4090FD50E238070D");
        assert_eq!(
            delegation_hash(&delegator, &delegatee, &Caveat::new("0xdeadbeef"))
                .unwrap()
                .to_hex(),
            "0x6225168ddadc0345f8dfd08b4dc5227a29e6135dd8c36dd07d70de37bcff983f"
        );
        assert_eq!(
            delegation_hash(&delegator, &delegatee, &Caveat::default())
                .unwrap()
                .to_hex(),
            "0x7d2c314a610a14fec599df5f6f6778720f03d7a39c5f5d64ad5f78766cce7a61"
        );
    }

    #[test]
    fn malformed_inputs_fail() {
        let short = Address::new("0xAAA");
        assert!(delegation_hash(&short, &addr(2), &Caveat::default()).is_err());
        assert!(delegation_hash(&addr(1), &addr(2), &Caveat::new("0xnothex")).is_err());
    }
}
