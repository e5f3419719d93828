//! Random identifiers and placeholder signatures.

use portal_types::{DelegationId, Signature};
use rand::Rng;

const BASE36_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate a fresh identifier: `delegation_` followed by 9 base-36 characters.
///
/// Uniqueness is probabilistic (36^9 ≈ 1.0e14 values), not guaranteed.
pub fn generate_delegation_id() -> DelegationId {
    let mut rng = rand::rng();
    let suffix: String = (0..DelegationId::SUFFIX_LEN)
        .map(|_| BASE36_ALPHABET[rng.random_range(0..BASE36_ALPHABET.len())] as char)
        .collect();
    DelegationId::new(format!("{}{suffix}", DelegationId::PREFIX))
}

/// A syntactically valid but cryptographically meaningless signature.
///
/// Same length as a real one (65 bytes); it will not recover to any
/// meaningful signer.
pub fn placeholder_signature() -> Signature {
    let mut bytes = [0u8; 65];
    rand::rng().fill(&mut bytes[..]);
    Signature(bytes)
}
