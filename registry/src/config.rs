//! Registry policy knobs.

use serde::{Deserialize, Serialize};

/// What `create_delegation` does when no real signature can be obtained,
/// either because the signer failed or because none was supplied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignatureFallback {
    /// Store a random 65-byte placeholder signature. Demo behaviour: the
    /// record looks signed but the signature proves nothing.
    #[default]
    Placeholder,
    /// Store the record without a signature.
    Unsigned,
    /// Fail the create with the signing error.
    Reject,
}

/// How `verify_delegation` decides validity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationMode {
    /// A delegation is valid iff it is present.
    #[default]
    Existence,
    /// Present, and its signature recovers to the delegator.
    Signature,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    #[serde(default)]
    pub signature_fallback: SignatureFallback,

    #[serde(default)]
    pub verification_mode: VerificationMode,
}

impl RegistryConfig {
    /// Strict settings: no fabricated signatures, cryptographic verification.
    pub fn strict() -> Self {
        Self {
            signature_fallback: SignatureFallback::Reject,
            verification_mode: VerificationMode::Signature,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_preserve_demo_behaviour() {
        let config = RegistryConfig::default();
        assert_eq!(config.signature_fallback, SignatureFallback::Placeholder);
        assert_eq!(config.verification_mode, VerificationMode::Existence);
    }

    #[test]
    fn parses_lowercase_names() {
        let config: RegistryConfig = toml::from_str(
            r#"
            signature_fallback = "reject"
            verification_mode = "signature"
        "#,
        )
        .unwrap();
        assert_eq!(config, RegistryConfig::strict());
    }

    #[test]
    fn empty_table_uses_defaults() {
        let config: RegistryConfig = toml::from_str("").unwrap();
        assert_eq!(config, RegistryConfig::default());
    }
}
