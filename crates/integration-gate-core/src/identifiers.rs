// crates/integration-gate-core/src/identifiers.rs
// ============================================================================
// Module: Gateway Identifiers
// Description: Closed provider and auth-scheme identifier sets.
// Purpose: Provide strongly typed identifiers with stable wire forms.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! This module defines the closed identifier sets used throughout the gateway.
//! Providers and auth schemes serialize as lowercase snake_case strings on the
//! wire. Adding a provider or scheme is a code change, not runtime data; both
//! sets are fixed for the life of the process.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Provider
// ============================================================================

/// External systems mocked by the gateway.
///
/// # Invariants
/// - Wire form is the lowercase identifier (`salesforce`, `ups`).
/// - The set is closed; unknown identifiers fail to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    /// Mocked Salesforce CRM.
    Salesforce,
    /// Mocked UPS shipping carrier.
    Ups,
}

impl Provider {
    /// All providers in stable advertised order.
    pub const ALL: [Self; 2] = [Self::Salesforce, Self::Ups];

    /// Returns the stable wire identifier for the provider.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Salesforce => "salesforce",
            Self::Ups => "ups",
        }
    }

    /// Parses a wire identifier into a provider (returns `None` when unknown).
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|provider| provider.as_str() == name)
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Auth Scheme
// ============================================================================

/// Named credential shapes a request may declare.
///
/// # Invariants
/// - Each scheme declares a fixed, non-empty required-field list.
/// - Wire form is the lowercase identifier (`password`, `api_key`, `oauth`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AuthScheme {
    /// Username and password pair.
    Password,
    /// Single opaque API key. Default scheme when a request omits `auth_type`.
    #[default]
    ApiKey,
    /// OAuth bearer access token.
    Oauth,
}

impl AuthScheme {
    /// Returns the stable wire identifier for the scheme.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Password => "password",
            Self::ApiKey => "api_key",
            Self::Oauth => "oauth",
        }
    }

    /// Returns the credential fields the scheme requires.
    ///
    /// Only structural presence of these fields is ever checked; values are
    /// never validated against a real identity provider.
    #[must_use]
    pub const fn required_fields(self) -> &'static [&'static str] {
        match self {
            Self::Password => &["username", "password"],
            Self::ApiKey => &["api_key"],
            Self::Oauth => &["access_token"],
        }
    }
}

impl fmt::Display for AuthScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        reason = "Test-only panic-based assertions."
    )]

    use super::AuthScheme;
    use super::Provider;

    #[test]
    fn provider_parse_round_trips_all_identifiers() {
        for provider in Provider::ALL {
            assert_eq!(Provider::parse(provider.as_str()), Some(provider));
        }
    }

    #[test]
    fn provider_parse_rejects_unknown_identifier() {
        assert_eq!(Provider::parse("fedex"), None);
    }

    #[test]
    fn provider_serializes_as_lowercase_string() {
        let wire = serde_json::to_string(&Provider::Ups).unwrap();
        assert_eq!(wire, "\"ups\"");
    }

    #[test]
    fn auth_scheme_defaults_to_api_key() {
        assert_eq!(AuthScheme::default(), AuthScheme::ApiKey);
    }

    #[test]
    fn auth_scheme_required_fields_are_non_empty() {
        for scheme in [AuthScheme::Password, AuthScheme::ApiKey, AuthScheme::Oauth] {
            assert!(!scheme.required_fields().is_empty());
        }
    }

    #[test]
    fn auth_scheme_deserializes_snake_case() {
        let scheme: AuthScheme = serde_json::from_str("\"api_key\"").unwrap();
        assert_eq!(scheme, AuthScheme::ApiKey);
    }
}
