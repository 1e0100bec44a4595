// crates/integration-gate-core/src/auth.rs
// ============================================================================
// Module: Auth Scheme Validation
// Description: Structural validation of credentials against scheme tables.
// Purpose: Reject requests missing required credential fields before dispatch.
// Dependencies: crate::identifiers, thiserror
// ============================================================================

//! ## Overview
//! Auth validation is purely structural: a credential mapping satisfies a
//! scheme when every required field is present with a non-empty value. Values
//! are never checked against a real identity provider. Validation is a pure
//! function with no side effects, suitable for fail-fast use in the dispatch
//! pipeline.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use thiserror::Error;

use crate::identifiers::AuthScheme;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Auth validation errors.
///
/// # Invariants
/// - `missing` is non-empty and preserves required-field declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Required credential fields are absent or empty.
    #[error("missing or invalid credentials: {}", .missing.join(", "))]
    MissingCredentials {
        /// Scheme the request declared.
        scheme: AuthScheme,
        /// Required fields that were absent or empty.
        missing: Vec<String>,
    },
}

// ============================================================================
// SECTION: Validation
// ============================================================================

/// Validates that credentials structurally satisfy the declared scheme.
///
/// A field is missing when the mapping is absent, the key is absent, or the
/// value is empty.
///
/// # Errors
///
/// Returns [`AuthError::MissingCredentials`] listing every missing field.
pub fn validate_credentials(
    scheme: AuthScheme,
    credentials: Option<&BTreeMap<String, String>>,
) -> Result<(), AuthError> {
    let required = scheme.required_fields();
    let missing: Vec<String> = match credentials {
        None => required.iter().map(|field| (*field).to_string()).collect(),
        Some(map) => required
            .iter()
            .filter(|field| map.get(**field).is_none_or(String::is_empty))
            .map(|field| (*field).to_string())
            .collect(),
    };
    if missing.is_empty() {
        return Ok(());
    }
    Err(AuthError::MissingCredentials {
        scheme,
        missing,
    })
}

// ============================================================================
// SECTION: Tests
// ============================================================================
