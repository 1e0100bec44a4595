// crates/integration-gate-core/src/registry.rs
// ============================================================================
// Module: Handler Registry
// Description: Immutable mapping from provider identifiers to handlers.
// Purpose: Resolve dispatch targets and advertise declared action sets.
// Dependencies: crate::{envelope, identifiers, interfaces}, thiserror
// ============================================================================

//! ## Overview
//! The registry is populated once at process start and never mutated
//! afterwards, so concurrent reads need no locking. Each entry pairs a
//! provider with its handler trait object and the declared action descriptors
//! the actions-listing endpoint advertises. An unknown provider is a distinct
//! failure from an unknown action so transport collaborators can map it to a
//! not-found status.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::sync::Arc;

use thiserror::Error;

use crate::envelope::ActionDescriptor;
use crate::identifiers::Provider;
use crate::interfaces::ProviderHandler;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Registry lookup and construction errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Provider identifier is not in the registry.
    #[error("Unknown provider: {0}")]
    ProviderNotFound(String),
    /// Provider is already registered.
    #[error("provider already registered: {0}")]
    DuplicateProvider(Provider),
}

// ============================================================================
// SECTION: Handler Registry
// ============================================================================

/// One registered provider: its handler and declared actions.
struct RegistryEntry {
    /// Handler trait object invoked for dispatch.
    handler: Arc<dyn ProviderHandler>,
    /// Declared action descriptors in advertised order.
    actions: Vec<ActionDescriptor>,
}

/// Immutable provider-to-handler mapping.
///
/// # Invariants
/// - Provider identifiers are unique within the registry.
/// - Entries are never mutated after startup registration completes.
/// - Handlers are `Send + Sync` trait objects behind `Arc`.
#[derive(Default)]
pub struct HandlerRegistry {
    /// Registered entries keyed by provider.
    entries: BTreeMap<Provider, RegistryEntry>,
}

impl HandlerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler and its declared actions for a provider.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateProvider`] when the provider is
    /// already registered.
    pub fn register(
        &mut self,
        provider: Provider,
        handler: Arc<dyn ProviderHandler>,
        actions: Vec<ActionDescriptor>,
    ) -> Result<(), RegistryError> {
        if self.entries.contains_key(&provider) {
            return Err(RegistryError::DuplicateProvider(provider));
        }
        self.entries.insert(provider, RegistryEntry {
            handler,
            actions,
        });
        Ok(())
    }

    /// Resolves a raw identifier to its provider and handler.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::ProviderNotFound`] when the identifier is not
    /// a known provider or has no registered handler.
    pub fn resolve(&self, name: &str) -> Result<(Provider, Arc<dyn ProviderHandler>), RegistryError> {
        let provider = Provider::parse(name)
            .ok_or_else(|| RegistryError::ProviderNotFound(name.to_string()))?;
        let entry = self
            .entries
            .get(&provider)
            .ok_or_else(|| RegistryError::ProviderNotFound(name.to_string()))?;
        Ok((provider, Arc::clone(&entry.handler)))
    }

    /// Returns the declared action descriptors for a provider.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::ProviderNotFound`] when the identifier is not
    /// registered.
    pub fn actions_for(&self, name: &str) -> Result<&[ActionDescriptor], RegistryError> {
        let provider = Provider::parse(name)
            .ok_or_else(|| RegistryError::ProviderNotFound(name.to_string()))?;
        self.entries
            .get(&provider)
            .map(|entry| entry.actions.as_slice())
            .ok_or_else(|| RegistryError::ProviderNotFound(name.to_string()))
    }

    /// Returns registered provider identifiers in stable order.
    #[must_use]
    pub fn provider_names(&self) -> Vec<&'static str> {
        self.entries.keys().map(|provider| provider.as_str()).collect()
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
