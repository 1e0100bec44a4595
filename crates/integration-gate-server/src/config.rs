// crates/integration-gate-server/src/config.rs
// ============================================================================
// Module: Gateway Configuration
// Description: Server configuration with validation.
// Purpose: Centralize bind address and body-limit settings.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! The gateway needs no environment configuration: everything is simulated
//! in-process. The server itself still takes a bind address and a request
//! body limit, validated before the listener starts.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::net::SocketAddr;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default bind address for the gateway.
pub const DEFAULT_BIND: &str = "127.0.0.1:8001";

/// Default maximum request body size in bytes.
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Gateway server configuration.
///
/// # Invariants
/// - `bind` parses as a socket address.
/// - `max_body_bytes` is positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Socket address the HTTP listener binds to.
    pub bind: String,
    /// Maximum allowed request body size in bytes.
    pub max_body_bytes: usize,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl GatewayConfig {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the bind address is unparseable or the
    /// body limit is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bind.parse::<SocketAddr>().is_err() {
            return Err(ConfigError::InvalidBind(self.bind.clone()));
        }
        if self.max_body_bytes == 0 {
            return Err(ConfigError::ZeroBodyLimit);
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Bind address does not parse as a socket address.
    #[error("invalid bind address: {0}")]
    InvalidBind(String),
    /// Body limit must be positive.
    #[error("max_body_bytes must be positive")]
    ZeroBodyLimit,
}

// ============================================================================
// SECTION: Tests
// ============================================================================
