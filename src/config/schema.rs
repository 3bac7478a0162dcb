//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! provider. All fields carry defaults matching the hosted-function
//! environment.

use serde::{Deserialize, Serialize};

/// Root configuration for the provider function.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct Settings {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Atlas API endpoint and credentials.
    pub atlas: AtlasConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Atlas API configuration.
///
/// Credentials default to empty strings; the Atlas API rejects
/// unauthenticated calls itself, so nothing fails at startup.
#[derive(Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AtlasConfig {
    /// Base URL of the Atlas administration API.
    pub base_url: String,

    /// Digest authentication public key.
    pub public_key: String,

    /// Digest authentication private key.
    pub private_key: String,
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self {
            base_url: "https://cloud.mongodb.com".to_string(),
            public_key: String::new(),
            private_key: String::new(),
        }
    }
}

impl std::fmt::Debug for AtlasConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AtlasConfig")
            .field("base_url", &self.base_url)
            .field("public_key", &self.public_key)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// End-to-end request timeout in seconds.
    pub request_secs: u64,

    /// Timeout for a single upstream Atlas call in seconds.
    pub upstream_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            request_secs: 30,
            upstream_secs: 25,
        }
    }
}
