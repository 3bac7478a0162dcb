//! Environment-based configuration loading.
//!
//! The hosted-function runtime passes everything through environment
//! variables, so there is no config file. Reading goes through a lookup
//! closure so unit tests never have to mutate process-global state.

use crate::config::schema::Settings;

/// Listen port assigned by the functions host.
pub const PORT_VAR: &str = "FUNCTIONS_CUSTOMHANDLER_PORT";
/// Digest authentication public key.
pub const PUBLIC_KEY_VAR: &str = "ATLAS_PUBLIC_KEY";
/// Digest authentication private key.
pub const PRIVATE_KEY_VAR: &str = "ATLAS_PRIVATE_KEY";

impl Settings {
    /// Build settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build settings from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();

        if let Some(port) = lookup(PORT_VAR) {
            match port.parse::<u16>() {
                Ok(port) => settings.listener.bind_address = format!("0.0.0.0:{}", port),
                Err(_) => {
                    tracing::warn!(value = %port, "Ignoring unparseable listen port, keeping default");
                }
            }
        }

        if let Some(key) = lookup(PUBLIC_KEY_VAR) {
            settings.atlas.public_key = key;
        }
        if let Some(key) = lookup(PRIVATE_KEY_VAR) {
            settings.atlas.private_key = key;
        }

        if settings.atlas.public_key.is_empty() || settings.atlas.private_key.is_empty() {
            tracing::warn!(
                "Atlas digest credentials are not fully set; upstream calls will fail authentication"
            );
        }

        settings
    }
}
