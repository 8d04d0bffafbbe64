//! Secret resolution service.
//!
//! Resolves secrets through a chain of providers in priority order.
//! Default chain: environment variables, then the config-dir secrets file.

use anamnesis_types::error::SecretError;

use super::provider::DynSecretProvider;

/// Resolves secrets across multiple read-only backends.
///
/// Providers are ordered by precedence (first match wins).
pub struct SecretService {
    providers: Vec<DynSecretProvider>,
}

impl SecretService {
    /// Create a new SecretService with the given provider chain.
    ///
    /// Providers should be ordered by precedence (highest priority first).
    pub fn new(providers: Vec<DynSecretProvider>) -> Self {
        Self { providers }
    }

    /// Resolve a secret value by iterating through providers in priority order.
    pub async fn get_secret(&self, key: &str) -> Result<Option<String>, SecretError> {
        for provider in &self.providers {
            if let Some(value) = provider.get_boxed(key).await? {
                return Ok(Some(value));
            }
        }
        Ok(None)
    }

    /// Mask a secret value, showing only the last 4 characters.
    ///
    /// - "AIzaSyAbcdefghij" -> "****ghij"
    /// - "abc" -> "****" (too short to show any chars)
    pub fn mask_secret(value: &str) -> String {
        if value.len() <= 4 {
            "****".to_string()
        } else {
            format!("****{}", &value[value.len() - 4..])
        }
    }
}
