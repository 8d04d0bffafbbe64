//! Environment variable secret provider.
//!
//! The highest-priority provider in the resolution chain: env vars
//! override the secrets file.

use anamnesis_core::secret::SecretProvider;
use anamnesis_types::error::SecretError;

/// Environment variable secret provider.
pub struct EnvSecretProvider;

impl EnvSecretProvider {
    /// Create a new environment variable secret provider.
    pub fn new() -> Self {
        Self
    }
}

impl Default for EnvSecretProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl SecretProvider for EnvSecretProvider {
    fn source(&self) -> &str {
        "env"
    }

    async fn get(&self, key: &str) -> Result<Option<String>, SecretError> {
        match std::env::var(key) {
            Ok(val) => Ok(Some(val)),
            Err(std::env::VarError::NotPresent) => Ok(None),
            Err(std::env::VarError::NotUnicode(_)) => {
                // Env var exists but has invalid Unicode -- treat as not found
                // rather than erroring, since secrets must be valid strings
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_env_provider_get_existing() {
        // SAFETY: This test runs serially (single-threaded test) and we clean up after.
        unsafe { std::env::set_var("ANAMNESIS_TEST_SECRET_1", "test-value-123") };

        let provider = EnvSecretProvider::new();
        let result = provider.get("ANAMNESIS_TEST_SECRET_1").await.unwrap();
        assert_eq!(result, Some("test-value-123".to_string()));

        // SAFETY: This test runs serially and the var was just set above.
        unsafe { std::env::remove_var("ANAMNESIS_TEST_SECRET_1") };
    }

    #[tokio::test]
    async fn test_env_provider_get_missing() {
        let provider = EnvSecretProvider::new();
        let result = provider.get("NONEXISTENT_VAR_XYZ_123").await.unwrap();
        assert!(result.is_none());
    }
}
