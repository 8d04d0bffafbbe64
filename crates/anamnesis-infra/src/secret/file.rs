//! Secrets-file provider.
//!
//! Reads a flat `secrets.toml` of `KEY = "value"` pairs from the config
//! directory. Read on every lookup so edits take effect without restarting.

use std::path::PathBuf;

use anamnesis_core::secret::SecretProvider;
use anamnesis_types::error::SecretError;

/// Secret provider backed by a TOML file of string keys.
pub struct FileSecretProvider {
    path: PathBuf,
}

impl FileSecretProvider {
    /// Create a provider reading from the given secrets file path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing secrets file.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl SecretProvider for FileSecretProvider {
    fn source(&self) -> &str {
        "file"
    }

    async fn get(&self, key: &str) -> Result<Option<String>, SecretError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(SecretError::StorageError(e.to_string())),
        };

        let table: toml::Table = raw
            .parse()
            .map_err(|e: toml::de::Error| SecretError::StorageError(e.to_string()))?;

        Ok(table
            .get(key)
            .and_then(|v| v.as_str())
            .map(|s| s.to_string()))
    }
}
