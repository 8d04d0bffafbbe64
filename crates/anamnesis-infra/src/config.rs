//! Application configuration loading.
//!
//! The config directory holds two optional files:
//! - `config.toml` -- generation settings ([`ChatConfig`] overrides)
//! - `secrets.toml` -- API credentials, read by the file secret provider
//!
//! A missing `config.toml` yields defaults; a malformed one is a startup
//! error, surfaced once.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use anamnesis_types::config::ChatConfig;
use anamnesis_types::error::ConfigError;

/// Environment variable overriding the config directory (mainly for tests).
pub const CONFIG_DIR_ENV: &str = "ANAMNESIS_CONFIG_DIR";

/// Top-level structure of `config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub chat: Option<ChatConfig>,
}

impl AppConfig {
    /// The effective chat configuration (file overrides over defaults).
    pub fn chat_config(&self) -> ChatConfig {
        self.chat.clone().unwrap_or_default()
    }
}

/// Resolve the application config directory.
///
/// Order: `ANAMNESIS_CONFIG_DIR` env var, then the platform config dir
/// (`~/.config/anamnesis` on Linux), then the current directory.
pub fn resolve_config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        return PathBuf::from(dir);
    }

    dirs::config_dir()
        .map(|d| d.join("anamnesis"))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Path of the secrets file inside a config directory.
pub fn secrets_path(config_dir: &Path) -> PathBuf {
    config_dir.join("secrets.toml")
}

/// Load `config.toml` from the given directory.
///
/// A missing file is not an error -- defaults apply. A present but
/// malformed file is a `ConfigError` so misconfiguration fails fast
/// instead of silently running with defaults.
pub async fn load_app_config(config_dir: &Path) -> Result<AppConfig, ConfigError> {
    let path = config_dir.join("config.toml");

    let raw = match tokio::fs::read_to_string(&path).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(AppConfig::default());
        }
        Err(e) => {
            return Err(ConfigError::UnreadableConfig {
                path: path.display().to_string(),
                reason: e.to_string(),
            });
        }
    };

    toml::from_str(&raw).map_err(|e| ConfigError::InvalidConfig {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}
