//! Application state wiring the services together.
//!
//! AppState holds the case registry, the resolved API credential, and the
//! effective chat configuration. The credential is resolved eagerly so a
//! missing key is a clear startup error, never a crash on the first send.

use std::path::PathBuf;
use std::sync::Arc;

use secrecy::SecretString;

use anamnesis_core::registry::CaseRegistry;
use anamnesis_core::secret::SecretService;
use anamnesis_infra::config::{load_app_config, resolve_config_dir, secrets_path};
use anamnesis_infra::secret::{build_secret_chain, FileSecretProvider};
use anamnesis_types::config::ChatConfig;
use anamnesis_types::error::ConfigError;

/// Environment/secrets key holding the Gemini API credential.
pub const API_KEY_NAME: &str = "GEMINI_API_KEY";

/// Shared application state for all CLI commands.
pub struct AppState {
    pub registry: Arc<CaseRegistry>,
    pub chat_config: ChatConfig,
    pub api_key: SecretString,
    pub config_dir: PathBuf,
}

impl AppState {
    /// Initialize the application state: load config, resolve the credential.
    pub async fn init() -> anyhow::Result<Self> {
        let config_dir = resolve_config_dir();

        let app_config = load_app_config(&config_dir).await?;
        let chat_config = app_config.chat_config();

        let secrets_file = secrets_path(&config_dir);
        let secret_chain =
            build_secret_chain(FileSecretProvider::new(secrets_file.clone()), true);
        let secret_service = SecretService::new(secret_chain);

        let api_key = secret_service
            .get_secret(API_KEY_NAME)
            .await?
            .ok_or_else(|| ConfigError::MissingApiKey {
                secrets_path: secrets_file.display().to_string(),
            })?;

        Ok(Self {
            registry: Arc::new(CaseRegistry::builtin()),
            chat_config,
            api_key: SecretString::from(api_key),
            config_dir,
        })
    }
}
