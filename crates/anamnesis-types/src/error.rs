use thiserror::Error;

use crate::llm::LlmError;

/// Errors related to startup configuration.
///
/// These are fatal: they surface once at startup and nothing is retried.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "GEMINI_API_KEY not found. Set the GEMINI_API_KEY environment variable \
         or add it to {secrets_path}"
    )]
    MissingApiKey { secrets_path: String },

    #[error("could not read config file {path}: {reason}")]
    UnreadableConfig { path: String, reason: String },

    #[error("invalid config file {path}: {reason}")]
    InvalidConfig { path: String, reason: String },
}

/// Errors related to the patient case registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("unknown patient case: '{0}'")]
    NotFound(String),
}

/// Errors related to secret resolution.
#[derive(Debug, Error)]
pub enum SecretError {
    #[error("secret provider unavailable: {0}")]
    ProviderUnavailable(String),

    #[error("storage error: {0}")]
    StorageError(String),
}

/// Errors from interview session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    UnknownCase(#[from] RegistryError),

    #[error("no patient case selected")]
    NoActiveCase,

    #[error("a reply is still pending; wait for the patient to answer")]
    ReplyPending,

    #[error(transparent)]
    Model(#[from] LlmError),
}
