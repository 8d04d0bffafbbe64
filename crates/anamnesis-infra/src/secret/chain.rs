//! Secret chain builder -- wires concrete providers in priority order.
//!
//! This module lives in `anamnesis-infra` because it assembles concrete
//! provider implementations. The resulting chain is passed to
//! `SecretService` in `anamnesis-core` via the `DynSecretProvider`
//! abstraction.
//!
//! Default chain order: `[EnvSecretProvider, FileSecretProvider]`

use std::sync::Arc;

use anamnesis_core::secret::DynSecretProvider;

use super::env::EnvSecretProvider;
use super::file::FileSecretProvider;

/// Build the default secret resolution chain.
///
/// The chain is ordered by precedence (first match wins):
/// 1. Environment variables (if `include_env` is true)
/// 2. The config-dir secrets file
pub fn build_secret_chain(
    file: FileSecretProvider,
    include_env: bool,
) -> Vec<DynSecretProvider> {
    let mut chain: Vec<DynSecretProvider> = Vec::new();

    if include_env {
        chain.push(Arc::new(EnvSecretProvider::new()));
    }

    chain.push(Arc::new(file));

    chain
}
