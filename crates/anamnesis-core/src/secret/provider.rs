//! Secret provider trait definition.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use anamnesis_types::error::SecretError;

/// Trait for read-only secret backends (environment, secrets file).
///
/// Each provider resolves secret values by key. The `SecretService` chains
/// multiple providers in priority order.
pub trait SecretProvider: Send + Sync {
    /// Human-readable source name for error messages ("env", "file").
    fn source(&self) -> &str;

    /// Retrieve a secret value by key.
    /// Returns None if the secret does not exist in this provider.
    fn get(
        &self,
        key: &str,
    ) -> impl Future<Output = Result<Option<String>, SecretError>> + Send;
}

/// Object-safe version of [`SecretProvider`] with boxed futures, enabling
/// heterogeneous provider chains behind `DynSecretProvider`.
pub trait SecretProviderDyn: Send + Sync {
    fn source(&self) -> &str;

    fn get_boxed<'a>(
        &'a self,
        key: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Option<String>, SecretError>> + Send + 'a>>;
}

/// Blanket implementation: any `SecretProvider` automatically implements
/// `SecretProviderDyn`.
impl<T: SecretProvider> SecretProviderDyn for T {
    fn source(&self) -> &str {
        SecretProvider::source(self)
    }

    fn get_boxed<'a>(
        &'a self,
        key: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Option<String>, SecretError>> + Send + 'a>> {
        Box::pin(self.get(key))
    }
}

/// Shared handle to a type-erased secret provider.
pub type DynSecretProvider = Arc<dyn SecretProviderDyn + Send + Sync>;
