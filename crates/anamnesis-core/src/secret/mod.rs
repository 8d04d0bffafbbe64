//! Secret resolution ports and chain service.
//!
//! `SecretProvider` is the port concrete backends implement (environment
//! variables, config-dir secrets file); `SecretService` chains them in
//! priority order, first match wins.

pub mod provider;
pub mod service;

pub use provider::{DynSecretProvider, SecretProvider, SecretProviderDyn};
pub use service::SecretService;
