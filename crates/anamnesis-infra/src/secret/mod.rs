//! Secret backends: environment variables and the config-dir secrets file.

pub mod chain;
pub mod env;
pub mod file;

pub use chain::build_secret_chain;
pub use env::EnvSecretProvider;
pub use file::FileSecretProvider;
