//! LLM provider abstraction.
//!
//! `LlmProvider` is the port the infrastructure layer implements;
//! `BoxLlmProvider` erases the concrete type so the session and tests can
//! hold any provider behind one handle.

pub mod box_provider;
pub mod provider;

pub use box_provider::BoxLlmProvider;
pub use provider::LlmProvider;
