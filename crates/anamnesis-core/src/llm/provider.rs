//! LlmProvider trait definition.
//!
//! The single abstraction over hosted chat-completion backends. One
//! blocking `complete` call per user turn; the interview flow has no
//! streaming state, so the trait does not model one.

use anamnesis_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for LLM provider backends (Gemini, test stubs).
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
/// Implementations live in anamnesis-infra (e.g., `GeminiProvider`).
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "gemini").
    fn name(&self) -> &str;

    /// Model identifier this provider sends requests to.
    fn model(&self) -> &str;

    /// Send a completion request and receive the full response.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
