//! GeminiProvider -- concrete [`LlmProvider`] implementation for the Google
//! Generative Language API.
//!
//! Sends requests to `models/{model}:generateContent` with the API key in
//! the `x-goog-api-key` header (never in the URL, so it cannot leak into
//! logs). The key is wrapped in [`secrecy::SecretString`] and is never
//! included in `Debug` output.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use anamnesis_core::llm::provider::LlmProvider;
use anamnesis_types::llm::{CompletionRequest, CompletionResponse, LlmError, MessageRole, Usage};

use super::types::{
    GeminiContent, GeminiErrorEnvelope, GeminiRequest, GeminiResponse, GenerationConfig,
};

/// Google Gemini LLM provider.
///
/// Implements [`LlmProvider`] for the `generateContent` endpoint.
pub struct GeminiProvider {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    model: String,
}

impl GeminiProvider {
    /// Create a new Gemini provider.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Gemini API key wrapped in SecretString
    /// * `model` - Model identifier (e.g., "gemini-1.5-flash")
    pub fn new(api_key: SecretString, model: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            api_key,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model,
        }
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Build the full `generateContent` URL for this provider's model.
    fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    /// Convert a generic [`CompletionRequest`] into a [`GeminiRequest`].
    ///
    /// Gemini names the assistant role `"model"`; the system prompt travels
    /// in the separate `systemInstruction` field rather than as a message.
    fn to_gemini_request(&self, request: &CompletionRequest) -> GeminiRequest {
        let contents = request
            .messages
            .iter()
            .map(|m| {
                let role = match m.role {
                    MessageRole::User => "user",
                    MessageRole::Assistant => "model",
                };
                GeminiContent::with_role(role, m.content.clone())
            })
            .collect();

        GeminiRequest {
            system_instruction: request.system.as_deref().map(GeminiContent::text),
            contents,
            generation_config: Some(GenerationConfig {
                max_output_tokens: request.max_tokens,
                temperature: request.temperature,
            }),
        }
    }

    /// Map a non-2xx status plus error body to an [`LlmError`].
    fn map_error(status: reqwest::StatusCode, body: String) -> LlmError {
        let message = serde_json::from_str::<GeminiErrorEnvelope>(&body)
            .map(|e| e.error.message)
            .unwrap_or(body);

        match status.as_u16() {
            // Revoked or restricted keys come back as 401/403; a malformed
            // key is a 400 INVALID_ARGUMENT and stays an InvalidRequest.
            401 | 403 => LlmError::AuthenticationFailed,
            429 => LlmError::RateLimited {
                retry_after_ms: None,
            },
            503 => LlmError::Overloaded(message),
            400 => LlmError::InvalidRequest(message),
            _ => LlmError::Provider {
                message: format!("HTTP {status}: {message}"),
            },
        }
    }
}

// GeminiProvider intentionally does NOT derive Debug so the API key can
// never be printed through the provider struct.

impl LlmProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let body = self.to_gemini_request(request);

        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", self.api_key.expose_secret())
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Provider {
                message: format!("HTTP request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(Self::map_error(status, error_body));
        }

        let gemini_resp: GeminiResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Deserialization(format!("failed to parse response: {e}")))?;

        let candidate = gemini_resp.candidates.first().ok_or_else(|| {
            LlmError::Provider {
                message: "response contained no candidates".to_string(),
            }
        })?;

        let content = candidate.text();
        if content.is_empty() {
            let reason = candidate
                .finish_reason
                .clone()
                .unwrap_or_else(|| "unknown".to_string());
            return Err(LlmError::Provider {
                message: format!("empty reply from model (finish reason: {reason})"),
            });
        }

        let usage = gemini_resp.usage_metadata.unwrap_or_default();

        Ok(CompletionResponse {
            content,
            model: gemini_resp
                .model_version
                .unwrap_or_else(|| self.model.clone()),
            usage: Usage {
                input_tokens: usage.prompt_token_count,
                output_tokens: usage.candidates_token_count,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anamnesis_types::llm::Message;

    fn make_provider() -> GeminiProvider {
        GeminiProvider::new(
            SecretString::from("test-key-not-real"),
            "gemini-1.5-flash".to_string(),
        )
    }

    #[test]
    fn test_provider_name_and_model() {
        let provider = make_provider();
        assert_eq!(provider.name(), "gemini");
        assert_eq!(provider.model(), "gemini-1.5-flash");
    }

    #[test]
    fn test_url_contains_model_and_endpoint() {
        let provider = make_provider().with_base_url("http://localhost:8080".to_string());
        assert_eq!(
            provider.url(),
            "http://localhost:8080/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }

    #[test]
    fn test_to_gemini_request_maps_roles() {
        let provider = make_provider();
        let request = CompletionRequest {
            model: "gemini-1.5-flash".to_string(),
            messages: vec![
                Message {
                    role: MessageRole::User,
                    content: "Where does it hurt?".to_string(),
                },
                Message {
                    role: MessageRole::Assistant,
                    content: "(winces) My stomach.".to_string(),
                },
            ],
            system: Some("You are a patient.".to_string()),
            max_tokens: 1024,
            temperature: Some(0.7),
        };

        let gemini_req = provider.to_gemini_request(&request);
        assert_eq!(gemini_req.contents.len(), 2);
        assert_eq!(gemini_req.contents[0].role.as_deref(), Some("user"));
        assert_eq!(gemini_req.contents[1].role.as_deref(), Some("model"));
        assert_eq!(
            gemini_req.system_instruction.unwrap().parts[0].text,
            "You are a patient."
        );
        let config = gemini_req.generation_config.unwrap();
        assert_eq!(config.max_output_tokens, 1024);
        assert_eq!(config.temperature, Some(0.7));
    }

    #[test]
    fn test_map_error_auth() {
        let err = GeminiProvider::map_error(
            reqwest::StatusCode::FORBIDDEN,
            r#"{"error":{"code":403,"message":"API key leaked","status":"PERMISSION_DENIED"}}"#
                .to_string(),
        );
        assert!(matches!(err, LlmError::AuthenticationFailed));
    }

    #[test]
    fn test_map_error_rate_limited() {
        let err = GeminiProvider::map_error(
            reqwest::StatusCode::TOO_MANY_REQUESTS,
            r#"{"error":{"code":429,"message":"quota","status":"RESOURCE_EXHAUSTED"}}"#.to_string(),
        );
        assert!(matches!(err, LlmError::RateLimited { .. }));
    }

    #[test]
    fn test_map_error_overloaded_uses_api_message() {
        let err = GeminiProvider::map_error(
            reqwest::StatusCode::SERVICE_UNAVAILABLE,
            r#"{"error":{"code":503,"message":"The model is overloaded","status":"UNAVAILABLE"}}"#
                .to_string(),
        );
        match err {
            LlmError::Overloaded(msg) => assert_eq!(msg, "The model is overloaded"),
            other => panic!("expected Overloaded, got {other:?}"),
        }
    }

    #[test]
    fn test_map_error_invalid_request() {
        let err = GeminiProvider::map_error(
            reqwest::StatusCode::BAD_REQUEST,
            r#"{"error":{"code":400,"message":"Invalid JSON payload","status":"INVALID_ARGUMENT"}}"#
                .to_string(),
        );
        assert!(matches!(err, LlmError::InvalidRequest(_)));
    }

    #[test]
    fn test_map_error_unparseable_body_falls_back_to_raw() {
        let err = GeminiProvider::map_error(
            reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            "gateway exploded".to_string(),
        );
        match err {
            LlmError::Provider { message } => {
                assert!(message.contains("gateway exploded"));
                assert!(message.contains("500"));
            }
            other => panic!("expected Provider, got {other:?}"),
        }
    }
}
