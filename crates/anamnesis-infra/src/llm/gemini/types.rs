//! Gemini `generateContent` API types.
//!
//! These are Gemini-specific request/response structures used for HTTP
//! communication with the Generative Language API. They are NOT the generic
//! LLM types from anamnesis-types -- those are provider-agnostic.

use serde::{Deserialize, Serialize};

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiRequest {
    /// The persona instruction the model is bound to for the whole session.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<GeminiContent>,
    pub contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

/// A role-tagged content block. Gemini uses `"user"` and `"model"` roles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<GeminiPart>,
}

impl GeminiContent {
    /// Untagged content holding a single text part (for system instructions).
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            role: None,
            parts: vec![GeminiPart { text: text.into() }],
        }
    }

    /// Role-tagged content holding a single text part.
    pub fn with_role(role: &str, text: impl Into<String>) -> Self {
        Self {
            role: Some(role.to_string()),
            parts: vec![GeminiPart { text: text.into() }],
        }
    }
}

/// One text part inside a content block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiPart {
    pub text: String,
}

/// Generation parameters.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub max_output_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

/// Response body from `generateContent`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
    pub usage_metadata: Option<UsageMetadata>,
    pub model_version: Option<String>,
}

/// A single response candidate.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiCandidate {
    pub content: Option<GeminiContent>,
    pub finish_reason: Option<String>,
}

impl GeminiCandidate {
    /// Concatenate the candidate's text parts.
    pub fn text(&self) -> String {
        self.content
            .as_ref()
            .map(|c| {
                c.parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default()
    }
}

/// Token usage reported by Gemini.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
}

/// Error envelope returned on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiErrorEnvelope {
    pub error: GeminiError,
}

/// An error from the Generative Language API.
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiError {
    #[serde(default)]
    pub code: u16,
    pub message: String,
    #[serde(default)]
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let req = GeminiRequest {
            system_instruction: Some(GeminiContent::text("You are a patient.")),
            contents: vec![GeminiContent::with_role("user", "Hello")],
            generation_config: Some(GenerationConfig {
                max_output_tokens: 1024,
                temperature: Some(0.7),
            }),
        };

        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json["systemInstruction"]["parts"][0]["text"],
            "You are a patient."
        );
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 1024);
        // The untagged system instruction carries no role field.
        assert!(json["systemInstruction"].get("role").is_none());
    }

    #[test]
    fn test_request_skips_absent_generation_config() {
        let req = GeminiRequest {
            system_instruction: None,
            contents: vec![GeminiContent::with_role("user", "Hello")],
            generation_config: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("systemInstruction").is_none());
        assert!(json.get("generationConfig").is_none());
    }

    #[test]
    fn test_response_deserialization() {
        let json = r#"{
            "candidates": [{
                "content": {
                    "parts": [{"text": "(fidgets) It burns, doctor."}],
                    "role": "model"
                },
                "finishReason": "STOP"
            }],
            "usageMetadata": {
                "promptTokenCount": 120,
                "candidatesTokenCount": 12,
                "totalTokenCount": 132
            },
            "modelVersion": "gemini-1.5-flash"
        }"#;

        let resp: GeminiResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.candidates.len(), 1);
        assert_eq!(resp.candidates[0].text(), "(fidgets) It burns, doctor.");
        assert_eq!(
            resp.candidates[0].finish_reason.as_deref(),
            Some("STOP")
        );
        let usage = resp.usage_metadata.unwrap();
        assert_eq!(usage.prompt_token_count, 120);
        assert_eq!(usage.candidates_token_count, 12);
    }

    #[test]
    fn test_response_with_no_candidates() {
        let resp: GeminiResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.candidates.is_empty());
        assert!(resp.usage_metadata.is_none());
    }

    #[test]
    fn test_multi_part_candidate_concatenates() {
        let json = r#"{
            "candidates": [{
                "content": {"parts": [{"text": "It "}, {"text": "burns."}]}
            }]
        }"#;
        let resp: GeminiResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.candidates[0].text(), "It burns.");
    }

    #[test]
    fn test_error_envelope_deserialization() {
        let json = r#"{
            "error": {
                "code": 429,
                "message": "Resource has been exhausted",
                "status": "RESOURCE_EXHAUSTED"
            }
        }"#;
        let envelope: GeminiErrorEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.error.code, 429);
        assert_eq!(envelope.error.status, "RESOURCE_EXHAUSTED");
    }
}
