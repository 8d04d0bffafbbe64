//! Chat generation settings.
//!
//! Defaults mirror the hosted simulator this tool replaces; all values can
//! be overridden from the optional `config.toml` loaded by the infra layer.

use serde::{Deserialize, Serialize};

/// Default Gemini model for patient simulation.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Generation parameters for patient replies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,

    #[serde(default)]
    pub temperature: Option<f64>,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_max_output_tokens() -> u32 {
    1024
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            max_output_tokens: default_max_output_tokens(),
            temperature: None,
        }
    }
}
