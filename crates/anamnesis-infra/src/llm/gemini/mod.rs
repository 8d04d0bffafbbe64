//! Google Gemini provider.

mod client;
pub mod types;

pub use client::GeminiProvider;
