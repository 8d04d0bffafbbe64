//! Infrastructure layer for Anamnesis.
//!
//! Contains implementations of the port traits defined in `anamnesis-core`:
//! the Gemini HTTP provider, environment/file secret backends, and the
//! config loader.

pub mod config;
pub mod llm;
pub mod secret;
