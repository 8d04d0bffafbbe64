//! Shared domain types for Anamnesis.
//!
//! This crate contains the core domain types used across the Anamnesis
//! workspace: transcript turns, LLM request/response shapes, chat
//! configuration, and the error taxonomy.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod llm;
