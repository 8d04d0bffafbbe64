//! Business logic and port traits for Anamnesis.
//!
//! This crate defines the "ports" (provider traits) that the infrastructure
//! layer implements. It depends only on `anamnesis-types` -- never on
//! `anamnesis-infra` or any HTTP/IO crate.

pub mod llm;
pub mod registry;
pub mod secret;
pub mod session;
