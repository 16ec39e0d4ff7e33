//! Core trait and types for text-generation backends.
//!
//! This crate provides the shared interface between the chat endpoint and
//! whatever model produces the assistant's replies. It defines:
//!
//! - [`Generator`] - The trait that all generation backends must implement
//! - [`ChatMessage`] - Role/content message type for completion requests
//! - [`GeneratorError`] - Error types for generation failures
//! - [`ScriptedGenerator`] - A canned-reply backend for tests and offline use
//!
//! # Example
//!
//! ```rust
//! use assistant_core::{ChatMessage, Generator, GeneratorError};
//! use async_trait::async_trait;
//!
//! struct UppercaseEcho;
//!
//! #[async_trait]
//! impl Generator for UppercaseEcho {
//!     async fn generate(&self, messages: Vec<ChatMessage>) -> Result<String, GeneratorError> {
//!         let last = messages.last().map(|m| m.content.clone()).unwrap_or_default();
//!         Ok(last.to_uppercase())
//!     }
//!
//!     fn name(&self) -> &str {
//!         "UppercaseEcho"
//!     }
//! }
//! ```

mod error;
mod message;
pub mod prompt;
mod scripted;
mod trait_def;

pub use error::GeneratorError;
pub use message::ChatMessage;
pub use scripted::ScriptedGenerator;
pub use trait_def::Generator;

// Re-export async_trait for convenience
pub use async_trait::async_trait;
