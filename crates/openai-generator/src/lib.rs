//! OpenAI-compatible generation backend.
//!
//! This crate provides a [`Generator`] implementation that talks to any
//! OpenAI-compatible chat-completions API, configured via environment
//! variables.
//!
//! # Example
//!
//! ```rust,no_run
//! use openai_generator::OpenAiGenerator;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let generator = OpenAiGenerator::from_env()?;
//! // Use the generator...
//! # Ok(())
//! # }
//! ```

mod api_types;
mod config;
mod generator;

pub use config::OpenAiConfig;
pub use generator::OpenAiGenerator;

// Re-export core types for convenience
pub use assistant_core::{async_trait, ChatMessage, Generator, GeneratorError};
