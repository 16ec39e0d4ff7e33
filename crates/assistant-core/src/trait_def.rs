//! The Generator trait definition.

use async_trait::async_trait;

use crate::error::GeneratorError;
use crate::message::ChatMessage;

/// A trait for producing a model response from a list of chat messages.
///
/// Implementations can range from scripted test backends to remote
/// completion APIs. This trait is object-safe and can be used with
/// `Arc<dyn Generator>`.
#[async_trait]
pub trait Generator: Send + Sync {
    /// Generate a response for the given messages.
    ///
    /// The messages are sent in order; by convention the first is the
    /// system prompt and the last is the current user message.
    async fn generate(&self, messages: Vec<ChatMessage>) -> Result<String, GeneratorError>;

    /// Get a human-readable name for this backend.
    fn name(&self) -> &str;
}
