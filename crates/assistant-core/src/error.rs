//! Error types for generation backends.

use thiserror::Error;

/// Errors that can occur while producing a model response.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The backend is misconfigured (missing key, bad URL, etc.).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The request could not reach the backend.
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered but the response could not be used.
    #[error("generation failed: {0}")]
    ProcessingFailed(String),
}
