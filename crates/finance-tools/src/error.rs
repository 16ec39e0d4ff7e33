//! Error types for tool operations.

use thiserror::Error;

/// Errors that can occur during tool execution.
///
/// All variants except [`ToolError::Storage`] are recoverable per call:
/// the interpolation driver annotates them into the response text and
/// moves on. A storage failure aborts the whole request.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Tool not found in registry.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// Missing required parameter.
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    /// Invalid parameter value (e.g., a negative expense amount).
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Rate provider has no entry for the requested currency.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Expense store unreachable; fatal to the request.
    #[error(transparent)]
    Storage(#[from] ledger::StorageError),

    /// General execution error.
    #[error("Execution failed: {0}")]
    ExecutionFailed(String),
}
