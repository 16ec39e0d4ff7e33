//! Storage error types.

use thiserror::Error;

/// Errors that can occur while reading or writing the expense store.
///
/// Any of these is fatal to the request that hit it: without the ledger
/// there is no transaction context to build and no safe place to record
/// an expense.
#[derive(Debug, Error)]
pub enum StorageError {
    /// SQLx error (connection, query, etc.)
    #[error("storage error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// Migration error
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StorageError>;
