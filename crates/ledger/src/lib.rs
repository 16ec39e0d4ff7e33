//! Expense persistence for the finance assistant.
//!
//! This crate provides the [`ExpenseStore`] trait - an append-only record
//! store of expenses - with two implementations: [`SqliteLedger`] (SQLx +
//! SQLite, the production backend) and [`MemoryLedger`] (for tests and
//! offline use).
//!
//! # Example
//!
//! ```no_run
//! use ledger::{ExpenseStore, SqliteLedger};
//!
//! #[tokio::main]
//! async fn main() -> ledger::Result<()> {
//!     let db = SqliteLedger::connect("sqlite:db/transactions.db?mode=rwc").await?;
//!     db.migrate().await?;
//!
//!     db.append(50.0, "Food", "Groceries").await?;
//!     println!("total: {:.2}", db.total().await?);
//!     Ok(())
//! }
//! ```

mod error;
mod memory;
mod models;
mod sqlite;
mod store;

pub use error::{Result, StorageError};
pub use memory::MemoryLedger;
pub use models::{render_history, Expense};
pub use sqlite::SqliteLedger;
pub use store::ExpenseStore;
