//! Tool registry and financial tool implementations.
//!
//! This crate provides a `ToolRegistry` for registering and executing the
//! tools the assistant can invoke from generated text. Each tool carries a
//! fixed positional parameter schema (see [`ParamSpec`]) so that the
//! interpolation engine can type-check raw argument text before dispatch.
//!
//! # Built-in Tools
//!
//! - [`TotalExpenses`] - Sum of all logged expenses (`calculate_total_expenses`).
//! - [`LogExpense`] - Record a new expense (`log_expense`).
//! - [`ExchangeRate`] - Currency rate lookup via exchangerate-api.com
//!   (`get_exchange_rate`), the only tool that performs network I/O.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use finance_tools::{default_registry, StaticRates};
//! use ledger::MemoryLedger;
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = Arc::new(MemoryLedger::seeded());
//!     let rates = Arc::new(StaticRates::new().with_rate("USD", "EUR", 0.85));
//!     let registry = default_registry(store, rates);
//!
//!     let result = registry
//!         .execute("calculate_total_expenses", Default::default())
//!         .await
//!         .unwrap();
//!     println!("{}", result.content); // "170.00"
//! }
//! ```

mod error;
mod rates;
mod registry;
mod tool;
pub mod tools;

use std::sync::Arc;

use ledger::ExpenseStore;

pub use error::ToolError;
pub use rates::{ExchangeRateApi, RateProvider, StaticRates};
pub use registry::ToolRegistry;
pub use tool::{ArgValue, ParamKind, ParamSpec, Tool, ToolArgs, ToolOutput};
pub use tools::{ExchangeRate, LogExpense, TotalExpenses};

// Re-export async_trait for convenience
pub use async_trait::async_trait;

/// Create a registry with the three financial tools registered.
pub fn default_registry(
    store: Arc<dyn ExpenseStore>,
    rates: Arc<dyn RateProvider>,
) -> ToolRegistry {
    let mut registry = ToolRegistry::new();

    registry.register(TotalExpenses::new(store.clone()));
    registry.register(LogExpense::new(store));
    registry.register(ExchangeRate::new(rates));

    registry
}
