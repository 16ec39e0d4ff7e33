//! Financial tool implementations.

mod exchange_rate;
mod log_expense;
mod total_expenses;

pub use exchange_rate::ExchangeRate;
pub use log_expense::LogExpense;
pub use total_expenses::TotalExpenses;
