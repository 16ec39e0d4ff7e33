//! Expense record model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A single logged expense.
///
/// Records are immutable once appended; `id` is assigned by the store and
/// unique for the process lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Expense {
    /// Auto-incrementing ID.
    pub id: i64,
    /// Calendar date the expense was logged (`%Y-%m-%d`).
    pub date: String,
    /// Amount in USD.
    pub amount: f64,
    /// Short category label (e.g., "Food").
    pub category: String,
    /// Free-text description.
    pub description: String,
}

/// Render expenses as the transaction-history block fed to the model.
///
/// One line per record, oldest first.
pub fn render_history(expenses: &[Expense]) -> String {
    expenses
        .iter()
        .map(|e| {
            format!(
                "{} - {:.2} USD - {} - {}",
                e.date, e.amount, e.category, e.description
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
