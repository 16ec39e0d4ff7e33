//! The ExpenseStore trait definition.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Expense;

/// An append-only store of expense records.
///
/// `append` is the only mutator and must be atomic with respect to
/// concurrent requests: two simultaneous appends may not lose an entry or
/// hand out the same id. Reads are projections over the stored sequence
/// and reflect some prefix of completed appends.
#[async_trait]
pub trait ExpenseStore: Send + Sync {
    /// Append a new expense stamped with today's date and return its id.
    async fn append(&self, amount: f64, category: &str, description: &str) -> Result<i64>;

    /// Snapshot of all expenses in append order.
    async fn list_all(&self) -> Result<Vec<Expense>>;

    /// Sum of all expense amounts; 0.0 for an empty store.
    async fn total(&self) -> Result<f64> {
        // Explicit 0.0 identity: `Sum for f64` folds from -0.0, which would
        // make an empty store total -0.0 and print as "-0.00".
        Ok(self
            .list_all()
            .await?
            .iter()
            .fold(0.0, |acc, e| acc + e.amount))
    }
}

/// Today's date at calendar precision, as stored in the `date` column.
pub(crate) fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}
