//! In-memory expense store.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::Result;
use crate::models::Expense;
use crate::store::{today, ExpenseStore};

/// In-memory expense store.
///
/// Useful for tests and offline runs; same contract as [`crate::SqliteLedger`]
/// without the database.
#[derive(Debug, Default)]
pub struct MemoryLedger {
    entries: RwLock<Vec<Expense>>,
    next_id: AtomicI64,
}

impl MemoryLedger {
    /// Create an empty in-memory ledger.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(0),
        }
    }

    /// Create a ledger pre-filled with the demo transactions (total 170.00).
    pub fn seeded() -> Self {
        let entries = vec![
            Expense {
                id: 1,
                date: "2025-03-01".to_string(),
                amount: 50.0,
                category: "Food".to_string(),
                description: "Groceries".to_string(),
            },
            Expense {
                id: 2,
                date: "2025-03-02".to_string(),
                amount: 20.0,
                category: "Transport".to_string(),
                description: "Bus fare".to_string(),
            },
            Expense {
                id: 3,
                date: "2025-03-03".to_string(),
                amount: 100.0,
                category: "Entertainment".to_string(),
                description: "Movie tickets".to_string(),
            },
        ];
        Self {
            next_id: AtomicI64::new(entries.len() as i64),
            entries: RwLock::new(entries),
        }
    }
}

#[async_trait]
impl ExpenseStore for MemoryLedger {
    async fn append(&self, amount: f64, category: &str, description: &str) -> Result<i64> {
        let mut entries = self.entries.write().await;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        entries.push(Expense {
            id,
            date: today(),
            amount,
            category: category.to_string(),
            description: description.to_string(),
        });
        Ok(id)
    }

    async fn list_all(&self) -> Result<Vec<Expense>> {
        Ok(self.entries.read().await.clone())
    }
}
