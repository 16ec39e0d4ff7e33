//! Total-expenses tool backed by the expense store.

use std::sync::Arc;

use async_trait::async_trait;
use ledger::ExpenseStore;
use tracing::debug;

use crate::error::ToolError;
use crate::tool::{ParamSpec, Tool, ToolArgs, ToolOutput};

/// Calculates the total of all logged expenses.
///
/// Takes no parameters. The result is formatted to two decimal places,
/// ready for substitution into the assistant's reply.
pub struct TotalExpenses {
    store: Arc<dyn ExpenseStore>,
}

impl TotalExpenses {
    /// Create a new total-expenses tool over the given store.
    pub fn new(store: Arc<dyn ExpenseStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for TotalExpenses {
    fn name(&self) -> &str {
        "calculate_total_expenses"
    }

    fn description(&self) -> &str {
        "Calculates total expenses from the transaction history."
    }

    fn params(&self) -> &[ParamSpec] {
        &[]
    }

    async fn execute(&self, _args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let total = self.store.total().await?;
        debug!("Total expenses: {:.2}", total);
        Ok(ToolOutput::success(format!("{:.2}", total)))
    }
}
