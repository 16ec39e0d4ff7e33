//! Expense-logging tool backed by the expense store.

use std::sync::Arc;

use async_trait::async_trait;
use ledger::ExpenseStore;
use tracing::debug;

use crate::error::ToolError;
use crate::tool::{ParamSpec, Tool, ToolArgs, ToolOutput};

const PARAMS: &[ParamSpec] = &[
    ParamSpec::decimal("amount"),
    ParamSpec::text("category"),
    ParamSpec::text("description"),
];

/// Logs a new expense in the transaction history.
///
/// Validates its arguments before touching the store: a rejected call
/// leaves the ledger unmodified.
pub struct LogExpense {
    store: Arc<dyn ExpenseStore>,
}

impl LogExpense {
    /// Create a new expense-logging tool over the given store.
    pub fn new(store: Arc<dyn ExpenseStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for LogExpense {
    fn name(&self) -> &str {
        "log_expense"
    }

    fn description(&self) -> &str {
        "Logs a new expense in the transaction history."
    }

    fn params(&self) -> &[ParamSpec] {
        PARAMS
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let amount = args.get_decimal("amount")?;
        let category = args.get_text("category")?;
        let description = args.get_text("description")?;

        if !amount.is_finite() || amount < 0.0 {
            return Err(ToolError::InvalidParameter {
                name: "amount".to_string(),
                reason: "amount must be a non-negative finite number".to_string(),
            });
        }

        if category.trim().is_empty() {
            return Err(ToolError::InvalidParameter {
                name: "category".to_string(),
                reason: "category must not be empty".to_string(),
            });
        }

        let id = self.store.append(amount, category, description).await?;
        debug!("Logged expense #{}: {:.2} {} - {}", id, amount, category, description);

        Ok(ToolOutput::success(format!(
            "Logged expense: {:.2} USD - {} - {}",
            amount, category, description
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool::ArgValue;
    use ledger::MemoryLedger;
    use std::collections::HashMap;

    fn args(amount: f64, category: &str, description: &str) -> ToolArgs {
        let mut params = HashMap::new();
        params.insert("amount".to_string(), ArgValue::Decimal(amount));
        params.insert("category".to_string(), ArgValue::Text(category.to_string()));
        params.insert(
            "description".to_string(),
            ArgValue::Text(description.to_string()),
        );
        ToolArgs::new(params)
    }

    #[tokio::test]
    async fn test_log_expense_appends_and_confirms() {
        let store = Arc::new(MemoryLedger::new());
        let tool = LogExpense::new(store.clone());

        let result = tool.execute(args(50.0, "Food", "Groceries")).await.unwrap();
        assert!(result.success);
        assert_eq!(result.content, "Logged expense: 50.00 USD - Food - Groceries");

        let all = store.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].amount, 50.0);
    }

    #[tokio::test]
    async fn test_negative_amount_rejected_before_write() {
        let store = Arc::new(MemoryLedger::new());
        let tool = LogExpense::new(store.clone());

        let result = tool.execute(args(-5.0, "Food", "Groceries")).await;
        assert!(matches!(result, Err(ToolError::InvalidParameter { .. })));
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_non_finite_amount_rejected() {
        let store = Arc::new(MemoryLedger::new());
        let tool = LogExpense::new(store.clone());

        let result = tool.execute(args(f64::INFINITY, "Food", "Groceries")).await;
        assert!(matches!(result, Err(ToolError::InvalidParameter { .. })));
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_category_rejected() {
        let store = Arc::new(MemoryLedger::new());
        let tool = LogExpense::new(store.clone());

        let result = tool.execute(args(5.0, "  ", "Groceries")).await;
        assert!(matches!(result, Err(ToolError::InvalidParameter { .. })));
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_zero_amount_allowed() {
        let store = Arc::new(MemoryLedger::new());
        let tool = LogExpense::new(store.clone());

        let result = tool.execute(args(0.0, "Misc", "Freebie")).await.unwrap();
        assert_eq!(result.content, "Logged expense: 0.00 USD - Misc - Freebie");
    }
}
