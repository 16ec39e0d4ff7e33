//! Exchange-rate lookup tool.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::error::ToolError;
use crate::rates::RateProvider;
use crate::tool::{ParamSpec, Tool, ToolArgs, ToolOutput};

const PARAMS: &[ParamSpec] = &[
    ParamSpec::text("from_currency"),
    ParamSpec::text("to_currency"),
];

/// Fetches the current exchange rate between two currencies.
///
/// The only tool that leaves the process: the provider call is the single
/// suspension point in the tool set. The result is formatted to four
/// decimal places.
pub struct ExchangeRate {
    provider: Arc<dyn RateProvider>,
}

impl ExchangeRate {
    /// Create a new exchange-rate tool over the given provider.
    pub fn new(provider: Arc<dyn RateProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl Tool for ExchangeRate {
    fn name(&self) -> &str {
        "get_exchange_rate"
    }

    fn description(&self) -> &str {
        "Fetches the real-time exchange rate between two currencies."
    }

    fn params(&self) -> &[ParamSpec] {
        PARAMS
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let from = args.get_text("from_currency")?.to_uppercase();
        let to = args.get_text("to_currency")?.to_uppercase();

        debug!("Fetching exchange rate {} -> {}", from, to);

        let rates = self.provider.latest(&from).await?;
        let rate = rates
            .get(&to)
            .copied()
            .ok_or_else(|| ToolError::UnknownCurrency(to.clone()))?;

        Ok(ToolOutput::success(format!("{:.4}", rate)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rates::StaticRates;
    use crate::tool::ArgValue;
    use std::collections::HashMap;

    fn args(from: &str, to: &str) -> ToolArgs {
        let mut params = HashMap::new();
        params.insert("from_currency".to_string(), ArgValue::Text(from.to_string()));
        params.insert("to_currency".to_string(), ArgValue::Text(to.to_string()));
        ToolArgs::new(params)
    }

    #[tokio::test]
    async fn test_rate_formats_four_decimals() {
        let provider = Arc::new(StaticRates::new().with_rate("USD", "EUR", 0.85));
        let tool = ExchangeRate::new(provider);

        let result = tool.execute(args("USD", "EUR")).await.unwrap();
        assert!(result.success);
        assert_eq!(result.content, "0.8500");
    }

    #[tokio::test]
    async fn test_codes_are_uppercased() {
        let provider = Arc::new(StaticRates::new().with_rate("USD", "EUR", 0.85));
        let tool = ExchangeRate::new(provider);

        let result = tool.execute(args("usd", "eur")).await.unwrap();
        assert_eq!(result.content, "0.8500");
    }

    #[tokio::test]
    async fn test_unknown_target_currency() {
        let provider = Arc::new(StaticRates::new().with_rate("USD", "EUR", 0.85));
        let tool = ExchangeRate::new(provider);

        let result = tool.execute(args("USD", "XYZ")).await;
        assert!(matches!(result, Err(ToolError::UnknownCurrency(code)) if code == "XYZ"));
    }
}
