//! Exchange-rate providers.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::error::ToolError;

/// Response from the exchangerate-api.com latest-rates endpoint.
#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    rates: HashMap<String, f64>,
}

/// Source of currency exchange rates.
///
/// `latest` returns the full rate table for a base currency; callers
/// extract the code they need.
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Fetch the latest rates for the given base currency.
    async fn latest(&self, base: &str) -> Result<HashMap<String, f64>, ToolError>;
}

/// Live rate provider using the exchangerate-api.com v4 API.
///
/// Free API, no key required.
pub struct ExchangeRateApi {
    client: reqwest::Client,
    base_url: String,
}

impl ExchangeRateApi {
    /// Create a provider against the public API.
    pub fn new() -> Self {
        Self::with_base_url("https://api.exchangerate-api.com")
    }

    /// Create a provider against a custom endpoint (e.g., a local stub).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("FinanceAssistant/1.0")
                .timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.into(),
        }
    }
}

impl Default for ExchangeRateApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RateProvider for ExchangeRateApi {
    async fn latest(&self, base: &str) -> Result<HashMap<String, f64>, ToolError> {
        let url = format!("{}/v4/latest/{}", self.base_url, base);

        debug!("Fetching exchange rates from: {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(ToolError::ExecutionFailed(format!(
                "Exchange rate API returned status {}",
                response.status()
            )));
        }

        let data: LatestRatesResponse = response.json().await?;
        Ok(data.rates)
    }
}

/// Fixed-table rate provider for tests and offline runs.
#[derive(Debug, Clone, Default)]
pub struct StaticRates {
    tables: HashMap<String, HashMap<String, f64>>,
}

impl StaticRates {
    /// Create an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rate for a base/target currency pair.
    pub fn with_rate(mut self, base: &str, target: &str, rate: f64) -> Self {
        self.tables
            .entry(base.to_uppercase())
            .or_default()
            .insert(target.to_uppercase(), rate);
        self
    }
}

#[async_trait]
impl RateProvider for StaticRates {
    async fn latest(&self, base: &str) -> Result<HashMap<String, f64>, ToolError> {
        self.tables
            .get(&base.to_uppercase())
            .cloned()
            .ok_or_else(|| {
                ToolError::ExecutionFailed(format!("No rate table for base currency {}", base))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_rates_lookup() {
        let rates = StaticRates::new()
            .with_rate("USD", "EUR", 0.85)
            .with_rate("USD", "GBP", 0.74);

        let table = rates.latest("usd").await.unwrap();
        assert_eq!(table.get("EUR"), Some(&0.85));
        assert_eq!(table.get("GBP"), Some(&0.74));
    }

    #[tokio::test]
    async fn test_static_rates_missing_base() {
        let rates = StaticRates::new();
        assert!(matches!(
            rates.latest("USD").await,
            Err(ToolError::ExecutionFailed(_))
        ));
    }

    #[tokio::test]
    #[ignore] // Requires network
    async fn test_live_rates_usd() {
        let provider = ExchangeRateApi::new();
        let table = provider.latest("USD").await.unwrap();
        assert!(table.contains_key("EUR"));
    }
}
