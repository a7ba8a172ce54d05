//! Rate provider port.
//!
//! This trait defines the interface for sources of exchange rates.
//! Implementations can be HTTP clients, embedded tables, mocks, etc.

use crate::domain::{ConversionResponse, RateMap, scale_rates};

/// Error type for rate provider operations.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The provider has no rates for the requested base currency.
    #[error("Currency {0} not supported by local provider.")]
    UnsupportedCurrency(String),

    /// The upstream service could not be reached or its body not decoded.
    #[error("{0}")]
    Transport(String),

    /// The upstream service answered with an explicit error payload.
    #[error("{0}")]
    Upstream(String),
}

/// Port trait for rate providers.
///
/// Implementors only supply the rate acquisition step; scaling and rounding
/// are shared by every provider through the provided [`RateProvider::convert`].
#[async_trait::async_trait]
pub trait RateProvider: Send + Sync {
    /// Name the provider is registered and selected under.
    fn name(&self) -> &str;

    /// Returns a freshly built map of rates relative to `currency`.
    async fn fetch_rates(&self, currency: &str) -> Result<RateMap, ProviderError>;

    /// Converts `amount` of `currency` into every currency the provider knows.
    async fn convert(
        &self,
        amount: f64,
        currency: &str,
    ) -> Result<ConversionResponse, ProviderError> {
        let rates = self.fetch_rates(currency).await?;
        Ok(ConversionResponse::new(
            amount,
            currency,
            scale_rates(rates, amount),
        ))
    }
}
