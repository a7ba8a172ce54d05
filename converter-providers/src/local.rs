//! Offline provider backed by the embedded rate snapshots.

use async_trait::async_trait;
use tracing::{debug, instrument, warn};

use converter_types::{ProviderError, RateMap, RateProvider};
use exchange_rates::BaseCurrency;

/// Registry name of the local provider.
pub const LOCAL: &str = "local";

/// Converts using rates frozen at build time.
///
/// Supports only the bases in [`BaseCurrency`] (PLN, USD, EUR); codes are
/// matched case-insensitively.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalProvider;

#[async_trait]
impl RateProvider for LocalProvider {
    fn name(&self) -> &str {
        LOCAL
    }

    #[instrument(name = "LocalRates", skip(self))]
    async fn fetch_rates(&self, currency: &str) -> Result<RateMap, ProviderError> {
        let base: BaseCurrency = currency.parse().map_err(|_| {
            warn!("Currency {} not supported by local provider.", currency);
            ProviderError::UnsupportedCurrency(currency.to_string())
        })?;

        debug!(base = %base, date = base.date(), "Using embedded snapshot");
        Ok(base.rate_map())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLN_TIMES_TEN: &[(&str, f64)] = &[
        ("IDR", 32982.0),
        ("JPY", 265.65),
        ("ZAR", 34.31),
        ("BRL", 8.05),
        ("HRK", 17.35),
        ("MXN", 47.87),
        ("MYR", 10.62),
        ("NOK", 20.88),
        ("USD", 2.53),
        ("CNY", 17.14),
        ("HKD", 19.61),
        ("PHP", 122.61),
        ("RUB", 160.01),
        ("CHF", 2.5),
        ("NZD", 3.54),
        ("SEK", 22.79),
        ("EUR", 2.31),
        ("ILS", 9.74),
        ("GBP", 2.08),
        ("KRW", 2899.6),
        ("BGN", 4.52),
        ("CAD", 3.39),
        ("CZK", 62.44),
        ("DKK", 17.19),
        ("HUF", 712.69),
        ("INR", 168.89),
        ("AUD", 3.33),
        ("TRY", 7.85),
        ("SGD", 3.52),
        ("THB", 88.56),
        ("RON", 10.41),
    ];

    #[tokio::test]
    async fn test_convert_pln_snapshot() {
        let response = LocalProvider.convert(10.0, "PLN").await.unwrap();

        assert_eq!(response.amount(), 10.0);
        assert_eq!(response.currency(), "PLN");
        assert_eq!(response.converted().len(), PLN_TIMES_TEN.len());
        for (code, expected) in PLN_TIMES_TEN {
            assert_eq!(response.converted().get(code), Some(*expected), "{code}");
        }
    }

    #[tokio::test]
    async fn test_convert_is_case_insensitive_and_echoes_currency() {
        let response = LocalProvider.convert(10.0, "pln").await.unwrap();

        assert_eq!(response.currency(), "pln");
        assert_eq!(response.converted().get("USD"), Some(2.53));
        assert_eq!(response.converted().get("EUR"), Some(2.31));
    }

    #[tokio::test]
    async fn test_convert_other_bases() {
        let usd = LocalProvider.convert(100.0, "USD").await.unwrap();
        assert_eq!(usd.converted().get("PLN"), Some(395.38));

        let eur = LocalProvider.convert(1.0, "eur").await.unwrap();
        assert_eq!(eur.converted().get("USD"), Some(1.09));
    }

    #[tokio::test]
    async fn test_zero_amount() {
        let response = LocalProvider.convert(0.0, "EUR").await.unwrap();
        assert!(response.converted().iter().all(|(_, v)| *v == 0.0));
    }

    #[tokio::test]
    async fn test_unsupported_currency() {
        let err = LocalProvider.convert(10.0, "ERR_CURRENCY").await.unwrap_err();

        assert!(matches!(&err, ProviderError::UnsupportedCurrency(code) if code == "ERR_CURRENCY"));
        assert_eq!(
            err.to_string(),
            "Currency ERR_CURRENCY not supported by local provider."
        );
    }

    #[test]
    fn test_name() {
        assert_eq!(LocalProvider.name(), "local");
    }
}
