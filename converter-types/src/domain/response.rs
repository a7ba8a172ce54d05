//! The conversion response returned by every provider.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::rates::ConvertedRates;

/// Amount, base currency, and the converted amounts in each target currency.
///
/// Built once per request and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ConversionResponse {
    /// Amount of money the conversion was calculated for
    #[schema(example = 10.0)]
    amount: f64,
    /// Base currency as supplied by the caller
    #[schema(example = "PLN")]
    currency: String,
    /// Converted amounts keyed by target currency code
    #[schema(example = json!({"USD": 2.53, "EUR": 2.31}))]
    converted: ConvertedRates,
}

impl ConversionResponse {
    pub fn new(amount: f64, currency: impl Into<String>, converted: ConvertedRates) -> Self {
        Self {
            amount,
            currency: currency.into(),
            converted,
        }
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn converted(&self) -> &ConvertedRates {
        &self.converted
    }
}
