//! Conversion Application Service
//!
//! Validates request parameters, picks the provider and runs the conversion.
//! Contains NO infrastructure logic - pure orchestration over the provider port.

use std::fmt;
use std::sync::Arc;

use tracing::{info, warn};

use converter_types::{
    AppError, ConversionResponse, ConvertParams, ParamError, ProvidersResponse, RateProvider,
};

use crate::registry::ProviderRegistry;

/// A validated conversion request with its provider resolved.
pub struct ConversionQuery {
    /// Non-negative amount of money to convert
    pub amount: f64,
    /// Base currency, exactly as supplied
    pub currency: String,
    pub provider: Arc<dyn RateProvider>,
}

impl fmt::Debug for ConversionQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversionQuery")
            .field("amount", &self.amount)
            .field("currency", &self.currency)
            .field("provider", &self.provider.name())
            .finish()
    }
}

/// Converts an amount of money into every currency the selected provider
/// supports. The registry's default provider is used when the request names
/// none, or one that is not registered.
pub struct ConverterService {
    registry: ProviderRegistry,
}

impl ConverterService {
    /// Creates a new converter service over the given providers.
    pub fn new(registry: ProviderRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// Lists registered providers and the default one.
    pub fn providers(&self) -> ProvidersResponse {
        ProvidersResponse {
            providers: self.registry.names().into_iter().map(String::from).collect(),
            default: self.registry.default_provider().name().to_string(),
        }
    }

    /// Validates raw query parameters and resolves the provider.
    pub fn parse_parameters(&self, params: &ConvertParams) -> Result<ConversionQuery, ParamError> {
        let raw_amount = params.amount.as_deref().unwrap_or_default();
        let amount = match raw_amount.parse::<f64>() {
            Ok(amount) if amount.is_finite() && amount >= 0.0 => amount,
            _ => {
                warn!("Provided amount is invalid or empty: '{}'.", raw_amount);
                return Err(ParamError::InvalidAmount(raw_amount.to_string()));
            }
        };

        let currency = params.currency.as_deref().unwrap_or_default();
        if currency.is_empty() {
            warn!("Currency parameter can not be empty.");
            return Err(ParamError::MissingCurrency);
        }

        let requested = params.provider.as_deref().unwrap_or_default();
        let provider = match self.registry.resolve(requested) {
            Some(provider) => provider.clone(),
            None => {
                let provider = self.registry.default_provider().clone();
                warn!(
                    requested,
                    "Provider is either empty or invalid. Falling back to default provider: {}",
                    provider.name()
                );
                provider
            }
        };

        Ok(ConversionQuery {
            amount,
            currency: currency.to_string(),
            provider,
        })
    }

    /// Handles one conversion request end to end.
    ///
    /// Parameter problems are returned as `BadRequest` before any provider
    /// is called; provider failures keep their own classification.
    pub async fn handle(&self, params: &ConvertParams) -> Result<ConversionResponse, AppError> {
        let query = self.parse_parameters(params)?;

        info!(
            "{} provider - converting {:.2} {}",
            query.provider.name(),
            query.amount,
            query.currency
        );

        let response = query
            .provider
            .convert(query.amount, &query.currency)
            .await?;
        Ok(response)
    }
}
