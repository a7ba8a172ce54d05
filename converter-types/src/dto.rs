//! Data Transfer Objects (DTOs) for requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Query parameters of a conversion request, as received.
///
/// Kept as raw strings so that validation can report the offending value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ConvertParams {
    /// Non-negative amount to convert
    #[param(example = "10")]
    pub amount: Option<String>,
    /// Base currency code
    #[param(example = "PLN")]
    pub currency: Option<String>,
    /// Provider name; unknown or missing names fall back to the default provider
    #[param(example = "local")]
    pub provider: Option<String>,
}

/// Registered providers in lookup order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProvidersResponse {
    /// Provider names
    #[schema(example = json!(["fixerio", "local"]))]
    pub providers: Vec<String>,
    /// Provider used when none or an unknown one is requested
    #[schema(example = "fixerio")]
    pub default: String,
}
