//! Live rates from the fixer.io API.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use converter_types::{ProviderError, RateMap, RateProvider};

use crate::http::get_json;

/// Registry name of the fixer.io provider.
pub const FIXER_IO: &str = "fixerio";

/// Upstream endpoint; `{base}` is replaced with the requested currency.
pub const DEFAULT_URL_TEMPLATE: &str = "http://api.fixer.io/latest?base={base}";

const BASE_PLACEHOLDER: &str = "{base}";

/// Body returned by fixer.io: either an error or base, date and rates.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FixerResponse {
    error: Option<FixerError>,
    base: String,
    date: String,
    rates: RateMap,
}

/// Error payload; older API versions send a string, newer ones an object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FixerError {
    Message(String),
    Detailed {
        #[serde(default)]
        code: Option<i64>,
        #[serde(default, rename = "type")]
        kind: Option<String>,
        #[serde(default)]
        info: Option<String>,
    },
}

impl FixerError {
    /// Message to surface, or `None` when the payload carries no error.
    fn into_message(self) -> Option<String> {
        match self {
            FixerError::Message(msg) if msg.is_empty() => None,
            FixerError::Message(msg) => Some(msg),
            FixerError::Detailed { code, kind, info } => Some(
                info.or(kind)
                    .or_else(|| code.map(|c| format!("fixer.io error code {}", c)))
                    .unwrap_or_else(|| "unknown fixer.io error".to_string()),
            ),
        }
    }
}

/// Provider querying fixer.io on every call; nothing is cached.
#[derive(Debug, Clone)]
pub struct FixerIoProvider {
    url_template: String,
    client: reqwest::Client,
}

impl FixerIoProvider {
    /// Creates a provider pointing at the public fixer.io endpoint.
    pub fn new() -> Self {
        Self::with_url_template(DEFAULT_URL_TEMPLATE)
    }

    /// Creates a provider with a custom URL template containing `{base}`.
    pub fn with_url_template(url_template: impl Into<String>) -> Self {
        Self {
            url_template: url_template.into(),
            client: reqwest::Client::new(),
        }
    }

    pub fn url_template(&self) -> &str {
        &self.url_template
    }

    fn request_url(&self, currency: &str) -> String {
        self.url_template.replace(BASE_PLACEHOLDER, currency)
    }
}

impl Default for FixerIoProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RateProvider for FixerIoProvider {
    fn name(&self) -> &str {
        FIXER_IO
    }

    #[instrument(name = "FixerRatesFetch", skip(self))]
    async fn fetch_rates(&self, currency: &str) -> Result<RateMap, ProviderError> {
        let url = self.request_url(currency);
        debug!("Requesting rates from {}", url);

        let body: FixerResponse = get_json(&self.client, &url).await.map_err(|e| {
            warn!("Error during request to fixer.io: {}", e);
            ProviderError::Transport(e.to_string())
        })?;

        if let Some(message) = body.error.and_then(FixerError::into_message) {
            warn!("Fixer.io returned error: {}", message);
            return Err(ProviderError::Upstream(message));
        }

        debug!(base = %body.base, date = %body.date, count = body.rates.len(), "Received rates");
        Ok(body.rates)
    }
}
