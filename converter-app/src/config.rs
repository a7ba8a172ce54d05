//! Configuration loading from environment.

use std::env;

/// Placeholder the fixer.io URL template must contain.
const BASE_PLACEHOLDER: &str = "{base}";

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_FIXER_URL: &str = "http://api.fixer.io/latest?base={base}";
const DEFAULT_RATE_LIMIT: u32 = 100;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// fixer.io endpoint with a `{base}` placeholder
    pub fixer_url: String,
    pub rate_limit_per_minute: u32,
    /// OTLP collector; trace export is off when unset
    pub otlp_endpoint: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port = match lookup("PORT") {
            Some(port) => port
                .parse()
                .map_err(|e| anyhow::anyhow!("PORT must be a port number, got '{}': {}", port, e))?,
            None => DEFAULT_PORT,
        };

        let fixer_url = lookup("FIXER_API_URL").unwrap_or_else(|| DEFAULT_FIXER_URL.to_string());
        if !fixer_url.contains(BASE_PLACEHOLDER) {
            anyhow::bail!("FIXER_API_URL must contain the {} placeholder", BASE_PLACEHOLDER);
        }

        let rate_limit_per_minute = match lookup("RATE_LIMIT_PER_MINUTE") {
            Some(limit) => limit.parse()?,
            None => DEFAULT_RATE_LIMIT,
        };

        let otlp_endpoint = lookup("OTEL_EXPORTER_OTLP_ENDPOINT").filter(|s| !s.is_empty());

        Ok(Self {
            port,
            fixer_url,
            rate_limit_per_minute,
            otlp_endpoint,
        })
    }
}
