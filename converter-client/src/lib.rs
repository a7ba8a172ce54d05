//! # Converter Client SDK
//!
//! A typed Rust client for the Currency Converter API.

use converter_types::{ConversionResponse, ProvidersResponse};
use reqwest::{Client, header};
use serde::de::DeserializeOwned;

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Converter API client.
pub struct ConverterClient {
    base_url: String,
    http: Client,
}

impl ConverterClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    /// Lists the registered providers.
    pub async fn providers(&self) -> Result<ProvidersResponse, ClientError> {
        let resp = self
            .http
            .get(format!("{}/providers", self.base_url))
            .send()
            .await?;
        self.handle_json(resp).await
    }

    /// Converts `amount` of `currency`, optionally with a named provider.
    pub async fn convert(
        &self,
        amount: f64,
        currency: &str,
        provider: Option<&str>,
    ) -> Result<ConversionResponse, ClientError> {
        let resp = self
            .convert_request(amount, currency, provider, "application/json")
            .await?;
        self.handle_json(resp).await
    }

    /// Same as [`ConverterClient::convert`] but returns the raw XML document.
    pub async fn convert_xml(
        &self,
        amount: f64,
        currency: &str,
        provider: Option<&str>,
    ) -> Result<String, ClientError> {
        let resp = self
            .convert_request(amount, currency, provider, "application/xml")
            .await?;
        let resp = Self::check_status(resp).await?;
        Ok(resp.text().await?)
    }

    async fn convert_request(
        &self,
        amount: f64,
        currency: &str,
        provider: Option<&str>,
        accept: &str,
    ) -> Result<reqwest::Response, ClientError> {
        let mut query = vec![
            ("amount", amount.to_string()),
            ("currency", currency.to_string()),
        ];
        if let Some(provider) = provider {
            query.push(("provider", provider.to_string()));
        }

        Ok(self
            .http
            .get(format!("{}/convert", self.base_url))
            .header(header::ACCEPT, accept)
            .query(&query)
            .send()
            .await?)
    }

    async fn handle_json<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let resp = Self::check_status(resp).await?;
        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let body = resp.text().await.unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
            .unwrap_or(body);
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}
