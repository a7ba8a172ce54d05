//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use converter_types::{ConversionResponse, ConvertParams, ConvertedRates, ProvidersResponse};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// List registered rate providers
#[utoipa::path(
    get,
    path = "/providers",
    tag = "providers",
    responses(
        (status = 200, description = "Registered providers in lookup order", body = ProvidersResponse)
    )
)]
async fn list_providers() {}

/// Convert an amount of money into other currencies
///
/// Send `Accept: application/xml` to receive the XML encoding, where every
/// converted currency code becomes its own element inside `<converted>`.
#[utoipa::path(
    get,
    path = "/convert",
    tag = "conversion",
    params(ConvertParams),
    responses(
        (status = 200, description = "Converted amounts", content(
            (ConversionResponse = "application/json"),
            (ConversionResponse = "application/xml")
        )),
        (status = 400, description = "Invalid amount, missing currency, or currency unsupported by the provider"),
        (status = 429, description = "Rate limit exceeded"),
        (status = 500, description = "Rate provider failed")
    )
)]
async fn convert() {}

/// OpenAPI documentation for the Converter API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Currency Converter API",
        version = "1.0.0",
        description = "Converts an amount of money into a set of other currencies using a pluggable rate provider.\n\n## Providers\n\n- `fixerio` (default) - live rates from fixer.io\n- `local` - embedded snapshot for PLN, USD and EUR\n\nUnknown provider names fall back to the default.",
        license(name = "MIT"),
    ),
    paths(health, list_providers, convert),
    components(schemas(ConversionResponse, ConvertedRates, ProvidersResponse)),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "providers", description = "Rate provider discovery"),
        (name = "conversion", description = "Currency conversion"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_paths() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/convert"));
        assert!(doc.paths.paths.contains_key("/providers"));
        assert!(doc.paths.paths.contains_key("/health"));
    }
}
