//! End-to-end test: a real listener serving the router, driven by the SDK.
//!
//! Only the local provider is exercised so no network access is needed.

use converter_client::{ClientError, ConverterClient};
use converter_hex::{ConverterService, ProviderRegistry, inbound::HttpServer};

/// Starts the server on an ephemeral port and returns its base URL.
async fn spawn_server() -> String {
    let registry = ProviderRegistry::builtin("http://127.0.0.1:1/latest?base={base}").unwrap();
    let router = HttpServer::new(ConverterService::new(registry)).router();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn test_health_and_providers() {
    let client = ConverterClient::new(spawn_server().await);

    assert!(client.health().await.unwrap());

    let providers = client.providers().await.unwrap();
    assert_eq!(providers.providers, vec!["fixerio", "local"]);
    assert_eq!(providers.default, "fixerio");
}

#[tokio::test]
async fn test_local_conversion_roundtrip() {
    let client = ConverterClient::new(spawn_server().await);

    let response = client.convert(10.0, "PLN", Some("local")).await.unwrap();

    assert_eq!(response.amount(), 10.0);
    assert_eq!(response.currency(), "PLN");
    assert_eq!(response.converted().get("USD"), Some(2.53));
    assert_eq!(response.converted().get("EUR"), Some(2.31));
}

#[tokio::test]
async fn test_local_conversion_xml() {
    let client = ConverterClient::new(spawn_server().await);

    let xml = client.convert_xml(10.0, "PLN", Some("local")).await.unwrap();

    assert!(xml.contains("<USD>2.53</USD>"));
    assert!(xml.contains("<EUR>2.31</EUR>"));
}

#[tokio::test]
async fn test_unreachable_upstream_is_server_error() {
    let client = ConverterClient::new(spawn_server().await);

    let err = client.convert(1.0, "USD", None).await.unwrap_err();

    assert!(matches!(err, ClientError::Api { status: 500, .. }));
}

#[tokio::test]
async fn test_unsupported_local_currency_is_client_error() {
    let client = ConverterClient::new(spawn_server().await);

    let err = client.convert(1.0, "ERR_CURRENCY", Some("local")).await.unwrap_err();

    assert!(matches!(
        err,
        ClientError::Api { status: 400, message } if message.contains("ERR_CURRENCY")
    ));
}
