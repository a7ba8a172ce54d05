//! Integration tests for the HTTP adapter.
//!
//! These drive the full router (rate limiting, negotiation, error mapping)
//! with the real providers; fixer.io is replaced by a wiremock server.

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use tower::ServiceExt;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use converter_hex::{ConverterService, ProviderRegistry, inbound::HttpServer};

const USD_RATES: &str = r#"{
    "base": "USD",
    "date": "2016-10-31",
    "rates": {"USD": 1.234, "PLN": 1.01, "EUR": 0.05, "SEK": 0.00055}
}"#;

/// Helper to create a router whose fixer.io provider points at `upstream`.
fn create_router(upstream: &MockServer, requests_per_minute: u32) -> axum::Router {
    let template = format!("{}/latest?base={{base}}", upstream.uri());
    let registry = ProviderRegistry::builtin(&template).unwrap();
    HttpServer::with_rate_limit(ConverterService::new(registry), requests_per_minute).router()
}

async fn mount_upstream(server: &MockServer, base: &str, status: u16, body: &str, calls: u64) {
    Mock::given(method("GET"))
        .and(path("/latest"))
        .and(query_param("base", base))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .expect(calls)
        .mount(server)
        .await;
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn get_xml(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::ACCEPT, "application/xml")
        .body(Body::empty())
        .unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    serde_json::from_str(&body_string(response).await).unwrap()
}

#[tokio::test]
async fn test_health() {
    let upstream = MockServer::start().await;
    let app = create_router(&upstream, 100);

    let response = app.oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "healthy");
}

#[tokio::test]
async fn test_convert_with_local_provider_json() {
    let upstream = MockServer::start().await;
    let app = create_router(&upstream, 100);

    let response = app
        .oneshot(get("/convert?amount=10&currency=PLN&provider=local"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["amount"], 10.0);
    assert_eq!(json["currency"], "PLN");
    assert_eq!(json["converted"]["USD"], 2.53);
    assert_eq!(json["converted"]["EUR"], 2.31);
    assert_eq!(json["converted"].as_object().unwrap().len(), 31);
}

#[tokio::test]
async fn test_convert_with_local_provider_xml() {
    let upstream = MockServer::start().await;
    let app = create_router(&upstream, 100);

    let response = app
        .oneshot(get_xml("/convert/?amount=10&currency=pln&provider=local"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/xml"
    );
    let xml = body_string(response).await;
    assert!(xml.contains("<ConverterResponse><amount>10</amount><currency>pln</currency><converted>"));
    assert!(xml.contains("<USD>2.53</USD>"));
    assert!(xml.contains("<KRW>2899.6</KRW>"));
    assert!(xml.ends_with("</converted></ConverterResponse>"));
}

#[tokio::test]
async fn test_convert_with_default_remote_provider() {
    let upstream = MockServer::start().await;
    mount_upstream(&upstream, "USD", 200, USD_RATES, 1).await;
    let app = create_router(&upstream, 100);

    let response = app
        .oneshot(get("/convert?amount=100&currency=USD"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["converted"]["USD"], 123.4);
    assert_eq!(json["converted"]["PLN"], 101.0);
    assert_eq!(json["converted"]["EUR"], 5.0);
    assert_eq!(json["converted"]["SEK"], 0.06);
}

#[tokio::test]
async fn test_unknown_provider_falls_back_to_remote() {
    let upstream = MockServer::start().await;
    mount_upstream(&upstream, "USD", 200, USD_RATES, 1).await;
    let app = create_router(&upstream, 100);

    let response = app
        .oneshot(get("/convert?amount=1&currency=USD&provider=nope"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_upstream_error_is_server_error() {
    let upstream = MockServer::start().await;
    mount_upstream(&upstream, "USD", 200, r#"{"error": "rate limited"}"#, 1).await;
    let app = create_router(&upstream, 100);

    let response = app
        .oneshot(get("/convert?amount=100&currency=USD"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["error"], "rate limited");
    assert_eq!(json["code"], 500);
}

#[tokio::test]
async fn test_unencodable_currency_code_is_server_error_for_xml() {
    let upstream = MockServer::start().await;
    mount_upstream(&upstream, "USD", 200, r#"{"rates": {"1 USD": 1.0}}"#, 1).await;
    let app = create_router(&upstream, 100);

    let response = app
        .oneshot(get_xml("/convert?amount=1&currency=USD"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("1 USD"));
}

#[tokio::test]
async fn test_invalid_amount_never_reaches_upstream() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(USD_RATES))
        .expect(0)
        .mount(&upstream)
        .await;
    let app = create_router(&upstream, 100);

    for uri in [
        "/convert?amount=-5&currency=USD",
        "/convert?amount=abc&currency=USD",
        "/convert?currency=USD",
    ] {
        let response = app.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
    }

    let response = app
        .oneshot(get("/convert?amount=-5&currency=USD"))
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json["error"], "Provided amount is invalid or empty: '-5'.");
}

#[tokio::test]
async fn test_missing_currency_is_bad_request() {
    let upstream = MockServer::start().await;
    let app = create_router(&upstream, 100);

    let response = app.oneshot(get("/convert?amount=10")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "Currency parameter can not be empty."
    );
}

#[tokio::test]
async fn test_local_unsupported_currency_is_bad_request() {
    let upstream = MockServer::start().await;
    let app = create_router(&upstream, 100);

    let response = app
        .oneshot(get("/convert?amount=10&currency=ERR_CURRENCY&provider=local"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "Currency ERR_CURRENCY not supported by local provider."
    );
}

#[tokio::test]
async fn test_list_providers() {
    let upstream = MockServer::start().await;
    let app = create_router(&upstream, 100);

    let response = app.oneshot(get("/providers")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({ "providers": ["fixerio", "local"], "default": "fixerio" })
    );
}

#[tokio::test]
async fn test_openapi_document() {
    let upstream = MockServer::start().await;
    let app = create_router(&upstream, 100);

    let response = app.oneshot(get("/api-docs/openapi.json")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["paths"]["/convert"].is_object());
}

#[tokio::test]
async fn test_rate_limiting_returns_429_when_exceeded() {
    let upstream = MockServer::start().await;
    let app = create_router(&upstream, 2);

    for i in 1..=2 {
        let response = app.clone().oneshot(get("/providers")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "request {i} should pass");
    }

    let response = app.clone().oneshot(get("/providers")).await.unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK, "health is never limited");
}

#[tokio::test]
async fn test_rate_limiting_is_per_client() {
    let upstream = MockServer::start().await;
    let app = create_router(&upstream, 1);

    let from = |client: &str| {
        Request::builder()
            .uri("/providers")
            .header("X-Forwarded-For", client)
            .body(Body::empty())
            .unwrap()
    };

    assert_eq!(app.clone().oneshot(from("10.0.0.1")).await.unwrap().status(), StatusCode::OK);
    assert_eq!(
        app.clone().oneshot(from("10.0.0.1")).await.unwrap().status(),
        StatusCode::TOO_MANY_REQUESTS
    );
    assert_eq!(app.oneshot(from("10.0.0.2")).await.unwrap().status(), StatusCode::OK);
}
