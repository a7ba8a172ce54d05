//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};

use converter_types::{AppError, ConvertParams, markup};

use super::negotiate::ResponseFormat;
use crate::ConverterService;
use crate::openapi::ApiDoc;

/// Application state shared across handlers.
pub struct AppState {
    pub service: ConverterService,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = serde_json::json!({
            "error": message,
            "code": status.as_u16()
        });

        (status, Json(body)).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// List registered providers.
#[tracing::instrument(skip(state))]
pub async fn list_providers(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.service.providers())
}

/// Convert an amount into every currency the chosen provider supports.
#[tracing::instrument(skip(state, headers))]
pub async fn convert(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ConvertParams>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let format = ResponseFormat::from_accept(
        headers
            .get(header::ACCEPT)
            .and_then(|value| value.to_str().ok()),
    );

    let response = state.service.handle(&params).await?;

    match format {
        ResponseFormat::Json => Ok(Json(response).into_response()),
        ResponseFormat::Xml => {
            let body =
                markup::to_xml(&response).map_err(|e| AppError::Internal(e.to_string()))?;
            Ok(([(header::CONTENT_TYPE, format.content_type())], body).into_response())
        }
    }
}

/// OpenAPI document.
pub async fn openapi_json() -> impl IntoResponse {
    use utoipa::OpenApi;
    Json(ApiDoc::openapi())
}
