//! Error types for the converter service.

use crate::ports::ProviderError;

/// Request parameter errors (the caller's fault).
#[derive(Debug, thiserror::Error)]
pub enum ParamError {
    #[error("Provided amount is invalid or empty: '{0}'.")]
    InvalidAmount(String),

    #[error("Currency parameter can not be empty.")]
    MissingCurrency,
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ParamError> for AppError {
    fn from(err: ParamError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::UnsupportedCurrency(_) => AppError::BadRequest(err.to_string()),
            ProviderError::Transport(_) | ProviderError::Upstream(_) => {
                AppError::Internal(err.to_string())
            }
        }
    }
}
