//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::ConversionError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Rejected conversion or expression input (400)
    Conversion(ConversionError),
    /// Catalog lookup miss (404)
    NotFound(ConversionError),
    /// Internal server error
    Internal(String),
}

impl AppError {
    /// Treat a lookup failure as 404 instead of 400.
    pub fn lookup(err: ConversionError) -> Self {
        match err {
            ConversionError::UnknownUnit { .. } | ConversionError::UnknownCategory { .. } => {
                AppError::NotFound(err)
            }
            other => AppError::Internal(other.to_string()),
        }
    }
}

fn conversion_body(err: &ConversionError) -> ApiError {
    let error = ApiError::new(err.code(), err.to_string());
    match err {
        ConversionError::UnknownUnit { symbol } => error.with_details(symbol.clone()),
        ConversionError::IncompatibleCategories { from, to } => {
            error.with_details(format!("{} -> {}", from, to))
        }
        ConversionError::UnknownCategory { name } => error.with_details(name.clone()),
        _ => error,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::Conversion(e) => (StatusCode::BAD_REQUEST, conversion_body(&e)),
            AppError::NotFound(e) => (StatusCode::NOT_FOUND, conversion_body(&e)),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("INTERNAL_ERROR", msg),
            ),
        };

        (status, Json(error)).into_response()
    }
}

impl From<ConversionError> for AppError {
    fn from(err: ConversionError) -> Self {
        AppError::Conversion(err)
    }
}
