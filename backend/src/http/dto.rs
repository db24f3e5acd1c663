//! Data Transfer Objects for the HTTP API.
//!
//! Core DTOs are re-exported from [`crate::api`]; this module only adds the
//! envelopes that exist purely for the wire format.

use serde::{Deserialize, Serialize};

pub use crate::api::{ConversionRequest, ConversionResult, ExpressionResult, UnitInfo};
pub use crate::services::CategoryUnits;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Response for `POST /api/convert`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertResponse {
    /// Always `true`; failures use the error body instead.
    pub success: bool,
    #[serde(flatten)]
    pub result: ConversionResult,
}

impl From<ConversionResult> for ConvertResponse {
    fn from(result: ConversionResult) -> Self {
        Self {
            success: true,
            result,
        }
    }
}

/// Request body for `POST /api/expression`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpressionRequest {
    pub expression: String,
}
