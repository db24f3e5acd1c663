//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the service
//! layer for business logic.

use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::{debug, warn};

use super::dto::{
    CategoryUnits, ConversionRequest, ConvertResponse, ExpressionRequest, ExpressionResult,
    HealthResponse, UnitInfo,
};
use super::error::AppError;
use super::state::AppState;
use crate::catalog::UnitCategory;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// =============================================================================
// Conversion
// =============================================================================

/// POST /api/convert
///
/// Convert a value into the requested units, or into every other unit of the
/// source category when `to_units` is omitted or empty.
pub async fn convert(
    State(state): State<AppState>,
    Json(request): Json<ConversionRequest>,
) -> HandlerResult<ConvertResponse> {
    debug!(
        value = request.value,
        from = %request.from_unit,
        targets = request.to_units.as_ref().map_or(0, Vec::len),
        "convert request"
    );

    let result = state.conversion.convert_request(&request).map_err(|e| {
        warn!(error = %e, from = %request.from_unit, "conversion rejected");
        AppError::from(e)
    })?;

    Ok(Json(result.into()))
}

/// POST /api/expression
///
/// Evaluate a free-form expression such as `5 meters + 3 feet`.
pub async fn evaluate_expression(
    State(state): State<AppState>,
    Json(request): Json<ExpressionRequest>,
) -> HandlerResult<ExpressionResult> {
    debug!(expression = %request.expression, "expression request");

    let result = state
        .conversion
        .convert_expression(&request.expression)
        .map_err(|e| {
            warn!(error = %e, "expression rejected");
            AppError::from(e)
        })?;

    Ok(Json(result))
}

// =============================================================================
// Catalog Browsing
// =============================================================================

/// GET /api/categories
pub async fn list_categories(State(state): State<AppState>) -> Json<Vec<&'static str>> {
    Json(state.catalog.categories())
}

/// GET /api/units
///
/// Every non-empty category with its units, keyed by category then symbol.
pub async fn list_units(
    State(state): State<AppState>,
) -> HandlerResult<BTreeMap<UnitCategory, CategoryUnits>> {
    let listing = state
        .catalog
        .all_units()
        .map_err(|e| AppError::Internal(e.to_string()))?;
    Ok(Json(listing))
}

/// GET /api/units/{category}
pub async fn units_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> HandlerResult<CategoryUnits> {
    let units = state
        .catalog
        .units_for_category(&category)
        .map_err(AppError::lookup)?;
    Ok(Json(units))
}

/// GET /api/unit/{symbol}
///
/// Accepts aliases. Symbols containing `/` must be percent-encoded
/// (`/api/unit/km%2Fh`).
pub async fn get_unit(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> HandlerResult<UnitInfo> {
    let info = state.catalog.unit_info(&symbol).map_err(AppError::lookup)?;
    Ok(Json(info))
}
