//! Conversion Engine Adapter.
//!
//! Everything above this module talks to [`ConversionEngine`]; only
//! [`EngineAdapter`] knows about the concrete engine and its error type.

use crate::api::ExpressionResult;
use crate::engine::{EngineError, UnitRegistry};
use crate::error::{ConversionError, ServiceResult};

/// Numeric conversion backend.
///
/// Implementations must be stateless at request time so one instance can be
/// shared across threads.
pub trait ConversionEngine: Send + Sync {
    /// Convert `value` from one canonical unit to another.
    ///
    /// # Errors
    /// `IncompatibleUnits` on a dimensionality mismatch, `ConversionEngineError`
    /// for anything else the engine rejects.
    fn convert_one(&self, value: f64, from: &str, to: &str) -> ServiceResult<f64>;

    /// Evaluate a free-form expression such as `5 meters + 3 feet`.
    ///
    /// # Errors
    /// Every failure surfaces as `ExpressionError`.
    fn convert_expression(&self, expression: &str) -> ServiceResult<ExpressionResult>;

    /// Textual dimension of a unit, e.g. `[length] / [time]`.
    fn dimensionality(&self, unit: &str) -> ServiceResult<String>;
}

/// [`ConversionEngine`] backed by the in-crate [`UnitRegistry`].
#[derive(Debug, Clone)]
pub struct EngineAdapter {
    registry: UnitRegistry,
}

impl EngineAdapter {
    pub fn new(registry: UnitRegistry) -> Self {
        Self { registry }
    }

    pub fn builtin() -> Self {
        Self::new(UnitRegistry::builtin())
    }

    pub fn registry(&self) -> &UnitRegistry {
        &self.registry
    }
}

impl Default for EngineAdapter {
    fn default() -> Self {
        Self::builtin()
    }
}

fn conversion_error(err: EngineError) -> ConversionError {
    match err {
        EngineError::DimensionalityMismatch { from, to, .. } => {
            ConversionError::IncompatibleUnits { from, to }
        }
        other => ConversionError::ConversionEngineError {
            detail: other.to_string(),
        },
    }
}

impl ConversionEngine for EngineAdapter {
    fn convert_one(&self, value: f64, from: &str, to: &str) -> ServiceResult<f64> {
        self.registry
            .convert(value, from, to)
            .map_err(conversion_error)
    }

    fn convert_expression(&self, expression: &str) -> ServiceResult<ExpressionResult> {
        let quantity = self
            .registry
            .evaluate(expression)
            .map_err(|e| ConversionError::ExpressionError {
                message: e.to_string(),
            })?;
        Ok(ExpressionResult {
            value: quantity.value,
            unit: quantity.unit.to_string(),
        })
    }

    fn dimensionality(&self, unit: &str) -> ServiceResult<String> {
        self.registry
            .dimensionality(unit)
            .map(|d| d.to_string())
            .map_err(conversion_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::UnitCatalog;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_convert_one() {
        let engine = EngineAdapter::builtin();
        assert_abs_diff_eq!(engine.convert_one(205.0, "mm", "ft").unwrap(), 0.672572, epsilon = 1e-5);
        assert_eq!(engine.convert_one(0.0, "degC", "degF").unwrap(), 32.0);
    }

    #[test]
    fn test_error_mapping() {
        let engine = EngineAdapter::builtin();
        assert_eq!(
            engine.convert_one(1.0, "m", "s").unwrap_err(),
            ConversionError::IncompatibleUnits {
                from: "m".to_string(),
                to: "s".to_string()
            }
        );
        assert!(matches!(
            engine.convert_one(1.0, "m//", "m"),
            Err(ConversionError::ConversionEngineError { .. })
        ));
    }

    #[test]
    fn test_convert_expression() {
        let engine = EngineAdapter::builtin();
        let result = engine.convert_expression("5 meters + 3 feet").unwrap();
        assert_abs_diff_eq!(result.value, 5.9144, epsilon = 1e-9);
        assert_eq!(result.unit, "m");

        let result = engine.convert_expression("2 * 21").unwrap();
        assert_eq!(result.value, 42.0);
        assert_eq!(result.unit, "dimensionless");

        assert!(matches!(
            engine.convert_expression("5 m + 2 kg"),
            Err(ConversionError::ExpressionError { .. })
        ));
    }

    #[test]
    fn test_dimensionality_text() {
        let engine = EngineAdapter::builtin();
        assert_eq!(engine.dimensionality("km/h").unwrap(), "[length] / [time]");
        assert_eq!(engine.dimensionality("m/s2").unwrap(), "[length] / [time] ** 2");
    }

    #[test]
    fn test_every_catalog_unit_matches_its_category() {
        let engine = EngineAdapter::builtin();
        let catalog = UnitCatalog::builtin().unwrap();
        for symbol in catalog.all_units() {
            let category = catalog.category_of(symbol).unwrap();
            let reference = engine.dimensionality(category.reference_unit()).unwrap();
            assert_eq!(
                engine.dimensionality(symbol).unwrap(),
                reference,
                "{} should have the dimension of {}",
                symbol,
                category.reference_unit()
            );
        }
    }
}
