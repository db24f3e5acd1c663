//! Conversion Service: one conversion request end to end.

use std::sync::Arc;

use crate::adapter::ConversionEngine;
use crate::api::{ConversionRequest, ConversionResult, Conversions, ExpressionResult};
use crate::error::{ConversionError, ServiceResult};
use crate::resolver::UnitResolver;

/// Orchestrates resolution, category checks and engine calls.
///
/// Requests are all-or-nothing: the first invalid target aborts the request
/// and no partial result is returned.
#[derive(Clone)]
pub struct ConversionService {
    resolver: UnitResolver,
    engine: Arc<dyn ConversionEngine>,
}

impl ConversionService {
    pub fn new(resolver: UnitResolver, engine: Arc<dyn ConversionEngine>) -> Self {
        Self { resolver, engine }
    }

    pub fn resolver(&self) -> &UnitResolver {
        &self.resolver
    }

    pub fn engine(&self) -> &dyn ConversionEngine {
        self.engine.as_ref()
    }

    /// Convert `value` from `raw_from` into each of `raw_to`.
    ///
    /// An empty target list means every other unit of the source category, in
    /// alphabetical order. Explicit targets keep the order they were given in;
    /// a target listed twice appears once, at its first position.
    ///
    /// # Errors
    /// - `UnknownUnit` naming the first unresolvable symbol.
    /// - `IncompatibleCategories` naming both categories, raised before the
    ///   engine is called for that target.
    /// - `IncompatibleUnits` / `ConversionEngineError` from the engine.
    pub fn convert<S: AsRef<str>>(
        &self,
        value: f64,
        raw_from: &str,
        raw_to: &[S],
    ) -> ServiceResult<ConversionResult> {
        let from = self.resolver.resolve(raw_from)?;

        let targets: Vec<String> = if raw_to.is_empty() {
            self.resolver
                .catalog()
                .units_in_category(from.category)
                .into_iter()
                .filter(|symbol| *symbol != from.symbol)
                .map(str::to_string)
                .collect()
        } else {
            raw_to.iter().map(|s| s.as_ref().to_string()).collect()
        };

        let mut conversions = Conversions::with_capacity(targets.len());
        for raw in &targets {
            let target = self.resolver.resolve(raw)?;
            if !self.resolver.same_category(&from.symbol, &target.symbol) {
                return Err(ConversionError::IncompatibleCategories {
                    from: from.category,
                    to: target.category,
                });
            }
            if conversions.contains(&target.symbol) {
                continue;
            }
            let converted = self.engine.convert_one(value, &from.symbol, &target.symbol)?;
            conversions.insert(target.symbol, converted);
        }

        Ok(ConversionResult {
            original_value: value,
            original_unit: from.symbol,
            conversions,
        })
    }

    /// [`ConversionService::convert`] driven by a request DTO.
    pub fn convert_request(&self, request: &ConversionRequest) -> ServiceResult<ConversionResult> {
        let targets = request.to_units.as_deref().unwrap_or(&[]);
        self.convert(request.value, &request.from_unit, targets)
    }

    /// Evaluate a free-form expression; failures surface as `ExpressionError`.
    pub fn convert_expression(&self, expression: &str) -> ServiceResult<ExpressionResult> {
        if expression.trim().is_empty() {
            return Err(ConversionError::ExpressionError {
                message: "expression is empty".to_string(),
            });
        }
        self.engine.convert_expression(expression)
    }
}
