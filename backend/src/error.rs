//! Error types for conversion operations.
//!
//! Every failure is deterministic for a given input, so none of these errors is
//! retryable. Each variant carries the structured detail (offending symbol, both
//! categories, engine message) a boundary layer needs to build a message.

use crate::catalog::UnitCategory;

/// Result type for catalog, resolver and conversion operations.
pub type ServiceResult<T> = Result<T, ConversionError>;

/// Error type for the conversion pipeline.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    /// Input does not resolve through the catalog or the alias table.
    #[error("Unknown unit: {symbol}")]
    UnknownUnit { symbol: String },

    /// Both units are valid but belong to different categories.
    #[error("Cannot convert {from} to {to}")]
    IncompatibleCategories {
        from: UnitCategory,
        to: UnitCategory,
    },

    /// The engine reported a dimensionality mismatch.
    #[error("Incompatible units: cannot convert '{from}' to '{to}'")]
    IncompatibleUnits { from: String, to: String },

    /// The engine rejected the operation for any other reason.
    #[error("Conversion engine error: {detail}")]
    ConversionEngineError { detail: String },

    /// Free-form expression evaluation failed.
    #[error("Expression error: {message}")]
    ExpressionError { message: String },

    #[error("Category '{name}' not found")]
    UnknownCategory { name: String },
}

impl ConversionError {
    pub fn unknown_unit(symbol: impl Into<String>) -> Self {
        Self::UnknownUnit {
            symbol: symbol.into(),
        }
    }

    /// Stable machine-readable code for the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            ConversionError::UnknownUnit { .. } => "UNKNOWN_UNIT",
            ConversionError::IncompatibleCategories { .. } => "INCOMPATIBLE_CATEGORIES",
            ConversionError::IncompatibleUnits { .. } => "INCOMPATIBLE_UNITS",
            ConversionError::ConversionEngineError { .. } => "CONVERSION_ENGINE_ERROR",
            ConversionError::ExpressionError { .. } => "EXPRESSION_ERROR",
            ConversionError::UnknownCategory { .. } => "UNKNOWN_CATEGORY",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_input() {
        let err = ConversionError::unknown_unit("not_a_unit");
        assert_eq!(err.to_string(), "Unknown unit: not_a_unit");

        let err = ConversionError::IncompatibleCategories {
            from: UnitCategory::Length,
            to: UnitCategory::Temperature,
        };
        assert_eq!(err.to_string(), "Cannot convert length to temperature");
    }

    #[test]
    fn test_codes_are_distinct() {
        let errors = [
            ConversionError::unknown_unit("x"),
            ConversionError::IncompatibleCategories {
                from: UnitCategory::Mass,
                to: UnitCategory::Time,
            },
            ConversionError::IncompatibleUnits {
                from: "m".into(),
                to: "s".into(),
            },
            ConversionError::ConversionEngineError { detail: "x".into() },
            ConversionError::ExpressionError { message: "x".into() },
            ConversionError::UnknownCategory { name: "x".into() },
        ];
        let codes: std::collections::HashSet<_> = errors.iter().map(|e| e.code()).collect();
        assert_eq!(codes.len(), errors.len());
    }
}
