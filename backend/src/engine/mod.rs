//! Dimensional-analysis engine.
//!
//! Parses unit expressions (`km/h`, `kg*m/s2`), tracks dimensions as exponent
//! vectors over the base quantities, converts values between compatible units
//! and evaluates arithmetic over quantities (`5 meters + 3 feet`).
//!
//! Nothing in here knows about categories or the catalog; callers go through
//! [`crate::adapter`], which translates [`EngineError`] into service errors.

pub mod dimension;
pub mod expression;
pub mod quantity;
pub mod registry;
pub mod units;

use thiserror::Error;

pub use dimension::Dimension;
pub use quantity::{CompoundUnit, Quantity};
pub use registry::UnitRegistry;

/// Failures raised by the engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("'{0}' is not defined in the unit registry")]
    UndefinedUnit(String),

    #[error("Cannot convert from '{from}' ({from_dimension}) to '{to}' ({to_dimension})")]
    DimensionalityMismatch {
        from: String,
        to: String,
        from_dimension: Dimension,
        to_dimension: Dimension,
    },

    #[error("{message} at position {position}")]
    Syntax { message: String, position: usize },

    #[error("ambiguous operation with offset unit: {0}")]
    OffsetUnitCalculus(String),

    #[error("numeric error: {0}")]
    Numeric(String),

    #[error("invalid definition for '{symbol}': {reason}")]
    InvalidDefinition { symbol: String, reason: String },

    #[error("not a unit: {0}")]
    NotAUnit(String),
}

pub type EngineResult<T> = Result<T, EngineError>;
