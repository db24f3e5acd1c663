//! Compound units and quantities.

use std::fmt;

use super::dimension::Dimension;
use super::units::Affine;
use super::{EngineError, EngineResult};

/// Largest power a unit factor may carry, in either direction.
pub const MAX_EXPONENT: i32 = 64;

/// A single unit raised to an integer power, e.g. `s` in `m/s2`.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitFactor {
    pub symbol: String,
    pub exponent: i32,
    /// Scale of the unit to the first power.
    pub scale: f64,
    /// Dimension of the unit to the first power.
    pub dimension: Dimension,
    pub affine: Option<Affine>,
}

impl UnitFactor {
    fn has_offset(&self) -> bool {
        self.affine.is_some_and(|a| a.has_offset())
    }
}

/// Product of unit factors, e.g. `kg*m/s2`.
///
/// An empty product is a plain number.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompoundUnit {
    factors: Vec<UnitFactor>,
    dimension: Dimension,
}

impl CompoundUnit {
    pub fn unitless() -> Self {
        Self::default()
    }

    pub fn from_factor(factor: UnitFactor) -> EngineResult<Self> {
        Self::from_factors(vec![factor])
    }

    fn from_factors(factors: Vec<UnitFactor>) -> EngineResult<Self> {
        let factors: Vec<UnitFactor> = factors.into_iter().filter(|f| f.exponent != 0).collect();
        if let Some(f) = factors
            .iter()
            .find(|f| f.exponent.unsigned_abs() > MAX_EXPONENT.unsigned_abs())
        {
            return Err(exponent_out_of_range(&f.symbol));
        }
        let dimension = factors
            .iter()
            .try_fold(Dimension::DIMENSIONLESS, |d, f| {
                d.checked_mul(f.dimension.checked_powi(f.exponent)?)
            })
            .ok_or_else(|| EngineError::Numeric("dimension exponent overflow".to_string()))?;
        let unit = Self { factors, dimension };
        // Offset scales are only meaningful on their own.
        let offset_in_product = unit.factors.iter().any(UnitFactor::has_offset)
            && (unit.factors.len() > 1 || unit.factors[0].exponent != 1);
        if offset_in_product {
            return Err(EngineError::OffsetUnitCalculus(unit.to_string()));
        }
        Ok(unit)
    }

    pub fn factors(&self) -> &[UnitFactor] {
        &self.factors
    }

    pub fn is_unitless(&self) -> bool {
        self.factors.is_empty()
    }

    pub fn scale(&self) -> f64 {
        self.factors
            .iter()
            .map(|f| f.scale.powi(f.exponent))
            .product()
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Affine map to kelvin when this unit is a bare temperature scale.
    pub fn affine(&self) -> Option<Affine> {
        match self.factors.as_slice() {
            [factor] if factor.exponent == 1 => factor.affine,
            _ => None,
        }
    }

    pub fn has_offset(&self) -> bool {
        self.affine().is_some_and(|a| a.has_offset())
    }

    pub fn multiply(&self, other: &CompoundUnit) -> EngineResult<CompoundUnit> {
        let mut factors = self.factors.clone();
        for factor in &other.factors {
            match factors.iter_mut().find(|f| f.symbol == factor.symbol) {
                Some(existing) => {
                    existing.exponent = existing
                        .exponent
                        .checked_add(factor.exponent)
                        .ok_or_else(|| exponent_out_of_range(&factor.symbol))?;
                }
                None => factors.push(factor.clone()),
            }
        }
        Self::from_factors(factors)
    }

    pub fn divide(&self, other: &CompoundUnit) -> EngineResult<CompoundUnit> {
        self.multiply(&other.powi(-1)?)
    }

    pub fn powi(&self, n: i32) -> EngineResult<CompoundUnit> {
        let factors = self
            .factors
            .iter()
            .map(|f| {
                let exponent = f
                    .exponent
                    .checked_mul(n)
                    .ok_or_else(|| exponent_out_of_range(&f.symbol))?;
                Ok(UnitFactor {
                    exponent,
                    ..f.clone()
                })
            })
            .collect::<EngineResult<Vec<_>>>()?;
        Self::from_factors(factors)
    }

    /// Convert `value` expressed in `self` into `target`.
    pub fn convert_value(&self, value: f64, target: &CompoundUnit) -> EngineResult<f64> {
        if self.dimension() != target.dimension() {
            return Err(EngineError::DimensionalityMismatch {
                from: self.to_string(),
                to: target.to_string(),
                from_dimension: self.dimension(),
                to_dimension: target.dimension(),
            });
        }
        let converted = match (self.affine(), target.affine()) {
            (Some(from), Some(to)) => {
                let (m, c) = from.to(&to);
                value * m + c
            }
            _ => value * self.scale() / target.scale(),
        };
        finite(converted)
    }
}

impl fmt::Display for CompoundUnit {
    /// Formats as `kg*m/s2`; exponents are written as trailing digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.factors.is_empty() {
            return f.write_str("dimensionless");
        }
        let term = |symbol: &str, power: u32| {
            if power == 1 {
                symbol.to_string()
            } else {
                format!("{}{}", symbol, power)
            }
        };
        let numerator: Vec<String> = self
            .factors
            .iter()
            .filter(|x| x.exponent > 0)
            .map(|x| term(&x.symbol, x.exponent.unsigned_abs()))
            .collect();
        let mut out = if numerator.is_empty() {
            "1".to_string()
        } else {
            numerator.join("*")
        };
        for x in self.factors.iter().filter(|x| x.exponent < 0) {
            out.push('/');
            out.push_str(&term(&x.symbol, x.exponent.unsigned_abs()));
        }
        f.write_str(&out)
    }
}

/// A magnitude with a unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity {
    pub value: f64,
    pub unit: CompoundUnit,
}

impl Quantity {
    pub fn number(value: f64) -> Self {
        Self {
            value,
            unit: CompoundUnit::unitless(),
        }
    }

    pub fn new(value: f64, unit: CompoundUnit) -> Self {
        Self { value, unit }
    }

    pub fn is_number(&self) -> bool {
        self.unit.is_unitless()
    }

    pub fn multiply(self, rhs: Quantity) -> EngineResult<Quantity> {
        // Scaling a temperature by a plain number keeps the scale (`-40 degC`).
        let unit = if rhs.is_number() {
            self.unit
        } else if self.is_number() {
            rhs.unit
        } else {
            self.unit.multiply(&rhs.unit)?
        };
        Ok(Quantity::new(finite(self.value * rhs.value)?, unit))
    }

    pub fn divide(self, rhs: Quantity) -> EngineResult<Quantity> {
        if rhs.value == 0.0 {
            return Err(EngineError::Numeric("division by zero".to_string()));
        }
        let unit = if rhs.is_number() {
            self.unit
        } else {
            self.unit.divide(&rhs.unit)?
        };
        Ok(Quantity::new(finite(self.value / rhs.value)?, unit))
    }

    /// Sum expressed in the unit of the left operand.
    pub fn add(self, rhs: Quantity) -> EngineResult<Quantity> {
        let rhs_value = self.additive_operand(&rhs, "+")?;
        Ok(Quantity::new(finite(self.value + rhs_value)?, self.unit))
    }

    /// Difference expressed in the unit of the left operand.
    pub fn subtract(self, rhs: Quantity) -> EngineResult<Quantity> {
        let rhs_value = self.additive_operand(&rhs, "-")?;
        Ok(Quantity::new(finite(self.value - rhs_value)?, self.unit))
    }

    fn additive_operand(&self, rhs: &Quantity, op: &str) -> EngineResult<f64> {
        if self.unit.has_offset() || rhs.unit.has_offset() {
            return Err(EngineError::OffsetUnitCalculus(format!(
                "{} {} {}",
                self.unit, op, rhs.unit
            )));
        }
        rhs.unit.convert_value(rhs.value, &self.unit)
    }

    pub fn negate(self) -> Quantity {
        Quantity::new(-self.value, self.unit)
    }

    /// Raise to a power. Quantities with units only accept integer exponents.
    pub fn pow(self, exponent: f64) -> EngineResult<Quantity> {
        if self.is_number() {
            return Ok(Quantity::number(finite(self.value.powf(exponent))?));
        }
        if exponent.fract() != 0.0 {
            return Err(EngineError::Numeric(format!(
                "cannot raise '{}' to non-integer power {}",
                self.unit, exponent
            )));
        }
        if exponent.abs() > f64::from(MAX_EXPONENT) {
            return Err(EngineError::Numeric(format!(
                "power {} of '{}' is outside -{max}..={max}",
                exponent,
                self.unit,
                max = MAX_EXPONENT
            )));
        }
        let n = exponent as i32;
        if n == 1 {
            return Ok(self);
        }
        let unit = self.unit.powi(n)?;
        Ok(Quantity::new(finite(self.value.powi(n))?, unit))
    }

    pub fn convert_to(&self, target: &CompoundUnit) -> EngineResult<Quantity> {
        let value = self.unit.convert_value(self.value, target)?;
        Ok(Quantity::new(value, target.clone()))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_number() {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{} {}", self.value, self.unit)
        }
    }
}

fn exponent_out_of_range(symbol: &str) -> EngineError {
    EngineError::Numeric(format!(
        "exponent of '{}' is outside -{max}..={max}",
        symbol,
        max = MAX_EXPONENT
    ))
}

fn finite(value: f64) -> EngineResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EngineError::Numeric(format!("result is not finite ({})", value)))
    }
}
