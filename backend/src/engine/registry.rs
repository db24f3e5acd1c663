//! Runtime unit registry.

use std::collections::HashMap;

use super::dimension::Dimension;
use super::expression::Evaluator;
use super::quantity::{CompoundUnit, Quantity, UnitFactor};
use super::units::{builtin_units, UnitDef, PREFIXES};
use super::{EngineError, EngineResult};

/// Name-indexed collection of unit definitions.
///
/// Accepts symbols (`ft`), names and plurals (`foot`, `feet`), SI prefixes on
/// prefixable units (`km`, `kilometers`, `mL`) and exponent suffixes (`m3`,
/// `s2`, `m²`). The registry is populated up front and only read afterwards,
/// so a shared reference can serve any number of threads.
#[derive(Debug, Clone, Default)]
pub struct UnitRegistry {
    units: Vec<UnitDef>,
    by_name: HashMap<String, usize>,
}

impl UnitRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry loaded with the builtin unit table.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for def in builtin_units() {
            registry.insert(def);
        }
        registry
    }

    fn insert(&mut self, def: UnitDef) {
        let index = self.units.len();
        self.by_name.insert(def.symbol.clone(), index);
        for name in &def.names {
            self.by_name.insert(name.clone(), index);
        }
        self.units.push(def);
    }

    /// Register a unit from a definition expression such as `"201.168 m"`.
    ///
    /// # Errors
    /// Fails if the symbol or any alias is already taken, or if the definition
    /// does not evaluate to a linear quantity.
    pub fn define(&mut self, symbol: &str, definition: &str, aliases: &[String]) -> EngineResult<()> {
        let invalid = |reason: String| EngineError::InvalidDefinition {
            symbol: symbol.to_string(),
            reason,
        };

        if symbol.is_empty() || !symbol.chars().all(|c| c.is_alphanumeric() || c == '_') {
            return Err(invalid("symbol must be alphanumeric".to_string()));
        }
        for name in std::iter::once(symbol).chain(aliases.iter().map(String::as_str)) {
            if self.lookup(name).is_some() {
                return Err(invalid(format!("'{}' is already defined", name)));
            }
        }

        let quantity = self.evaluate(definition).map_err(|e| invalid(e.to_string()))?;
        if quantity.unit.has_offset() {
            return Err(invalid("offset units cannot be used in definitions".to_string()));
        }
        let scale = quantity.value * quantity.unit.scale();
        if scale <= 0.0 {
            return Err(invalid("scale must be positive".to_string()));
        }

        let names: Vec<&str> = aliases.iter().map(String::as_str).collect();
        self.insert(UnitDef::linear(
            symbol,
            &names,
            scale,
            quantity.unit.dimension(),
        ));
        Ok(())
    }

    /// Whether `name` resolves to a unit.
    pub fn contains(&self, name: &str) -> bool {
        self.resolve_name(name).is_ok()
    }

    /// Number of base definitions (not counting prefixed forms).
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Parse a unit expression such as `km/h` or `kg*m/s2`.
    pub fn parse_unit(&self, text: &str) -> EngineResult<CompoundUnit> {
        Evaluator::new(self, text)?.evaluate_unit()
    }

    /// Evaluate a free-form expression such as `5 meters + 3 feet`.
    pub fn evaluate(&self, expression: &str) -> EngineResult<Quantity> {
        Evaluator::new(self, expression)?.evaluate()
    }

    /// Convert `value` from one unit expression to another.
    pub fn convert(&self, value: f64, from: &str, to: &str) -> EngineResult<f64> {
        let from = self.parse_unit(from)?;
        let to = self.parse_unit(to)?;
        from.convert_value(value, &to)
    }

    pub fn dimensionality(&self, unit: &str) -> EngineResult<Dimension> {
        Ok(self.parse_unit(unit)?.dimension())
    }

    /// Resolve a single identifier, including any exponent suffix.
    pub(crate) fn resolve_name(&self, name: &str) -> EngineResult<CompoundUnit> {
        if let Some(factor) = self.lookup(name) {
            return CompoundUnit::from_factor(factor);
        }
        if let Some((base, exponent)) = split_exponent(name) {
            if let Some(factor) = self.lookup(base) {
                return CompoundUnit::from_factor(factor)?.powi(exponent);
            }
        }
        Err(EngineError::UndefinedUnit(name.to_string()))
    }

    /// Resolve a name to a first-power factor, trying prefixes after exact names.
    fn lookup(&self, name: &str) -> Option<UnitFactor> {
        if let Some(&index) = self.by_name.get(name) {
            let def = &self.units[index];
            return Some(factor(def.symbol.clone(), def, 1.0));
        }
        for (short, long, multiplier) in PREFIXES {
            for prefix in [*short, *long] {
                let Some(rest) = name.strip_prefix(prefix) else {
                    continue;
                };
                if rest.is_empty() {
                    continue;
                }
                if let Some(&index) = self.by_name.get(rest) {
                    let def = &self.units[index];
                    if def.prefixable {
                        let short = if *short == "µ" { "u" } else { *short };
                        return Some(factor(format!("{}{}", short, def.symbol), def, *multiplier));
                    }
                }
            }
        }
        None
    }
}

fn factor(symbol: String, def: &UnitDef, multiplier: f64) -> UnitFactor {
    UnitFactor {
        symbol,
        exponent: 1,
        scale: multiplier * def.scale,
        dimension: def.dimension,
        affine: def.affine,
    }
}

/// Split `m3` into `("m", 3)` and `m²` into `("m", 2)`.
fn split_exponent(name: &str) -> Option<(&str, i32)> {
    if let Some(base) = name.strip_suffix('²') {
        return Some((base, 2));
    }
    if let Some(base) = name.strip_suffix('³') {
        return Some((base, 3));
    }
    let base = name.trim_end_matches(|c: char| c.is_ascii_digit());
    if base.is_empty() || base.len() == name.len() {
        return None;
    }
    let exponent = name[base.len()..].parse().ok()?;
    Some((base, exponent))
}
