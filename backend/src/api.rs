//! Public API surface for the conversion library.
//!
//! Data Transfer Objects shared by the services and the HTTP layer. All types
//! derive or implement Serialize/Deserialize for JSON.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Request to convert one value into one or more target units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub value: f64,
    pub from_unit: String,
    /// Absent or empty means every other unit of the source category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_units: Option<Vec<String>>,
}

/// Converted values keyed by canonical symbol, in insertion order.
///
/// Serialized as a JSON object whose key order follows insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Conversions(Vec<(String, f64)>);

impl Conversions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Insert or overwrite; an overwritten entry keeps its original position.
    pub fn insert(&mut self, symbol: impl Into<String>, value: f64) {
        let symbol = symbol.into();
        match self.0.iter_mut().find(|(s, _)| *s == symbol) {
            Some(entry) => entry.1 = value,
            None => self.0.push((symbol, value)),
        }
    }

    pub fn get(&self, symbol: &str) -> Option<f64> {
        self.0.iter().find(|(s, _)| s == symbol).map(|(_, v)| *v)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.get(symbol).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(s, _)| s.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(s, v)| (s.as_str(), *v))
    }
}

impl FromIterator<(String, f64)> for Conversions {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        let mut conversions = Conversions::new();
        for (symbol, value) in iter {
            conversions.insert(symbol, value);
        }
        conversions
    }
}

impl Serialize for Conversions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (symbol, value) in &self.0 {
            map.serialize_entry(symbol, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Conversions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ConversionsVisitor;

        impl<'de> Visitor<'de> for ConversionsVisitor {
            type Value = Conversions;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of unit symbols to numbers")
            }

            fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> Result<Conversions, M::Error> {
                let mut conversions = Conversions::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((symbol, value)) = access.next_entry::<String, f64>()? {
                    conversions.insert(symbol, value);
                }
                Ok(conversions)
            }
        }

        deserializer.deserialize_map(ConversionsVisitor)
    }
}

/// Outcome of a successful conversion request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub original_value: f64,
    /// Canonical symbol of the source unit.
    pub original_unit: String,
    pub conversions: Conversions,
}

impl ConversionResult {
    pub fn new(original_value: f64, original_unit: impl Into<String>) -> Self {
        Self {
            original_value,
            original_unit: original_unit.into(),
            conversions: Conversions::new(),
        }
    }

    /// Converted value for one target, if present.
    pub fn get(&self, symbol: &str) -> Option<f64> {
        self.conversions.get(symbol)
    }
}

impl fmt::Display for ConversionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Original: {} {}", self.original_value, self.original_unit)?;
        write!(f, "Conversions:")?;
        for (symbol, value) in self.conversions.iter() {
            write!(f, "\n  {:.6} {}", value, symbol)?;
        }
        Ok(())
    }
}

/// Result of evaluating a free-form expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpressionResult {
    pub value: f64,
    /// Formatted unit of the result, `dimensionless` for plain numbers.
    pub unit: String,
}

/// Catalog description of one canonical unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitInfo {
    pub symbol: String,
    pub name: String,
    pub category: String,
    /// Textual dimension, e.g. `[length] / [time]`.
    pub dimensionality: String,
    pub aliases: Vec<String>,
}
