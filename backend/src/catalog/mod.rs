//! Unit catalog and alias table.
//!
//! The catalog maps every canonical unit symbol to exactly one [`UnitCategory`]
//! and an optional display name. Alternate spellings are kept in a separate
//! alias table so that canonicalization always happens before listing or
//! deduplication, and a unit can never be listed under two names.
//!
//! A catalog is assembled once through [`CatalogBuilder`], validated, and is
//! read-only afterwards.
//!
//! ```rust
//! use unitconv::catalog::{UnitCatalog, UnitCategory};
//!
//! let catalog = UnitCatalog::builtin().unwrap();
//! assert_eq!(catalog.canonicalize("meter").unwrap(), "m");
//! assert_eq!(catalog.category_of("ft").unwrap(), UnitCategory::Length);
//! ```

mod category;
pub mod data;

pub use category::UnitCategory;

use std::collections::{BTreeMap, HashMap};

use crate::error::{ConversionError, ServiceResult};

/// Errors raised while assembling a catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Unit '{0}' is registered more than once")]
    DuplicateUnit(String),

    #[error("Alias '{0}' is registered more than once")]
    DuplicateAlias(String),

    /// An alias would shadow a canonical symbol.
    #[error("Alias '{0}' collides with a canonical unit symbol")]
    AliasShadowsUnit(String),

    #[error("Alias '{alias}' points to unknown unit '{target}'")]
    DanglingAlias { alias: String, target: String },

    #[error("Unit symbol must not be empty")]
    EmptySymbol,
}

/// One canonical catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub symbol: String,
    pub category: UnitCategory,
    pub display_name: Option<String>,
}

/// Accumulates units and aliases, then validates them into a [`UnitCatalog`].
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    units: Vec<CatalogEntry>,
    aliases: Vec<(String, String)>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder preloaded with the builtin tables from [`data`].
    pub fn with_builtins() -> Self {
        let mut builder = Self::new();
        for (symbol, category, name) in data::UNITS {
            builder = builder.unit(*symbol, *category, Some(*name));
        }
        for (alias, target) in data::ALIASES {
            builder = builder.alias(*alias, *target);
        }
        builder
    }

    /// Register a canonical unit.
    pub fn unit(
        mut self,
        symbol: impl Into<String>,
        category: UnitCategory,
        display_name: Option<&str>,
    ) -> Self {
        self.units.push(CatalogEntry {
            symbol: symbol.into(),
            category,
            display_name: display_name.map(str::to_string),
        });
        self
    }

    /// Register an alternate spelling for a canonical unit.
    pub fn alias(mut self, alias: impl Into<String>, canonical: impl Into<String>) -> Self {
        self.aliases.push((alias.into(), canonical.into()));
        self
    }

    /// Validate and freeze the catalog.
    ///
    /// # Errors
    /// Fails on duplicate units or aliases, on aliases that collide with a
    /// canonical symbol, and on aliases pointing at unregistered units.
    pub fn build(self) -> Result<UnitCatalog, CatalogError> {
        let mut units = BTreeMap::new();
        for entry in self.units {
            if entry.symbol.is_empty() {
                return Err(CatalogError::EmptySymbol);
            }
            if units.contains_key(&entry.symbol) {
                return Err(CatalogError::DuplicateUnit(entry.symbol));
            }
            units.insert(entry.symbol.clone(), entry);
        }

        let mut aliases = HashMap::new();
        for (alias, target) in self.aliases {
            if alias.is_empty() {
                return Err(CatalogError::EmptySymbol);
            }
            if units.contains_key(&alias) {
                return Err(CatalogError::AliasShadowsUnit(alias));
            }
            if !units.contains_key(&target) {
                return Err(CatalogError::DanglingAlias { alias, target });
            }
            if aliases.contains_key(&alias) {
                return Err(CatalogError::DuplicateAlias(alias));
            }
            aliases.insert(alias, target);
        }

        Ok(UnitCatalog { units, aliases })
    }
}

/// Immutable canonical-symbol catalog with alias resolution.
#[derive(Debug, Clone)]
pub struct UnitCatalog {
    units: BTreeMap<String, CatalogEntry>,
    aliases: HashMap<String, String>,
}

impl UnitCatalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    /// The builtin catalog.
    pub fn builtin() -> Result<Self, CatalogError> {
        CatalogBuilder::with_builtins().build()
    }

    /// Resolve an alias to its canonical symbol; canonical symbols are returned unchanged.
    pub fn canonicalize<'a>(&'a self, symbol: &str) -> ServiceResult<&'a str> {
        if let Some((key, _)) = self.units.get_key_value(symbol) {
            return Ok(key.as_str());
        }
        self.aliases
            .get(symbol)
            .map(String::as_str)
            .ok_or_else(|| ConversionError::unknown_unit(symbol))
    }

    /// Category of a canonical symbol or alias.
    pub fn category_of(&self, symbol: &str) -> ServiceResult<UnitCategory> {
        let canonical = self.canonicalize(symbol)?;
        Ok(self.units[canonical].category)
    }

    /// Canonical symbols of one category, sorted alphabetically.
    pub fn units_in_category(&self, category: UnitCategory) -> Vec<&str> {
        // BTreeMap iteration is already sorted and keys are unique.
        self.units
            .values()
            .filter(|entry| entry.category == category)
            .map(|entry| entry.symbol.as_str())
            .collect()
    }

    /// Every canonical symbol, sorted alphabetically.
    pub fn all_units(&self) -> Vec<&str> {
        self.units.keys().map(String::as_str).collect()
    }

    /// Human readable name, falling back to the symbol itself.
    pub fn display_name<'a>(&'a self, symbol: &'a str) -> &'a str {
        self.canonicalize(symbol)
            .ok()
            .and_then(|canonical| self.units[canonical].display_name.as_deref())
            .unwrap_or(symbol)
    }

    /// Aliases registered for a canonical symbol, sorted.
    pub fn aliases_of(&self, canonical: &str) -> Vec<&str> {
        let mut aliases: Vec<&str> = self
            .aliases
            .iter()
            .filter(|(_, target)| target.as_str() == canonical)
            .map(|(alias, _)| alias.as_str())
            .collect();
        aliases.sort_unstable();
        aliases
    }

    /// Categories in declaration order.
    pub fn categories(&self) -> &'static [UnitCategory] {
        &UnitCategory::ALL
    }

    pub fn entry(&self, canonical: &str) -> Option<&CatalogEntry> {
        self.units.get(canonical)
    }

    pub fn is_canonical(&self, symbol: &str) -> bool {
        self.units.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Iterate over `(alias, canonical)` pairs.
    pub fn aliases(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases.iter().map(|(a, c)| (a.as_str(), c.as_str()))
    }
}
