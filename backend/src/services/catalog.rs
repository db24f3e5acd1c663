//! Read-only catalog browsing backing the `/api/units` family of endpoints.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::adapter::ConversionEngine;
use crate::api::UnitInfo;
use crate::catalog::{UnitCatalog, UnitCategory};
use crate::error::{ConversionError, ServiceResult};

/// Units of one category keyed by canonical symbol.
pub type CategoryUnits = BTreeMap<String, UnitInfo>;

/// Catalog listings enriched with engine dimensionality.
#[derive(Clone)]
pub struct CatalogService {
    catalog: Arc<UnitCatalog>,
    engine: Arc<dyn ConversionEngine>,
}

impl CatalogService {
    pub fn new(catalog: Arc<UnitCatalog>, engine: Arc<dyn ConversionEngine>) -> Self {
        Self { catalog, engine }
    }

    /// Category names in declaration order.
    pub fn categories(&self) -> Vec<&'static str> {
        self.catalog
            .categories()
            .iter()
            .map(UnitCategory::as_str)
            .collect()
    }

    /// Describe one unit; aliases are accepted.
    pub fn unit_info(&self, raw: &str) -> ServiceResult<UnitInfo> {
        let symbol = self.catalog.canonicalize(raw.trim())?;
        let category = self.catalog.category_of(symbol)?;
        Ok(UnitInfo {
            symbol: symbol.to_string(),
            name: self.catalog.display_name(symbol).to_string(),
            category: category.as_str().to_string(),
            dimensionality: self.engine.dimensionality(symbol)?,
            aliases: self
                .catalog
                .aliases_of(symbol)
                .into_iter()
                .map(str::to_string)
                .collect(),
        })
    }

    pub fn units_in(&self, category: UnitCategory) -> ServiceResult<CategoryUnits> {
        self.catalog
            .units_in_category(category)
            .into_iter()
            .map(|symbol| Ok((symbol.to_string(), self.unit_info(symbol)?)))
            .collect()
    }

    /// Units of a category given by wire name (`"length"`).
    ///
    /// # Errors
    /// `UnknownCategory` when the name matches no category.
    pub fn units_for_category(&self, name: &str) -> ServiceResult<CategoryUnits> {
        let category = name
            .parse::<UnitCategory>()
            .map_err(|_| ConversionError::UnknownCategory {
                name: name.to_string(),
            })?;
        self.units_in(category)
    }

    /// Every non-empty category with its units.
    pub fn all_units(&self) -> ServiceResult<BTreeMap<UnitCategory, CategoryUnits>> {
        let mut listing = BTreeMap::new();
        for category in self.catalog.categories() {
            let units = self.units_in(*category)?;
            if !units.is_empty() {
                listing.insert(*category, units);
            }
        }
        Ok(listing)
    }
}
