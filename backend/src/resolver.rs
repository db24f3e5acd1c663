//! Validation of raw user-supplied unit tokens.

use std::sync::Arc;

use crate::catalog::{UnitCatalog, UnitCategory};
use crate::error::ServiceResult;

/// A raw token resolved to its canonical symbol and category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedUnit {
    pub symbol: String,
    pub category: UnitCategory,
}

/// Resolves raw unit tokens against a shared catalog.
#[derive(Debug, Clone)]
pub struct UnitResolver {
    catalog: Arc<UnitCatalog>,
}

impl UnitResolver {
    pub fn new(catalog: Arc<UnitCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &UnitCatalog {
        &self.catalog
    }

    /// Resolve `raw` to `(canonical symbol, category)`.
    ///
    /// Surrounding whitespace is ignored; matching is otherwise case-sensitive
    /// (`mm` and `Mm` are different units).
    ///
    /// # Errors
    /// `UnknownUnit` naming the trimmed input when neither a canonical symbol
    /// nor an alias matches.
    pub fn resolve(&self, raw: &str) -> ServiceResult<ResolvedUnit> {
        let symbol = self.catalog.canonicalize(raw.trim())?;
        let category = self.catalog.category_of(symbol)?;
        Ok(ResolvedUnit {
            symbol: symbol.to_string(),
            category,
        })
    }

    /// Whether both tokens resolve and share a category.
    ///
    /// Unresolvable tokens are never comparable.
    pub fn same_category(&self, a: &str, b: &str) -> bool {
        match (self.resolve(a), self.resolve(b)) {
            (Ok(a), Ok(b)) => a.category == b.category,
            _ => false,
        }
    }
}
