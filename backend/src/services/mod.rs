//! Service layer for business logic and orchestration.
//!
//! Services sit between the HTTP handlers and the catalog, resolver and engine
//! adapter. They are cheap to clone and hold only shared, immutable state.

pub mod catalog;
pub mod conversion;

pub use catalog::{CatalogService, CategoryUnits};
pub use conversion::ConversionService;
