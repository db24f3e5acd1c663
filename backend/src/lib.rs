//! # Unit Conversion Backend
//!
//! Unit-conversion library and REST service.
//!
//! A request names a value, a source unit and zero or more target units, each
//! of which may be a canonical symbol (`mm`) or an alias (`millimeter`). The
//! pipeline resolves every symbol through the catalog, rejects cross-category
//! requests before any numeric work, and converts through a dimensional
//! engine that handles affine temperature scales exactly.
//!
//! ## Architecture
//!
//! - [`catalog`]: canonical symbols, categories, display names and aliases
//! - [`resolver`]: raw token validation and category comparison
//! - [`engine`]: dimensional analysis, unit parsing and expression evaluation
//! - [`adapter`]: the narrow [`adapter::ConversionEngine`] interface over the engine
//! - [`services`]: conversion orchestration and catalog browsing
//! - [`api`]: DTOs shared with the HTTP layer
//! - [`config`]: server settings and custom unit definitions
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ```rust
//! use std::sync::Arc;
//! use unitconv::adapter::EngineAdapter;
//! use unitconv::catalog::UnitCatalog;
//! use unitconv::resolver::UnitResolver;
//! use unitconv::services::ConversionService;
//!
//! let catalog = Arc::new(UnitCatalog::builtin().unwrap());
//! let service = ConversionService::new(
//!     UnitResolver::new(catalog),
//!     Arc::new(EngineAdapter::builtin()),
//! );
//! let result = service.convert(0.0, "celsius", &["degF"]).unwrap();
//! assert_eq!(result.get("degF"), Some(32.0));
//! ```

pub mod adapter;
pub mod api;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod resolver;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;

pub use error::{ConversionError, ServiceResult};
