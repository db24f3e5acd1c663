//! Server configuration.
//!
//! Settings come from an optional TOML file named by `UNITCONV_CONFIG`, then
//! from the `HOST` and `PORT` environment variables, which take precedence.
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 5000
//!
//! [[custom_units]]
//! symbol = "furlong"
//! definition = "201.168 m"
//! category = "length"
//! aliases = ["furlongs"]
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::Path;

use crate::catalog::{CatalogBuilder, CatalogError, UnitCatalog, UnitCategory};
use crate::engine::UnitRegistry;

/// Environment variable holding the path of the TOML config file.
pub const CONFIG_PATH_ENV: &str = "UNITCONV_CONFIG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(String),

    #[error("Failed to parse config file: {0}")]
    Parse(String),

    #[error("{name} has an invalid value: {value}")]
    InvalidEnv { name: String, value: String },

    #[error("Invalid bind address: {0}")]
    InvalidAddress(String),

    #[error("Invalid custom unit '{symbol}': {reason}")]
    CustomUnit { symbol: String, reason: String },

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// A unit registered at start-up in addition to the builtin tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomUnitConfig {
    pub symbol: String,
    /// Engine expression, e.g. `"201.168 m"`.
    pub definition: String,
    pub category: UnitCategory,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub aliases: Vec<String>,
}

/// `[server]` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_cors_allow_any")]
    pub cors_allow_any: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_allow_any: default_cors_allow_any(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_cors_allow_any() -> bool {
    true
}

/// Layout of the TOML config file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub custom_units: Vec<CustomUnitConfig>,
}

impl FileConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::Read(format!("{}: {}", path.as_ref().display(), e)))?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Effective server configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_allow_any: bool,
    pub custom_units: Vec<CustomUnitConfig>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        FileConfig::default().into()
    }
}

impl From<FileConfig> for ServerConfig {
    fn from(file: FileConfig) -> Self {
        Self {
            host: file.server.host,
            port: file.server.port,
            cors_allow_any: file.server.cors_allow_any,
            custom_units: file.custom_units,
        }
    }
}

impl ServerConfig {
    /// Configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config: ServerConfig = match lookup(CONFIG_PATH_ENV) {
            Some(path) if !path.is_empty() => FileConfig::from_file(path)?.into(),
            _ => ServerConfig::default(),
        };

        if let Some(host) = lookup("HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("PORT") {
            config.port = port.parse().map_err(|_| ConfigError::InvalidEnv {
                name: "PORT".to_string(),
                value: port,
            })?;
        }
        Ok(config)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse().map_err(|_| ConfigError::InvalidAddress(addr))
    }

    /// Build the catalog and engine registry including the custom units.
    pub fn load_units(&self) -> Result<(UnitCatalog, UnitRegistry), ConfigError> {
        load_units(&self.custom_units)
    }
}

/// Builtin catalog and registry extended with `custom_units`.
///
/// Each custom unit is defined in the engine first, then checked against the
/// dimensionality of its category's reference unit before it is added to the
/// catalog.
pub fn load_units(
    custom_units: &[CustomUnitConfig],
) -> Result<(UnitCatalog, UnitRegistry), ConfigError> {
    let mut registry = UnitRegistry::builtin();
    let mut builder = CatalogBuilder::with_builtins();

    for unit in custom_units {
        let invalid = |reason: String| ConfigError::CustomUnit {
            symbol: unit.symbol.clone(),
            reason,
        };

        registry
            .define(&unit.symbol, &unit.definition, &unit.aliases)
            .map_err(|e| invalid(e.to_string()))?;

        let actual = registry
            .dimensionality(&unit.symbol)
            .map_err(|e| invalid(e.to_string()))?;
        let expected = registry
            .dimensionality(unit.category.reference_unit())
            .map_err(|e| invalid(e.to_string()))?;
        if actual != expected {
            return Err(invalid(format!(
                "dimensionality {} does not match category {} ({})",
                actual, unit.category, expected
            )));
        }

        builder = builder.unit(&unit.symbol, unit.category, unit.display_name.as_deref());
        for alias in &unit.aliases {
            builder = builder.alias(alias, &unit.symbol);
        }
    }

    Ok((builder.build()?, registry))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    fn furlong() -> CustomUnitConfig {
        CustomUnitConfig {
            symbol: "furlong".to_string(),
            definition: "201.168 m".to_string(),
            category: UnitCategory::Length,
            display_name: Some("furlong".to_string()),
            aliases: vec!["furlongs".to_string()],
        }
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5000);
        assert!(config.cors_allow_any);
        assert!(config.custom_units.is_empty());
        assert_eq!(config.socket_addr().unwrap().port(), 5000);
    }

    #[test]
    fn test_env_overrides() {
        let config =
            ServerConfig::from_lookup(lookup(&[("HOST", "127.0.0.1"), ("PORT", "8081")])).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8081);
    }

    #[test]
    fn test_invalid_port() {
        let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { .. }));
    }

    #[test]
    fn test_invalid_host() {
        let config = ServerConfig::from_lookup(lookup(&[("HOST", "not a host")])).unwrap();
        assert!(matches!(config.socket_addr(), Err(ConfigError::InvalidAddress(_))));
    }

    #[test]
    fn test_parse_toml() {
        let config = FileConfig::from_toml(
            r#"
            [server]
            port = 9000

            [[custom_units]]
            symbol = "furlong"
            definition = "201.168 m"
            category = "length"
            aliases = ["furlongs"]
            "#,
        )
        .unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.custom_units.len(), 1);
        assert_eq!(config.custom_units[0].category, UnitCategory::Length);
        assert_eq!(config.custom_units[0].display_name, None);
    }

    #[test]
    fn test_parse_toml_rejects_unknown_category() {
        let err = FileConfig::from_toml(
            r#"
            [[custom_units]]
            symbol = "x"
            definition = "1 m"
            category = "speed"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_custom_units() {
        let (catalog, registry) = load_units(&[furlong()]).unwrap();
        assert_eq!(catalog.canonicalize("furlongs").unwrap(), "furlong");
        assert_eq!(catalog.category_of("furlong").unwrap(), UnitCategory::Length);
        assert!(catalog.units_in_category(UnitCategory::Length).contains(&"furlong"));
        assert!((registry.convert(1.0, "mi", "furlong").unwrap() - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_custom_unit_category_mismatch() {
        let mut unit = furlong();
        unit.category = UnitCategory::Mass;
        let err = load_units(&[unit]).unwrap_err();
        assert!(matches!(err, ConfigError::CustomUnit { .. }));
    }

    #[test]
    fn test_custom_unit_clashing_with_builtin() {
        let mut unit = furlong();
        unit.symbol = "ft".to_string();
        assert!(load_units(&[unit]).is_err());
    }
}
