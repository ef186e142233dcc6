//! Configuration file
//!
//! A single JSON object. Every field is optional; running without a config
//! file is the same as loading `{}`.
//!
//! ```json
//! {
//!   "catalog_path": "./catalog.json",
//!   "default_sort": "Popularity",
//!   "log_queries": true
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::{sample_catalog, Catalog, CatalogLoader};
use crate::query::SortKey;

use super::errors::{CliError, CliResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Catalog file; the built-in sample catalog when absent
    #[serde(default)]
    pub catalog_path: Option<String>,

    /// Sort applied when a request names none
    #[serde(default = "default_sort_label")]
    pub default_sort: String,

    /// Emit a QUERY_EXECUTED log line per query
    #[serde(default = "default_log_queries")]
    pub log_queries: bool,
}

fn default_sort_label() -> String {
    SortKey::Popularity.label().to_string()
}

fn default_log_queries() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            default_sort: default_sort_label(),
            log_queries: default_log_queries(),
        }
    }
}

impl Config {
    /// Loads and validates a configuration file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        Self::parse(&content)
    }

    /// Loads `path` if given, otherwise returns defaults
    pub fn load_optional(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn parse(content: &str) -> CliResult<Self> {
        let config: Config = serde_json::from_str(content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Unlike query labels, config labels are checked strictly.
    fn validate(&self) -> CliResult<()> {
        self.sort_key()?;

        if let Some(path) = &self.catalog_path {
            if path.trim().is_empty() {
                return Err(CliError::config_error("catalog_path must not be empty"));
            }
        }

        Ok(())
    }

    /// The configured default sort
    pub fn sort_key(&self) -> CliResult<SortKey> {
        SortKey::from_label(&self.default_sort).ok_or_else(|| {
            CliError::config_error(format!(
                "Invalid default_sort: '{}'. Must be one of Popularity, Duration, Recent, Title A-Z.",
                self.default_sort
            ))
        })
    }

    pub fn catalog_path(&self) -> Option<PathBuf> {
        self.catalog_path.as_ref().map(PathBuf::from)
    }

    /// Loads the configured catalog
    pub fn load_catalog(&self) -> CliResult<Catalog> {
        match self.catalog_path() {
            Some(path) => Ok(CatalogLoader::new(path).load()?),
            None => Ok(sample_catalog()?),
        }
    }
}
