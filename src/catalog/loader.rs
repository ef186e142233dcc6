//! Catalog loader for reading a catalog file at startup
//!
//! The file is a single JSON array of records. Any unreadable file,
//! malformed record or duplicate id fails the load.

use std::fs;
use std::path::PathBuf;

use super::catalog::Catalog;
use super::errors::{CatalogError, CatalogResult};
use super::types::Record;

/// Reads and validates a catalog file.
pub struct CatalogLoader {
    path: PathBuf,
}

impl CatalogLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loads the catalog file.
    pub fn load(&self) -> CatalogResult<Catalog> {
        let display = self.path.display().to_string();

        let content =
            fs::read_to_string(&self.path).map_err(|e| CatalogError::io(&display, e.to_string()))?;

        Self::parse(&display, &content)
    }

    /// Parses catalog JSON held in memory. `origin` names the source in errors.
    pub fn parse(origin: &str, content: &str) -> CatalogResult<Catalog> {
        let records: Vec<Record> = serde_json::from_str(content)
            .map_err(|e| CatalogError::invalid_json(origin, e.to_string()))?;

        Catalog::from_records(records)
    }
}
