//! Catalog error types
//!
//! Error codes:
//! - PODVERSE_CATALOG_IO
//! - PODVERSE_CATALOG_INVALID_JSON
//! - PODVERSE_CATALOG_MALFORMED_RECORD
//! - PODVERSE_CATALOG_DUPLICATE_ID
//!
//! All catalog errors surface at load time. A catalog that fails to load is
//! never queried.

use std::fmt;

/// Catalog-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogErrorCode {
    /// Catalog file could not be read
    Io,
    /// Catalog file is not a JSON array of records
    InvalidJson,
    /// A record is missing required content
    MalformedRecord,
    /// Two records share an id
    DuplicateId,
}

impl CatalogErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            CatalogErrorCode::Io => "PODVERSE_CATALOG_IO",
            CatalogErrorCode::InvalidJson => "PODVERSE_CATALOG_INVALID_JSON",
            CatalogErrorCode::MalformedRecord => "PODVERSE_CATALOG_MALFORMED_RECORD",
            CatalogErrorCode::DuplicateId => "PODVERSE_CATALOG_DUPLICATE_ID",
        }
    }
}

impl fmt::Display for CatalogErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Catalog error with context
#[derive(Debug)]
pub struct CatalogError {
    code: CatalogErrorCode,
    message: String,
    /// Offending record id, when one is known
    record_id: Option<String>,
}

impl CatalogError {
    pub fn io(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            code: CatalogErrorCode::Io,
            message: format!("Failed to read catalog '{}': {}", path.into(), reason.into()),
            record_id: None,
        }
    }

    pub fn invalid_json(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            code: CatalogErrorCode::InvalidJson,
            message: format!("Invalid catalog JSON in '{}': {}", path.into(), reason.into()),
            record_id: None,
        }
    }

    /// Record failed structural validation
    pub fn malformed_record(index: usize, reason: impl Into<String>) -> Self {
        Self {
            code: CatalogErrorCode::MalformedRecord,
            message: format!("Malformed record at position {}: {}", index, reason.into()),
            record_id: None,
        }
    }

    pub fn duplicate_id(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            code: CatalogErrorCode::DuplicateId,
            message: format!("Duplicate record id '{}'", id),
            record_id: Some(id),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> CatalogErrorCode {
        self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn record_id(&self) -> Option<&str> {
        self.record_id.as_deref()
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[FATAL] {}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CatalogError {}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
