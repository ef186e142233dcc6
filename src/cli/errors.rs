//! CLI-specific error types
//!
//! Any CLI error ends the process with a non-zero exit code.

use std::fmt;
use std::io;

use crate::catalog::CatalogError;
use crate::media::MediaError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// I/O error (stdin/stdout)
    IoError,
    /// Catalog could not be loaded
    CatalogError,
    /// No record with the requested id
    RecordNotFound,
    /// Media URL could not be resolved
    MediaError,
}

impl CliErrorCode {
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "PODVERSE_CLI_CONFIG_ERROR",
            Self::IoError => "PODVERSE_CLI_IO_ERROR",
            Self::CatalogError => "PODVERSE_CLI_CATALOG_ERROR",
            Self::RecordNotFound => "PODVERSE_CLI_RECORD_NOT_FOUND",
            Self::MediaError => "PODVERSE_CLI_MEDIA_ERROR",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    pub fn record_not_found(id: &str) -> Self {
        Self::new(
            CliErrorCode::RecordNotFound,
            format!("No record with id '{}'", id),
        )
    }

    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

impl From<CatalogError> for CliError {
    fn from(e: CatalogError) -> Self {
        Self::new(CliErrorCode::CatalogError, e.to_string())
    }
}

impl From<MediaError> for CliError {
    fn from(e: MediaError) -> Self {
        Self::new(CliErrorCode::MediaError, e.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
