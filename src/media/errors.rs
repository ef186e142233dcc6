//! # Media Errors

use thiserror::Error;

/// Result type for media operations
pub type MediaResult<T> = Result<T, MediaError>;

/// Media resolution errors
#[derive(Debug, Clone, Error)]
pub enum MediaError {
    #[error("Unrecognized media URL: {0}")]
    UnrecognizedUrl(String),

    #[error("Invalid video id pattern: {0}")]
    InvalidPattern(String),
}

impl MediaError {
    /// Returns the error code string
    pub fn code(&self) -> &'static str {
        match self {
            MediaError::UnrecognizedUrl(_) => "PODVERSE_MEDIA_UNRECOGNIZED_URL",
            MediaError::InvalidPattern(_) => "PODVERSE_MEDIA_INVALID_PATTERN",
        }
    }
}
