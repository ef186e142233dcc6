//! Catalog subsystem for podverse
//!
//! Owns the record types and everything needed to get a validated catalog
//! into memory: the file loader and the built-in sample catalog. Display
//! formatting for command output lives here too.
//!
//! Malformed records are rejected here, at load time. The query engine
//! assumes every record it sees is well-formed.

mod catalog;
mod display;
mod errors;
mod loader;
mod sample;
mod types;

pub use catalog::Catalog;
pub use display::{format_duration, format_views, RecordView};
pub use errors::{CatalogError, CatalogErrorCode, CatalogResult};
pub use loader::CatalogLoader;
pub use sample::{sample_catalog, sample_records};
pub use types::{Language, Record, Topic};
