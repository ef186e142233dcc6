//! Observable events
//!
//! Events are explicit and typed; the string form is what appears in the
//! `event` field of a log line.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Configuration file read and validated
    ConfigLoaded,
    /// Catalog loaded (file or built-in sample)
    CatalogLoaded,
    /// Catalog failed to load
    CatalogLoadFailed,
    /// A query ran to completion
    QueryExecuted,
    /// A request contained values that were replaced by fallbacks
    QueryDegraded,
    /// A media URL was resolved to an embed URL
    EmbedResolved,
    /// Line-oriented serving started
    ServeStart,
    /// Line-oriented serving finished
    ServeComplete,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::CatalogLoaded => "CATALOG_LOADED",
            Event::CatalogLoadFailed => "CATALOG_LOAD_FAILED",
            Event::QueryExecuted => "QUERY_EXECUTED",
            Event::QueryDegraded => "QUERY_DEGRADED",
            Event::EmbedResolved => "EMBED_RESOLVED",
            Event::ServeStart => "SERVE_START",
            Event::ServeComplete => "SERVE_COMPLETE",
        }
    }

    /// Whether the event means the process cannot continue
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::CatalogLoadFailed)
    }

    /// Whether the event reports degraded input
    pub fn is_warning(&self) -> bool {
        matches!(self, Event::QueryDegraded)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
