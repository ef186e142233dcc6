//! Observability subsystem for podverse
//!
//! - Structured logging (one JSON object per line, on stderr)
//! - Typed lifecycle events
//! - Query counters
//!
//! The query engine itself never logs. Callers log around it.
//!
//! ```ignore
//! use podverse::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::QueryExecuted, &[("returned", "3")]);
//! ```

mod events;
mod logger;
mod metrics;

pub use events::Event;
pub use logger::{format_line, Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};

/// Log a lifecycle event
pub fn log_event(event: Event) {
    log_event_with_fields(event, &[]);
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(severity_for(event), event.as_str(), fields);
}

fn severity_for(event: Event) -> Severity {
    if event.is_fatal() {
        Severity::Fatal
    } else if event.is_warning() {
        Severity::Warn
    } else {
        Severity::Info
    }
}
