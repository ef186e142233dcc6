//! Metrics registry for podverse
//!
//! Counters only, monotonic, reset on process start.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Query counters.
///
/// Relaxed ordering: counters are independent and only read for reporting.
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    queries_executed: AtomicU64,
    queries_degraded: AtomicU64,
    records_scanned: AtomicU64,
    records_returned: AtomicU64,
}

impl MetricsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one completed query
    pub fn record_query(&self, scanned: usize, returned: usize) {
        self.queries_executed.fetch_add(1, Ordering::Relaxed);
        self.records_scanned.fetch_add(scanned as u64, Ordering::Relaxed);
        self.records_returned.fetch_add(returned as u64, Ordering::Relaxed);
    }

    pub fn increment_degraded(&self) {
        self.queries_degraded.fetch_add(1, Ordering::Relaxed);
    }

    pub fn queries_executed(&self) -> u64 {
        self.queries_executed.load(Ordering::Relaxed)
    }

    /// Point-in-time copy of every counter
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            queries_executed: self.queries_executed.load(Ordering::Relaxed),
            queries_degraded: self.queries_degraded.load(Ordering::Relaxed),
            records_scanned: self.records_scanned.load(Ordering::Relaxed),
            records_returned: self.records_returned.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub queries_executed: u64,
    pub queries_degraded: u64,
    pub records_scanned: u64,
    pub records_returned: u64,
}

impl MetricsSnapshot {
    /// Log-field form of the snapshot
    pub fn fields(&self) -> [(&'static str, String); 4] {
        [
            ("queries_executed", self.queries_executed.to_string()),
            ("queries_degraded", self.queries_degraded.to_string()),
            ("records_scanned", self.records_scanned.to_string()),
            ("records_returned", self.records_returned.to_string()),
        ]
    }
}
