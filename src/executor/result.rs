//! Result types for query execution

use serde::Serialize;

use crate::catalog::Record;

/// Result of query execution.
///
/// Borrows records from the catalog; the vector itself is owned by the
/// result and independent of any caller buffer.
#[derive(Debug, Clone, Serialize)]
pub struct ExecutionResult<'a> {
    /// Records in result order
    pub records: Vec<&'a Record>,
    /// Number of catalog records evaluated
    pub scanned_count: usize,
    /// Number of records returned
    pub returned_count: usize,
}

impl<'a> ExecutionResult<'a> {
    /// Creates an empty result
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
            scanned_count: 0,
            returned_count: 0,
        }
    }

    /// Returns true if no records matched
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the number of results
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns an iterator over the records
    pub fn iter(&self) -> impl Iterator<Item = &'a Record> + '_ {
        self.records.iter().copied()
    }

    /// Record ids in result order
    pub fn ids(&self) -> Vec<&'a str> {
        self.records.iter().map(|r| r.id.as_str()).collect()
    }

    pub fn into_records(self) -> Vec<&'a Record> {
        self.records
    }
}
