//! Query executor for podverse
//!
//! Executes a query against a catalog, producing deterministic results.
//!
//! Execution flow (strict order):
//! 1. Evaluate predicates on each record, in catalog order
//! 2. Keep matching records, preserving their relative order
//! 3. Apply the stable sort selected by the query
//! 4. Return ordered results
//!
//! The executor never mutates the catalog and holds no state between calls.

use crate::catalog::Record;
use crate::query::Query;

use super::filters::PredicateFilter;
use super::result::ExecutionResult;
use super::sorter::ResultSorter;

/// Query executor over a borrowed catalog
#[derive(Debug, Clone, Copy)]
pub struct QueryExecutor<'a> {
    catalog: &'a [Record],
}

impl<'a> QueryExecutor<'a> {
    /// Creates a new executor
    pub fn new(catalog: &'a [Record]) -> Self {
        Self { catalog }
    }

    /// Executes a query and returns results.
    ///
    /// This method is deterministic: same catalog + same query = same results.
    pub fn execute(&self, query: &Query) -> ExecutionResult<'a> {
        let mut records = self.filter(query);

        ResultSorter::sort(&mut records, query.sort);

        ExecutionResult {
            scanned_count: self.catalog.len(),
            returned_count: records.len(),
            records,
        }
    }

    /// Applies the query's predicates without sorting.
    ///
    /// The output is in catalog order.
    pub fn filter(&self, query: &Query) -> Vec<&'a Record> {
        let predicates = PredicateFilter::new(query);

        self.catalog
            .iter()
            .filter(|record| predicates.matches(record))
            .collect()
    }
}

/// Runs a query against a catalog and returns the ordered matching records.
pub fn query<'a>(catalog: &'a [Record], query: &Query) -> Vec<&'a Record> {
    QueryExecutor::new(catalog).execute(query).into_records()
}
