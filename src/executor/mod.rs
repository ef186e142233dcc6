//! Query Executor subsystem for podverse
//!
//! The executor maps (catalog, query) to an ordered result list.
//!
//! # Execution Flow (strict order)
//!
//! 1. Predicate evaluation (text, topic, language, duration, subtitles)
//! 2. Stage composition: keep records passing every predicate, in catalog order
//! 3. Ordering: one stable comparator chosen by the sort key
//!
//! # Guarantees
//!
//! - Pure: no I/O, no logging, no mutation of the catalog
//! - Deterministic: same inputs give the same output
//! - Total: every well-formed query produces a result

mod executor;
mod filters;
mod result;
mod sorter;

pub use executor::{query, QueryExecutor};
pub use filters::PredicateFilter;
pub use result::ExecutionResult;
pub use sorter::ResultSorter;
