//! podverse - search, filter and sort a podcast catalog
//!
//! The core is [`executor::query`]: a pure function from a catalog and a
//! [`query::Query`] to an ordered list of records. Everything else loads
//! catalogs, resolves media and exposes the engine on the command line.

pub mod catalog;
pub mod cli;
pub mod executor;
pub mod media;
pub mod observability;
pub mod query;
