//! CLI module for podverse
//!
//! Provides command-line interface for:
//! - query: One-shot query from flags
//! - serve: JSON query per stdin line, JSON response per stdout line
//! - embed: Resolve a record's embeddable player URL
//! - catalog: Print the loaded catalog

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command, FilterArgs};
pub use commands::{catalog, embed, query, run, run_command, serve, Session};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{error_envelope, ok_envelope, write_error, write_response};
