//! CLI argument definitions using clap
//!
//! Commands:
//! - podverse query [filters...]
//! - podverse serve
//! - podverse embed --id <id>
//! - podverse catalog

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::query::QueryRequest;

/// PodVerse - search, filter and sort a podcast catalog
#[derive(Parser, Debug)]
#[command(name = "podverse")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a single query and print the results
    Query {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Read one JSON query per stdin line and answer each on stdout
    Serve {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Resolve the embeddable player URL for a record
    Embed {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Record id
        #[arg(long)]
        id: String,
    },

    /// Print the loaded catalog
    Catalog {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

/// Query filters as command-line flags
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Free-text search over title, creator and description
    #[arg(long, default_value = "")]
    pub search: String,

    /// Topic to include (repeatable)
    #[arg(long = "topic")]
    pub topics: Vec<String>,

    /// Language to include (repeatable)
    #[arg(long = "language")]
    pub languages: Vec<String>,

    /// Duration bucket: any, short, medium, long
    #[arg(long)]
    pub duration: Option<String>,

    /// Only podcasts with subtitles
    #[arg(long)]
    pub subtitles: bool,

    /// Sort order: popularity, duration, recent, title
    #[arg(long)]
    pub sort: Option<String>,
}

impl FilterArgs {
    /// Converts flags into the wire request
    pub fn to_request(&self) -> QueryRequest {
        QueryRequest {
            search: self.search.clone(),
            topics: self.topics.clone(),
            languages: self.languages.clone(),
            duration: self.duration.clone(),
            subtitles: self.subtitles.then_some(true),
            sort: self.sort.clone(),
        }
    }
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
